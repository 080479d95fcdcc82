use chrono::{DateTime, Utc};

/// Turns operation parameters into the record the mock service hands back.
///
/// Implementors fill in the service-assigned fields (id, status, timestamps)
/// from `now`.
pub trait IntoModel<M> {
    fn into_model(self, now: DateTime<Utc>) -> M;
}
