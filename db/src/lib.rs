//! In-memory stand-in for the support-desk data layer.
//!
//! Nothing here is persisted: models are plain values, ids are generated on
//! demand and [`fixtures`] fabricates the canned ticket set on every call.

pub mod fixtures;
pub mod models;

pub use models::activities::Model as Activity;
pub use models::tickets::Model as Ticket;

use uuid::Uuid;

/// Generates an opaque, unique record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_opaque_and_unique() {
        let ids: HashSet<String> = (0..500).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 500);
        assert!(ids.iter().all(|id| id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())));
    }
}
