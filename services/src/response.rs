use serde::{Deserialize, Serialize};

/// Status code carried by every successful mock response.
pub const STATUS_OK: u16 = 200;

/// Message carried by every successful mock response.
pub const MESSAGE_OK: &str = "Success";

/// Standardized envelope returned by every mock service operation.
///
/// ```json
/// {
///   "data": { ... },
///   "status": 200,
///   "message": "Success"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `status` is a numeric status code. Only `200` is ever produced.
/// - `message` provides a human-readable context string.
///
/// Failures are not represented as envelopes; they surface as
/// [`MockError`](crate::MockError) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a `200 / "Success"` envelope.
    pub fn success(data: T) -> Self {
        Self {
            data,
            status: STATUS_OK,
            message: MESSAGE_OK.to_string(),
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Transforms the payload while keeping status and message.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            message: self.message,
        }
    }
}
