//! Generic mock request handler.

use crate::error::MockError;
use crate::response::ApiResponse;
use util::latency::{Latency, delay};

/// Settings for a simulated request: how long it takes and whether it fails.
///
/// The default waits a random configured latency and succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockRequest {
    pub latency: Latency,
    pub should_fail: bool,
}

impl MockRequest {
    pub fn new(latency: Latency, should_fail: bool) -> Self {
        Self { latency, should_fail }
    }

    pub fn failing(self) -> Self {
        Self {
            should_fail: true,
            ..self
        }
    }

    /// Waits out the latency, then wraps `data` in a success envelope or
    /// fails with [`MockError::Simulated`].
    ///
    /// The wait happens on both paths.
    pub async fn send<T>(self, data: T) -> Result<ApiResponse<T>, MockError> {
        let waited = self.latency.wait().await;
        settle(data, self.should_fail, waited.as_millis() as u64)
    }
}

/// Simulates an API call returning `data`, using a random configured latency.
pub async fn mock_request<T>(data: T, should_fail: bool) -> Result<ApiResponse<T>, MockError> {
    let waited = delay(None).await;
    settle(data, should_fail, waited.as_millis() as u64)
}

fn settle<T>(data: T, should_fail: bool, delay_ms: u64) -> Result<ApiResponse<T>, MockError> {
    if should_fail {
        tracing::warn!(delay_ms, "mock request failed on purpose");
        return Err(MockError::Simulated);
    }

    tracing::debug!(delay_ms, "mock request succeeded");
    Ok(ApiResponse::success(data))
}
