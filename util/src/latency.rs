//! Simulated network latency.
//!
//! Every mock request awaits [`delay`] before it settles so that callers see
//! realistic loading states. There is no cancellation: once awaited, the
//! delay always runs to completion unless the future itself is dropped.

use crate::config::AppConfig;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// How long a simulated request should take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    /// Drawn uniformly from the configured `[min, max)` window on every call.
    #[default]
    Random,
    /// Always exactly this long.
    Fixed(Duration),
}

impl Latency {
    pub fn fixed_ms(ms: u64) -> Self {
        Latency::Fixed(Duration::from_millis(ms))
    }

    /// Suspends for this latency and returns the duration actually used.
    pub async fn wait(self) -> Duration {
        let duration = self.resolve();
        sleep(duration).await;
        duration
    }

    fn resolve(self) -> Duration {
        match self {
            Latency::Fixed(duration) => duration,
            Latency::Random => {
                let (min, max) = {
                    let cfg = AppConfig::global();
                    (cfg.mock_min_delay_ms, cfg.mock_max_delay_ms)
                };
                Duration::from_millis(pick_delay(min, max))
            }
        }
    }
}

/// Samples a delay in milliseconds from the half-open interval `[min, max)`.
///
/// An empty interval (`max <= min`) yields `min`.
pub fn pick_delay(min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    rand::rng().random_range(min..max)
}

/// Waits `ms` milliseconds, or a random configured interval when `None`.
///
/// `Some(0)` is honoured as an immediate (zero-length) delay.
pub async fn delay(ms: Option<u64>) -> Duration {
    let latency = match ms {
        Some(ms) => Latency::fixed_ms(ms),
        None => Latency::Random,
    };
    let duration = latency.wait().await;
    tracing::trace!(delay_ms = duration.as_millis() as u64, "simulated latency elapsed");
    duration
}
