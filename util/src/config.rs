//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Lower bound of the simulated request latency when none is configured.
pub const DEFAULT_MIN_DELAY_MS: u64 = 500;

/// Upper bound (exclusive) of the simulated request latency when none is configured.
pub const DEFAULT_MAX_DELAY_MS: u64 = 1500;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub mock_min_delay_ms: u64,
    pub mock_max_delay_ms: u64,
    pub mock_current_user: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default, so this never fails. Numeric values that
    /// do not parse fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: var_or("PROJECT_NAME", "support-desk"),
            log_level: var_or("LOG_LEVEL", "desk=info,services=info"),
            log_file: var_or("LOG_FILE", "desk.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            mock_min_delay_ms: parsed_or("MOCK_MIN_DELAY_MS", DEFAULT_MIN_DELAY_MS),
            mock_max_delay_ms: parsed_or("MOCK_MAX_DELAY_MS", DEFAULT_MAX_DELAY_MS),
            mock_current_user: var_or("MOCK_CURRENT_USER", "JD"),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered rather than propagated; the config holds
    /// plain values only.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    /// Override both latency bounds at once, in milliseconds.
    pub fn set_mock_delay_range(min_ms: u64, max_ms: u64) {
        AppConfig::set_field(|cfg| {
            cfg.mock_min_delay_ms = min_ms;
            cfg.mock_max_delay_ms = max_ms;
        });
    }

    pub fn set_mock_current_user(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.mock_current_user = value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_cover_the_mock_latency_window() {
        AppConfig::reset();
        let cfg = AppConfig::global().clone();
        if env::var("MOCK_MIN_DELAY_MS").is_err() {
            assert_eq!(cfg.mock_min_delay_ms, DEFAULT_MIN_DELAY_MS);
        }
        if env::var("MOCK_MAX_DELAY_MS").is_err() {
            assert_eq!(cfg.mock_max_delay_ms, DEFAULT_MAX_DELAY_MS);
        }
    }

    #[test]
    #[serial]
    fn setters_override_until_reset() {
        AppConfig::set_mock_delay_range(10, 20);
        AppConfig::set_mock_current_user("AB");
        {
            let cfg = AppConfig::global();
            assert_eq!(cfg.mock_min_delay_ms, 10);
            assert_eq!(cfg.mock_max_delay_ms, 20);
            assert_eq!(cfg.mock_current_user, "AB");
        }

        AppConfig::reset();
        assert_eq!(AppConfig::global().clone(), AppConfig::from_env());
    }

    #[test]
    #[serial]
    fn logging_overrides_apply() {
        AppConfig::set_project_name("desk-test");
        AppConfig::set_log_level("services=debug");
        AppConfig::set_log_file("desk-test.log");
        AppConfig::set_log_to_stdout(true);
        {
            let cfg = AppConfig::global();
            assert_eq!(cfg.project_name, "desk-test");
            assert_eq!(cfg.log_level, "services=debug");
            assert_eq!(cfg.log_file, "desk-test.log");
            assert!(cfg.log_to_stdout);
        }
        AppConfig::reset();
    }

    #[test]
    fn unparsable_numbers_fall_back_to_default() {
        assert_eq!(parsed_or("SUPPORT_DESK_TEST_UNSET_VARIABLE", 42u64), 42);
    }
}
