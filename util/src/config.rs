//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! Setters allow tests to override individual values; `reset()` reloads from the
//! environment.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub seed_data: bool,
    /// Values that were set but malformed, and were replaced by defaults.
    pub fallbacks: Vec<Fallback>,
}

/// An environment value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub key: &'static str,
    pub value: String,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

/// Parses `key` into `T`, falling back to `default` when unset or malformed.
/// Malformed values are recorded in `fallbacks`.
fn parsed_or<T: FromStr>(key: &'static str, default: T, fallbacks: &mut Vec<Fallback>) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(Fallback { key, value: raw });
            default
        }),
        Err(_) => default,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".into(),
            project_name: "grubdash".into(),
            log_level: "api=info,services=info,seeder=info".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            host: "127.0.0.1".into(),
            port: 5000,
            seed_data: true,
            fallbacks: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing values take their defaults; malformed numbers and booleans are
    /// replaced by their defaults and recorded in `fallbacks`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = AppConfig::default();
        let mut fallbacks = Vec::new();

        Self {
            env: var_or("APP_ENV", &defaults.env),
            project_name: var_or("PROJECT_NAME", &defaults.project_name),
            log_level: var_or("LOG_LEVEL", &defaults.log_level),
            log_file: var_or("LOG_FILE", &defaults.log_file),
            log_to_stdout: parsed_or("LOG_TO_STDOUT", defaults.log_to_stdout, &mut fallbacks),
            host: var_or("HOST", &defaults.host),
            port: parsed_or("PORT", defaults.port, &mut fallbacks),
            seed_data: parsed_or("SEED_DATA", defaults.seed_data, &mut fallbacks),
            fallbacks,
        }
    }

    fn instance() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()))
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::instance()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = AppConfig::from_env();
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

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

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_seed_data(value: bool) {
        AppConfig::set_field(|cfg| cfg.seed_data = value);
    }
}

// --- Free accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn seed_data() -> bool {
    AppConfig::global().seed_data
}

pub fn fallbacks() -> Vec<Fallback> {
    AppConfig::global().fallbacks.clone()
}

/// Logs every malformed value the configuration replaced with a default.
///
/// The configuration is read before logging is initialised, so the binary
/// calls this once the subscriber is installed.
pub fn warn_fallbacks() {
    for Fallback { key, value } in fallbacks() {
        tracing::warn!(key, value = %value, "Ignoring malformed configuration value");
    }
}
