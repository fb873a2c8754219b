//! Runtime configuration read from the environment.
//!
//! `main` loads `.env` (desktop dev) or the bundled `assets/config.env`
//! (mobile) into the process environment before calling
//! [`AppConfig::from_env`].

use crate::session::DEFAULT_REPLY_DELAY;
use once_cell::sync::OnceCell;
use std::time::Duration;

pub const REPLY_DELAY_VAR: &str = "VARUNA_REPLY_DELAY_MS";
pub const INITIAL_MESSAGE_VAR: &str = "VARUNA_INITIAL_MESSAGE";

/// Bundled config for mobile builds (iOS/Android)
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },

    #[error("malformed bundled config: {0}")]
    Bundled(#[from] dotenvy::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub reply_delay: Duration,
    pub initial_message: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            initial_message: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let reply_delay = match lookup(REPLY_DELAY_VAR) {
            Some(raw) => parse_delay(&raw)?,
            None => DEFAULT_REPLY_DELAY,
        };
        let initial_message = lookup(INITIAL_MESSAGE_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            reply_delay,
            initial_message,
        })
    }
}

fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay {
            var: REPLY_DELAY_VAR,
            value: raw.to_string(),
        })
}

/// Copies the bundled defaults into the environment without overriding
/// variables that are already set.
pub fn load_bundled() -> Result<(), ConfigError> {
    dotenvy::from_read(BUNDLED_CONFIG.as_bytes())?;
    Ok(())
}

/// Key/value pairs of the bundled config, without touching the environment.
pub fn bundled_entries() -> Result<Vec<(String, String)>, ConfigError> {
    dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes())
        .map(|entry| entry.map_err(ConfigError::from))
        .collect()
}

/// Installs the process-wide config. Later calls are ignored.
pub fn install(config: AppConfig) {
    if APP_CONFIG.set(config).is_err() {
        tracing::warn!("app config already installed; keeping the first one");
    }
}

/// The installed config, or defaults if `install` was never called.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}
