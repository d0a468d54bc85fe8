//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the guard works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// User-facing rejection messages, one per non-clean classification.
///
/// An empty string means "not configured" and falls back to the generic
/// message at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_suspicious")]
    pub suspicious: String,
    #[serde(default = "default_gibberish")]
    pub gibberish: String,
    #[serde(default = "default_unreadable")]
    pub unreadable: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            suspicious: default_suspicious(),
            gibberish: default_gibberish(),
            unreadable: default_unreadable(),
        }
    }
}

/// Which registration fields are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default = "default_true")]
    pub check_screen_name: bool,
    /// Usernames containing `@` are treated as emails and always skipped.
    #[serde(default = "default_true")]
    pub check_username: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            check_screen_name: true,
            check_username: true,
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_suspicious() -> String {
    "Please use a normal name format.".to_string()
}
fn default_gibberish() -> String {
    "Please use a real name or nickname.".to_string()
}
fn default_unreadable() -> String {
    "Please use a readable screen name.".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
