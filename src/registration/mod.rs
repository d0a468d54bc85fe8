//! Registration hook.
//!
//! Checks the name fields of a sign-up submission and rejects it on the
//! first field that classifies as anything other than clean. Later fields
//! are not checked once one has been rejected.

pub mod source;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::classifier::{self, Classification};
use crate::config::{AppConfig, MessagesConfig, RegistrationConfig};
use crate::messages::{rejection_message, MessageResolver, FALLBACK_MESSAGE};

pub use source::{Fallback, FieldSource};

/// A registration field the guard knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ScreenName,
    Username,
}

impl Field {
    /// Checked in this order.
    pub const ALL: [Field; 2] = [Field::ScreenName, Field::Username];

    pub fn key(self) -> &'static str {
        match self {
            Field::ScreenName => "screen_name",
            Field::Username => "username",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A submission was refused because one of its names looks generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Rejection {
    pub field: Field,
    pub value: String,
    pub classification: Classification,
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Resolved user-facing text.
    pub message: String,
}

/// Screens registration submissions.
#[derive(Debug, Clone)]
pub struct NameGuard<R = MessagesConfig> {
    resolver: R,
    settings: RegistrationConfig,
}

impl NameGuard<MessagesConfig> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.messages.clone(), config.registration.clone())
    }
}

impl Default for NameGuard<MessagesConfig> {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl<R: MessageResolver> NameGuard<R> {
    pub fn new(resolver: R, settings: RegistrationConfig) -> Self {
        Self { resolver, settings }
    }

    /// The field values that will be classified, in checking order.
    ///
    /// Empty values are skipped, and so are usernames that contain `@`:
    /// those are email logins and never shown as a name.
    pub fn fields_to_check<S>(&self, source: &S) -> Vec<(Field, String)>
    where
        S: FieldSource + ?Sized,
    {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::ScreenName => self.settings.check_screen_name,
                Field::Username => self.settings.check_username,
            })
            .filter_map(|field| {
                let value = source.field(field.key())?;
                if value.is_empty() {
                    return None;
                }
                if field == Field::Username && value.contains('@') {
                    return None;
                }
                Some((field, value))
            })
            .collect()
    }

    /// Accept or reject a submission. Stops at the first flagged field.
    pub fn check_submission<S>(&self, source: &S) -> Result<(), Rejection>
    where
        S: FieldSource + ?Sized,
    {
        for (field, value) in self.fields_to_check(source) {
            let Some(rule) = classifier::evaluate(&value) else {
                continue;
            };
            let message = rejection_message(&self.resolver, rule.verdict)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            tracing::debug!(
                field = field.key(),
                rule = rule.name,
                classification = %rule.verdict,
                "rejected registration name"
            );
            return Err(Rejection {
                field,
                value,
                classification: rule.verdict,
                rule: rule.name,
                message,
            });
        }
        Ok(())
    }

    /// Host-style hook: append the rejection message, if any, to `errors`.
    pub fn validate_into<S>(&self, source: &S, errors: &mut Vec<String>)
    where
        S: FieldSource + ?Sized,
    {
        if let Err(rejection) = self.check_submission(source) {
            errors.push(rejection.message);
        }
    }
}
