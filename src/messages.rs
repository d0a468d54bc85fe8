//! Rejection message lookup.
//!
//! The classifier only reports a category. Turning that into text a user
//! sees is the resolver's job, with a generic fallback when nothing is
//! configured for the category.

use crate::classifier::Classification;
use crate::config::MessagesConfig;
use std::collections::HashMap;

/// Shown when no message is configured for a category.
pub const FALLBACK_MESSAGE: &str = "Please use a valid screen name.";

/// Maps a non-clean classification to user-facing text.
pub trait MessageResolver {
    /// `None` or an empty string means "not configured".
    fn resolve(&self, classification: Classification) -> Option<String>;
}

impl MessageResolver for MessagesConfig {
    fn resolve(&self, classification: Classification) -> Option<String> {
        let msg = match classification {
            Classification::Clean => return None,
            Classification::Suspicious => &self.suspicious,
            Classification::Gibberish => &self.gibberish,
            Classification::Unreadable => &self.unreadable,
        };
        Some(msg.clone())
    }
}

/// Lookup table keyed by localization key (`nameguard_gibberish_name`, ...).
impl MessageResolver for HashMap<String, String> {
    fn resolve(&self, classification: Classification) -> Option<String> {
        self.get(classification.message_key()?).cloned()
    }
}

impl<F> MessageResolver for F
where
    F: Fn(Classification) -> Option<String>,
{
    fn resolve(&self, classification: Classification) -> Option<String> {
        self(classification)
    }
}

/// The message to show for `classification`, or `None` if it is clean.
pub fn rejection_message<R>(resolver: &R, classification: Classification) -> Option<String>
where
    R: MessageResolver + ?Sized,
{
    if classification.is_clean() {
        return None;
    }
    match resolver.resolve(classification) {
        Some(msg) if !msg.is_empty() => Some(msg),
        _ => Some(FALLBACK_MESSAGE.to_string()),
    }
}
