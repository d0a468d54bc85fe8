//! Screen-name classification.
//!
//! [`classify`] reduces a candidate name to its ASCII letters and runs the
//! heuristics in [`RULES`] in order. The first rule that fires decides the
//! verdict. Classification is a pure function of the input string: no I/O,
//! no shared state, safe to call from any number of threads.

pub mod normalize;
pub mod rules;

use serde::Serialize;
use std::fmt;

pub use normalize::NormalizedLetters;
pub use rules::{Rule, MIN_LETTERS, RULES};

/// Outcome of classifying one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Clean,
    /// Case pattern looks machine-generated.
    Suspicious,
    /// Letter distribution looks random.
    Gibberish,
    /// Contains unpronounceable consonant runs.
    Unreadable,
}

/// Name used by host integrations that expect the result type by this name.
pub type ClassificationResult = Classification;

impl Classification {
    pub fn is_clean(self) -> bool {
        self == Classification::Clean
    }

    /// Localization key for the rejection message, `None` for clean names.
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            Classification::Clean => None,
            Classification::Suspicious => Some("nameguard_suspicious_name"),
            Classification::Gibberish => Some("nameguard_gibberish_name"),
            Classification::Unreadable => Some("nameguard_unreadable_name"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Clean => "clean",
            Classification::Suspicious => "suspicious",
            Classification::Gibberish => "gibberish",
            Classification::Unreadable => "unreadable",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find the first rule that fires for `raw`, if any.
pub fn evaluate(raw: &str) -> Option<&'static Rule> {
    let letters = NormalizedLetters::from_raw(raw);
    if letters.len() < MIN_LETTERS {
        return None;
    }
    RULES.iter().find(|rule| (rule.check)(&letters))
}

/// Classify a candidate screen name or username.
pub fn classify(raw: &str) -> Classification {
    evaluate(raw).map_or(Classification::Clean, |rule| rule.verdict)
}
