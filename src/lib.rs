//! # nameguard
//!
//! Flags screen names and usernames that look randomly generated rather than
//! chosen by a person, e.g. `xKjLpQrS` or `bcdfghjklm`.
//!
//! ## Usage
//!
//! ```
//! use nameguard::{classify, Classification};
//!
//! assert_eq!(classify("Mary Jane"), Classification::Clean);
//! assert_eq!(classify("xKjLpQrS"), Classification::Suspicious);
//! ```
//!
//! For sign-up forms, [`NameGuard`] checks the screen name and username of a
//! submission and resolves the rejection message shown to the user.

pub mod classifier;
pub mod config;
pub mod logging;
pub mod messages;
pub mod registration;

pub use classifier::{
    classify, evaluate, Classification, ClassificationResult, NormalizedLetters, Rule, RULES,
};
pub use config::AppConfig;
pub use messages::{rejection_message, MessageResolver, FALLBACK_MESSAGE};
pub use registration::{Fallback, Field, FieldSource, NameGuard, Rejection};
