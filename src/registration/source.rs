//! Where registration field values come from.
//!
//! The host decides how a field is read (form body, member record, test
//! fixture). The guard only asks for a value by field name.

use std::collections::HashMap;

/// Supplies raw field values by name.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<String>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldSource for HashMap<&str, &str> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

impl<F> FieldSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn field(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Reads the submitted value first, then the member record when the
/// submission is missing the field or left it empty.
#[derive(Debug, Clone)]
pub struct Fallback<P, R> {
    pub submitted: P,
    pub record: R,
}

impl<P, R> Fallback<P, R> {
    pub fn new(submitted: P, record: R) -> Self {
        Self { submitted, record }
    }
}

impl<P: FieldSource, R: FieldSource> FieldSource for Fallback<P, R> {
    fn field(&self, name: &str) -> Option<String> {
        match self.submitted.field(name) {
            Some(value) if !value.is_empty() => Some(value),
            _ => self.record.field(name),
        }
    }
}
