//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact hides credential material when it is printed with `{:?}`.
///
/// - Empty input prints as `EMPTY`.
/// - Input shorter than 12 characters prints as `***`.
/// - Longer input keeps its first and last three characters so that two
///   different API identifiers can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        match s.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 || !s.is_char_boundary(3) || !s.is_char_boundary(n - 3) => {
                f.write_str("***")
            }
            n => write!(f, "{}***{}", &s[..3], &s[n - 3..]),
        }
    }
}
