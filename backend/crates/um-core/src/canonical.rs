//! Canonical forms for user fields.
//!
//! Every comparison and every write goes through these helpers, so the
//! stored value and the value used in a lookup always agree.

/// Trim leading and trailing whitespace from a name.
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trim and lowercase an email address.
pub fn canonical_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
