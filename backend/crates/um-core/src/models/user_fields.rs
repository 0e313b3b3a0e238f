//! The mutable part of a user: names and email, without an id.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult, canonical_email, canonical_name};

use std::panic::Location;

use garde::Validate;

/// Canonical field set used for inserts and updates.
///
/// Construct with [`UserFields::normalized`], then call
/// [`UserFields::validated`] before handing it to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserFields {
    #[garde(length(chars, min = 1, max = 255))]
    pub first_name: String,

    #[garde(length(chars, min = 1, max = 255))]
    pub last_name: String,

    #[garde(email, length(chars, min = 1, max = 255))]
    pub email: String,
}

impl UserFields {
    /// Canonicalize raw input: trim both names, trim and lowercase the email.
    pub fn normalized(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: canonical_name(first_name),
            last_name: canonical_name(last_name),
            email: canonical_email(email),
        }
    }

    /// Check the canonical fields.
    ///
    /// A whitespace-only name is empty after canonicalization and is
    /// rejected here. Only the first failing field is reported.
    #[track_caller]
    pub fn validated(self) -> CoreErrorResult<Self> {
        match Validate::validate(&self) {
            Ok(()) => Ok(self),
            Err(report) => {
                let (field, message) = report
                    .iter()
                    .next()
                    .map(|(path, error)| {
                        let field = wire_field_name(&path.to_string());
                        (Some(field.clone()), format!("{field}: {error}"))
                    })
                    .unwrap_or_else(|| (None, report.to_string()));

                Err(CoreError::Validation {
                    message,
                    field,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

/// Field names as the HTTP clients spell them.
fn wire_field_name(path: &str) -> String {
    match path {
        "first_name" => "firstName".to_string(),
        "last_name" => "lastName".to_string(),
        other => other.to_string(),
    }
}
