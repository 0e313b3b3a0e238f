//! User entity - a registered account.

use crate::UserFields;

use serde::{Deserialize, Serialize};

/// A persisted user account.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// The remaining fields are always held in canonical form (see
/// [`UserFields::normalized`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Lowercased and trimmed; unique across all users
    pub email: String,
}

impl User {
    /// Build a user from a stored id and an already canonical field set
    pub fn new(id: i64, fields: UserFields) -> Self {
        let UserFields {
            first_name,
            last_name,
            email,
        } = fields;

        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, fields: UserFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
    }
}
