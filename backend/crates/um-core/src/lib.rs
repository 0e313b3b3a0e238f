pub mod canonical;
pub mod error;
pub mod models;


pub use canonical::{canonical_email, canonical_name};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::user::User;
pub use models::user_fields::UserFields;

/// Column length shared by `first_name`, `last_name` and `email`.
pub const MAX_FIELD_LENGTH: usize = 255;
