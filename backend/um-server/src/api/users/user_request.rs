use crate::{ApiError, ApiResult};

use um_core::UserFields;

use serde::Deserialize;

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// Fields are optional at the serde level so a missing one is reported
/// as a validation error naming the field, not as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl UserRequest {
    /// Canonicalize and validate into a field set ready for the repository
    #[track_caller]
    pub fn into_fields(self) -> ApiResult<UserFields> {
        let first_name = self
            .first_name
            .ok_or_else(|| ApiError::missing_field("firstName"))?;
        let last_name = self
            .last_name
            .ok_or_else(|| ApiError::missing_field("lastName"))?;
        let email = self.email.ok_or_else(|| ApiError::missing_field("email"))?;

        Ok(UserFields::normalized(&first_name, &last_name, &email).validated()?)
    }
}
