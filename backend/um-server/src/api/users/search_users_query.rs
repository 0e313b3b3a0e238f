use crate::{ApiError, ApiResult};

use um_core::{canonical_email, canonical_name};

use serde::Deserialize;

/// Query string of `GET /api/users/search`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersQuery {
    pub first_name: Option<String>,
    pub email: Option<String>,
}

impl SearchUsersQuery {
    /// Both parameters are required; returns `(first_name, email)` in
    /// canonical form. Blank values are searched as given.
    #[track_caller]
    pub fn into_criteria(self) -> ApiResult<(String, String)> {
        let first_name = self
            .first_name
            .ok_or_else(|| ApiError::missing_field("firstName"))?;
        let email = self.email.ok_or_else(|| ApiError::missing_field("email"))?;

        Ok((canonical_name(&first_name), canonical_email(&email)))
    }
}
