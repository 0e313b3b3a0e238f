pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        search_users_query::SearchUsersQuery,
        user_dto::UserDto,
        user_request::UserRequest,
        users::{create_user, get_user, list_users, search_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
