pub mod search_users_query;
pub mod user_dto;
pub mod user_request;
pub mod users;
