//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, SearchUsersQuery, UserDto, UserRequest};

use um_db::DbError;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::{debug, info};

const EMAIL_REGISTERED: &str = "Email already registered";
const EMAIL_IN_USE: &str = "Email already in use";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/users
///
/// Register a new user. The email must not belong to anyone yet.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(req) = payload?;
    let fields = req.into_fields()?;

    if state.users.exists_by_email(&fields.email).await? {
        return Err(ApiError::conflict(EMAIL_REGISTERED));
    }

    // The unique index still catches a concurrent insert of the same email
    let user = state.users.insert(&fields).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => ApiError::conflict(EMAIL_REGISTERED),
        other => ApiError::from(other),
    })?;

    info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users.find_all().await?;

    debug!("Listing {} users", users.len());

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/users/{id}
///
/// Always answered from the store; the response must not be cached.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let user_id: i64 = id.parse()?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(no_store(UserDto::from(user)))
}

/// GET /api/users/search?firstName=&email=
///
/// A miss is a bare 404 with no body.
pub async fn search_users(
    State(state): State<AppState>,
    query: Result<Query<SearchUsersQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let (first_name, email) = query.into_criteria()?;

    match state
        .users
        .find_by_first_name_and_email(&first_name, &email)
        .await?
    {
        Some(user) => Ok(no_store(UserDto::from(user))),
        None => {
            debug!("User search found no match");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// PUT /api/users/{id}
///
/// Replace names and email. The new email may equal the user's own but not
/// another user's.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let user_id: i64 = id.parse()?;
    let Json(req) = payload?;
    let fields = req.into_fields()?;

    let mut user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    if state
        .users
        .exists_by_email_excluding_id(&fields.email, user_id)
        .await?
    {
        return Err(ApiError::conflict(EMAIL_IN_USE));
    }

    user.apply(fields);
    let saved = state.users.update(&user).await?;

    info!("Updated user {}", saved.id);

    Ok(Json(saved.into()))
}

fn no_store(user: UserDto) -> Response {
    ([(header::CACHE_CONTROL, "no-store")], Json(user)).into_response()
}
