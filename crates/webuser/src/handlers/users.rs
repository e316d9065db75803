//! User record handlers.
//!
//! ```text
//! GET  /api/users/{id}
//! GET  /api/users?email=alice@example.com
//! POST /api/users        {"userID":1,"alias":"alice","email":"alice@example.com","password":"..."}
//! PUT  /api/users/{id}   {"alias":"alice","email":"alice@example.com","password":"..."}
//! ```
//!
//! POST and PUT bodies go through [`DecodeJson`], so they may also arrive as
//! a urlencoded form with the JSON in its `data` field.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use webuser_core::user::User;

use crate::{decode::DecodeJson, handlers::AppError, state::AppState};

/// Query parameters for looking a user up by email.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Get a single user by ID (GET /api/users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state.user_repo.get_user(id).await?;
    Ok(Json(user))
}

/// Get the first user with a matching email (GET /api/users?email=...).
pub async fn find_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<User>, AppError> {
    let user = state.user_repo.get_user_by_email(&query.email).await?;
    Ok(Json(user))
}

/// Create a new user (POST /api/users).
pub async fn add_user(
    State(state): State<AppState>,
    DecodeJson(user): DecodeJson<User>,
) -> Result<(StatusCode, Json<User>), AppError> {
    state.user_repo.add_user(&user).await?;

    tracing::info!(user_id = user.user_id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user (PUT /api/users/{id}).
///
/// The id comes from the path; any `userID` in the body is ignored. An
/// unknown id still answers 200.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    DecodeJson(mut user): DecodeJson<User>,
) -> Result<Json<User>, AppError> {
    user.user_id = id;
    state.user_repo.update_user(&user).await?;

    tracing::info!(user_id = id, "Updated user");

    Ok(Json(user))
}
