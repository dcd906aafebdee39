use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    api::{ApiState, error::ApiError, views::UserView},
    db::interface::DatabaseError,
    models::{NewUser, new_uuid},
    password,
};

const PASSWORD_TOO_SHORT: &str = "Password too short, use at least 8 characters";
const USERNAME_MISSING: &str = "username missing";
const USERNAME_TAKEN: &str = "username must be unique";

#[derive(Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: String,
}

pub async fn create_user(
    State(state): State<ApiState>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserView>, ApiError> {
    let Json(request) = request?;
    if !password::is_long_enough(&request.password) {
        return Err(ApiError::Validation(PASSWORD_TOO_SHORT));
    }
    let username = match request.username {
        Some(username) if !username.is_empty() => username,
        _ => return Err(ApiError::Validation(USERNAME_MISSING)),
    };

    let user = NewUser {
        username,
        name: request.name,
        password_hash: password::hash_password_blocking(request.password).await?,
    };

    match state.db.create_user(&new_uuid(), &user).await {
        Ok(created) => Ok(Json(created.into())),
        Err(DatabaseError::UniquenessViolation { .. }) => Err(ApiError::Validation(USERNAME_TAKEN)),
        Err(e) => Err(e.into()),
    }
}

pub async fn list_users(State(state): State<ApiState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let mut users = state.db.get_users().await?;
    for user in &mut users {
        user.fetch_notes(state.db.as_ref()).await?;
    }
    Ok(Json(users.into_iter().map(UserView::from).collect()))
}
