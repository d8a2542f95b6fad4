use super::{AppState, message};
use crate::db::{NewUser, User, users};
use crate::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct UserBody {
    email: Option<String>,
    password: Option<String>,
}

impl UserBody {
    fn require(self) -> Result<NewUser, ApiError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(NewUser { email, password }),
            _ => Err(ApiError::MissingFields("email and password")),
        }
    }
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    tracing::debug!("Listing users");
    let users = state.store.call(|conn| users::list_users(conn)).await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::debug!("Creating user");
    let Json(body) = payload?;
    let new_user = body.require()?;

    let user = state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if users::find_user_by_email(conn, &new_user.email)?.is_some() {
                return Err(ApiError::AlreadyExists("user"));
            }
            Ok(users::create_user(conn, &new_user)?)
        })
        .await?;

    tracing::info!(user_id = user.id, "Created user {}", user.email);
    Ok(message(StatusCode::CREATED, "User has been created successfully"))
}
