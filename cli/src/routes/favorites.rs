use super::{AppState, message};
use crate::db::{FavoriteTarget, favorites, people, planets, users};
use crate::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use holocron_json::{contains_nested_null, into_pruned};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
    planets_id: Option<i64>,
    people_id: Option<i64>,
}

impl FavoriteBody {
    /// Exactly one of the two references must be given
    fn target(self) -> Result<FavoriteTarget, ApiError> {
        match (self.planets_id, self.people_id) {
            (Some(planet_id), None) => Ok(FavoriteTarget::Planet(planet_id)),
            (None, Some(person_id)) => Ok(FavoriteTarget::Person(person_id)),
            _ => Err(ApiError::InvalidFavorite),
        }
    }
}

/// A user's favorites, with the unset reference of each one removed
///
/// An unknown user simply has no favorites.
pub async fn list_favorites(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(user_id) = path?;
    tracing::debug!(user_id, "Listing favorites");
    let favorites = state
        .store
        .call(move |conn| favorites::list_favorites(conn, user_id))
        .await?;

    let pruned = into_pruned(serde_json::to_value(&favorites)?);
    debug_assert!(!contains_nested_null(&pruned));
    Ok(Json(pruned))
}

pub async fn create_favorite(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<FavoriteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(user_id) = path?;
    tracing::debug!(user_id, "Adding favorite");
    let Json(body) = payload?;
    let target = body.target()?;

    let favorite = state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if !users::user_exists(conn, user_id)? {
                return Err(ApiError::NotFound("User"));
            }
            match target {
                FavoriteTarget::Planet(id) if planets::get_planet(conn, id)?.is_none() => {
                    return Err(ApiError::NotFound("Planet"));
                }
                FavoriteTarget::Person(id) if people::get_person(conn, id)?.is_none() => {
                    return Err(ApiError::NotFound("Character"));
                }
                _ => {}
            }
            Ok(favorites::create_favorite(conn, user_id, target)?)
        })
        .await?;

    tracing::info!(user_id, favorite_id = favorite.id, "Added favorite");
    Ok(message(StatusCode::CREATED, "Favorite has been added successfully"))
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path((user_id, favorite_id)) = path?;
    tracing::debug!(user_id, favorite_id, "Deleting favorite");
    let removed = state
        .store
        .call(move |conn| favorites::delete_favorite(conn, user_id, favorite_id))
        .await?;
    if !removed {
        return Err(ApiError::NotFound("Favorite"));
    }

    tracing::info!(user_id, favorite_id, "Deleted favorite");
    Ok(message(StatusCode::CREATED, "Favorite has been deleted successfully"))
}
