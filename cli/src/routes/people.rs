use super::{AppState, message};
use crate::db::{Person, PersonFields, people};
use crate::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct PersonBody {
    name: Option<String>,
    age: Option<i64>,
    height: Option<i64>,
}

impl PersonBody {
    fn require(self) -> Result<PersonFields, ApiError> {
        match (self.name, self.age, self.height) {
            (Some(name), Some(age), Some(height)) => Ok(PersonFields { name, age, height }),
            _ => Err(ApiError::MissingFields("name, age and height")),
        }
    }
}

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    tracing::debug!("Listing characters");
    let people = state.store.call(|conn| people::list_people(conn)).await?;
    Ok(Json(people))
}

pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let Path(id) = path?;
    tracing::debug!(person_id = id, "Fetching character");
    let person = state
        .store
        .call(move |conn| people::get_person(conn, id))
        .await?
        .ok_or(ApiError::NotFound("Character"))?;
    Ok(Json(person))
}

pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::debug!("Creating character");
    let Json(body) = payload?;
    let fields = body.require()?;

    let person = state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if people::find_person_by_name(conn, &fields.name)?.is_some() {
                return Err(ApiError::AlreadyExists("character"));
            }
            Ok(people::create_person(conn, &fields)?)
        })
        .await?;

    tracing::info!(person_id = person.id, "Created character {}", person.name);
    Ok(message(StatusCode::CREATED, "Character has been created successfully"))
}

pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PersonBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(id) = path?;
    tracing::debug!(person_id = id, "Updating character");
    let Json(body) = payload?;
    let fields = body.require()?;

    state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if people::get_person(conn, id)?.is_none() {
                return Err(ApiError::NotFound("Character"));
            }
            if let Some(other) = people::find_person_by_name(conn, &fields.name)?
                && other.id != id
            {
                return Err(ApiError::AlreadyExists("character"));
            }
            people::update_person(conn, id, &fields)?.ok_or(ApiError::NotFound("Character"))
        })
        .await?;

    tracing::info!(person_id = id, "Updated character");
    Ok(message(StatusCode::CREATED, "Character has been updated successfully"))
}

pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(id) = path?;
    tracing::debug!(person_id = id, "Deleting character");
    let removed = state
        .store
        .call(move |conn| people::delete_person(conn, id))
        .await?;
    if !removed {
        return Err(ApiError::NotFound("Character"));
    }

    tracing::info!(person_id = id, "Deleted character");
    Ok(message(StatusCode::CREATED, "Character has been deleted successfully"))
}
