use super::{AppState, message};
use crate::db::{Planet, PlanetFields, planets};
use crate::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

const REQUIRED: &str = "name, population and diameter";

#[derive(Debug, Deserialize)]
pub struct PlanetBody {
    name: Option<String>,
    population: Option<i64>,
    diameter: Option<i64>,
}

impl PlanetBody {
    fn require(self) -> Result<PlanetFields, ApiError> {
        match (self.name, self.population, self.diameter) {
            (Some(name), Some(population), Some(diameter)) => Ok(PlanetFields {
                name,
                diameter,
                population,
            }),
            _ => Err(ApiError::MissingFields(REQUIRED)),
        }
    }
}

pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, ApiError> {
    tracing::debug!("Listing planets");
    let planets = state.store.call(|conn| planets::list_planets(conn)).await?;
    Ok(Json(planets))
}

pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Planet>, ApiError> {
    let Path(id) = path?;
    tracing::debug!(planet_id = id, "Fetching planet");
    let planet = state
        .store
        .call(move |conn| planets::get_planet(conn, id))
        .await?
        .ok_or(ApiError::NotFound("Planet"))?;
    Ok(Json(planet))
}

pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<PlanetBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    tracing::debug!("Creating planet");
    let Json(body) = payload?;
    let fields = body.require()?;

    let planet = state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if planets::find_planet_by_name(conn, &fields.name)?.is_some() {
                return Err(ApiError::AlreadyExists("planet"));
            }
            Ok(planets::create_planet(conn, &fields)?)
        })
        .await?;

    tracing::info!(planet_id = planet.id, "Created planet {}", planet.name);
    Ok(message(StatusCode::CREATED, "Planet has been created successfully"))
}

pub async fn update_planet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PlanetBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(id) = path?;
    tracing::debug!(planet_id = id, "Updating planet");
    let Json(body) = payload?;
    let fields = body.require()?;

    state
        .store
        .call(move |conn| -> Result<_, ApiError> {
            if planets::get_planet(conn, id)?.is_none() {
                return Err(ApiError::NotFound("Planet"));
            }
            // Renaming onto another planet's name would break uniqueness
            if let Some(other) = planets::find_planet_by_name(conn, &fields.name)?
                && other.id != id
            {
                return Err(ApiError::AlreadyExists("planet"));
            }
            planets::update_planet(conn, id, &fields)?.ok_or(ApiError::NotFound("Planet"))
        })
        .await?;

    tracing::info!(planet_id = id, "Updated planet");
    Ok(message(StatusCode::CREATED, "Planet has been updated successfully"))
}

pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Path(id) = path?;
    tracing::debug!(planet_id = id, "Deleting planet");
    let removed = state
        .store
        .call(move |conn| planets::delete_planet(conn, id))
        .await?;
    if !removed {
        return Err(ApiError::NotFound("Planet"));
    }

    tracing::info!(planet_id = id, "Deleted planet");
    Ok(message(StatusCode::CREATED, "Planet has been deleted successfully"))
}
