use super::models::{Planet, PlanetFields};
use crate::error::StoreError;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn planet_from_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: row.get(0)?,
        name: row.get(1)?,
        diameter: row.get(2)?,
        population: row.get(3)?,
    })
}

pub fn list_planets(conn: &Connection) -> Result<Vec<Planet>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, name, diameter, population FROM planets ORDER BY id ASC")?;
    let planets = stmt
        .query_map([], planet_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(planets)
}

pub fn get_planet(conn: &Connection, id: i64) -> Result<Option<Planet>, StoreError> {
    let planet = conn
        .query_row(
            "SELECT id, name, diameter, population FROM planets WHERE id = ?1",
            params![id],
            planet_from_row,
        )
        .optional()?;
    Ok(planet)
}

pub fn find_planet_by_name(conn: &Connection, name: &str) -> Result<Option<Planet>, StoreError> {
    let planet = conn
        .query_row(
            "SELECT id, name, diameter, population FROM planets WHERE name = ?1",
            params![name],
            planet_from_row,
        )
        .optional()?;
    Ok(planet)
}

pub fn create_planet(conn: &mut Connection, fields: &PlanetFields) -> Result<Planet, StoreError> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO planets (name, diameter, population) VALUES (?1, ?2, ?3)",
        params![&fields.name, fields.diameter, fields.population],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Planet {
        id,
        name: fields.name.clone(),
        diameter: fields.diameter,
        population: fields.population,
    })
}

/// Overwrite a planet's columns; `None` if no planet has `id`
pub fn update_planet(
    conn: &mut Connection,
    id: i64,
    fields: &PlanetFields,
) -> Result<Option<Planet>, StoreError> {
    let tx = conn.transaction()?;
    let changed = tx.execute(
        "UPDATE planets SET name = ?1, diameter = ?2, population = ?3 WHERE id = ?4",
        params![&fields.name, fields.diameter, fields.population, id],
    )?;
    tx.commit()?;

    Ok((changed > 0).then(|| Planet {
        id,
        name: fields.name.clone(),
        diameter: fields.diameter,
        population: fields.population,
    }))
}

/// Delete a planet and the favorites pointing at it; false if absent
pub fn delete_planet(conn: &mut Connection, id: i64) -> Result<bool, StoreError> {
    let tx = conn.transaction()?;
    let removed = tx.execute("DELETE FROM planets WHERE id = ?1", params![id])?;
    tx.commit()?;
    Ok(removed > 0)
}
