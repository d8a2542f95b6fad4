use super::models::{Person, PersonFields};
use crate::error::StoreError;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        height: row.get(3)?,
    })
}

pub fn list_people(conn: &Connection) -> Result<Vec<Person>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, age, height FROM people ORDER BY id ASC")?;
    let people = stmt
        .query_map([], person_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(people)
}

pub fn get_person(conn: &Connection, id: i64) -> Result<Option<Person>, StoreError> {
    let person = conn
        .query_row(
            "SELECT id, name, age, height FROM people WHERE id = ?1",
            params![id],
            person_from_row,
        )
        .optional()?;
    Ok(person)
}

pub fn find_person_by_name(conn: &Connection, name: &str) -> Result<Option<Person>, StoreError> {
    let person = conn
        .query_row(
            "SELECT id, name, age, height FROM people WHERE name = ?1",
            params![name],
            person_from_row,
        )
        .optional()?;
    Ok(person)
}

pub fn create_person(conn: &mut Connection, fields: &PersonFields) -> Result<Person, StoreError> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO people (name, age, height) VALUES (?1, ?2, ?3)",
        params![&fields.name, fields.age, fields.height],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Person {
        id,
        name: fields.name.clone(),
        age: fields.age,
        height: fields.height,
    })
}

pub fn update_person(
    conn: &mut Connection,
    id: i64,
    fields: &PersonFields,
) -> Result<Option<Person>, StoreError> {
    let tx = conn.transaction()?;
    let changed = tx.execute(
        "UPDATE people SET name = ?1, age = ?2, height = ?3 WHERE id = ?4",
        params![&fields.name, fields.age, fields.height, id],
    )?;
    tx.commit()?;

    Ok((changed > 0).then(|| Person {
        id,
        name: fields.name.clone(),
        age: fields.age,
        height: fields.height,
    }))
}

pub fn delete_person(conn: &mut Connection, id: i64) -> Result<bool, StoreError> {
    let tx = conn.transaction()?;
    let removed = tx.execute("DELETE FROM people WHERE id = ?1", params![id])?;
    tx.commit()?;
    Ok(removed > 0)
}
