use super::models::{NewUser, User};
use crate::error::StoreError;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
    })
}

pub fn list_users(conn: &Connection) -> Result<Vec<User>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, email FROM users ORDER BY id ASC")?;
    let users = stmt
        .query_map([], user_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(users)
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, StoreError> {
    let user = conn
        .query_row(
            "SELECT id, email FROM users WHERE email = ?1",
            params![email],
            user_from_row,
        )
        .optional()?;
    Ok(user)
}

pub fn user_exists(conn: &Connection, id: i64) -> Result<bool, StoreError> {
    let found = conn
        .query_row("SELECT 1 FROM users WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

pub fn create_user(conn: &mut Connection, new_user: &NewUser) -> Result<User, StoreError> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO users (email, password, is_active) VALUES (?1, ?2, 1)",
        params![&new_user.email, &new_user.password],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(User {
        id,
        email: new_user.email.clone(),
    })
}
