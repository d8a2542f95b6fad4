//! Row types and their JSON shapes
//!
//! Field order here is the key order clients see.

use serde::Serialize;

/// A registered user; the password is stored but never serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub diameter: i64,
    pub population: i64,
}

/// Writable planet columns, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetFields {
    pub name: String,
    pub diameter: i64,
    pub population: i64,
}

/// A character; the table is `people`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub age: i64,
    pub height: i64,
}

/// A user's favorite planet or character
///
/// Exactly one of `planets_id` and `people_id` is set. Both are always
/// serialized (the unset one as `null`); the favorites endpoint prunes the
/// null before responding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub id: i64,
    pub planets_id: Option<i64>,
    pub people_id: Option<i64>,
    pub user_id: i64,
}

/// What a new favorite points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Person(i64),
}

impl FavoriteTarget {
    /// `(planets_id, people_id)` column values
    pub fn columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Person(id) => (None, Some(id)),
        }
    }
}
