use super::models::{Favorite, FavoriteTarget};
use crate::error::StoreError;
use rusqlite::{Connection, Row, params};

fn favorite_from_row(row: &Row<'_>) -> rusqlite::Result<Favorite> {
    Ok(Favorite {
        id: row.get(0)?,
        planets_id: row.get(1)?,
        people_id: row.get(2)?,
        user_id: row.get(3)?,
    })
}

pub fn list_favorites(conn: &Connection, user_id: i64) -> Result<Vec<Favorite>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, planets_id, people_id, user_id
         FROM favorites
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;
    let favorites = stmt
        .query_map(params![user_id], favorite_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(favorites)
}

pub fn create_favorite(
    conn: &mut Connection,
    user_id: i64,
    target: FavoriteTarget,
) -> Result<Favorite, StoreError> {
    let (planets_id, people_id) = target.columns();

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO favorites (user_id, planets_id, people_id) VALUES (?1, ?2, ?3)",
        params![user_id, planets_id, people_id],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Favorite {
        id,
        planets_id,
        people_id,
        user_id,
    })
}

/// Delete one of `user_id`'s favorites; false if they have none with that id
pub fn delete_favorite(
    conn: &mut Connection,
    user_id: i64,
    favorite_id: i64,
) -> Result<bool, StoreError> {
    let tx = conn.transaction()?;
    let removed = tx.execute(
        "DELETE FROM favorites WHERE id = ?1 AND user_id = ?2",
        params![favorite_id, user_id],
    )?;
    tx.commit()?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{NewUser, PersonFields, PlanetFields};
    use crate::db::{open_in_memory_connection, people, planets, users};

    struct Fixture {
        conn: Connection,
        user_id: i64,
        planet_id: i64,
        person_id: i64,
    }

    fn fixture() -> Fixture {
        let mut conn = open_in_memory_connection().unwrap();
        let user = users::create_user(
            &mut conn,
            &NewUser {
                email: "obiwan@jedi.org".to_string(),
                password: "highground".to_string(),
            },
        )
        .unwrap();
        let planet = planets::create_planet(
            &mut conn,
            &PlanetFields {
                name: "Stewjon".to_string(),
                diameter: 12000,
                population: 1000000,
            },
        )
        .unwrap();
        let person = people::create_person(
            &mut conn,
            &PersonFields {
                name: "Anakin Skywalker".to_string(),
                age: 22,
                height: 188,
            },
        )
        .unwrap();

        Fixture {
            conn,
            user_id: user.id,
            planet_id: planet.id,
            person_id: person.id,
        }
    }

    #[test]
    fn test_create_and_list_in_order() {
        let mut f = fixture();
        let first = create_favorite(&mut f.conn, f.user_id, FavoriteTarget::Planet(f.planet_id))
            .unwrap();
        let second = create_favorite(&mut f.conn, f.user_id, FavoriteTarget::Person(f.person_id))
            .unwrap();

        assert_eq!(first.planets_id, Some(f.planet_id));
        assert_eq!(first.people_id, None);
        assert_eq!(second.people_id, Some(f.person_id));

        let listed = list_favorites(&f.conn, f.user_id).unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_unknown_reference_is_rejected() {
        let mut f = fixture();
        let result = create_favorite(&mut f.conn, f.user_id, FavoriteTarget::Planet(999));
        assert!(result.is_err());
        assert!(list_favorites(&f.conn, f.user_id).unwrap().is_empty());
    }

    #[test]
    fn test_check_constraint_rejects_both_references() {
        let f = fixture();
        let result = f.conn.execute(
            "INSERT INTO favorites (user_id, planets_id, people_id) VALUES (?1, ?2, ?3)",
            params![f.user_id, f.planet_id, f.person_id],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_is_scoped_to_owner() {
        let mut f = fixture();
        let favorite =
            create_favorite(&mut f.conn, f.user_id, FavoriteTarget::Planet(f.planet_id)).unwrap();

        assert!(!delete_favorite(&mut f.conn, f.user_id + 1, favorite.id).unwrap());
        assert!(delete_favorite(&mut f.conn, f.user_id, favorite.id).unwrap());
        assert!(!delete_favorite(&mut f.conn, f.user_id, favorite.id).unwrap());
    }

    #[test]
    fn test_deleting_planet_cascades() {
        let mut f = fixture();
        create_favorite(&mut f.conn, f.user_id, FavoriteTarget::Planet(f.planet_id)).unwrap();
        planets::delete_planet(&mut f.conn, f.planet_id).unwrap();
        assert!(list_favorites(&f.conn, f.user_id).unwrap().is_empty());
    }
}
