//! HTTP routes
//!
//! Every endpoint answers JSON except the sitemap at `/`. Success and
//! failure bodies for mutations are `{"message": "..."}`; reads return the
//! serialized rows.

mod cors;
mod favorites;
mod people;
mod planets;
mod sitemap;
mod users;

use crate::db::Store;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, delete, get};
use axum::{Json, Router, middleware};
use serde_json::{Value, json};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// One documented endpoint, listed on the sitemap
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub methods: &'static str,
    pub path: &'static str,
}

/// Every route the API serves, in sitemap order
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { methods: "GET, POST", path: "/user" },
    Endpoint { methods: "GET, POST", path: "/user/{id}/favorites" },
    Endpoint { methods: "DELETE", path: "/user/{user_id}/favorites/{favorite_id}" },
    Endpoint { methods: "GET, POST", path: "/planets" },
    Endpoint { methods: "GET, PUT, DELETE", path: "/planets/{id}" },
    Endpoint { methods: "GET, POST", path: "/people" },
    Endpoint { methods: "GET, PUT, DELETE", path: "/people/{id}" },
];

/// Build the application router
pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route("/", get(sitemap::sitemap));

    let routes: [(&str, MethodRouter<AppState>); 7] = [
        ("/user", get(users::list_users).post(users::create_user)),
        (
            "/user/{id}/favorites",
            get(favorites::list_favorites).post(favorites::create_favorite),
        ),
        (
            "/user/{user_id}/favorites/{favorite_id}",
            delete(favorites::delete_favorite),
        ),
        ("/planets", get(planets::list_planets).post(planets::create_planet)),
        (
            "/planets/{id}",
            get(planets::get_planet)
                .put(planets::update_planet)
                .delete(planets::delete_planet),
        ),
        ("/people", get(people::list_people).post(people::create_person)),
        (
            "/people/{id}",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        ),
    ];

    // Paths are matched with or without a trailing slash
    for (path, method_router) in routes {
        router = router
            .route(path, method_router.clone())
            .route(&format!("{path}/"), method_router);
    }

    router
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// `{"message": text}` with the given status
pub(crate) fn message(status: StatusCode, text: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": text })))
}
