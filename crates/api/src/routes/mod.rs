pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{diagnostics, greeting, search, session, user};
use crate::wrapper::async_wrapper;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello/{name}                                    greeting (GET)
/// /user/{id}                                       user by id (GET)
/// /current-user                                    fixed current user (GET)
/// /mix/{id}?tag=                                   params + body + query (POST)
/// /login                                           issue token (POST)
/// /logout                                          204 (POST)
/// /search?q=                                       echo keyword (GET)
/// /ping                                            204 + x-pong header (POST)
/// /fail                                            always 500 (GET)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .route("/hello/{name}", get(async_wrapper(greeting::hello)))
        .route("/user/{id}", get(async_wrapper(user::get_user)))
        .route("/current-user", get(async_wrapper(user::current_user)))
        .route("/mix/{id}", post(async_wrapper(user::mix)))
        .route("/login", post(async_wrapper(session::login)))
        .route("/logout", post(async_wrapper(session::logout)))
        .route("/search", get(async_wrapper(search::search)))
        .route("/ping", post(async_wrapper(diagnostics::ping)))
        .route("/fail", get(async_wrapper(diagnostics::fail)))
}
