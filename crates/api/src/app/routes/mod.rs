use axum::{routing::get, Router};

pub mod inventory;
pub mod items;
pub mod session;
pub mod system;

/// Router for every endpoint except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/categories", get(system::categories))
        .nest("/items", items::router())
        .nest("/inventory", inventory::router())
        .nest("/session", session::router())
}
