mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::db::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(handlers::get_users).post(handlers::create_user),
        )
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
}
