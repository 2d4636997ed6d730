pub mod admin_routes;
pub mod health_routes;
pub mod todo_routes;

use std::sync::Arc;

use axum::Router;

use crate::app_state::AppState;

pub fn map_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(todo_routes::get_router(app_state.clone()))
        .merge(admin_routes::get_router(app_state))
        .merge(health_routes::get_router())
}
