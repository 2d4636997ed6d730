use std::sync::Arc;

use axum::{middleware, routing::delete, Router};

use crate::{
    admin_controller::AdminController, app_state::AppState, authentication::auth::auth_middleware,
};

pub const ROUTER_PATH: &str = "/admin";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            format!("{}/purge", ROUTER_PATH).as_str(),
            delete(AdminController::purge),
        )
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state)
}
