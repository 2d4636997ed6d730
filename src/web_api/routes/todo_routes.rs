use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{
    app_state::AppState, authentication::auth::auth_middleware, todo_controller::TodoController,
};

pub const ROUTER_PATH: &str = "/todos";

pub fn get_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            post(TodoController::create).get(TodoController::get_all),
        )
        .route(
            format!("{}/bulk", ROUTER_PATH).as_str(),
            post(TodoController::create_bulk),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TodoController::get)
                .put(TodoController::edit)
                .delete(TodoController::delete),
        )
        .route(
            format!("{}/:id/complete", ROUTER_PATH).as_str(),
            post(TodoController::complete),
        )
        .route(
            format!("{}/:id/reopen", ROUTER_PATH).as_str(),
            post(TodoController::reopen),
        )
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state)
}
