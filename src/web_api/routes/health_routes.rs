use axum::{routing::get, Router};

use crate::health_controller::HealthController;

pub const ROUTER_PATH: &str = "/health";

// Liveness check stays outside the auth gate.
pub fn get_router() -> Router {
    Router::new().route(ROUTER_PATH, get(HealthController::get))
}
