use axum::{extract::State, Json};

use crate::{api_error::ApiError, app_state::SharedState, purge_response::PurgeResponse};

pub struct AdminController {}

impl AdminController {
    pub async fn purge(State(state): State<SharedState>) -> Result<Json<PurgeResponse>, ApiError> {
        let count = state.data_context.purge_deleted()?;
        tracing::info!(count, "purged soft-deleted todos");
        Ok(Json(PurgeResponse {
            message: "Purged deleted TODOs".to_string(),
            count,
        }))
    }
}
