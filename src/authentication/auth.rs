use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::{api_error::ApiError, app_state::SharedState};

/// Static bearer-token gate in front of every handler except the liveness
/// check. An absent or malformed header and a present-but-wrong token are
/// distinct outcomes.
pub async fn auth_middleware(
    State(state): State<SharedState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => return Err(ApiError::NotAuthenticated),
    };

    if token != state.settings.api_token {
        return Err(ApiError::InvalidToken);
    }

    Ok(next.run(request).await)
}
