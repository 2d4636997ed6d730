use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub message: String,
    pub count: usize,
}
