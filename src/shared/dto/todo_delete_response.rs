use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TodoDeleteResponse {
    pub message: String,
    pub id: i64,
}
