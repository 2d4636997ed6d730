use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::todo_status::TodoStatus;

/// A single TODO as stored and as returned by the API. `deleted_at` is a
/// store-internal column and never leaves the data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: i64,
    pub description: String,
    pub due_date_text: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub priority: i64,
    pub status: TodoStatus,
    pub gcal_event_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
