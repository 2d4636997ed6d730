use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::api_error::FieldError;

/// Keeps "field present with value null" apart from "field absent". Serde
/// collapses a plain `Option<Option<T>>` to `None` on null, so the outer
/// layer has to be added by hand: absent stays `None` via `default`, and
/// anything present (null included) lands in `Some`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update body. Nullable columns use the two-level Option so a
/// client can clear them with an explicit null; `description` and
/// `priority` are NOT NULL columns, so for them null means "leave as is".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date_text: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    pub priority: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub gcal_event_id: Option<Option<String>>,
}

impl UpdateTodoRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(description) = &self.description {
            if description.is_empty() {
                errors.push(FieldError::new("description", "must not be empty"));
            }
        }
        if let Some(priority) = self.priority {
            if !(1..=4).contains(&priority) {
                errors.push(FieldError::new("priority", "must be between 1 and 4"));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
