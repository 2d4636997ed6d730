use chrono::NaiveDate;
use serde::Deserialize;

use crate::api_error::FieldError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub description: String,
    pub due_date_text: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i64,
    pub gcal_event_id: Option<String>,
}

fn default_priority() -> i64 {
    3
}

impl CreateTodoRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        self.collect_errors("", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Shared with bulk create, where `prefix` carries the element index.
    pub(crate) fn collect_errors(&self, prefix: &str, errors: &mut Vec<FieldError>) {
        if self.description.is_empty() {
            errors.push(FieldError::new(
                format!("{prefix}description"),
                "must not be empty",
            ));
        }
        if !(1..=4).contains(&self.priority) {
            errors.push(FieldError::new(
                format!("{prefix}priority"),
                "must be between 1 and 4",
            ));
        }
    }
}
