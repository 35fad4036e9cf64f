//! Validation for the task creation form.
//!
//! The store accepts any `NewTask`; this is where empty summaries and
//! assignees get stopped.

use chrono::NaiveDate;

use crate::error::BoardError;
use crate::models::NewTask;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw form contents. `Default` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub summary: String,
    pub description: String,
    pub assignee: String,
    pub start_date: Option<NaiveDate>,
    pub ship_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn is_submittable(&self) -> bool {
        !self.summary.trim().is_empty() && !self.assignee.trim().is_empty()
    }

    /// Trims the text fields and checks the required ones.
    ///
    /// Start and ship dates are passed through as-is; their order is not
    /// checked.
    pub fn validate(&self) -> Result<NewTask, BoardError> {
        let summary = self.summary.trim();
        if summary.is_empty() {
            return Err(BoardError::MissingField("summary"));
        }
        let assignee = self.assignee.trim();
        if assignee.is_empty() {
            return Err(BoardError::MissingField("assignee"));
        }

        Ok(NewTask {
            summary: summary.to_string(),
            description: self.description.trim().to_string(),
            assignee: assignee.to_string(),
            start_date: self.start_date,
            ship_date: self.ship_date,
            status: None,
        })
    }
}

/// Parses the value of an `<input type="date">`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).ok()
}

/// Inverse of [`parse_date_input`], for binding a date back into the input.
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}
