use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column id, also the wire form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BoardError::ColumnNotFound(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields accepted by `BoardStore::create_task`.
///
/// `status` is carried only because callers may hand one over; the store
/// always files new tasks under To Do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub summary: String,
    pub description: String,
    pub assignee: String,
    pub start_date: Option<NaiveDate>,
    pub ship_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    summary: String,
    description: String,
    assignee: String,
    created_at: DateTime<Utc>,
    start_date: Option<NaiveDate>,
    ship_date: Option<NaiveDate>,
    status: TaskStatus,
}

impl Task {
    pub(crate) fn from_new(id: TaskId, new_task: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            summary: new_task.summary,
            description: new_task.description,
            assignee: new_task.assignee,
            created_at,
            start_date: new_task.start_date,
            ship_date: new_task.ship_date,
            status: TaskStatus::Todo,
        }
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn ship_date(&self) -> Option<NaiveDate> {
        self.ship_date
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_column_id() {
        for status in TaskStatus::all() {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_column_id_is_rejected() {
        let err = "backlog".parse::<TaskStatus>().unwrap_err();
        assert_eq!(err, BoardError::ColumnNotFound("backlog".to_string()));
    }

    #[test]
    fn status_serializes_as_column_id() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"inprogress\"");
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(TaskId::generate(), TaskId::generate());
    }
}
