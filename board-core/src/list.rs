use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Column, TaskId, TaskStatus};

pub const NO_SHIP_DATE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Secondary,
    Default,
    Outline,
}

impl StatusBadge {
    pub fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => StatusBadge::Secondary,
            TaskStatus::InProgress => StatusBadge::Default,
            TaskStatus::Done => StatusBadge::Outline,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Secondary => "badge badge-secondary",
            StatusBadge::Default => "badge badge-default",
            StatusBadge::Outline => "badge badge-outline",
        }
    }
}

/// One row of the flat task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub id: TaskId,
    pub summary: String,
    pub assignee: String,
    pub status: TaskStatus,
    pub ship_date: Option<NaiveDate>,
}

impl ListRow {
    pub fn badge(&self) -> StatusBadge {
        StatusBadge::for_status(self.status)
    }

    /// ISO date, or the placeholder when no ship date is set.
    pub fn ship_date_label(&self) -> String {
        self.ship_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NO_SHIP_DATE.to_string())
    }
}

/// All tasks, column by column, each column in its own order.
pub fn flatten(columns: &[Column]) -> Vec<ListRow> {
    columns
        .iter()
        .flat_map(|column| column.tasks())
        .map(|task| ListRow {
            id: task.id().clone(),
            summary: task.summary().to_string(),
            assignee: task.assignee().to_string(),
            status: task.status(),
            ship_date: task.ship_date(),
        })
        .collect()
}
