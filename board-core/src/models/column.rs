use serde::{Deserialize, Serialize};

use super::task::{Task, TaskStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    status: TaskStatus,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    pub(crate) fn new(status: TaskStatus) -> Self {
        Self {
            status,
            title: status.title().to_string(),
            tasks: Vec::new(),
        }
    }

    /// The column id. Columns are keyed by the status they hold.
    pub fn id(&self) -> &'static str {
        self.status.as_str()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Extra line under "No tasks yet" for an empty column.
    pub fn empty_hint(&self) -> Option<&'static str> {
        match self.status {
            TaskStatus::Todo => Some("Create a new task to get started"),
            _ => None,
        }
    }

    pub(crate) fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id().as_str() == task_id)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    /// Appends a task, rewriting its status to this column's.
    pub(crate) fn push(&mut self, mut task: Task) {
        task.set_status(self.status);
        self.tasks.push(task);
    }
}
