//! The task/column store.
//!
//! The store is the only owner of board state. Views read it through
//! [`BoardStore::list_columns`] and change it through
//! [`BoardStore::create_task`] and [`BoardStore::move_task`]. Each mutation
//! completes in one `&mut self` call, so no caller ever observes a task that
//! has left its source column without reaching its target.

use std::fmt;

use log::{debug, warn};
use mockable::{Clock, DefaultClock};

use crate::error::BoardError;
use crate::models::{Column, NewTask, Task, TaskId, TaskStatus};
use crate::seed;

pub struct BoardStore<C: Clock = DefaultClock> {
    columns: Vec<Column>,
    clock: C,
}

impl<C: Clock> BoardStore<C> {
    /// A board with the three fixed columns and no tasks.
    pub fn new(clock: C) -> Self {
        Self {
            columns: TaskStatus::all().into_iter().map(Column::new).collect(),
            clock,
        }
    }

    /// A board pre-filled with the demo tasks.
    pub fn with_demo_data(clock: C) -> Self {
        let mut store = Self::new(clock);
        for (status, task) in seed::demo_tasks() {
            store.column_mut(status).push(task);
        }
        store
    }

    /// Files a new task at the end of To Do and returns its id.
    ///
    /// Any status on `new_task` is ignored. Field validation belongs to the
    /// caller (see `TaskDraft::validate`).
    pub fn create_task(&mut self, new_task: NewTask) -> TaskId {
        if let Some(requested) = new_task.status.filter(|s| *s != TaskStatus::Todo) {
            debug!("ignoring requested status {requested} for new task");
        }
        let id = TaskId::generate();
        let task = Task::from_new(id.clone(), new_task, self.clock.utc());
        self.column_mut(TaskStatus::Todo).push(task);
        debug!("created task {id}");
        id
    }

    /// Moves a task to the end of the target column and updates its status.
    ///
    /// The target column is resolved before the task is touched, so a bad
    /// column id never loses the task.
    pub fn move_task(&mut self, task_id: &str, target_column_id: &str) -> Result<(), BoardError> {
        let target: TaskStatus = target_column_id.parse().inspect_err(|e| {
            warn!("move of task {task_id} rejected: {e}");
        })?;

        let Some((source, position)) = self.locate(task_id) else {
            let err = BoardError::TaskNotFound(task_id.to_string());
            warn!("move to {target} rejected: {err}");
            return Err(err);
        };

        let task = self.columns[source].remove(position);
        let from = self.columns[source].status();
        self.column_mut(target).push(task);
        debug!("moved task {task_id} from {from} to {target}");
        Ok(())
    }

    /// Read-only snapshot of the columns in display order.
    pub fn list_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[column_index(status)]
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.locate(task_id)
            .map(|(column, task)| &self.columns[column].tasks()[task])
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        &mut self.columns[column_index(status)]
    }

    fn locate(&self, task_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, column)| column.position(task_id).map(|ti| (ci, ti)))
    }
}

impl<C: Clock> fmt::Debug for BoardStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

fn column_index(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Done => 2,
    }
}
