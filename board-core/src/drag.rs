//! Drag-and-drop bookkeeping for the board.
//!
//! The payload of the drag in flight is the only drag state kept. The
//! "being dragged" highlight on a card is read off it.

use crate::models::TaskId;

/// MIME type the task id travels under in the browser's transfer data.
pub const DRAG_MIME: &str = "text/plain";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    payload: Option<TaskId>,
}

impl DragState {
    pub fn begin(&mut self, task_id: TaskId) {
        self.payload = Some(task_id);
    }

    pub fn end(&mut self) {
        self.payload = None;
    }

    pub fn payload(&self) -> Option<&TaskId> {
        self.payload.as_ref()
    }

    pub fn is_dragging(&self, task_id: &TaskId) -> bool {
        self.payload.as_ref() == Some(task_id)
    }

    /// Finishes the drag and returns the task id carried by the drop.
    ///
    /// `transfer` is the text read from the drop event. A drop with no
    /// payload yields `None` and must not move anything.
    pub fn resolve_drop(&mut self, transfer: Option<String>) -> Option<TaskId> {
        self.end();
        transfer
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .map(TaskId::from)
    }
}
