use leptos::ev::DragEvent;
use leptos::prelude::*;
use task_board::{DragState, TaskId, DRAG_MIME};

// Put the task id on the drag and remember it for the card highlight
pub fn start_drag(ev: &DragEvent, task_id: TaskId, drag: RwSignal<DragState>) {
    if let Some(transfer) = ev.data_transfer() {
        if transfer.set_data(DRAG_MIME, task_id.as_str()).is_err() {
            log::error!("failed to attach task {} to drag", task_id);
        }
        transfer.set_effect_allowed("move");
    }
    drag.update(|d| d.begin(task_id));
}

// Drag left the board without a drop
pub fn cancel_drag(drag: RwSignal<DragState>) {
    drag.update(|d| d.end());
}

// Columns have to cancel dragover to become drop targets
pub fn allow_drop(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("move");
    }
}

// Read the dropped task id; None when the drop carried nothing
pub fn take_drop(ev: &DragEvent, drag: RwSignal<DragState>) -> Option<TaskId> {
    ev.prevent_default();
    let transfer = ev
        .data_transfer()
        .and_then(|t| t.get_data(DRAG_MIME).ok());
    drag.try_update(|d| d.resolve_drop(transfer)).flatten()
}
