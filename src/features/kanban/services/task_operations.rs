use leptos::prelude::*;
use task_board::{BoardStore, NewTask, TaskId};

// Add a new task to the To Do column
pub fn create_task_handler(store: RwSignal<BoardStore>) -> Callback<NewTask> {
    Callback::new(move |new_task: NewTask| {
        // One update, so views only ever see the board before or after the insert
        if let Some(id) = store.try_update(|board| board.create_task(new_task)) {
            log::info!("task {} added to To Do", id);
        }
    })
}

// Move a task to another column; rejected moves leave the board as it was
pub fn move_task_handler(store: RwSignal<BoardStore>) -> Callback<(TaskId, String)> {
    Callback::new(move |(task_id, column_id): (TaskId, String)| {
        let result = store.try_update(|board| board.move_task(task_id.as_str(), &column_id));
        if let Some(Err(e)) = result {
            log::warn!("could not move task {} to {}: {}", task_id, column_id, e);
        }
    })
}
