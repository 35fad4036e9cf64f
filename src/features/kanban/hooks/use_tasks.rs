use leptos::prelude::*;
use task_board::{BoardStore, DragState, NewTask, TaskId};
use crate::features::kanban::services::{create_task_handler, move_task_handler};

pub struct TasksHook {
    pub store: RwSignal<BoardStore>,
    pub drag: RwSignal<DragState>,
    pub create_task: Callback<NewTask>,
    pub move_task: Callback<(TaskId, String)>,
}

pub fn use_tasks(store: RwSignal<BoardStore>) -> TasksHook {
    // Drag state is per board view; it never outlives a page switch
    let drag = RwSignal::new(DragState::default());

    TasksHook {
        store,
        drag,
        create_task: create_task_handler(store),
        move_task: move_task_handler(store),
    }
}
