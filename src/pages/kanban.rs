use chrono::Local;
use leptos::html::Dialog;
use leptos::prelude::*;
use task_board::{BoardConfig, BoardStore, TaskStatus};
use crate::components::TaskModal;
use crate::features::kanban::{use_tasks, KanbanColumn, KanbanHeader};

#[component]
pub fn BoardPage(store: RwSignal<BoardStore>, config: BoardConfig) -> impl IntoView {
    let hook = use_tasks(store);

    // Dialog element for the create form, opened with show_modal()
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    // Due badges are computed against the day the board was rendered
    let today = Local::now().date_naive();

    view! {
        <div class="kanban-page">
            <KanbanHeader title="Project Board" subtitle="Manage your tasks and track progress">
                <button class="btn-primary" on:click=open_modal>"+ Create Task"</button>
            </KanbanHeader>

            <div class="kanban-board">
                {TaskStatus::all().into_iter().map(|status| {
                    view! {
                        <KanbanColumn
                            status=status
                            store=hook.store
                            drag=hook.drag
                            on_move=hook.move_task
                            today=today
                            config=config.clone()
                        />
                    }
                }).collect::<Vec<_>>()}
            </div>

            <TaskModal on_create=hook.create_task dialog_ref=dialog_ref />
        </div>
    }
}
