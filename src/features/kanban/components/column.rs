use chrono::NaiveDate;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use task_board::{BoardConfig, BoardStore, DragState, TaskId, TaskStatus};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::services::{allow_drop, take_drop};

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    store: RwSignal<BoardStore>,
    drag: RwSignal<DragState>,
    on_move: Callback<(TaskId, String)>,
    today: NaiveDate,
    config: BoardConfig,
) -> impl IntoView {
    let on_drop = move |ev: DragEvent| {
        if let Some(task_id) = take_drop(&ev, drag) {
            on_move.run((task_id, status.as_str().to_string()));
        }
    };

    view! {
        <div
            class="kanban-column"
            on:dragover=move |ev: DragEvent| allow_drop(&ev)
            on:drop=on_drop
        >
            <div class="column-header">
                <h3>{move || store.with(|board| board.column(status).title().to_string())}</h3>
                // Reactive task count - updates automatically when the board changes
                <span class="task-count">
                    {move || store.with(|board| board.column(status).len())}
                </span>
            </div>
            <div class="column-content">
                {move || {
                    store.with(|board| {
                        let column = board.column(status);
                        if column.is_empty() {
                            view! {
                                <div class="column-empty">
                                    <p>"No tasks yet"</p>
                                    {column.empty_hint().map(|hint| view! { <p class="column-empty-hint">{hint}</p> })}
                                </div>
                            }.into_any()
                        } else {
                            column.tasks()
                                .iter()
                                .cloned()
                                .map(|task| {
                                    view! {
                                        <TaskCard task=task drag=drag today=today config=config.clone() />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    })
                }}
            </div>
        </div>
    }
}
