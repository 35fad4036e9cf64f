use chrono::{Local, NaiveDate};
use leptos::ev::DragEvent;
use leptos::prelude::*;
use task_board::due::{card_date, due_label};
use task_board::{BoardConfig, DragState, DueUrgency, Task};
use crate::features::kanban::services::{cancel_drag, start_drag};

#[component]
pub fn TaskCard(
    task: Task,
    drag: RwSignal<DragState>,
    today: NaiveDate,
    config: BoardConfig,
) -> impl IntoView {
    let task_id = task.id().clone();
    let task_id_for_drag = task_id.clone();
    // Highlight comes straight from the drag payload
    let is_dragging = move || drag.with(|d| d.is_dragging(&task_id));

    let created = card_date(Some(task.created_at().with_timezone(&Local).date_naive()));
    let urgency = DueUrgency::classify(task.ship_date(), today, &config);
    let description = task.description().to_string();

    view! {
        <div
            class="task-card"
            class:dragging=is_dragging
            draggable="true"
            on:dragstart=move |ev: DragEvent| start_drag(&ev, task_id_for_drag.clone(), drag)
            on:dragend=move |_| cancel_drag(drag)
        >
            <div class="task-card-header">
                <h4 class="task-summary">{task.summary().to_string()}</h4>
            </div>
            <div class="task-card-body">
                {(!description.is_empty()).then(|| view! { <p class="task-description">{description}</p> })}
                <div class="task-assignee">
                    <span class="icon">"👤"</span>
                    <span>{task.assignee().to_string()}</span>
                </div>
                <div class="task-dates">
                    <div class="task-date">"Created: " {created}</div>
                    {task.start_date().map(|d| view! {
                        <div class="task-date started">"Started: " {card_date(Some(d))}</div>
                    })}
                    {task.ship_date().map(|d| view! {
                        <div class="task-date ship">"Ship: " {card_date(Some(d))}</div>
                    })}
                </div>
                <span class=urgency.css_class()>{due_label(task.ship_date())}</span>
            </div>
        </div>
    }
}
