use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use task_board::{format_date_input, parse_date_input, NewTask, TaskDraft};

#[component]
pub fn TaskModal(
    on_create: Callback<NewTask>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (summary, set_summary) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (start_date, set_start_date) = signal::<Option<NaiveDate>>(None);
    let (ship_date, set_ship_date) = signal::<Option<NaiveDate>>(None);

    let draft = move || TaskDraft {
        summary: summary.get(),
        description: description.get(),
        assignee: assignee.get(),
        start_date: start_date.get(),
        ship_date: ship_date.get(),
    };

    let reset_form = move || {
        set_summary.set(String::new());
        set_description.set(String::new());
        set_assignee.set(String::new());
        set_start_date.set(None);
        set_ship_date.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        // Blank summary or assignee never reaches the board
        let new_task = match untrack(draft).validate() {
            Ok(new_task) => new_task,
            Err(e) => {
                log::debug!("create task blocked: {}", e);
                return;
            }
        };

        on_create.run(new_task);
        reset_form();

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Cancel keeps whatever was typed, like closing the dialog does
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Create New Task"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="summary">"Summary *"</label>
                        <input
                            id="summary"
                            type="text"
                            placeholder="Enter task summary"
                            on:input=move |ev| set_summary.set(event_target_value(&ev))
                            prop:value=move || summary.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            placeholder="Enter task description"
                            rows="3"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="assignee">"Assignee *"</label>
                        <input
                            id="assignee"
                            type="text"
                            placeholder="Enter assignee name"
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                            prop:value=move || assignee.get()
                            required
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="start-date">"Start Date"</label>
                            <input
                                id="start-date"
                                type="date"
                                on:input=move |ev| set_start_date.set(parse_date_input(&event_target_value(&ev)))
                                prop:value=move || format_date_input(start_date.get())
                            />
                        </div>
                        <div class="form-group">
                            <label for="ship-date">"Ship Date"</label>
                            <input
                                id="ship-date"
                                type="date"
                                on:input=move |ev| set_ship_date.set(parse_date_input(&event_target_value(&ev)))
                                prop:value=move || format_date_input(ship_date.get())
                            />
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancel"</button>
                        <button
                            type="submit"
                            class="btn-primary"
                            prop:disabled=move || !draft().is_submittable()
                        >"Create Task"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
