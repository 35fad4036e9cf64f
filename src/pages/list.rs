use chrono::Datelike;
use leptos::prelude::*;
use task_board::{flatten, BoardStore, ListRow};
use crate::features::kanban::KanbanHeader;

// Ship date in the browser's locale; the placeholder comes from the row itself
fn ship_date_cell(row: &ListRow) -> String {
    let Some(date) = row.ship_date else {
        return row.ship_date_label();
    };
    let js_date = js_sys::Date::new_with_year_month_day(date.year() as u32, date.month0() as i32, date.day() as i32);
    js_date
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn ListPage(store: RwSignal<BoardStore>) -> impl IntoView {
    view! {
        <div class="list-page">
            <KanbanHeader title="Task List" subtitle="All your tasks in one place" />
            <div class="task-table-wrapper">
                <table class="task-table">
                    <thead>
                        <tr>
                            <th>"Summary"</th>
                            <th>"Assignee"</th>
                            <th>"Status"</th>
                            <th>"Ship Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            store.with(|board| flatten(board.list_columns()))
                                .into_iter()
                                .map(|row| {
                                    let badge = row.badge();
                                    let ship_date = ship_date_cell(&row);
                                    view! {
                                        <tr>
                                            <td class="task-summary">{row.summary}</td>
                                            <td>{row.assignee}</td>
                                            <td><span class=badge.css_class()>{row.status.as_str()}</span></td>
                                            <td>{ship_date}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
