use leptos::prelude::*;

#[component]
pub fn KanbanHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{title}</h1>
                <p class="kanban-subtitle">{subtitle}</p>
            </div>
            <div class="kanban-actions">{children.map(|children| children())}</div>
        </header>
    }
}
