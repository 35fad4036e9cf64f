use leptos::prelude::*;
use task_board::{BoardConfig, BoardStore, DefaultClock};
use crate::pages::{BoardPage, ListPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Board,
    List,
}

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // The one board for the whole session, handed to each page explicitly
    let store = RwSignal::new(if config.seed_demo_data {
        BoardStore::with_demo_data(DefaultClock)
    } else {
        BoardStore::new(DefaultClock)
    });
    log::info!("board ready with {} tasks", store.with_untracked(|s| s.task_count()));

    let (current_view, set_current_view) = signal(AppView::Board);

    view! {
        <main class="app">
            <nav class="view-toggle">
                <button
                    class="view-toggle-btn"
                    class:active=move || current_view.get() == AppView::Board
                    aria-label="Toggle board view"
                    on:click=move |_| set_current_view.set(AppView::Board)
                >"Board"</button>
                <button
                    class="view-toggle-btn"
                    class:active=move || current_view.get() == AppView::List
                    aria-label="Toggle list view"
                    on:click=move |_| set_current_view.set(AppView::List)
                >"List"</button>
            </nav>
            {move || match current_view.get() {
                AppView::Board => view! { <BoardPage store=store config=config.clone() /> }.into_any(),
                AppView::List => view! { <ListPage store=store /> }.into_any(),
            }}
        </main>
    }
}
