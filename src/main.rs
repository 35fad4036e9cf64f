mod app;
mod components;
mod features;
mod logging;
mod pages;
mod services;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let config = services::load_board_config();
    logging::init(config.level_filter());
    leptos::mount::mount_to_body(move || leptos::view! { <App config=config /> });
}
