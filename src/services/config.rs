use task_board::BoardConfig;

/// Id of the optional `<script type="application/json">` block in index.html.
const CONFIG_ELEMENT_ID: &str = "board-config";

// Load board settings from the page, falling back to defaults
pub fn load_board_config() -> BoardConfig {
    let Some(raw) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return BoardConfig::default();
    };

    if raw.trim().is_empty() {
        return BoardConfig::default();
    }

    match BoardConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            // The logger is not installed yet, so report straight to the console.
            web_sys::console::error_1(&format!("Ignoring board config: {}", e).into());
            BoardConfig::default()
        }
    }
}
