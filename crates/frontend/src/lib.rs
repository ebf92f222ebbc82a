//! Демо-страница: табы, таблица с фильтрами и постраничным выводом,
//! асинхронно загружаемый список.

pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mounts the demo page into `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    // Logging goes to the browser console through the `log` facade
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console_log already initialised".into());
    }
    console_error_panic_hook::set_once();

    log::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}
