pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Config must be in place before the first component reads it
    wasm_bindgen_futures::spawn_local(async {
        match config::load_config().await {
            Ok(config) => config::init(config),
            Err(e) => log::error!("Failed to load config, using defaults: {}", e),
        }
        leptos::mount::mount_to_body(app::App);
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
