pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_app_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(shared::config::log_level(&config));
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
