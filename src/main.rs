use log::{error, info};

mod cards;
mod clipboard;
mod config;
mod dom;
mod error;
mod highlight;
mod overlay;
mod page;
mod render;
mod scroll;
mod toast;

#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page enhancements");
    if let Err(e) = page::start() {
        error!("Page enhancements not installed: {}", e);
    }
}
