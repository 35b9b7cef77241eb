//! Sunshadow entry point
//!
//! Sets up logging for the platform and hands control to its frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("Sunshadow starting...");
    if let Err(e) = sunshadow::platform::web::run().await {
        log::error!("Failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sunshadow (native) starting...");

    if let Err(e) = sunshadow::platform::native::run() {
        log::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
