#![warn(clippy::all)]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "the controller only runs in the browser")
)]

//! Frame Gap Review - a web-based review tool for frame timing analysis.
//!
//! Uploads a video to the frame-gap analysis service, then lets the user
//! review the result frame by frame: a table of detected drops and freezes
//! that seeks the video to each anomaly, single-frame stepping at the video's
//! real frame rate, and a live frame counter.

mod analysis;
#[cfg(target_arch = "wasm32")]
mod app;
mod config;
mod frame_step;
mod orchestrator;
mod playback;
mod state;
mod timecode;
mod ui;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let config = config::ReviewConfig::from_page();
    log::error!(
        "Frame Gap Review runs in the browser; build for wasm32-unknown-unknown and serve it \
         next to the analysis service ({})",
        config.upload_endpoint
    );
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Redirect `log` messages to `console.log`:
    console_log::init_with_level(log::Level::Trace).ok();

    let config = config::ReviewConfig::from_page();
    log::set_max_level(config.log_level());

    if let Err(e) = app::mount(&config) {
        log::error!("Failed to start review controller: {:?}", e);
    }
}
