//! # pagefx
//!
//! Page interactivity compiled to WebAssembly.
//!
//! Load the module on a page and it wires up:
//!
//! - **Navigation toggle**: `.mobile-menu-button` flips `active` on itself,
//!   `.navbar-links` and `.navbar-user`
//! - **Button feedback**: click ripples on `button, .button`, and a timed
//!   "Loading..." state for controls with `data-loading="true"`
//! - **Smooth scroll**: eased scrolling for `a[href^="#"]` links with a
//!   transient indicator and target highlight, plus a floating scroll-to-top
//!   control
//! - **Tables**: row hover tint and a horizontally scrollable wrapper
//! - **Charts**: `.chart` elements sized to 60% of their parent's width,
//!   re-sized after window resizes settle
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { startWithConfig } from 'pagefx';
//!
//! // With the default `autostart` feature, `init()` alone is enough.
//! await init();
//!
//! // Without it, start explicitly (optionally overriding settings):
//! startWithConfig(JSON.stringify({ scrollTopThreshold: 500, logLevel: "debug" }));
//! ```
//!
//! ## Available APIs
//!
//! - `start()` - Wire up the page with default settings
//! - `startWithConfig(json)` - Wire up the page with [`PageConfig`] overrides
//! - `refresh()` - Process tables and charts added since start-up
//! - `version()` - Module version
//! - `isReady()` - Whether the page has been wired up

#![forbid(unsafe_code)]

// Use wee_alloc for smaller binaries (optional)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

use wasm_bindgen::prelude::*;

pub mod buttons;
pub mod charts;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod log;
pub mod nav;
pub mod scroll;
pub mod styles;
pub mod tables;

pub use config::PageConfig;
pub use controller::PageController;
pub use error::{Error, Result};

/// Module entry point, run when the wasm module is instantiated.
///
/// Installs the panic hook and, with the `autostart` feature, starts the
/// page once its structure is ready.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "autostart")]
    autostart();
}

#[cfg(feature = "autostart")]
fn autostart() {
    let scheduled = when_ready(|| {
        if let Err(err) = controller::start(PageConfig::default()) {
            tracing::error!(%err, "page effects failed to start");
        }
    });
    if let Err(err) = scheduled {
        tracing::error!(%err, "could not wait for the document");
    }
}

/// Runs `f` now if the document has been parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error outside a browser page.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<()> {
    let document = web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?;
    if document.ready_state() == "loading" {
        dom::listen_once(&document, "DOMContentLoaded", f)
    } else {
        f();
        Ok(())
    }
}

/// Wire up the page with default settings.
///
/// Calling it again after the page is wired up only refreshes tables and charts.
///
/// # Errors
///
/// Throws if the page cannot be wired up.
#[wasm_bindgen(js_name = "start")]
pub fn start() -> std::result::Result<(), JsValue> {
    controller::start(PageConfig::default())?;
    Ok(())
}

/// Wire up the page with settings from a JSON object (camelCase keys).
///
/// Settings only take effect on the first start; afterwards this refreshes.
///
/// # Errors
///
/// Throws on malformed or invalid configuration, or if the page cannot be
/// wired up.
#[wasm_bindgen(js_name = "startWithConfig")]
pub fn start_with_config(json: &str) -> std::result::Result<(), JsValue> {
    let config = PageConfig::from_json(json)?;
    controller::start(config)?;
    Ok(())
}

/// Process tables and charts added to the page since start-up.
///
/// Returns the number of newly wrapped tables, or 0 before start-up.
///
/// # Errors
///
/// Throws if a new table cannot be wrapped.
#[wasm_bindgen(js_name = "refresh")]
pub fn refresh() -> std::result::Result<usize, JsValue> {
    let report = controller::with_controller(PageController::refresh).transpose()?;
    Ok(report.map_or(0, |report| report.wrapped))
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Whether the page has been wired up.
#[must_use]
#[wasm_bindgen(js_name = "isReady")]
pub fn is_ready() -> bool {
    controller::is_started()
}
