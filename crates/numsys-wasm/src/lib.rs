//! # numsys-wasm
//!
//! The number-base converter page, compiled to WebAssembly.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { mount, initLogging } from 'numsys-wasm';
//!
//! async function main() {
//!     await init();
//!     initLogging("info");
//!
//!     // Builds the page inside <div id="app"></div>
//!     const page = mount("app");
//!
//!     // Later, on teardown:
//!     page.unmount();
//! }
//!
//! main();
//! ```
//!
//! The theme is applied to `<html>` as a `light` or `dark` class during
//! start-up, before the page is built. The explicit choice is persisted in
//! `localStorage` under the key `theme`; without one the page follows
//! `prefers-color-scheme`.
//!
//! ## Available APIs
//!
//! - `mount(containerId)` - Build the page and wire its events
//! - `MountedConverter` - `unmount()`, `value`
//! - `NumberConverter` - Headless state for custom markup
//! - `initLogging(level)` - Route `tracing` output to the console

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod events;
pub mod logging;
pub mod media;
pub mod page;
pub mod root;
pub mod storage;
pub mod view;

use wasm_bindgen::prelude::*;

pub use app::{Converter, DomThemeController, NumberConverter};
pub use events::EventListener;
pub use media::{DARK_SCHEME_QUERY, MediaQuery};
pub use page::{MountedConverter, mount};
pub use root::DocumentRoot;
pub use storage::LocalStorage;
pub use view::ViewModel;

/// Initialize the module.
///
/// This sets up the panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `tracing` events at or above `level` (`"error"` .. `"trace"`) to the
/// browser console. Returns `false` if logging was already initialized.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: &str) -> bool {
    logging::init(logging::parse_level(level))
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Best-effort message from a JavaScript exception value.
pub(crate) fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
