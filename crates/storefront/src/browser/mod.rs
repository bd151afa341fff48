//! Browser bindings and entry point.
//!
//! Only compiled for `wasm32` with the `browser` feature.
//!
//! Instantiating the module installs the console logger and, when the page
//! embeds its configuration, mounts the storefront:
//!
//! ```html
//! <div id="farmconnect"></div>
//! <script type="application/json" id="farmconnect-config">
//!   {"merchant_address": "0x52908400098527886E0F7030069857D2E4169EE7"}
//! </script>
//! ```
//!
//! Hosts without an embedded config call [`mount`] themselves.

mod app;
mod notify;
mod provider;

pub use app::mount;
pub use notify::BrowserNotifier;
pub use provider::InjectedProvider;

use wasm_bindgen::prelude::*;

/// Id of the element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "farmconnect-config";

/// Id of the element the storefront renders into. `<body>` is used when the
/// page has no such element.
pub const ROOT_ELEMENT_ID: &str = "farmconnect";

/// Module entry point, run once when the wasm module is instantiated.
///
/// # Errors
///
/// Returns an error if an embedded configuration is invalid or the page has
/// nowhere to render.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match app::embedded_config()? {
        Some(config) => mount(&config),
        None => {
            tracing::debug!("no embedded config; waiting for mount()");
            Ok(())
        }
    }
}
