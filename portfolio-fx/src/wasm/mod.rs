//! WASM entry point: the in-page presentation controller.
//!
//! Build with: `wasm-pack build --target web --features wasm`
//!
//! ```js
//! import init, { start } from "./pkg/portfolio_fx.js";
//! await init();
//! const fx = start({ typing: { interval_ms: 80 } });
//! // later, e.g. on client-side navigation:
//! fx.teardown();
//! ```

mod console;
mod dom;
mod mount;
mod tasks;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::config::FxConfig;
use crate::error::FxError;
use mount::Mounted;

fn to_js(e: FxError) -> JsError {
    JsError::new(&e.to_string())
}

/// Handle to the mounted effects. Dropping it (or calling `teardown`)
/// removes every listener and cancels every pending timer.
#[wasm_bindgen]
pub struct Portfolio {
    mounted: Rc<RefCell<Option<Mounted>>>,
    ready: Option<EventListener>,
}

#[wasm_bindgen]
impl Portfolio {
    /// `false` while waiting for `DOMContentLoaded`, and after teardown.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.borrow().is_some()
    }

    /// Human-readable summary of which features found their elements.
    pub fn report(&self) -> Option<String> {
        self.mounted
            .borrow()
            .as_ref()
            .map(|m| m.report().to_string())
    }

    /// Also stops a mount still waiting for `DOMContentLoaded`.
    pub fn teardown(&mut self) {
        self.ready.take();
        self.mounted.borrow_mut().take();
    }
}

/// Mount the portfolio effects on the current document.
///
/// `config` is an optional object overriding any subset of the defaults.
/// Mounts immediately if the document is parsed, otherwise on
/// `DOMContentLoaded`.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<Portfolio, JsError> {
    let config: FxConfig = if config.is_undefined() || config.is_null() {
        FxConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    config.validate().map_err(to_js)?;
    console::init(config.log_level);

    let window = web_sys::window().ok_or_else(|| to_js(FxError::host("no window")))?;
    let document = window
        .document()
        .ok_or_else(|| to_js(FxError::host("window has no document")))?;

    let mounted = Rc::new(RefCell::new(None));
    if document.ready_state() != "loading" {
        *mounted.borrow_mut() = Some(Mounted::mount(window, document, config));
        return Ok(Portfolio {
            mounted,
            ready: None,
        });
    }

    let slot = mounted.clone();
    let target = document.clone();
    let ready = EventListener::once(&target, "DOMContentLoaded", move |_| {
        *slot.borrow_mut() = Some(Mounted::mount(window, document, config));
    });
    Ok(Portfolio {
        mounted,
        ready: Some(ready),
    })
}

/// The effective default configuration, as JSON.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsError> {
    FxConfig::default().to_json_pretty().map_err(to_js)
}
