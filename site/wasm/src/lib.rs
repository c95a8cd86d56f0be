//! Browser runtime for the Roma Burger landing page.
//!
//! The page arrives fully rendered; this module only attaches behaviour to
//! the markup produced by `roma-site`:
//!
//! - [`scroll`] turns `data-scroll` clicks into smooth scrolling
//! - [`reveal`] drives `data-reveal` from `unseen` to `settled`
//! - [`map`] mounts Leaflet from the `data-map` payload
//!
//! Each part fails on its own: a missing map library never blocks scrolling
//! or reveals. Reveal targets are only hidden once `<html>` carries
//! [`RUNTIME_ATTR`], which is set after the observer is in place.

use roma_site::motion::RUNTIME_ATTR;
use wasm_bindgen::prelude::*;
use web_sys::console;

pub mod map;
pub mod reveal;
pub mod scroll;

/// Entry point, run by the wasm-bindgen glue as soon as the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    scroll::install(&window, &document)?;
    reveal::install(&document)?;
    mark_running(&document)?;
    if let Err(err) = map::mount(&document) {
        console::warn_2(&"roma: franchise map unavailable".into(), &err);
    }
    Ok(())
}

/// Flag the page as driven by the runtime; unseen reveals start hiding here.
pub fn mark_running(document: &web_sys::Document) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;
    root.set_attribute(RUNTIME_ATTR, "")
}
