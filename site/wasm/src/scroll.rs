//! Smooth scrolling for `data-scroll` actions.

use roma_site::anchors::{perform_scroll, ScrollTarget, Viewport, SCROLL_ATTR};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// The live document as a [`Viewport`]. Anchors are looked up on every call,
/// so sections mounted after startup are reachable.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn new(window: Window, document: Document) -> Self {
        BrowserViewport { window, document }
    }
}

impl Viewport for BrowserViewport {
    type Element = Element;

    fn find_anchor(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_to_element(&mut self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// One delegated click listener on the document.
///
/// The `href` fallback is cancelled even when the anchor is missing, so a
/// typo leaves the scroll position alone.
pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let mut viewport = BrowserViewport::new(window.clone(), document.clone());

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(trigger) = scroll_trigger(&event) else {
            return;
        };
        let Some(value) = trigger.get_attribute(SCROLL_ATTR) else {
            return;
        };
        event.prevent_default();
        perform_scroll(&mut viewport, ScrollTarget::parse(&value));
    });

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // lives as long as the page
    on_click.forget();
    Ok(())
}

fn scroll_trigger(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{SCROLL_ATTR}]")).ok().flatten()
}
