//! Viewport-triggered reveals.
//!
//! Every `[data-reveal="unseen"]` element is observed once. The first
//! intersection moves it to `animating` and stops observing it; the end of
//! its own transition moves it to `settled`. The observer disconnects once
//! every element has been seen. Transitions are plain CSS keyed
//! on the attribute.

use js_sys::Array;
use roma_site::motion::{RevealState, REVEAL_ATTR};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const VISIBLE_THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Observe pending elements and settle them when their transition ends.
///
/// Without `IntersectionObserver` everything is settled immediately.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let pending = pending_elements(document)?;
    listen_for_transition_end(document)?;

    let mut remaining = pending.len();
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                advance(&target, RevealState::on_visible);
                observer.unobserve(&target);
                remaining = remaining.saturating_sub(1);
            }
            if remaining == 0 {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for element in &pending {
                observer.observe(element);
            }
            on_intersect.forget();
        }
        Err(err) => {
            console::warn_2(&"roma: no IntersectionObserver, revealing everything".into(), &err);
            for element in &pending {
                set_state(element, RevealState::Settled);
            }
        }
    }
    Ok(())
}

fn pending_elements(document: &Document) -> Result<Vec<Element>, JsValue> {
    let selector = format!("[{REVEAL_ATTR}=\"{}\"]", RevealState::Unseen.as_attr());
    let nodes = document.query_selector_all(&selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn listen_for_transition_end(document: &Document) -> Result<(), JsValue> {
    let on_end = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        // transitions of descendants bubble up too; only the revealed element counts
        let Some(element) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if element.has_attribute(REVEAL_ATTR) {
            advance(&element, RevealState::on_transition_end);
        }
    });
    document.add_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref())?;
    on_end.forget();
    Ok(())
}

fn current_state(element: &Element) -> RevealState {
    element
        .get_attribute(REVEAL_ATTR)
        .map(|value| RevealState::from_attr(&value))
        .unwrap_or(RevealState::Settled)
}

/// Apply one state-machine step to `element`; no-op transitions touch nothing.
pub fn advance(element: &Element, step: fn(RevealState) -> RevealState) {
    let current = current_state(element);
    let next = step(current);
    if next != current {
        set_state(element, next);
    }
}

fn set_state(element: &Element, state: RevealState) {
    if let Err(err) = element.set_attribute(REVEAL_ATTR, state.as_attr()) {
        console::warn_2(&"roma: could not update reveal state".into(), &err);
    }
}
