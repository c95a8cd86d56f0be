//! Browser tests, run with `wasm-pack test --headless --firefox site/wasm`.

use js_sys::{Function, Object, Reflect};
use roma_site::content::ROMA_BURGER;
use roma_site::map::{MapSpec, MarkerIcon, TileLayer, MAP_CONTAINER_ID, MAP_DATA_ATTR};
use roma_site::motion::{RevealState, REVEAL_ATTR, RUNTIME_ATTR};
use roma_site::styles::MAP_READY_ATTR;
use roma_site_wasm::{map, mark_running, reveal, scroll};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window_and_document() -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

#[wasm_bindgen_test]
fn reveal_advances_once() {
    let (_, document) = window_and_document();
    let card = document.create_element("div").unwrap();
    card.set_attribute(REVEAL_ATTR, "unseen").unwrap();

    reveal::advance(&card, RevealState::on_transition_end);
    assert_eq!(card.get_attribute(REVEAL_ATTR).as_deref(), Some("unseen"));

    reveal::advance(&card, RevealState::on_visible);
    assert_eq!(card.get_attribute(REVEAL_ATTR).as_deref(), Some("animating"));

    reveal::advance(&card, RevealState::on_transition_end);
    reveal::advance(&card, RevealState::on_visible);
    assert_eq!(card.get_attribute(REVEAL_ATTR).as_deref(), Some("settled"));
}

#[wasm_bindgen_test]
fn map_mount_without_container_is_a_no_op() {
    let (_, document) = window_and_document();
    assert!(map::mount(&document).is_ok());
}

#[wasm_bindgen_test]
fn running_runtime_marks_the_document() {
    let (_, document) = window_and_document();
    let root = document.document_element().unwrap();
    root.remove_attribute(RUNTIME_ATTR).unwrap();

    mark_running(&document).unwrap();
    assert!(root.has_attribute(RUNTIME_ATTR));
}

/// `<div class="map-frame"><div id="franchise-map" data-map=...></div></div>`
fn map_frame(document: &Document) -> Element {
    let spec = MapSpec::from_records(
        ROMA_BURGER.franchises.map,
        TileLayer::carto_dark(),
        MarkerIcon::default(),
        ROMA_BURGER.franchises.records,
    );
    let frame = document.create_element("div").unwrap();
    frame.set_class_name("map-frame");
    let container = document.create_element("div").unwrap();
    container.set_id(MAP_CONTAINER_ID);
    container
        .set_attribute(MAP_DATA_ATTR, &spec.to_json().unwrap())
        .unwrap();
    frame.append_child(&container).unwrap();
    document.body().unwrap().append_child(&frame).unwrap();
    frame
}

#[wasm_bindgen_test]
fn map_without_leaflet_keeps_the_marker_list() {
    let (_, document) = window_and_document();
    let frame = map_frame(&document);

    assert!(map::mount(&document).is_ok());
    assert!(!frame.has_attribute(MAP_READY_ATTR));

    frame.remove();
}

#[wasm_bindgen_test]
fn map_is_created_in_a_visible_frame() {
    let (_, document) = window_and_document();
    let frame = map_frame(&document);
    let global = js_sys::global();

    // stand-in `L` that records the frame state at creation time, then fails
    let leaflet = Object::new();
    let create = Function::new_with_args(
        "container, options",
        "globalThis.readyAtCreate = container.parentElement.hasAttribute('data-map-ready'); \
         throw new Error('map unavailable');",
    );
    Reflect::set(&leaflet, &JsValue::from_str("map"), &create).unwrap();
    Reflect::set(&global, &JsValue::from_str("L"), &leaflet).unwrap();

    let result = map::mount(&document);
    let ready_at_create = Reflect::get(&global, &JsValue::from_str("readyAtCreate")).unwrap();
    Reflect::delete_property(&global, &JsValue::from_str("L")).unwrap();

    assert!(result.is_err());
    assert_eq!(ready_at_create.as_bool(), Some(true));
    assert!(!frame.has_attribute(MAP_READY_ATTR));

    frame.remove();
}

#[wasm_bindgen_test]
fn click_on_missing_anchor_keeps_position() {
    let (window, document) = window_and_document();
    scroll::install(&window, &document).unwrap();

    let link: HtmlElement = document.create_element("a").unwrap().dyn_into().unwrap();
    link.set_attribute("href", "#franchise").unwrap();
    link.set_attribute("data-scroll", "franchise").unwrap();
    document.body().unwrap().append_child(&link).unwrap();

    let before = window.scroll_y().unwrap();
    link.click();
    assert_eq!(window.scroll_y().unwrap(), before);
    assert_ne!(window.location().hash().unwrap(), "#franchise");

    link.remove();
}
