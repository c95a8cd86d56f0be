//! Leaflet mount for the franchise map.
//!
//! Leaflet is loaded by a classic `<script>` and reached through the global
//! `L`. Everything it is given comes from the [`MapSpec`] embedded in the
//! page; the icon is passed per marker, Leaflet's global defaults are never
//! touched. Popups are bound, never opened, so they stay closed until the
//! visitor clicks a pin.

use js_sys::{Array, Object, Reflect};
use roma_site::map::{MapMarker, MapSpec, MarkerIcon, MAP_CONTAINER_ID, MAP_DATA_ATTR};
use roma_site::styles::MAP_READY_ATTR;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement};

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement, options: &Object) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    /// `L.TileLayer`
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    /// `L.Icon`
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &Object) -> Icon;

    /// `L.Marker`
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &Array, options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &Element) -> Marker;
}

/// Mount the map if the page has one and Leaflet is loaded.
///
/// A page without a container, with an empty payload or without Leaflet is
/// left as rendered (the marker list stays visible). Otherwise the frame is
/// marked ready before Leaflet is created and unmarked if that fails.
/// Markers with invalid coordinates are skipped with a warning.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(MAP_CONTAINER_ID) else {
        return Ok(());
    };
    let payload = container.get_attribute(MAP_DATA_ATTR).unwrap_or_default();
    if payload.is_empty() {
        return Ok(());
    }
    if !leaflet_loaded()? {
        console::info_1(&"roma: Leaflet not loaded, keeping the marker list".into());
        return Ok(());
    }

    let spec = MapSpec::from_json(&payload)
        .map_err(|err| JsValue::from_str(&format!("invalid map payload: {err}")))?;
    let container: HtmlElement = container.dyn_into()?;

    // the container is `display: none` until the frame is ready, and Leaflet
    // sizes its viewport from the container when the map is created
    let frame = container.parent_element();
    if let Some(frame) = &frame {
        frame.set_attribute(MAP_READY_ATTR, "")?;
    }
    let drawn = draw(document, &container, &spec);
    if let (Err(_), Some(frame)) = (&drawn, &frame) {
        frame.remove_attribute(MAP_READY_ATTR)?;
    }
    drawn
}

fn draw(document: &Document, container: &HtmlElement, spec: &MapSpec) -> Result<(), JsValue> {
    let map = leaflet_map(container, &Object::new())?;
    map.set_view(
        &lat_lng(spec.view.center.lat, spec.view.center.lng),
        f64::from(spec.view.zoom),
    );

    tile_layer(&spec.tiles.url_template, &tile_options(spec)?).add_to(&map);

    let pin = icon(&icon_options(&spec.icon)?);
    for marker_spec in &spec.markers {
        if !marker_spec.position.is_valid() {
            console::warn_1(&format!("roma: skipping marker {:?}, bad coordinates", marker_spec.label).into());
            continue;
        }
        let options = object(&[("icon", pin.clone().into()), ("title", marker_spec.label.as_str().into())])?;
        marker(&lat_lng(marker_spec.position.lat, marker_spec.position.lng), &options)
            .add_to(&map)
            .bind_popup(&popup(document, marker_spec)?);
    }
    Ok(())
}

fn leaflet_loaded() -> Result<bool, JsValue> {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L"))
}

fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}

fn pair<T: Into<f64> + Copy>(values: [T; 2]) -> JsValue {
    Array::of2(&JsValue::from_f64(values[0].into()), &JsValue::from_f64(values[1].into())).into()
}

fn object(entries: &[(&str, JsValue)]) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object)
}

fn tile_options(spec: &MapSpec) -> Result<Object, JsValue> {
    let subdomains: Array = spec
        .tiles
        .subdomains
        .iter()
        .map(|subdomain| JsValue::from_str(subdomain))
        .collect();
    object(&[
        ("attribution", spec.tiles.attribution.as_str().into()),
        ("subdomains", subdomains.into()),
        ("maxZoom", JsValue::from_f64(f64::from(spec.tiles.max_zoom))),
    ])
}

fn icon_options(icon: &MarkerIcon) -> Result<Object, JsValue> {
    object(&[
        ("iconUrl", icon.icon_url.as_str().into()),
        ("iconRetinaUrl", icon.icon_retina_url.as_str().into()),
        ("shadowUrl", icon.shadow_url.as_str().into()),
        ("iconSize", pair(icon.icon_size)),
        ("iconAnchor", pair(icon.icon_anchor)),
        ("popupAnchor", pair(icon.popup_anchor)),
        ("shadowSize", pair(icon.shadow_size)),
    ])
}

/// Popup body built from text nodes, so labels are never parsed as HTML.
fn popup(document: &Document, marker: &MapMarker) -> Result<Element, JsValue> {
    let body = document.create_element("div")?;
    body.set_class_name("map-popup");

    let label = document.create_element("strong")?;
    label.set_text_content(Some(&marker.label));
    let title = document.create_element("span")?;
    title.set_text_content(Some(&marker.title));

    body.append_child(&label)?;
    body.append_child(&title)?;
    Ok(body)
}
