use leptos::prelude::*;

use crate::map::{MapSpec, MAP_CONTAINER_ID};
use crate::motion::{Reveal, RevealState};

/// Map container plus a plain list of the markers.
///
/// The container carries the whole [`MapSpec`] as JSON in `data-map`. The
/// list mirrors the markers for crawlers and screen readers and stays hidden
/// visually once the interactive map is up.
#[component]
pub fn FranchiseMap(spec: MapSpec) -> impl IntoView {
    let payload = match spec.to_json() {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "map spec not serializable, map disabled");
            String::new()
        }
    };
    let reveal = Reveal::fade_up(30).lasting(600);

    let markers = spec
        .markers
        .into_iter()
        .map(|marker| {
            view! {
                <li
                    class="map-marker"
                    data-lat=marker.position.lat.to_string()
                    data-lng=marker.position.lng.to_string()
                >
                    <div class="map-popup">
                        <strong>{marker.label}</strong>
                        <span>{marker.title}</span>
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class=format!("map-frame {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            <div
                id=MAP_CONTAINER_ID
                class="franchise-map"
                role="region"
                aria-label="Bayi haritası"
                data-map=payload
            ></div>
            <ul class="map-markers">{markers}</ul>
        </div>
    }
}
