//! Root document component: `<head>` assets, the page and the runtime boot.

use leptos::prelude::*;

use super::Page;
use crate::map::{MapSpec, MarkerIcon, TileLayer};
use crate::styles::{page_css, CSP};
use crate::types::SiteContent;
use crate::PageOptions;

/// The complete HTML document.
#[component]
pub fn PageDocument(content: SiteContent, options: PageOptions) -> impl IntoView {
    let theme = options.theme.theme();
    let css = page_css(&theme, &options.marquee);
    let icon = if options.assets.leaflet_images.is_empty() {
        MarkerIcon::default()
    } else {
        MarkerIcon::leaflet_default(&options.assets.leaflet_images)
    };
    let map = MapSpec::from_records(
        content.franchises.map,
        TileLayer::carto_dark(),
        icon,
        content.franchises.records,
    );
    let assets = options.assets;

    let leaflet_css = (!assets.leaflet_css.is_empty())
        .then(|| view! { <link rel="stylesheet" href=assets.leaflet_css.clone() /> });
    let font_css = (!assets.font_css.is_empty())
        .then(|| view! { <link rel="stylesheet" href=assets.font_css.clone() /> });

    view! {
        <html lang="tr" data-theme=theme.name>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{content.page_title}</title>
                <meta name="description" content=content.page_description />
                {font_css}
                {leaflet_css}
                <style>{css}</style>
            </head>
            <body>
                <Page content=content map=map marquee=options.marquee />
                <RuntimeScripts leaflet_js=assets.leaflet_js boot_script=assets.boot_script />
            </body>
        </html>
    }
}

/// Leaflet first, then the wasm boot module (module scripts are deferred,
/// so `L` is defined by the time the runtime starts).
#[component]
fn RuntimeScripts(leaflet_js: String, boot_script: String) -> impl IntoView {
    view! {
        {(!leaflet_js.is_empty()).then(|| view! { <script src=leaflet_js.clone()></script> })}
        {(!boot_script.is_empty())
            .then(|| view! { <script type="module" src=boot_script.clone()></script> })}
    }
}
