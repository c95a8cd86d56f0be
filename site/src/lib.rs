//! # roma-site
//!
//! Leptos SSR renderer for the Roma Burger franchise landing page.
//!
//! The page is rendered once, ahead of time, into a single static HTML
//! document. Everything interactive (smooth scrolling, viewport reveals and
//! the franchise map) is attached in the browser by the `roma-site-wasm`
//! runtime, which reads the `data-*` attributes this crate emits.
//!
//! ## Quick Start
//!
//! ```rust
//! use roma_site::{render_page, PageOptions, types::SiteContent};
//!
//! let html = render_page(&SiteContent::roma_burger(), &PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="franchises""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content model
//! - [`content`] - the Roma Burger copy and records
//! - [`anchors`] - section ids, scroll targets and the scroll routine
//! - [`motion`] - loop animations, entrances and the reveal state machine
//! - [`map`] - Leaflet map description, serialized into the page
//! - [`links`] - `tel:`/`mailto:` derivation
//! - [`theme`] - palettes emitted as CSS custom properties
//! - [`validate`] - content checks run before publishing
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod anchors;
#[cfg(feature = "render")]
pub mod components;
pub mod content;
pub mod links;
pub mod map;
pub mod motion;
pub mod styles;
pub mod theme;
pub mod types;
pub mod validate;

#[cfg(feature = "render")]
use components::PageDocument;
#[cfg(feature = "render")]
use leptos::{prelude::*, tachys::view::RenderHtml};
use motion::MarqueeConfig;
use theme::ThemeVariant;
use types::SiteContent;

/// Default location of the wasm boot module, relative to `index.html`.
pub const BOOT_SCRIPT: &str = "boot.js";

/// Default location of the wasm-bindgen glue, relative to `index.html`.
pub const WASM_GLUE: &str = "./pkg/roma_site_wasm.js";

/// Render the complete page, `<!DOCTYPE html>` included.
///
/// Rendering is pure: the same content and options always produce the same
/// string.
#[cfg(feature = "render")]
pub fn render_page(content: &SiteContent, options: &PageOptions) -> String {
    let doc = view! { <PageDocument content=*content options=options.clone() /> };

    let html = doc.to_html();
    tracing::debug!(
        bytes = html.len(),
        theme = %options.theme,
        records = content.franchises.records.len(),
        "page rendered"
    );

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Source of the ES module that starts the wasm runtime.
///
/// `wasm_glue` is the path of the wasm-bindgen `--target web` glue as seen
/// from the boot module.
///
/// ```rust
/// let js = roma_site::boot_module("./pkg/roma_site_wasm.js");
/// assert!(js.starts_with("import init from './pkg/roma_site_wasm.js';"));
/// ```
pub fn boot_module(wasm_glue: &str) -> String {
    format!(
        "import init from '{}';\n\ninit().catch((err) => console.error('roma runtime failed to start', err));\n",
        wasm_glue.replace('\'', "\\'")
    )
}

/// Rendering options independent of the content.
#[derive(Clone, Debug, Default)]
pub struct PageOptions {
    /// Palette
    pub theme: ThemeVariant,
    /// Marquee strip geometry and speed
    pub marquee: MarqueeConfig,
    /// External stylesheets and scripts
    pub assets: RuntimeAssets,
}

/// External assets referenced by the page.
///
/// Empty paths are skipped, so [`RuntimeAssets::default`] renders a page
/// without any external reference (static content only, no map).
///
/// ```rust
/// use roma_site::RuntimeAssets;
///
/// // CDN Leaflet and fonts, runtime next to index.html
/// let assets = RuntimeAssets::cdn();
/// assert!(assets.leaflet_js.starts_with("https://unpkg.com/leaflet"));
///
/// // Nothing external
/// let assets = RuntimeAssets::default();
/// assert!(assets.boot_script.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuntimeAssets {
    /// Leaflet stylesheet
    pub leaflet_css: String,
    /// Leaflet script, loaded before the runtime
    pub leaflet_js: String,
    /// Directory holding Leaflet's marker images
    pub leaflet_images: String,
    /// Web font stylesheet (Oswald)
    pub font_css: String,
    /// ES module booting the wasm runtime, see [`boot_module`]
    pub boot_script: String,
}

impl RuntimeAssets {
    /// Leaflet from unpkg, Oswald from Google Fonts, runtime at [`BOOT_SCRIPT`].
    pub fn cdn() -> Self {
        RuntimeAssets {
            leaflet_css: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".into(),
            leaflet_js: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".into(),
            leaflet_images: map::LEAFLET_IMAGES.into(),
            font_css: "https://fonts.googleapis.com/css2?family=Oswald:wght@400;500;700&display=swap"
                .into(),
            boot_script: BOOT_SCRIPT.into(),
        }
    }

    /// Same as [`RuntimeAssets::cdn`] without the map library: the runtime
    /// still handles scrolling and reveals, the map stays a plain list.
    pub fn without_map(mut self) -> Self {
        self.leaflet_css.clear();
        self.leaflet_js.clear();
        self
    }
}

#[cfg(all(test, feature = "render"))]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_page(&SiteContent::roma_burger(), &PageOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("ROMA BURGER"));
        assert!(html.contains(r#"data-theme="noir""#));
    }

    #[test]
    fn default_assets_render_no_external_reference() {
        let html = render_page(&SiteContent::roma_burger(), &PageOptions::default());

        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn cdn_assets_are_linked() {
        let options = PageOptions {
            assets: RuntimeAssets::cdn(),
            ..Default::default()
        };
        let html = render_page(&SiteContent::roma_burger(), &options);

        assert!(html.contains(r#"src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js""#));
        assert!(html.contains(r#"<script type="module" src="boot.js">"#));
        let leaflet = html.find("leaflet.js").unwrap();
        let boot = html.find("boot.js").unwrap();
        assert!(leaflet < boot);
    }

    #[test]
    fn without_map_drops_only_leaflet() {
        let assets = RuntimeAssets::cdn().without_map();
        assert!(assets.leaflet_js.is_empty());
        assert!(assets.leaflet_css.is_empty());
        assert_eq!(assets.boot_script, BOOT_SCRIPT);
        assert!(!assets.font_css.is_empty());
    }

    #[test]
    fn boot_module_escapes_quotes() {
        let js = boot_module("./it's/glue.js");
        assert!(js.contains(r"import init from './it\'s/glue.js';"));
    }
}
