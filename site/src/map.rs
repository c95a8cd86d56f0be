//! Franchise map model.
//!
//! The map widget itself (Leaflet) is an external collaborator. This module
//! builds everything it needs as plain data: the fixed viewport, the tile
//! source, the marker icon and one marker per franchise record. The
//! [`MapSpec`] travels to the browser as JSON inside the rendered page.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinates, FranchiseRecord, MapView};

/// Id of the element the runtime mounts the map into.
pub const MAP_CONTAINER_ID: &str = "franchise-map";

/// Attribute on the container carrying the [`MapSpec`] JSON.
pub const MAP_DATA_ATTR: &str = "data-map";

/// Leaflet's own image directory on unpkg, used for the default marker icon.
pub const LEAFLET_IMAGES: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/";

/// Remote raster tile source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    /// Template with `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders
    pub url_template: String,
    /// Values substituted for `{s}`
    pub subdomains: Vec<String>,
    /// Attribution HTML shown in the map corner
    pub attribution: String,
    /// Highest zoom the source serves
    pub max_zoom: u8,
}

impl TileLayer {
    /// CARTO dark basemap over OpenStreetMap data.
    pub fn carto_dark() -> Self {
        TileLayer {
            url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: concat!(
                r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors "#,
                r#"&copy; <a href="https://carto.com/attributions">CARTO</a>"#
            )
            .into(),
            max_zoom: 19,
        }
    }

    /// Subdomain for a tile, spread the same way Leaflet does.
    pub fn subdomain_for(&self, x: u32, y: u32) -> &str {
        if self.subdomains.is_empty() {
            return "";
        }
        let index = (u64::from(x) + u64::from(y)) % self.subdomains.len() as u64;
        &self.subdomains[index as usize]
    }

    /// Concrete URL of one tile. `retina` selects the `@2x` variant.
    pub fn tile_url(&self, x: u32, y: u32, z: u8, retina: bool) -> String {
        self.url_template
            .replace("{s}", self.subdomain_for(x, y))
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", if retina { "@2x" } else { "" })
    }
}

/// Marker image configuration, handed to the map at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIcon {
    /// Pin image
    pub icon_url: String,
    /// High-DPI pin image
    pub icon_retina_url: String,
    /// Shadow image
    pub shadow_url: String,
    /// Pin size in px `[w, h]`
    pub icon_size: [u16; 2],
    /// Point of the pin touching the coordinate
    pub icon_anchor: [u16; 2],
    /// Popup tip offset relative to the anchor
    pub popup_anchor: [i16; 2],
    /// Shadow size in px
    pub shadow_size: [u16; 2],
}

impl MarkerIcon {
    /// The stock Leaflet pin served from `base` (a directory URL).
    pub fn leaflet_default(base: &str) -> Self {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        MarkerIcon {
            icon_url: format!("{base}marker-icon.png"),
            icon_retina_url: format!("{base}marker-icon-2x.png"),
            shadow_url: format!("{base}marker-shadow.png"),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

impl Default for MarkerIcon {
    fn default() -> Self {
        MarkerIcon::leaflet_default(LEAFLET_IMAGES)
    }
}

/// One pin on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Pin position
    pub position: Coordinates,
    /// Bold popup line
    pub label: String,
    /// Secondary popup line
    pub title: String,
}

impl From<&FranchiseRecord> for MapMarker {
    fn from(record: &FranchiseRecord) -> Self {
        MapMarker {
            position: record.coordinates,
            label: record.map_label.to_string(),
            title: record.title.to_string(),
        }
    }
}

/// Everything the browser needs to draw the franchise map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSpec {
    /// Initial viewport
    pub view: MapView,
    /// Tile source
    pub tiles: TileLayer,
    /// Pin image
    pub icon: MarkerIcon,
    /// One marker per record, in record order
    pub markers: Vec<MapMarker>,
}

impl MapSpec {
    /// Build the map for `records`: exactly one marker each, no clustering.
    pub fn from_records(
        view: MapView,
        tiles: TileLayer,
        icon: MarkerIcon,
        records: &[FranchiseRecord],
    ) -> Self {
        MapSpec {
            view,
            tiles,
            icon,
            markers: records.iter().map(MapMarker::from).collect(),
        }
    }

    /// Serialize for the `data-map` attribute.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the `data-map` attribute.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FRANCHISES, FRANCHISE_MAP};

    fn spec() -> MapSpec {
        MapSpec::from_records(
            FRANCHISE_MAP,
            TileLayer::carto_dark(),
            MarkerIcon::default(),
            FRANCHISES,
        )
    }

    #[test]
    fn one_marker_per_record() {
        let spec = spec();
        assert_eq!(spec.markers.len(), FRANCHISES.len());
        for (marker, record) in spec.markers.iter().zip(FRANCHISES) {
            assert!(marker.position.approx_eq(&record.coordinates));
            assert_eq!(marker.label, record.map_label);
            assert_eq!(marker.title, record.title);
        }
    }

    #[test]
    fn empty_record_list_has_no_markers() {
        let spec = MapSpec::from_records(
            FRANCHISE_MAP,
            TileLayer::carto_dark(),
            MarkerIcon::default(),
            &[],
        );
        assert!(spec.markers.is_empty());
    }

    #[test]
    fn fixed_viewport() {
        let spec = spec();
        assert_eq!(spec.view.center, Coordinates::new(37.5, 30.4));
        assert_eq!(spec.view.zoom, 7);
    }

    #[test]
    fn tile_urls_are_parameterized() {
        let tiles = TileLayer::carto_dark();
        assert_eq!(
            tiles.tile_url(73, 50, 7, false),
            "https://a.basemaps.cartocdn.com/dark_all/7/73/50.png"
        );
        assert_eq!(
            tiles.tile_url(74, 50, 7, true),
            "https://b.basemaps.cartocdn.com/dark_all/7/74/50@2x.png"
        );
        assert!(tiles.attribution.contains("OpenStreetMap"));
        assert!(tiles.attribution.contains("CARTO"));
    }

    #[test]
    fn icon_is_explicit_configuration() {
        let icon = MarkerIcon::leaflet_default("/assets/leaflet");
        assert_eq!(icon.icon_url, "/assets/leaflet/marker-icon.png");
        assert_eq!(icon.shadow_url, "/assets/leaflet/marker-shadow.png");
        assert_eq!(icon.icon_size, [25, 41]);
        assert_eq!(icon.icon_anchor, [12, 41]);
    }

    #[test]
    fn json_payload_survives_the_trip() {
        let spec = spec();
        let json = spec.to_json().unwrap();
        assert!(json.contains("\"markers\""));
        assert_eq!(MapSpec::from_json(&json).unwrap(), spec);
    }
}
