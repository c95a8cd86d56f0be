//! Content data types for the landing page.
//!
//! Everything here is built from string literals and is meant to live in
//! `const` items: the page has no runtime content loading, so every type is
//! `Copy` and borrows `'static` text.
//!
//! # Example
//!
//! ```rust
//! use roma_site::types::{Coordinates, FranchiseRecord};
//!
//! const HQ: FranchiseRecord = FranchiseRecord {
//!     title: "ANTALYA ANA BAYİ",
//!     address: "Döşemealtı/Antalya",
//!     phone: "+90 544 737 88 07",
//!     email: "romaburgerr@gmail.com",
//!     coordinates: Coordinates::new(37.017, 30.605),
//!     map_label: "Antalya Ana Bayi",
//! };
//!
//! assert!(HQ.coordinates.is_valid());
//! ```

use serde::{Deserialize, Serialize};

use crate::anchors::ScrollTarget;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, valid range `[-90, 90]`
    pub lat: f64,
    /// Longitude, valid range `[-180, 180]`
    pub lng: f64,
}

impl Coordinates {
    /// Build a coordinate pair (no range check, see [`Coordinates::is_valid`]).
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Approximate equality used when comparing rendered markers to records.
    pub fn approx_eq(&self, other: &Coordinates) -> bool {
        const EPSILON: f64 = 1e-9;
        (self.lat - other.lat).abs() < EPSILON && (self.lng - other.lng).abs() < EPSILON
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Where the link scrolls to
    pub target: ScrollTarget<'static>,
}

/// A section heading split into a plain lead and an accented tail,
/// e.g. "Neden " + "Roma Burger?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Plain part
    pub lead: &'static str,
    /// Part rendered in the accent color
    pub accent: &'static str,
}

/// Feature card content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Card title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Emoji glyph shown above the title
    pub icon: &'static str,
}

/// Audience card content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AudienceItem {
    /// Card title
    pub title: &'static str,
    /// Emoji glyph shown above the title
    pub icon: &'static str,
}

/// One physical franchise / distribution location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FranchiseRecord {
    /// Card heading
    pub title: &'static str,
    /// Postal address, shown verbatim
    pub address: &'static str,
    /// Display form of the phone number, e.g. `+90 544 737 88 07`
    pub phone: &'static str,
    /// Contact email address
    pub email: &'static str,
    /// Marker position
    pub coordinates: Coordinates,
    /// Bold line of the marker popup
    pub map_label: &'static str,
}

/// A province served by the distribution network, rendered as a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceArea(pub &'static str);

impl ServiceArea {
    /// The badge text.
    pub const fn label(&self) -> &'static str {
        self.0
    }
}

/// Head-office contact block used by the footer and the call-to-action links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    /// Display phone number
    pub phone: &'static str,
    /// Email address
    pub email: &'static str,
    /// Postal address
    pub address: &'static str,
}

/// Opening hours line pair shown in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    /// Day range, e.g. "Pazartesi - Cuma"
    pub days: &'static str,
    /// Time range, e.g. "09:00 - 18:00"
    pub hours: &'static str,
}

/// Brand identity strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Brand {
    /// Brand mark text
    pub name: &'static str,
    /// Footer tagline
    pub tagline: &'static str,
    /// Copyright line
    pub copyright: &'static str,
}

/// Hero block copy. The headline is three lines with the middle one accented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    /// First headline line
    pub headline_top: &'static str,
    /// Accented middle line
    pub headline_accent: &'static str,
    /// Last headline line
    pub headline_bottom: &'static str,
    /// Paragraph below the headline
    pub subcopy: &'static str,
    /// Primary call to action
    pub cta: NavLink,
    /// Glyph inside the decorative disc
    pub visual: &'static str,
}

/// A call-to-action block that ends in a dial link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    /// Heading line
    pub heading: &'static str,
    /// Paragraph under the heading
    pub body: &'static str,
    /// Display phone number the button dials
    pub phone: &'static str,
}

/// Feature grid section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureSection {
    /// Section heading
    pub heading: Heading,
    /// Cards in display order
    pub items: &'static [FeatureItem],
}

/// Audience grid section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AudienceSection {
    /// Section heading
    pub heading: Heading,
    /// Cards in display order
    pub items: &'static [AudienceItem],
}

/// Fixed map viewport. User pan/zoom never writes back here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Initial center
    pub center: Coordinates,
    /// Initial zoom level
    pub zoom: u8,
}

/// Franchise directory section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FranchiseSection {
    /// Intro paragraph
    pub intro: &'static str,
    /// Label above the service-area badges
    pub service_area_label: &'static str,
    /// Badges in display order
    pub service_areas: &'static [ServiceArea],
    /// One card and one marker per record
    pub records: &'static [FranchiseRecord],
    /// Map viewport
    pub map: MapView,
    /// Sub-dealer prompt at the bottom of the section
    pub sub_dealer: CallToAction,
}

/// All content of the page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SiteContent {
    /// Brand strings
    pub brand: Brand,
    /// Page `<title>` and description meta
    pub page_title: &'static str,
    /// `<meta name="description">`
    pub page_description: &'static str,
    /// Navigation links in order
    pub nav: &'static [NavLink],
    /// Header call-to-action button
    pub header_cta: NavLink,
    /// Hero block
    pub hero: HeroCopy,
    /// Phrase repeated by both marquee strips
    pub marquee_phrase: &'static str,
    /// "Why us" feature grid
    pub features: FeatureSection,
    /// "Who is it for" grid
    pub audience: AudienceSection,
    /// Franchise directory
    pub franchises: FranchiseSection,
    /// Closing call to action
    pub closing_cta: CallToAction,
    /// Footer contact block
    pub contact: ContactInfo,
    /// Footer opening hours
    pub hours: OpeningHours,
}

impl SiteContent {
    /// Every scroll action the page exposes, labelled for reports.
    ///
    /// Includes the brand mark (page top), every nav link, the header button
    /// and the hero call to action.
    pub fn scroll_actions(&self) -> Vec<(&'static str, ScrollTarget<'static>)> {
        let mut actions = Vec::with_capacity(self.nav.len() + 3);
        actions.push((self.brand.name, ScrollTarget::Top));
        actions.extend(self.nav.iter().map(|link| (link.label, link.target)));
        actions.push((self.header_cta.label, self.header_cta.target));
        actions.push((self.hero.cta.label, self.hero.cta.target));
        actions
    }
}
