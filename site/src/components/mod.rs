//! Leptos components for the landing page.
//!
//! Each section is a stateless `#[component]` rendered once on the server.
//! Interactive behaviour is attached afterwards by the wasm runtime through
//! `data-*` attributes: `data-scroll` on scroll actions, `data-reveal` on
//! viewport-triggered entrances and `data-map` on the map container.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── Page
//!     ├── NavigationBar
//!     ├── HeroSection
//!     ├── MarqueeBanner
//!     ├── FeatureGrid ── FeatureCard
//!     ├── MarqueeBanner
//!     ├── AudienceGrid ── AudienceCard
//!     ├── FranchiseDirectory
//!     │   ├── ServiceAreaBadges
//!     │   ├── FranchiseCard
//!     │   ├── FranchiseMap
//!     │   └── SubDealerCallout
//!     ├── CallToActionBanner
//!     └── Footer
//! ```

mod audience;
mod cta;
mod document;
mod features;
mod footer;
mod franchises;
mod heading;
mod hero;
mod map;
mod marquee;
mod nav;
mod page;

pub use audience::{AudienceCard, AudienceGrid};
pub use cta::{CallToActionBanner, CTA_SECTION_ID};
pub use document::PageDocument;
pub use features::{FeatureCard, FeatureGrid};
pub use footer::Footer;
pub use franchises::{FranchiseCard, FranchiseDirectory, ServiceAreaBadges, SubDealerCallout};
pub use heading::SectionHeading;
pub use hero::HeroSection;
pub use map::FranchiseMap;
pub use marquee::MarqueeBanner;
pub use nav::NavigationBar;
pub use page::Page;
