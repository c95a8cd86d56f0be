use leptos::prelude::*;

use super::{
    AudienceGrid, CallToActionBanner, FeatureGrid, Footer, FranchiseDirectory, HeroSection,
    MarqueeBanner, NavigationBar,
};
use crate::map::MapSpec;
use crate::motion::MarqueeConfig;
use crate::types::SiteContent;

/// Every section in fixed order: header, hero, marquee, features, marquee,
/// audience, franchises, closing banner, footer.
#[component]
pub fn Page(content: SiteContent, map: MapSpec, marquee: MarqueeConfig) -> impl IntoView {
    view! {
        <NavigationBar brand=content.brand.name links=content.nav cta=content.header_cta />
        <main>
            <HeroSection hero=content.hero />
            <MarqueeBanner phrase=content.marquee_phrase config=marquee />
            <FeatureGrid section=content.features />
            <MarqueeBanner phrase=content.marquee_phrase config=marquee />
            <AudienceGrid section=content.audience />
            <FranchiseDirectory section=content.franchises map=map />
            <CallToActionBanner cta=content.closing_cta />
        </main>
        <Footer brand=content.brand contact=content.contact hours=content.hours />
    }
}
