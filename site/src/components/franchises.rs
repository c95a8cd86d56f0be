//! Franchise directory: badges, cards, map and the sub-dealer callout.

use leptos::prelude::*;

use super::FranchiseMap;
use crate::anchors::Anchor;
use crate::links::{derive_dial_uri, derive_mail_uri};
use crate::map::MapSpec;
use crate::motion::{Reveal, RevealState};
use crate::types::{CallToAction, FranchiseRecord, FranchiseSection, ServiceArea};

/// The whole directory section.
///
/// `map` is built from the same records, so cards and markers agree one to one.
#[component]
pub fn FranchiseDirectory(section: FranchiseSection, map: MapSpec) -> impl IntoView {
    let intro = Reveal::fade_up(20);

    view! {
        <section id=Anchor::Franchises.id() class="section">
            <div class="container">
                <p
                    class=format!("franchise-intro {}", intro.class())
                    style=intro.style()
                    data-reveal=RevealState::Unseen.as_attr()
                >
                    {section.intro}
                </p>
                <ServiceAreaBadges label=section.service_area_label areas=section.service_areas />
                <div class="card-grid franchise-grid">
                    {section
                        .records
                        .iter()
                        .enumerate()
                        .map(|(index, record)| view! { <FranchiseCard record=*record index=index /> })
                        .collect::<Vec<_>>()}
                </div>
                <FranchiseMap spec=map />
                <SubDealerCallout cta=section.sub_dealer />
            </div>
        </section>
    }
}

/// Service-area badges in input order, duplicates included.
#[component]
pub fn ServiceAreaBadges(label: &'static str, areas: &'static [ServiceArea]) -> impl IntoView {
    view! {
        <ul class="service-areas">
            <li class="service-areas-label">{label}</li>
            {areas
                .iter()
                .enumerate()
                .map(|(index, area)| {
                    let reveal = Reveal::scale_in(0.8).lasting(300).delayed(300).staggered(index, 100);
                    view! {
                        <li
                            class=format!("badge {}", reveal.class())
                            style=reveal.style()
                            data-reveal=RevealState::Unseen.as_attr()
                        >
                            {area.label()}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

/// One franchise with dial and mail links derived from the display strings.
#[component]
pub fn FranchiseCard(record: FranchiseRecord, index: usize) -> impl IntoView {
    let reveal = Reveal::fade_up(30).lasting(600).staggered(index, 200);

    view! {
        <article
            class=format!("card franchise-card {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            <h3 class="franchise-title">{record.title}</h3>
            <ul class="franchise-lines">
                <li class="franchise-line">
                    <span class="line-icon" aria-hidden="true">"📍"</span>
                    <span class="franchise-address">{record.address}</span>
                </li>
                <li class="franchise-line">
                    <span class="line-icon" aria-hidden="true">"📞"</span>
                    <a class="franchise-phone" href=derive_dial_uri(record.phone)>{record.phone}</a>
                </li>
                <li class="franchise-line">
                    <span class="line-icon" aria-hidden="true">"✉️"</span>
                    <a class="franchise-email" href=derive_mail_uri(record.email)>{record.email}</a>
                </li>
            </ul>
        </article>
    }
}

/// Prompt for sub-dealers and wholesale buyers.
#[component]
pub fn SubDealerCallout(cta: CallToAction) -> impl IntoView {
    let reveal = Reveal::fade_up(30).lasting(600);

    view! {
        <div
            class=format!("sub-dealer {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            <h3>{cta.heading}</h3>
            <p>{cta.body}</p>
            <a class="btn btn-accent" href=derive_dial_uri(cta.phone)>
                {format!("📞 {}", cta.phone)}
            </a>
        </div>
    }
}
