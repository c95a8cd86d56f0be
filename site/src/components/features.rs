use leptos::prelude::*;

use super::SectionHeading;
use crate::anchors::Anchor;
use crate::motion::{Reveal, RevealState};
use crate::types::{FeatureItem, FeatureSection};

/// "Why us" grid, one card per item in order. An empty list renders an empty grid.
#[component]
pub fn FeatureGrid(section: FeatureSection) -> impl IntoView {
    view! {
        <section id=Anchor::Features.id() class="section">
            <div class="container">
                <SectionHeading heading=section.heading />
                <div class="card-grid feature-grid">
                    {section
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <FeatureCard item=*item index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Single feature card, fading up 200ms after its predecessor.
#[component]
pub fn FeatureCard(item: FeatureItem, index: usize) -> impl IntoView {
    let reveal = Reveal::fade_up(30).lasting(600).staggered(index, 200);

    view! {
        <article
            class=format!("card feature-card {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            <div class="card-icon" aria-hidden="true">{item.icon}</div>
            <h3 class="feature-title">{item.title}</h3>
            <p class="feature-description">{item.description}</p>
        </article>
    }
}
