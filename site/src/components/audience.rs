use leptos::prelude::*;

use super::SectionHeading;
use crate::anchors::Anchor;
use crate::motion::{Reveal, RevealState};
use crate::types::{AudienceItem, AudienceSection};

/// "Who is it for" grid on the alternate background.
#[component]
pub fn AudienceGrid(section: AudienceSection) -> impl IntoView {
    view! {
        <section id=Anchor::TargetAudience.id() class="section section-alt">
            <div class="container">
                <SectionHeading heading=section.heading />
                <div class="card-grid audience-grid">
                    {section
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! { <AudienceCard item=*item index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Single audience card, scaling in 100ms after its predecessor.
#[component]
pub fn AudienceCard(item: AudienceItem, index: usize) -> impl IntoView {
    let reveal = Reveal::scale_in(0.9).staggered(index, 100);

    view! {
        <article
            class=format!("card audience-card {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            <div class="card-icon" aria-hidden="true">{item.icon}</div>
            <h3 class="audience-title">{item.title}</h3>
        </article>
    }
}
