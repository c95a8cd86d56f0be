use leptos::prelude::*;

use crate::links::derive_dial_uri;
use crate::motion::{Reveal, RevealState};
use crate::types::CallToAction;

/// Id of the closing banner.
pub const CTA_SECTION_ID: &str = "franchise-cta";

/// Full-width closing banner with a dial button.
#[component]
pub fn CallToActionBanner(cta: CallToAction) -> impl IntoView {
    let reveal = Reveal::scale_in(0.95).lasting(600);

    view! {
        <section id=CTA_SECTION_ID class="section closing-cta">
            <div
                class=format!("container {}", reveal.class())
                style=reveal.style()
                data-reveal=RevealState::Unseen.as_attr()
            >
                <h2>{cta.heading}</h2>
                <p>{cta.body}</p>
                <a class="btn btn-light" href=derive_dial_uri(cta.phone)>
                    {format!("📞 {}", cta.phone)}
                </a>
            </div>
        </section>
    }
}
