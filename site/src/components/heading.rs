use leptos::prelude::*;

use crate::motion::{Reveal, RevealState};
use crate::types::Heading;

/// Section title with an accented tail, revealed on first view.
#[component]
pub fn SectionHeading(heading: Heading) -> impl IntoView {
    let reveal = Reveal::fade_up(20);

    view! {
        <h2
            class=format!("section-title {}", reveal.class())
            style=reveal.style()
            data-reveal=RevealState::Unseen.as_attr()
        >
            {heading.lead}
            <span class="accent">{heading.accent}</span>
        </h2>
    }
}
