use leptos::prelude::*;

use crate::motion::entrance_delay;
use crate::types::HeroCopy;

/// Headline block with the floating decorative disc.
#[component]
pub fn HeroSection(hero: HeroCopy) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content enter-hero-copy" style=entrance_delay(200)>
                    <h1 class="hero-title">
                        {hero.headline_top}
                        <br />
                        <span class="accent">{hero.headline_accent}</span>
                        <br />
                        {hero.headline_bottom}
                    </h1>
                    <p class="hero-description">{hero.subcopy}</p>
                    <a
                        href=hero.cta.target.href()
                        class="btn btn-highlight"
                        data-scroll=hero.cta.target.as_attr()
                    >
                        {hero.cta.label}
                    </a>
                </div>
                <div class="hero-visual enter-hero-visual" style=entrance_delay(400)>
                    // the loop lives on its own wrapper so it never fights the entrance transform
                    <div class="hero-float">
                        <div class="hero-disc" aria-hidden="true">{hero.visual}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
