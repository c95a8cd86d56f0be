use leptos::prelude::*;

use crate::motion::MarqueeConfig;

/// Scrolling strip repeating `phrase` back to back.
///
/// Only the first copy is exposed to assistive technology.
#[component]
pub fn MarqueeBanner(
    phrase: &'static str,
    #[prop(default = MarqueeConfig::default())] config: MarqueeConfig,
) -> impl IntoView {
    let copies = (0..config.copies())
        .map(|idx| {
            view! {
                <span class="marquee-item" aria-hidden=(idx > 0).then_some("true")>
                    {phrase}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="marquee">
            <div class="marquee-track">{copies}</div>
        </div>
    }
}
