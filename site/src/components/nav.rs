//! Fixed navigation header.

use leptos::prelude::*;

use crate::anchors::ScrollTarget;
use crate::motion::stagger_delay;
use crate::types::NavLink;

/// Header with the brand mark, the section links and the contact button.
///
/// Every action is an `<a>` with a real `href` fallback plus a
/// `data-scroll` target; the runtime turns the click into a smooth scroll and
/// resolves the target only at click time.
#[component]
pub fn NavigationBar(
    /// Brand mark text, scrolls to the page top
    brand: &'static str,
    /// Links in display order
    links: &'static [NavLink],
    /// Button at the right edge
    cta: NavLink,
) -> impl IntoView {
    let top = ScrollTarget::Top;

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href=top.href() class="nav-brand enter-from-left" data-scroll=top.as_attr()>
                    {brand}
                </a>
                <div class="nav-links">
                    {links
                        .iter()
                        .enumerate()
                        .map(|(idx, link)| {
                            view! {
                                <a
                                    href=link.target.href()
                                    class="nav-link enter-drop"
                                    style=stagger_delay(0, 100, idx)
                                    data-scroll=link.target.as_attr()
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <a href=cta.target.href() class="nav-cta enter-from-right" data-scroll=cta.target.as_attr()>
                    {cta.label}
                </a>
            </div>
        </nav>
    }
}
