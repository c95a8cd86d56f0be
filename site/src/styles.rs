//! CSS for the landing page.
//!
//! [`SITE_CSS`] only references `--color-*` custom properties; the palette is
//! prepended by [`page_css`] from the selected [`Theme`]. Motion rules come
//! from [`crate::motion`].

use crate::motion::{reveal_css, LoopAnimation, MarqueeConfig, ENTRANCES};
use crate::theme::Theme;

/// Content Security Policy for the static page: own scripts and wasm, the
/// Leaflet CDN, Google Fonts and the CARTO tile servers.
pub const CSP: &str = "default-src 'self'; \
    script-src 'self' 'wasm-unsafe-eval' https://unpkg.com; \
    style-src 'self' 'unsafe-inline' https://unpkg.com https://fonts.googleapis.com; \
    font-src https://fonts.gstatic.com; \
    img-src 'self' data: https://unpkg.com https://*.basemaps.cartocdn.com; \
    connect-src 'self'";

/// Layout and component styles (palette-agnostic).
pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--color-background);
    color: var(--color-text);
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    line-height: 1.5;
}

h1, h2, h3, h4, .font-heading {
    font-family: "Oswald", sans-serif;
    text-transform: uppercase;
    margin: 0;
}

a { color: inherit; text-decoration: none; }

button { font: inherit; cursor: pointer; border: 0; background: none; color: inherit; }

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 24px; }

.accent { color: var(--color-accent); }

.section { padding: 80px 24px; }
section[id], footer[id] { scroll-margin-top: 72px; }
.section-alt { background: var(--color-surface-alt); }

.section-title {
    font-size: clamp(2.5rem, 6vw, 3.75rem);
    font-weight: 700;
    text-align: center;
    margin-bottom: 64px;
}

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: color-mix(in srgb, var(--color-background) 80%, transparent);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--color-border);
}
.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 24px;
}
.nav-brand {
    font-family: "Oswald", sans-serif;
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    color: var(--color-accent);
}
.nav-links { display: none; align-items: center; gap: 24px; }
.nav-link { color: var(--color-muted); font-weight: 500; transition: color 0.3s; }
.nav-link:hover { color: var(--color-accent); }
.nav-cta {
    padding: 8px 24px;
    border-radius: 999px;
    background: var(--color-accent);
    color: var(--color-on-accent);
    font-weight: 700;
    transition: background 0.3s, transform 0.2s;
}
.nav-cta:hover { background: var(--color-highlight); transform: scale(1.05); }

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 80px 24px 48px;
    overflow: hidden;
}
.hero-grid { display: grid; gap: 48px; align-items: center; }
.hero-title { font-size: clamp(3.75rem, 9vw, 6rem); font-weight: 700; line-height: 1.1; }
.hero-description { font-size: 1.25rem; color: var(--color-muted); max-width: 28rem; }
.hero-visual { display: flex; align-items: center; justify-content: center; }
.hero-disc {
    width: min(24rem, 80vw);
    aspect-ratio: 1;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 3.75rem;
    border: 2px solid color-mix(in srgb, var(--color-accent) 30%, transparent);
    background: linear-gradient(135deg,
        color-mix(in srgb, var(--color-accent) 20%, transparent),
        color-mix(in srgb, var(--color-highlight) 20%, transparent));
}

.btn {
    display: inline-block;
    padding: 16px 32px;
    border-radius: 999px;
    font-weight: 700;
    font-size: 1.125rem;
    transition: background 0.3s, transform 0.2s;
}
.btn:hover { transform: scale(1.05); }
.btn:active { transform: scale(0.95); }
.btn-highlight { background: var(--color-highlight); color: #ffffff; }
.btn-accent { background: var(--color-accent); color: var(--color-on-accent); font-size: 1.25rem; }
.btn-accent:hover { background: var(--color-highlight); color: #ffffff; }
.btn-light { background: #ffffff; color: var(--color-highlight); font-size: 1.25rem; }

/* Marquee */
.marquee {
    padding: 24px 0;
    background: var(--color-surface);
    border-top: 1px solid var(--color-border);
    border-bottom: 1px solid var(--color-border);
    overflow: hidden;
}
.marquee-track { display: inline-flex; white-space: nowrap; will-change: transform; }
.marquee-item {
    font-family: "Oswald", sans-serif;
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    color: var(--color-accent);
}

/* Cards */
.card-grid { display: grid; gap: 32px; }
.card {
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 24px;
    padding: 32px;
    transition: border-color 0.3s;
}
.card:hover { border-color: color-mix(in srgb, var(--color-accent) 50%, transparent); }
.card-icon { font-size: 3.75rem; margin-bottom: 16px; }
.feature-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 12px; }
.feature-description { color: var(--color-muted); margin: 0; }
.audience-card { text-align: center; }
.audience-title { font-size: 1.25rem; font-weight: 700; }

/* Franchises */
.franchise-intro {
    max-width: 56rem;
    margin: 0 auto 48px;
    text-align: center;
    font-size: 1.375rem;
    color: var(--color-muted);
}
.service-areas {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 12px;
    margin-bottom: 64px;
    padding: 0;
    list-style: none;
}
.service-areas-label {
    width: 100%;
    text-align: center;
    font-size: 0.875rem;
    font-weight: 700;
    color: var(--color-muted);
}
.badge {
    padding: 8px 24px;
    border-radius: 999px;
    background: var(--color-surface);
    border: 1px solid color-mix(in srgb, var(--color-accent) 30%, transparent);
    color: var(--color-accent);
    font-family: "Oswald", sans-serif;
    font-weight: 700;
    font-size: 0.875rem;
    text-transform: uppercase;
}
.franchise-grid { margin-bottom: 64px; }
.franchise-title { font-size: 1.75rem; font-weight: 700; color: var(--color-accent); margin-bottom: 24px; }
.franchise-lines { list-style: none; margin: 0; padding: 0; display: grid; gap: 16px; }
.franchise-line { display: flex; align-items: flex-start; gap: 12px; font-size: 0.875rem; color: var(--color-muted); }
.franchise-line a { transition: color 0.3s; word-break: break-all; }
.franchise-line a:hover { color: var(--color-accent); }
.line-icon { color: var(--color-accent); font-size: 1.25rem; }

.map-frame {
    background: var(--color-surface);
    border: 1px solid var(--color-border);
    border-radius: 12px;
    padding: 16px;
    margin-bottom: 64px;
}
.franchise-map { height: 300px; width: 100%; border-radius: 12px; z-index: 0; }
.map-markers { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }
.map-frame:not([data-map-ready]) .franchise-map { display: none; }
.map-frame[data-map-ready] .map-markers {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
    white-space: nowrap;
}
.map-popup { text-align: center; padding: 8px; font-family: "Oswald", sans-serif; }
.map-popup strong { display: block; color: var(--color-accent); font-size: 0.875rem; text-transform: uppercase; }
.map-popup span { display: block; margin-top: 4px; color: #525252; font-size: 0.75rem; }

.sub-dealer {
    text-align: center;
    padding: 48px 32px;
    border-radius: 24px;
    border: 2px solid color-mix(in srgb, var(--color-accent) 30%, transparent);
    background: linear-gradient(90deg,
        color-mix(in srgb, var(--color-accent) 20%, transparent),
        color-mix(in srgb, var(--color-highlight) 20%, transparent));
}
.sub-dealer h3 { font-size: 1.75rem; margin-bottom: 16px; }
.sub-dealer p { font-size: 1.125rem; color: var(--color-muted); margin: 0 0 24px; }

/* Closing CTA */
.closing-cta {
    text-align: center;
    background: linear-gradient(90deg, var(--color-highlight), #ea580c);
    color: #ffffff;
}
.closing-cta h2 { font-size: clamp(2.25rem, 5vw, 3rem); margin-bottom: 24px; }
.closing-cta p { font-size: 1.25rem; opacity: 0.9; margin: 0 0 32px; }

/* Footer */
.footer { padding: 48px 24px; background: var(--color-background); border-top: 1px solid var(--color-border); }
.footer-grid { display: grid; gap: 32px; margin-bottom: 32px; }
.footer-brand { font-size: 1.5rem; color: var(--color-accent); margin-bottom: 16px; }
.footer-tagline { color: var(--color-muted); font-size: 1.125rem; font-weight: 500; margin: 0; }
.footer-heading { font-size: 1.25rem; margin-bottom: 16px; }
.footer-link { display: block; margin-bottom: 12px; font-size: 1.125rem; font-weight: 500; transition: color 0.3s; }
.footer-link:hover { color: var(--color-accent); }
.footer-muted { color: var(--color-muted); margin: 0 0 8px; }
.footer-copyright {
    border-top: 1px solid var(--color-border);
    padding-top: 32px;
    text-align: center;
    color: var(--color-muted);
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .hero-grid { grid-template-columns: 1fr 1fr; }
    .feature-grid, .franchise-grid, .footer-grid { grid-template-columns: repeat(3, 1fr); }
    .audience-grid { grid-template-columns: repeat(2, 1fr); }
    .franchise-map { height: 400px; }
}

@media (min-width: 1024px) {
    .audience-grid { grid-template-columns: repeat(4, 1fr); }
}
"#;

/// Attribute the runtime sets on `.map-frame` once Leaflet is mounted.
pub const MAP_READY_ATTR: &str = "data-map-ready";

/// Full stylesheet: palette, layout, motion.
pub fn page_css(theme: &Theme, marquee: &MarqueeConfig) -> String {
    let hero_float = LoopAnimation::hero_float();
    let marquee_loop = LoopAnimation::marquee(marquee);

    let mut css = theme.css_variables();
    css.push_str(SITE_CSS);
    css.push_str(reveal_css());
    for entrance in ENTRANCES {
        css.push_str(&entrance.css());
    }
    css.push_str(&hero_float.keyframes_css());
    css.push_str(&format!(".hero-float {{ animation: {}; }}\n", hero_float.animation()));
    css.push_str(&marquee_loop.keyframes_css());
    css.push_str(&format!(
        ".marquee-track {{ animation: {}; }}\n.marquee-item {{ padding-right: {}rem; }}\n",
        marquee_loop.animation(),
        marquee.spacing_rem
    ));
    css.push_str(
        "@media (prefers-reduced-motion: reduce) {\n    .hero-float, .marquee-track { animation: none; }\n}\n",
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_css_combines_palette_layout_and_motion() {
        let css = page_css(&Theme::noir(), &MarqueeConfig::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".nav {"));
        assert!(css.contains("@keyframes hero-float"));
        assert!(css.contains("@keyframes marquee-scroll"));
        assert!(css.contains("@keyframes enter-drop"));
        assert!(css.contains("[data-runtime] .reveal[data-reveal=\"unseen\"]"));
        assert!(css.contains(".marquee-item { padding-right: 2rem; }"));
    }

    #[test]
    fn layout_css_has_no_hard_coded_palette() {
        for color in ["#0a0a0a", "#FFC107", "#EF4444"] {
            assert!(!SITE_CSS.contains(color), "{color} leaked into SITE_CSS");
        }
    }
}
