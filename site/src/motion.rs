//! Declarative motion: looping decorations, mount entrances and
//! viewport-triggered reveals.
//!
//! Everything here renders to CSS. The browser's animation engine owns the
//! timing, so there are no timers to cancel when an element goes away. The
//! only runtime state is the per-element [`RevealState`], flipped by the wasm
//! runtime when an element first scrolls into view.

use serde::{Deserialize, Serialize};

/// Name of the attribute holding an element's [`RevealState`].
pub const REVEAL_ATTR: &str = "data-reveal";

/// Attribute the browser runtime sets on `<html>` once it has started.
/// Unseen reveal targets are only hidden under it, so a page whose runtime
/// never loads shows everything.
pub const RUNTIME_ATTR: &str = "data-runtime";

/// CSS timing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start and end
    EaseInOut,
    /// Fast start, slow end
    EaseOut,
}

impl Easing {
    /// CSS keyword.
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
        }
    }
}

/// An infinite keyframe loop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoopAnimation {
    /// `@keyframes` name
    pub name: &'static str,
    /// `(percent, declarations)` pairs
    pub frames: Vec<(u8, String)>,
    /// One period
    pub duration_ms: u32,
    /// Timing function
    pub easing: Easing,
}

impl LoopAnimation {
    /// Hero visual bobbing 20px up and back every 3s.
    pub fn hero_float() -> Self {
        LoopAnimation {
            name: "hero-float",
            frames: vec![
                (0, "transform: translateY(0)".into()),
                (50, "transform: translateY(-20px)".into()),
                (100, "transform: translateY(0)".into()),
            ],
            duration_ms: 3_000,
            easing: Easing::EaseInOut,
        }
    }

    /// Horizontal marquee scroll from 0 to the configured end offset.
    pub fn marquee(config: &MarqueeConfig) -> Self {
        LoopAnimation {
            name: "marquee-scroll",
            frames: vec![
                (0, "transform: translateX(0)".into()),
                (100, format!("transform: translateX({})", config.end_offset())),
            ],
            duration_ms: config.duration_ms,
            easing: Easing::Linear,
        }
    }

    /// `@keyframes` rule.
    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for (percent, declarations) in &self.frames {
            css.push_str(&format!("    {percent}% {{ {declarations}; }}\n"));
        }
        css.push_str("}\n");
        css
    }

    /// Value for the `animation` property.
    pub fn animation(&self) -> String {
        format!(
            "{} {}ms {} infinite",
            self.name,
            self.duration_ms,
            self.easing.css()
        )
    }
}

/// How far the marquee track travels per loop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum MarqueeDistance {
    /// Exactly one copy of the phrase (plus its spacing); seamless for any
    /// phrase length or font
    OneRepetition,
    /// Fixed pixel distance; seamless only if it matches the rendered width
    Fixed(u32),
}

/// Marquee strip parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarqueeConfig {
    /// Copies of the phrase laid out back to back
    pub repetitions: usize,
    /// Gap after each copy, in rem
    pub spacing_rem: f32,
    /// One loop
    pub duration_ms: u32,
    /// Travel per loop
    pub distance: MarqueeDistance,
}

impl MarqueeConfig {
    /// Three copies, 20s, a fixed 1000px travel.
    pub const fn fixed() -> Self {
        MarqueeConfig {
            repetitions: 3,
            spacing_rem: 2.0,
            duration_ms: 20_000,
            distance: MarqueeDistance::Fixed(1_000),
        }
    }

    /// Copies actually rendered (never zero).
    pub fn copies(&self) -> usize {
        self.repetitions.max(1)
    }

    /// Final `translateX` argument.
    pub fn end_offset(&self) -> String {
        match self.distance {
            MarqueeDistance::OneRepetition => format!("calc(-100% / {})", self.copies()),
            MarqueeDistance::Fixed(px) => format!("-{px}px"),
        }
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig {
            distance: MarqueeDistance::OneRepetition,
            ..MarqueeConfig::fixed()
        }
    }
}

/// One-shot animation played on mount (header and hero).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Entrance {
    /// Class suffix and keyframes name (`enter-<name>`)
    pub name: &'static str,
    /// Starting declarations; the end state is the element's own style
    pub from: &'static str,
    /// Duration
    pub duration_ms: u32,
}

/// Header items drop in, brand and button slide from the sides, hero copy
/// and visual follow.
pub const ENTRANCES: [Entrance; 5] = [
    Entrance {
        name: "from-left",
        from: "opacity: 0; transform: translateX(-20px)",
        duration_ms: 500,
    },
    Entrance {
        name: "from-right",
        from: "opacity: 0; transform: translateX(20px)",
        duration_ms: 500,
    },
    Entrance {
        name: "drop",
        from: "opacity: 0; transform: translateY(-10px)",
        duration_ms: 500,
    },
    Entrance {
        name: "hero-copy",
        from: "opacity: 0; transform: translateX(-50px)",
        duration_ms: 800,
    },
    Entrance {
        name: "hero-visual",
        from: "opacity: 0; transform: scale(0.8)",
        duration_ms: 800,
    },
];

impl Entrance {
    /// Look up a predefined entrance.
    pub fn named(name: &str) -> Option<Entrance> {
        ENTRANCES.into_iter().find(|entrance| entrance.name == name)
    }

    /// Class applied to the element.
    pub fn class(&self) -> String {
        format!("enter-{}", self.name)
    }

    /// Keyframes plus the class rule.
    pub fn css(&self) -> String {
        format!(
            "@keyframes enter-{name} {{ from {{ {from}; }} }}\n.enter-{name} {{ animation: enter-{name} {dur}ms ease-out both; }}\n",
            name = self.name,
            from = self.from,
            dur = self.duration_ms,
        )
    }
}

/// Inline `animation-delay` for a one-off entrance.
pub fn entrance_delay(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms")
}

/// Inline `animation-delay` for the `index`-th staggered item.
pub fn stagger_delay(base_ms: u32, step_ms: u32, index: usize) -> String {
    entrance_delay(base_ms.saturating_add(step_ms.saturating_mul(clamp_index(index))))
}

const fn clamp_index(index: usize) -> u32 {
    if index > u32::MAX as usize { u32::MAX } else { index as u32 }
}

/// Visual effect of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum RevealKind {
    /// Fade in while rising by `offset_px`
    FadeUp {
        /// Starting vertical offset
        offset_px: u16,
    },
    /// Fade in while growing from `from` to 1
    ScaleIn {
        /// Starting scale
        from: f32,
    },
}

/// A viewport-triggered entrance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reveal {
    /// Effect
    pub kind: RevealKind,
    /// Transition duration
    pub duration_ms: u32,
    /// Transition delay
    pub delay_ms: u32,
}

impl Reveal {
    /// Fade-up over 600ms.
    pub const fn fade_up(offset_px: u16) -> Self {
        Reveal {
            kind: RevealKind::FadeUp { offset_px },
            duration_ms: 600,
            delay_ms: 0,
        }
    }

    /// Scale-in over 600ms.
    pub const fn scale_in(from: f32) -> Self {
        Reveal {
            kind: RevealKind::ScaleIn { from },
            duration_ms: 600,
            delay_ms: 0,
        }
    }

    /// Override the duration.
    pub const fn lasting(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Add a fixed delay.
    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = self.delay_ms.saturating_add(delay_ms);
        self
    }

    /// Delay for the `index`-th item of a list.
    pub const fn staggered(self, index: usize, step_ms: u32) -> Self {
        self.delayed(step_ms.saturating_mul(clamp_index(index)))
    }

    /// Classes selecting the effect.
    pub const fn class(&self) -> &'static str {
        match self.kind {
            RevealKind::FadeUp { .. } => "reveal reveal-fade-up",
            RevealKind::ScaleIn { .. } => "reveal reveal-scale-in",
        }
    }

    /// Custom properties consumed by the `.reveal` rules.
    pub fn style(&self) -> String {
        let effect = match self.kind {
            RevealKind::FadeUp { offset_px } => format!("--reveal-offset: {offset_px}px"),
            RevealKind::ScaleIn { from } => format!("--reveal-scale: {from}"),
        };
        format!(
            "--reveal-duration: {}ms; --reveal-delay: {}ms; {effect}",
            self.duration_ms, self.delay_ms
        )
    }
}

/// Per-element "animate once" state.
///
/// `Unseen → Animating` on first visibility, `Animating → Settled` when the
/// transition ends. Every other event leaves the state alone, so a settled
/// element never animates again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Not yet scrolled into view
    #[default]
    Unseen,
    /// Entrance transition running
    Animating,
    /// Entrance done
    Settled,
}

impl RevealState {
    /// The element intersected the viewport.
    pub const fn on_visible(self) -> Self {
        match self {
            RevealState::Unseen => RevealState::Animating,
            other => other,
        }
    }

    /// The entrance transition finished.
    pub const fn on_transition_end(self) -> Self {
        match self {
            RevealState::Animating => RevealState::Settled,
            other => other,
        }
    }

    /// Still needs an intersection observer.
    pub const fn is_pending(self) -> bool {
        matches!(self, RevealState::Unseen)
    }

    /// Attribute encoding.
    pub const fn as_attr(self) -> &'static str {
        match self {
            RevealState::Unseen => "unseen",
            RevealState::Animating => "animating",
            RevealState::Settled => "settled",
        }
    }

    /// Attribute decoding; anything unknown counts as settled so a mangled
    /// element is never hidden.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "unseen" => RevealState::Unseen,
            "animating" => RevealState::Animating,
            _ => RevealState::Settled,
        }
    }
}

/// Base CSS for reveals: hidden while unseen once the runtime is up,
/// transitioned when they start animating.
///
/// Unseen elements carry no transition, so hiding happens at once when the
/// runtime marks the page and never plays backwards.
pub fn reveal_css() -> &'static str {
    r#"
[data-runtime] .reveal[data-reveal="unseen"] { opacity: 0; }
[data-runtime] .reveal-fade-up[data-reveal="unseen"] { transform: translateY(var(--reveal-offset, 30px)); }
[data-runtime] .reveal-scale-in[data-reveal="unseen"] { transform: scale(var(--reveal-scale, 0.9)); }
.reveal[data-reveal="animating"],
.reveal[data-reveal="settled"] {
    transition-property: opacity, transform;
    transition-duration: var(--reveal-duration, 600ms);
    transition-delay: var(--reveal-delay, 0ms);
    transition-timing-function: ease-out;
}
.reveal[data-reveal="animating"],
.reveal[data-reveal="settled"] { opacity: 1; transform: none; }
"#
}
