//! Color tokens.
//!
//! One component tree, many palettes: components only reference the CSS
//! custom properties emitted by [`Theme::css_variables`], so a new variant is
//! a new `Theme` value and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A complete palette, one color per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Variant name, also emitted as `data-theme` on `<html>`
    pub name: &'static str,
    /// Page background
    pub background: &'static str,
    /// Card and strip background
    pub surface: &'static str,
    /// Alternate section background
    pub surface_alt: &'static str,
    /// Hairline borders
    pub border: &'static str,
    /// Brand accent (mustard)
    pub accent: &'static str,
    /// Secondary accent (flame red)
    pub highlight: &'static str,
    /// Body text
    pub text: &'static str,
    /// De-emphasized text
    pub muted: &'static str,
    /// Text drawn on top of the accent color
    pub on_accent: &'static str,
}

impl Theme {
    /// Rich black with mustard and flame red.
    pub const fn noir() -> Self {
        Theme {
            name: "noir",
            background: "#0a0a0a",
            surface: "#171717",
            surface_alt: "#0a0a0a",
            border: "#262626",
            accent: "#FFC107",
            highlight: "#EF4444",
            text: "#ffffff",
            muted: "#a3a3a3",
            on_accent: "#0a0a0a",
        }
    }

    /// Light variant on a warm cream background.
    pub const fn cream() -> Self {
        Theme {
            name: "cream",
            background: "#fff8e7",
            surface: "#ffffff",
            surface_alt: "#fdf0d5",
            border: "#ead9b0",
            accent: "#d99a00",
            highlight: "#dc2626",
            text: "#1c1917",
            muted: "#57534e",
            on_accent: "#ffffff",
        }
    }

    /// `:root` block declaring every role as a custom property.
    pub fn css_variables(&self) -> String {
        let roles = [
            ("background", self.background),
            ("surface", self.surface),
            ("surface-alt", self.surface_alt),
            ("border", self.border),
            ("accent", self.accent),
            ("highlight", self.highlight),
            ("text", self.text),
            ("muted", self.muted),
            ("on-accent", self.on_accent),
        ];
        let mut css = String::from(":root {\n");
        for (role, value) in roles {
            css.push_str(&format!("    --color-{role}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::noir()
    }
}

/// Build-time theme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// [`Theme::noir`]
    #[default]
    Noir,
    /// [`Theme::cream`]
    Cream,
}

impl ThemeVariant {
    /// Every variant, for help texts.
    pub const ALL: [ThemeVariant; 2] = [ThemeVariant::Noir, ThemeVariant::Cream];

    /// Resolve to the palette.
    pub const fn theme(self) -> Theme {
        match self {
            ThemeVariant::Noir => Theme::noir(),
            ThemeVariant::Cream => Theme::cream(),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.theme().name)
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.theme().name.eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme {s:?} (expected noir or cream)"))
    }
}
