//! Theme descriptor
//!
//! The small, closed vocabulary the IR uses to describe a site's look.
//! Turning a descriptor into concrete style classes is the compiler's job.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Theme descriptor carried by every [`WebsiteConfig`](crate::WebsiteConfig)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Primary brand color
    pub primary: PaletteColor,
    /// Secondary color (section accents, gradients)
    pub secondary: PaletteColor,
    /// Accent color (badges, highlights)
    pub accent: PaletteColor,
    /// Light or dark background
    #[serde(default)]
    pub mode: BackgroundMode,
    /// Font pairing
    #[serde(default)]
    pub font_style: FontStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: PaletteColor::Blue,
            secondary: PaletteColor::Indigo,
            accent: PaletteColor::Amber,
            mode: BackgroundMode::Light,
            font_style: FontStyle::Modern,
        }
    }
}

/// Fixed palette of color tokens
///
/// Names match the utility-class color scales of the generated styling
/// framework, so a token can be spliced directly into a class name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum PaletteColor {
    Slate,
    Gray,
    Zinc,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl PaletteColor {
    /// Every palette entry, in declaration order
    pub const ALL: [PaletteColor; 21] = [
        Self::Slate,
        Self::Gray,
        Self::Zinc,
        Self::Stone,
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
    ];

    /// Token as used in class names (`blue`, `emerald`, ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }

    /// Neutral scales read poorly as a "brand" color on buttons
    #[inline]
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Slate | Self::Gray | Self::Zinc | Self::Stone)
    }

    /// Light scales need dark foreground text on filled surfaces
    #[inline]
    #[must_use]
    pub const fn is_light(&self) -> bool {
        matches!(self, Self::Yellow | Self::Lime | Self::Amber)
    }
}

impl Display for PaletteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background mode
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Light surfaces, dark text
    #[default]
    Light,
    /// Dark surfaces, light text
    Dark,
}

impl BackgroundMode {
    /// Check for dark mode
    #[inline]
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Font pairing
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Geometric sans
    #[default]
    Modern,
    /// Serif headings, sans body
    Classic,
    /// High-contrast display serif
    Elegant,
    /// Rounded display face
    Playful,
    /// One neutral sans everywhere
    Minimal,
}

impl FontStyle {
    /// Heading and body font family names (Google Fonts identifiers)
    #[must_use]
    pub const fn families(&self) -> (&'static str, &'static str) {
        match self {
            Self::Modern => ("Inter", "Inter"),
            Self::Classic => ("Playfair_Display", "Source_Sans_3"),
            Self::Elegant => ("Cormorant_Garamond", "Lato"),
            Self::Playful => ("Fredoka", "Nunito"),
            Self::Minimal => ("DM_Sans", "DM_Sans"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_round_trips_through_serde() {
        for color in PaletteColor::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.as_str()));
            let back: PaletteColor = serde_json::from_str(&json).unwrap();
            assert_eq!(back, color);
        }
    }

    #[test]
    fn theme_defaults_fill_missing_fields() {
        let theme: Theme =
            serde_json::from_str(r#"{"primary":"rose","secondary":"pink","accent":"amber"}"#)
                .unwrap();
        assert_eq!(theme.mode, BackgroundMode::Light);
        assert_eq!(theme.font_style, FontStyle::Modern);
    }

    #[test]
    fn unknown_palette_color_is_rejected() {
        let result: Result<PaletteColor, _> = serde_json::from_str("\"chartreuse\"");
        assert!(result.is_err());
    }
}
