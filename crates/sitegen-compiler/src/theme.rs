//! Theme resolution
//!
//! Maps a [`Theme`] descriptor to a [`ThemeBundle`] of utility-class strings
//! keyed by semantic role. Every renderer styles itself through the bundle,
//! never through literal colors.
//!
//! [`resolve_theme`] is total and pure. [`ThemeResolver`] memoizes it
//! behind a moka cache so that many compiles share bundles.

use moka::sync::Cache;
use sitegen_ir::{PaletteColor, Theme};
use std::sync::Arc;

/// Resolved style classes for one theme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeBundle {
    /// Descriptor this bundle was resolved from
    pub theme: Theme,
    /// Page background and base text color (applied on `<body>`)
    pub page: String,
    /// Default section background
    pub section_bg: String,
    /// Alternate section background for visual rhythm
    pub section_alt_bg: String,
    /// Card surface (background, border, shadow)
    pub card: String,
    /// Heading text
    pub heading: String,
    /// Body text
    pub body: String,
    /// Secondary / caption text
    pub muted: String,
    /// Border color
    pub border: String,
    /// Primary gradient (`bg-gradient-to-r ...`)
    pub gradient: String,
    /// Text in the primary color
    pub primary_text: String,
    /// Filled primary button
    pub primary_button: String,
    /// Outlined secondary button
    pub secondary_button: String,
    /// Small accent badge
    pub badge: String,
    /// Form field
    pub input: String,
    /// Focus ring for interactive elements
    pub focus_ring: String,
    /// Decorative surface used where an image is not generated
    pub image_fallback: String,
    /// Heading font utility
    pub heading_font: &'static str,
    /// Body font utility
    pub body_font: &'static str,
}

impl ThemeBundle {
    /// Heading font family and body font family identifiers
    #[inline]
    #[must_use]
    pub const fn font_families(&self) -> (&'static str, &'static str) {
        self.theme.font_style.families()
    }

    /// Check whether the site uses dark surfaces
    #[inline]
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.theme.mode.is_dark()
    }
}

/// Foreground to pair with a filled surface in `color`
const fn on_fill(color: PaletteColor) -> &'static str {
    if color.is_light() {
        "text-gray-900"
    } else {
        "text-white"
    }
}

/// Resolve a theme descriptor into its style bundle
#[must_use]
pub fn resolve_theme(theme: &Theme) -> ThemeBundle {
    let primary = theme.primary.as_str();
    let secondary = theme.secondary.as_str();
    let accent = theme.accent.as_str();
    // Neutral brand colors are too washed out at 600 for fills.
    let shade = if theme.primary.is_neutral() { 800 } else { 600 };

    let (page, section_bg, section_alt_bg, card, heading, body, muted, border, input) =
        if theme.mode.is_dark() {
            (
                "bg-gray-950 text-gray-100".to_string(),
                "bg-gray-950".to_string(),
                "bg-gray-900".to_string(),
                "bg-gray-900 border border-gray-800 rounded-2xl shadow-lg shadow-black/20"
                    .to_string(),
                "text-white".to_string(),
                "text-gray-300".to_string(),
                "text-gray-400".to_string(),
                "border-gray-800".to_string(),
                "w-full rounded-lg border border-gray-700 bg-gray-900 px-4 py-3 text-gray-100 placeholder-gray-500"
                    .to_string(),
            )
        } else {
            (
                "bg-white text-gray-900".to_string(),
                "bg-white".to_string(),
                format!("bg-{primary}-50"),
                "bg-white border border-gray-100 rounded-2xl shadow-sm".to_string(),
                "text-gray-900".to_string(),
                "text-gray-600".to_string(),
                "text-gray-500".to_string(),
                "border-gray-200".to_string(),
                "w-full rounded-lg border border-gray-300 bg-white px-4 py-3 text-gray-900 placeholder-gray-400"
                    .to_string(),
            )
        };

    let focus_ring = format!("focus:outline-none focus:ring-2 focus:ring-{primary}-500 focus:ring-offset-2");

    ThemeBundle {
        theme: *theme,
        page,
        section_bg,
        section_alt_bg,
        card,
        heading,
        body,
        muted,
        border,
        gradient: format!("bg-gradient-to-r from-{primary}-{shade} to-{secondary}-{shade}"),
        primary_text: format!(
            "text-{primary}-{}",
            if theme.mode.is_dark() { 400 } else { shade }
        ),
        primary_button: format!(
            "inline-flex items-center justify-center rounded-lg bg-{primary}-{shade} px-6 py-3 font-semibold {} hover:bg-{primary}-{} transition-colors {focus_ring}",
            on_fill(theme.primary),
            shade + 100,
        ),
        secondary_button: format!(
            "inline-flex items-center justify-center rounded-lg border border-{primary}-{shade} px-6 py-3 font-semibold text-{primary}-{shade} hover:bg-{primary}-50 transition-colors {focus_ring}"
        ),
        badge: format!(
            "inline-flex items-center rounded-full bg-{accent}-100 px-3 py-1 text-xs font-semibold text-{accent}-800"
        ),
        input: format!("{input} {focus_ring}"),
        image_fallback: format!("bg-gradient-to-br from-{primary}-100 via-{secondary}-100 to-{accent}-100"),
        focus_ring,
        heading_font: "font-heading",
        body_font: "font-body",
    }
}

/// Memoizing theme resolver
///
/// Bundles are shared (`Arc`) between compiles that use the same theme.
#[derive(Clone)]
pub struct ThemeResolver {
    cache: Cache<Theme, Arc<ThemeBundle>>,
}

impl ThemeResolver {
    /// Create a resolver remembering up to `capacity` themes
    #[inline]
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
        }
    }

    /// Resolve (or recall) a bundle
    #[must_use]
    pub fn resolve(&self, theme: &Theme) -> Arc<ThemeBundle> {
        self.cache
            .get_with(*theme, || Arc::new(resolve_theme(theme)))
    }

    /// Number of memoized bundles
    #[inline]
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Check if nothing is memoized
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(64)
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitegen_ir::{BackgroundMode, FontStyle};

    #[test]
    fn resolution_is_referentially_transparent() {
        let theme = Theme::default();
        assert_eq!(resolve_theme(&theme), resolve_theme(&theme));
    }

    #[test]
    fn every_palette_entry_resolves() {
        for color in PaletteColor::ALL {
            let theme = Theme {
                primary: color,
                ..Theme::default()
            };
            let bundle = resolve_theme(&theme);
            assert!(bundle.primary_button.contains(color.as_str()));
            assert!(!bundle.gradient.is_empty());
        }
    }

    #[test]
    fn dark_mode_switches_surfaces() {
        let light = resolve_theme(&Theme::default());
        let dark = resolve_theme(&Theme {
            mode: BackgroundMode::Dark,
            ..Theme::default()
        });
        assert!(light.page.contains("bg-white"));
        assert!(dark.page.contains("bg-gray-950"));
        assert_ne!(light.heading, dark.heading);
    }

    #[test]
    fn light_fill_colors_get_dark_text() {
        let bundle = resolve_theme(&Theme {
            primary: PaletteColor::Yellow,
            ..Theme::default()
        });
        assert!(bundle.primary_button.contains("text-gray-900"));
    }

    #[test]
    fn resolver_memoizes() {
        let resolver = ThemeResolver::default();
        let theme = Theme {
            font_style: FontStyle::Elegant,
            ..Theme::default()
        };
        let a = resolver.resolve(&theme);
        let b = resolver.resolve(&theme);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(resolver.len(), 1);
    }
}
