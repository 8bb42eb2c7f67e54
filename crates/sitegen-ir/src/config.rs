//! Website configuration (the IR)
//!
//! [`WebsiteConfig`] is the single serializable value describing a site.
//! It is produced by the IR generator, narrowed by edits, and compiled into
//! a source tree. JSON is the canonical encoding; YAML is accepted on input.

use crate::section::{variant_enum, ConfigSection, CtaLink};
use crate::theme::Theme;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt::{self, Display, Formatter};

/// Current IR version written by this crate
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Root of the IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    /// IR schema version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Business identity and contact details
    pub business: Business,
    /// Theme descriptor
    #[serde(default)]
    pub theme: Theme,
    /// Navigation bar
    #[serde(default)]
    pub nav: Nav,
    /// Hero block at the top of the homepage
    pub hero: Hero,
    /// Homepage sections, in display order
    #[serde(default)]
    pub sections: Vec<ConfigSection>,
    /// Footer
    #[serde(default)]
    pub footer: Footer,
    /// Secondary pages
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl WebsiteConfig {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or does not match the IR shape
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::InvalidJson)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or does not match the IR shape
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::InvalidYaml(e.to_string()))
    }

    /// Convert from a JSON value
    ///
    /// # Errors
    /// Returns error if value does not match the IR shape
    pub fn from_value(value: JsonValue) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(ConfigError::InvalidJson)
    }

    /// Convert to a JSON value
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_value(&self) -> Result<JsonValue, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// JSON schema handed to the IR generator
    #[must_use]
    pub fn json_schema() -> JsonValue {
        let schema = schemars::schema_for!(WebsiteConfig);
        serde_json::to_value(schema).unwrap_or(JsonValue::Null)
    }

    /// All section lists: homepage first, then each page in order
    pub fn section_lists(&self) -> impl Iterator<Item = &[ConfigSection]> {
        std::iter::once(self.sections.as_slice())
            .chain(self.pages.iter().map(|p| p.sections.as_slice()))
    }

    /// Total number of section entries across every page
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_lists().map(<[ConfigSection]>::len).sum()
    }

    /// Copy of this config with every unsupported section removed
    ///
    /// Returns the filtered config and the removed entries, each paired with
    /// the route of the page it came from (`/` for the homepage).
    #[must_use]
    pub fn retain_supported(&self) -> (Self, Vec<(String, ConfigSection)>) {
        let mut removed = Vec::new();
        let mut filtered = self.clone();

        filtered.sections = split_supported(&self.sections, "/", &mut removed);
        for (page, original) in filtered.pages.iter_mut().zip(&self.pages) {
            page.sections = split_supported(&original.sections, &original.path, &mut removed);
        }

        (filtered, removed)
    }
}

fn split_supported(
    sections: &[ConfigSection],
    route: &str,
    removed: &mut Vec<(String, ConfigSection)>,
) -> Vec<ConfigSection> {
    let mut kept = Vec::with_capacity(sections.len());
    for section in sections {
        if section.is_supported() {
            kept.push(section.clone());
        } else {
            removed.push((route.to_string(), section.clone()));
        }
    }
    kept
}

/// Business identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Business {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Navigation link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Navigation bar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    /// Links, in display order
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Optional button at the end of the bar
    #[serde(default)]
    pub cta: Option<CtaLink>,
}

variant_enum! {
    /// Hero layouts
    HeroVariant {
        Centered => "centered",
        Split => "split",
        ImageBackground => "image-background",
        Minimal => "minimal",
        VideoStyle => "video-style",
        Gradient => "gradient",
        Stacked => "stacked",
    }
}

/// Hero block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Hero {
    #[serde(default)]
    pub variant: HeroVariant,
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
    pub cta: CtaLink,
    #[serde(default)]
    pub secondary_cta: Option<CtaLink>,
    /// Prompt for the hero image
    #[serde(default)]
    pub image_description: String,
}

variant_enum! {
    /// Footer layouts
    FooterVariant { Simple => "simple", Columns => "columns", Centered => "centered" }
}

/// Footer link column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Social profile link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Footer {
    #[serde(default)]
    pub variant: FooterVariant,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// Secondary page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Route, e.g. `/about`
    pub path: String,
    /// Document title
    pub title: String,
    /// Sections, in display order
    #[serde(default)]
    pub sections: Vec<ConfigSection>,
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON could not be parsed into the IR
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// YAML could not be parsed into the IR
    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    /// Serialization failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use serde_json::json;

    fn minimal() -> JsonValue {
        json!({
            "business": {"name": "Cafe Uno"},
            "hero": {
                "headline": "Coffee, slowly",
                "cta": {"text": "Visit", "href": "#contact"}
            },
            "sections": [
                {"type": "faq", "items": []},
                {"type": "unknown-x"}
            ],
            "pages": [
                {"path": "/menu", "title": "Menu", "sections": [{"type": "carousel-3d"}]}
            ]
        })
    }

    #[test]
    fn minimal_config_fills_defaults() {
        let config = WebsiteConfig::from_value(minimal()).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.hero.variant, HeroVariant::Centered);
        assert_eq!(config.footer.variant, FooterVariant::Simple);
        assert_eq!(config.section_count(), 3);
    }

    #[test]
    fn retain_supported_drops_unknown_sections_everywhere() {
        let config = WebsiteConfig::from_value(minimal()).unwrap();
        let (filtered, removed) = config.retain_supported();

        assert_eq!(filtered.sections.len(), 1);
        assert!(matches!(
            filtered.sections[0].as_section(),
            Some(Section::Faq(_))
        ));
        assert!(filtered.pages[0].sections.is_empty());
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].0, "/");
        assert_eq!(removed[1].0, "/menu");
    }

    #[test]
    fn json_round_trip_preserves_unknown_sections() {
        let config = WebsiteConfig::from_value(minimal()).unwrap();
        let json = config.to_json_pretty().unwrap();
        let back = WebsiteConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn yaml_input_is_accepted() {
        let yaml = r"
business:
  name: Studio K
hero:
  headline: Hello
  cta:
    text: Go
    href: /go
";
        let config = WebsiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.business.name, "Studio K");
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = WebsiteConfig::json_schema();
        let text = schema.to_string();
        assert!(text.contains("feature-grid"));
        assert!(text.contains("logoUrl"));
    }
}
