//! Page sections
//!
//! [`Section`] is the closed union of section kinds a page can contain.
//! [`ConfigSection`] wraps it so that objects with an unknown (or malformed)
//! `type` survive deserialization as [`ConfigSection::Unsupported`] and can be
//! filtered out later instead of failing the whole config.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt::{self, Display, Formatter};

/// Declares a closed layout-variant enum with its wire tags.
///
/// The first listed variant is the default.
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $first:ident => $first_tag:literal $(, $variant:ident => $tag:literal)* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        #[allow(missing_docs)]
        pub enum $name {
            #[serde(rename = $first_tag)]
            $first,
            $(
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, default first
            pub const ALL: &'static [$name] = &[Self::$first $(, Self::$variant)*];

            /// Wire tag of this variant
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => $first_tag,
                    $(Self::$variant => $tag,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use variant_enum;

variant_enum! {
    /// Layouts for [`FeatureGridSection`]
    FeatureGridVariant { Cards => "cards", Icons => "icons", Alternating => "alternating" }
}
variant_enum! {
    /// Layouts for [`MenuSection`]
    MenuVariant { List => "list", Cards => "cards", Tabbed => "tabbed", Elegant => "elegant" }
}
variant_enum! {
    /// Layouts for [`ProductGridSection`]
    ProductGridVariant { Grid => "grid", Carousel => "carousel", Featured => "featured" }
}
variant_enum! {
    /// Layouts for [`TestimonialsSection`]
    TestimonialsVariant { Cards => "cards", Carousel => "carousel", Quote => "quote" }
}
variant_enum! {
    /// Layouts for [`PricingSection`]
    PricingVariant { Columns => "columns", Comparison => "comparison", Compact => "compact" }
}
variant_enum! {
    /// Layouts for [`GallerySection`]
    GalleryVariant { Grid => "grid", Masonry => "masonry", Carousel => "carousel" }
}
variant_enum! {
    /// Layouts for [`StatsSection`]
    StatsVariant { Row => "row", Cards => "cards", Banner => "banner" }
}
variant_enum! {
    /// Layouts for [`CtaBannerSection`]
    CtaBannerVariant { Centered => "centered", Split => "split", Gradient => "gradient" }
}
variant_enum! {
    /// Layouts for [`TeamSection`]
    TeamVariant { Grid => "grid", List => "list", Cards => "cards" }
}
variant_enum! {
    /// Layouts for [`BlogPreviewSection`]
    BlogPreviewVariant { Grid => "grid", List => "list", Featured => "featured" }
}
variant_enum! {
    /// Layouts for [`ContactSection`]
    ContactVariant { Form => "form", Split => "split", Cards => "cards" }
}
variant_enum! {
    /// Layouts for [`FaqSection`]
    FaqVariant { Accordion => "accordion", TwoColumn => "two-column", List => "list" }
}
variant_enum! {
    /// Layouts for [`AboutSection`]
    AboutVariant { Split => "split", Centered => "centered", Timeline => "timeline" }
}
variant_enum! {
    /// Layouts for [`LogoCloudSection`]
    LogoCloudVariant { Row => "row", Grid => "grid", Marquee => "marquee" }
}
variant_enum! {
    /// Layouts for [`NewsletterSection`]
    NewsletterVariant { Inline => "inline", Card => "card", Banner => "banner" }
}
variant_enum! {
    /// Layouts for [`ProcessSection`]
    ProcessVariant { Steps => "steps", Timeline => "timeline", Cards => "cards" }
}
variant_enum! {
    /// Custom sections carry their own layout
    CustomVariant { Default => "default" }
}

/// One feature card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Short glyph or emoji shown above the title
    #[serde(default)]
    pub icon: Option<String>,
}

/// Feature grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FeatureGridSection {
    #[serde(default)]
    pub variant: FeatureGridVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One dish or drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_description: Option<String>,
}

/// Named group of menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Restaurant or cafe menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct MenuSection {
    #[serde(default)]
    pub variant: MenuVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}

/// One product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub image_description: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// Product grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ProductGridSection {
    #[serde(default)]
    pub variant: ProductGridVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One customer quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    /// 1 to 5 stars
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Testimonials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TestimonialsSection {
    #[serde(default)]
    pub variant: TestimonialsVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// One pricing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
    #[serde(default)]
    pub cta_text: Option<String>,
}

/// Pricing table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PricingSection {
    #[serde(default)]
    pub variant: PricingVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

/// One gallery image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GalleryItem {
    pub image_description: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Image gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GallerySection {
    #[serde(default)]
    pub variant: GalleryVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

/// One figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Key figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StatsSection {
    #[serde(default)]
    pub variant: StatsVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Call-to-action banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CtaBannerSection {
    #[serde(default)]
    pub variant: CtaBannerVariant,
    pub headline: String,
    #[serde(default)]
    pub subheadline: Option<String>,
    pub cta: CtaLink,
}

/// One person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_description: Option<String>,
}

/// Team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TeamSection {
    #[serde(default)]
    pub variant: TeamVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// One article teaser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_description: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// Recent articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct BlogPreviewSection {
    #[serde(default)]
    pub variant: BlogPreviewVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Contact block
///
/// Missing fields fall back to the business contact details at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ContactSection {
    #[serde(default)]
    pub variant: ContactVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
}

/// One question and answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Frequently asked questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FaqSection {
    #[serde(default)]
    pub variant: FaqVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// About / story block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct AboutSection {
    #[serde(default)]
    pub variant: AboutVariant,
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One partner or client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Logo {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partner / client logos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct LogoCloudSection {
    #[serde(default)]
    pub variant: LogoCloudVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub logos: Vec<Logo>,
}

/// Newsletter signup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NewsletterSection {
    #[serde(default)]
    pub variant: NewsletterVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}

/// One step of a process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

/// "How it works"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ProcessSection {
    #[serde(default)]
    pub variant: ProcessVariant,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

/// Externally generated component
///
/// `code` has already passed the custom-section validator: it is non-empty
/// and has a default export. The compiler does not check again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CustomSection {
    #[serde(default)]
    pub variant: CustomVariant,
    pub component_name: String,
    pub code: String,
}

/// Link with label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CtaLink {
    pub text: String,
    pub href: String,
}

/// Closed union of supported section kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Section {
    FeatureGrid(FeatureGridSection),
    Menu(MenuSection),
    ProductGrid(ProductGridSection),
    Testimonials(TestimonialsSection),
    Pricing(PricingSection),
    Gallery(GallerySection),
    Stats(StatsSection),
    CtaBanner(CtaBannerSection),
    Team(TeamSection),
    BlogPreview(BlogPreviewSection),
    Contact(ContactSection),
    Faq(FaqSection),
    About(AboutSection),
    LogoCloud(LogoCloudSection),
    Newsletter(NewsletterSection),
    Process(ProcessSection),
    Custom(CustomSection),
}

impl Section {
    /// Kind of this section
    #[must_use]
    pub const fn section_type(&self) -> SectionType {
        match self {
            Self::FeatureGrid(_) => SectionType::FeatureGrid,
            Self::Menu(_) => SectionType::Menu,
            Self::ProductGrid(_) => SectionType::ProductGrid,
            Self::Testimonials(_) => SectionType::Testimonials,
            Self::Pricing(_) => SectionType::Pricing,
            Self::Gallery(_) => SectionType::Gallery,
            Self::Stats(_) => SectionType::Stats,
            Self::CtaBanner(_) => SectionType::CtaBanner,
            Self::Team(_) => SectionType::Team,
            Self::BlogPreview(_) => SectionType::BlogPreview,
            Self::Contact(_) => SectionType::Contact,
            Self::Faq(_) => SectionType::Faq,
            Self::About(_) => SectionType::About,
            Self::LogoCloud(_) => SectionType::LogoCloud,
            Self::Newsletter(_) => SectionType::Newsletter,
            Self::Process(_) => SectionType::Process,
            Self::Custom(_) => SectionType::Custom,
        }
    }

    /// Wire tag of the section's layout variant
    #[must_use]
    pub const fn variant_tag(&self) -> &'static str {
        match self {
            Self::FeatureGrid(s) => s.variant.as_str(),
            Self::Menu(s) => s.variant.as_str(),
            Self::ProductGrid(s) => s.variant.as_str(),
            Self::Testimonials(s) => s.variant.as_str(),
            Self::Pricing(s) => s.variant.as_str(),
            Self::Gallery(s) => s.variant.as_str(),
            Self::Stats(s) => s.variant.as_str(),
            Self::CtaBanner(s) => s.variant.as_str(),
            Self::Team(s) => s.variant.as_str(),
            Self::BlogPreview(s) => s.variant.as_str(),
            Self::Contact(s) => s.variant.as_str(),
            Self::Faq(s) => s.variant.as_str(),
            Self::About(s) => s.variant.as_str(),
            Self::LogoCloud(s) => s.variant.as_str(),
            Self::Newsletter(s) => s.variant.as_str(),
            Self::Process(s) => s.variant.as_str(),
            Self::Custom(s) => s.variant.as_str(),
        }
    }
}

/// Section kind discriminant
///
/// Used as the registry key; carries the wire tag and the PascalCase base
/// name generated components are named after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum SectionType {
    FeatureGrid,
    Menu,
    ProductGrid,
    Testimonials,
    Pricing,
    Gallery,
    Stats,
    CtaBanner,
    Team,
    BlogPreview,
    Contact,
    Faq,
    About,
    LogoCloud,
    Newsletter,
    Process,
    Custom,
}

impl SectionType {
    /// Every supported kind
    pub const ALL: [SectionType; 17] = [
        Self::FeatureGrid,
        Self::Menu,
        Self::ProductGrid,
        Self::Testimonials,
        Self::Pricing,
        Self::Gallery,
        Self::Stats,
        Self::CtaBanner,
        Self::Team,
        Self::BlogPreview,
        Self::Contact,
        Self::Faq,
        Self::About,
        Self::LogoCloud,
        Self::Newsletter,
        Self::Process,
        Self::Custom,
    ];

    /// Wire tag (`feature-grid`, `faq`, ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FeatureGrid => "feature-grid",
            Self::Menu => "menu",
            Self::ProductGrid => "product-grid",
            Self::Testimonials => "testimonials",
            Self::Pricing => "pricing",
            Self::Gallery => "gallery",
            Self::Stats => "stats",
            Self::CtaBanner => "cta-banner",
            Self::Team => "team",
            Self::BlogPreview => "blog-preview",
            Self::Contact => "contact",
            Self::Faq => "faq",
            Self::About => "about",
            Self::LogoCloud => "logo-cloud",
            Self::Newsletter => "newsletter",
            Self::Process => "process",
            Self::Custom => "custom",
        }
    }

    /// Look up a kind by wire tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }
}

impl Display for SectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section object the compiler cannot use
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedSection {
    /// Value of the `type` field, empty when absent
    pub type_tag: String,
    /// Original object, kept verbatim for round-tripping
    pub raw: JsonValue,
    /// Why the object was not accepted as a [`Section`]
    pub reason: String,
}

/// Section entry as it appears in a page's section list
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSection {
    /// Known kind, well-formed
    Supported(Section),
    /// Unknown kind or malformed payload; filtered at compile time
    Unsupported(UnsupportedSection),
}

impl ConfigSection {
    /// Classify a raw JSON object
    #[must_use]
    pub fn from_value(raw: JsonValue) -> Self {
        let type_tag = raw
            .get("type")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();

        match serde_json::from_value::<Section>(raw.clone()) {
            Ok(section) => Self::Supported(section),
            Err(e) => {
                let reason = if SectionType::from_tag(&type_tag).is_some() {
                    format!("malformed '{type_tag}' section: {e}")
                } else {
                    format!("unknown section type '{type_tag}'")
                };
                Self::Unsupported(UnsupportedSection {
                    type_tag,
                    raw,
                    reason,
                })
            }
        }
    }

    /// The wire `type` tag, whether supported or not
    #[must_use]
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Supported(section) => section.section_type().as_str(),
            Self::Unsupported(u) => &u.type_tag,
        }
    }

    /// Supported section, if any
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Supported(section) => Some(section),
            Self::Unsupported(_) => None,
        }
    }

    /// Check whether this entry carries a known, well-formed section
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

impl From<Section> for ConfigSection {
    fn from(section: Section) -> Self {
        Self::Supported(section)
    }
}

impl Serialize for ConfigSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Supported(section) => section.serialize(serializer),
            Self::Unsupported(u) => u.raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        Ok(Self::from_value(raw))
    }
}

impl JsonSchema for ConfigSection {
    fn schema_name() -> String {
        "ConfigSection".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        // Generators are only ever asked for supported kinds.
        Section::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_section_deserializes() {
        let section: ConfigSection = serde_json::from_value(json!({
            "type": "faq",
            "variant": "two-column",
            "title": "Questions",
            "items": [{"question": "Open late?", "answer": "Until 11pm."}]
        }))
        .unwrap();

        let Some(Section::Faq(faq)) = section.as_section() else {
            panic!("expected faq, got {section:?}");
        };
        assert_eq!(faq.variant, FaqVariant::TwoColumn);
        assert_eq!(faq.items.len(), 1);
    }

    #[test]
    fn unknown_type_is_kept_not_rejected() {
        let raw = json!({"type": "unknown-x", "variant": "a", "foo": 1});
        let section: ConfigSection = serde_json::from_value(raw.clone()).unwrap();

        assert!(!section.is_supported());
        assert_eq!(section.type_tag(), "unknown-x");
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn malformed_known_type_is_reported_as_malformed() {
        let section = ConfigSection::from_value(json!({"type": "cta-banner"}));
        let ConfigSection::Unsupported(u) = section else {
            panic!("expected unsupported");
        };
        assert!(u.reason.starts_with("malformed 'cta-banner'"));
    }

    #[test]
    fn missing_variant_uses_default() {
        let section = ConfigSection::from_value(json!({"type": "stats", "stats": []}));
        assert_eq!(section.as_section().map(Section::variant_tag), Some("row"));
    }

    #[test]
    fn section_type_tags_round_trip() {
        for ty in SectionType::ALL {
            assert_eq!(SectionType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(SectionType::from_tag("hero"), None);
    }

    #[test]
    fn variant_tags_serialize_as_declared() {
        assert_eq!(
            serde_json::to_value(FaqVariant::TwoColumn).unwrap(),
            json!("two-column")
        );
        assert_eq!(MenuVariant::ALL.len(), 4);
        assert_eq!(MenuVariant::default(), MenuVariant::List);
    }
}
