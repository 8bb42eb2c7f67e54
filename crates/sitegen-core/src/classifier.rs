//! Offline keyword classifier
//!
//! A deterministic [`EditClassifier`] for tests, the CLI and deployments
//! without a model behind them. Rules are tried in order and the first match
//! wins:
//!
//! 1. whole-site rewrites ("make this a ...", "start over") → `structure-major`
//! 2. anything about the logo → `logo-only`
//! 3. adding, removing or moving sections and pages → `structure-minor`
//! 4. phone, email, address, hours → `contact-info`
//! 5. colours, fonts, light/dark → `styling`
//! 6. navigation and footer links → `navigation`
//! 7. photos and pictures → `images`
//! 8. everything else → `content`, narrowed to the sections the text names

use crate::collaborators::EditClassifier;
use crate::error::CollaboratorError;
use crate::types::{EditCategory, EditClassification, EditScope};
use async_trait::async_trait;
use sitegen_ir::{ConfigSection, FieldPath, PaletteColor, WebsiteConfig};

const REGENERATE_PHRASES: &[&str] = &[
    "make this a",
    "make it a",
    "turn this into",
    "turn it into",
    "start over",
    "from scratch",
    "completely different",
    "totally different",
    "entirely different",
    "whole new",
    "brand new site",
    "brand new website",
    "different business",
    "landing page for",
    "redesign everything",
    "redo everything",
    "rebuild the site",
    "rebuild the website",
];

const STRUCTURE_VERBS: &[&str] = &[
    "add", "remove", "delete", "drop", "reorder", "move", "insert", "swap",
];

const STRUCTURE_NOUNS: &[&str] = &["section", "sections", "page", "pages", "block"];

const CONTACT_FIELDS: &[(&str, &str)] = &[
    ("phone", "business.phone"),
    ("telephone", "business.phone"),
    ("number", "business.phone"),
    ("email", "business.email"),
    ("mail", "business.email"),
    ("address", "business.address"),
    ("location", "business.address"),
    ("hours", "business.hours"),
    ("open", "business.hours"),
];

const STYLE_WORDS: &[&str] = &[
    "color", "colors", "colour", "colours", "palette", "theme", "font", "fonts", "typography",
    "dark", "darker", "light", "lighter", "style", "styling",
];

const NAV_WORDS: &[&str] = &["navigation", "nav", "navbar", "footer", "link", "links"];

const IMAGE_WORDS: &[&str] = &[
    "image", "images", "photo", "photos", "picture", "pictures", "photography",
];

/// Keyword-rule classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create classifier
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify synchronously
    #[must_use]
    pub fn classify_text(&self, edit_text: &str, config: &WebsiteConfig) -> EditClassification {
        let text = Words::new(edit_text);

        if let Some(phrase) = REGENERATE_PHRASES.iter().find(|p| text.has_phrase(p)) {
            return EditClassification::regenerate(format!("asks for a different site (\"{phrase}\")"));
        }

        if text.has_any(&["logo", "logos"]) {
            return EditClassification::new(
                EditCategory::LogoOnly,
                EditScope::Narrow,
                vec![field("business.logoUrl")],
            )
            .with_reasoning("mentions the logo");
        }

        let contact_targets = contact_targets(&text);

        if contact_targets.is_empty()
            && text.has_any(STRUCTURE_VERBS)
            && (text.has_any(STRUCTURE_NOUNS) || !section_hits(&text, config).is_empty())
        {
            let mut targets = vec![field("sections")];
            if text.has_any(&["page", "pages"]) {
                targets.push(field("pages"));
            }
            return EditClassification::new(EditCategory::StructureMinor, EditScope::Moderate, targets)
                .with_reasoning("adds, removes or moves sections");
        }

        if !contact_targets.is_empty() || (text.has_word("contact") && !text.has_word("section")) {
            let targets = if contact_targets.is_empty() {
                ["business.phone", "business.email", "business.address", "business.hours"]
                    .into_iter()
                    .map(field)
                    .collect()
            } else {
                contact_targets
            };
            return EditClassification::new(EditCategory::ContactInfo, EditScope::Narrow, targets)
                .with_reasoning("changes contact details");
        }

        let colors = mentioned_colors(&text);
        if !colors.is_empty() || text.has_any(STYLE_WORDS) {
            return EditClassification::new(
                EditCategory::Styling,
                EditScope::Narrow,
                style_targets(&text, !colors.is_empty()),
            )
            .with_reasoning("changes colours or typography");
        }

        if text.has_any(NAV_WORDS) || text.has_phrase("menu bar") {
            let mut targets = Vec::new();
            if !text.has_word("footer") || text.has_any(&["nav", "navbar", "navigation"]) {
                targets.push(field("nav"));
            }
            if text.has_word("footer") {
                targets.push(field("footer"));
            }
            return EditClassification::new(EditCategory::Navigation, EditScope::Moderate, targets)
                .with_reasoning("changes navigation links");
        }

        if text.has_any(IMAGE_WORDS) {
            let mut targets = vec![field("hero.imageDescription")];
            targets.extend(section_hits(&text, config));
            if targets.len() == 1 {
                targets.push(field("sections"));
            }
            return EditClassification::new(EditCategory::Images, EditScope::Moderate, targets)
                .with_reasoning("changes image descriptions");
        }

        let mut targets = Vec::new();
        if text.has_any(&["hero", "headline", "subheadline", "banner", "heading"]) {
            targets.push(field("hero"));
        }
        if text.has_any(&["tagline", "slogan"]) {
            targets.push(field("business.tagline"));
        }
        if text.has_any(&["description", "about"]) && section_hits(&text, config).is_empty() {
            targets.push(field("business.description"));
        }
        targets.extend(section_hits(&text, config));

        let scope = if targets.is_empty() {
            targets.push(field("hero"));
            targets.push(field("sections"));
            EditScope::Wide
        } else {
            EditScope::Moderate
        };
        EditClassification::new(EditCategory::Content, scope, targets)
            .with_reasoning("edits copy in existing content")
    }
}

#[async_trait]
impl EditClassifier for KeywordClassifier {
    async fn classify(
        &self,
        edit_text: &str,
        config: &WebsiteConfig,
    ) -> Result<EditClassification, CollaboratorError> {
        Ok(self.classify_text(edit_text, config))
    }
}

/// Lowercased word view of an edit
struct Words {
    words: Vec<String>,
    padded: String,
}

impl Words {
    fn new(text: &str) -> Self {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        let padded = format!(" {} ", words.join(" "));
        Self { words, padded }
    }

    fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    fn has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.has_word(w))
    }

    fn has_phrase(&self, phrase: &str) -> bool {
        self.padded.contains(&format!(" {phrase} "))
    }
}

fn field(path: &str) -> FieldPath {
    FieldPath::new(path.split('.').map(str::to_string).collect())
}

fn contact_targets(text: &Words) -> Vec<FieldPath> {
    let mut targets: Vec<FieldPath> = Vec::new();
    for (word, path) in CONTACT_FIELDS {
        let path = field(path);
        if text.has_word(word) && !targets.contains(&path) {
            targets.push(path);
        }
    }
    targets
}

fn mentioned_colors(text: &Words) -> Vec<PaletteColor> {
    PaletteColor::ALL
        .iter()
        .copied()
        .filter(|c| text.has_word(c.as_str()))
        .collect()
}

fn style_targets(text: &Words, names_color: bool) -> Vec<FieldPath> {
    let mut targets = Vec::new();
    if text.has_any(&["font", "fonts", "typography"]) {
        targets.push(field("theme.fontStyle"));
    }
    if text.has_any(&["dark", "darker", "light", "lighter"]) || text.has_phrase("dark mode") {
        targets.push(field("theme.mode"));
    }
    if text.has_word("secondary") {
        targets.push(field("theme.secondary"));
    }
    if text.has_word("accent") {
        targets.push(field("theme.accent"));
    }
    if names_color && !text.has_any(&["secondary", "accent"]) {
        targets.push(field("theme.primary"));
    }
    if targets.is_empty() {
        targets.push(field("theme"));
    }
    targets
}

/// Paths of sections the text names by kind or title
fn section_hits(text: &Words, config: &WebsiteConfig) -> Vec<FieldPath> {
    let mut hits = Vec::new();
    let mut scan = |base: FieldPath, sections: &[ConfigSection]| {
        for (i, entry) in sections.iter().enumerate() {
            if names_section(text, entry) {
                hits.push(base.index(i));
            }
        }
    };
    scan(field("sections"), &config.sections);
    for (p, page) in config.pages.iter().enumerate() {
        scan(field("pages").index(p).child("sections"), &page.sections);
    }
    hits
}

fn names_section(text: &Words, entry: &ConfigSection) -> bool {
    let kind = entry.type_tag().replace('-', " ");
    if !kind.is_empty() && (text.has_phrase(&kind) || text.has_phrase(&format!("{kind}s"))) {
        return true;
    }
    entry
        .as_section()
        .and_then(section_title)
        .map(|t| Words::new(t).words.join(" "))
        .is_some_and(|t| !t.is_empty() && text.has_phrase(&t))
}

fn section_title(section: &sitegen_ir::Section) -> Option<&str> {
    use sitegen_ir::Section as S;
    let title = match section {
        S::FeatureGrid(s) => &s.title,
        S::Menu(s) => &s.title,
        S::ProductGrid(s) => &s.title,
        S::Testimonials(s) => &s.title,
        S::Pricing(s) => &s.title,
        S::Gallery(s) => &s.title,
        S::Team(s) => &s.title,
        S::BlogPreview(s) => &s.title,
        S::Contact(s) => &s.title,
        S::Faq(s) => &s.title,
        S::About(s) => &s.title,
        S::Newsletter(s) => &s.title,
        S::Process(s) => &s.title,
        S::CtaBanner(s) => &s.headline,
        S::Custom(s) => &s.component_name,
        S::Stats(s) => return s.title.as_deref(),
        S::LogoCloud(s) => return s.title.as_deref(),
    };
    Some(title.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> WebsiteConfig {
        WebsiteConfig::from_value(json!({
            "business": {"name": "Harbor Grill"},
            "hero": {"headline": "Fresh fish", "cta": {"text": "Book", "href": "#"}},
            "sections": [
                {"type": "about", "title": "Our Story", "body": "Since 1990"},
                {"type": "faq", "title": "Questions", "items": []}
            ]
        }))
        .unwrap()
    }

    fn paths(c: &EditClassification) -> Vec<String> {
        c.target_fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn logo_edit_is_narrow() {
        let c = KeywordClassifier.classify_text("Change the logo to my new brand image", &config());
        assert_eq!(c.category, EditCategory::LogoOnly);
        assert_eq!(paths(&c), vec!["business.logoUrl"]);
        assert!(!c.should_regenerate);
    }

    #[test]
    fn new_business_regenerates() {
        let c = KeywordClassifier.classify_text(
            "Make this a SaaS landing page for project management software",
            &config(),
        );
        assert_eq!(c.category, EditCategory::StructureMajor);
        assert!(c.should_regenerate);
    }

    #[test]
    fn colour_edit_targets_primary() {
        let c = KeywordClassifier.classify_text("Use emerald instead", &config());
        assert_eq!(c.category, EditCategory::Styling);
        assert_eq!(paths(&c), vec!["theme.primary"]);

        let c = KeywordClassifier.classify_text("Switch to a dark theme with a rose accent", &config());
        assert_eq!(paths(&c), vec!["theme.mode", "theme.accent"]);
    }

    #[test]
    fn contact_edit_targets_named_fields() {
        let c = KeywordClassifier.classify_text("Our phone is now 555-0199 and email is hi@x.io", &config());
        assert_eq!(c.category, EditCategory::ContactInfo);
        assert_eq!(paths(&c), vec!["business.phone", "business.email"]);
    }

    #[test]
    fn removing_a_section_is_structural() {
        let c = KeywordClassifier.classify_text("Remove the FAQ", &config());
        assert_eq!(c.category, EditCategory::StructureMinor);
        assert_eq!(paths(&c), vec!["sections"]);
    }

    #[test]
    fn footer_links_are_navigation() {
        let c = KeywordClassifier.classify_text("Put an Instagram link in the footer", &config());
        assert_eq!(c.category, EditCategory::Navigation);
        assert_eq!(paths(&c), vec!["footer"]);
    }

    #[test]
    fn content_edit_narrows_to_named_section() {
        let c = KeywordClassifier.classify_text("Rewrite our story to sound warmer", &config());
        assert_eq!(c.category, EditCategory::Content);
        assert_eq!(paths(&c), vec!["sections.0"]);

        let vague = KeywordClassifier.classify_text("Make it sound friendlier", &config());
        assert_eq!(vague.scope, EditScope::Wide);
        assert_eq!(paths(&vague), vec!["hero", "sections"]);
    }

    proptest::proptest! {
        #[test]
        fn verdicts_are_deterministic_and_actionable(text in "[a-zA-Z ,.:/]{0,60}") {
            let first = KeywordClassifier.classify_text(&text, &config());
            let second = KeywordClassifier.classify_text(&text, &config());
            proptest::prop_assert_eq!(&first, &second);
            proptest::prop_assert!(first.requires_regeneration() || !first.target_fields.is_empty());
            if first.category == EditCategory::StructureMajor {
                proptest::prop_assert!(first.should_regenerate);
            }
        }
    }
}
