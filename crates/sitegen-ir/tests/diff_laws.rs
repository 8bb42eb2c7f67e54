//! Properties of structural diffs and scope clipping.
//!
//! - A config diffed against itself is empty.
//! - Clipping a mutation to its targets leaves a diff that stays inside the
//!   targets, and keeps in-scope changes exactly as the mutator made them.
//! - A change above a target (a resized list) is out of scope; clipping
//!   restores the list and keeps the targeted item's new value.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use sitegen_ir::{clip_to_scope, ConfigDiff, FieldPath, PaletteColor, WebsiteConfig};

fn base() -> WebsiteConfig {
    WebsiteConfig::from_value(json!({
        "business": {"name": "Harbor Grill", "tagline": "Fresh off the boat"},
        "theme": {"primary": "blue", "secondary": "sky", "accent": "amber"},
        "hero": {
            "headline": "Seafood by the water",
            "cta": {"text": "Book", "href": "#contact"},
            "imageDescription": "A seaside terrace at sunset"
        },
        "sections": [
            {"type": "faq", "items": [{"question": "Parking?", "answer": "Yes"}]},
            {"type": "stats", "stats": [{"value": "20", "label": "Years"}]}
        ]
    }))
    .unwrap()
}

fn p(s: &str) -> FieldPath {
    s.parse().unwrap()
}

#[test]
fn surgical_theme_edit_reports_only_its_path() {
    let old = base();
    let mut new = old.clone();
    new.theme.primary = PaletteColor::Rose;

    let diff = ConfigDiff::between(&old, &new).unwrap();
    assert_eq!(diff.paths().cloned().collect::<Vec<_>>(), vec![p("theme.primary")]);
}

#[test]
fn clipping_reverts_out_of_scope_changes() {
    let old = base();
    let mut new = old.clone();
    new.theme.primary = PaletteColor::Rose;
    new.business.name = "Somewhere Else".to_string();
    new.sections.pop();

    let clipped = clip_to_scope(&old, &new, &[p("theme.primary")]).unwrap();

    assert_eq!(clipped.config.theme.primary, PaletteColor::Rose);
    assert_eq!(clipped.config.business.name, "Harbor Grill");
    assert_eq!(clipped.config.sections.len(), 2);
    assert_eq!(clipped.reverted, vec![p("business.name"), p("sections")]);

    let diff = ConfigDiff::between(&old, &clipped.config).unwrap();
    assert_eq!(diff.paths().cloned().collect::<Vec<_>>(), vec![p("theme.primary")]);
}

#[test]
fn clipping_in_scope_mutation_is_identity() {
    let old = base();
    let mut new = old.clone();
    new.hero.headline = "New headline".to_string();

    let clipped = clip_to_scope(&old, &new, &[p("hero")]).unwrap();
    assert!(clipped.reverted.is_empty());
    assert_eq!(clipped.config, new);
}

#[test]
fn resized_list_above_a_targeted_item_is_restored() {
    let old = base();
    let mut value = serde_json::to_value(&old).unwrap();
    value["sections"][0]["items"][0]["answer"] = json!("Street parking only");
    value["sections"].as_array_mut().unwrap().pop();
    let new = WebsiteConfig::from_value(value).unwrap();

    let targets = [p("sections.0")];
    let diff = ConfigDiff::between(&old, &new).unwrap();
    let outside: Vec<_> = diff.outside(&targets).into_iter().map(|c| c.path.clone()).collect();
    assert_eq!(outside, vec![p("sections")]);

    let clipped = clip_to_scope(&old, &new, &targets).unwrap();
    assert_eq!(clipped.reverted, vec![p("sections")]);
    assert_eq!(clipped.config.sections.len(), 2);
    assert_eq!(clipped.config.sections[0], new.sections[0]);
    assert_eq!(clipped.config.sections[1], old.sections[1]);

    let remaining = ConfigDiff::between(&old, &clipped.config).unwrap();
    assert!(remaining.is_within(&targets));
    assert_eq!(
        remaining.paths().cloned().collect::<Vec<_>>(),
        vec![p("sections.0.items.0.answer")]
    );
}

proptest! {
    #[test]
    fn self_diff_is_empty(name in "[A-Za-z ]{1,20}", headline in "[A-Za-z ]{1,40}") {
        let mut config = base();
        config.business.name = name;
        config.hero.headline = headline;
        prop_assert!(ConfigDiff::between(&config, &config).unwrap().is_empty());
    }

    #[test]
    fn clipped_diff_stays_within_targets(
        color in prop::sample::select(PaletteColor::ALL.to_vec()),
        name in "[A-Za-z]{1,12}",
        tagline in "[a-z ]{0,16}",
        drop_section in any::<bool>(),
    ) {
        let old = base();
        let mut new = old.clone();
        new.theme.accent = color;
        new.business.name = name;
        new.business.tagline = tagline;
        if drop_section {
            new.sections.clear();
        }

        let targets = [p("business.name")];
        let clipped = clip_to_scope(&old, &new, &targets).unwrap();
        let diff = ConfigDiff::between(&old, &clipped.config).unwrap();

        prop_assert!(diff.is_within(&targets));
        prop_assert_eq!(&clipped.config.business.name, &new.business.name);
    }
}
