//! Component naming and file deduplication
//!
//! Two layers:
//!
//! - [`allocate_names`] turns one page's ordered section list into unique
//!   component names. The first occurrence of a base name keeps it, later
//!   ones get `2`, `3`, ... appended (`Faq`, `Faq2`, `Faq3`).
//! - [`SectionFiles`] is the single-writer ledger across pages. The first
//!   page to claim a file path writes it; later claims reuse the file and,
//!   if their section differs, are reported as collisions.
//!
//! Names depend on list order, so reordering sections renames files.

use sitegen_ir::Section;
use std::collections::{HashMap, HashSet};

/// Directory (under the project root) holding section components
pub const SECTIONS_DIR: &str = "components/sections";

/// Names already taken by shared components imported next to sections
pub const RESERVED_NAMES: &[&str] = &["Hero", "Navbar", "Footer", "Home", "RootLayout"];

/// A section's resolved component identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionSlot {
    /// Position in the (filtered) section list
    pub index: usize,
    /// Component name, also the file stem
    pub name: String,
    /// Base name before deduplication
    pub base: String,
}

impl SectionSlot {
    /// Project-relative file path
    #[must_use]
    pub fn path(&self) -> String {
        format!("{SECTIONS_DIR}/{}.tsx", self.name)
    }

    /// Module specifier used by entry files
    #[must_use]
    pub fn import_path(&self) -> String {
        format!("@/{SECTIONS_DIR}/{}", self.name)
    }

    /// DOM id of the rendered `<section>`
    #[must_use]
    pub fn anchor(&self) -> String {
        kebab_case(&self.name)
    }
}

/// Base component name for a section
///
/// PascalCase of the section kind, or of `componentName` for custom
/// sections.
#[must_use]
pub fn base_name(section: &Section) -> String {
    match section {
        Section::Custom(custom) => {
            let name = pascal_case(&custom.component_name);
            match name.chars().next() {
                Some(c) if c.is_ascii_alphabetic() => name,
                Some(_) => format!("Custom{name}"),
                None => "Custom".to_string(),
            }
        }
        other => pascal_case(other.section_type().as_str()),
    }
}

/// Assign unique names to one page's sections, in list order
///
/// `reserved` names are never handed out; a base that hits one is bumped
/// like a repeat.
#[must_use]
pub fn allocate_names<'a, I>(sections: I, reserved: &[&str]) -> Vec<SectionSlot>
where
    I: IntoIterator<Item = &'a Section>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = reserved.iter().map(ToString::to_string).collect();

    sections
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let base = base_name(section);
            let count = counts.entry(base.clone()).or_insert(0);
            let name = loop {
                *count += 1;
                let candidate = if *count == 1 {
                    base.clone()
                } else {
                    format!("{base}{count}")
                };
                if used.insert(candidate.clone()) {
                    break candidate;
                }
            };
            SectionSlot { index, name, base }
        })
        .collect()
}

/// Outcome of claiming a section file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// Path was free; caller renders and writes it
    New,
    /// Path already written for an identical section
    Reused,
    /// Path already written for a different section; the first one stands
    Conflict {
        /// Route of the page that wrote the file
        first_route: String,
    },
}

/// Single-writer ledger of emitted section files
#[derive(Debug, Default)]
pub struct SectionFiles<'a> {
    owners: HashMap<String, (String, &'a Section)>,
}

impl<'a> SectionFiles<'a> {
    /// Create empty ledger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path` for `section` on behalf of `route`
    pub fn claim(&mut self, path: &str, section: &'a Section, route: &str) -> Claim {
        match self.owners.get(path) {
            None => {
                self.owners
                    .insert(path.to_string(), (route.to_string(), section));
                Claim::New
            }
            Some((_, owner)) if *owner == section => Claim::Reused,
            Some((first_route, _)) => Claim::Conflict {
                first_route: first_route.clone(),
            },
        }
    }

    /// Check if a path has an owner
    #[inline]
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.owners.contains_key(path)
    }

    /// Number of distinct files claimed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Check if nothing was claimed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// `feature-grid` / `my widget` / `pricing_table` → `FeatureGrid` / `MyWidget` / `PricingTable`
///
/// Non-alphanumeric characters split words and are dropped. Interior
/// capitals are kept, so `heroBanner` stays `HeroBanner`.
#[must_use]
pub fn pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}

/// `FeatureGrid2` → `feature-grid2`
#[must_use]
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn section(value: serde_json::Value) -> Section {
        serde_json::from_value(value).unwrap()
    }

    fn faq() -> Section {
        section(json!({"type": "faq", "items": []}))
    }

    fn custom(name: &str) -> Section {
        section(json!({
            "type": "custom",
            "componentName": name,
            "code": "export default function X() { return null; }"
        }))
    }

    fn names(slots: &[SectionSlot]) -> Vec<&str> {
        slots.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn repeated_types_get_numeric_suffixes() {
        let sections = [faq(), faq(), faq()];
        let slots = allocate_names(&sections, RESERVED_NAMES);
        assert_eq!(names(&slots), vec!["Faq", "Faq2", "Faq3"]);
        assert_eq!(slots[1].path(), "components/sections/Faq2.tsx");
        assert_eq!(slots[1].import_path(), "@/components/sections/Faq2");
    }

    #[test]
    fn base_names_are_pascal_case_of_type() {
        let s = section(json!({"type": "feature-grid", "title": "Why us"}));
        assert_eq!(base_name(&s), "FeatureGrid");
        let s = section(json!({"type": "cta-banner", "headline": "Go", "cta": {"text": "a", "href": "#"}}));
        assert_eq!(base_name(&s), "CtaBanner");
    }

    #[test]
    fn custom_sections_use_component_name() {
        assert_eq!(base_name(&custom("loyalty-card")), "LoyaltyCard");
        assert_eq!(base_name(&custom("3d viewer")), "Custom3dViewer");
        assert_eq!(base_name(&custom("!!!")), "Custom");
    }

    #[test]
    fn custom_name_cannot_shadow_generated_suffix() {
        let sections = [faq(), custom("Faq2"), faq()];
        let slots = allocate_names(&sections, RESERVED_NAMES);
        assert_eq!(names(&slots), vec!["Faq", "Faq2", "Faq3"]);
    }

    #[test]
    fn reserved_names_are_skipped() {
        let sections = [custom("Hero")];
        let slots = allocate_names(&sections, RESERVED_NAMES);
        assert_eq!(names(&slots), vec!["Hero2"]);
    }

    #[test]
    fn ledger_reuses_identical_and_flags_different() {
        let a = faq();
        let b = section(json!({"type": "faq", "title": "Other", "items": []}));
        let mut files = SectionFiles::new();

        assert_eq!(files.claim("components/sections/Faq.tsx", &a, "/"), Claim::New);
        assert_eq!(files.claim("components/sections/Faq.tsx", &a, "/help"), Claim::Reused);
        assert_eq!(
            files.claim("components/sections/Faq.tsx", &b, "/about"),
            Claim::Conflict {
                first_route: "/".to_string()
            }
        );
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn case_helpers() {
        assert_eq!(pascal_case("blog-preview"), "BlogPreview");
        assert_eq!(pascal_case("heroBanner"), "HeroBanner");
        assert_eq!(kebab_case("FeatureGrid2"), "feature-grid2");
        assert_eq!(kebab_case("Faq"), "faq");
    }

    fn arb_section() -> impl Strategy<Value = Section> {
        prop_oneof![
            Just(faq()),
            Just(section(json!({"type": "team", "title": "Team", "members": []}))),
            Just(section(json!({"type": "stats", "stats": []}))),
            "[a-zA-Z][a-zA-Z0-9 ]{0,8}".prop_map(|n| custom(&n)),
        ]
    }

    proptest! {
        #[test]
        fn allocation_is_unique_and_deterministic(sections in prop::collection::vec(arb_section(), 0..12)) {
            let first = allocate_names(&sections, RESERVED_NAMES);
            let second = allocate_names(&sections, RESERVED_NAMES);
            prop_assert_eq!(&first, &second);

            let unique: HashSet<_> = first.iter().map(|s| s.name.clone()).collect();
            prop_assert_eq!(unique.len(), sections.len());
            for slot in &first {
                prop_assert!(!RESERVED_NAMES.contains(&slot.name.as_str()));
                prop_assert!(slot.name.starts_with(&slot.base));
            }
        }
    }
}
