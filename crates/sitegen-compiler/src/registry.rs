//! Section registry and dispatcher
//!
//! Provides [`SectionRegistry`], the set of section kinds this compiler will
//! render. Lookups for anything outside the set (unknown tags, malformed
//! payloads, or kinds removed from the registry) return
//! [`RenderOutcome::Unsupported`] instead of failing.

use crate::render::{render_section, RenderContext, RenderEnv};
use sitegen_ir::{ConfigSection, Section, SectionType};
use std::collections::BTreeSet;

/// Result of dispatching one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Component source text
    Rendered(String),
    /// Kind is not renderable here
    Unsupported,
}

impl RenderOutcome {
    /// Source text, if rendered
    #[inline]
    #[must_use]
    pub fn into_source(self) -> Option<String> {
        match self {
            Self::Rendered(source) => Some(source),
            Self::Unsupported => None,
        }
    }
}

/// Registry of renderable section kinds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    kinds: BTreeSet<SectionType>,
}

impl SectionRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: BTreeSet::new(),
        }
    }

    /// Create registry with every built-in renderer
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in SectionType::ALL {
            registry.register(kind);
        }
        registry
    }

    /// Register a section kind
    pub fn register(&mut self, kind: SectionType) {
        self.kinds.insert(kind);
    }

    /// Remove a section kind
    #[inline]
    pub fn remove(&mut self, kind: SectionType) -> bool {
        self.kinds.remove(&kind)
    }

    /// Check if a kind is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: SectionType) -> bool {
        self.kinds.contains(&kind)
    }

    /// Check if a config entry can be rendered
    #[inline]
    #[must_use]
    pub fn supports(&self, section: &ConfigSection) -> bool {
        section
            .as_section()
            .is_some_and(|s| self.contains(s.section_type()))
    }

    /// Registered wire tags, in kind order
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.kinds.iter().map(SectionType::as_str).collect()
    }

    /// Get number of registered kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Render `section` as component `name` with DOM id `anchor`
    pub fn render(
        &self,
        section: &Section,
        name: &str,
        anchor: &str,
        env: &RenderEnv<'_>,
        ctx: &mut RenderContext,
    ) -> RenderOutcome {
        if !self.contains(section.section_type()) {
            return RenderOutcome::Unsupported;
        }
        RenderOutcome::Rendered(render_section(section, name, anchor, env, ctx))
    }

    /// Render a config entry, whatever its support status
    pub fn render_entry(
        &self,
        section: &ConfigSection,
        name: &str,
        anchor: &str,
        env: &RenderEnv<'_>,
        ctx: &mut RenderContext,
    ) -> RenderOutcome {
        match section.as_section() {
            Some(s) => self.render(s, name, anchor, env, ctx),
            None => RenderOutcome::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{bundle, business};
    use serde_json::json;

    fn entry(value: serde_json::Value) -> ConfigSection {
        ConfigSection::from_value(value)
    }

    #[test]
    fn defaults_cover_every_kind() {
        let registry = SectionRegistry::with_defaults();
        assert_eq!(registry.len(), SectionType::ALL.len());
        assert!(registry.tags().contains(&"logo-cloud"));
    }

    #[test]
    fn unknown_tag_is_unsupported_not_an_error() {
        let registry = SectionRegistry::with_defaults();
        let theme = bundle();
        let business = business();
        let env = RenderEnv {
            theme: &theme,
            business: &business,
        };
        let mut ctx = RenderContext::new(6);

        let unknown = entry(json!({"type": "unknown-x", "foo": 1}));
        assert!(!registry.supports(&unknown));
        assert_eq!(
            registry.render_entry(&unknown, "X", "x", &env, &mut ctx),
            RenderOutcome::Unsupported
        );
    }

    #[test]
    fn removed_kind_is_unsupported() {
        let mut registry = SectionRegistry::with_defaults();
        assert!(registry.remove(SectionType::Faq));
        let faq = entry(json!({"type": "faq", "items": []}));
        assert!(!registry.supports(&faq));

        let theme = bundle();
        let business = business();
        let env = RenderEnv {
            theme: &theme,
            business: &business,
        };
        let mut ctx = RenderContext::new(6);
        assert!(registry
            .render_entry(&faq, "Faq", "faq", &env, &mut ctx)
            .into_source()
            .is_none());
    }

    #[test]
    fn rendering_is_pure_for_same_inputs() {
        let registry = SectionRegistry::with_defaults();
        let theme = bundle();
        let business = business();
        let env = RenderEnv {
            theme: &theme,
            business: &business,
        };
        let team = entry(json!({
            "type": "team",
            "title": "Crew",
            "members": [{"name": "Ana", "role": "Chef", "imageDescription": "Chef portrait"}]
        }));

        let a = registry.render_entry(&team, "Team", "team", &env, &mut RenderContext::new(6));
        let b = registry.render_entry(&team, "Team", "team", &env, &mut RenderContext::new(6));
        assert_eq!(a, b);
    }
}
