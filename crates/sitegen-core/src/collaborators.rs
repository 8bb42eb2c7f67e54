//! External collaborator contracts
//!
//! The core never talks to a model or a network service directly. Config
//! generation, edit classification, scoped mutation and custom-section
//! validation are delegated through these traits.

use crate::error::CollaboratorError;
use crate::types::{EditClassification, UploadedAsset};
use async_trait::async_trait;
use sitegen_ir::{ConfigSection, Section, WebsiteConfig};
use tracing::warn;

/// Produces a config from a prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IrGenerator: Send + Sync {
    /// Generate a full config
    async fn generate(
        &self,
        prompt: &str,
        images: &[UploadedAsset],
    ) -> Result<WebsiteConfig, CollaboratorError>;
}

/// Classifies an edit against the current config
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EditClassifier: Send + Sync {
    /// Classify `edit_text`
    async fn classify(
        &self,
        edit_text: &str,
        config: &WebsiteConfig,
    ) -> Result<EditClassification, CollaboratorError>;
}

/// Applies an edit, expected to touch only the classification's target fields
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScopedMutator: Send + Sync {
    /// Produce the edited config
    async fn mutate(
        &self,
        config: &WebsiteConfig,
        edit_text: &str,
        classification: &EditClassification,
    ) -> Result<WebsiteConfig, CollaboratorError>;
}

/// Filters out custom sections that would not build
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomSectionValidator: Send + Sync {
    /// Return the sections that may be compiled
    async fn validate(
        &self,
        sections: Vec<ConfigSection>,
    ) -> Result<Vec<ConfigSection>, CollaboratorError>;
}

/// Validator that accepts everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

#[async_trait]
impl CustomSectionValidator for AcceptAllValidator {
    async fn validate(
        &self,
        sections: Vec<ConfigSection>,
    ) -> Result<Vec<ConfigSection>, CollaboratorError> {
        Ok(sections)
    }
}

/// Offline structural check for custom sections
///
/// Drops a custom section when its component name is blank, its code has no
/// default export, or its braces do not balance. Other sections pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    /// Reason a custom section is rejected, if any
    #[must_use]
    pub fn rejection(section: &Section) -> Option<&'static str> {
        let Section::Custom(custom) = section else {
            return None;
        };
        if custom.component_name.trim().is_empty() {
            return Some("component name is empty");
        }
        if !custom.code.contains("export default") {
            return Some("code has no default export");
        }
        let mut depth: i64 = 0;
        for c in custom.code.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Some("unbalanced braces");
            }
        }
        if depth != 0 {
            return Some("unbalanced braces");
        }
        None
    }
}

#[async_trait]
impl CustomSectionValidator for StructuralValidator {
    async fn validate(
        &self,
        sections: Vec<ConfigSection>,
    ) -> Result<Vec<ConfigSection>, CollaboratorError> {
        Ok(sections
            .into_iter()
            .filter(|entry| {
                let reason = entry.as_section().and_then(Self::rejection);
                if let Some(reason) = reason {
                    warn!(reason, "custom section rejected");
                }
                reason.is_none()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom(code: &str) -> ConfigSection {
        ConfigSection::from_value(json!({
            "type": "custom",
            "componentName": "Widget",
            "code": code
        }))
    }

    #[tokio::test]
    async fn structural_validator_filters_broken_custom_sections() {
        let sections = vec![
            custom("export default function Widget() { return <div />; }"),
            custom("function Widget() { return null; }"),
            custom("export default function Widget() { return <div />;"),
            ConfigSection::from_value(json!({"type": "faq", "items": []})),
        ];
        let kept = StructuralValidator.validate(sections).await.unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].type_tag(), "faq");
    }

    #[tokio::test]
    async fn accept_all_keeps_order() {
        let sections = vec![custom("x"), custom("y")];
        let kept = AcceptAllValidator.validate(sections.clone()).await.unwrap();
        assert_eq!(kept, sections);
    }
}
