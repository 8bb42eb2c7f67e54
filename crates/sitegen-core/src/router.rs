//! Edit classification and mutation router
//!
//! Each edit is classified against the current config and then takes one
//! of three paths:
//!
//! - **Regenerate**: `structure-major` or any verdict marked
//!   `shouldRegenerate`. The config is handed back untouched with the
//!   regenerate signal; nothing else runs.
//! - **Logo fast path**: `logo-only` with a URL in the text or an image
//!   upload. The URL is written directly; the mutator is not called.
//! - **Scoped mutation**: everything else. The mutator is asked for a new
//!   config, which is diffed against the old one. Changes no target field
//!   covers, including a resized list holding a target, are logged and,
//!   under [`ScopePolicy::Clip`], reverted.
//!
//! The router keeps no state between edits.

use crate::collaborators::{EditClassifier, ScopedMutator};
use crate::error::EditError;
use crate::fast_path::{apply_logo, extract_logo_url};
use crate::types::{
    EditCategory, EditClassification, EditOutcome, EditPath, EditProgress, RouterConfig,
    ScopePolicy, UploadedAsset,
};
use sitegen_ir::{clip_to_scope, ConfigDiff, FieldPath, WebsiteConfig};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use ulid::Ulid;

/// Routes edits to regeneration, the logo fast path or scoped mutation
#[derive(Clone)]
pub struct EditRouter {
    classifier: Arc<dyn EditClassifier>,
    mutator: Arc<dyn ScopedMutator>,
    config: RouterConfig,
}

impl std::fmt::Debug for EditRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditRouter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EditRouter {
    /// Create router with default configuration
    #[must_use]
    pub fn new(classifier: Arc<dyn EditClassifier>, mutator: Arc<dyn ScopedMutator>) -> Self {
        Self {
            classifier,
            mutator,
            config: RouterConfig::default(),
        }
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Apply one edit to `config`
    ///
    /// `on_progress` sees every phase in order, ending with
    /// [`EditProgress::Done`].
    ///
    /// # Errors
    /// Returns error if the edit text is blank, a collaborator fails, or the
    /// configs cannot be diffed
    pub async fn smart_edit<P>(
        &self,
        config: &WebsiteConfig,
        edit_text: &str,
        mut on_progress: P,
        uploaded_assets: &[UploadedAsset],
    ) -> Result<EditOutcome, EditError>
    where
        P: FnMut(EditProgress) + Send,
    {
        if edit_text.trim().is_empty() {
            return Err(EditError::EmptyEdit);
        }

        let span = info_span!("edit", edit_id = %Ulid::new());
        async move {
            on_progress(EditProgress::Classifying);
            let classification = self
                .classifier
                .classify(edit_text, config)
                .await?
                .normalized();
            info!(
                category = %classification.category,
                targets = classification.target_fields.len(),
                regenerate = classification.should_regenerate,
                "edit classified"
            );
            on_progress(EditProgress::Classified(classification.clone()));

            let outcome = if classification.requires_regeneration() {
                on_progress(EditProgress::Applying(EditPath::Regenerate));
                EditOutcome {
                    config: config.clone(),
                    should_regenerate: true,
                    classification,
                    diff: ConfigDiff::default(),
                    out_of_scope: Vec::new(),
                    path: EditPath::Regenerate,
                }
            } else if let Some(url) = self.logo_url(&classification, edit_text, uploaded_assets) {
                on_progress(EditProgress::Applying(EditPath::LogoFastPath));
                let next = apply_logo(config, &url);
                on_progress(EditProgress::Verifying);
                let diff = ConfigDiff::between(config, &next)?;
                debug!(url = %url, "logo applied directly");
                EditOutcome {
                    config: next,
                    should_regenerate: false,
                    classification,
                    diff,
                    out_of_scope: Vec::new(),
                    path: EditPath::LogoFastPath,
                }
            } else {
                on_progress(EditProgress::Applying(EditPath::ScopedMutation));
                self.mutate(config, edit_text, classification, &mut on_progress)
                    .await?
            };

            info!(path = ?outcome.path, changes = outcome.diff.len(), "edit routed");
            on_progress(EditProgress::Done {
                should_regenerate: outcome.should_regenerate,
            });
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    fn logo_url(
        &self,
        classification: &EditClassification,
        edit_text: &str,
        assets: &[UploadedAsset],
    ) -> Option<String> {
        if classification.category != EditCategory::LogoOnly || !self.config.allow_logo_fast_path {
            return None;
        }
        let url = extract_logo_url(edit_text, assets);
        if url.is_none() {
            debug!("no logo URL found; falling back to the mutator");
        }
        url
    }

    async fn mutate<P>(
        &self,
        config: &WebsiteConfig,
        edit_text: &str,
        classification: EditClassification,
        on_progress: &mut P,
    ) -> Result<EditOutcome, EditError>
    where
        P: FnMut(EditProgress) + Send,
    {
        let mutated = self
            .mutator
            .mutate(config, edit_text, &classification)
            .await?;

        on_progress(EditProgress::Verifying);
        let targets = &classification.target_fields;
        let raw_diff = ConfigDiff::between(config, &mutated)?;
        let out_of_scope: Vec<FieldPath> = raw_diff
            .outside(targets)
            .into_iter()
            .map(|c| c.path.clone())
            .collect();

        for path in &out_of_scope {
            warn!(path = %path, policy = ?self.config.scope_policy, "mutation outside target fields");
        }

        let (config, diff) = match self.config.scope_policy {
            ScopePolicy::Observe => (mutated, raw_diff),
            ScopePolicy::Clip if out_of_scope.is_empty() => (mutated, raw_diff),
            ScopePolicy::Clip => {
                let clipped = clip_to_scope(config, &mutated, targets)?;
                let diff = ConfigDiff::between(config, &clipped.config)?;
                (clipped.config, diff)
            }
        };

        Ok(EditOutcome {
            config,
            should_regenerate: false,
            classification,
            diff,
            out_of_scope,
            path: EditPath::ScopedMutation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MockEditClassifier, MockScopedMutator};
    use crate::error::CollaboratorError;
    use crate::types::EditScope;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitegen_ir::PaletteColor;

    fn config() -> WebsiteConfig {
        WebsiteConfig::from_value(json!({
            "business": {"name": "Harbor Grill"},
            "hero": {"headline": "Fresh fish", "cta": {"text": "Book", "href": "#"}}
        }))
        .unwrap()
    }

    fn verdict(category: EditCategory, targets: &[&str]) -> EditClassification {
        EditClassification::new(
            category,
            EditScope::Narrow,
            targets.iter().map(|t| t.parse().unwrap()).collect(),
        )
    }

    fn classifier_returning(c: EditClassification) -> MockEditClassifier {
        let mut classifier = MockEditClassifier::new();
        classifier
            .expect_classify()
            .times(1)
            .returning(move |_, _| Ok(c.clone()));
        classifier
    }

    fn never_mutates() -> MockScopedMutator {
        let mut mutator = MockScopedMutator::new();
        mutator.expect_mutate().never();
        mutator
    }

    fn paths(diff: &ConfigDiff) -> Vec<String> {
        diff.paths().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn regenerate_skips_the_mutator() {
        let router = EditRouter::new(
            Arc::new(classifier_returning(EditClassification::regenerate("new business"))),
            Arc::new(never_mutates()),
        );
        let mut events = Vec::new();
        let outcome = router
            .smart_edit(&config(), "Make this a bakery", |e| events.push(e), &[])
            .await
            .unwrap();

        assert!(outcome.should_regenerate);
        assert_eq!(outcome.path, EditPath::Regenerate);
        assert_eq!(outcome.config, config());
        assert_eq!(events.last(), Some(&EditProgress::Done { should_regenerate: true }));
    }

    #[tokio::test]
    async fn flagged_regenerate_wins_over_targets() {
        let mut c = verdict(EditCategory::Content, &["hero.headline"]);
        c.should_regenerate = true;
        let router = EditRouter::new(Arc::new(classifier_returning(c)), Arc::new(never_mutates()));
        let outcome = router
            .smart_edit(&config(), "Rewrite it all", |_| {}, &[])
            .await
            .unwrap();
        assert_eq!(outcome.path, EditPath::Regenerate);
    }

    #[tokio::test]
    async fn logo_fast_path_skips_the_mutator() {
        let router = EditRouter::new(
            Arc::new(classifier_returning(verdict(EditCategory::LogoOnly, &["business.logoUrl"]))),
            Arc::new(never_mutates()),
        );
        let outcome = router
            .smart_edit(&config(), "Use https://cdn.test/logo.svg as the logo", |_| {}, &[])
            .await
            .unwrap();

        assert_eq!(outcome.path, EditPath::LogoFastPath);
        assert_eq!(
            outcome.config.business.logo_url.as_deref(),
            Some("https://cdn.test/logo.svg")
        );
        assert_eq!(paths(&outcome.diff), vec!["business.logoUrl"]);
    }

    #[tokio::test]
    async fn logo_without_url_falls_through_to_mutator() {
        let mut mutator = MockScopedMutator::new();
        mutator.expect_mutate().times(1).returning(|config, _, _| {
            let mut next = config.clone();
            next.business.logo_url = Some("https://gen.test/logo.png".to_string());
            Ok(next)
        });
        let router = EditRouter::new(
            Arc::new(classifier_returning(verdict(EditCategory::LogoOnly, &["business.logoUrl"]))),
            Arc::new(mutator),
        );
        let outcome = router
            .smart_edit(&config(), "Design me a nicer logo", |_| {}, &[])
            .await
            .unwrap();
        assert_eq!(outcome.path, EditPath::ScopedMutation);
        assert!(outcome.out_of_scope.is_empty());
    }

    #[tokio::test]
    async fn clip_reverts_out_of_scope_changes() {
        let mut mutator = MockScopedMutator::new();
        mutator.expect_mutate().times(1).returning(|config, _, _| {
            let mut next = config.clone();
            next.theme.primary = PaletteColor::Emerald;
            next.business.name = "Renamed".to_string();
            Ok(next)
        });
        let router = EditRouter::new(
            Arc::new(classifier_returning(verdict(EditCategory::Styling, &["theme.primary"]))),
            Arc::new(mutator),
        );
        let outcome = router
            .smart_edit(&config(), "Make it green", |_| {}, &[])
            .await
            .unwrap();

        assert_eq!(paths(&outcome.diff), vec!["theme.primary"]);
        assert_eq!(outcome.out_of_scope.len(), 1);
        assert_eq!(outcome.config.business.name, "Harbor Grill");
        assert_eq!(outcome.config.theme.primary, PaletteColor::Emerald);
    }

    #[tokio::test]
    async fn dropping_a_sibling_section_is_out_of_scope() {
        let with_sections = WebsiteConfig::from_value(json!({
            "business": {"name": "Harbor Grill"},
            "hero": {"headline": "Fresh fish", "cta": {"text": "Book", "href": "#"}},
            "sections": [
                {"type": "faq", "title": "Questions", "items": []},
                {"type": "stats", "stats": []},
                {"type": "newsletter", "title": "News"}
            ]
        }))
        .unwrap();

        let mut mutator = MockScopedMutator::new();
        mutator.expect_mutate().times(1).returning(|config, _, _| {
            let mut next = config.clone();
            next.sections.pop();
            Ok(next)
        });
        let router = EditRouter::new(
            Arc::new(classifier_returning(verdict(EditCategory::Content, &["sections.0"]))),
            Arc::new(mutator),
        );
        let outcome = router
            .smart_edit(&with_sections, "Retitle the FAQ", |_| {}, &[])
            .await
            .unwrap();

        assert_eq!(outcome.out_of_scope.len(), 1);
        assert_eq!(outcome.out_of_scope[0].to_string(), "sections");
        assert_eq!(outcome.config.sections.len(), 3);
        assert!(outcome.diff.is_empty());
    }

    #[tokio::test]
    async fn observe_keeps_out_of_scope_changes() {
        let mut mutator = MockScopedMutator::new();
        mutator.expect_mutate().times(1).returning(|config, _, _| {
            let mut next = config.clone();
            next.theme.primary = PaletteColor::Emerald;
            next.business.name = "Renamed".to_string();
            Ok(next)
        });
        let router = EditRouter::new(
            Arc::new(classifier_returning(verdict(EditCategory::Styling, &["theme.primary"]))),
            Arc::new(mutator),
        )
        .with_config(RouterConfig::new().with_scope_policy(ScopePolicy::Observe));
        let outcome = router
            .smart_edit(&config(), "Make it green", |_| {}, &[])
            .await
            .unwrap();

        assert_eq!(outcome.config.business.name, "Renamed");
        assert_eq!(outcome.diff.len(), 2);
        assert_eq!(outcome.out_of_scope[0].to_string(), "business.name");
    }

    #[tokio::test]
    async fn progress_events_arrive_in_order() {
        let mut mutator = MockScopedMutator::new();
        mutator
            .expect_mutate()
            .returning(|config, _, _| Ok(config.clone()));
        let c = verdict(EditCategory::Content, &["hero"]);
        let router = EditRouter::new(Arc::new(classifier_returning(c.clone())), Arc::new(mutator));

        let mut events = Vec::new();
        router
            .smart_edit(&config(), "Tweak the headline", |e| events.push(e), &[])
            .await
            .unwrap();

        assert_eq!(
            events,
            vec![
                EditProgress::Classifying,
                EditProgress::Classified(c),
                EditProgress::Applying(EditPath::ScopedMutation),
                EditProgress::Verifying,
                EditProgress::Done { should_regenerate: false },
            ]
        );
    }

    #[tokio::test]
    async fn collaborator_failure_propagates() {
        let mut classifier = MockEditClassifier::new();
        classifier
            .expect_classify()
            .returning(|_, _| Err(CollaboratorError::Timeout { secs: 10 }));
        let router = EditRouter::new(Arc::new(classifier), Arc::new(never_mutates()));
        let err = router
            .smart_edit(&config(), "anything", |_| {}, &[])
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn blank_edit_is_rejected() {
        let router = EditRouter::new(
            Arc::new(MockEditClassifier::new()),
            Arc::new(never_mutates()),
        );
        assert!(matches!(
            router.smart_edit(&config(), "   ", |_| {}, &[]).await,
            Err(EditError::EmptyEdit)
        ));
    }
}
