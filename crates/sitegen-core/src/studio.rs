//! Site studio session
//!
//! Ties the collaborators, the compiler and the router together:
//!
//! - **create**: prompt → generator → custom-section validator → compile
//! - **edit**: router → either recompile the edited config, or regenerate
//!   from the edit text and compile the fresh config
//!
//! Each project's image cache is carried from one compile to the next
//! through an [`ImageCacheStore`], so unchanged images are never requested
//! twice. Edits for one project are expected to arrive one at a time.

use crate::collaborators::{CustomSectionValidator, EditClassifier, IrGenerator, ScopedMutator};
use crate::error::EditError;
use crate::router::EditRouter;
use crate::settings::{CacheSettings, SitegenSettings};
use crate::types::{EditOutcome, EditProgress, ProjectId, UploadedAsset};
use moka::future::Cache;
use sitegen_compiler::{CompiledProject, ImageCache, ImageResolver, ProjectCompiler};
use sitegen_ir::{ConfigSection, WebsiteConfig};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-project image caches, bounded and idle-expiring
#[derive(Clone)]
pub struct ImageCacheStore {
    caches: Cache<ProjectId, Arc<ImageCache>>,
}

impl std::fmt::Debug for ImageCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCacheStore")
            .field("entries", &self.caches.entry_count())
            .finish()
    }
}

impl ImageCacheStore {
    /// Create store
    #[must_use]
    pub fn new(settings: &CacheSettings) -> Self {
        let mut builder = Cache::builder().max_capacity(settings.max_projects);
        if let Some(ttl) = settings.time_to_idle() {
            builder = builder.time_to_idle(ttl);
        }
        Self {
            caches: builder.build(),
        }
    }

    /// Cache for `project`, empty when unknown or expired
    pub async fn get(&self, project: &ProjectId) -> ImageCache {
        self.caches
            .get(project)
            .await
            .map(|cache| cache.as_ref().clone())
            .unwrap_or_default()
    }

    /// Replace the cache for `project`
    pub async fn put(&self, project: ProjectId, cache: ImageCache) {
        self.caches.insert(project, Arc::new(cache)).await;
    }

    /// Forget `project`
    pub async fn invalidate(&self, project: &ProjectId) {
        self.caches.invalidate(project).await;
    }

    /// Number of projects held
    pub async fn len(&self) -> u64 {
        self.caches.run_pending_tasks().await;
        self.caches.entry_count()
    }

    /// Check if no project is held
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ImageCacheStore {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}

/// External services a studio talks to
#[derive(Clone)]
pub struct Collaborators {
    /// Config generator
    pub generator: Arc<dyn IrGenerator>,
    /// Edit classifier
    pub classifier: Arc<dyn EditClassifier>,
    /// Scope-constrained mutator
    pub mutator: Arc<dyn ScopedMutator>,
    /// Custom-section validator
    pub validator: Arc<dyn CustomSectionValidator>,
    /// Image generator
    pub images: Arc<dyn ImageResolver>,
}

/// Result of an edit made through the studio
#[derive(Debug, Clone)]
pub struct StudioEdit {
    /// What the router decided
    pub outcome: EditOutcome,
    /// Project compiled from the resulting config
    pub project: CompiledProject,
    /// Whether the config was regenerated instead of edited
    pub regenerated: bool,
}

/// Session orchestrator: generate, validate, compile, edit
pub struct SiteStudio {
    generator: Arc<dyn IrGenerator>,
    validator: Arc<dyn CustomSectionValidator>,
    images: Arc<dyn ImageResolver>,
    compiler: ProjectCompiler,
    router: EditRouter,
    caches: ImageCacheStore,
}

impl std::fmt::Debug for SiteStudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteStudio")
            .field("compiler", &self.compiler)
            .field("router", &self.router)
            .field("caches", &self.caches)
            .finish_non_exhaustive()
    }
}

impl SiteStudio {
    /// Create studio
    #[must_use]
    pub fn new(collaborators: Collaborators, settings: &SitegenSettings) -> Self {
        let router = EditRouter::new(collaborators.classifier, collaborators.mutator)
            .with_config(settings.router.clone());
        Self {
            generator: collaborators.generator,
            validator: collaborators.validator,
            images: collaborators.images,
            compiler: ProjectCompiler::with_options(settings.compiler.clone()),
            router,
            caches: ImageCacheStore::new(&settings.cache),
        }
    }

    /// Per-project image caches
    #[inline]
    #[must_use]
    pub fn caches(&self) -> &ImageCacheStore {
        &self.caches
    }

    /// Edit router
    #[inline]
    #[must_use]
    pub fn router(&self) -> &EditRouter {
        &self.router
    }

    /// Generate a config from `prompt` and compile it
    ///
    /// # Errors
    /// Returns error if the generator or validator fails
    pub async fn create(
        &self,
        project: &ProjectId,
        prompt: &str,
        images: &[UploadedAsset],
    ) -> Result<CompiledProject, EditError> {
        info!(project = %project, "creating site");
        let config = self.generator.generate(prompt, images).await?;
        let config = self.validated(config).await?;
        Ok(self.compile(project, &config).await)
    }

    /// Compile `config` with the project's image cache, then store the new cache
    pub async fn compile(&self, project: &ProjectId, config: &WebsiteConfig) -> CompiledProject {
        let previous = self.caches.get(project).await;
        let compiled = self
            .compiler
            .compile(config, &previous, self.images.as_ref())
            .await;
        self.caches
            .put(project.clone(), compiled.image_cache.clone())
            .await;
        compiled
    }

    /// Route an edit, then recompile or regenerate
    ///
    /// # Errors
    /// Returns error if routing or a collaborator fails
    pub async fn edit<P>(
        &self,
        project: &ProjectId,
        config: &WebsiteConfig,
        edit_text: &str,
        on_progress: P,
        uploaded_assets: &[UploadedAsset],
    ) -> Result<StudioEdit, EditError>
    where
        P: FnMut(EditProgress) + Send,
    {
        let outcome = self
            .router
            .smart_edit(config, edit_text, on_progress, uploaded_assets)
            .await?;

        let next = if outcome.should_regenerate {
            let prompt = regenerate_prompt(edit_text, config);
            debug!(project = %project, "regenerating config");
            self.generator.generate(&prompt, uploaded_assets).await?
        } else {
            outcome.config.clone()
        };
        let next = self.validated(next).await?;
        let compiled = self.compile(project, &next).await;

        Ok(StudioEdit {
            regenerated: outcome.should_regenerate,
            outcome,
            project: compiled,
        })
    }

    /// Run every section list through the custom-section validator
    async fn validated(&self, mut config: WebsiteConfig) -> Result<WebsiteConfig, EditError> {
        config.sections = self.validate_list(std::mem::take(&mut config.sections)).await?;
        for page in &mut config.pages {
            page.sections = self.validate_list(std::mem::take(&mut page.sections)).await?;
        }
        Ok(config)
    }

    async fn validate_list(&self, sections: Vec<ConfigSection>) -> Result<Vec<ConfigSection>, EditError> {
        let before = sections.len();
        let kept = self.validator.validate(sections).await?;
        if kept.len() != before {
            debug!(dropped = before - kept.len(), "validator dropped sections");
        }
        Ok(kept)
    }
}

/// Prompt used when an edit asks for a different site
#[must_use]
pub fn regenerate_prompt(edit_text: &str, config: &WebsiteConfig) -> String {
    let name = config.business.name.trim();
    if name.is_empty() {
        edit_text.trim().to_string()
    } else {
        format!("{}\n\nBusiness name: {name}", edit_text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(name: &str) -> WebsiteConfig {
        WebsiteConfig::from_value(json!({
            "business": {"name": name},
            "hero": {"headline": "Hi", "cta": {"text": "Go", "href": "#"}}
        }))
        .unwrap()
    }

    #[test]
    fn regenerate_prompt_carries_business_name() {
        assert_eq!(
            regenerate_prompt(" Make this a bakery ", &config("Harbor Grill")),
            "Make this a bakery\n\nBusiness name: Harbor Grill"
        );
        assert_eq!(regenerate_prompt("Start over", &config("")), "Start over");
    }

    #[tokio::test]
    async fn cache_store_round_trips_per_project() {
        let store = ImageCacheStore::default();
        let a = ProjectId::from("a");
        assert!(store.get(&a).await.is_empty());

        let mut cache = ImageCache::new();
        cache.insert("patio", "https://img/1");
        store.put(a.clone(), cache.clone()).await;

        assert_eq!(store.get(&a).await, cache);
        assert!(store.get(&ProjectId::from("b")).await.is_empty());
        assert_eq!(store.len().await, 1);

        store.invalidate(&a).await;
        assert!(store.is_empty().await);
    }
}
