//! Sitegen Core - edit routing and site sessions
//!
//! The layer between a user and the compiler that:
//! - Classifies free-text edits against the current config
//! - Routes them to regeneration, the logo fast path or a scoped mutation
//! - Checks mutations against their target fields with a structural diff
//! - Runs generate → validate → compile sessions with per-project image caches
//!
//! # Example
//!
//! ```rust,ignore
//! use sitegen_core::{EditRouter, KeywordClassifier};
//!
//! let router = EditRouter::new(Arc::new(KeywordClassifier), mutator);
//! let outcome = router
//!     .smart_edit(&config, "Change the logo to https://cdn.example/logo.svg", |_| {}, &[])
//!     .await?;
//!
//! if outcome.should_regenerate {
//!     // discard outcome.config and regenerate
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod classifier;
pub mod collaborators;
pub mod error;
pub mod fast_path;
pub mod router;
pub mod settings;
pub mod studio;
pub mod types;

// Re-exports for convenience
pub use classifier::KeywordClassifier;
pub use collaborators::{
    AcceptAllValidator, CustomSectionValidator, EditClassifier, IrGenerator, ScopedMutator,
    StructuralValidator,
};
pub use error::{CollaboratorError, EditError, SettingsError};
pub use fast_path::{apply_logo, extract_logo_url};
pub use router::EditRouter;
pub use settings::{CacheSettings, SitegenSettings};
pub use studio::{regenerate_prompt, Collaborators, ImageCacheStore, SiteStudio, StudioEdit};
pub use types::{
    EditCategory, EditClassification, EditOutcome, EditPath, EditProgress, EditScope, ProjectId,
    RouterConfig, ScopePolicy, UploadedAsset,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Sitegen Core
    pub use crate::{
        Collaborators, EditClassification, EditOutcome, EditProgress, EditRouter,
        KeywordClassifier, ProjectId, SiteStudio, SitegenSettings, UploadedAsset,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
