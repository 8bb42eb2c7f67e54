//! Core types for edit routing

use serde::{Deserialize, Serialize};
use sitegen_ir::{ConfigDiff, FieldPath, WebsiteConfig};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Kind of change an edit asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditCategory {
    /// Swap the logo only
    LogoOnly,
    /// Colours, fonts, background mode
    Styling,
    /// Copy changes inside existing sections
    Content,
    /// Add, remove or reorder a few sections
    StructureMinor,
    /// A different site; always regenerates
    StructureMajor,
    /// Image descriptions
    Images,
    /// Phone, email, address, hours
    ContactInfo,
    /// Navigation and footer links
    Navigation,
}

impl EditCategory {
    /// All categories
    pub const ALL: [Self; 8] = [
        Self::LogoOnly,
        Self::Styling,
        Self::Content,
        Self::StructureMinor,
        Self::StructureMajor,
        Self::Images,
        Self::ContactInfo,
        Self::Navigation,
    ];

    /// Wire tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LogoOnly => "logo-only",
            Self::Styling => "styling",
            Self::Content => "content",
            Self::StructureMinor => "structure-minor",
            Self::StructureMajor => "structure-major",
            Self::Images => "images",
            Self::ContactInfo => "contact-info",
            Self::Navigation => "navigation",
        }
    }
}

impl Display for EditCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of the config an edit may touch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditScope {
    /// One or two fields
    #[default]
    Narrow,
    /// One area (a section list, the hero)
    Moderate,
    /// Most of the config
    Wide,
}

/// Classifier verdict for one edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditClassification {
    /// Edit category
    #[serde(rename = "type")]
    pub category: EditCategory,
    /// Breadth of the change
    #[serde(default)]
    pub scope: EditScope,
    /// Fields the mutator is allowed to change
    #[serde(default)]
    pub target_fields: Vec<FieldPath>,
    /// Discard the config and regenerate from a prompt
    #[serde(default)]
    pub should_regenerate: bool,
    /// Free-form explanation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reasoning: String,
}

impl EditClassification {
    /// Create classification; `structure-major` always regenerates
    #[must_use]
    pub fn new(category: EditCategory, scope: EditScope, target_fields: Vec<FieldPath>) -> Self {
        Self {
            category,
            scope,
            target_fields,
            should_regenerate: category == EditCategory::StructureMajor,
            reasoning: String::new(),
        }
    }

    /// Classification that discards the config
    #[must_use]
    pub fn regenerate(reasoning: impl Into<String>) -> Self {
        Self::new(EditCategory::StructureMajor, EditScope::Wide, Vec::new())
            .with_reasoning(reasoning)
    }

    /// With explanation
    #[inline]
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Restore invariants on a verdict from an external classifier
    ///
    /// `structure-major` and an empty target list both force regeneration.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.category == EditCategory::StructureMajor || self.target_fields.is_empty() {
            self.should_regenerate = true;
        }
        self
    }

    /// Check if the router must hand back a regenerate signal
    #[inline]
    #[must_use]
    pub fn requires_regeneration(&self) -> bool {
        self.should_regenerate || self.category == EditCategory::StructureMajor
    }
}

/// A file attached to an edit or a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAsset {
    /// Original file name
    pub name: String,
    /// Where the upload is stored
    pub url: String,
    /// MIME type, when known
    #[serde(default)]
    pub content_type: Option<String>,
}

impl UploadedAsset {
    /// Create asset
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            content_type: None,
        }
    }

    /// With MIME type
    #[inline]
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Check if the asset is an image, by MIME type or file extension
    #[must_use]
    pub fn is_image(&self) -> bool {
        if let Some(ct) = &self.content_type {
            return ct.starts_with("image/");
        }
        let name = self.name.to_ascii_lowercase();
        [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg", ".avif"]
            .iter()
            .any(|ext| name.ends_with(ext))
    }
}

/// Which way the router took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditPath {
    /// Caller must regenerate the config
    Regenerate,
    /// Logo URL applied without calling the mutator
    LogoFastPath,
    /// External mutator constrained to the target fields
    ScopedMutation,
}

/// Progress events emitted during an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditProgress {
    /// Asking the classifier
    Classifying,
    /// Verdict received
    Classified(EditClassification),
    /// Applying along a path
    Applying(EditPath),
    /// Comparing old and new config
    Verifying,
    /// Finished
    Done {
        /// Whether the caller must regenerate
        should_regenerate: bool,
    },
}

/// Result of routing one edit
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// New config; the input unchanged when regenerating
    pub config: WebsiteConfig,
    /// Caller must discard `config` and regenerate
    pub should_regenerate: bool,
    /// Verdict that drove the routing
    pub classification: EditClassification,
    /// Structural diff between the input and `config`
    pub diff: ConfigDiff,
    /// Paths the mutator changed outside the target fields
    pub out_of_scope: Vec<FieldPath>,
    /// Route taken
    pub path: EditPath,
}

/// What to do with out-of-scope mutations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopePolicy {
    /// Revert them
    #[default]
    Clip,
    /// Keep them and log a warning
    Observe,
}

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Handling of out-of-scope mutations
    pub scope_policy: ScopePolicy,
    /// Try URL extraction before calling the mutator for logo edits
    pub allow_logo_fast_path: bool,
}

impl RouterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With scope policy
    #[inline]
    #[must_use]
    pub fn with_scope_policy(mut self, policy: ScopePolicy) -> Self {
        self.scope_policy = policy;
        self
    }

    /// With logo fast path enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_logo_fast_path(mut self, enabled: bool) -> Self {
        self.allow_logo_fast_path = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            scope_policy: ScopePolicy::Clip,
            allow_logo_fast_path: true,
        }
    }
}

/// Project identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a new unique ID
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Get as string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
