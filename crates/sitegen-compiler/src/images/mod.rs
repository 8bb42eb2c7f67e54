//! Image placeholder and resolution pipeline
//!
//! # Phases
//!
//! 1. **Minting** (synchronous, while rendering): [`Placeholders`] hands out
//!    `IMG_<n>` tokens up to a per-compile cap and harvests descriptions
//!    from the rendered `<img alt>` text.
//! 2. **Resolution** (async, after every file is rendered):
//!    [`resolve_images`] maps each minted token to a description, deduplicates
//!    descriptions by exact string, reuses [`ImageCache`] hits, asks the
//!    [`ImageResolver`] for the rest with bounded concurrency and
//!    substitutes the URLs.
//!
//! Failures never abort a compile; they are reported as an [`ImageStatus`].

mod placeholder;
mod resolve;

pub use placeholder::{find_tokens, Placeholders, TOKEN_PREFIX};
pub use resolve::{resolve_images, ImageResolution, ImageStats};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sitegen_ir::Fingerprint;
use std::collections::BTreeMap;

/// External image generator
///
/// Called once per distinct, uncached description. Calls may run
/// concurrently.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    /// Produce an asset URL for `description`
    async fn resolve(&self, description: &str) -> Result<String, ImageError>;
}

/// Errors from an [`ImageResolver`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    /// Service cannot be reached or is switched off
    #[error("image service unavailable: {0}")]
    Unavailable(String),

    /// Service refused this description
    #[error("image rejected: {0}")]
    Rejected(String),

    /// Service answered with something that is not a usable URL
    #[error("invalid image response: {0}")]
    InvalidResponse(String),
}

impl ImageError {
    /// Check whether this error means the whole service is down
    #[inline]
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Description → URL cache carried between compiles of one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageCache(BTreeMap<String, String>);

impl ImageCache {
    /// Create empty cache
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a URL by exact description
    #[inline]
    #[must_use]
    pub fn get(&self, description: &str) -> Option<&str> {
        self.0.get(description).map(String::as_str)
    }

    /// Record a resolved URL
    pub fn insert(&mut self, description: impl Into<String>, url: impl Into<String>) {
        self.0.insert(description.into(), url.into());
    }

    /// Check for an exact description
    #[inline]
    #[must_use]
    pub fn contains(&self, description: &str) -> bool {
        self.0.contains_key(description)
    }

    /// Number of cached descriptions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(description, url)` in description order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(d, u)| (d.as_str(), u.as_str()))
    }
}

impl FromIterator<(String, String)> for ImageCache {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outcome of the resolution phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ImageStatus {
    /// No tokens were minted
    NoImages,
    /// Every token was substituted
    Complete,
    /// Some descriptions failed; their tokens remain in the files
    Partial {
        /// Descriptions that could not be resolved
        unresolved: Vec<String>,
    },
    /// The service was unavailable; no token was substituted
    Unavailable {
        /// Error reported by the resolver
        reason: String,
    },
}

impl ImageStatus {
    /// Check whether image output is reduced
    #[inline]
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Partial { .. } | Self::Unavailable { .. })
    }
}

/// Resolver that is always unavailable
///
/// Used for offline compiles; every token stays in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResolver;

#[async_trait]
impl ImageResolver for OfflineResolver {
    async fn resolve(&self, _description: &str) -> Result<String, ImageError> {
        Err(ImageError::Unavailable("offline".to_string()))
    }
}

/// Deterministic stock-photo resolver
///
/// Builds a seeded placeholder-photo URL from the description's hash, so the
/// same description always maps to the same image without any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholdImageResolver {
    base_url: String,
    width: u32,
    height: u32,
}

impl PlaceholdImageResolver {
    /// Default service root
    pub const DEFAULT_BASE_URL: &'static str = "https://picsum.photos";

    /// Create with a service root
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            width: 1200,
            height: 800,
        }
    }

    /// With image dimensions
    #[inline]
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// URL for a description
    #[must_use]
    pub fn url_for(&self, description: &str) -> String {
        let seed = Fingerprint::compute(description.as_bytes()).short();
        format!(
            "{}/seed/{seed}/{}/{}",
            self.base_url, self.width, self.height
        )
    }
}

impl Default for PlaceholdImageResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ImageResolver for PlaceholdImageResolver {
    async fn resolve(&self, description: &str) -> Result<String, ImageError> {
        if description.trim().is_empty() {
            return Err(ImageError::Rejected("empty description".to_string()));
        }
        Ok(self.url_for(description))
    }
}
