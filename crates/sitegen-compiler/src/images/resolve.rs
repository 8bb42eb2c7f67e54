//! Batch resolution of minted placeholders

use super::placeholder::{find_tokens, SRC_RE};
use super::{ImageCache, ImageError, ImageResolver, ImageStatus};
use crate::options::CompilerOptions;
use crate::project::ProjectFile;
use futures::stream::{self, StreamExt};
use regex::Captures;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Counters from one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageStats {
    /// Distinct tokens found in the file set
    pub tokens: usize,
    /// Distinct descriptions behind those tokens
    pub descriptions: usize,
    /// Descriptions answered from the carried-forward cache
    pub cache_hits: usize,
    /// Descriptions sent to the resolver
    pub requested: usize,
    /// Requests that failed
    pub failed: usize,
}

/// Files after substitution, with the cache for the next compile
#[derive(Debug, Clone)]
pub struct ImageResolution {
    /// File set with resolved tokens replaced
    pub files: Vec<ProjectFile>,
    /// Cache to carry into the next compile
    pub cache: ImageCache,
    /// What happened
    pub status: ImageStatus,
    /// Counters
    pub stats: ImageStats,
}

/// Resolve the minted placeholder tokens in `files`
///
/// Only `src` attributes naming one of `minted` are touched; any other
/// `IMG_<n>` text is left as written. `descriptions` maps tokens to
/// harvested descriptions; tokens without one use the configured fallback.
/// Distinct descriptions are resolved at most once, cache hits not at all.
///
/// - If every request fails with [`ImageError::Unavailable`], the files and
///   cache come back untouched.
/// - Otherwise successes are substituted and cached; tokens of failed
///   descriptions stay in the output.
pub async fn resolve_images(
    files: Vec<ProjectFile>,
    minted: &[String],
    descriptions: &BTreeMap<String, String>,
    previous: &ImageCache,
    resolver: &dyn ImageResolver,
    options: &CompilerOptions,
) -> ImageResolution {
    let mut tokens: Vec<String> = Vec::new();
    for file in &files {
        for token in find_tokens(&file.content) {
            if minted.contains(&token) && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }

    let mut stats = ImageStats {
        tokens: tokens.len(),
        ..ImageStats::default()
    };

    if tokens.is_empty() {
        return ImageResolution {
            files,
            cache: previous.clone(),
            status: ImageStatus::NoImages,
            stats,
        };
    }

    let token_descriptions: Vec<(String, String)> = tokens
        .into_iter()
        .map(|token| {
            let description = descriptions
                .get(&token)
                .cloned()
                .unwrap_or_else(|| options.fallback_image_description.clone());
            (token, description)
        })
        .collect();

    // Exact-string dedup, first-appearance order
    let mut distinct: Vec<&str> = Vec::new();
    for (_, description) in &token_descriptions {
        if !distinct.contains(&description.as_str()) {
            distinct.push(description);
        }
    }
    stats.descriptions = distinct.len();

    let misses: Vec<String> = distinct
        .iter()
        .filter(|d| !previous.contains(d))
        .map(|d| (*d).to_string())
        .collect();
    stats.cache_hits = distinct.len() - misses.len();
    stats.requested = misses.len();

    let results: Vec<(String, Result<String, ImageError>)> = stream::iter(misses)
        .map(|description| async move {
            let result = resolver.resolve(&description).await;
            (description, result)
        })
        .buffered(options.image_concurrency.max(1))
        .collect()
        .await;

    let all_unavailable =
        !results.is_empty() && results.iter().all(|(_, r)| matches!(r, Err(e) if e.is_unavailable()));
    if all_unavailable {
        let reason = results
            .iter()
            .find_map(|(_, r)| r.as_ref().err())
            .map_or_else(String::new, ToString::to_string);
        warn!(%reason, requested = stats.requested, "image service unavailable, keeping placeholders");
        stats.failed = stats.requested;
        return ImageResolution {
            files,
            cache: previous.clone(),
            status: ImageStatus::Unavailable { reason },
            stats,
        };
    }

    let mut cache = previous.clone();
    let mut unresolved = Vec::new();
    for (description, result) in results {
        match result {
            Ok(url) => {
                debug!(%description, %url, "image resolved");
                cache.insert(description, url);
            }
            Err(e) => {
                warn!(%description, error = %e, "image resolution failed");
                unresolved.push(description);
            }
        }
    }
    stats.failed = unresolved.len();

    let urls: HashMap<&str, &str> = token_descriptions
        .iter()
        .filter_map(|(token, description)| {
            cache.get(description).map(|url| (token.as_str(), url))
        })
        .collect();

    let files = files
        .into_iter()
        .map(|file| substitute(file, &urls))
        .collect();

    info!(
        tokens = stats.tokens,
        descriptions = stats.descriptions,
        cache_hits = stats.cache_hits,
        requested = stats.requested,
        failed = stats.failed,
        "images resolved"
    );

    let status = if unresolved.is_empty() {
        ImageStatus::Complete
    } else {
        ImageStatus::Partial { unresolved }
    };

    ImageResolution {
        files,
        cache,
        status,
        stats,
    }
}

fn substitute(file: ProjectFile, urls: &HashMap<&str, &str>) -> ProjectFile {
    let replaced = SRC_RE.replace_all(&file.content, |caps: &Captures<'_>| {
        urls.get(&caps[1])
            .map_or_else(|| caps[0].to_string(), |url| format!(r#"src="{url}""#))
    });
    match replaced {
        Cow::Borrowed(_) => file,
        Cow::Owned(content) => ProjectFile {
            path: file.path,
            content,
        },
    }
}
