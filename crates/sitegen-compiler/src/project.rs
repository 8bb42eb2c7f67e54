//! Compiled project output

use crate::diagnostics::Diagnostic;
use crate::images::{ImageCache, ImageStatus};
use indexmap::IndexMap;
use serde::Serialize;
use sitegen_ir::{Fingerprint, WebsiteConfig};
use std::path::{Component, Path};

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    /// Project-relative path with `/` separators
    pub path: String,
    /// File content
    pub content: String,
}

impl ProjectFile {
    /// Create file
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Result of compiling one [`WebsiteConfig`]
///
/// Always rebuilt from the IR, never patched.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledProject {
    /// Files in emission order
    pub files: Vec<ProjectFile>,
    /// Runtime dependencies (package → version range)
    pub dependencies: IndexMap<String, String>,
    /// Build-time dependencies
    pub dev_dependencies: IndexMap<String, String>,
    /// Config the project was compiled from, unsupported sections removed
    pub config: WebsiteConfig,
    /// Image cache to hand to the next compile of this project
    pub image_cache: ImageCache,
    /// Outcome of image resolution
    pub image_status: ImageStatus,
    /// Non-fatal issues found while compiling
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledProject {
    /// Look up a file by path
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// All file paths, in emission order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Check whether image output is reduced
    #[inline]
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.image_status.is_degraded()
    }

    /// Hash of every path and content, in emission order
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_entries(
            self.files
                .iter()
                .map(|f| (f.path.as_str(), f.content.as_str())),
        )
    }

    /// Write every file below `root`, creating directories
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    /// Returns error if a path escapes `root` or a write fails
    pub fn write_to_dir(&self, root: &Path) -> Result<usize, CompileError> {
        for file in &self.files {
            let relative = Path::new(&file.path);
            let safe = relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
            if !safe {
                return Err(CompileError::UnsafePath(file.path.clone()));
            }

            let target = root.join(relative);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|source| CompileError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
            std::fs::write(&target, &file.content).map_err(|source| CompileError::Io {
                path: target.display().to_string(),
                source,
            })?;
        }
        Ok(self.files.len())
    }
}

/// Errors outside the (total) compile itself
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// File path is absolute or climbs out of the output root
    #[error("refusing to write outside the output directory: {0}")]
    UnsafePath(String),

    /// Filesystem failure
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being written
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
