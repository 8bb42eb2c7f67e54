//! Error types for Sitegen Core
//!
//! Provides error handling for:
//! - External collaborator failures (generator, classifier, mutator, validator)
//! - Structural diff and scope clipping failures
//! - Settings loading

use sitegen_ir::DiffError;

/// Failure reported by an external collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// Service could not be reached
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// Service answered with something unusable
    #[error("invalid collaborator output: {0}")]
    InvalidOutput(String),

    /// Service refused the request
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Service did not answer in time
    #[error("collaborator timed out after {secs}s")]
    Timeout {
        /// Elapsed seconds
        secs: u64,
    },
}

impl CollaboratorError {
    /// Check if the same request may succeed later
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}

/// Main edit error type
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// A collaborator failed
    #[error("collaborator failed: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// Configs could not be compared or clipped
    #[error("structural diff failed: {0}")]
    Diff(#[from] DiffError),

    /// Edit text was empty
    #[error("edit text is empty")]
    EmptyEdit,
}

impl EditError {
    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Collaborator(e) => e.is_retryable(),
            Self::Diff(_) | Self::EmptyEdit => false,
        }
    }
}

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("cannot read settings from {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings are not valid TOML for this schema
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_error_display() {
        let err = EditError::from(CollaboratorError::Rejected("quota".to_string()));
        assert!(err.to_string().contains("collaborator failed"));
        assert!(err.to_string().contains("quota"));
    }

    #[test]
    fn edit_error_is_retryable() {
        assert!(EditError::from(CollaboratorError::Timeout { secs: 30 }).is_retryable());
        assert!(EditError::from(CollaboratorError::Unavailable("down".into())).is_retryable());
        assert!(!EditError::from(CollaboratorError::InvalidOutput("junk".into())).is_retryable());
        assert!(!EditError::EmptyEdit.is_retryable());
    }
}
