//! Settings file
//!
//! ```toml
//! [compiler]
//! image_cap = 6
//! image_concurrency = 4
//!
//! [router]
//! scope_policy = "clip"
//! allow_logo_fast_path = true
//!
//! [cache]
//! max_projects = 1024
//! ttl_secs = 86400
//! ```
//!
//! Every table and key is optional.

use crate::error::SettingsError;
use crate::types::RouterConfig;
use serde::{Deserialize, Serialize};
use sitegen_compiler::CompilerOptions;
use std::path::Path;
use std::time::Duration;

/// Sizing of the per-project image-cache store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Projects kept before the least recently used is evicted
    pub max_projects: u64,
    /// Seconds a project's cache survives without access; 0 keeps it forever
    pub ttl_secs: u64,
}

impl CacheSettings {
    /// Idle expiry, if any
    #[inline]
    #[must_use]
    pub fn time_to_idle(&self) -> Option<Duration> {
        (self.ttl_secs > 0).then(|| Duration::from_secs(self.ttl_secs))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_projects: 1024,
            ttl_secs: 86_400,
        }
    }
}

/// All tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitegenSettings {
    /// Compiler options
    pub compiler: CompilerOptions,
    /// Router configuration
    pub router: RouterConfig,
    /// Image-cache store sizing
    pub cache: CacheSettings,
}

impl SitegenSettings {
    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid settings TOML
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScopePolicy;
    use std::io::Write;

    #[test]
    fn empty_text_gives_defaults() {
        let settings = SitegenSettings::from_toml_str("").unwrap();
        assert_eq!(settings, SitegenSettings::default());
        assert_eq!(settings.compiler.image_cap, 6);
        assert_eq!(settings.cache.time_to_idle(), Some(Duration::from_secs(86_400)));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings = SitegenSettings::from_toml_str(
            r#"
[compiler]
image_cap = 3

[router]
scope_policy = "observe"

[cache]
ttl_secs = 0
"#,
        )
        .unwrap();
        assert_eq!(settings.compiler.image_cap, 3);
        assert_eq!(settings.compiler.image_concurrency, 4);
        assert_eq!(settings.router.scope_policy, ScopePolicy::Observe);
        assert!(settings.router.allow_logo_fast_path);
        assert_eq!(settings.cache.time_to_idle(), None);
        assert_eq!(settings.cache.max_projects, 1024);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[compiler]\nimage_cap = 2").unwrap();
        let settings = SitegenSettings::load(file.path()).unwrap();
        assert_eq!(settings.compiler.image_cap, 2);
    }

    #[test]
    fn bad_types_are_parse_errors() {
        let err = SitegenSettings::from_toml_str("[compiler]\nimage_cap = \"six\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        let missing = SitegenSettings::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(missing, SettingsError::Io { .. }));
    }
}
