//! Compiler configuration
//!
//! Every field has a default, so an empty TOML table is a valid
//! [`CompilerOptions`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Hard cap on placeholder images minted per compile
pub const DEFAULT_IMAGE_CAP: usize = 6;

/// Description used for placeholders whose markup carried none
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "A professional abstract background image";

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CompilerOptions {
    /// Maximum placeholder tokens per compile; later images use a static fallback
    pub image_cap: usize,
    /// Maximum concurrent requests to the image resolver
    pub image_concurrency: usize,
    /// Description for tokens with no harvested description
    pub fallback_image_description: String,
    /// Package versions written to the dependency manifest
    pub packages: PackageVersions,
}

impl CompilerOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With image cap
    #[inline]
    #[must_use]
    pub fn with_image_cap(mut self, cap: usize) -> Self {
        self.image_cap = cap;
        self
    }

    /// With resolver concurrency (at least 1)
    #[inline]
    #[must_use]
    pub fn with_image_concurrency(mut self, concurrency: usize) -> Self {
        self.image_concurrency = concurrency.max(1);
        self
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            image_cap: DEFAULT_IMAGE_CAP,
            image_concurrency: 4,
            fallback_image_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
            packages: PackageVersions::default(),
        }
    }
}

/// Package versions for the generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PackageVersions {
    /// Application framework
    pub next: String,
    /// UI runtime (`react` and `react-dom`)
    pub react: String,
    /// Type checker
    pub typescript: String,
    /// Utility-class styling
    pub tailwindcss: String,
    /// CSS pipeline
    pub postcss: String,
    /// Vendor prefixing
    pub autoprefixer: String,
}

impl PackageVersions {
    /// Runtime dependencies, in manifest order
    #[must_use]
    pub fn dependencies(&self) -> IndexMap<String, String> {
        IndexMap::from([
            ("next".to_string(), self.next.clone()),
            ("react".to_string(), self.react.clone()),
            ("react-dom".to_string(), self.react.clone()),
        ])
    }

    /// Build-time dependencies, in manifest order
    #[must_use]
    pub fn dev_dependencies(&self) -> IndexMap<String, String> {
        IndexMap::from([
            ("@types/node".to_string(), "^20".to_string()),
            ("@types/react".to_string(), "^18".to_string()),
            ("@types/react-dom".to_string(), "^18".to_string()),
            ("autoprefixer".to_string(), self.autoprefixer.clone()),
            ("postcss".to_string(), self.postcss.clone()),
            ("tailwindcss".to_string(), self.tailwindcss.clone()),
            ("typescript".to_string(), self.typescript.clone()),
        ])
    }
}

impl Default for PackageVersions {
    fn default() -> Self {
        Self {
            next: "14.2.5".to_string(),
            react: "^18.3.1".to_string(),
            typescript: "^5".to_string(),
            tailwindcss: "^3.4.1".to_string(),
            postcss: "^8".to_string(),
            autoprefixer: "^10.4.19".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_cap() {
        let options = CompilerOptions::default();
        assert_eq!(options.image_cap, 6);
        assert_eq!(options.image_concurrency, 4);
    }

    #[test]
    fn concurrency_never_zero() {
        assert_eq!(CompilerOptions::new().with_image_concurrency(0).image_concurrency, 1);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let options: CompilerOptions = serde_json::from_str(r#"{"image_cap": 3}"#).unwrap();
        assert_eq!(options.image_cap, 3);
        assert_eq!(options.packages, PackageVersions::default());
    }

    #[test]
    fn dependency_order_is_stable() {
        let deps = PackageVersions::default().dependencies();
        let names: Vec<_> = deps.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["next", "react", "react-dom"]);
    }
}
