//! Sitegen Compiler
//!
//! Compiles a [`WebsiteConfig`](sitegen_ir::WebsiteConfig) into a complete
//! Next.js + Tailwind source tree, then resolves image placeholders.
//!
//! # Core Concepts
//!
//! - [`ProjectCompiler`]: Orchestrates a compile (always a full rebuild)
//! - [`ThemeResolver`]: Theme → memoized [`ThemeBundle`] of utility classes
//! - [`SectionRegistry`]: Section kinds this compiler renders
//! - [`allocate_names`]: Unique component names per page
//! - [`resolve_images`]: Batch placeholder resolution against an [`ImageResolver`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sitegen_compiler::{ImageCache, PlaceholdImageResolver, ProjectCompiler};
//!
//! let compiler = ProjectCompiler::new();
//! let project = compiler
//!     .compile(&config, &ImageCache::new(), &PlaceholdImageResolver::default())
//!     .await;
//! project.write_to_dir(out_dir)?;
//! ```

#![warn(unreachable_pub)]

// Core modules
mod chrome;
mod compiler;
mod diagnostics;
mod images;
mod naming;
mod options;
mod project;
mod registry;
mod render;
mod scaffold;
mod theme;

pub mod escape;

// Re-exports
pub use chrome::{footer, hero, hero_has_image, navbar, FOOTER_PATH, HERO_PATH, NAVBAR_PATH};
pub use compiler::{normalize_route, ProjectCompiler, RenderedSources};
pub use diagnostics::Diagnostic;
pub use images::{
    find_tokens, resolve_images, ImageCache, ImageError, ImageResolution, ImageResolver,
    ImageStats, ImageStatus, OfflineResolver, PlaceholdImageResolver, Placeholders, TOKEN_PREFIX,
};
pub use naming::{
    allocate_names, base_name, kebab_case, pascal_case, Claim, SectionFiles, SectionSlot,
    RESERVED_NAMES, SECTIONS_DIR,
};
pub use options::{
    CompilerOptions, PackageVersions, DEFAULT_FALLBACK_DESCRIPTION, DEFAULT_IMAGE_CAP,
};
pub use project::{CompileError, CompiledProject, ProjectFile};
pub use registry::{RenderOutcome, SectionRegistry};
pub use render::{RenderContext, RenderEnv};
pub use scaffold::{package_name, scaffold_files};
pub use theme::{resolve_theme, ThemeBundle, ThemeResolver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
