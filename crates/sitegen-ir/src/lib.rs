//! Sitegen IR
//!
//! The structured description of a website that the compiler turns into a
//! source tree and the edit router narrows or replaces.
//!
//! # Core Concepts
//!
//! - [`WebsiteConfig`]: Root of the IR (business, theme, nav, hero, sections, footer, pages)
//! - [`ConfigSection`]: A section entry; either a [`Section`] or an unsupported raw object
//! - [`Theme`]: Palette, background mode and font style
//! - [`FieldPath`]: Dot-path addressing inside a config (`theme.primary`)
//! - [`ConfigDiff`]: Recursive field-path comparison of two configs
//! - [`Fingerprint`]: Blake3 content hash
//!
//! # Example
//!
//! ```rust,ignore
//! use sitegen_ir::{ConfigDiff, WebsiteConfig};
//!
//! let before = WebsiteConfig::from_json(&old_json)?;
//! let after = WebsiteConfig::from_json(&new_json)?;
//!
//! for change in ConfigDiff::between(&before, &after)?.changes() {
//!     println!("{change}");
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod diff;
mod hash;
mod path;
mod section;
mod theme;

// Re-exports
pub use config::{
    Business, ConfigError, Footer, FooterColumn, FooterVariant, Hero, HeroVariant, Nav, NavLink,
    Page, SocialLink, WebsiteConfig, CONFIG_VERSION,
};
pub use diff::{clip_to_scope, ChangeKind, ClippedConfig, ConfigDiff, DiffError, FieldChange};
pub use hash::Fingerprint;
pub use path::{FieldPath, PathError};
pub use section::{
    AboutSection, AboutVariant, BlogPost, BlogPreviewSection, BlogPreviewVariant, ConfigSection,
    ContactSection, ContactVariant, CtaBannerSection, CtaBannerVariant, CtaLink, CustomSection,
    CustomVariant, FaqItem, FaqSection, FaqVariant, Feature, FeatureGridSection,
    FeatureGridVariant, GalleryItem, GallerySection, GalleryVariant, Logo, LogoCloudSection,
    LogoCloudVariant, MenuCategory, MenuItem, MenuSection, MenuVariant, NewsletterSection,
    NewsletterVariant, PricingSection, PricingTier, PricingVariant, ProcessSection, ProcessStep,
    ProcessVariant, Product, ProductGridSection, ProductGridVariant, Section, SectionType, Stat,
    StatsSection, StatsVariant, TeamMember, TeamSection, TeamVariant, Testimonial,
    TestimonialsSection, TestimonialsVariant, UnsupportedSection,
};
pub use theme::{BackgroundMode, FontStyle, PaletteColor, Theme};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
