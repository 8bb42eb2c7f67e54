//! Testing utilities for the Sitegen workspace
//!
//! Shared fixtures, image resolvers with predictable behaviour, and
//! scripted collaborators.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use sitegen_compiler::{ImageError, ImageResolver};
use sitegen_core::{
    CollaboratorError, EditClassification, IrGenerator, ScopedMutator, UploadedAsset,
};
use sitegen_ir::{Fingerprint, WebsiteConfig};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn restaurant_json() -> Value {
    json!({
        "version": 1,
        "business": {
            "name": "Harbor Grill",
            "tagline": "Fresh from the dock",
            "description": "Seafood grill on the old harbor since 1998.",
            "email": "hello@harborgrill.test",
            "phone": "+1 555 0100",
            "address": "1 Pier Road, Port Town",
            "hours": "Tue-Sun 12:00-22:00"
        },
        "theme": {
            "primary": "teal",
            "secondary": "sky",
            "accent": "amber",
            "mode": "light",
            "fontStyle": "classic"
        },
        "nav": {
            "links": [
                {"label": "Menu", "href": "#menu"},
                {"label": "Gallery", "href": "#gallery"},
                {"label": "About", "href": "/about"}
            ],
            "cta": {"text": "Book a table", "href": "#contact"}
        },
        "hero": {
            "variant": "split",
            "headline": "Fresh fish, open fire",
            "subheadline": "Daily catch grilled over oak.",
            "cta": {"text": "Book a table", "href": "#contact"},
            "secondaryCta": {"text": "See the menu", "href": "#menu"},
            "imageDescription": "Grilled sea bass on a wooden board by the harbor"
        },
        "sections": [
            {
                "type": "menu",
                "variant": "tabbed",
                "title": "Menu",
                "categories": [
                    {"name": "Starters", "items": [
                        {"name": "Oysters", "price": "$18", "description": "Half dozen, lemon"},
                        {"name": "Crab cakes", "price": "$14"}
                    ]},
                    {"name": "Mains", "items": [
                        {"name": "Sea bass", "price": "$29", "imageDescription": "Whole grilled sea bass with herbs"}
                    ]}
                ]
            },
            {
                "type": "gallery",
                "title": "Gallery",
                "items": [
                    {"imageDescription": "Dining room at sunset"},
                    {"imageDescription": "Chef plating a dish"}
                ]
            },
            {
                "type": "testimonials",
                "title": "Guests say",
                "testimonials": [
                    {"quote": "Best fish on the coast.", "author": "Dana R.", "rating": 5}
                ]
            },
            {
                "type": "contact",
                "variant": "split",
                "title": "Visit us"
            }
        ],
        "footer": {
            "variant": "columns",
            "columns": [
                {"title": "Visit", "links": [{"label": "Directions", "href": "/about"}]}
            ],
            "socialLinks": [{"platform": "instagram", "url": "https://instagram.com/harborgrill"}]
        },
        "pages": [
            {
                "path": "/about",
                "title": "About",
                "sections": [
                    {"type": "about", "title": "Our story", "body": "Three generations of fishermen."},
                    {"type": "team", "title": "The crew", "members": [
                        {"name": "Ana", "role": "Head chef", "imageDescription": "Portrait of a smiling chef"}
                    ]}
                ]
            }
        ]
    })
}

/// Restaurant site with a menu, gallery and an about page
pub fn restaurant() -> WebsiteConfig {
    WebsiteConfig::from_value(restaurant_json()).unwrap()
}

pub fn saas_json() -> Value {
    json!({
        "business": {
            "name": "TaskPilot",
            "tagline": "Projects that run themselves",
            "description": "Project management for small teams."
        },
        "theme": {
            "primary": "indigo",
            "secondary": "violet",
            "accent": "emerald",
            "mode": "dark",
            "fontStyle": "modern"
        },
        "nav": {"links": [{"label": "Pricing", "href": "#pricing"}]},
        "hero": {
            "variant": "gradient",
            "headline": "Ship projects, not status reports",
            "cta": {"text": "Start free", "href": "#pricing"}
        },
        "sections": [
            {"type": "logo-cloud", "variant": "marquee", "logos": [{"name": "Acme"}, {"name": "Globex"}]},
            {"type": "feature-grid", "title": "Why TaskPilot", "features": [
                {"title": "Boards", "description": "Kanban that scales"},
                {"title": "Reports", "description": "Automatic weekly summaries"}
            ]},
            {"type": "pricing", "title": "Pricing", "tiers": [
                {"name": "Free", "price": "$0", "features": ["3 projects"]},
                {"name": "Team", "price": "$12", "period": "/user/mo", "features": ["Unlimited"], "highlighted": true}
            ]},
            {"type": "faq", "title": "FAQ", "items": [{"question": "Trial?", "answer": "14 days."}]},
            {"type": "newsletter", "title": "Product updates"}
        ]
    })
}

/// Software landing page with no images
pub fn saas() -> WebsiteConfig {
    WebsiteConfig::from_value(saas_json()).unwrap()
}

/// Config from the given homepage sections and pages, with a text-only hero
pub fn with_sections(sections: Value, pages: Value) -> WebsiteConfig {
    WebsiteConfig::from_value(json!({
        "business": {"name": "Fixture Co"},
        "hero": {
            "variant": "centered",
            "headline": "Hello",
            "cta": {"text": "Go", "href": "#"}
        },
        "sections": sections,
        "pages": pages
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Image resolvers
// ---------------------------------------------------------------------------

/// URL a [`DeterministicResolver`] returns for `description`
pub fn fixture_url(description: &str) -> String {
    format!(
        "https://images.test/{}.jpg",
        Fingerprint::compute(description.as_bytes()).short()
    )
}

/// Always succeeds with [`fixture_url`]
#[derive(Debug, Default)]
pub struct DeterministicResolver;

#[async_trait]
impl ImageResolver for DeterministicResolver {
    async fn resolve(&self, description: &str) -> Result<String, ImageError> {
        Ok(fixture_url(description))
    }
}

/// Succeeds like [`DeterministicResolver`], recording every request
#[derive(Debug, Default)]
pub struct RecordingResolver {
    calls: Mutex<Vec<String>>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptions requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

#[async_trait]
impl ImageResolver for RecordingResolver {
    async fn resolve(&self, description: &str) -> Result<String, ImageError> {
        self.calls.lock().push(description.to_string());
        Ok(fixture_url(description))
    }
}

/// Rejects the listed descriptions, resolves everything else
#[derive(Debug, Default)]
pub struct FailingResolver {
    failing: HashSet<String>,
}

impl FailingResolver {
    pub fn new<I, S>(failing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: failing.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ImageResolver for FailingResolver {
    async fn resolve(&self, description: &str) -> Result<String, ImageError> {
        if self.failing.contains(description) {
            Err(ImageError::Rejected(format!("refused: {description}")))
        } else {
            Ok(fixture_url(description))
        }
    }
}

/// Service that is down
#[derive(Debug, Default)]
pub struct UnavailableResolver;

#[async_trait]
impl ImageResolver for UnavailableResolver {
    async fn resolve(&self, _description: &str) -> Result<String, ImageError> {
        Err(ImageError::Unavailable("connection refused".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Scripted collaborators
// ---------------------------------------------------------------------------

/// Generator that hands out queued configs, repeating the last one
#[derive(Debug)]
pub struct ScriptedGenerator {
    queue: Mutex<VecDeque<WebsiteConfig>>,
    last: Mutex<Option<WebsiteConfig>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<I>(configs: I) -> Self
    where
        I: IntoIterator<Item = WebsiteConfig>,
    {
        Self {
            queue: Mutex::new(configs.into_iter().collect()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl IrGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _images: &[UploadedAsset],
    ) -> Result<WebsiteConfig, CollaboratorError> {
        self.prompts.lock().push(prompt.to_string());
        let next = self.queue.lock().pop_front();
        let mut last = self.last.lock();
        if let Some(config) = next {
            *last = Some(config);
        }
        last.clone()
            .ok_or_else(|| CollaboratorError::Unavailable("script exhausted".to_string()))
    }
}

type Edit = dyn Fn(&mut WebsiteConfig) + Send + Sync;

/// Mutator that applies a fixed closure and counts calls
pub struct ScriptedMutator {
    edit: Box<Edit>,
    calls: AtomicUsize,
}

impl std::fmt::Debug for ScriptedMutator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedMutator")
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

impl ScriptedMutator {
    pub fn new(edit: impl Fn(&mut WebsiteConfig) + Send + Sync + 'static) -> Self {
        Self {
            edit: Box::new(edit),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mutator that returns the config unchanged
    pub fn identity() -> Self {
        Self::new(|_| {})
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScopedMutator for ScriptedMutator {
    async fn mutate(
        &self,
        config: &WebsiteConfig,
        _edit_text: &str,
        _classification: &EditClassification,
    ) -> Result<WebsiteConfig, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut next = config.clone();
        (self.edit)(&mut next);
        Ok(next)
    }
}
