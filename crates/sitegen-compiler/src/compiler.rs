//! Project compiler
//!
//! Turns a [`WebsiteConfig`] into a complete source tree. Compilation is
//! total: malformed sections, colliding names and unusable pages become
//! [`Diagnostic`]s, never errors.
//!
//! Emission order is fixed, so identical inputs give identical file lists:
//!
//! 1. scaffold (manifest, build config, layout, styles, loading state)
//! 2. navigation bar and footer
//! 3. hero
//! 4. homepage sections, then each secondary page's new sections
//! 5. homepage entry, then secondary page entries

use crate::chrome::{self, FOOTER_PATH, HERO_PATH, NAVBAR_PATH};
use crate::diagnostics::Diagnostic;
use crate::escape;
use crate::images::{resolve_images, ImageCache, ImageResolver};
use crate::naming::{allocate_names, pascal_case, Claim, SectionFiles, SectionSlot, RESERVED_NAMES};
use crate::options::CompilerOptions;
use crate::project::{CompiledProject, ProjectFile};
use crate::registry::{RenderOutcome, SectionRegistry};
use crate::render::{RenderContext, RenderEnv};
use crate::scaffold::scaffold_files;
use crate::theme::ThemeResolver;
use sitegen_ir::{ConfigSection, Section, WebsiteConfig};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, info_span, warn, Instrument};
use ulid::Ulid;

/// Identifiers every secondary page entry imports besides its sections
const PAGE_ENTRY_NAMES: &[&str] = &["Metadata"];

/// Source tree before image resolution
#[derive(Debug, Clone)]
pub struct RenderedSources {
    /// Files in emission order, placeholders still in place
    pub files: Vec<ProjectFile>,
    /// Config with unrenderable sections removed
    pub config: WebsiteConfig,
    /// Tokens minted for this compile, in minting order
    pub tokens: Vec<String>,
    /// Placeholder token → harvested description
    pub descriptions: BTreeMap<String, String>,
    /// Placeholders minted
    pub minted: usize,
    /// Image requests past the cap, rendered as decorative blocks
    pub fallbacks: usize,
    /// Non-fatal issues
    pub diagnostics: Vec<Diagnostic>,
}

/// A secondary page that survived route checks
#[derive(Debug)]
struct PagePlan<'a> {
    route: String,
    title: &'a str,
    function: String,
    sections: Vec<&'a Section>,
}

/// Compiles website configs into projects
#[derive(Debug)]
pub struct ProjectCompiler {
    registry: SectionRegistry,
    themes: ThemeResolver,
    options: CompilerOptions,
}

impl Default for ProjectCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectCompiler {
    /// Create compiler with every built-in renderer and default options
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(CompilerOptions::default())
    }

    /// Create compiler with `options`
    #[must_use]
    pub fn with_options(options: CompilerOptions) -> Self {
        Self {
            registry: SectionRegistry::with_defaults(),
            themes: ThemeResolver::default(),
            options,
        }
    }

    /// Replace the section registry
    #[must_use]
    pub fn with_registry(mut self, registry: SectionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Active options
    #[inline]
    #[must_use]
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Active section registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Compile `config`, resolving images through `resolver`
    ///
    /// `previous_cache` is the image cache from the last compile of the same
    /// project; descriptions found there are never re-requested.
    pub async fn compile(
        &self,
        config: &WebsiteConfig,
        previous_cache: &ImageCache,
        resolver: &dyn ImageResolver,
    ) -> CompiledProject {
        let span = info_span!(
            "compile",
            compile_id = %Ulid::new(),
            business = %config.business.name
        );

        async move {
            let sources = self.render_sources(config);
            let resolution = resolve_images(
                sources.files,
                &sources.tokens,
                &sources.descriptions,
                previous_cache,
                resolver,
                &self.options,
            )
            .await;

            info!(
                files = resolution.files.len(),
                diagnostics = sources.diagnostics.len(),
                "compile finished"
            );

            CompiledProject {
                files: resolution.files,
                dependencies: self.options.packages.dependencies(),
                dev_dependencies: self.options.packages.dev_dependencies(),
                config: sources.config,
                image_cache: resolution.cache,
                image_status: resolution.status,
                diagnostics: sources.diagnostics,
            }
        }
        .instrument(span)
        .await
    }

    /// Render every file, leaving image placeholders unresolved
    #[must_use]
    pub fn render_sources(&self, config: &WebsiteConfig) -> RenderedSources {
        let mut ctx = RenderContext::new(self.options.image_cap);
        let mut diagnostics = Vec::new();
        let config = self.filter_sections(config, &mut diagnostics);

        let theme = self.themes.resolve(&config.theme);
        let env = RenderEnv {
            theme: &theme,
            business: &config.business,
        };

        let mut files = scaffold_files(&config.business, &theme, &self.options.packages);
        files.push(ProjectFile::new(NAVBAR_PATH, chrome::navbar(&config.nav, &env)));
        files.push(ProjectFile::new(FOOTER_PATH, chrome::footer(&config.footer, &env)));

        let hero = chrome::hero(&config.hero, &env, &mut ctx);
        ctx.harvest(&hero);
        files.push(ProjectFile::new(HERO_PATH, hero));

        let mut ledger = SectionFiles::new();

        let home_sections = supported(&config.sections);
        let home_slots = allocate_names(home_sections.iter().copied(), RESERVED_NAMES);
        let home_imports = self.emit_sections(
            "/",
            &home_sections,
            home_slots,
            &env,
            &mut ctx,
            &mut ledger,
            &mut files,
            &mut diagnostics,
        );

        let plans = plan_pages(&config, &mut diagnostics);
        let mut page_imports = Vec::with_capacity(plans.len());
        for plan in &plans {
            let mut reserved: Vec<&str> = RESERVED_NAMES.to_vec();
            reserved.extend_from_slice(PAGE_ENTRY_NAMES);
            reserved.push(plan.function.as_str());
            let slots = allocate_names(plan.sections.iter().copied(), &reserved);
            let imports = self.emit_sections(
                &format!("/{}", plan.route),
                &plan.sections,
                slots,
                &env,
                &mut ctx,
                &mut ledger,
                &mut files,
                &mut diagnostics,
            );
            page_imports.push(imports);
        }

        files.push(ProjectFile::new("app/page.tsx", home_entry(&home_imports)));
        for (plan, imports) in plans.iter().zip(&page_imports) {
            files.push(ProjectFile::new(
                format!("app/{}/page.tsx", plan.route),
                page_entry(plan, imports, &config.business.name, &env),
            ));
        }

        let placeholders = ctx.into_placeholders();
        debug!(
            files = files.len(),
            minted = placeholders.minted(),
            fallbacks = placeholders.fallbacks(),
            "sources rendered"
        );

        RenderedSources {
            files,
            tokens: placeholders.tokens(),
            minted: placeholders.minted(),
            fallbacks: placeholders.fallbacks(),
            descriptions: placeholders.into_descriptions(),
            config,
            diagnostics,
        }
    }

    /// Drop sections this compiler cannot render, recording why
    fn filter_sections(
        &self,
        config: &WebsiteConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> WebsiteConfig {
        let (mut filtered, removed) = config.retain_supported();
        for (route, entry) in removed {
            let reason = match &entry {
                ConfigSection::Unsupported(u) => u.reason.clone(),
                ConfigSection::Supported(_) => "not renderable".to_string(),
            };
            unsupported(&display_route(&route), &entry, reason, diagnostics);
        }

        let registry = &self.registry;
        let mut keep = |route: &str, list: &mut Vec<ConfigSection>| {
            list.retain(|entry| {
                if registry.supports(entry) {
                    return true;
                }
                let reason = format!("no renderer registered for '{}'", entry.type_tag());
                unsupported(route, entry, reason, diagnostics);
                false
            });
        };
        keep("/", &mut filtered.sections);
        for page in &mut filtered.pages {
            keep(&display_route(&page.path), &mut page.sections);
        }
        filtered
    }

    /// Render and emit one page's sections, returning the slots it imports
    #[allow(clippy::too_many_arguments)]
    fn emit_sections<'a>(
        &self,
        route: &str,
        sections: &[&'a Section],
        slots: Vec<SectionSlot>,
        env: &RenderEnv<'_>,
        ctx: &mut RenderContext,
        ledger: &mut SectionFiles<'a>,
        files: &mut Vec<ProjectFile>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<SectionSlot> {
        let mut imports = Vec::with_capacity(slots.len());
        for slot in slots {
            let section = sections[slot.index];
            let path = slot.path();
            match ledger.claim(&path, section, route) {
                Claim::New => {
                    let outcome =
                        self.registry
                            .render(section, &slot.name, &slot.anchor(), env, ctx);
                    match outcome {
                        RenderOutcome::Rendered(source) => {
                            ctx.harvest(&source);
                            debug!(path = %path, route, "section emitted");
                            files.push(ProjectFile::new(path, source));
                        }
                        RenderOutcome::Unsupported => {
                            warn!(path = %path, route, "section lost its renderer");
                            continue;
                        }
                    }
                }
                Claim::Reused => {
                    debug!(path = %path, route, "section file reused");
                }
                Claim::Conflict { first_route } => {
                    warn!(path = %path, route, first_route = %first_route, "section name collision");
                    diagnostics.push(Diagnostic::NamingCollision {
                        path,
                        first_route,
                        later_route: route.to_string(),
                    });
                }
            }
            imports.push(slot);
        }
        imports
    }
}

fn unsupported(route: &str, entry: &ConfigSection, reason: String, out: &mut Vec<Diagnostic>) {
    warn!(route, type_tag = entry.type_tag(), reason = %reason, "dropping section");
    out.push(Diagnostic::UnsupportedSection {
        route: route.to_string(),
        type_tag: entry.type_tag().to_string(),
        reason,
    });
}

/// Route as reported in diagnostics: `/` or `/about-us`
fn display_route(path: &str) -> String {
    normalize_route(path).map_or_else(|| path.to_string(), |route| format!("/{route}"))
}

fn supported(list: &[ConfigSection]) -> Vec<&Section> {
    list.iter().filter_map(ConfigSection::as_section).collect()
}

/// `/About Us/` → `about-us`; `services/web` stays nested
///
/// Returns `None` when nothing usable is left.
#[must_use]
pub fn normalize_route(path: &str) -> Option<String> {
    let segments: Vec<String> = path
        .split('/')
        .map(|segment| {
            let mut slug = String::new();
            for c in segment.trim().chars() {
                if c.is_ascii_alphanumeric() {
                    slug.push(c.to_ascii_lowercase());
                } else if matches!(c, '-' | '_' | ' ') && !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            slug.trim_end_matches('-').to_string()
        })
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

fn plan_pages<'a>(config: &'a WebsiteConfig, diagnostics: &mut Vec<Diagnostic>) -> Vec<PagePlan<'a>> {
    let mut seen = HashSet::new();
    let mut plans = Vec::with_capacity(config.pages.len());

    for page in &config.pages {
        let Some(route) = normalize_route(&page.path) else {
            skip(&page.path, "route is empty or the homepage", diagnostics);
            continue;
        };
        if !seen.insert(route.clone()) {
            skip(&page.path, &format!("duplicate route '/{route}'"), diagnostics);
            continue;
        }

        let mut function = pascal_case(&route);
        if function.starts_with(|c: char| c.is_ascii_digit()) {
            function.insert_str(0, "Page");
        }
        function.push_str("Page");

        plans.push(PagePlan {
            route,
            title: &page.title,
            function,
            sections: supported(&page.sections),
        });
    }
    plans
}

fn skip(path: &str, reason: &str, diagnostics: &mut Vec<Diagnostic>) {
    warn!(path, reason, "page skipped");
    diagnostics.push(Diagnostic::PageSkipped {
        path: path.to_string(),
        reason: reason.to_string(),
    });
}

fn import_lines(slots: &[SectionSlot]) -> String {
    slots
        .iter()
        .map(|slot| format!("import {} from \"{}\";\n", slot.name, slot.import_path()))
        .collect()
}

fn usage_lines(slots: &[SectionSlot]) -> String {
    slots
        .iter()
        .map(|slot| format!("      <{} />\n", slot.name))
        .collect()
}

fn home_entry(slots: &[SectionSlot]) -> String {
    format!(
        r#"import Hero from "@/components/Hero";
{imports}
export default function Home() {{
  return (
    <main>
      <Hero />
{usages}    </main>
  );
}}
"#,
        imports = import_lines(slots),
        usages = usage_lines(slots),
    )
}

fn page_entry(plan: &PagePlan<'_>, slots: &[SectionSlot], business: &str, env: &RenderEnv<'_>) -> String {
    let title = if plan.title.trim().is_empty() {
        business.to_string()
    } else {
        format!("{} | {business}", plan.title.trim())
    };
    let body = if slots.is_empty() {
        format!(
            "      <section className=\"py-24\">\n        <h1 className=\"mx-auto max-w-7xl px-6 {} text-4xl font-bold {}\">{}</h1>\n      </section>\n",
            env.theme.heading_font,
            env.theme.heading,
            escape::jsx_text(plan.title),
        )
    } else {
        usage_lines(slots)
    };

    format!(
        r#"import type {{ Metadata }} from "next";
{imports}
export const metadata: Metadata = {{
  title: {title},
}};

export default function {function}() {{
  return (
    <main className="pt-16">
{body}    </main>
  );
}}
"#,
        imports = import_lines(slots),
        title = escape::js_string(&title),
        function = plan.function,
    )
}
