//! Section renderers
//!
//! Each submodule renders one section kind as a self-contained TSX
//! component, switching layout on the section's variant. Renderers are pure
//! apart from image requests, which go through the compile-scoped
//! [`RenderContext`].
//!
//! All user text passes through [`crate::escape`] before it is spliced in.

mod about;
mod blog_preview;
mod contact;
mod cta_banner;
mod custom;
mod faq;
mod feature_grid;
mod gallery;
mod logo_cloud;
mod menu;
mod newsletter;
mod pricing;
mod process;
mod product_grid;
mod stats;
mod team;
mod testimonials;

use crate::escape;
use crate::images::Placeholders;
use crate::theme::ThemeBundle;
use sitegen_ir::{Business, CtaLink, Section};

/// Read-only inputs shared by every renderer in a compile
#[derive(Debug, Clone, Copy)]
pub struct RenderEnv<'a> {
    /// Resolved theme
    pub theme: &'a ThemeBundle,
    /// Business details (contact fallbacks, alt text)
    pub business: &'a Business,
}

/// Compile-scoped mutable render state
///
/// Owns the placeholder counter; one per compile.
#[derive(Debug, Clone)]
pub struct RenderContext {
    placeholders: Placeholders,
}

impl RenderContext {
    /// Create for one compile
    #[inline]
    #[must_use]
    pub fn new(image_cap: usize) -> Self {
        Self {
            placeholders: Placeholders::new(image_cap),
        }
    }

    /// Image markup for `description`
    ///
    /// Mints a placeholder `<img>` while under the cap, otherwise renders a
    /// decorative block that needs no asset.
    pub fn image(&mut self, description: &str, class: &str, theme: &ThemeBundle) -> String {
        let alt = escape::attr(description);
        match self.placeholders.mint() {
            Some(token) => format!(
                r#"<img src="{token}" alt="{alt}" className="{class} object-cover" loading="lazy" />"#
            ),
            None => format!(
                r#"<div className="{class} {}" role="img" aria-label="{alt}" />"#,
                theme.image_fallback
            ),
        }
    }

    /// Harvest image descriptions from rendered source
    #[inline]
    pub fn harvest(&mut self, source: &str) {
        self.placeholders.harvest(source);
    }

    /// Placeholder state
    #[inline]
    #[must_use]
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Consume into placeholder state
    #[inline]
    #[must_use]
    pub fn into_placeholders(self) -> Placeholders {
        self.placeholders
    }
}

/// Render a supported section as a component named `name`
pub(crate) fn render_section(
    section: &Section,
    name: &str,
    anchor: &str,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let target = Target { name, anchor };
    match section {
        Section::FeatureGrid(s) => feature_grid::render(s, &target, env, ctx),
        Section::Menu(s) => menu::render(s, &target, env, ctx),
        Section::ProductGrid(s) => product_grid::render(s, &target, env, ctx),
        Section::Testimonials(s) => testimonials::render(s, &target, env),
        Section::Pricing(s) => pricing::render(s, &target, env),
        Section::Gallery(s) => gallery::render(s, &target, env, ctx),
        Section::Stats(s) => stats::render(s, &target, env),
        Section::CtaBanner(s) => cta_banner::render(s, &target, env),
        Section::Team(s) => team::render(s, &target, env, ctx),
        Section::BlogPreview(s) => blog_preview::render(s, &target, env, ctx),
        Section::Contact(s) => contact::render(s, &target, env),
        Section::Faq(s) => faq::render(s, &target, env),
        Section::About(s) => about::render(s, &target, env, ctx),
        Section::LogoCloud(s) => logo_cloud::render(s, &target, env),
        Section::Newsletter(s) => newsletter::render(s, &target, env),
        Section::Process(s) => process::render(s, &target, env),
        Section::Custom(s) => custom::render(s),
    }
}

/// Component identity a renderer writes
#[derive(Debug, Clone, Copy)]
pub(crate) struct Target<'a> {
    pub(crate) name: &'a str,
    pub(crate) anchor: &'a str,
}

/// Wrap a section body in its default-exported component
pub(crate) fn component(target: &Target<'_>, background: &str, body: &str) -> String {
    format!(
        r#"export default function {name}() {{
  return (
    <section id="{anchor}" className="py-20 sm:py-24 {background}">
      <div className="mx-auto max-w-7xl px-6 lg:px-8">
{body}
      </div>
    </section>
  );
}}
"#,
        name = target.name,
        anchor = target.anchor,
        body = indent(body, 8),
    )
}

/// Centered section title with optional subtitle
pub(crate) fn heading(title: &str, subtitle: Option<&str>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let mut out = format!(
        r#"<div className="mx-auto max-w-2xl text-center mb-12">
  <h2 className="{font} text-3xl font-bold tracking-tight sm:text-4xl {color}">{title}</h2>"#,
        font = theme.heading_font,
        color = theme.heading,
        title = escape::jsx_text(title),
    );
    if let Some(subtitle) = subtitle.filter(|s| !s.trim().is_empty()) {
        out.push_str(&format!(
            "\n  <p className=\"mt-4 text-lg {}\">{}</p>",
            theme.muted,
            escape::jsx_text(subtitle)
        ));
    }
    out.push_str("\n</div>");
    out
}

/// Link styled as a button
pub(crate) fn button(link: &CtaLink, class: &str) -> String {
    format!(
        r#"<a href="{}" className="{class}">{}</a>"#,
        escape::href(&link.href),
        escape::jsx_text(&link.text)
    )
}

/// Paragraph, omitted when the text is empty
pub(crate) fn paragraph(text: Option<&str>, class: &str) -> String {
    match text.filter(|t| !t.trim().is_empty()) {
        Some(text) => format!(r#"<p className="{class}">{}</p>"#, escape::jsx_text(text)),
        None => String::new(),
    }
}

/// Join rendered children, dropping empty ones
pub(crate) fn join<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap children in an element, indenting them
pub(crate) fn wrap(open: &str, children: &str, close: &str) -> String {
    if children.is_empty() {
        return format!("{open}{close}");
    }
    format!("{open}\n{}\n{close}", indent(children, 2))
}

/// Indent every non-empty line by `spaces`
pub(crate) fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::theme::resolve_theme;
    use sitegen_ir::Theme;

    pub(crate) fn bundle() -> ThemeBundle {
        resolve_theme(&Theme::default())
    }

    pub(crate) fn business() -> Business {
        Business {
            name: "Harbor Grill".to_string(),
            email: Some("hello@harbor.test".to_string()),
            phone: Some("+1 555 0100".to_string()),
            ..Business::default()
        }
    }

    /// Render `section` with a fresh context, returning source and context
    pub(crate) fn render(value: serde_json::Value) -> (String, RenderContext) {
        let section: Section = serde_json::from_value(value).unwrap();
        let theme = bundle();
        let business = business();
        let env = RenderEnv {
            theme: &theme,
            business: &business,
        };
        let mut ctx = RenderContext::new(6);
        let source = render_section(&section, "Widget", "widget", &env, &mut ctx);
        (source, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn image_mints_then_falls_back() {
        let theme = bundle();
        let mut ctx = RenderContext::new(1);
        let first = ctx.image("A \"sunny\" patio", "h-64 w-full", &theme);
        let second = ctx.image("Another", "h-64 w-full", &theme);

        assert!(first.starts_with(r#"<img src="IMG_1" alt="A &quot;sunny&quot; patio""#));
        assert!(second.starts_with("<div"));
        assert!(!second.contains("IMG_"));
        assert!(second.contains(r#"aria-label="Another""#));
    }

    #[test]
    fn component_wraps_with_name_and_anchor() {
        let out = component(
            &Target {
                name: "Faq2",
                anchor: "faq2",
            },
            "bg-white",
            "<p>x</p>",
        );
        assert!(out.starts_with("export default function Faq2() {"));
        assert!(out.contains(r#"<section id="faq2""#));
        assert!(out.contains("        <p>x</p>"));
    }

    #[test]
    fn heading_escapes_and_skips_blank_subtitle() {
        let theme = bundle();
        let business = business();
        let env = RenderEnv {
            theme: &theme,
            business: &business,
        };
        let out = heading("Q&A {today}", Some("  "), &env);
        assert!(out.contains("Q&amp;A &#123;today&#125;"));
        assert!(!out.contains("<p"));
    }

    #[test]
    fn every_kind_renders_as_default_export() {
        let samples = [
            json!({"type": "feature-grid", "title": "Why", "features": [{"title": "Fast", "description": "Very"}]}),
            json!({"type": "menu", "title": "Menu", "categories": [{"name": "Mains", "items": [{"name": "Fish", "price": "$12"}]}]}),
            json!({"type": "product-grid", "title": "Shop", "products": [{"name": "Mug", "price": "$9"}]}),
            json!({"type": "testimonials", "title": "Love", "testimonials": [{"quote": "Great", "author": "Ann"}]}),
            json!({"type": "pricing", "title": "Plans", "tiers": [{"name": "Pro", "price": "$10", "features": ["A"]}]}),
            json!({"type": "gallery", "title": "Pics", "items": [{"imageDescription": "Room"}]}),
            json!({"type": "stats", "stats": [{"value": "10", "label": "Years"}]}),
            json!({"type": "cta-banner", "headline": "Go", "cta": {"text": "Now", "href": "#"}}),
            json!({"type": "team", "title": "Team", "members": [{"name": "Bo", "role": "Chef"}]}),
            json!({"type": "blog-preview", "title": "Blog", "posts": [{"title": "Hi", "excerpt": "..."}]}),
            json!({"type": "contact", "title": "Contact"}),
            json!({"type": "faq", "title": "FAQ", "items": [{"question": "Q", "answer": "A"}]}),
            json!({"type": "about", "title": "About", "body": "Story"}),
            json!({"type": "logo-cloud", "logos": [{"name": "Acme"}]}),
            json!({"type": "newsletter", "title": "News"}),
            json!({"type": "process", "title": "How", "steps": [{"title": "One", "description": "First"}]}),
        ];
        for sample in samples {
            let tag = sample["type"].as_str().unwrap().to_string();
            let (source, _) = render(sample);
            assert!(
                source.starts_with("export default function Widget()"),
                "{tag} did not render a component"
            );
            assert!(source.contains(r#"id="widget""#), "{tag} lost its anchor");
        }
    }
}
