//! About / story section

use super::{component, join, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{AboutSection, AboutVariant};

pub(super) fn render(
    section: &AboutSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let title = format!(
        r#"<h2 className="{} text-3xl font-bold tracking-tight sm:text-4xl {}">{}</h2>"#,
        theme.heading_font,
        theme.heading,
        escape::jsx_text(&section.title)
    );
    let paragraphs = join(
        section
            .body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                format!(
                    r#"<p className="mt-6 text-lg leading-relaxed {}">{}</p>"#,
                    theme.body,
                    escape::jsx_text(p)
                )
            }),
    );
    let highlights = if section.highlights.is_empty() {
        String::new()
    } else {
        wrap(
            r#"<ul className="mt-8 space-y-3">"#,
            &join(section.highlights.iter().map(|h| {
                format!(
                    r#"<li className="flex gap-3 {}"><span className="{}">&#10003;</span>{}</li>"#,
                    theme.body,
                    theme.primary_text,
                    escape::jsx_text(h)
                )
            })),
            "</ul>",
        )
    };
    let description = section
        .image_description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("The team at {}", env.business.name));

    let body = match section.variant {
        AboutVariant::Split => wrap(
            r#"<div className="grid items-center gap-12 lg:grid-cols-2">"#,
            &join([
                wrap("<div>", &join([title, paragraphs, highlights]), "</div>"),
                ctx.image(&description, "h-96 w-full rounded-2xl", theme),
            ]),
            "</div>",
        ),
        AboutVariant::Centered => wrap(
            r#"<div className="mx-auto max-w-3xl text-center">"#,
            &join([title, paragraphs, highlights]),
            "</div>",
        ),
        AboutVariant::Timeline => wrap(
            r#"<div className="mx-auto max-w-3xl">"#,
            &join([
                title,
                paragraphs,
                wrap(
                    &format!(r#"<ol className="mt-10 border-l-2 pl-8 {}">"#, theme.border),
                    &join(section.highlights.iter().map(|h| {
                        format!(
                            r#"<li className="relative mb-8"><span className="absolute -left-[2.6rem] top-1 h-4 w-4 rounded-full {}" /><p className="{}">{}</p></li>"#,
                            theme.gradient,
                            theme.body,
                            escape::jsx_text(h)
                        )
                    })),
                    "</ol>",
                ),
            ]),
            "</div>",
        ),
    };

    component(target, &theme.section_bg, &body)
}
