//! Restaurant menu

use super::{component, heading, join, paragraph, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{MenuCategory, MenuItem, MenuSection, MenuVariant};

pub(super) fn render(
    section: &MenuSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let categories = match section.variant {
        MenuVariant::List => join(section.categories.iter().map(|c| {
            category(c, env, |item| list_item(item, env))
        })),
        MenuVariant::Cards => join(section.categories.iter().map(|c| {
            category(c, env, |item| card_item(item, env, ctx))
        })),
        MenuVariant::Tabbed => join(section.categories.iter().enumerate().map(|(i, c)| {
            let open = if i == 0 { " open" } else { "" };
            wrap(
                &format!(r#"<details className="group rounded-2xl border {} p-6"{open}>"#, theme.border),
                &join([
                    format!(
                        r#"<summary className="cursor-pointer list-none {} text-2xl font-semibold {}">{}</summary>"#,
                        theme.heading_font,
                        theme.heading,
                        escape::jsx_text(&c.name)
                    ),
                    wrap(
                        r#"<div className="mt-6 divide-y divide-gray-200/50">"#,
                        &join(c.items.iter().map(|item| list_item(item, env))),
                        "</div>",
                    ),
                ]),
                "</details>",
            )
        })),
        MenuVariant::Elegant => join(section.categories.iter().map(|c| {
            wrap(
                r#"<div className="mx-auto max-w-3xl text-center">"#,
                &join([
                    format!(
                        r#"<h3 className="{} text-sm uppercase tracking-[0.3em] {}">{}</h3>"#,
                        theme.heading_font,
                        theme.primary_text,
                        escape::jsx_text(&c.name)
                    ),
                    wrap(
                        r#"<ul className="mt-8 space-y-8">"#,
                        &join(c.items.iter().map(|item| elegant_item(item, env))),
                        "</ul>",
                    ),
                ]),
                "</div>",
            )
        })),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        wrap(r#"<div className="space-y-16">"#, &categories, "</div>"),
    ]);
    component(target, &theme.section_bg, &body)
}

fn category<F>(category: &MenuCategory, env: &RenderEnv<'_>, mut item: F) -> String
where
    F: FnMut(&MenuItem) -> String,
{
    wrap(
        "<div>",
        &join([
            format!(
                r#"<h3 className="mb-6 border-b pb-2 {} text-2xl font-semibold {} {}">{}</h3>"#,
                env.theme.heading_font,
                env.theme.heading,
                env.theme.border,
                escape::jsx_text(&category.name)
            ),
            wrap(
                r#"<div className="grid gap-6 md:grid-cols-2">"#,
                &join(category.items.iter().map(&mut item)),
                "</div>",
            ),
        ]),
        "</div>",
    )
}

fn name_and_price(item: &MenuItem, env: &RenderEnv<'_>) -> String {
    format!(
        r#"<div className="flex items-baseline justify-between gap-4">
  <h4 className="font-semibold {}">{}</h4>
  <span className="font-semibold {}">{}</span>
</div>"#,
        env.theme.heading,
        escape::jsx_text(&item.name),
        env.theme.primary_text,
        escape::jsx_text(&item.price)
    )
}

fn tags(item: &MenuItem, env: &RenderEnv<'_>) -> String {
    if item.tags.is_empty() {
        return String::new();
    }
    wrap(
        r#"<div className="mt-2 flex flex-wrap gap-2">"#,
        &join(item.tags.iter().map(|t| {
            format!(r#"<span className="{}">{}</span>"#, env.theme.badge, escape::jsx_text(t))
        })),
        "</div>",
    )
}

fn list_item(item: &MenuItem, env: &RenderEnv<'_>) -> String {
    wrap(
        r#"<div className="py-3">"#,
        &join([
            name_and_price(item, env),
            paragraph(item.description.as_deref(), &format!("mt-1 text-sm {}", env.theme.muted)),
            tags(item, env),
        ]),
        "</div>",
    )
}

fn card_item(item: &MenuItem, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    let image = item
        .image_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| ctx.image(d, "h-48 w-full", env.theme))
        .unwrap_or_default();
    wrap(
        &format!(r#"<div className="overflow-hidden {}">"#, env.theme.card),
        &join([
            image,
            wrap(
                r#"<div className="p-6">"#,
                &join([
                    name_and_price(item, env),
                    paragraph(item.description.as_deref(), &format!("mt-2 text-sm {}", env.theme.body)),
                    tags(item, env),
                ]),
                "</div>",
            ),
        ]),
        "</div>",
    )
}

fn elegant_item(item: &MenuItem, env: &RenderEnv<'_>) -> String {
    wrap(
        "<li>",
        &join([
            format!(
                r#"<p className="{} text-xl {}">{} <span className="{}">&middot; {}</span></p>"#,
                env.theme.heading_font,
                env.theme.heading,
                escape::jsx_text(&item.name),
                env.theme.primary_text,
                escape::jsx_text(&item.price)
            ),
            paragraph(item.description.as_deref(), &format!("mt-1 italic {}", env.theme.muted)),
        ]),
        "</li>",
    )
}
