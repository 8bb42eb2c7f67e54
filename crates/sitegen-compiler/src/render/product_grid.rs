//! Product grid: grid, scroll-snap carousel, or one featured product

use super::{button, component, heading, join, paragraph, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{CtaLink, Product, ProductGridSection, ProductGridVariant};

pub(super) fn render(
    section: &ProductGridSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let products = match section.variant {
        ProductGridVariant::Grid => wrap(
            r#"<div className="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">"#,
            &join(section.products.iter().map(|p| card(p, env, ctx, "h-56 w-full"))),
            "</div>",
        ),
        ProductGridVariant::Carousel => wrap(
            r#"<div className="-mx-6 flex snap-x snap-mandatory gap-6 overflow-x-auto px-6 pb-4">"#,
            &join(section.products.iter().map(|p| {
                wrap(
                    r#"<div className="w-72 flex-none snap-start">"#,
                    &card(p, env, ctx, "h-64 w-full"),
                    "</div>",
                )
            })),
            "</div>",
        ),
        ProductGridVariant::Featured => {
            let (lead, rest) = match section.products.split_first() {
                Some((lead, rest)) => (featured(lead, env, ctx), rest),
                None => (String::new(), &[][..]),
            };
            join([
                lead,
                wrap(
                    r#"<div className="mt-12 grid gap-8 sm:grid-cols-3">"#,
                    &join(rest.iter().map(|p| card(p, env, ctx, "h-48 w-full"))),
                    "</div>",
                ),
            ])
        }
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        products,
    ]);
    component(target, &theme.section_alt_bg, &body)
}

fn image(product: &Product, env: &RenderEnv<'_>, ctx: &mut RenderContext, class: &str) -> String {
    let description = product
        .image_description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("Product photo of {}", product.name));
    ctx.image(&description, class, env.theme)
}

fn badge(product: &Product, env: &RenderEnv<'_>) -> String {
    product
        .badge
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .map(|b| {
            format!(
                r#"<span className="absolute left-3 top-3 {}">{}</span>"#,
                env.theme.badge,
                escape::jsx_text(b)
            )
        })
        .unwrap_or_default()
}

fn card(product: &Product, env: &RenderEnv<'_>, ctx: &mut RenderContext, image_class: &str) -> String {
    let theme = env.theme;
    let link = product.href.as_deref().map_or_else(String::new, |href| {
        format!(
            r#"<a href="{}" className="mt-4 inline-block text-sm font-semibold {}">View details &rarr;</a>"#,
            escape::href(href),
            theme.primary_text
        )
    });
    wrap(
        &format!(r#"<div className="group overflow-hidden {}">"#, theme.card),
        &join([
            wrap(
                r#"<div className="relative overflow-hidden">"#,
                &join([image(product, env, ctx, image_class), badge(product, env)]),
                "</div>",
            ),
            wrap(
                r#"<div className="p-5">"#,
                &join([
                    format!(
                        r#"<h3 className="font-semibold {}">{}</h3>"#,
                        theme.heading,
                        escape::jsx_text(&product.name)
                    ),
                    paragraph(product.description.as_deref(), &format!("mt-1 text-sm {}", theme.muted)),
                    format!(
                        r#"<p className="mt-3 text-lg font-bold {}">{}</p>"#,
                        theme.primary_text,
                        escape::jsx_text(&product.price)
                    ),
                    link,
                ]),
                "</div>",
            ),
        ]),
        "</div>",
    )
}

fn featured(product: &Product, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    let theme = env.theme;
    let cta = CtaLink {
        text: "Shop now".to_string(),
        href: product.href.clone().unwrap_or_else(|| "#contact".to_string()),
    };
    wrap(
        &format!(r#"<div className="grid items-center gap-10 overflow-hidden lg:grid-cols-2 {}">"#, theme.card),
        &join([
            image(product, env, ctx, "h-96 w-full"),
            wrap(
                r#"<div className="p-8">"#,
                &join([
                    badge(product, env).replace("absolute left-3 top-3 ", ""),
                    format!(
                        r#"<h3 className="mt-3 {} text-3xl font-bold {}">{}</h3>"#,
                        theme.heading_font,
                        theme.heading,
                        escape::jsx_text(&product.name)
                    ),
                    paragraph(product.description.as_deref(), &format!("mt-4 {}", theme.body)),
                    format!(
                        r#"<p className="mt-6 text-2xl font-bold {}">{}</p>"#,
                        theme.primary_text,
                        escape::jsx_text(&product.price)
                    ),
                    wrap(r#"<div className="mt-8">"#, &button(&cta, &theme.primary_button), "</div>"),
                ]),
                "</div>",
            ),
        ]),
        "</div>",
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn products_without_description_get_a_generated_alt() {
        let (source, _) = render(json!({
            "type": "product-grid",
            "title": "Shop",
            "products": [{"name": "Blue Mug", "price": "$9"}]
        }));
        assert!(source.contains(r#"alt="Product photo of Blue Mug""#));
    }
}
