//! Image gallery

use super::{component, heading, join, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{GalleryItem, GallerySection, GalleryVariant};

pub(super) fn render(
    section: &GallerySection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let (frame, tile) = match section.variant {
        GalleryVariant::Grid => (
            r#"<div className="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">"#,
            "h-64 w-full",
        ),
        GalleryVariant::Masonry => (
            r#"<div className="columns-1 gap-4 space-y-4 sm:columns-2 lg:columns-3">"#,
            "w-full",
        ),
        GalleryVariant::Carousel => (
            r#"<div className="-mx-6 flex snap-x snap-mandatory gap-4 overflow-x-auto px-6 pb-4">"#,
            "h-80 w-[28rem] max-w-full",
        ),
    };

    let items = join(section.items.iter().enumerate().map(|(i, item)| {
        let class = match section.variant {
            // Varying heights give the masonry columns their stagger.
            GalleryVariant::Masonry => format!("{tile} {}", ["h-64", "h-96", "h-80"][i % 3]),
            _ => tile.to_string(),
        };
        figure(item, &class, section.variant, env, ctx)
    }));

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        wrap(frame, &items, "</div>"),
    ]);
    component(target, &env.theme.section_bg, &body)
}

fn figure(
    item: &GalleryItem,
    class: &str,
    variant: GalleryVariant,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let outer = if variant == GalleryVariant::Carousel {
        r#"<figure className="flex-none snap-start overflow-hidden rounded-2xl">"#
    } else {
        r#"<figure className="break-inside-avoid overflow-hidden rounded-2xl">"#
    };
    let caption = item
        .caption
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(|c| {
            format!(
                r#"<figcaption className="mt-2 text-sm {}">{}</figcaption>"#,
                env.theme.muted,
                escape::jsx_text(c)
            )
        })
        .unwrap_or_default();
    wrap(
        outer,
        &join([ctx.image(&item.image_description, class, env.theme), caption]),
        "</figure>",
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn eight_images_mint_six_tokens() {
        let items: Vec<_> = (1..=8)
            .map(|i| json!({"imageDescription": format!("Dining room view {i}")}))
            .collect();
        let (source, ctx) = render(json!({"type": "gallery", "title": "Inside", "items": items}));

        assert_eq!(ctx.placeholders().minted(), 6);
        assert_eq!(ctx.placeholders().fallbacks(), 2);
        assert!(source.contains("IMG_6"));
        assert!(!source.contains("IMG_7"));
        assert_eq!(source.matches(r#"role="img""#).count(), 2);
    }
}
