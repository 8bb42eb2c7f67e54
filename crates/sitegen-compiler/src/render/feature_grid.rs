//! Feature grid: cards, icon list, or alternating image rows

use super::{component, heading, join, paragraph, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{Feature, FeatureGridSection, FeatureGridVariant};

pub(super) fn render(
    section: &FeatureGridSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let body = match section.variant {
        FeatureGridVariant::Cards => wrap(
            r#"<div className="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">"#,
            &join(section.features.iter().map(|f| {
                wrap(
                    &format!(r#"<div className="p-8 {}">"#, theme.card),
                    &join([icon(f, env), title(f, env), description(f, env)]),
                    "</div>",
                )
            })),
            "</div>",
        ),
        FeatureGridVariant::Icons => wrap(
            r#"<dl className="grid gap-x-8 gap-y-10 sm:grid-cols-2 lg:grid-cols-4">"#,
            &join(section.features.iter().map(|f| {
                wrap(
                    r#"<div className="flex flex-col items-center text-center">"#,
                    &join([icon(f, env), title(f, env), description(f, env)]),
                    "</div>",
                )
            })),
            "</dl>",
        ),
        FeatureGridVariant::Alternating => wrap(
            r#"<div className="space-y-20">"#,
            &join(section.features.iter().enumerate().map(|(i, f)| {
                let order = if i % 2 == 1 { " lg:order-last" } else { "" };
                let alt = format!("{}: {}", f.title, f.description);
                wrap(
                    r#"<div className="grid items-center gap-12 lg:grid-cols-2">"#,
                    &join([
                        wrap(
                            &format!(r#"<div className="overflow-hidden rounded-2xl{order}">"#),
                            &ctx.image(&alt, "h-72 w-full", theme),
                            "</div>",
                        ),
                        wrap("<div>", &join([title(f, env), description(f, env)]), "</div>"),
                    ]),
                    "</div>",
                )
            })),
            "</div>",
        ),
    };

    let content = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        body,
    ]);
    component(target, &theme.section_bg, &content)
}

fn icon(feature: &Feature, env: &RenderEnv<'_>) -> String {
    let glyph = feature
        .icon
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .map_or_else(
            || feature.title.chars().next().map(String::from).unwrap_or_default(),
            ToString::to_string,
        );
    format!(
        r#"<div className="mb-4 flex h-12 w-12 items-center justify-center rounded-xl {} text-xl font-bold text-white">{}</div>"#,
        env.theme.gradient,
        escape::jsx_text(&glyph)
    )
}

fn title(feature: &Feature, env: &RenderEnv<'_>) -> String {
    format!(
        r#"<h3 className="{} text-xl font-semibold {}">{}</h3>"#,
        env.theme.heading_font,
        env.theme.heading,
        escape::jsx_text(&feature.title)
    )
}

fn description(feature: &Feature, env: &RenderEnv<'_>) -> String {
    paragraph(
        Some(feature.description.as_str()),
        &format!("mt-2 leading-relaxed {}", env.theme.body),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn alternating_requests_one_image_per_feature() {
        let (source, ctx) = render(json!({
            "type": "feature-grid",
            "variant": "alternating",
            "title": "Why us",
            "features": [
                {"title": "Fresh", "description": "Daily catch"},
                {"title": "Local", "description": "From the harbor"}
            ]
        }));
        assert_eq!(ctx.placeholders().minted(), 2);
        assert!(source.contains("lg:order-last"));
    }

    #[test]
    fn icon_falls_back_to_initial() {
        let (source, _) = render(json!({
            "type": "feature-grid",
            "title": "Why us",
            "features": [{"title": "Speed", "description": "Fast"}]
        }));
        assert!(source.contains(">S</div>"));
    }
}
