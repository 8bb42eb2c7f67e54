//! Pricing tiers: columns, comparison table, or compact rows

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{PricingSection, PricingTier, PricingVariant};

pub(super) fn render(section: &PricingSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let tiers = match section.variant {
        PricingVariant::Columns => wrap(
            r#"<div className="grid gap-8 lg:grid-cols-3">"#,
            &join(section.tiers.iter().map(|t| column(t, env))),
            "</div>",
        ),
        PricingVariant::Comparison => comparison(&section.tiers, env),
        PricingVariant::Compact => wrap(
            &format!(r#"<div className="mx-auto max-w-3xl divide-y {} {}">"#, theme.border, theme.card),
            &join(section.tiers.iter().map(|t| {
                format!(
                    r#"<div className="flex items-center justify-between gap-6 p-6">
  <div>
    <h3 className="font-semibold {heading}">{name}</h3>
    <p className="text-sm {muted}">{description}</p>
  </div>
  <div className="text-right">
    <span className="text-2xl font-bold {heading}">{price}</span>
    <span className="text-sm {muted}">{period}</span>
  </div>
</div>"#,
                    heading = theme.heading,
                    muted = theme.muted,
                    name = escape::jsx_text(&t.name),
                    description = escape::jsx_text(t.description.as_deref().unwrap_or_default()),
                    price = escape::jsx_text(&t.price),
                    period = period(t),
                )
            })),
            "</div>",
        ),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        tiers,
    ]);
    component(target, &theme.section_bg, &body)
}

fn period(tier: &PricingTier) -> String {
    tier.period
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("/{}", escape::jsx_text(p.trim_start_matches('/'))))
        .unwrap_or_default()
}

fn cta_text(tier: &PricingTier) -> String {
    escape::jsx_text(tier.cta_text.as_deref().unwrap_or("Get started"))
}

fn column(tier: &PricingTier, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let (frame, button) = if tier.highlighted {
        (
            format!("relative p-8 ring-2 ring-{}-500 {}", theme.theme.primary, theme.card),
            &theme.primary_button,
        )
    } else {
        (format!("relative p-8 {}", theme.card), &theme.secondary_button)
    };
    let badge = if tier.highlighted {
        format!(r#"<span className="absolute -top-3 left-8 {}">Most popular</span>"#, theme.badge)
    } else {
        String::new()
    };
    wrap(
        &format!(r#"<div className="{frame}">"#),
        &join([
            badge,
            format!(
                r#"<h3 className="text-lg font-semibold {}">{}</h3>"#,
                theme.heading,
                escape::jsx_text(&tier.name)
            ),
            format!(
                r#"<p className="mt-4"><span className="text-4xl font-bold {}">{}</span><span className="{}">{}</span></p>"#,
                theme.heading,
                escape::jsx_text(&tier.price),
                theme.muted,
                period(tier)
            ),
            tier.description
                .as_deref()
                .map(|d| format!(r#"<p className="mt-2 text-sm {}">{}</p>"#, theme.muted, escape::jsx_text(d)))
                .unwrap_or_default(),
            wrap(
                r#"<ul className="mt-6 space-y-3">"#,
                &join(tier.features.iter().map(|f| {
                    format!(
                        r#"<li className="flex gap-2 {}"><span className="{}">&#10003;</span>{}</li>"#,
                        theme.body,
                        theme.primary_text,
                        escape::jsx_text(f)
                    )
                })),
                "</ul>",
            ),
            format!(
                r##"<a href="#contact" className="mt-8 w-full {button}">{}</a>"##,
                cta_text(tier)
            ),
        ]),
        "</div>",
    )
}

fn comparison(tiers: &[PricingTier], env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let mut features: Vec<&str> = Vec::new();
    for feature in tiers.iter().flat_map(|t| &t.features) {
        if !features.contains(&feature.as_str()) {
            features.push(feature);
        }
    }

    let header = join(std::iter::once(r#"<th className="p-4 text-left" />"#.to_string()).chain(
        tiers.iter().map(|t| {
            format!(
                r#"<th className="p-4 text-center {}">{}<div className="text-2xl font-bold">{}{}</div></th>"#,
                theme.heading,
                escape::jsx_text(&t.name),
                escape::jsx_text(&t.price),
                period(t)
            )
        }),
    ));
    let rows = join(features.iter().map(|feature| {
        let cells = join(std::iter::once(format!(
            r#"<td className="p-4 {}">{}</td>"#,
            theme.body,
            escape::jsx_text(feature)
        ))
        .chain(tiers.iter().map(|t| {
            let mark = if t.features.iter().any(|f| f == feature) {
                format!(r#"<span className="{}">&#10003;</span>"#, theme.primary_text)
            } else {
                format!(r#"<span className="{}">&mdash;</span>"#, theme.muted)
            };
            format!(r#"<td className="p-4 text-center">{mark}</td>"#)
        })));
        wrap(&format!(r#"<tr className="border-t {}">"#, theme.border), &cells, "</tr>")
    }));

    wrap(
        r#"<div className="overflow-x-auto">"#,
        &wrap(
            r#"<table className="w-full text-sm">"#,
            &join([
                wrap("<thead>", &wrap("<tr>", &header, "</tr>"), "</thead>"),
                wrap("<tbody>", &rows, "</tbody>"),
            ]),
            "</table>",
        ),
        "</div>",
    )
}
