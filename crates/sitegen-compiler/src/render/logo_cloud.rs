//! Client / partner logos

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{Logo, LogoCloudSection, LogoCloudVariant};

pub(super) fn render(section: &LogoCloudSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let title = section
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|t| heading(t, None, env))
        .unwrap_or_default();

    let logos = match section.variant {
        LogoCloudVariant::Row => wrap(
            r#"<div className="flex flex-wrap items-center justify-center gap-x-12 gap-y-8">"#,
            &join(section.logos.iter().map(|l| logo(l, env))),
            "</div>",
        ),
        LogoCloudVariant::Grid => wrap(
            r#"<div className="grid grid-cols-2 gap-6 sm:grid-cols-3 lg:grid-cols-6">"#,
            &join(section.logos.iter().map(|l| {
                wrap(
                    &format!(r#"<div className="flex items-center justify-center p-6 {}">"#, theme.card),
                    &logo(l, env),
                    "</div>",
                )
            })),
            "</div>",
        ),
        LogoCloudVariant::Marquee => wrap(
            r#"<div className="overflow-hidden">"#,
            &wrap(
                r#"<div className="flex w-max animate-[marquee_30s_linear_infinite] gap-16">"#,
                // Listed twice so the loop has no visible seam.
                &join(section.logos.iter().chain(&section.logos).map(|l| logo(l, env))),
                "</div>",
            ),
            "</div>",
        ),
    };

    component(target, &theme.section_bg, &join([title, logos]))
}

fn logo(logo: &Logo, env: &RenderEnv<'_>) -> String {
    match logo.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" className="h-10 w-auto object-contain opacity-70 grayscale transition hover:opacity-100 hover:grayscale-0" />"#,
            escape::href(url),
            escape::attr(&logo.name)
        ),
        None => format!(
            r#"<span className="{} text-xl font-bold opacity-70 {}">{}</span>"#,
            env.theme.heading_font,
            env.theme.muted,
            escape::jsx_text(&logo.name)
        ),
    }
}
