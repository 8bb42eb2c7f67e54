//! Key figures

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{StatsSection, StatsVariant};

pub(super) fn render(section: &StatsSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let title = section
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|t| heading(t, None, env))
        .unwrap_or_default();

    let (background, grid, value_class, label_class, cell) = match section.variant {
        StatsVariant::Row => (
            theme.section_bg.clone(),
            "grid grid-cols-2 gap-8 text-center md:grid-cols-4",
            format!("{} text-4xl font-bold {}", theme.heading_font, theme.primary_text),
            format!("mt-2 {}", theme.muted),
            String::from("<div>"),
        ),
        StatsVariant::Cards => (
            theme.section_alt_bg.clone(),
            "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
            format!("{} text-4xl font-bold {}", theme.heading_font, theme.heading),
            format!("mt-2 {}", theme.muted),
            format!(r#"<div className="p-8 text-center {}">"#, theme.card),
        ),
        StatsVariant::Banner => (
            format!("{} text-white", theme.gradient),
            "grid grid-cols-2 gap-8 text-center md:grid-cols-4",
            format!("{} text-5xl font-extrabold", theme.heading_font),
            "mt-2 text-white/80".to_string(),
            String::from("<div>"),
        ),
    };

    let stats = join(section.stats.iter().map(|s| {
        wrap(
            &cell,
            &format!(
                r#"<div className="{value_class}">{}</div>
<div className="{label_class}">{}</div>"#,
                escape::jsx_text(&s.value),
                escape::jsx_text(&s.label)
            ),
            "</div>",
        )
    }));

    let body = join([title, wrap(&format!(r#"<div className="{grid}">"#), &stats, "</div>")]);
    component(target, &background, &body)
}
