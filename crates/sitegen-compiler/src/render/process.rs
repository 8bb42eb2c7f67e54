//! How-it-works steps

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{ProcessSection, ProcessStep, ProcessVariant};

pub(super) fn render(section: &ProcessSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let steps = match section.variant {
        ProcessVariant::Steps => wrap(
            r#"<ol className="grid gap-10 md:grid-cols-2 lg:grid-cols-4">"#,
            &join(section.steps.iter().enumerate().map(|(i, s)| {
                wrap(
                    r#"<li className="text-center">"#,
                    &join([number(i, env, "mx-auto"), text(s, env)]),
                    "</li>",
                )
            })),
            "</ol>",
        ),
        ProcessVariant::Timeline => wrap(
            &format!(r#"<ol className="mx-auto max-w-2xl border-l-2 {}">"#, theme.border),
            &join(section.steps.iter().enumerate().map(|(i, s)| {
                wrap(
                    r#"<li className="relative mb-10 pl-10">"#,
                    &join([number(i, env, "absolute -left-5 top-0"), text(s, env)]),
                    "</li>",
                )
            })),
            "</ol>",
        ),
        ProcessVariant::Cards => wrap(
            r#"<ol className="grid gap-8 md:grid-cols-3">"#,
            &join(section.steps.iter().enumerate().map(|(i, s)| {
                wrap(
                    &format!(r#"<li className="p-8 {}">"#, theme.card),
                    &join([number(i, env, ""), text(s, env)]),
                    "</li>",
                )
            })),
            "</ol>",
        ),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        steps,
    ]);
    component(target, &theme.section_alt_bg, &body)
}

fn number(index: usize, env: &RenderEnv<'_>, position: &str) -> String {
    format!(
        r#"<span className="{position} flex h-10 w-10 items-center justify-center rounded-full font-bold text-white {}">{}</span>"#,
        env.theme.gradient,
        index + 1
    )
}

fn text(step: &ProcessStep, env: &RenderEnv<'_>) -> String {
    format!(
        r#"<h3 className="mt-4 text-lg font-semibold {}">{}</h3>
<p className="mt-2 {}">{}</p>"#,
        env.theme.heading,
        escape::jsx_text(&step.title),
        env.theme.body,
        escape::jsx_text(&step.description)
    )
}
