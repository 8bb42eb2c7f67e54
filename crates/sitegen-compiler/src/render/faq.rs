//! Frequently asked questions
//!
//! The accordion uses native `<details>` so the component needs no client
//! state.

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{FaqItem, FaqSection, FaqVariant};

pub(super) fn render(section: &FaqSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let items = match section.variant {
        FaqVariant::Accordion => wrap(
            &format!(r#"<div className="mx-auto max-w-3xl divide-y {}">"#, theme.border),
            &join(section.items.iter().map(|item| {
                wrap(
                    r#"<details className="group py-5">"#,
                    &join([
                        format!(
                            r#"<summary className="flex cursor-pointer list-none items-center justify-between font-semibold {}">{}<span className="ml-4 transition-transform group-open:rotate-45 {}">+</span></summary>"#,
                            theme.heading,
                            escape::jsx_text(&item.question),
                            theme.primary_text
                        ),
                        answer(item, env, "mt-3"),
                    ]),
                    "</details>",
                )
            })),
            "</div>",
        ),
        FaqVariant::TwoColumn => wrap(
            r#"<dl className="grid gap-x-12 gap-y-10 md:grid-cols-2">"#,
            &join(section.items.iter().map(|item| qa(item, env))),
            "</dl>",
        ),
        FaqVariant::List => wrap(
            r#"<dl className="mx-auto max-w-3xl space-y-8">"#,
            &join(section.items.iter().map(|item| qa(item, env))),
            "</dl>",
        ),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        items,
    ]);
    component(target, &theme.section_bg, &body)
}

fn answer(item: &FaqItem, env: &RenderEnv<'_>, spacing: &str) -> String {
    format!(
        r#"<p className="{spacing} leading-relaxed {}">{}</p>"#,
        env.theme.body,
        escape::jsx_text(&item.answer)
    )
}

fn qa(item: &FaqItem, env: &RenderEnv<'_>) -> String {
    wrap(
        "<div>",
        &format!(
            "<dt className=\"font-semibold {}\">{}</dt>\n<dd>{}</dd>",
            env.theme.heading,
            escape::jsx_text(&item.question),
            answer(item, env, "mt-2")
        ),
        "</div>",
    )
}
