//! Testimonials: cards, scroll-snap carousel, or a single large quote

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{Testimonial, TestimonialsSection, TestimonialsVariant};

pub(super) fn render(section: &TestimonialsSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let quotes = match section.variant {
        TestimonialsVariant::Cards => wrap(
            r#"<div className="grid gap-8 md:grid-cols-2 lg:grid-cols-3">"#,
            &join(section.testimonials.iter().map(|t| card(t, env))),
            "</div>",
        ),
        TestimonialsVariant::Carousel => wrap(
            r#"<div className="-mx-6 flex snap-x snap-mandatory gap-6 overflow-x-auto px-6 pb-4">"#,
            &join(section.testimonials.iter().map(|t| {
                wrap(r#"<div className="w-80 flex-none snap-center">"#, &card(t, env), "</div>")
            })),
            "</div>",
        ),
        TestimonialsVariant::Quote => section
            .testimonials
            .first()
            .map(|t| {
                wrap(
                    r#"<figure className="mx-auto max-w-3xl text-center">"#,
                    &join([
                        format!(
                            r#"<blockquote className="{} text-2xl leading-relaxed sm:text-3xl {}">&ldquo;{}&rdquo;</blockquote>"#,
                            theme.heading_font,
                            theme.heading,
                            escape::jsx_text(&t.quote)
                        ),
                        attribution(t, env),
                    ]),
                    "</figure>",
                )
            })
            .unwrap_or_default(),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        quotes,
    ]);
    component(target, &theme.section_alt_bg, &body)
}

fn stars(rating: Option<u8>, env: &RenderEnv<'_>) -> String {
    match rating {
        Some(r) if r > 0 => {
            let filled = usize::from(r.min(5));
            format!(
                r#"<div className="mb-3 text-{}-400" aria-label="{} out of 5 stars">{}</div>"#,
                env.theme.theme.accent,
                filled,
                "★".repeat(filled)
            )
        }
        _ => String::new(),
    }
}

fn attribution(t: &Testimonial, env: &RenderEnv<'_>) -> String {
    let role = t
        .role
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .map(|r| format!(r#"<span className="block text-sm {}">{}</span>"#, env.theme.muted, escape::jsx_text(r)))
        .unwrap_or_default();
    wrap(
        r#"<figcaption className="mt-6">"#,
        &join([
            format!(
                r#"<span className="font-semibold {}">{}</span>"#,
                env.theme.heading,
                escape::jsx_text(&t.author)
            ),
            role,
        ]),
        "</figcaption>",
    )
}

fn card(t: &Testimonial, env: &RenderEnv<'_>) -> String {
    wrap(
        &format!(r#"<figure className="h-full p-8 {}">"#, env.theme.card),
        &join([
            stars(t.rating, env),
            format!(
                r#"<blockquote className="leading-relaxed {}">&ldquo;{}&rdquo;</blockquote>"#,
                env.theme.body,
                escape::jsx_text(&t.quote)
            ),
            attribution(t, env),
        ]),
        "</figure>",
    )
}
