//! Call-to-action banner

use super::{button, component, join, paragraph, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{CtaBannerSection, CtaBannerVariant};

pub(super) fn render(section: &CtaBannerSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let headline = |class: &str| {
        format!(
            r#"<h2 className="{} text-3xl font-bold tracking-tight sm:text-4xl {class}">{}</h2>"#,
            theme.heading_font,
            escape::jsx_text(&section.headline)
        )
    };

    match section.variant {
        CtaBannerVariant::Centered => {
            let body = wrap(
                r#"<div className="mx-auto max-w-2xl text-center">"#,
                &join([
                    headline(theme.heading.as_str()),
                    paragraph(section.subheadline.as_deref(), &format!("mt-4 text-lg {}", theme.body)),
                    wrap(r#"<div className="mt-8">"#, &button(&section.cta, &theme.primary_button), "</div>"),
                ]),
                "</div>",
            );
            component(target, &theme.section_alt_bg, &body)
        }
        CtaBannerVariant::Split => {
            let body = wrap(
                &format!(
                    r#"<div className="flex flex-col items-start justify-between gap-8 rounded-3xl p-10 lg:flex-row lg:items-center {}">"#,
                    theme.card
                ),
                &join([
                    wrap(
                        "<div>",
                        &join([
                            headline(theme.heading.as_str()),
                            paragraph(section.subheadline.as_deref(), &format!("mt-2 {}", theme.muted)),
                        ]),
                        "</div>",
                    ),
                    button(&section.cta, &theme.primary_button),
                ]),
                "</div>",
            );
            component(target, &theme.section_bg, &body)
        }
        CtaBannerVariant::Gradient => {
            let body = wrap(
                &format!(
                    r#"<div className="rounded-3xl px-8 py-16 text-center text-white {}">"#,
                    theme.gradient
                ),
                &join([
                    headline("text-white"),
                    paragraph(section.subheadline.as_deref(), "mt-4 text-lg text-white/90"),
                    wrap(
                        r#"<div className="mt-8">"#,
                        &button(
                            &section.cta,
                            &format!(
                                "inline-flex items-center rounded-lg bg-white px-6 py-3 font-semibold text-{}-700 hover:bg-gray-100 {}",
                                theme.theme.primary, theme.focus_ring
                            ),
                        ),
                        "</div>",
                    ),
                ]),
                "</div>",
            );
            component(target, &theme.section_bg, &body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn unsafe_cta_href_is_neutralised() {
        let (source, _) = render(json!({
            "type": "cta-banner",
            "headline": "Book now",
            "cta": {"text": "Go", "href": "javascript:alert(1)"}
        }));
        assert!(source.contains(r##"<a href="#""##));
        assert!(!source.contains("javascript:"));
    }
}
