//! Newsletter signup

use super::{component, join, paragraph, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{NewsletterSection, NewsletterVariant};

pub(super) fn render(section: &NewsletterSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let placeholder = escape::attr(section.placeholder.as_deref().unwrap_or("Enter your email"));
    let button_text = escape::jsx_text(section.button_text.as_deref().unwrap_or("Subscribe"));
    let form = format!(
        r#"<form className="mt-8 flex w-full max-w-md flex-col gap-3 sm:flex-row">
  <label htmlFor="{anchor}-email" className="sr-only">Email address</label>
  <input id="{anchor}-email" type="email" name="email" required placeholder="{placeholder}" className="{input}" />
  <button type="submit" className="{button}">{button_text}</button>
</form>"#,
        anchor = target.anchor,
        input = theme.input,
        button = theme.primary_button,
    );

    let (frame, background, title_color, subtitle_class) = match section.variant {
        NewsletterVariant::Inline => (
            r#"<div className="flex flex-col items-start justify-between gap-6 lg:flex-row lg:items-center">"#.to_string(),
            theme.section_bg.clone(),
            theme.heading.clone(),
            format!("mt-2 {}", theme.muted),
        ),
        NewsletterVariant::Card => (
            format!(r#"<div className="mx-auto flex max-w-2xl flex-col items-center p-10 text-center {}">"#, theme.card),
            theme.section_alt_bg.clone(),
            theme.heading.clone(),
            format!("mt-3 {}", theme.body),
        ),
        NewsletterVariant::Banner => (
            r#"<div className="flex flex-col items-center text-center">"#.to_string(),
            format!("{} text-white", theme.gradient),
            "text-white".to_string(),
            "mt-3 text-white/90".to_string(),
        ),
    };

    let text = join([
        format!(
            r#"<h2 className="{} text-3xl font-bold {title_color}">{}</h2>"#,
            theme.heading_font,
            escape::jsx_text(&section.title)
        ),
        paragraph(section.subtitle.as_deref(), &subtitle_class),
    ]);
    let body = wrap(&frame, &join([wrap("<div>", &text, "</div>"), form]), "</div>");
    component(target, &background, &body)
}
