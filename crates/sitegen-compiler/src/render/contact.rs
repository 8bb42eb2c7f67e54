//! Contact details and enquiry form
//!
//! Missing contact fields fall back to the business record.

use super::{component, heading, join, wrap, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{ContactSection, ContactVariant};

struct Details<'a> {
    email: Option<&'a str>,
    phone: Option<&'a str>,
    address: Option<&'a str>,
    hours: Option<&'a str>,
}

fn pick<'a>(own: Option<&'a String>, fallback: Option<&'a String>) -> Option<&'a str> {
    own.or(fallback)
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}

pub(super) fn render(section: &ContactSection, target: &Target<'_>, env: &RenderEnv<'_>) -> String {
    let business = env.business;
    let details = Details {
        email: pick(section.email.as_ref(), business.email.as_ref()),
        phone: pick(section.phone.as_ref(), business.phone.as_ref()),
        address: pick(section.address.as_ref(), business.address.as_ref()),
        hours: pick(section.hours.as_ref(), business.hours.as_ref()),
    };

    let content = match section.variant {
        ContactVariant::Form => wrap(
            r#"<div className="mx-auto max-w-xl">"#,
            &join([form(&details, env), detail_list(&details, env, "mt-10 text-center")]),
            "</div>",
        ),
        ContactVariant::Split => wrap(
            r#"<div className="grid gap-12 lg:grid-cols-2">"#,
            &join([detail_list(&details, env, ""), form(&details, env)]),
            "</div>",
        ),
        ContactVariant::Cards => wrap(
            r#"<div className="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">"#,
            &join(entries(&details).into_iter().map(|(label, value, link)| {
                wrap(
                    &format!(r#"<div className="p-6 text-center {}">"#, env.theme.card),
                    &join([
                        format!(
                            r#"<h3 className="text-sm font-semibold uppercase tracking-wide {}">{label}</h3>"#,
                            env.theme.primary_text
                        ),
                        value_markup(&value, link.as_deref(), env),
                    ]),
                    "</div>",
                )
            })),
            "</div>",
        ),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        content,
    ]);
    component(target, &env.theme.section_alt_bg, &body)
}

fn entries(details: &Details<'_>) -> Vec<(&'static str, String, Option<String>)> {
    let mut out = Vec::new();
    if let Some(email) = details.email {
        out.push(("Email", email.to_string(), Some(format!("mailto:{email}"))));
    }
    if let Some(phone) = details.phone {
        let dial: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        out.push(("Phone", phone.to_string(), Some(format!("tel:{dial}"))));
    }
    if let Some(address) = details.address {
        out.push(("Address", address.to_string(), None));
    }
    if let Some(hours) = details.hours {
        out.push(("Hours", hours.to_string(), None));
    }
    out
}

fn value_markup(value: &str, link: Option<&str>, env: &RenderEnv<'_>) -> String {
    match link {
        Some(href) => format!(
            r#"<a href="{}" className="mt-2 block {} hover:underline">{}</a>"#,
            escape::href(href),
            env.theme.body,
            escape::jsx_text(value)
        ),
        None => format!(
            r#"<p className="mt-2 whitespace-pre-line {}">{}</p>"#,
            env.theme.body,
            escape::jsx_text(value)
        ),
    }
}

fn detail_list(details: &Details<'_>, env: &RenderEnv<'_>, class: &str) -> String {
    let items = join(entries(details).into_iter().map(|(label, value, link)| {
        wrap(
            "<div>",
            &join([
                format!(r#"<dt className="font-semibold {}">{label}</dt>"#, env.theme.heading),
                wrap("<dd>", &value_markup(&value, link.as_deref(), env), "</dd>"),
            ]),
            "</div>",
        )
    }));
    wrap(&format!(r#"<dl className="space-y-6 {class}">"#), &items, "</dl>")
}

fn form(details: &Details<'_>, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let action = details
        .email
        .map_or_else(|| "#".to_string(), |e| escape::href(&format!("mailto:{e}")));
    format!(
        r#"<form action="{action}" method="post" encType="text/plain" className="space-y-4 p-8 {card}">
  <input type="text" name="name" required placeholder="Your name" className="{input}" />
  <input type="email" name="email" required placeholder="you@example.com" className="{input}" />
  <textarea name="message" rows={{5}} required placeholder="How can we help?" className="{input}" />
  <button type="submit" className="w-full {button}">Send message</button>
</form>"#,
        card = theme.card,
        input = theme.input,
        button = theme.primary_button,
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::render;
    use serde_json::json;

    #[test]
    fn falls_back_to_business_details() {
        let (source, _) = render(json!({"type": "contact", "title": "Visit"}));
        assert!(source.contains("mailto:hello@harbor.test"));
        assert!(source.contains("tel:+15550100"));
    }

    #[test]
    fn section_details_take_precedence() {
        let (source, _) = render(json!({
            "type": "contact",
            "variant": "cards",
            "title": "Visit",
            "email": "bookings@harbor.test"
        }));
        assert!(source.contains("mailto:bookings@harbor.test"));
        assert!(!source.contains("hello@harbor.test"));
    }
}
