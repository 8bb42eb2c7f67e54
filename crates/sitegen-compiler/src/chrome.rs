//! Shared chrome: navigation bar, footer and hero

use crate::escape;
use crate::render::{button, join, paragraph, wrap, RenderContext, RenderEnv};
use sitegen_ir::{Footer, FooterVariant, Hero, HeroVariant, Nav};

/// Path of the navigation bar component
pub const NAVBAR_PATH: &str = "components/Navbar.tsx";
/// Path of the footer component
pub const FOOTER_PATH: &str = "components/Footer.tsx";
/// Path of the hero component
pub const HERO_PATH: &str = "components/Hero.tsx";

fn brand(env: &RenderEnv<'_>) -> String {
    let business = env.business;
    match business.logo_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" className="h-9 w-auto" />"#,
            escape::href(url),
            escape::attr(&business.name)
        ),
        None => format!(
            r#"<span className="{} text-xl font-bold {}">{}</span>"#,
            env.theme.heading_font,
            env.theme.heading,
            escape::jsx_text(&business.name)
        ),
    }
}

/// Navigation bar component
#[must_use]
pub fn navbar(nav: &Nav, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let surface = if theme.is_dark() {
        "bg-gray-950/80 border-gray-800"
    } else {
        "bg-white/80 border-gray-200"
    };
    let links = join(nav.links.iter().map(|link| {
        format!(
            r#"<a href="{}" className="text-sm font-medium {} hover:opacity-80">{}</a>"#,
            escape::href(&link.href),
            theme.body,
            escape::jsx_text(&link.label)
        )
    }));
    let cta = nav
        .cta
        .as_ref()
        .map(|c| button(c, &theme.primary_button.replace("px-6 py-3", "px-4 py-2 text-sm")))
        .unwrap_or_default();

    let bar = wrap(
        r#"<nav className="mx-auto flex max-w-7xl items-center justify-between px-6 py-4 lg:px-8">"#,
        &join([
            format!(r#"<a href="/" className="flex items-center gap-2">{}</a>"#, brand(env)),
            wrap(r#"<div className="hidden items-center gap-8 md:flex">"#, &links, "</div>"),
            cta,
        ]),
        "</nav>",
    );
    format!(
        r#"export default function Navbar() {{
  return (
    <header className="fixed inset-x-0 top-0 z-50 border-b backdrop-blur {surface}">
{}
    </header>
  );
}}
"#,
        crate::render::indent(&bar, 6)
    )
}

/// Footer component
#[must_use]
pub fn footer(footer: &Footer, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let business = env.business;
    let copyright = if footer.copyright.trim().is_empty() {
        format!("&copy; {}. All rights reserved.", escape::jsx_text(&business.name))
    } else {
        escape::jsx_text(&footer.copyright)
    };
    let social = join(footer.social_links.iter().map(|s| {
        format!(
            r#"<a href="{}" className="text-sm {} hover:opacity-80" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape::href(&s.url),
            theme.muted,
            escape::jsx_text(&s.platform)
        )
    }));
    let social = wrap(r#"<div className="flex gap-6">"#, &social, "</div>");
    let tagline = paragraph(Some(business.tagline.as_str()), &format!("mt-2 text-sm {}", theme.muted));
    let copyright = format!(r#"<p className="text-sm {}">{copyright}</p>"#, theme.muted);

    let inner = match footer.variant {
        FooterVariant::Simple => wrap(
            r#"<div className="flex flex-col items-center justify-between gap-6 md:flex-row">"#,
            &join([brand(env), social, copyright]),
            "</div>",
        ),
        FooterVariant::Columns => {
            let columns = join(footer.columns.iter().map(|column| {
                wrap(
                    "<div>",
                    &join([
                        format!(
                            r#"<h3 className="text-sm font-semibold uppercase tracking-wide {}">{}</h3>"#,
                            theme.heading,
                            escape::jsx_text(&column.title)
                        ),
                        wrap(
                            r#"<ul className="mt-4 space-y-2">"#,
                            &join(column.links.iter().map(|l| {
                                format!(
                                    r#"<li><a href="{}" className="text-sm {} hover:opacity-80">{}</a></li>"#,
                                    escape::href(&l.href),
                                    theme.body,
                                    escape::jsx_text(&l.label)
                                )
                            })),
                            "</ul>",
                        ),
                    ]),
                    "</div>",
                )
            }));
            join([
                wrap(
                    r#"<div className="grid gap-10 md:grid-cols-4">"#,
                    &join([wrap("<div>", &join([brand(env), tagline]), "</div>"), columns]),
                    "</div>",
                ),
                wrap(
                    &format!(
                        r#"<div className="mt-12 flex flex-col items-center justify-between gap-4 border-t pt-8 md:flex-row {}">"#,
                        theme.border
                    ),
                    &join([copyright, social]),
                    "</div>",
                ),
            ])
        }
        FooterVariant::Centered => wrap(
            r#"<div className="flex flex-col items-center gap-6 text-center">"#,
            &join([
                wrap("<div>", &join([brand(env), tagline]), "</div>"),
                wrap(
                    r#"<nav className="flex flex-wrap justify-center gap-6">"#,
                    &join(footer.columns.iter().flat_map(|c| &c.links).map(|l| {
                        format!(
                            r#"<a href="{}" className="text-sm {}">{}</a>"#,
                            escape::href(&l.href),
                            theme.body,
                            escape::jsx_text(&l.label)
                        )
                    })),
                    "</nav>",
                ),
                social,
                copyright,
            ]),
            "</div>",
        ),
    };

    format!(
        r#"export default function Footer() {{
  return (
    <footer className="border-t {border} {bg}">
      <div className="mx-auto max-w-7xl px-6 py-12 lg:px-8">
{}
      </div>
    </footer>
  );
}}
"#,
        crate::render::indent(&inner, 8),
        border = theme.border,
        bg = theme.section_alt_bg,
    )
}

/// Whether a hero layout shows a generated image
#[must_use]
pub const fn hero_has_image(variant: HeroVariant) -> bool {
    matches!(
        variant,
        HeroVariant::Split | HeroVariant::ImageBackground | HeroVariant::VideoStyle | HeroVariant::Stacked
    )
}

/// Hero component
#[must_use]
pub fn hero(hero: &Hero, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    let theme = env.theme;
    let on_image = matches!(hero.variant, HeroVariant::ImageBackground | HeroVariant::VideoStyle | HeroVariant::Gradient);
    let (headline_color, sub_color) = if on_image {
        ("text-white", "text-white/90")
    } else {
        (theme.heading.as_str(), theme.body.as_str())
    };

    let buttons = join([
        button(&hero.cta, &theme.primary_button),
        hero.secondary_cta
            .as_ref()
            .map(|c| {
                let class = if on_image {
                    "inline-flex items-center justify-center rounded-lg border border-white/70 px-6 py-3 font-semibold text-white hover:bg-white/10"
                } else {
                    theme.secondary_button.as_str()
                };
                button(c, class)
            })
            .unwrap_or_default(),
    ]);
    let text = |align: &str| {
        join([
            format!(
                r#"<h1 className="{} text-4xl font-extrabold tracking-tight sm:text-6xl {headline_color}">{}</h1>"#,
                theme.heading_font,
                escape::jsx_text(&hero.headline)
            ),
            paragraph(Some(hero.subheadline.as_str()), &format!("mt-6 text-lg leading-8 {sub_color}")),
            wrap(&format!(r#"<div className="mt-10 flex flex-wrap gap-4 {align}">"#), &buttons, "</div>"),
        ])
    };

    let image = if hero_has_image(hero.variant) {
        ctx.image(&hero.image_description, "h-full w-full", theme)
    } else {
        String::new()
    };

    let (section_class, inner) = match hero.variant {
        HeroVariant::Centered => (
            format!("pt-32 pb-20 {}", theme.section_bg),
            wrap(r#"<div className="mx-auto max-w-3xl text-center">"#, &text("justify-center"), "</div>"),
        ),
        HeroVariant::Minimal => (
            format!("pt-40 pb-24 {}", theme.section_bg),
            wrap(r#"<div className="max-w-2xl">"#, &text(""), "</div>"),
        ),
        HeroVariant::Gradient => (
            format!("pt-32 pb-24 {}", theme.gradient),
            wrap(r#"<div className="mx-auto max-w-3xl text-center">"#, &text("justify-center"), "</div>"),
        ),
        HeroVariant::Split => (
            format!("pt-32 pb-20 {}", theme.section_bg),
            wrap(
                r#"<div className="grid items-center gap-12 lg:grid-cols-2">"#,
                &join([
                    wrap("<div>", &text(""), "</div>"),
                    wrap(r#"<div className="h-[28rem] overflow-hidden rounded-3xl shadow-xl">"#, &image, "</div>"),
                ]),
                "</div>",
            ),
        ),
        HeroVariant::Stacked => (
            format!("pt-32 pb-20 {}", theme.section_bg),
            join([
                wrap(r#"<div className="mx-auto max-w-3xl text-center">"#, &text("justify-center"), "</div>"),
                wrap(r#"<div className="mt-16 h-[32rem] overflow-hidden rounded-3xl shadow-2xl">"#, &image, "</div>"),
            ]),
        ),
        HeroVariant::ImageBackground | HeroVariant::VideoStyle => {
            let overlay = if hero.variant == HeroVariant::VideoStyle {
                "bg-gradient-to-t from-black/80 via-black/40 to-black/20"
            } else {
                "bg-black/50"
            };
            (
                "relative flex min-h-screen items-center overflow-hidden".to_string(),
                join([
                    wrap(r#"<div className="absolute inset-0 -z-10">"#, &image, "</div>"),
                    format!(r#"<div className="absolute inset-0 -z-10 {overlay}" />"#),
                    wrap(r#"<div className="max-w-3xl">"#, &text(""), "</div>"),
                ]),
            )
        }
    };

    format!(
        r#"export default function Hero() {{
  return (
    <section id="home" className="{section_class}">
      <div className="mx-auto max-w-7xl px-6 lg:px-8">
{}
      </div>
    </section>
  );
}}
"#,
        crate::render::indent(&inner, 8)
    )
}
