//! Latest posts

use super::{component, heading, join, paragraph, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{BlogPost, BlogPreviewSection, BlogPreviewVariant};

pub(super) fn render(
    section: &BlogPreviewSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let posts = match section.variant {
        BlogPreviewVariant::Grid => wrap(
            r#"<div className="grid gap-8 md:grid-cols-3">"#,
            &join(section.posts.iter().map(|p| card(p, env, ctx))),
            "</div>",
        ),
        BlogPreviewVariant::List => wrap(
            &format!(r#"<div className="mx-auto max-w-3xl divide-y {}">"#, theme.border),
            &join(section.posts.iter().map(|p| {
                wrap(r#"<article className="py-8">"#, &text(p, env), "</article>")
            })),
            "</div>",
        ),
        BlogPreviewVariant::Featured => match section.posts.split_first() {
            Some((lead, rest)) => join([
                wrap(
                    &format!(r#"<article className="grid overflow-hidden lg:grid-cols-2 {}">"#, theme.card),
                    &join([
                        post_image(lead, "h-80 w-full lg:h-full", env, ctx),
                        wrap(r#"<div className="p-8">"#, &text(lead, env), "</div>"),
                    ]),
                    "</article>",
                ),
                wrap(
                    r#"<div className="mt-8 grid gap-8 md:grid-cols-2">"#,
                    &join(rest.iter().map(|p| card(p, env, ctx))),
                    "</div>",
                ),
            ]),
            None => String::new(),
        },
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        posts,
    ]);
    component(target, &theme.section_alt_bg, &body)
}

fn post_image(post: &BlogPost, class: &str, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    post.image_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| ctx.image(d, class, env.theme))
        .unwrap_or_default()
}

fn meta(post: &BlogPost, env: &RenderEnv<'_>) -> String {
    let parts: Vec<String> = [post.date.as_deref(), post.author.as_deref()]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .map(escape::jsx_text)
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!(r#"<p className="text-sm {}">{}</p>"#, env.theme.muted, parts.join(" &middot; "))
}

fn text(post: &BlogPost, env: &RenderEnv<'_>) -> String {
    let theme = env.theme;
    let href = escape::href(post.href.as_deref().unwrap_or("#"));
    join([
        meta(post, env),
        format!(
            r#"<h3 className="mt-2 {} text-xl font-semibold {}"><a href="{href}" className="hover:underline">{}</a></h3>"#,
            theme.heading_font,
            theme.heading,
            escape::jsx_text(&post.title)
        ),
        paragraph(Some(post.excerpt.as_str()), &format!("mt-3 {}", theme.body)),
        format!(
            r#"<a href="{href}" className="mt-4 inline-block text-sm font-semibold {}">Read more &rarr;</a>"#,
            theme.primary_text
        ),
    ])
}

fn card(post: &BlogPost, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    wrap(
        &format!(r#"<article className="overflow-hidden {}">"#, env.theme.card),
        &join([
            post_image(post, "h-48 w-full", env, ctx),
            wrap(r#"<div className="p-6">"#, &text(post, env), "</div>"),
        ]),
        "</article>",
    )
}
