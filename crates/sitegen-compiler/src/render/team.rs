//! Team members

use super::{component, heading, join, paragraph, wrap, RenderContext, RenderEnv, Target};
use crate::escape;
use sitegen_ir::{TeamMember, TeamSection, TeamVariant};

pub(super) fn render(
    section: &TeamSection,
    target: &Target<'_>,
    env: &RenderEnv<'_>,
    ctx: &mut RenderContext,
) -> String {
    let theme = env.theme;
    let members = match section.variant {
        TeamVariant::Grid => wrap(
            r#"<div className="grid gap-10 sm:grid-cols-2 lg:grid-cols-4">"#,
            &join(section.members.iter().map(|m| {
                wrap(
                    r#"<div className="text-center">"#,
                    &join([
                        portrait(m, "mx-auto h-40 w-40 rounded-full", env, ctx),
                        name_role(m, env, "mt-4"),
                    ]),
                    "</div>",
                )
            })),
            "</div>",
        ),
        TeamVariant::List => wrap(
            &format!(r#"<ul className="mx-auto max-w-3xl divide-y {}">"#, theme.border),
            &join(section.members.iter().map(|m| {
                wrap(
                    r#"<li className="flex items-start gap-6 py-6">"#,
                    &join([
                        portrait(m, "h-20 w-20 flex-none rounded-full", env, ctx),
                        wrap(
                            "<div>",
                            &join([
                                name_role(m, env, ""),
                                paragraph(m.bio.as_deref(), &format!("mt-2 text-sm {}", theme.body)),
                            ]),
                            "</div>",
                        ),
                    ]),
                    "</li>",
                )
            })),
            "</ul>",
        ),
        TeamVariant::Cards => wrap(
            r#"<div className="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">"#,
            &join(section.members.iter().map(|m| {
                wrap(
                    &format!(r#"<div className="overflow-hidden {}">"#, theme.card),
                    &join([
                        portrait(m, "h-64 w-full", env, ctx),
                        wrap(
                            r#"<div className="p-6">"#,
                            &join([
                                name_role(m, env, ""),
                                paragraph(m.bio.as_deref(), &format!("mt-3 text-sm {}", theme.body)),
                            ]),
                            "</div>",
                        ),
                    ]),
                    "</div>",
                )
            })),
            "</div>",
        ),
    };

    let body = join([
        heading(&section.title, section.subtitle.as_deref(), env),
        members,
    ]);
    component(target, &theme.section_bg, &body)
}

fn portrait(member: &TeamMember, class: &str, env: &RenderEnv<'_>, ctx: &mut RenderContext) -> String {
    match member.image_description.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(description) => ctx.image(description, class, env.theme),
        None => {
            let initials: String = member
                .name
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .take(2)
                .collect();
            format!(
                r#"<div className="{class} flex items-center justify-center text-2xl font-bold text-white {}">{}</div>"#,
                env.theme.gradient,
                escape::jsx_text(&initials)
            )
        }
    }
}

fn name_role(member: &TeamMember, env: &RenderEnv<'_>, spacing: &str) -> String {
    format!(
        r#"<h3 className="{spacing} text-lg font-semibold {}">{}</h3>
<p className="{}">{}</p>"#,
        env.theme.heading,
        escape::jsx_text(&member.name),
        env.theme.primary_text,
        escape::jsx_text(&member.role)
    )
}
