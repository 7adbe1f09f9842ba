use api::ProfileSnapshot;
use dioxus::prelude::*;
use tracing::trace;

use crate::activity::ActivityHeatmap;
use crate::profile::{load_profile, GitHubStatsPanel, ProfileCard, RepoHighlights, SkillBadges};
use crate::t;
use crate::tasks::click::ClickChallengeView;

use super::use_portfolio_config;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());
    trace!(lang = %lang_current, "home render");

    let config = use_portfolio_config();
    let profile = {
        let config = config.clone();
        use_resource(move || {
            let config = config.clone();
            async move { load_profile(&config).await }
        })
    };

    let snapshot: Option<ProfileSnapshot> = (*profile.read()).clone();
    let loading = snapshot.is_none();
    let ProfileSnapshot { user, repos } = snapshot.unwrap_or_default();
    let handle = config.display_subject().to_string();

    rsx! {
        div { class: "page page-home",
            header { class: "card hero",
                h1 { class: "hero__title", {t!("home-title")} }
                p { class: "hero__subtitle", {t!("home-subtitle")} }
                div { class: "badge-list",
                    span { class: "badge badge--green", {t!("home-badge-available")} }
                    span { class: "badge badge--blue", {t!("home-badge-veko")} }
                    span { class: "badge badge--purple", {t!("home-badge-cosmochat")} }
                }
            }

            div { class: "bento",
                div { class: "bento__cell bento__cell--narrow",
                    ProfileCard { user: user.clone(), handle }
                }

                section { class: "card about-card bento__cell bento__cell--wide",
                    h2 { class: "card__title", {t!("about-title")} }
                    p { class: "about-card__body", {t!("about-body")} }
                    div { class: "badge-list",
                        span { class: "badge badge--outline badge--blue", {t!("about-badge-veko")} }
                        span { class: "badge badge--outline badge--purple", {t!("about-badge-cosmochat")} }
                        span { class: "badge badge--outline badge--green", {t!("about-badge-glados")} }
                        span { class: "badge badge--outline badge--orange", {t!("about-badge-alfycore")} }
                    }
                }

                section { class: "card projects-card bento__cell bento__cell--full",
                    h2 { class: "card__title", {t!("projects-title")} }
                    div { class: "projects-card__grid",
                        {project_card(
                            "blue",
                            "Veko.js",
                            t!("project-veko-status"),
                            t!("project-veko-description"),
                            t!("project-veko-timeline"),
                            &["Node.js", "Express", "EJS"],
                        )}
                        {project_card(
                            "purple",
                            "CosmoChat",
                            t!("project-cosmochat-status"),
                            t!("project-cosmochat-description"),
                            t!("project-cosmochat-timeline"),
                            &["TypeScript", "Docker", "WebRTC"],
                        )}
                        {project_card(
                            "green",
                            "GLaDOS",
                            t!("project-glados-status"),
                            t!("project-glados-description"),
                            t!("project-glados-timeline"),
                            &["Discord.js", "AI", "Node.js"],
                        )}
                    }
                }

                div { class: "bento__cell bento__cell--half",
                    SkillBadges { repos: repos.clone() }
                }

                section { class: "card contact-card bento__cell bento__cell--half",
                    h2 { class: "card__title", {t!("contact-title")} }
                    ul { class: "contact-card__list",
                        li {
                            a { class: "contact-card__link", href: "mailto:contact@alfycore.org", "contact@alfycore.org" }
                        }
                        li {
                            a {
                                class: "contact-card__link",
                                href: "https://github.com/{config.display_subject()}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "github.com/{config.display_subject()}"
                            }
                        }
                        li { {t!("contact-location")} }
                    }
                }

                section { class: "card activity-card bento__cell bento__cell--full", id: "activity",
                    h2 { class: "card__title", {t!("activity-title")} }
                    ActivityHeatmap { config: config.clone() }
                }

                section { class: "card agency-card bento__cell bento__cell--narrow",
                    h2 { class: "card__title", {t!("agency-title")} }
                    div { class: "agency-card__grid",
                        {agency_tile("blue", "15+", t!("agency-projects"))}
                        {agency_tile("purple", "8", t!("agency-clients"))}
                        {agency_tile("green", "7", t!("agency-experts"))}
                        {agency_tile("yellow", "4.9/5", t!("agency-rating"))}
                    }
                }

                section { class: "card game-card bento__cell bento__cell--narrow", id: "game",
                    h2 { class: "card__title", {t!("game-title")} }
                    ClickChallengeView {}
                }

                div { class: "bento__cell bento__cell--narrow",
                    RepoHighlights { repos, loading }
                }

                div { class: "bento__cell bento__cell--half",
                    GitHubStatsPanel { user }
                }

                section { class: "card interests-card bento__cell bento__cell--half",
                    h2 { class: "card__title", {t!("interests-title")} }
                    ul { class: "interests-card__grid",
                        li { class: "interests-card__item", {t!("interest-frameworks")} }
                        li { class: "interests-card__item", {t!("interest-bots")} }
                        li { class: "interests-card__item", {t!("interest-chat")} }
                        li { class: "interests-card__item", {t!("interest-ai")} }
                        li { class: "interests-card__item", {t!("interest-self-hosting")} }
                        li { class: "interests-card__item", {t!("interest-entrepreneurship")} }
                    }
                }
            }
        }
    }
}

fn project_card(
    accent: &str,
    name: &str,
    status: String,
    description: String,
    timeline: String,
    tags: &[&str],
) -> Element {
    rsx! {
        article { class: "project project--{accent}",
            div { class: "project__header",
                h3 { class: "project__name", "{name}" }
                span { class: "badge badge--{accent}", "{status}" }
            }
            p { class: "project__description", "{description}" }
            div { class: "badge-list",
                for tag in tags.iter() {
                    span { key: "{tag}", class: "badge badge--outline", "{tag}" }
                }
            }
            p { class: "project__timeline", "{timeline}" }
        }
    }
}

fn agency_tile(accent: &str, value: &str, label: String) -> Element {
    rsx! {
        div { class: "agency-card__tile",
            span { class: "agency-card__value agency-card__value--{accent}", "{value}" }
            span { class: "agency-card__label", "{label}" }
        }
    }
}
