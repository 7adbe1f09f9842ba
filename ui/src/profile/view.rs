use api::{GitHubRepo, GitHubUser};
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::languages::{skill_badges, LanguageGlyph};
use super::stats::{repo_highlights, ProfileStats, RepoHighlight};

const AVATAR_PLACEHOLDER: &str = "/api/placeholder/80/80";

#[component]
pub fn ProfileCard(user: Option<GitHubUser>, handle: String) -> Element {
    let avatar = user
        .as_ref()
        .map(|u| u.avatar_url.clone())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string());
    let login = user
        .as_ref()
        .map(|u| u.login.clone())
        .filter(|login| !login.is_empty())
        .unwrap_or(handle);

    rsx! {
        section { class: "card profile-card",
            img { class: "profile-card__avatar", src: "{avatar}", alt: t!("profile-name") }
            h3 { class: "profile-card__name", {t!("profile-name")} }
            p { class: "profile-card__handle", "@{login}" }
            ul { class: "profile-card__facts",
                li { {t!("profile-location")} }
                li { {t!("profile-organisation")} }
                li { {t!("profile-experience")} }
            }
        }
    }
}

#[component]
pub fn SkillBadges(repos: Vec<GitHubRepo>) -> Element {
    let badges: Vec<(String, &'static str)> = skill_badges(&repos)
        .into_iter()
        .map(|skill| {
            let glyph = LanguageGlyph::for_language(&skill).symbol();
            (skill, glyph)
        })
        .collect();

    rsx! {
        section { class: "card skills-card",
            h2 { class: "card__title", {t!("skills-title")} }
            ul { class: "badge-list",
                for (skill, glyph) in badges {
                    li { key: "{skill}", class: "badge",
                        span { class: "badge__glyph", "{glyph}" }
                        span { "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RepoHighlights(repos: Vec<GitHubRepo>, loading: bool) -> Element {
    let highlights = repo_highlights(&repos);

    rsx! {
        section { class: "card repos-card", id: "repos",
            h2 { class: "card__title", {t!("repos-title")} }
            if loading {
                p { class: "card__placeholder", {t!("repos-loading")} }
            } else if highlights.is_empty() {
                p { class: "card__placeholder", {t!("repos-empty")} }
            } else {
                for repo in highlights {
                    {render_repo(repo)}
                }
            }
        }
    }
}

fn render_repo(repo: RepoHighlight) -> Element {
    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| t!("repos-description-fallback"));
    let language = repo
        .language
        .clone()
        .map(|language| (LanguageGlyph::for_language(&language).symbol(), language));

    rsx! {
        article { class: "repo",
            h4 { class: "repo__name",
                "{repo.name}"
                a {
                    class: "repo__link",
                    href: "{repo.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "↗"
                }
            }
            p { class: "repo__description", "{description}" }
            if let Some((glyph, language)) = language {
                span { class: "badge badge--outline",
                    span { class: "badge__glyph", "{glyph}" }
                    span { "{language}" }
                }
            }
            div { class: "repo__counters",
                span { title: t!("repos-stars"), "★ {repo.stars}" }
                span { title: t!("repos-forks"), "⑂ {repo.forks}" }
                span { title: t!("repos-watchers"), "👁 {repo.watchers}" }
            }
        }
    }
}

#[component]
pub fn GitHubStatsPanel(user: Option<GitHubUser>) -> Element {
    let stats = ProfileStats::from_user(user.as_ref());

    rsx! {
        section { class: "card stats-card",
            h2 { class: "card__title", {t!("stats-title")} }
            div { class: "stats-card__grid",
                {stat_tile("stats-card__value--repos", stats.public_repos, t!("stats-repositories"))}
                {stat_tile("stats-card__value--followers", stats.followers, t!("stats-followers"))}
                {stat_tile("stats-card__value--following", stats.following, t!("stats-following"))}
                div { class: "stats-card__tile",
                    span { class: "stats-card__value stats-card__value--years", "4+" }
                    span { class: "stats-card__label", {t!("stats-years")} }
                }
            }
        }
    }
}

fn stat_tile(modifier: &str, value: u32, label: String) -> Element {
    rsx! {
        div { class: "stats-card__tile",
            span { class: "stats-card__value {modifier}", "{format::format_count(value)}" }
            span { class: "stats-card__label", "{label}" }
        }
    }
}
