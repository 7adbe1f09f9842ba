//! Numbers and highlights shown in the GitHub cards.

use api::{GitHubRepo, GitHubUser};

/// Repositories featured on the page.
pub const HIGHLIGHTED_REPOS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl ProfileStats {
    pub fn from_user(user: Option<&GitHubUser>) -> Self {
        user.map(|user| Self {
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
        })
        .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHighlight {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub url: String,
}

impl From<&GitHubRepo> for RepoHighlight {
    fn from(repo: &GitHubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            description: repo
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            watchers: repo.watchers_count,
            url: repo.html_url.clone(),
        }
    }
}

pub fn repo_highlights(repos: &[GitHubRepo]) -> Vec<RepoHighlight> {
    repos
        .iter()
        .take(HIGHLIGHTED_REPOS)
        .map(RepoHighlight::from)
        .collect()
}
