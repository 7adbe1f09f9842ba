//! Profile, repository and statistics cards fed by the GitHub listing.

pub mod languages;
pub mod stats;
mod view;

use api::{GitHubClient, ProfileSnapshot};
use tracing::{debug, warn};

use crate::core::config::PortfolioConfig;

pub use languages::{skill_badges, LanguageGlyph, MAIN_SKILLS, MAX_SKILL_BADGES};
pub use stats::{repo_highlights, ProfileStats, RepoHighlight, HIGHLIGHTED_REPOS};
pub use view::{GitHubStatsPanel, ProfileCard, RepoHighlights, SkillBadges};

/// Fetch the profile once; missing data renders with defaults.
pub async fn load_profile(config: &PortfolioConfig) -> ProfileSnapshot {
    let Some(subject) = config.subject() else {
        debug!("no GitHub subject configured; profile cards use defaults");
        return ProfileSnapshot::default();
    };

    match GitHubClient::with_base_url(config.api_base_url()) {
        Ok(client) => client.profile(subject, config.credential()).await,
        Err(error) => {
            warn!(%error, "GitHub client unavailable; profile cards use defaults");
            ProfileSnapshot::default()
        }
    }
}
