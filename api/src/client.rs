use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::models::{CommitWeek, GitHubRepo, GitHubUser};
use crate::transport::{GitHubRequest, GitHubTransport, ReqwestTransport};

/// Repositories requested when a credential is available (all types).
pub const AUTHENTICATED_REPO_LIMIT: u32 = 10;
/// Repositories requested on the anonymous fallback path.
pub const PUBLIC_REPO_LIMIT: u32 = 6;

/// Profile data shown on the page. Both halves may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSnapshot {
    pub user: Option<GitHubUser>,
    pub repos: Vec<GitHubRepo>,
}

#[derive(Debug, Clone)]
pub struct GitHubClient<T = ReqwestTransport> {
    transport: T,
}

impl GitHubClient<ReqwestTransport> {
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        Ok(Self::new(ReqwestTransport::new(base_url)?))
    }
}

impl<T: GitHubTransport> GitHubClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Weekly commit activity for the subject's profile repository
    /// (`{subject}/{subject}`), oldest week first.
    pub async fn commit_activity(
        &self,
        subject: &str,
        credential: Option<&str>,
    ) -> ApiResult<Vec<CommitWeek>> {
        let subject = validate_subject(subject)?;
        let path = format!("repos/{subject}/{subject}/stats/commit_activity");
        self.get_json(GitHubRequest::new(path, credential)).await
    }

    pub async fn user(&self, subject: &str, credential: Option<&str>) -> ApiResult<GitHubUser> {
        let subject = validate_subject(subject)?;
        self.get_json(GitHubRequest::new(format!("users/{subject}"), credential))
            .await
    }

    /// Most recently updated repositories. `include_all` also lists repos the
    /// subject is a member of, which only makes sense with a credential.
    pub async fn repos(
        &self,
        subject: &str,
        credential: Option<&str>,
        per_page: u32,
        include_all: bool,
    ) -> ApiResult<Vec<GitHubRepo>> {
        let subject = validate_subject(subject)?;
        let mut path = format!("users/{subject}/repos?sort=updated&per_page={per_page}");
        if include_all {
            path.push_str("&type=all");
        }
        self.get_json(GitHubRequest::new(path, credential)).await
    }

    /// Fetch the user and repository listing, trying the credential first and
    /// the anonymous API second. Never fails; missing pieces stay empty.
    pub async fn profile(&self, subject: &str, credential: Option<&str>) -> ProfileSnapshot {
        if let Some(credential) = credential {
            match self.authenticated_profile(subject, credential).await {
                Ok(snapshot) => return snapshot,
                Err(error) => {
                    warn!(%error, subject, "authenticated profile fetch failed; retrying anonymously");
                }
            }
        } else {
            debug!(subject, "no credential configured; fetching public profile");
        }

        let mut snapshot = ProfileSnapshot::default();
        match self.user(subject, None).await {
            Ok(user) => snapshot.user = Some(user),
            Err(error) => {
                warn!(%error, subject, "public profile fetch failed");
                return snapshot;
            }
        }
        match self.repos(subject, None, PUBLIC_REPO_LIMIT, false).await {
            Ok(repos) => snapshot.repos = repos,
            Err(error) => warn!(%error, subject, "public repository listing failed"),
        }
        snapshot
    }

    async fn authenticated_profile(
        &self,
        subject: &str,
        credential: &str,
    ) -> ApiResult<ProfileSnapshot> {
        let user = self.user(subject, Some(credential)).await?;
        let repos = self
            .repos(subject, Some(credential), AUTHENTICATED_REPO_LIMIT, true)
            .await?;
        Ok(ProfileSnapshot {
            user: Some(user),
            repos,
        })
    }

    async fn get_json<D: DeserializeOwned>(&self, request: GitHubRequest) -> ApiResult<D> {
        let path = request.path.clone();
        let response = self.transport.get(request).await?;
        if !response.is_success() {
            return Err(ApiError::UpstreamRejection {
                status: response.status,
                body: truncate_for_error(&response.body),
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|err| ApiError::MalformedResponse(format!("{path}: {err}")))
    }
}

fn validate_subject(subject: &str) -> ApiResult<&str> {
    let subject = subject.trim();
    let valid = !subject.is_empty()
        && subject
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(subject)
    } else {
        Err(ApiError::Configuration(format!(
            "invalid GitHub subject identifier: {subject:?}"
        )))
    }
}

fn truncate_for_error(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.chars().count() <= MAX_LEN {
        body.to_owned()
    } else {
        format!("{}...", body.chars().take(MAX_LEN).collect::<String>())
    }
}
