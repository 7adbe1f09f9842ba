//! GitHub REST collaborator for the portfolio: commit activity, profile and
//! repository listings. Everything here is read-only.

mod client;
mod error;
mod models;
mod transport;

pub use client::{GitHubClient, ProfileSnapshot, AUTHENTICATED_REPO_LIMIT, PUBLIC_REPO_LIMIT};
pub use error::{ApiError, ApiResult};
pub use models::{CommitWeek, GitHubRepo, GitHubUser};
pub use transport::{
    GitHubRequest, GitHubTransport, RawResponse, ReqwestTransport, DEFAULT_API_BASE_URL,
};
