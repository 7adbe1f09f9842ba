//! Page configuration: whose activity to show and how to reach GitHub.
//!
//! Values come from the environment at build time (`option_env!`), so web
//! bundles carry them without a server. Native builds additionally honour a
//! run-time `FOLIO_GITHUB_TOKEN`, which wins over the baked-in one.
//!
//! | variable             | meaning                       | default                  |
//! |----------------------|-------------------------------|--------------------------|
//! | `FOLIO_GITHUB_USER`  | subject identifier            | `wiltark`                |
//! | `FOLIO_GITHUB_TOKEN` | access credential             | none                     |
//! | `FOLIO_GITHUB_API`   | REST API base URL             | `https://api.github.com` |
//!
//! Blank values count as unset.

use std::fmt;

use api::DEFAULT_API_BASE_URL;

pub const DEFAULT_SUBJECT: &str = "wiltark";
pub const TOKEN_ENV: &str = "FOLIO_GITHUB_TOKEN";

#[derive(Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    subject_id: Option<String>,
    credential: Option<String>,
    api_base_url: String,
}

/// Raw inputs before blank-filtering and defaults are applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources<'a> {
    pub subject: Option<&'a str>,
    pub build_token: Option<&'a str>,
    pub runtime_token: Option<&'a str>,
    pub api_base_url: Option<&'a str>,
}

impl PortfolioConfig {
    pub fn from_env() -> Self {
        let runtime_token = runtime_token();
        Self::resolve(ConfigSources {
            subject: option_env!("FOLIO_GITHUB_USER"),
            build_token: option_env!("FOLIO_GITHUB_TOKEN"),
            runtime_token: runtime_token.as_deref(),
            api_base_url: option_env!("FOLIO_GITHUB_API"),
        })
    }

    pub fn resolve(sources: ConfigSources<'_>) -> Self {
        // An explicitly empty user disables fetching; an unset one uses the default.
        let subject_id = match sources.subject {
            Some(raw) => non_blank(Some(raw)),
            None => Some(DEFAULT_SUBJECT.to_string()),
        };
        let credential = non_blank(sources.runtime_token).or_else(|| non_blank(sources.build_token));
        let api_base_url =
            non_blank(sources.api_base_url).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            subject_id,
            credential,
            api_base_url,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Subject shown in handles and links when none is configured.
    pub fn display_subject(&self) -> &str {
        self.subject().unwrap_or(DEFAULT_SUBJECT)
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self::resolve(ConfigSources::default())
    }
}

impl fmt::Debug for PortfolioConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PortfolioConfig")
            .field("subject_id", &self.subject_id)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_token() -> Option<String> {
    std::env::var(TOKEN_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_token() -> Option<String> {
    None
}
