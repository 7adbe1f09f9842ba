mod home;

pub use home::Home;

use dioxus::prelude::*;

use crate::core::config::PortfolioConfig;

/// Configuration provided by the launcher, or read from the build
/// environment when the view is mounted on its own.
pub fn use_portfolio_config() -> PortfolioConfig {
    use_hook(|| try_consume_context::<PortfolioConfig>().unwrap_or_else(PortfolioConfig::from_env))
}
