use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::PortfolioConfig;
use ui::core::platform::Platform;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(error) = dioxus::logger::init(level) {
        eprintln!("logger already installed: {error}");
    }
    info!(platform = Platform::current().label(), "starting folio");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(PortfolioConfig::from_env);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared navbar, bound to the web `Route`
/// enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
