use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Brand bar for the single-page portfolio.
///
/// Section links are plain in-page anchors, so no platform `Route` is needed.
/// The language selector updates the global language signal (when the
/// platform provides one through context) which re-renders every view
/// subscribed to it; every render pulls fresh localized strings via `t!`.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain global language code signal if the platform crate provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(true) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Ok(false) => tracing::warn!(lang = %val, "language not available"),
            Err(error) => tracing::warn!(%error, lang = %val, "language switch failed"),
        }
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t!("brand-name")} }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#activity", {t!("nav-activity")} }
                    a { class: "navbar__link", href: "#game", {t!("nav-game")} }
                    a { class: "navbar__link", href: "#repos", {t!("nav-repos")} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
