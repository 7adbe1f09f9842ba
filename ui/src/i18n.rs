//! Localized copy for the portfolio page.
//!
//! Every visible string lives in `i18n/<lang>/folio-ui.ftl` (`en-US` is the
//! fallback, `fr-FR` the translation) and is embedded at compile time, so the
//! web bundle needs no asset fetch. Views read strings through [`t!`]; the
//! navbar switches languages through [`set_language`].
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Lookup through the shared loader: `t!("game-score")`,
/// `t!("game-summary", score = 120, clicks = 12)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the package name: `fl!` resolves the fallback bundle from it.
const DOMAIN: &str = "folio-ui";
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("fallback language identifier is valid");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles matching the visitor's locale. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(error) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%error, "locale negotiation failed; using {FALLBACK_LANGUAGE}");
        }
    });
}

/// Switch to an embedded language. Returns `Ok(false)` and leaves the loader
/// untouched for tags that are malformed or not shipped with the page.
pub fn set_language(tag: &str) -> Result<bool, I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring malformed language tag");
        return Ok(false);
    };
    if !available_languages().iter().any(|code| *code == lang.to_string()) {
        debug!(tag, "language not shipped with the page");
        return Ok(false);
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    Ok(true)
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Language folders embedded under `i18n/`, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_page_languages_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "fr-FR"]);
    }

    #[test]
    fn fallback_copy_resolves() {
        init();
        assert!(set_language(FALLBACK_LANGUAGE).unwrap());
        assert_eq!(fl!(&*LOADER, "game-score"), "Score");
        assert_eq!(current_language(), FALLBACK_LANGUAGE);
    }

    #[test]
    fn unknown_or_malformed_tags_are_rejected() {
        init();
        assert!(!set_language("zz-ZZ").unwrap());
        assert!(!set_language("not a tag").unwrap());
    }
}
