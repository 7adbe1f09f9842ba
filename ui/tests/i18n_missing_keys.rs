//! Locale parity for the page bundles: `fr-FR` must define exactly the
//! messages of the `en-US` fallback, with the same `$variables`, so switching
//! language never drops a card title or a counter.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/folio-ui.ftl");

const TRANSLATIONS: &[(&str, &str)] = &[("fr-FR", FR_FR)];

/// Message id to the variables its value references. Indented lines
/// (select variants, closing braces) belong to the preceding message.
fn messages(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let body = if raw.starts_with(char::is_whitespace) {
            line
        } else if let Some((id, value)) = line.split_once('=') {
            let id = id.trim().to_string();
            assert!(!out.contains_key(&id), "duplicate message `{id}`");
            out.insert(id.clone(), BTreeSet::new());
            current = Some(id);
            value
        } else {
            line
        };

        let Some(id) = current.as_ref() else {
            continue;
        };
        let vars = out.entry(id.clone()).or_default();
        for chunk in body.split('$').skip(1) {
            let name: String = chunk
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            if !name.is_empty() {
                vars.insert(name);
            }
        }
    }

    out
}

#[test]
fn translations_define_every_fallback_message() {
    let fallback = messages(EN_US);
    assert!(!fallback.is_empty(), "en-US bundle has no messages");

    let mut failures = Vec::new();
    for (locale, src) in TRANSLATIONS {
        let translated = messages(src);
        let missing: Vec<_> = fallback.keys().filter(|id| !translated.contains_key(*id)).collect();
        let extra: Vec<_> = translated.keys().filter(|id| !fallback.contains_key(*id)).collect();
        if !missing.is_empty() || !extra.is_empty() {
            failures.push(format!("{locale}: missing {missing:?}, unknown {extra:?}"));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn translations_keep_fallback_variables() {
    let fallback = messages(EN_US);

    let mut mismatches = Vec::new();
    for (locale, src) in TRANSLATIONS {
        for (id, vars) in messages(src) {
            if let Some(expected) = fallback.get(&id) {
                if *expected != vars {
                    mismatches.push(format!("{locale} {id}: {vars:?}, en-US {expected:?}"));
                }
            }
        }
    }

    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

#[test]
fn parameterized_messages_declare_their_arguments() {
    let fallback = messages(EN_US);
    let vars = |id: &str| -> Vec<String> { fallback[id].iter().cloned().collect() };

    assert_eq!(vars("heatmap-cell-title"), ["count", "date"]);
    assert_eq!(vars("heatmap-caption-live"), ["days"]);
    assert_eq!(vars("game-summary"), ["clicks", "score"]);
    assert_eq!(vars("game-start"), ["seconds"]);
}
