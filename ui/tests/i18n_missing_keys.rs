//! Locale key checks.
//!
//! `en-US` is the reference bundle: every `t!` key used under `src/` must be
//! defined there, every other locale must define the same key set, and no
//! bundle may define a key twice.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/scholarmetrics-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/scholarmetrics-ui.ftl");

/// Message ids in definition order. Comments, attributes and continuation
/// lines are skipped; only `id = ...` lines count.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .collect()
}

fn defined(src: &str) -> BTreeSet<&str> {
    message_ids(src).into_iter().collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = std::fs::read_dir(dir).expect("readable source dir");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Keys passed as the literal first argument of `t!(...)`.
fn used_keys(src: &str) -> Vec<String> {
    const CALL: &str = "t!(\"";
    src.match_indices(CALL)
        .filter(|(at, _)| {
            // `format!(`, `print!(` and friends also end in `t!(`.
            !src[..*at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
        .filter_map(|(at, _)| {
            src[at + CALL.len()..]
                .split_once('"')
                .map(|(key, _)| key.to_string())
        })
        .collect()
}

#[test]
fn every_used_key_is_defined_in_fallback() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_sources(&src_dir, &mut files);

    let fallback = defined(EN_US);
    let mut missing = BTreeSet::new();
    let mut seen = 0;
    for file in &files {
        let text = std::fs::read_to_string(file).expect("readable source file");
        for key in used_keys(&text) {
            seen += 1;
            if !fallback.contains(key.as_str()) {
                missing.insert(format!("{key} ({})", file.display()));
            }
        }
    }

    assert!(seen > 50, "expected the screens to use t!, found {seen} keys");
    assert!(
        missing.is_empty(),
        "keys used but not defined in en-US:\n  {}",
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn locales_define_the_same_keys() {
    let fallback = defined(EN_US);
    let french = defined(FR_FR);

    let missing: Vec<_> = fallback.difference(&french).collect();
    let extra: Vec<_> = french.difference(&fallback).collect();
    assert!(missing.is_empty(), "fr-FR is missing {missing:?}");
    assert!(extra.is_empty(), "fr-FR defines keys unknown to en-US: {extra:?}");
}

#[test]
fn no_duplicate_definitions() {
    for (locale, src) in [("en-US", EN_US), ("fr-FR", FR_FR)] {
        let ids = message_ids(src);
        let unique = ids.iter().collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), unique.len(), "{locale} defines a key twice");
    }
}

#[test]
fn export_message_keeps_file_placeable() {
    for (locale, src) in [("en-US", EN_US), ("fr-FR", FR_FR)] {
        let line = src
            .lines()
            .find(|l| l.starts_with("explorer-export-done"))
            .unwrap_or_else(|| panic!("{locale} lacks explorer-export-done"));
        assert!(line.contains("{ $file }"), "{locale}: {line}");
    }
}
