//! Localized screen chrome.
//!
//! Fluent bundles live in `i18n/<locale>/scholarmetrics-ui.ftl` and are
//! embedded at compile time; `en-US` is the fallback and the reference for
//! key checks. Sample data and the About copy stay untranslated.
//!
//! Look strings up with `t!("nav-about")` after calling [`init`].
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-dashboard")`, `t!("explorer-export-done", file = name)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml` and the `.ftl` file stem.
pub const DOMAIN: &str = "scholarmetrics-ui";

pub const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, fallback_locale())
});

static INIT: Once = Once::new();

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("invalid language tag `{0}`")]
    InvalidTag(String),
    #[error("no bundle embedded for `{0}`")]
    NotEmbedded(String),
    #[error(transparent)]
    Load(#[from] i18n_embed::I18nEmbedError),
}

fn fallback_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(FALLBACK_LOCALE.as_bytes()).unwrap_or_default()
}

/// Load the bundles preferred by the host, once. Failures leave the
/// fallback strings in place.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "locale selected"),
            Err(err) => tracing::warn!(%err, "locale selection failed; using fallback"),
        }
    });
}

/// Switch the active locale. Only embedded locales are accepted; on error the
/// current strings stay active.
pub fn set_language(tag: &str) -> Result<LanguageIdentifier, LocaleError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
    if !available_languages().iter().any(|code| *code == lang.to_string()) {
        return Err(LocaleError::NotEmbedded(tag.to_string()));
    }
    i18n_embed::select(&*LOADER, &Localizations, &[lang.clone()])?;
    Ok(lang)
}

/// Tag of the locale currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
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
    use std::sync::Mutex;

    use super::*;
    use crate::i18n::fl;

    // Tests below switch the shared loader.
    static LOCALE_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "fr-FR"]);
    }

    #[test]
    fn bundle_files_follow_the_domain() {
        for locale in available_languages() {
            let path = format!("{locale}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
        let config = include_str!("../i18n.toml");
        assert!(
            config.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must name the `{DOMAIN}` domain"
        );
    }

    #[test]
    fn switching_locale_changes_lookups() {
        let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("fr-FR").unwrap();
        assert_eq!(current_language(), "fr-FR");
        assert_eq!(fl!(&*LOADER, "nav-about"), "À propos");

        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "Dashboard");
    }

    #[test]
    fn rejected_tags_keep_current_strings() {
        let _guard = LOCALE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("en-US").unwrap();
        let before = fl!(&*LOADER, "nav-about");

        assert!(matches!(set_language("zz-ZZ"), Err(LocaleError::NotEmbedded(_))));
        assert!(matches!(set_language("???"), Err(LocaleError::InvalidTag(_))));
        assert_eq!(fl!(&*LOADER, "nav-about"), before);
        assert_eq!(current_language(), "en-US");
    }
}
