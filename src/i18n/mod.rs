//! Interface localization.
//!
//! Each locale is a flat key/value table resolved at render time. Lookup
//! falls back to the literal key so a missing entry degrades to visible
//! text instead of an error. No interpolation or pluralization; values are
//! substituted verbatim.

pub mod en;
pub mod zh;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// File name under the client data directory holding the persisted locale code.
pub const PREFERENCE_FILE: &str = "preferred-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::Zh => zh::TRANSLATIONS,
            Locale::En => en::TRANSLATIONS,
        }
    }
}

/// Resolve `key` against the locale table, falling back to the key itself.
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    for &(k, v) in locale.table() {
        if k == key {
            return v;
        }
    }
    key
}

/// Persisted locale preference: a single file holding one two-letter code.
#[derive(Debug, Clone)]
pub struct LocalePreference {
    path: PathBuf,
}

impl LocalePreference {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(PREFERENCE_FILE),
        }
    }

    /// Read the stored locale, defaulting to Chinese when the file is
    /// missing or holds an unrecognized code.
    pub fn load(&self) -> Locale {
        match fs::read_to_string(&self.path) {
            Ok(content) => Locale::from_code(&content).unwrap_or_default(),
            Err(_) => Locale::default(),
        }
    }

    pub fn store(&self, locale: Locale) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, locale.code())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Active locale plus its persistence handle.
#[derive(Debug, Clone)]
pub struct I18n {
    locale: Locale,
    preference: LocalePreference,
}

impl I18n {
    pub fn from_preference(preference: LocalePreference) -> Self {
        let locale = preference.load();
        Self { locale, preference }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        t(self.locale, key)
    }

    /// Switch the active locale. Returns false without touching the
    /// preference file when `locale` is already active. A failed
    /// preference write is logged, not surfaced; the in-memory switch
    /// still takes effect.
    pub fn switch_locale(&mut self, locale: Locale) -> bool {
        if locale == self.locale {
            return false;
        }
        self.locale = locale;
        if let Err(e) = self.preference.store(locale) {
            warn!("Failed to persist locale preference: {}", e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lookup_known_key() {
        assert_eq!(t(Locale::Zh, "error_no_text"), "请输入要翻译的文本");
        assert_eq!(t(Locale::En, "error_no_text"), "Please enter text to translate");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(t(Locale::Zh, "no_such_key"), "no_such_key");
        assert_eq!(t(Locale::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_locale_codes_round_trip() {
        assert_eq!(Locale::from_code("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::Zh.code(), "zh");
        assert_eq!(Locale::En.code(), "en");
    }

    #[test]
    fn test_preference_round_trip() {
        let dir = tempdir().unwrap();
        let preference = LocalePreference::new(dir.path());
        assert_eq!(preference.load(), Locale::Zh);

        preference.store(Locale::En).unwrap();
        assert_eq!(preference.load(), Locale::En);
    }

    #[test]
    fn test_switch_locale_is_idempotent_for_current_locale() {
        let dir = tempdir().unwrap();
        let mut i18n = I18n::from_preference(LocalePreference::new(dir.path()));

        assert!(!i18n.switch_locale(Locale::Zh));
        // No-op switch must not create the preference file.
        assert!(!dir.path().join(PREFERENCE_FILE).exists());
    }

    #[test]
    fn test_switch_locale_persists_and_reload_restores() {
        let dir = tempdir().unwrap();
        let mut i18n = I18n::from_preference(LocalePreference::new(dir.path()));

        assert!(i18n.switch_locale(Locale::En));
        assert_eq!(i18n.locale(), Locale::En);
        assert_eq!(i18n.t("title"), "Document Translator");

        let reloaded = I18n::from_preference(LocalePreference::new(dir.path()));
        assert_eq!(reloaded.locale(), Locale::En);
    }

    #[test]
    fn test_tables_share_key_set() {
        for &(key, _) in zh::TRANSLATIONS {
            assert!(
                en::TRANSLATIONS.iter().any(|&(k, _)| k == key),
                "missing English entry for {}",
                key
            );
        }
        for &(key, _) in en::TRANSLATIONS {
            assert!(
                zh::TRANSLATIONS.iter().any(|&(k, _)| k == key),
                "missing Chinese entry for {}",
                key
            );
        }
    }
}
