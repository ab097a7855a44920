//! Display language and colour theme, persisted per profile.

mod translations;

use serde::{Deserialize, Serialize};
use shopfront_cache::{CacheError, LocalStore, StorageKey};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => translations::EN,
            Language::Bn => translations::BN,
        }
    }

    /// Text for `key`, or the key itself when it has no translation.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .unwrap_or(key)
    }

    /// [`translate`](Self::translate) with `{name}` placeholders filled in.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "bn" => Ok(Language::Bn),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon on the toggle button: the theme you would switch to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "bi bi-moon-fill",
            Theme::Dark => "bi bi-sun-fill",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Language and theme stored in the profile.
#[derive(Debug, Clone)]
pub struct Preferences {
    store: LocalStore,
}

impl Preferences {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn language(&self) -> Language {
        self.store.read(StorageKey::Language)
    }

    pub fn set_language(&self, language: Language) -> Result<(), CacheError> {
        self.store.write(StorageKey::Language, &language)
    }

    pub fn theme(&self) -> Theme {
        self.store.read(StorageKey::Theme)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), CacheError> {
        self.store.write(StorageKey::Theme, &theme)
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle_theme(&self) -> Result<Theme, CacheError> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Translate `key` into the current language.
    pub fn t(&self, key: &str) -> String {
        self.language().translate(key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::new(LocalStore::in_memory());
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = LocalStore::in_memory();
        let prefs = Preferences::new(store.clone());
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.raw(StorageKey::Theme).as_deref(), Some("\"dark\""));
        assert_eq!(prefs.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(prefs.theme().toggle_icon(), "bi bi-moon-fill");
    }

    #[test]
    fn test_translate() {
        assert_eq!(Language::En.translate("addToCart"), "Add to Cart");
        assert_eq!(Language::Bn.translate("cart"), "কার্ট");
        assert_eq!(Language::Bn.translate("noSuchKey"), "noSuchKey");
        assert_eq!(Language::En.translate("home"), "Home & Living");
        assert_eq!(
            Language::En.translate_with("showingProducts", &[("count", "12")]),
            "Showing 12 products"
        );
    }

    #[test]
    fn test_language_switch() {
        let prefs = Preferences::new(LocalStore::in_memory());
        prefs.set_language("BN".parse().unwrap()).unwrap();
        assert_eq!(prefs.t("checkout"), "চেকআউট");
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_tables_cover_the_same_keys() {
        for (key, _) in translations::EN {
            assert!(
                translations::BN.iter().any(|(k, _)| k == key),
                "missing Bengali text for {}",
                key
            );
        }
    }
}
