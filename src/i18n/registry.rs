//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the UI languages and their
//! display metadata (native name, flag glyph, text direction). It uses a
//! singleton pattern with `OnceLock` to ensure thread-safe initialization and
//! access.

use crate::i18n::Language;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Writing direction of a language, mirrored onto the document `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Attribute value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// The language this entry describes
    #[serde(skip)]
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "ja")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese")
    pub name: &'static str,

    /// Name of the language in the language itself (e.g., "日本語")
    pub native_name: &'static str,

    /// Flag glyph shown next to the name in the language switcher
    pub flag: &'static str,

    /// Text direction used when this language is active
    pub direction: TextDirection,

    /// Whether this is the default language (only one should be true).
    /// Its catalog is total and every other catalog falls back to it.
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// Entries are stored in `Language::ALL` order so a language's position in
/// the registry is its `index()`.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration of a language.
    ///
    /// Total over `Language`: the registry holds one entry per variant.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is an exact supported code
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in switcher order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_config(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a code names a supported language.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations, in `Language::ALL` order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            direction: TextDirection::Ltr,
            is_default: true,
        },
        LanguageConfig {
            language: Language::Spanish,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            flag: "🇪🇸",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LanguageConfig {
            language: Language::Japanese,
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            flag: "🇯🇵",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LanguageConfig {
            language: Language::German,
            code: "de",
            name: "German",
            native_name: "Deutsch",
            flag: "🇩🇪",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            flag: "🇫🇷",
            direction: TextDirection::Ltr,
            is_default: false,
        },
    ]
}
