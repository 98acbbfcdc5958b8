//! Language type: the closed set of UI languages.
//!
//! Every value of `Language` is a supported language, so code holding a
//! `Language` never needs to handle an "unknown language" case. Parsing from
//! untrusted strings goes through `from_code` (strict) or `parse` (lenient).

use crate::i18n::{LanguageConfig, LanguageRegistry, TextDirection};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Every supported language, in switcher (and registry) order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::Japanese,
        Language::German,
        Language::French,
    ];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is a supported code (exact, lowercase)
    /// * `Err` if the code is not supported
    pub fn from_code(code: &str) -> Result<Language> {
        match Self::parse(code) {
            Some(language) => Ok(language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Lenient variant of `from_code` for values that may be absent or stale,
    /// such as a stored preference.
    pub fn parse(code: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
    }

    /// Get the default language: the one whose catalog is total.
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_config().language
    }

    /// Position of this language in `Language::ALL`.
    pub(crate) fn index(&self) -> usize {
        match self {
            Language::English => 0,
            Language::Spanish => 1,
            Language::Japanese => 2,
            Language::German => 3,
            Language::French => 4,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// ISO 639-1 code, e.g. "ja".
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// English name of the language (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in itself (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_every_language() {
        for (code, expected) in [
            ("en", Language::English),
            ("es", Language::Spanish),
            ("ja", Language::Japanese),
            ("de", Language::German),
            ("fr", Language::French),
        ] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language, expected);
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("it");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_rejects_region_and_case_variants() {
        assert_eq!(Language::parse("es-MX"), None);
        assert_eq!(Language::parse("ES"), None);
        assert_eq!(Language::parse(" es"), None);
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::French.is_default());
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_native_names() {
        assert_eq!(Language::English.native_name(), "English");
        assert_eq!(Language::Spanish.native_name(), "Español");
        assert_eq!(Language::Japanese.native_name(), "日本語");
        assert_eq!(Language::German.native_name(), "Deutsch");
        assert_eq!(Language::French.native_name(), "Français");
    }

    #[test]
    fn test_flags_are_defined_for_all() {
        for language in Language::ALL {
            assert!(!language.flag().is_empty());
        }
        assert_eq!(Language::Spanish.flag(), "🇪🇸");
    }

    #[test]
    fn test_all_languages_are_left_to_right() {
        for language in Language::ALL {
            assert_eq!(language.direction(), TextDirection::Ltr);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), position);
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::German.to_string(), "de");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Japanese).unwrap();
        assert_eq!(json, "\"ja\"");
        let parsed: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Language::French);
    }
}
