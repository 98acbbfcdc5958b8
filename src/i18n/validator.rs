//! Catalog validation module.
//!
//! Checks the built-in translation tables for problems a render would only
//! reveal on screen: empty default strings, malformed or duplicate keys,
//! translations whose `{placeholder}` set drifted from the default string, and
//! keys a language leaves to the fallback.

use crate::i18n::{strings, Language, TextKey};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that must be fixed before the catalog is served
    pub errors: Vec<String>,

    /// Gaps that the fallback covers
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// One key as seen by the validator.
#[derive(Debug, Clone)]
pub struct CatalogEntry<'a> {
    pub key: &'a str,
    pub default_text: &'a str,
    /// Non-default languages and their text, `None` where the table has no entry
    pub translations: Vec<(Language, Option<&'a str>)>,
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

static KEY_FORMAT_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the built-in catalog.
    pub fn validate() -> ValidationReport {
        Self::validate_entries(&Self::builtin_entries())
    }

    /// Snapshot of the built-in tables, one entry per `TextKey`.
    pub fn builtin_entries() -> Vec<CatalogEntry<'static>> {
        let default = Language::default_language();

        TextKey::ALL
            .iter()
            .map(|key| CatalogEntry {
                key: key.as_key(),
                default_text: strings::lookup(default, *key)
                    .unwrap_or_else(|| strings::english(*key)),
                translations: Language::ALL
                    .iter()
                    .filter(|language| **language != default)
                    .map(|language| (*language, strings::lookup(*language, *key)))
                    .collect(),
            })
            .collect()
    }

    /// Validate an arbitrary set of entries.
    pub fn validate_entries(entries: &[CatalogEntry<'_>]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for entry in entries {
            if !seen.insert(entry.key) {
                report
                    .errors
                    .push(format!("Duplicate key: '{}'", entry.key));
            }

            if !Self::is_valid_key(entry.key) {
                report
                    .errors
                    .push(format!("Malformed key: '{}'", entry.key));
            }

            if entry.default_text.trim().is_empty() {
                report
                    .errors
                    .push(format!("Empty default text for '{}'", entry.key));
            }

            let expected = Self::extract_placeholders(entry.default_text);
            for (language, text) in &entry.translations {
                match text {
                    Some(text) => {
                        let found = Self::extract_placeholders(text);
                        if found != expected {
                            report.errors.push(format!(
                                "Placeholder mismatch for '{}' in {}: expected {:?}, found {:?}",
                                entry.key,
                                language.code(),
                                expected,
                                found
                            ));
                        }
                    }
                    None => report.warnings.push(format!(
                        "Missing {} translation for '{}' (falls back to {})",
                        language.code(),
                        entry.key,
                        Language::default_language().code()
                    )),
                }
            }
        }

        report
    }

    /// A lowercase first segment followed by one or more letter segments.
    fn is_valid_key(key: &str) -> bool {
        KEY_FORMAT_REGEX
            .get_or_init(|| Regex::new(r"^[a-z]+(\.[a-zA-Z]+)+$").expect("valid key regex"))
            .is_match(key)
    }

    /// Extract the set of `{name}` placeholders in a string
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z_]+)\}").expect("valid placeholder regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
