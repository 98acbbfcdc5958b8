//! Translation lookup with fallback.
//!
//! A lookup tries the requested language, then the default language, then
//! gives up and returns the key itself. It never fails.

use crate::i18n::{strings, Language, TextKey, TranslationMetrics};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::debug;

/// Translate a typed key.
///
/// The default table is total, so the third fallback tier (returning the key)
/// cannot be reached from here.
pub fn translate(language: Language, key: TextKey) -> &'static str {
    let metrics = TranslationMetrics::global();
    metrics.record_lookup();

    if let Some(text) = strings::lookup(language, key) {
        return text;
    }

    metrics.record_fallback();
    let default = Language::default_language();
    strings::lookup(default, key).unwrap_or_else(|| strings::english(key))
}

/// Translate a dotted key such as `"social.positive"`.
///
/// Unknown keys come back unchanged, which keeps a typo visible on screen
/// during development without failing the render.
pub fn translate_str<'a>(language: Language, key: &'a str) -> Cow<'a, str> {
    match TextKey::from_key(key) {
        Some(text_key) => Cow::Borrowed(translate(language, text_key)),
        None => {
            let metrics = TranslationMetrics::global();
            metrics.record_lookup();
            metrics.record_miss();
            debug!("No translation for unknown key '{}'", key);
            Cow::Borrowed(key)
        }
    }
}

/// Every key resolved for a language (with fallback), keyed by dotted form.
pub fn resolve_all(language: Language) -> BTreeMap<&'static str, &'static str> {
    TextKey::ALL
        .iter()
        .map(|key| {
            let text = strings::lookup(language, *key).unwrap_or_else(|| strings::english(*key));
            (key.as_key(), text)
        })
        .collect()
}

/// Substitute `{name}` placeholders in a translated template.
pub fn format_template(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{}}}", name), value);
    }
    result
}
