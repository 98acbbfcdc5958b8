//! Text keys: the closed set of localizable strings.
//!
//! Components look strings up by `TextKey`, so a typo in a key is a compile
//! error rather than a missing translation at runtime. Each key also has a
//! stable dotted form (e.g. `"social.positive"`) used by the JSON catalog
//! endpoint and by string-keyed lookups built from data.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

macro_rules! text_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// A localizable string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant,)+
        }

        impl TextKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// The dotted form of this key.
            pub fn as_key(&self) -> &'static str {
                match self {
                    $(TextKey::$variant => $key,)+
                }
            }
        }
    };
}

text_keys! {
    // Header
    HeaderTitle => "header.title",
    HeaderAnalyzer => "header.analyzer",
    HeaderDashboard => "header.dashboard",
    HeaderSources => "header.sources",
    HeaderSettings => "header.settings",
    HeaderDarkMode => "header.darkMode",
    HeaderLightMode => "header.lightMode",

    // Analysis results
    AnalysisTitle => "analyzer.results.title",
    AnalysisSubtitle => "analyzer.results.subtitle",

    // Bias visualization
    BiasPolitical => "bias.political",
    BiasFactuality => "bias.factuality",
    BiasEmotional => "bias.emotional",
    BiasLeft => "bias.left",
    BiasCenterLeft => "bias.centerLeft",
    BiasCenter => "bias.center",
    BiasCenterRight => "bias.centerRight",
    BiasRight => "bias.right",
    FactualityHigh => "bias.factuality.high",
    FactualityMedium => "bias.factuality.medium",
    FactualityLow => "bias.factuality.low",
    EmotionalHigh => "bias.emotional.high",
    EmotionalMedium => "bias.emotional.medium",
    EmotionalLow => "bias.emotional.low",

    // Article highlights
    HighlightsTitle => "highlights.title",
    HighlightsEmotional => "highlights.emotional",
    HighlightsBias => "highlights.bias",

    // Social reactions
    SocialTitle => "social.title",
    SocialInteractions => "social.interactions",
    SocialComments => "social.comments",
    SocialPositive => "social.positive",
    SocialNegative => "social.negative",
    SocialNeutral => "social.neutral",

    // Source directory
    SourcesTitle => "sources.title",
    SourcesSubtitle => "sources.subtitle",
    SourcesSearchPlaceholder => "sources.search.placeholder",
    SourcesFilterAll => "sources.filter.all",
    SourcesPolitical => "sources.political",
    SourcesCategory => "sources.category",
    SourcesVerified => "sources.verified",
    SourcesNoResults => "sources.noResults",
    SourcesResultCount => "sources.resultCount",

    // Language switcher
    LanguageSelect => "language.select",
    LanguageCurrent => "language.current",

    // Common
    CommonLoading => "common.loading",
    CommonError => "common.error",
    CommonClose => "common.close",
    CommonUnknown => "common.unknown",
}

/// Reverse index from dotted form to key (built once)
static KEY_INDEX: OnceLock<HashMap<&'static str, TextKey>> = OnceLock::new();

impl TextKey {
    /// Parse a dotted key.
    ///
    /// # Returns
    /// * `Some(TextKey)` for a known dotted key (exact match)
    /// * `None` otherwise
    pub fn from_key(key: &str) -> Option<TextKey> {
        KEY_INDEX
            .get_or_init(|| TextKey::ALL.iter().map(|k| (k.as_key(), *k)).collect())
            .get(key)
            .copied()
    }
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dotted_keys_are_unique() {
        let unique: HashSet<_> = TextKey::ALL.iter().map(|k| k.as_key()).collect();
        assert_eq!(unique.len(), TextKey::ALL.len());
    }

    #[test]
    fn test_from_key_roundtrips_every_key() {
        for key in TextKey::ALL {
            assert_eq!(TextKey::from_key(key.as_key()), Some(*key));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(TextKey::from_key("header.missing"), None);
        assert_eq!(TextKey::from_key(""), None);
        assert_eq!(TextKey::from_key("HEADER.TITLE"), None);
    }

    #[test]
    fn test_display_is_dotted_form() {
        assert_eq!(TextKey::SocialPositive.to_string(), "social.positive");
    }
}
