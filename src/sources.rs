//! The news source directory: static records plus search and bias filtering.

use crate::i18n::TextKey;
use serde::Serialize;
use std::fmt;

/// Political leaning of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiasCategory {
    Left,
    CenterLeft,
    Center,
    CenterRight,
    Right,
}

impl BiasCategory {
    pub const ALL: [BiasCategory; 5] = [
        BiasCategory::Left,
        BiasCategory::CenterLeft,
        BiasCategory::Center,
        BiasCategory::CenterRight,
        BiasCategory::Right,
    ];

    /// Wire form, as used in the `bias` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasCategory::Left => "left",
            BiasCategory::CenterLeft => "center-left",
            BiasCategory::Center => "center",
            BiasCategory::CenterRight => "center-right",
            BiasCategory::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<BiasCategory> {
        Self::ALL.into_iter().find(|bias| bias.as_str() == value)
    }

    /// Localized label key.
    pub fn text_key(&self) -> TextKey {
        match self {
            BiasCategory::Left => TextKey::BiasLeft,
            BiasCategory::CenterLeft => TextKey::BiasCenterLeft,
            BiasCategory::Center => TextKey::BiasCenter,
            BiasCategory::CenterRight => TextKey::BiasCenterRight,
            BiasCategory::Right => TextKey::BiasRight,
        }
    }

    /// Styling class of the bias dot.
    pub fn css_class(&self) -> &'static str {
        match self {
            BiasCategory::Left => "bias-left",
            BiasCategory::CenterLeft => "bias-center-left",
            BiasCategory::Center => "bias-center",
            BiasCategory::CenterRight => "bias-center-right",
            BiasCategory::Right => "bias-right",
        }
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The directory's bias selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BiasFilter {
    #[default]
    All,
    Only(BiasCategory),
}

impl BiasFilter {
    /// Parse a wire value. Anything unrecognized (including empty) means `All`.
    pub fn parse(value: &str) -> BiasFilter {
        BiasCategory::parse(value.trim()).map_or(BiasFilter::All, BiasFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasFilter::All => "all",
            BiasFilter::Only(bias) => bias.as_str(),
        }
    }

    pub fn matches(&self, bias: BiasCategory) -> bool {
        match self {
            BiasFilter::All => true,
            BiasFilter::Only(selected) => *selected == bias,
        }
    }
}

/// Coarse factuality band used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactualityTier {
    High,
    Medium,
    Low,
}

impl FactualityTier {
    pub fn from_score(score: f64) -> FactualityTier {
        if score >= 8.0 {
            FactualityTier::High
        } else if score >= 6.0 {
            FactualityTier::Medium
        } else {
            FactualityTier::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FactualityTier::High => "factuality-high",
            FactualityTier::Medium => "factuality-medium",
            FactualityTier::Low => "factuality-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRecord {
    pub name: &'static str,
    pub bias: BiasCategory,
    /// 0 to 10
    pub factuality: f64,
    pub country: &'static str,
    pub category: &'static str,
}

impl SourceRecord {
    pub fn factuality_tier(&self) -> FactualityTier {
        FactualityTier::from_score(self.factuality)
    }
}

const fn source(
    name: &'static str,
    bias: BiasCategory,
    factuality: f64,
    country: &'static str,
    category: &'static str,
) -> SourceRecord {
    SourceRecord {
        name,
        bias,
        factuality,
        country,
        category,
    }
}

pub static SOURCES: [SourceRecord; 10] = [
    source("Reuters", BiasCategory::Center, 9.2, "UK", "International"),
    source("Associated Press", BiasCategory::Center, 9.1, "US", "International"),
    source("BBC News", BiasCategory::CenterLeft, 8.8, "UK", "International"),
    source("NPR", BiasCategory::CenterLeft, 8.9, "US", "National"),
    source("Wall Street Journal", BiasCategory::CenterRight, 8.7, "US", "Business"),
    source("The Guardian", BiasCategory::CenterLeft, 8.3, "UK", "International"),
    source("Fox News", BiasCategory::Right, 6.8, "US", "National"),
    source("CNN", BiasCategory::CenterLeft, 7.4, "US", "National"),
    source("The New York Times", BiasCategory::CenterLeft, 8.1, "US", "National"),
    source("Financial Times", BiasCategory::CenterRight, 8.6, "UK", "Business"),
];

/// Records whose name contains `search` (case-insensitive) and whose bias
/// passes `filter`, in directory order.
pub fn filter_sources(search: &str, filter: BiasFilter) -> Vec<&'static SourceRecord> {
    let needle = search.to_lowercase();

    SOURCES
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .filter(|record| filter.matches(record.bias))
        .collect()
}
