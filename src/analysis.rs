//! Article analysis results as delivered by the analysis service.
//!
//! Nothing here computes scores; these types only carry the JSON shape the
//! components render.

use crate::i18n::TextKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAnalysis {
    #[serde(default)]
    pub political_bias: f64,
    #[serde(default)]
    pub factuality: f64,
    #[serde(default)]
    pub emotional_language: f64,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub social_reactions: Vec<SocialReaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Emotional,
    Bias,
}

impl HighlightKind {
    pub fn text_key(&self) -> TextKey {
        match self {
            HighlightKind::Emotional => TextKey::HighlightsEmotional,
            HighlightKind::Bias => TextKey::HighlightsBias,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn text_key(&self) -> TextKey {
        match self {
            Sentiment::Positive => TextKey::SocialPositive,
            Sentiment::Negative => TextKey::SocialNegative,
            Sentiment::Neutral => TextKey::SocialNeutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Sentiment::Positive => "sentiment-positive",
            Sentiment::Negative => "sentiment-negative",
            Sentiment::Neutral => "sentiment-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialReaction {
    pub platform: String,
    pub sentiment: Sentiment,
    pub engagement: u64,
    #[serde(default)]
    pub top_comments: Vec<String>,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_collaborator_json() {
        let json = r#"{
            "politicalBias": -0.3,
            "factuality": 8.5,
            "emotionalLanguage": 4.0,
            "highlights": [
                {"text": "devastating blow", "type": "emotional", "explanation": "Loaded wording"}
            ],
            "socialReactions": [
                {"platform": "Twitter", "sentiment": "negative", "engagement": 1200,
                 "topComments": ["Not surprised"], "url": "https://x.com/post/1"}
            ]
        }"#;

        let analysis: ArticleAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.political_bias, -0.3);
        assert_eq!(analysis.highlights[0].kind, HighlightKind::Emotional);
        assert_eq!(analysis.social_reactions[0].sentiment, Sentiment::Negative);
        assert_eq!(analysis.social_reactions[0].top_comments, vec!["Not surprised"]);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"socialReactions": [
            {"platform": "Reddit", "sentiment": "neutral", "engagement": 0}
        ]}"#;

        let analysis: ArticleAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.highlights.is_empty());
        assert!(analysis.social_reactions[0].top_comments.is_empty());
        assert!(analysis.social_reactions[0].url.is_empty());
    }

    #[test]
    fn test_unknown_sentiment_is_rejected() {
        let json = r#"{"platform": "X", "sentiment": "angry", "engagement": 1}"#;
        assert!(serde_json::from_str::<SocialReaction>(json).is_err());
    }

    #[test]
    fn test_text_keys() {
        assert_eq!(HighlightKind::Bias.text_key().as_key(), "highlights.bias");
        assert_eq!(Sentiment::Neutral.text_key().as_key(), "social.neutral");
    }
}
