//! TextAnalysis - Output structure of the text pipeline.
//!
//! One immutable value per analyzed text, carrying every signal the
//! submission flow and the matching engine consume.

use serde::{Deserialize, Serialize};

use super::entities::Entities;
use super::intent::Intent;
use super::keywords::KeywordHits;
use super::numbers::{NumberKind, ParsedNumber};
use crate::priorities::PriorityMatch;

/// Detected language mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Darija,
    French,
    Arabic,
    Mixed,
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Darija => "ary",
            Language::French => "fr",
            Language::Arabic => "ar",
            Language::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Frustrated,
}

/// A run of consecutive words in one language.
///
/// `start` is inclusive and `end` exclusive, both counted in words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSwitchSegment {
    pub text: String,
    pub language: Language,
    pub start: usize,
    pub end: usize,
}

/// Complete analysis of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Original input
    pub text: String,

    pub language: Language,

    pub sentiment: Sentiment,

    /// Sentiment strength in [-1, 1]
    pub sentiment_score: f32,

    pub keywords: KeywordHits,

    /// Every numeral interpretation found, pass by pass (may overlap)
    pub numbers: Vec<ParsedNumber>,

    pub entities: Entities,

    pub intent: Intent,

    /// Share of indicator hits won by `intent`, in [0, 1]
    pub intent_confidence: f32,

    pub code_switching: Vec<CodeSwitchSegment>,

    /// Ids of detected priorities, highest confidence first
    pub priority_tags: Vec<String>,

    pub priority_confidence: Vec<PriorityMatch>,
}

impl TextAnalysis {
    /// Numbers of one representation only
    pub fn numbers_of(&self, kind: NumberKind) -> Vec<&ParsedNumber> {
        self.numbers.iter().filter(|n| n.kind == kind).collect()
    }

    /// Whether the author described a pain point
    pub fn has_pain_signal(&self) -> bool {
        !self.keywords.pain.is_empty()
    }

    /// Whether the text alternates between languages
    pub fn is_code_switched(&self) -> bool {
        self.code_switching.len() > 1
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Language: {}, Sentiment: {:?} ({:.2}), Intent: {} ({:.0}%), Numbers: {}, Segments: {}, Priorities: [{}]",
            self.language.code(),
            self.sentiment,
            self.sentiment_score,
            self.intent,
            self.intent_confidence * 100.0,
            self.numbers.len(),
            self.code_switching.len(),
            self.priority_tags.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::entities::Amounts;

    fn empty_analysis() -> TextAnalysis {
        TextAnalysis {
            text: "test".to_string(),
            language: Language::Darija,
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.0,
            keywords: KeywordHits::default(),
            numbers: vec![
                ParsedNumber { value: 3, original: "٣".to_string(), kind: NumberKind::ArabicNumeral },
                ParsedNumber { value: 3_000, original: "3 alf".to_string(), kind: NumberKind::Mixed },
            ],
            entities: Entities {
                locations: vec![],
                organizations: vec![],
                people: vec![],
                amounts: Amounts::default(),
            },
            intent: Intent::Unknown,
            intent_confidence: 0.0,
            code_switching: vec![],
            priority_tags: vec!["health".to_string()],
            priority_confidence: vec![],
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Darija.code(), "ary");
        assert_eq!(Language::French.code(), "fr");
        assert_eq!(Language::Arabic.code(), "ar");
        assert_eq!(Language::Mixed.code(), "mixed");
    }

    #[test]
    fn test_numbers_of() {
        let analysis = empty_analysis();
        let mixed = analysis.numbers_of(NumberKind::Mixed);
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].value, 3_000);
    }

    #[test]
    fn test_summary() {
        let summary = empty_analysis().summary();

        assert!(summary.contains("Language: ary"));
        assert!(summary.contains("Intent:"));
        assert!(summary.contains("health"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(empty_analysis()).unwrap_or_default();
        assert_eq!(json["language"], "darija");
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["numbers"][1]["type"], "mixed");
        assert!(json.get("sentimentScore").is_some());
        assert!(json.get("codeSwitching").is_some());
    }
}
