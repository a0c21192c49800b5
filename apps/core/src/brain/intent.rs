//! Intent Classification using indicator keywords.
//!
//! Each intent owns an indicator set (Darija, French and Arabic). Every
//! indicator found in the normalized text counts as one hit; the intent with
//! the most hits wins and its share of all hits is the confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::{
    self, COMPLAINT_INDICATORS, PROBLEM_INDICATORS, QUESTION_INDICATORS, REQUEST_INDICATORS,
    SOLUTION_INDICATORS,
};

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Describes a problem (mochkil, problème, makaynch...)
    ProblemDescription,
    /// Proposes a solution (7al, application, fikra...)
    SolutionProposal,
    /// Asks something (?, wach, kifach, comment...)
    Question,
    /// Complains (ras le bol, 7chouma, 3yit...)
    Complaint,
    /// Asks for something (bghit, 3afak, je voudrais...)
    Request,
    /// No indicator found
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::ProblemDescription => "problem_description",
            Intent::SolutionProposal => "solution_proposal",
            Intent::Question => "question",
            Intent::Complaint => "complaint",
            Intent::Request => "request",
            Intent::Unknown => "unknown",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Indicators of the winning intent found in the text
    pub matched_indicators: Vec<String>,
}

impl IntentResult {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: 0.0,
            matched_indicators: vec![],
        }
    }
}

/// Indicator set for one intent
struct IntentIndicators {
    intent: Intent,
    indicators: &'static [&'static str],
}

/// Intent classifier over indicator keyword sets
pub struct IntentClassifier {
    groups: Vec<IntentIndicators>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with all indicator sets.
    ///
    /// Declaration order breaks ties: earlier groups win equal hit counts.
    pub fn new() -> Self {
        let groups = vec![
            IntentIndicators {
                intent: Intent::ProblemDescription,
                indicators: PROBLEM_INDICATORS,
            },
            IntentIndicators {
                intent: Intent::SolutionProposal,
                indicators: SOLUTION_INDICATORS,
            },
            IntentIndicators {
                intent: Intent::Question,
                indicators: QUESTION_INDICATORS,
            },
            IntentIndicators {
                intent: Intent::Complaint,
                indicators: COMPLAINT_INDICATORS,
            },
            IntentIndicators {
                intent: Intent::Request,
                indicators: REQUEST_INDICATORS,
            },
        ];

        Self { groups }
    }

    /// Classify the intent of normalized text
    pub fn classify(&self, text: &str) -> IntentResult {
        let text = text.trim();

        if text.is_empty() {
            return IntentResult::unknown();
        }

        let mut total_hits = 0usize;
        let mut best: Option<(Intent, Vec<String>)> = None;

        for group in &self.groups {
            let found = lexicon::hits(text, group.indicators);
            total_hits += found.len();

            let beats_best = match &best {
                Some((_, best_found)) => found.len() > best_found.len(),
                None => !found.is_empty(),
            };
            if beats_best {
                best = Some((group.intent, found));
            }
        }

        match best {
            Some((intent, matched_indicators)) if total_hits > 0 => IntentResult {
                intent,
                confidence: (matched_indicators.len() as f32 / total_hits as f32).min(1.0),
                matched_indicators,
            },
            _ => IntentResult::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_description() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("kayn mochkil kbir, makaynch transport f douar");
        assert_eq!(result.intent, Intent::ProblemDescription);
        assert_eq!(result.confidence, 1.0);
        assert!(result.matched_indicators.contains(&"mochkil".to_string()));
    }

    #[test]
    fn test_solution_proposal() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("fikra dyali hiya ndir application l'fellahin");
        assert_eq!(result.intent, Intent::SolutionProposal);
    }

    #[test]
    fn test_question_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("wach kayn chi wa7ed kaydir had l'khdma?");
        assert_eq!(result.intent, Intent::Question);

        let result = classifier.classify("comment trouver des clients ?");
        assert_eq!(result.intent, Intent::Question);
    }

    #[test]
    fn test_complaint_and_request() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("ras le bol, c'est inacceptable, scandale");
        assert_eq!(result.intent, Intent::Complaint);

        let result = classifier.classify("bghit mentor 3afak");
        assert_eq!(result.intent, Intent::Request);
    }

    #[test]
    fn test_confidence_is_share_of_hits() {
        let classifier = IntentClassifier::new();

        // two problem hits, one question hit
        let result = classifier.classify("mochkil s3ib, wach");
        assert_eq!(result.intent, Intent::ProblemDescription);
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);

        let result = classifier.classify("rfid blockchain");
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
    }
}
