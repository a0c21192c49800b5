//! Keyword category extraction.
//!
//! Four independent lexicon tests run over normalized text. A word may land
//! in more than one category ("makaynch" is both negation and pain context).

use serde::{Deserialize, Serialize};

use super::lexicon::{
    self, FREQUENCY_KEYWORDS, NEGATION_KEYWORDS, PAIN_KEYWORDS, WILLINGNESS_KEYWORDS,
};

/// Lexicon entries found in a text, per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHits {
    /// Pain points (problème, mochkil, s3ib...)
    pub pain: Vec<String>,
    /// Habitual/frequency markers (kol nhar, dima, souvent...)
    pub frequency: Vec<String>,
    /// Willingness to pay (nkhalas, payer, abonnement...)
    pub willingness: Vec<String>,
    /// Negations (machi, walo, jamais...)
    pub negation: Vec<String>,
}

impl KeywordHits {
    pub fn total(&self) -> usize {
        self.pain.len() + self.frequency.len() + self.willingness.len() + self.negation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract category hits from normalized text
    pub fn extract(&self, text: &str) -> KeywordHits {
        if text.trim().is_empty() {
            return KeywordHits::default();
        }

        KeywordHits {
            pain: lexicon::hits(text, PAIN_KEYWORDS),
            frequency: lexicon::hits(text, FREQUENCY_KEYWORDS),
            willingness: lexicon::hits(text, WILLINGNESS_KEYWORDS),
            negation: lexicon::hits(text, NEGATION_KEYWORDS),
        }
    }
}
