//! Lexicon-based sentiment scoring.
//!
//! Frustration-coded language dominates: any frustration hit yields
//! `Frustrated` at a fixed score, whatever else the text contains.

use super::analysis::Sentiment;
use super::lexicon::{self, FRUSTRATION_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Score reported for frustrated texts
pub const FRUSTRATION_SCORE: f32 = -0.8;

/// Score contributed by each hit of the dominant polarity
const SCORE_PER_HIT: f32 = 0.25;

/// Sentiment with the lexicon hits behind it
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: f32,
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub frustration_hits: usize,
}

#[derive(Debug, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score normalized text
    pub fn score(&self, text: &str) -> SentimentResult {
        let positive_hits = lexicon::hits(text, POSITIVE_WORDS).len();
        let negative_hits = lexicon::hits(text, NEGATIVE_WORDS).len();
        let frustration_hits = lexicon::hits(text, FRUSTRATION_WORDS).len();

        let (sentiment, score) = if frustration_hits > 0 {
            (Sentiment::Frustrated, FRUSTRATION_SCORE)
        } else if positive_hits > negative_hits {
            (
                Sentiment::Positive,
                (positive_hits as f32 * SCORE_PER_HIT).clamp(-1.0, 1.0),
            )
        } else if negative_hits > positive_hits {
            (
                Sentiment::Negative,
                (-(negative_hits as f32) * SCORE_PER_HIT).clamp(-1.0, 1.0),
            )
        } else {
            (Sentiment::Neutral, 0.0)
        };

        SentimentResult {
            sentiment,
            score,
            positive_hits,
            negative_hits,
            frustration_hits,
        }
    }
}
