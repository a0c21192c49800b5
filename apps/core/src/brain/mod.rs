//! # Brain Module
//!
//! Heuristic understanding of mixed Darija/French/Arabic text.
//! Runs before any downstream step to turn a free-form submission into
//! structured signals.
//!
//! ## Components
//! - `lexicon`: curated word lists and number vocabularies
//! - `language`: language mix detection and code-switch segmentation
//! - `sentiment`: lexicon sentiment with frustration override
//! - `keywords`: pain/frequency/willingness/negation categories
//! - `numbers`: four numeral systems plus digit-multiplier compounds
//! - `entities`: locations, organizations, people and amounts
//! - `intent`: indicator-based intent classification
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod entities;
pub mod intent;
pub mod keywords;
pub mod language;
pub mod lexicon;
pub mod numbers;
pub mod sentiment;

// Re-export main types for convenience
pub use analysis::{CodeSwitchSegment, Language, Sentiment, TextAnalysis};
pub use analyzer::{analyze, normalize, CachedAnalyzer, TextAnalyzer};
pub use entities::{Amount, Amounts, Currency, Entities, EntityExtractor, QuantityUnit, TimeUnit};
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use keywords::{KeywordExtractor, KeywordHits};
pub use language::LanguageDetector;
pub use numbers::{NumberKind, NumberParser, ParsedNumber};
pub use sentiment::{SentimentResult, SentimentScorer, FRUSTRATION_SCORE};
