//! Text Analyzer - Main orchestrator for the Brain module.
//!
//! Normalizes the input once, then runs language detection, sentiment,
//! keyword categories, number parsing, entity extraction, intent
//! classification, code-switch segmentation and priority tagging.
//!
//! Pure and deterministic: the same text always yields the same analysis.

use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use tracing::debug;

use super::analysis::TextAnalysis;
use super::entities::EntityExtractor;
use super::intent::IntentClassifier;
use super::keywords::KeywordExtractor;
use super::language::LanguageDetector;
use super::numbers::NumberParser;
use super::sentiment::SentimentScorer;
use crate::priorities;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace"));

/// Lowercase, unify `?`/`!` variants, collapse whitespace and trim
pub fn normalize(text: &str) -> String {
    let unified: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '؟' | '？' | '¿' => '?',
            '！' | '¡' => '!',
            other => other,
        })
        .collect();

    WHITESPACE.replace_all(&unified, " ").trim().to_string()
}

/// Main analyzer that orchestrates all analysis components
pub struct TextAnalyzer {
    language_detector: LanguageDetector,
    sentiment_scorer: SentimentScorer,
    keyword_extractor: KeywordExtractor,
    number_parser: NumberParser,
    entity_extractor: EntityExtractor,
    intent_classifier: IntentClassifier,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Create a new analyzer with the built-in lexicons
    pub fn new() -> Self {
        Self {
            language_detector: LanguageDetector::new(),
            sentiment_scorer: SentimentScorer::new(),
            keyword_extractor: KeywordExtractor::new(),
            number_parser: NumberParser::new(),
            entity_extractor: EntityExtractor::new(),
            intent_classifier: IntentClassifier::new(),
        }
    }

    /// Analyze a text and produce a `TextAnalysis`
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let normalized = normalize(text);

        // 1. Language mix
        let language = self.language_detector.detect(&normalized);

        // 2. Sentiment (frustration first)
        let sentiment = self.sentiment_scorer.score(&normalized);

        // 3. Keyword categories
        let keywords = self.keyword_extractor.extract(&normalized);

        // 4. Numbers, all passes
        let numbers = self.number_parser.parse(&normalized);

        // 5. Entities (people need the original casing)
        let entities = self.entity_extractor.extract(text.trim(), &normalized);

        // 6. Intent
        let intent = self.intent_classifier.classify(&normalized);

        // 7. Code-switch spans
        let code_switching = self.language_detector.segment(&normalized);

        // 8. Strategic priorities
        let priority_confidence = priorities::detect(&normalized);
        let priority_tags = priority_confidence
            .iter()
            .map(|m| m.priority_id.clone())
            .collect();

        let analysis = TextAnalysis {
            text: text.to_string(),
            language,
            sentiment: sentiment.sentiment,
            sentiment_score: sentiment.score,
            keywords,
            numbers,
            entities,
            intent: intent.intent,
            intent_confidence: intent.confidence,
            code_switching,
            priority_tags,
            priority_confidence,
        };

        debug!("{}", analysis.summary());
        analysis
    }
}

/// `TextAnalyzer` with an LRU cache keyed by the raw input
pub struct CachedAnalyzer {
    analyzer: TextAnalyzer,
    cache: LruCache<String, TextAnalysis>,
    hits: u64,
    misses: u64,
}

impl CachedAnalyzer {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    };

    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            analyzer: TextAnalyzer::new(),
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Analyze, serving repeated texts from the cache
    pub fn analyze(&mut self, text: &str) -> TextAnalysis {
        if let Some(cached) = self.cache.get(text) {
            self.hits += 1;
            return cached.clone();
        }

        self.misses += 1;
        let analysis = self.analyzer.analyze(text);
        self.cache.put(text.to_string(), analysis.clone());
        analysis
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for CachedAnalyzer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

static DEFAULT_ANALYZER: LazyLock<TextAnalyzer> = LazyLock::new(TextAnalyzer::new);

/// Analyze with the shared default analyzer
pub fn analyze(text: &str) -> TextAnalysis {
    DEFAULT_ANALYZER.analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::analysis::{Language, Sentiment};
    use crate::brain::intent::Intent;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Wach   KAYN\tchi 7al؟ "), "wach kayn chi 7al?");
        assert_eq!(normalize("Bravo！"), "bravo!");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_basic_analysis() {
        let analyzer = TextAnalyzer::new();

        let analysis = analyzer.analyze("Kayn mochkil kbir f l'irrigation, kol nhar kan7ta2 lma");
        assert_eq!(analysis.language, Language::Darija);
        assert_eq!(analysis.intent, Intent::ProblemDescription);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert!(analysis.has_pain_signal());
        assert_eq!(analysis.priority_tags.first().map(String::as_str), Some("water_security"));
    }

    #[test]
    fn test_deterministic() {
        let analyzer = TextAnalyzer::new();
        let text = "bghit ndir application pour les fellahs f Agadir, 3 alf dh";

        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }

    #[test]
    fn test_cached_analyzer_matches_uncached() {
        let mut cached = CachedAnalyzer::default();
        let text = "juj tlata rb3a khamsa";

        let first = cached.analyze(text);
        let second = cached.analyze(text);
        assert_eq!(first, second);
        assert_eq!(first, analyze(text));
        assert_eq!(cached.stats(), (1, 1));
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_cache_evicts_least_recent() {
        let capacity = NonZeroUsize::new(2).unwrap_or(NonZeroUsize::MIN);
        let mut cached = CachedAnalyzer::new(capacity);

        cached.analyze("wa7ed");
        cached.analyze("juj");
        cached.analyze("tlata");
        assert_eq!(cached.len(), 2);

        cached.analyze("wa7ed");
        assert_eq!(cached.stats(), (0, 4));
    }

    #[test]
    fn test_empty_input_never_panics() {
        let analysis = analyze("");
        assert_eq!(analysis.language, Language::Darija);
        assert_eq!(analysis.intent, Intent::Unknown);
        assert!(analysis.numbers.is_empty());
        assert!(analysis.code_switching.is_empty());
    }
}
