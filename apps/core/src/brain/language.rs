//! Language detection and code-switch segmentation.
//!
//! Three independent tests run over normalized text: Darija marker words,
//! French function words, and presence of the Arabic Unicode block. When no
//! test fires the text is taken as Darija, the platform's primary audience.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::analysis::{CodeSwitchSegment, Language};
use super::lexicon::{DARIJA_MARKERS, FRENCH_FUNCTION_WORDS};

fn whole_word_alternation(words: &[&str]) -> String {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\b(?:{})\b", alternation)
}

// NOTE: expect() is acceptable here: the patterns are built from constant word lists
static DARIJA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&whole_word_alternation(DARIJA_MARKERS)).expect("Invalid regex: Darija markers")
});

static FRENCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&whole_word_alternation(FRENCH_FUNCTION_WORDS))
        .expect("Invalid regex: French function words")
});

static ARABIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0600}-\x{06FF}]").expect("Invalid regex: Arabic block"));

fn has_arabic_script(token: &str) -> bool {
    token.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Language detector and code-switch segmenter
pub struct LanguageDetector {
    darija_markers: HashSet<&'static str>,
    french_words: HashSet<&'static str>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            darija_markers: DARIJA_MARKERS.iter().copied().collect(),
            french_words: FRENCH_FUNCTION_WORDS.iter().copied().collect(),
        }
    }

    /// Detect the language mix of normalized text
    pub fn detect(&self, text: &str) -> Language {
        let fired: Vec<Language> = [
            (Language::Darija, DARIJA_PATTERN.is_match(text)),
            (Language::French, FRENCH_PATTERN.is_match(text)),
            (Language::Arabic, ARABIC_PATTERN.is_match(text)),
        ]
        .into_iter()
        .filter_map(|(language, hit)| hit.then_some(language))
        .collect();

        match fired.as_slice() {
            [] => Language::Darija,
            [single] => *single,
            _ => Language::Mixed,
        }
    }

    /// Classify a single token: Arabic script, then French, then Darija
    fn classify_token(&self, token: &str) -> Option<Language> {
        if has_arabic_script(token) {
            return Some(Language::Arabic);
        }

        let bare = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        if self.french_words.contains(bare) {
            Some(Language::French)
        } else if self.darija_markers.contains(bare) {
            Some(Language::Darija)
        } else {
            None
        }
    }

    /// Split normalized text into consecutive single-language word runs.
    ///
    /// Unclassified words never open a new run; they join the current one.
    /// The returned spans partition the token sequence without gaps.
    pub fn segment(&self, text: &str) -> Vec<CodeSwitchSegment> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return vec![];
        }

        let mut segments = Vec::new();
        let mut start = 0;
        let mut current: Option<Language> = None;

        for (index, token) in tokens.iter().enumerate() {
            let Some(language) = self.classify_token(token) else {
                continue;
            };

            match current {
                None => current = Some(language),
                Some(running) if running != language => {
                    segments.push(CodeSwitchSegment {
                        text: tokens[start..index].join(" "),
                        language: running,
                        start,
                        end: index,
                    });
                    start = index;
                    current = Some(language);
                }
                Some(_) => {}
            }
        }

        segments.push(CodeSwitchSegment {
            text: tokens[start..].join(" "),
            language: current.unwrap_or(Language::Darija),
            start,
            end: tokens.len(),
        });

        segments
    }
}
