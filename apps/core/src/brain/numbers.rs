//! Number parsing across four numeral systems.
//!
//! Five passes run independently over normalized text and their results are
//! concatenated in pass order:
//! 1. Eastern Arabic-Indic digit runs (٣٠٠)
//! 2. Western digit runs (300), skipping literals already found by pass 1
//! 3. Darija number words (tlata, mya, مليون)
//! 4. French number words (trois, cent)
//! 5. Digit + multiplier compounds (3 alf, ٣ مليون) as `Mixed`
//!
//! Passes may yield overlapping readings of the same span ("٣ مليون" gives
//! 3, 1000000 and 3000000). Consumers select by `kind`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::lexicon::{digit_value, DARIJA_NUMBERS, FRENCH_NUMBERS, MULTIPLIERS};

/// Which numeral system produced a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    ArabicNumeral,
    DarijaWord,
    FrenchWord,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumber {
    pub value: i64,
    /// Literal text the value was read from
    pub original: String,
    #[serde(rename = "type")]
    pub kind: NumberKind,
}

/// A compiled whole-word matcher for one vocabulary entry
struct WordPattern {
    value: i64,
    pattern: Regex,
}

fn compile_vocabulary(vocabulary: &[(i64, &[&str])]) -> Vec<WordPattern> {
    vocabulary
        .iter()
        .flat_map(|(value, spellings)| spellings.iter().map(move |s| (*value, *s)))
        .filter_map(|(value, spelling)| {
            Regex::new(&format!(r"\b{}\b", regex::escape(spelling)))
                .ok()
                .map(|pattern| WordPattern { value, pattern })
        })
        .collect()
}

// NOTE: expect() is acceptable here: constant patterns
static EASTERN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[٠-٩۰-۹]+").expect("Invalid regex: Eastern digits"));

static WESTERN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+\b").expect("Invalid regex: Western digits"));

static DARIJA_WORDS: LazyLock<Vec<WordPattern>> =
    LazyLock::new(|| compile_vocabulary(DARIJA_NUMBERS));

static FRENCH_WORDS: LazyLock<Vec<WordPattern>> =
    LazyLock::new(|| compile_vocabulary(FRENCH_NUMBERS));

static COMPOUND: LazyLock<Regex> = LazyLock::new(|| {
    let multipliers = MULTIPLIERS
        .iter()
        .flat_map(|(_, spellings)| spellings.iter())
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"([0-9٠-٩۰-۹]+)\s*({})\b", multipliers))
        .expect("Invalid regex: digit multiplier compound")
});

/// Read a run of Western and/or Eastern digits. Overflow yields `None`.
pub fn parse_digits(run: &str) -> Option<i64> {
    let digits: String = run
        .chars()
        .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect::<Option<String>>()?;
    digits.parse::<i64>().ok()
}

fn multiplier_value(word: &str) -> Option<i64> {
    MULTIPLIERS
        .iter()
        .find(|(_, spellings)| spellings.contains(&word))
        .map(|(value, _)| *value)
}

#[derive(Debug, Default)]
pub struct NumberParser;

impl NumberParser {
    pub fn new() -> Self {
        Self
    }

    /// Run all five passes over normalized text
    pub fn parse(&self, text: &str) -> Vec<ParsedNumber> {
        let mut numbers = self.eastern_numerals(text);
        let western = self.western_numerals(text, &numbers);
        numbers.extend(western);
        numbers.extend(self.vocabulary_words(text, &DARIJA_WORDS, NumberKind::DarijaWord));
        numbers.extend(self.vocabulary_words(text, &FRENCH_WORDS, NumberKind::FrenchWord));
        numbers.extend(self.compounds(text));

        debug!("Parsed {} number reading(s)", numbers.len());
        numbers
    }

    fn eastern_numerals(&self, text: &str) -> Vec<ParsedNumber> {
        EASTERN_DIGITS
            .find_iter(text)
            .filter_map(|m| {
                parse_digits(m.as_str()).map(|value| ParsedNumber {
                    value,
                    original: m.as_str().to_string(),
                    kind: NumberKind::ArabicNumeral,
                })
            })
            .collect()
    }

    /// The two digit classes are disjoint, so the literal check only drops a
    /// run if pass 1 ever reads Western glyphs.
    fn western_numerals(&self, text: &str, found: &[ParsedNumber]) -> Vec<ParsedNumber> {
        WESTERN_DIGITS
            .find_iter(text)
            .filter(|m| !found.iter().any(|n| n.original == m.as_str()))
            .filter_map(|m| {
                m.as_str().parse::<i64>().ok().map(|value| ParsedNumber {
                    value,
                    original: m.as_str().to_string(),
                    kind: NumberKind::ArabicNumeral,
                })
            })
            .collect()
    }

    /// Every whole-word occurrence of every vocabulary entry, in text order
    fn vocabulary_words(
        &self,
        text: &str,
        vocabulary: &[WordPattern],
        kind: NumberKind,
    ) -> Vec<ParsedNumber> {
        let mut hits: Vec<(usize, ParsedNumber)> = vocabulary
            .iter()
            .flat_map(|entry| {
                entry.pattern.find_iter(text).map(move |m| {
                    (
                        m.start(),
                        ParsedNumber {
                            value: entry.value,
                            original: m.as_str().to_string(),
                            kind,
                        },
                    )
                })
            })
            .collect();

        hits.sort_by_key(|(start, _)| *start);
        hits.into_iter().map(|(_, number)| number).collect()
    }

    fn compounds(&self, text: &str) -> Vec<ParsedNumber> {
        COMPOUND
            .captures_iter(text)
            .filter_map(|caps| {
                let digits = parse_digits(caps.get(1)?.as_str())?;
                let multiplier = multiplier_value(caps.get(2)?.as_str())?;
                let value = digits.checked_mul(multiplier)?;
                Some(ParsedNumber {
                    value,
                    original: caps.get(0)?.as_str().to_string(),
                    kind: NumberKind::Mixed,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(numbers: &[ParsedNumber]) -> Vec<i64> {
        numbers.iter().map(|n| n.value).collect()
    }

    #[test]
    fn test_darija_words_in_order() {
        let parser = NumberParser::new();

        let numbers = parser.parse("juj tlata rb3a khamsa");
        assert_eq!(values(&numbers), vec![2, 3, 4, 5]);
        assert!(numbers.iter().all(|n| n.kind == NumberKind::DarijaWord));
    }

    #[test]
    fn test_repeated_word_matches_twice() {
        let parser = NumberParser::new();

        let numbers = parser.parse("tlata d l'fellahin w tlata d l'3ommal");
        assert_eq!(values(&numbers), vec![3, 3]);
    }

    #[test]
    fn test_eastern_digits() {
        let parser = NumberParser::new();

        let numbers = parser.parse("عندي ٢٥٠ زبون");
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].value, 250);
        assert_eq!(numbers[0].original, "٢٥٠");
        assert_eq!(numbers[0].kind, NumberKind::ArabicNumeral);
    }

    #[test]
    fn test_same_value_in_both_scripts_kept_twice() {
        let parser = NumberParser::new();

        let numbers = parser.parse("٣ و 3");
        let originals: Vec<&str> = numbers.iter().map(|n| n.original.as_str()).collect();
        assert_eq!(originals, vec!["٣", "3"]);
        assert!(numbers.iter().all(|n| n.kind == NumberKind::ArabicNumeral && n.value == 3));
    }

    #[test]
    fn test_western_digits_skip_arabizi_letters() {
        let parser = NumberParser::new();

        // The 3 in "3la" is the letter ain, not a number
        let numbers = parser.parse("3la 150 fellah");
        assert_eq!(values(&numbers), vec![150]);
    }

    #[test]
    fn test_digit_multiplier_compound() {
        let parser = NumberParser::new();

        let numbers = parser.parse("٣ مليون");
        let mixed: Vec<&ParsedNumber> =
            numbers.iter().filter(|n| n.kind == NumberKind::Mixed).collect();
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].value, 3_000_000);

        // Overlapping readings are kept: the bare digit and the bare word
        assert!(numbers.iter().any(|n| n.value == 3 && n.kind == NumberKind::ArabicNumeral));
        assert!(numbers.iter().any(|n| n.value == 1_000_000 && n.kind == NumberKind::DarijaWord));
    }

    #[test]
    fn test_latin_compound() {
        let parser = NumberParser::new();

        let numbers = parser.parse("khasni 20 alf dirham");
        let mixed: Vec<i64> = numbers
            .iter()
            .filter(|n| n.kind == NumberKind::Mixed)
            .map(|n| n.value)
            .collect();
        assert_eq!(mixed, vec![20_000]);
    }

    #[test]
    fn test_french_words() {
        let parser = NumberParser::new();

        let numbers = parser.parse("trois ans et cinquante clients");
        let french: Vec<i64> = numbers
            .iter()
            .filter(|n| n.kind == NumberKind::FrenchWord)
            .map(|n| n.value)
            .collect();
        assert_eq!(french, vec![3, 50]);
    }

    #[test]
    fn test_overflow_is_omitted() {
        let parser = NumberParser::new();

        let numbers = parser.parse("99999999999999999999999");
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_parse_digits_mixed_glyphs() {
        assert_eq!(parse_digits("1٢3"), Some(123));
        assert_eq!(parse_digits("12a"), None);
    }
}
