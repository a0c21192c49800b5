//! Named entity extraction.
//!
//! Locations come from the city gazetteer, organizations from a list of
//! organization-type nouns. People are guessed from capitalized tokens of
//! the raw input: low precision, kept as a hint for reviewers only.
//! Amounts pair a number with an adjacent unit token and normalize the unit.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::lexicon::{DARIJA_MARKERS, FRENCH_FUNCTION_WORDS, ORGANIZATION_NOUNS};
use super::numbers::parse_digits;
use crate::geo;

/// Moroccan rial (colloquial): 20 rial make one dirham
const RIAL_PER_DIRHAM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "MAD")]
    Mad,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    Kg,
    G,
    Ton,
    L,
    Km,
    M,
    Unit,
}

/// A number read next to a unit token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount<U> {
    pub value: f64,
    pub unit: U,
    pub original: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amounts {
    pub money: Vec<Amount<Currency>>,
    pub time: Vec<Amount<TimeUnit>>,
    pub quantities: Vec<Amount<QuantityUnit>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    /// Canonical city names
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
    pub people: Vec<String>,
    pub amounts: Amounts,
}

const NUMBER: &str = r"([0-9٠-٩۰-۹]+(?:[.,][0-9٠-٩۰-۹]+)?)";
const UNIT_END: &str = r"(?:[^\p{L}\p{N}]|$)";

// NOTE: expect() is acceptable here: constant patterns
static MONEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{}\s*(dirhams|dirham|dhs|dh|mad|درهم|دراهم|ryal|rial|ريال|euros|euro|eur|€|dollars|dollar|usd|\$){}",
        NUMBER, UNIT_END
    ))
    .expect("Invalid regex: money amounts")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{}\s*(minutes|minute|dqayq|dqiqa|دقائق|دقيقة|heures|heure|sa3at|sa3a|ساعات|ساعة|jours|jour|iyam|ayam|nhar|أيام|ايام|يوم|semaines|semaine|simanat|simana|أسابيع|أسبوع|mois|chhour|chhar|شهور|شهر|années|année|ans|an|3am|snin|عام|سنين|سنة){}",
        NUMBER, UNIT_END
    ))
    .expect("Invalid regex: time amounts")
});

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b{}\s*(kilos|kilo|kg|كيلو|grammes|gramme|g|tonnes|tonne|طن|litres|litre|ltr|l|لتر|km|mètres|mètre|m|pièces|pièce|unités|unité|wa7dat|حبة){}",
        NUMBER, UNIT_END
    ))
    .expect("Invalid regex: quantity amounts")
});

static ORGANIZATIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ORGANIZATION_NOUNS
        .iter()
        .filter_map(|noun| Regex::new(&format!(r"\b{}\b", regex::escape(noun))).ok())
        .collect()
});

fn parse_amount(raw: &str) -> Option<f64> {
    let (whole, fraction) = match raw.split_once(['.', ',']) {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };

    let whole = parse_digits(whole)? as f64;
    match fraction {
        Some(fraction) if !fraction.is_empty() => {
            let digits = parse_digits(fraction)? as f64;
            let scale = 10f64.powi(fraction.chars().count() as i32);
            Some(whole + digits / scale)
        }
        _ => Some(whole),
    }
}

fn currency_of(unit: &str) -> Option<(Currency, f64)> {
    match unit {
        "dirhams" | "dirham" | "dhs" | "dh" | "mad" | "درهم" | "دراهم" => Some((Currency::Mad, 1.0)),
        "ryal" | "rial" | "ريال" => Some((Currency::Mad, RIAL_PER_DIRHAM)),
        "euros" | "euro" | "eur" | "€" => Some((Currency::Eur, 1.0)),
        "dollars" | "dollar" | "usd" | "$" => Some((Currency::Usd, 1.0)),
        _ => None,
    }
}

fn time_unit_of(unit: &str) -> Option<TimeUnit> {
    match unit {
        "minutes" | "minute" | "dqayq" | "dqiqa" | "دقائق" | "دقيقة" => Some(TimeUnit::Minute),
        "heures" | "heure" | "sa3at" | "sa3a" | "ساعات" | "ساعة" => Some(TimeUnit::Hour),
        "jours" | "jour" | "iyam" | "ayam" | "nhar" | "أيام" | "ايام" | "يوم" => Some(TimeUnit::Day),
        "semaines" | "semaine" | "simanat" | "simana" | "أسابيع" | "أسبوع" => Some(TimeUnit::Week),
        "mois" | "chhour" | "chhar" | "شهور" | "شهر" => Some(TimeUnit::Month),
        "années" | "année" | "ans" | "an" | "3am" | "snin" | "عام" | "سنين" | "سنة" => Some(TimeUnit::Year),
        _ => None,
    }
}

fn quantity_unit_of(unit: &str) -> Option<QuantityUnit> {
    match unit {
        "kilos" | "kilo" | "kg" | "كيلو" => Some(QuantityUnit::Kg),
        "grammes" | "gramme" | "g" => Some(QuantityUnit::G),
        "tonnes" | "tonne" | "طن" => Some(QuantityUnit::Ton),
        "litres" | "litre" | "ltr" | "l" | "لتر" => Some(QuantityUnit::L),
        "km" => Some(QuantityUnit::Km),
        "mètres" | "mètre" | "m" => Some(QuantityUnit::M),
        "pièces" | "pièce" | "unités" | "unité" | "wa7dat" | "حبة" => Some(QuantityUnit::Unit),
        _ => None,
    }
}

/// Scan `re` over `text`; `normalize` maps a unit token to its code and the
/// divisor converting the amount into that unit
fn amounts<U, F>(re: &Regex, text: &str, normalize: F) -> Vec<Amount<U>>
where
    F: Fn(&str) -> Option<(U, f64)>,
{
    re.captures_iter(text)
        .filter_map(|caps| {
            let value = parse_amount(caps.get(1)?.as_str())?;
            let (unit, divisor) = normalize(caps.get(2)?.as_str())?;
            let original = format!("{} {}", caps.get(1)?.as_str(), caps.get(2)?.as_str());
            Some(Amount {
                value: value / divisor,
                unit,
                original,
            })
        })
        .collect()
}

/// Entity extractor over the gazetteers
pub struct EntityExtractor {
    gazetteer_words: HashSet<String>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        let gazetteer_words = geo::CITIES
            .iter()
            .flat_map(|city| city.aliases.iter())
            .chain(ORGANIZATION_NOUNS.iter())
            .chain(DARIJA_MARKERS.iter())
            .chain(FRENCH_FUNCTION_WORDS.iter())
            .map(|w| w.to_string())
            .collect();

        Self { gazetteer_words }
    }

    /// Extract entities. `raw` is the original input (case preserved, used for
    /// people), `normalized` the lowercased text used for everything else.
    pub fn extract(&self, raw: &str, normalized: &str) -> Entities {
        Entities {
            locations: self.locations(normalized),
            organizations: self.organizations(normalized),
            people: self.people(raw),
            amounts: Amounts {
                money: amounts(&MONEY, normalized, currency_of),
                time: amounts(&TIME, normalized, |u| time_unit_of(u).map(|t| (t, 1.0))),
                quantities: amounts(&QUANTITY, normalized, |u| {
                    quantity_unit_of(u).map(|q| (q, 1.0))
                }),
            },
        }
    }

    fn locations(&self, text: &str) -> Vec<String> {
        geo::find_cities(text)
            .into_iter()
            .map(|city| city.name.to_string())
            .collect()
    }

    fn organizations(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for re in ORGANIZATIONS.iter() {
            for m in re.find_iter(text) {
                let noun = m.as_str().to_string();
                if !found.contains(&noun) {
                    found.push(noun);
                }
            }
        }
        found
    }

    /// Capitalized tokens of 3 to 19 characters that are not gazetteer or
    /// function words
    fn people(&self, raw: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for token in raw.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphabetic());
            let length = word.chars().count();
            if !(3..20).contains(&length) {
                continue;
            }

            let mut chars = word.chars();
            let capitalized = chars.next().is_some_and(|c| c.is_uppercase());
            let rest_lower = chars.clone().any(|c| c.is_lowercase());
            let alphabetic = word.chars().all(|c| c.is_alphabetic());

            if capitalized
                && rest_lower
                && alphabetic
                && !self.gazetteer_words.contains(&word.to_lowercase())
                && !found.iter().any(|p| p == word)
            {
                found.push(word.to_string());
            }
        }

        found
    }
}
