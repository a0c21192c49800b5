//! Mentor scoring.
//!
//! Four alignment factors in [0, 1] are combined into a 0-100 match score,
//! plus a track-record bonus from the mentor's success rate.

use super::models::{IdeaStatement, MatchAlignment, Mentor};
use crate::geo;

/// Mentors below this intimacy rating are never proposed
pub const MIN_INTIMACY_RATING: f32 = 6.0;

const EXPERTISE_WEIGHT: f32 = 40.0;
const SECTOR_WEIGHT: f32 = 15.0;
const LOCATION_WEIGHT: f32 = 20.0;
const INTIMACY_WEIGHT: f32 = 20.0;
const TRACK_RECORD_WEIGHT: f32 = 5.0;

const SAME_CITY: f32 = 1.0;
const SAME_REGION: f32 = 0.5;

/// A mentor is considered only with free slots and enough lived experience
pub fn is_eligible(mentor: &Mentor) -> bool {
    mentor.available_slots > 0 && mentor.intimacy_rating >= MIN_INTIMACY_RATING
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whole-word containment in either direction, case-insensitive.
///
/// "iot" matches "IoT sensors"; "ai" does not match "retail".
pub fn shares_words(a: &str, b: &str) -> bool {
    let a = words(a);
    let b = words(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.iter().all(|w| b.contains(w)) || b.iter().all(|w| a.contains(w))
}

fn in_any(term: &str, entries: &[String]) -> bool {
    entries.iter().any(|e| shares_words(e, term))
}

/// Idea technologies found in the mentor's expertise
pub fn matched_technologies<'a>(idea: &'a IdeaStatement, mentor: &Mentor) -> Vec<&'a str> {
    idea.technologies()
        .into_iter()
        .filter(|term| in_any(term, &mentor.expertise))
        .collect()
}

/// Idea terms covered by the mentor's profile.
///
/// Technologies are looked up in `expertise`; the sector in `expertise`
/// and `sectors`.
pub fn matched_expertise<'a>(idea: &'a IdeaStatement, mentor: &Mentor) -> Vec<&'a str> {
    let sector = idea.sector();
    idea.expertise_terms()
        .into_iter()
        .filter(|term| {
            in_any(term, &mentor.expertise)
                || (sector == Some(*term) && in_any(term, &mentor.sectors))
        })
        .collect()
}

/// Share of the idea's terms covered by the mentor's profile
pub fn expertise_match(idea: &IdeaStatement, mentor: &Mentor) -> f32 {
    let terms = idea.expertise_terms();
    if terms.is_empty() {
        return 0.0;
    }
    matched_expertise(idea, mentor).len() as f32 / terms.len() as f32
}

pub fn sector_match(idea: &IdeaStatement, mentor: &Mentor) -> f32 {
    match idea.sector() {
        Some(sector) if in_any(sector, &mentor.sectors) => 1.0,
        _ => 0.0,
    }
}

/// 1.0 same city, 0.5 same region, 0.0 otherwise.
///
/// Locations outside the gazetteer only match on identical spelling.
pub fn location_match(idea_location: Option<&str>, mentor_location: &str) -> f32 {
    let Some(idea_location) = idea_location else {
        return 0.0;
    };
    if mentor_location.trim().is_empty() {
        return 0.0;
    }

    match (geo::lookup(idea_location), geo::lookup(mentor_location)) {
        (Some(a), Some(b)) if a.name == b.name => SAME_CITY,
        (Some(a), Some(b)) if a.region == b.region => SAME_REGION,
        (Some(_), Some(_)) => 0.0,
        _ if idea_location.trim().eq_ignore_ascii_case(mentor_location.trim()) => SAME_CITY,
        _ => 0.0,
    }
}

pub fn intimacy_match(mentor: &Mentor) -> f32 {
    (mentor.intimacy_rating / 10.0).clamp(0.0, 1.0)
}

/// All four factors for one idea/mentor pair
pub fn alignment(idea: &IdeaStatement, mentor: &Mentor) -> MatchAlignment {
    MatchAlignment {
        expertise_match: expertise_match(idea, mentor),
        sector_match: sector_match(idea, mentor),
        location_match: location_match(idea.location(), &mentor.location),
        intimacy_match: intimacy_match(mentor),
    }
}

/// Weighted sum of the factors plus the success-rate bonus, rounded and clamped to 0-100
pub fn match_score(alignment: &MatchAlignment, success_rate: f32) -> u32 {
    let score = alignment.expertise_match * EXPERTISE_WEIGHT
        + alignment.sector_match * SECTOR_WEIGHT
        + alignment.location_match * LOCATION_WEIGHT
        + alignment.intimacy_match * INTIMACY_WEIGHT
        + success_rate.clamp(0.0, 1.0) * TRACK_RECORD_WEIGHT;

    score.round().clamp(0.0, 100.0) as u32
}
