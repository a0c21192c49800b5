//! Mentor ranking.
//!
//! Filters the pool by the eligibility gates, scores every remaining
//! mentor against the idea and returns the best `limit` matches.

use tracing::{debug, info};

use super::models::{Availability, IdeaStatement, MatchConfidence, Mentor, MentorMatch};
use super::scoring;
use crate::geo;

/// Matches returned when the caller does not ask for a specific count
pub const DEFAULT_LIMIT: usize = 5;

/// Slots from which a mentor is expected to answer within a day
const FAST_RESPONSE_SLOTS: u32 = 3;

/// Rank `mentors` for `idea`, best first.
///
/// Ties on score are broken by mentor id so the order is stable across
/// calls. The pool is never modified.
pub fn find_mentors(idea: &IdeaStatement, mentors: &[Mentor], limit: usize) -> Vec<MentorMatch> {
    let mut matches: Vec<MentorMatch> = mentors
        .iter()
        .filter(|m| scoring::is_eligible(m))
        .map(|m| score_mentor(idea, m))
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.mentor.id.cmp(&b.mentor.id))
    });
    matches.truncate(limit);

    info!(
        "Ranked {} mentors for '{}' ({} eligible in pool of {})",
        matches.len(),
        idea.title().unwrap_or("untitled idea"),
        mentors.iter().filter(|m| scoring::is_eligible(m)).count(),
        mentors.len()
    );

    matches
}

/// Score a single mentor, regardless of eligibility
pub fn score_mentor(idea: &IdeaStatement, mentor: &Mentor) -> MentorMatch {
    let alignment = scoring::alignment(idea, mentor);
    let match_score = scoring::match_score(&alignment, mentor.success_rate);

    debug!(
        "Mentor {} scored {} (expertise {:.2}, sector {:.2}, location {:.2}, intimacy {:.2})",
        mentor.id,
        match_score,
        alignment.expertise_match,
        alignment.sector_match,
        alignment.location_match,
        alignment.intimacy_match
    );

    MentorMatch {
        mentor: mentor.clone(),
        match_score,
        confidence: MatchConfidence::from_score(match_score),
        alignment,
        reasons: reasons(idea, mentor, alignment.location_match),
        availability: availability(mentor),
    }
}

fn reasons(idea: &IdeaStatement, mentor: &Mentor, location_match: f32) -> Vec<String> {
    let mut reasons = Vec::new();

    let expertise = scoring::matched_technologies(idea, mentor);
    if !expertise.is_empty() {
        reasons.push(format!("Expertise in {}", expertise.join(", ")));
    }

    if let Some(sector) = idea.sector() {
        if scoring::sector_match(idea, mentor) > 0.0 {
            reasons.push(format!("Works in the {} sector", sector));
        }
    }

    if !mentor.lived_experience.founded.is_empty() {
        reasons.push(format!(
            "Founded {}",
            mentor.lived_experience.founded.join(", ")
        ));
    }

    if location_match >= 1.0 {
        reasons.push(format!("Based in {}", mentor.location));
    } else if location_match > 0.0 {
        let region = geo::lookup(&mentor.location)
            .map(|city| city.region.name())
            .unwrap_or("the same region");
        reasons.push(format!("Based in {}, in {}", mentor.location, region));
    }

    if mentor.success_rate > 0.0 {
        reasons.push(format!(
            "{}% success rate with past mentees",
            (mentor.success_rate.clamp(0.0, 1.0) * 100.0).round()
        ));
    }

    reasons
}

fn availability(mentor: &Mentor) -> Availability {
    let response_expected = if mentor.available_slots >= FAST_RESPONSE_SLOTS {
        "within 24 hours"
    } else if mentor.available_slots > 0 {
        "within 3 days"
    } else {
        "no open slots"
    };

    Availability {
        available: mentor.available_slots > 0,
        response_expected: response_expected.to_string(),
    }
}

/// A fixed mentor pool queried for many ideas
pub struct MentorMatcher {
    mentors: Vec<Mentor>,
}

impl MentorMatcher {
    pub fn new(mentors: Vec<Mentor>) -> Self {
        Self { mentors }
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn find_mentors(&self, idea: &IdeaStatement, limit: usize) -> Vec<MentorMatch> {
        find_mentors(idea, &self.mentors, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::{IdeaOperations, IdeaProblem, LivedExperience};

    fn mentor(id: &str, expertise: &[&str], location: &str, intimacy: f32, slots: u32) -> Mentor {
        Mentor {
            id: id.to_string(),
            name: format!("Mentor {}", id),
            contact: Default::default(),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            sectors: vec!["healthtech".to_string()],
            location: location.to_string(),
            lived_experience: LivedExperience {
                founded: vec!["MedTrack".to_string()],
                ..Default::default()
            },
            intimacy_rating: intimacy,
            success_rate: 0.8,
            available_slots: slots,
        }
    }

    fn healthtech_idea() -> IdeaStatement {
        IdeaStatement {
            title: Some("Suivi des médicaments".to_string()),
            problem: Some(IdeaProblem {
                sector: Some("healthtech".to_string()),
                location: Some("Rabat".to_string()),
                description: None,
            }),
            operations: Some(IdeaOperations {
                technology: vec!["RFID".to_string()],
            }),
            alignment: None,
        }
    }

    #[test]
    fn test_gates_filter_pool() {
        let pool = vec![
            mentor("a", &["RFID"], "Rabat", 9.0, 0),
            mentor("b", &["RFID"], "Rabat", 5.0, 3),
            mentor("c", &["RFID"], "Rabat", 7.0, 1),
        ];

        let matches = find_mentors(&healthtech_idea(), &pool, 10);
        let ids: Vec<&str> = matches.iter().map(|m| m.mentor.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let pool = vec![
            mentor("z", &["RFID"], "Rabat", 8.0, 2),
            mentor("a", &["RFID"], "Rabat", 8.0, 2),
        ];

        let matches = find_mentors(&healthtech_idea(), &pool, 10);
        assert_eq!(matches[0].match_score, matches[1].match_score);
        assert_eq!(matches[0].mentor.id, "a");
    }

    #[test]
    fn test_limit_respected() {
        let pool: Vec<Mentor> = (0..8)
            .map(|i| mentor(&format!("m{}", i), &["RFID"], "Casablanca", 7.0, 1))
            .collect();

        assert_eq!(find_mentors(&healthtech_idea(), &pool, 3).len(), 3);
        assert!(find_mentors(&healthtech_idea(), &pool, 0).is_empty());
    }

    #[test]
    fn test_reasons_and_availability() {
        let m = mentor("a", &["RFID"], "Salé", 9.0, 4);
        let result = score_mentor(&healthtech_idea(), &m);

        assert_eq!(result.reasons[0], "Expertise in RFID");
        assert!(result.reasons.iter().any(|r| r == "Works in the healthtech sector"));
        assert!(result.reasons.iter().any(|r| r == "Founded MedTrack"));
        assert!(result.reasons.iter().any(|r| r.contains("Salé") && r.contains("Rabat-Salé-Kénitra")));
        assert!(result.reasons.iter().any(|r| r == "80% success rate with past mentees"));
        assert!(result.availability.available);
        assert_eq!(result.availability.response_expected, "within 24 hours");
    }

    #[test]
    fn test_matcher_reuses_pool() {
        let matcher = MentorMatcher::new(vec![mentor("a", &["RFID"], "Rabat", 9.0, 1)]);
        let first = matcher.find_mentors(&healthtech_idea(), DEFAULT_LIMIT);
        let second = matcher.find_mentors(&healthtech_idea(), DEFAULT_LIMIT);

        assert_eq!(first, second);
        assert_eq!(matcher.mentors().len(), 1);
        assert_eq!(first[0].availability.response_expected, "within 3 days");
    }
}
