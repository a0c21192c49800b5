use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::priorities::PriorityMatch;

/// How to reach a mentor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// First-hand experience a mentor can speak from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivedExperience {
    /// Companies or cooperatives the mentor founded.
    #[serde(default)]
    pub founded: Vec<String>,
    /// Organizations the mentor worked in.
    #[serde(default)]
    pub worked: Vec<String>,
    /// Notable projects the mentor delivered.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub years_experience: u32,
}

/// A mentor record as supplied by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    /// City name, any accepted spelling.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub lived_experience: LivedExperience,
    /// Depth of lived domain experience, 0 to 10. Not a popularity score.
    #[validate(range(min = 0.0, max = 10.0))]
    pub intimacy_rating: f32,
    /// Share of past mentorships that reached their goal, 0 to 1.
    #[validate(range(min = 0.0, max = 1.0))]
    pub success_rate: f32,
    #[serde(default)]
    pub available_slots: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaProblem {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaOperations {
    #[serde(default)]
    pub technology: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAlignment {
    #[serde(default)]
    pub priority_ids: Vec<String>,
}

/// A submitted idea. Every field is optional; matching degrades gracefully.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaStatement {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub problem: Option<IdeaProblem>,
    #[serde(default)]
    pub operations: Option<IdeaOperations>,
    #[serde(default)]
    pub alignment: Option<IdeaAlignment>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl IdeaStatement {
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_ref())
    }

    pub fn sector(&self) -> Option<&str> {
        non_blank(self.problem.as_ref().and_then(|p| p.sector.as_ref()))
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.problem.as_ref().and_then(|p| p.location.as_ref()))
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(self.problem.as_ref().and_then(|p| p.description.as_ref()))
    }

    pub fn technologies(&self) -> Vec<&str> {
        self.operations
            .as_ref()
            .map(|ops| {
                ops.technology
                    .iter()
                    .map(|t| t.trim())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Technology terms followed by the sector, without case-insensitive duplicates
    pub fn expertise_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = Vec::new();
        for term in self.technologies().into_iter().chain(self.sector()) {
            if !terms.iter().any(|t| t.eq_ignore_ascii_case(term)) {
                terms.push(term);
            }
        }
        terms
    }

    pub fn priority_ids(&self) -> &[String] {
        self.alignment
            .as_ref()
            .map(|a| a.priority_ids.as_slice())
            .unwrap_or_default()
    }

    /// Append auto-detected priorities to the alignment block, keeping
    /// existing ids first and skipping duplicates. Returns how many were added.
    pub fn merge_priority_tags(&mut self, detected: &[PriorityMatch]) -> usize {
        let alignment = self.alignment.get_or_insert_with(IdeaAlignment::default);
        let before = alignment.priority_ids.len();

        for found in detected {
            if !alignment.priority_ids.contains(&found.priority_id) {
                alignment.priority_ids.push(found.priority_id.clone());
            }
        }

        alignment.priority_ids.len() - before
    }
}

/// Qualitative bucket of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    Perfect,
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    /// `>= 90` perfect, `>= 70` high, `>= 50` medium, otherwise low
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => MatchConfidence::Perfect,
            70..=89 => MatchConfidence::High,
            50..=69 => MatchConfidence::Medium,
            _ => MatchConfidence::Low,
        }
    }
}

/// Per-factor alignment, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAlignment {
    pub expertise_match: f32,
    pub sector_match: f32,
    pub location_match: f32,
    pub intimacy_match: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available: bool,
    pub response_expected: String,
}

/// One ranked mentor for an idea. Built fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorMatch {
    pub mentor: Mentor,
    /// 0 to 100
    pub match_score: u32,
    pub confidence: MatchConfidence,
    pub alignment: MatchAlignment,
    pub reasons: Vec<String>,
    pub availability: Availability,
}

/// The idea's author, as shown to the mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Creator {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Shared ground was found between the idea and the mentor
    Warm,
    /// No shared ground; a more formal first contact
    Respectful,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroductionMessage {
    pub subject: String,
    pub body: String,
    pub tone: Tone,
    pub suggested_ask: String,
    pub intimacy_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_prompt: Option<String>,
}
