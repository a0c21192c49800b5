//! # Matching Module
//!
//! Ranks mentors for an idea statement and drafts the first introduction.
//!
//! ## Components
//! - `models`: mentor, idea and match records
//! - `scoring`: alignment factors and the weighted match score
//! - `engine`: eligibility gates, ranking and reasons
//! - `introduction`: introduction message drafting
//! - `pool`: loading mentor pools and ideas from JSON

pub mod engine;
pub mod introduction;
pub mod models;
pub mod pool;
pub mod scoring;

pub use engine::{find_mentors, score_mentor, MentorMatcher, DEFAULT_LIMIT};
pub use introduction::{connection_points, generate_introduction};
pub use models::{
    Availability, Contact, Creator, IdeaAlignment, IdeaOperations, IdeaProblem, IdeaStatement,
    IntroductionMessage, LivedExperience, MatchAlignment, MatchConfidence, Mentor, MentorMatch,
    Tone,
};
pub use pool::{load_idea, load_mentor_pool, parse_mentor, parse_mentor_pool};
pub use scoring::MIN_INTIMACY_RATING;
