//! Loading mentor pools and idea statements from JSON documents.
//!
//! A pool is a JSON array of mentor records. Records that fail to decode or
//! validate are skipped with a warning; the rest of the pool is kept.

use std::fs;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

use super::models::{IdeaStatement, Mentor};
use crate::error::AppError;

/// Decode and validate one mentor record
pub fn parse_mentor(record: serde_json::Value) -> Result<Mentor, AppError> {
    let mentor: Mentor = serde_json::from_value(record)?;
    mentor.validate()?;
    Ok(mentor)
}

/// Decode and validate a mentor pool
pub fn parse_mentor_pool(json: &str) -> Result<Vec<Mentor>, AppError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = records.len();
    let mut mentors = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        let id = record
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("?")
            .to_string();

        match parse_mentor(record) {
            Ok(mentor) => mentors.push(mentor),
            Err(e) => warn!("Skipping mentor '{}' (record #{}): {}", id, index, e),
        }
    }

    if mentors.len() < total {
        warn!("Rejected {} of {} mentor records", total - mentors.len(), total);
    }

    Ok(mentors)
}

/// Read and parse a mentor pool file
pub fn load_mentor_pool(path: &Path) -> Result<Vec<Mentor>, AppError> {
    let json = fs::read_to_string(path)?;
    let mentors = parse_mentor_pool(&json)?;
    info!("Loaded {} mentors from {}", mentors.len(), path.display());
    Ok(mentors)
}

/// Read an idea statement file
pub fn load_idea(path: &Path) -> Result<IdeaStatement, AppError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
