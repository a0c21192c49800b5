// Atlas command-line entry point
// Analyzes an idea statement and ranks mentors for it

use anyhow::Context;
use clap::Parser;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{info, warn};

use atlas_core::brain::{CachedAnalyzer, TextAnalysis};
use atlas_core::config::AppConfig;
use atlas_core::logging;
use atlas_core::matching::{self, IdeaStatement, MentorMatch};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchReport {
    generated_at: DateTime<Utc>,
    idea: IdeaStatement,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<TextAnalysis>,
    matches: Vec<MentorMatch>,
}

/// Atlas - mentor matching for Moroccan founders
///
/// Reads an idea statement, analyzes its problem description and ranks the
/// mentor pool against it. The report is printed as JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "atlas", version)]
#[command(about = "Rank mentors for an idea statement")]
struct Args {
    /// Idea statement JSON file
    idea: PathBuf,

    /// Mentor pool JSON file (falls back to ATLAS_MENTOR_POOL_PATH)
    mentors: Option<PathBuf>,

    /// Maximum number of matches (falls back to ATLAS_DEFAULT_LIMIT)
    #[arg(long, short)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    logging::init(config.log_format)?;

    let pool_path = args
        .mentors
        .or(config.mentor_pool_path.clone())
        .context("no mentor pool given and ATLAS_MENTOR_POOL_PATH is unset")?;

    let mut idea = matching::load_idea(&args.idea)
        .with_context(|| format!("failed to load idea {}", args.idea.display()))?;
    let mentors = matching::load_mentor_pool(&pool_path)
        .with_context(|| format!("failed to load mentors {}", pool_path.display()))?;

    let capacity =
        NonZeroUsize::new(config.analysis_cache_size).unwrap_or(CachedAnalyzer::DEFAULT_CAPACITY);
    let mut analyzer = CachedAnalyzer::new(capacity);

    let analysis = idea.description().map(|text| analyzer.analyze(text));
    match &analysis {
        Some(analysis) => {
            let added = idea.merge_priority_tags(&analysis.priority_confidence);
            info!("{} ({} priorities added to idea)", analysis.summary(), added);
        }
        None => warn!("Idea has no problem description, skipping text analysis"),
    }

    let limit = args.limit.unwrap_or(config.default_limit);
    let matches = matching::find_mentors(&idea, &mentors, limit);

    let report = MatchReport {
        generated_at: Utc::now(),
        idea,
        analysis,
        matches,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals_and_limit() {
        let args = Args::try_parse_from(["atlas", "idea.json", "mentors.json", "--limit", "3"])
            .expect("Args should parse");
        assert_eq!(args.idea, PathBuf::from("idea.json"));
        assert_eq!(args.mentors, Some(PathBuf::from("mentors.json")));
        assert_eq!(args.limit, Some(3));

        let args = Args::try_parse_from(["atlas", "idea.json", "-l", "1"]).expect("Args should parse");
        assert!(args.mentors.is_none());
        assert_eq!(args.limit, Some(1));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Args::try_parse_from(["atlas"]).is_err());
        assert!(Args::try_parse_from(["atlas", "idea.json", "--limit", "many"]).is_err());
        assert!(Args::try_parse_from(["atlas", "idea.json", "--limit"]).is_err());
    }
}
