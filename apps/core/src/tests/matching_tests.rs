//! Matching Module Tests
//!
//! Ranking properties over small mentor pools: eligibility gates, score
//! bounds, confidence buckets, ordering and limits.

use crate::matching::{
    find_mentors, generate_introduction, score_mentor, Creator, IdeaOperations, IdeaProblem,
    IdeaStatement, LivedExperience, MatchConfidence, Mentor, Tone, MIN_INTIMACY_RATING,
};

fn mentor(id: &str) -> Mentor {
    Mentor {
        id: id.to_string(),
        name: format!("Mentor {}", id),
        contact: Default::default(),
        expertise: vec![],
        sectors: vec![],
        location: String::new(),
        lived_experience: LivedExperience::default(),
        intimacy_rating: 7.0,
        success_rate: 0.5,
        available_slots: 2,
    }
}

fn healthtech_mentor(id: &str) -> Mentor {
    Mentor {
        name: "Dr. Leila Bennani".to_string(),
        expertise: vec!["RFID".to_string(), "healthtech".to_string()],
        sectors: vec!["healthtech".to_string()],
        location: "Rabat".to_string(),
        lived_experience: LivedExperience {
            founded: vec!["PharmaLink".to_string()],
            years_experience: 14,
            ..Default::default()
        },
        intimacy_rating: 9.0,
        success_rate: 0.85,
        available_slots: 3,
        ..mentor(id)
    }
}

fn healthtech_idea() -> IdeaStatement {
    IdeaStatement {
        title: Some("Traçabilité des médicaments".to_string()),
        problem: Some(IdeaProblem {
            sector: Some("healthtech".to_string()),
            location: Some("Rabat".to_string()),
            description: Some("Kayn mochkil f tracking dyal dwa f sbitar".to_string()),
        }),
        operations: Some(IdeaOperations {
            technology: vec!["RFID".to_string()],
        }),
        alignment: None,
    }
}

fn varied_pool() -> Vec<Mentor> {
    vec![
        healthtech_mentor("health-1"),
        Mentor {
            expertise: vec!["IoT".to_string()],
            sectors: vec!["agritech".to_string()],
            location: "Salé".to_string(),
            ..mentor("agri-1")
        },
        Mentor {
            location: "Agadir".to_string(),
            intimacy_rating: 10.0,
            success_rate: 1.0,
            ..mentor("generalist")
        },
        Mentor {
            intimacy_rating: MIN_INTIMACY_RATING - 0.5,
            ..healthtech_mentor("shallow")
        },
        Mentor {
            available_slots: 0,
            ..healthtech_mentor("busy")
        },
    ]
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_perfect_match_scenario() {
        let matches = find_mentors(&healthtech_idea(), &[healthtech_mentor("m1")], 5);

        assert_eq!(matches.len(), 1);
        assert!(matches[0].match_score >= 90, "Got {}", matches[0].match_score);
        assert_eq!(matches[0].confidence, MatchConfidence::Perfect);
        assert_eq!(matches[0].alignment.location_match, 1.0);
    }

    #[test]
    fn test_sector_listed_only_under_sectors_still_perfect() {
        let cases = vec![(8.0, 0.8), (8.0, 0.2), (8.0, 0.0), (10.0, 0.0)];

        for (intimacy, success_rate) in cases {
            let m = Mentor {
                expertise: vec!["RFID".to_string()],
                intimacy_rating: intimacy,
                success_rate,
                ..healthtech_mentor("m1")
            };
            let matches = find_mentors(&healthtech_idea(), &[m], 5);

            assert_eq!(
                matches[0].confidence,
                MatchConfidence::Perfect,
                "Expected Perfect for intimacy {} and success rate {}, got {}",
                intimacy,
                success_rate,
                matches[0].match_score
            );
        }
    }

    #[test]
    fn test_short_technology_names_do_not_match_inside_words() {
        let idea = IdeaStatement {
            operations: Some(IdeaOperations {
                technology: vec!["AI".to_string(), "IT".to_string()],
            }),
            ..Default::default()
        };
        let m = Mentor {
            expertise: vec!["Retail".to_string(), "Digital marketing".to_string()],
            ..mentor("m1")
        };

        let result = score_mentor(&idea, &m);
        assert_eq!(result.alignment.expertise_match, 0.0);
        assert!(!result.reasons.iter().any(|r| r.starts_with("Expertise in")));
    }

    #[test]
    fn test_gated_mentors_never_returned() {
        let matches = find_mentors(&healthtech_idea(), &varied_pool(), 10);

        for m in &matches {
            assert!(m.mentor.available_slots > 0, "{} has no slots", m.mentor.id);
            assert!(m.mentor.intimacy_rating >= MIN_INTIMACY_RATING);
        }
        assert!(!matches.iter().any(|m| m.mentor.id == "shallow" || m.mentor.id == "busy"));
    }

    #[test]
    fn test_scores_bounded_and_sorted() {
        let matches = find_mentors(&healthtech_idea(), &varied_pool(), 10);

        assert_eq!(matches.len(), 3);
        for m in &matches {
            assert!(m.match_score <= 100);
            assert_eq!(m.confidence, MatchConfidence::from_score(m.match_score));
        }
        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        assert_eq!(matches[0].mentor.id, "health-1");
    }

    #[test]
    fn test_limit_caps_results() {
        let pool: Vec<Mentor> = (0..20).map(|i| mentor(&format!("m{:02}", i))).collect();

        for limit in [0, 1, 5, 20, 50] {
            let matches = find_mentors(&healthtech_idea(), &pool, limit);
            assert_eq!(matches.len(), limit.min(20));
        }
    }

    #[test]
    fn test_empty_pool_and_empty_idea() {
        assert!(find_mentors(&healthtech_idea(), &[], 5).is_empty());

        let matches = find_mentors(&IdeaStatement::default(), &varied_pool(), 5);
        assert_eq!(matches.len(), 3);
        for m in &matches {
            assert_eq!(m.alignment.expertise_match, 0.0);
            assert_eq!(m.alignment.sector_match, 0.0);
            assert_eq!(m.alignment.location_match, 0.0);
        }
    }

    #[test]
    fn test_same_region_counts_half() {
        let idea = IdeaStatement {
            problem: Some(IdeaProblem {
                location: Some("Rabat".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = score_mentor(&idea, &varied_pool()[1]);
        assert_eq!(result.alignment.location_match, 0.5);
    }

    #[test]
    fn test_pool_untouched() {
        let pool = varied_pool();
        let before = pool.clone();
        let _ = find_mentors(&healthtech_idea(), &pool, 5);
        assert_eq!(pool, before);
    }
}

#[cfg(test)]
mod confidence_tests {
    use super::*;

    #[test]
    fn test_bucket_edges() {
        let cases = vec![
            (100, MatchConfidence::Perfect),
            (90, MatchConfidence::Perfect),
            (89, MatchConfidence::High),
            (70, MatchConfidence::High),
            (69, MatchConfidence::Medium),
            (50, MatchConfidence::Medium),
            (49, MatchConfidence::Low),
            (0, MatchConfidence::Low),
        ];

        for (score, expected) in cases {
            assert_eq!(
                MatchConfidence::from_score(score),
                expected,
                "Expected {:?} for score {}",
                expected,
                score
            );
        }
    }
}

#[cfg(test)]
mod introduction_tests {
    use super::*;

    fn creator() -> Creator {
        Creator {
            name: "Hamza El Idrissi".to_string(),
            email: "hamza@example.ma".to_string(),
            bio: None,
        }
    }

    #[test]
    fn test_introduction_for_top_match() {
        let idea = healthtech_idea();
        let matches = find_mentors(&idea, &varied_pool(), 1);
        let message = generate_introduction(&idea, &matches[0].mentor, &creator(), false);

        assert!(message.body.contains("Hamza El Idrissi"));
        assert!(message.body.contains("Dr. Leila Bennani"));
        assert!(message.body.contains("Traçabilité des médicaments"));
        assert!(message.intimacy_note.contains("lived experience"));
        assert!(message.intimacy_note.contains("PharmaLink"));
        assert_eq!(message.tone, Tone::Warm);
        assert!(message.share_prompt.is_none());
    }

    #[test]
    fn test_share_prompt_toggle() {
        let idea = healthtech_idea();
        let m = healthtech_mentor("m1");

        assert!(generate_introduction(&idea, &m, &creator(), true).share_prompt.is_some());
        assert!(generate_introduction(&idea, &m, &creator(), false).share_prompt.is_none());
    }

    #[test]
    fn test_introduction_serializes_camel_case() {
        let message = generate_introduction(&healthtech_idea(), &healthtech_mentor("m1"), &creator(), true);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["tone"], "warm");
        assert!(json.get("suggestedAsk").is_some());
        assert!(json.get("intimacyNote").is_some());
        assert!(json.get("sharePrompt").is_some());
    }
}
