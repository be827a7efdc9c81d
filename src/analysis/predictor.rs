use serde::{Deserialize, Serialize};
use std::fmt;

use super::identity::{IdentityHasher, Seed};
use super::random::RandomSource;
use crate::models::Format;

const BASE_PROBABILITY: i64 = 50;
const POINTS_PER_RANK: i64 = 3;
const MIN_PROBABILITY: i64 = 20;
const MAX_PROBABILITY: i64 = 80;

const RANKING_IMPACT_PER_PLACE: u32 = 5;
const TOSS_IMPACT: u32 = 15;
const HOME_IMPACT: u32 = 10;
const FORMAT_IMPACT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub name: String,
    pub ranking: u32,
}

impl TeamStanding {
    pub fn new(name: impl Into<String>, ranking: u32) -> Self {
        TeamStanding {
            name: name.into(),
            ranking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchContext {
    pub toss_winner: Option<String>,
    pub venue_name: Option<String>,
    pub match_format: Format,
}

impl MatchContext {
    /// Seed for reproducible confidence draws on this fixture.
    pub fn seed(&self, team_a: &TeamStanding, team_b: &TeamStanding) -> Seed {
        IdentityHasher::hash_parts(&[
            &team_a.name,
            &team_b.name,
            self.toss_winner.as_deref().unwrap_or(""),
            self.venue_name.as_deref().unwrap_or(""),
            self.match_format.label(),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub impact: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn for_probability(probability: u32) -> Self {
        if probability > 70 {
            ConfidenceLevel::High
        } else if probability > 55 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub winner: String,
    pub probability: u32,
    pub loser: String,
    pub loser_probability: u32,
    pub confidence: u32,
    pub confidence_level: ConfidenceLevel,
    pub match_format: Format,
    pub factors: Vec<Factor>,
}

/// Linear ranking heuristic with flat toss/home/format bonuses.
///
/// Does not validate its inputs: callers must pass two distinct teams.
pub struct MatchOutcomePredictor;

impl MatchOutcomePredictor {
    pub fn predict(
        team_a: &TeamStanding,
        team_b: &TeamStanding,
        context: &MatchContext,
        rng: &mut dyn RandomSource,
    ) -> PredictionResult {
        let ranking_diff = team_b.ranking as i64 - team_a.ranking as i64;
        let prob_a = (BASE_PROBABILITY + ranking_diff * POINTS_PER_RANK)
            .clamp(MIN_PROBABILITY, MAX_PROBABILITY) as u32;
        let prob_b = 100 - prob_a;

        // Team A only wins outright; an even contest goes to team B.
        let (winner, loser, probability) = if prob_a > 50 {
            (team_a, team_b, prob_a)
        } else {
            (team_b, team_a, prob_b)
        };

        let confidence = (75.0 + rng.next_unit() * 20.0).round() as u32;
        let factors = Self::factors(ranking_diff, winner, context);

        log::debug!(
            "{} vs {}: diff {}, {} {}% (confidence {})",
            team_a.name,
            team_b.name,
            ranking_diff,
            winner.name,
            probability,
            confidence
        );

        PredictionResult {
            winner: winner.name.clone(),
            probability,
            loser: loser.name.clone(),
            loser_probability: 100 - probability,
            confidence,
            confidence_level: ConfidenceLevel::for_probability(probability),
            match_format: context.match_format,
            factors,
        }
    }

    fn factors(ranking_diff: i64, winner: &TeamStanding, context: &MatchContext) -> Vec<Factor> {
        let toss = match &context.toss_winner {
            Some(toss_winner) if toss_winner.trim().eq_ignore_ascii_case(winner.name.trim()) => {
                TOSS_IMPACT
            }
            _ => 0,
        };

        let home = match &context.venue_name {
            Some(venue) if venue.to_lowercase().contains(&winner.name.to_lowercase()) => HOME_IMPACT,
            _ => 0,
        };

        [
            ("Team Ranking", ranking_diff.unsigned_abs() as u32 * RANKING_IMPACT_PER_PLACE),
            ("Toss Advantage", toss),
            ("Home Advantage", home),
            ("Format Experience", FORMAT_IMPACT),
        ]
        .into_iter()
        .filter(|(_, impact)| *impact > 0)
        .map(|(name, impact)| Factor {
            name: name.to_string(),
            impact,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::testing::FixedRandom;
    use crate::analysis::random::SeededRandom;
    use rstest::rstest;

    fn context(toss: Option<&str>, venue: Option<&str>) -> MatchContext {
        MatchContext {
            toss_winner: toss.map(str::to_string),
            venue_name: venue.map(str::to_string),
            match_format: Format::Odi,
        }
    }

    fn impact(result: &PredictionResult, name: &str) -> Option<u32> {
        result.factors.iter().find(|f| f.name == name).map(|f| f.impact)
    }

    #[test]
    fn india_at_home_with_toss() {
        let india = TeamStanding::new("India", 1);
        let australia = TeamStanding::new("Australia", 2);
        let ctx = context(Some("India"), Some("Home Ground, India"));

        let result = MatchOutcomePredictor::predict(&india, &australia, &ctx, &mut FixedRandom(0.5));

        assert_eq!(result.winner, "India");
        assert_eq!(result.probability, 53);
        assert_eq!(result.loser, "Australia");
        assert_eq!(result.loser_probability, 47);
        assert_eq!(result.confidence, 85);
        let names: Vec<&str> = result.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Team Ranking", "Toss Advantage", "Home Advantage", "Format Experience"]
        );
        assert_eq!(impact(&result, "Team Ranking"), Some(5));
        assert_eq!(impact(&result, "Toss Advantage"), Some(15));
        assert_eq!(impact(&result, "Home Advantage"), Some(10));
        assert_eq!(impact(&result, "Format Experience"), Some(20));
    }

    #[test]
    fn zero_impact_factors_are_dropped() {
        let a = TeamStanding::new("England", 3);
        let b = TeamStanding::new("Pakistan", 3);
        let result = MatchOutcomePredictor::predict(&a, &b, &context(Some("England"), None), &mut FixedRandom(0.0));
        // Even contest goes to team B, so England's toss win does not count.
        assert_eq!(result.winner, "Pakistan");
        assert_eq!(result.probability, 50);
        assert_eq!(result.factors.len(), 1);
        assert_eq!(result.factors[0].name, "Format Experience");
        assert_eq!(result.confidence, 75);
    }

    #[test]
    fn underdog_team_a_loses() {
        let a = TeamStanding::new("Scotland", 14);
        let b = TeamStanding::new("India", 1);
        let result = MatchOutcomePredictor::predict(&a, &b, &context(None, Some("Eden Gardens")), &mut FixedRandom(0.99));
        assert_eq!(result.winner, "India");
        assert_eq!(result.probability, 80);
        assert_eq!(result.loser_probability, 20);
        assert_eq!(impact(&result, "Team Ranking"), Some(65));
        assert_eq!(impact(&result, "Home Advantage"), None);
        assert_eq!(result.confidence, 95);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 2)]
    #[case(2, 1)]
    #[case(1, 14)]
    #[case(14, 1)]
    #[case(5, 99)]
    #[case(99, 7)]
    fn probabilities_are_complementary_and_bounded(#[case] rank_a: u32, #[case] rank_b: u32) {
        let a = TeamStanding::new("A", rank_a);
        let b = TeamStanding::new("B", rank_b);
        let ctx = context(None, None);
        let result = MatchOutcomePredictor::predict(&a, &b, &ctx, &mut SeededRandom::new(ctx.seed(&a, &b)));
        assert_eq!(result.probability + result.loser_probability, 100);
        assert!((50..=80).contains(&result.probability));
        assert!((75..=95).contains(&result.confidence));
        assert!(result.factors.iter().all(|f| f.impact > 0));
    }

    #[test]
    fn seeded_confidence_is_reproducible() {
        let a = TeamStanding::new("New Zealand", 4);
        let b = TeamStanding::new("South Africa", 6);
        let ctx = context(Some("South Africa"), Some("Newlands"));
        let seed = ctx.seed(&a, &b);
        let first = MatchOutcomePredictor::predict(&a, &b, &ctx, &mut SeededRandom::new(seed));
        let second = MatchOutcomePredictor::predict(&a, &b, &ctx, &mut SeededRandom::new(seed));
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(80, ConfidenceLevel::High)]
    #[case(71, ConfidenceLevel::High)]
    #[case(70, ConfidenceLevel::Medium)]
    #[case(56, ConfidenceLevel::Medium)]
    #[case(55, ConfidenceLevel::Low)]
    fn confidence_tiers(#[case] probability: u32, #[case] expected: ConfidenceLevel) {
        assert_eq!(ConfidenceLevel::for_probability(probability), expected);
    }
}
