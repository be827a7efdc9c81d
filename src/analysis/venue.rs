use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog;
use crate::models::{round1, MatchRecord};

const BEST_VENUE_LIMIT: usize = 5;
const BEST_VENUE_MIN_MATCHES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSplit {
    pub matches: u32,
    pub runs: u32,
    pub average: f64,
    pub strike_rate: f64,
}

impl VenueSplit {
    fn from_matches(matches: &[&MatchRecord]) -> Self {
        if matches.is_empty() {
            return VenueSplit::default();
        }
        let n = matches.len() as f64;
        let runs: u32 = matches.iter().map(|m| m.runs).sum();
        VenueSplit {
            matches: matches.len() as u32,
            runs,
            average: round1(runs as f64 / n),
            strike_rate: round1(matches.iter().map(|m| m.strike_rate).sum::<f64>() / n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestVenue {
    pub venue: String,
    pub matches: u32,
    pub average: f64,
    pub total_runs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAwayAnalysis {
    pub home: VenueSplit,
    pub away: VenueSplit,
    pub neutral: VenueSplit,
    pub best_venues: Vec<BestVenue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ground {
    Home,
    Away,
    Neutral,
}

/// Splits a history by where it was played relative to `team`.
pub struct HomeAwayAnalyzer;

impl HomeAwayAnalyzer {
    pub fn analyze(matches: &[MatchRecord], team: &str) -> HomeAwayAnalysis {
        let mut home = Vec::new();
        let mut away = Vec::new();
        let mut neutral = Vec::new();

        for record in matches {
            match Self::classify(record, team) {
                Ground::Home => home.push(record),
                Ground::Away => away.push(record),
                Ground::Neutral => neutral.push(record),
            }
        }

        HomeAwayAnalysis {
            home: VenueSplit::from_matches(&home),
            away: VenueSplit::from_matches(&away),
            neutral: VenueSplit::from_matches(&neutral),
            best_venues: Self::best_venues(matches),
        }
    }

    fn classify(record: &MatchRecord, team: &str) -> Ground {
        let Some(country) = catalog::find_venue(&record.venue).map(|v| v.country) else {
            return Ground::Neutral;
        };
        if country.eq_ignore_ascii_case(team.trim()) {
            Ground::Home
        } else if country.eq_ignore_ascii_case(record.opponent.trim()) {
            Ground::Away
        } else {
            Ground::Neutral
        }
    }

    fn best_venues(matches: &[MatchRecord]) -> Vec<BestVenue> {
        let mut by_venue: HashMap<&str, Vec<&MatchRecord>> = HashMap::new();
        for record in matches {
            by_venue.entry(record.venue.as_str()).or_default().push(record);
        }

        let mut best: Vec<BestVenue> = by_venue
            .into_iter()
            .filter(|(_, games)| games.len() >= BEST_VENUE_MIN_MATCHES)
            .map(|(venue, games)| {
                let total_runs: u32 = games.iter().map(|m| m.runs).sum();
                BestVenue {
                    venue: venue.to_string(),
                    matches: games.len() as u32,
                    average: round1(total_runs as f64 / games.len() as f64),
                    total_runs,
                }
            })
            .collect();

        best.sort_by(|a, b| {
            b.average
                .partial_cmp(&a.average)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.venue.cmp(&b.venue))
        });
        best.truncate(BEST_VENUE_LIMIT);
        best
    }
}
