use serde::{Deserialize, Serialize};

use super::identity::IdentityHasher;
use super::random::RandomSource;
use crate::catalog::{self, TEAMS};
use crate::models::round2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRankings {
    #[serde(rename = "T20I")]
    pub t20i: u32,
    #[serde(rename = "ODI")]
    pub odi: u32,
    #[serde(rename = "Test")]
    pub test: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub name: String,
    pub code: Option<String>,
    pub region: Option<String>,
    pub overall_ranking: u32,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub no_results: u32,
    pub win_rate: f64,
    pub current_ranking: FormatRankings,
    /// Oldest first, `W` or `L`.
    pub recent_form: Vec<char>,
}

/// Headline record for a national side.
///
/// Per-format rankings are seed offsets around the catalog ranking; the
/// match record and recent results take noise from the random source.
pub struct TeamProfileGenerator;

impl TeamProfileGenerator {
    pub fn generate(name: &str, rng: &mut dyn RandomSource) -> TeamProfile {
        let entry = catalog::find_team(name);
        let display_name = entry.map(|t| t.name).unwrap_or(name).to_string();
        let overall_ranking = entry.map(|t| t.ranking).unwrap_or(catalog::UNRANKED);
        let seed = IdentityHasher::hash(&display_name).value();

        // Stronger sides play more and win more.
        let strength = if overall_ranking == catalog::UNRANKED {
            0.0
        } else {
            1.0 - (overall_ranking - 1) as f64 / TEAMS.len() as f64
        };

        let matches_played = 100 + (seed % 150) as u32 + rng.range_u32(0, 50);
        let win_share = 0.35 + strength * 0.3 + rng.range_f64(-0.05, 0.05);
        let no_results = rng.range_u32(0, matches_played / 25);
        let decided = matches_played - no_results;
        let wins = (decided as f64 * win_share).round() as u32;
        let losses = decided - wins;
        let win_rate = round2(wins as f64 / decided as f64);

        let recent_form = (0..10)
            .map(|_| if rng.chance(win_rate) { 'W' } else { 'L' })
            .collect();

        TeamProfile {
            name: display_name,
            code: entry.map(|t| t.code.to_string()),
            region: entry.map(|t| t.region.to_string()),
            overall_ranking,
            matches_played,
            wins,
            losses,
            no_results,
            win_rate,
            current_ranking: FormatRankings {
                t20i: Self::format_ranking(overall_ranking, seed, 0),
                odi: Self::format_ranking(overall_ranking, seed, 1),
                test: Self::format_ranking(overall_ranking, seed, 2),
            },
            recent_form,
        }
    }

    /// Catalog ranking nudged by up to two places either way.
    fn format_ranking(overall: u32, seed: u64, shift: u64) -> u32 {
        if overall == catalog::UNRANKED {
            return overall;
        }
        let nudge = ((seed / 3u64.pow(shift as u32)) % 5) as i64 - 2;
        (overall as i64 + nudge).clamp(1, TEAMS.len() as i64) as u32
    }
}
