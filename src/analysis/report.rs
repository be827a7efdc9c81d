use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::{FormAnalysis, FormAnalyzer};
use super::history::{Archetype, MatchHistorySynthesizer};
use super::identity::{IdentityHasher, Seed};
use super::profile::{CareerStatProfile, RoleStatProfileGenerator};
use super::random::RandomSource;
use super::situational::{SituationalAndPhaseGenerator, SituationalReport};
use super::venue::{HomeAwayAnalysis, HomeAwayAnalyzer};
use crate::models::{MatchRecord, PlayerIdentity};

/// Everything the presentation layer shows for one selected player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub player: PlayerIdentity,
    pub seed: Seed,
    pub archetype: Archetype,
    pub career: CareerStatProfile,
    pub recent_matches: Vec<MatchRecord>,
    pub recent_form_analysis: Option<FormAnalysis>,
    pub situational_stats: SituationalReport,
    pub home_away_stats: HomeAwayAnalysis,
}

impl PlayerReport {
    /// Run every generator for `player`. Only the career profile draws on `rng`.
    pub fn build(player: &PlayerIdentity, anchor: NaiveDate, rng: &mut dyn RandomSource) -> Self {
        let seed = IdentityHasher::hash(&player.name);
        let career = RoleStatProfileGenerator::generate(player.role, seed, player.ranking_bonus, rng);
        let recent_matches = MatchHistorySynthesizer::generate_for_role(seed, player.role, anchor);
        let recent_form_analysis = FormAnalyzer::analyze(&recent_matches, player.role);
        let situational_stats = SituationalAndPhaseGenerator::generate(seed, player.role);
        let home_away_stats = HomeAwayAnalyzer::analyze(&recent_matches, &player.team);

        log::debug!(
            "Report for {} (seed {}): {} career matches, form {:?}",
            player.name,
            seed,
            career.matches(),
            recent_form_analysis.as_ref().map(|f| f.streak)
        );

        PlayerReport {
            player: player.clone(),
            seed,
            archetype: Archetype::from_seed(seed),
            career,
            recent_matches,
            recent_form_analysis,
            situational_stats,
            home_away_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::{EntropyRandom, SeededRandom};
    use crate::models::Role;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    #[test]
    fn seeded_reports_are_identical() {
        let player = PlayerIdentity::new("Kane Williamson", "New Zealand", Role::Batsman, 8);
        let seed = IdentityHasher::hash(&player.name);
        let a = PlayerReport::build(&player, anchor(), &mut SeededRandom::new(seed));
        let b = PlayerReport::build(&player, anchor(), &mut SeededRandom::new(seed));
        assert_eq!(a, b);
    }

    #[test]
    fn only_career_numbers_vary_between_entropy_runs() {
        let player = PlayerIdentity::new("Rashid Khan", "Afghanistan", Role::Bowler, 7);
        let a = PlayerReport::build(&player, anchor(), &mut EntropyRandom::new());
        let b = PlayerReport::build(&player, anchor(), &mut EntropyRandom::new());
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.recent_matches, b.recent_matches);
        assert_eq!(a.recent_form_analysis, b.recent_form_analysis);
        assert_eq!(a.situational_stats, b.situational_stats);
        assert_eq!(a.home_away_stats, b.home_away_stats);
        assert_eq!(a.career.role(), b.career.role());
    }

    #[test]
    fn bowlers_get_spells_and_form() {
        let player = PlayerIdentity::new("Trent Boult", "New Zealand", Role::Bowler, 7);
        let report = PlayerReport::build(&player, anchor(), &mut SeededRandom::new(Seed(1)));
        assert_eq!(report.recent_matches.len(), 10);
        assert!(report.recent_matches.iter().all(|m| m.bowling.is_some()));
        let form = report.recent_form_analysis.expect("ten matches give a form reading");
        assert!((20.0..=100.0).contains(&form.momentum_score));
        assert!(form.summary.contains("bowling"));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let player = PlayerIdentity::new("Jos Buttler", "England", Role::WicketKeeper, 7);
        let report = PlayerReport::build(&player, anchor(), &mut SeededRandom::new(Seed(2)));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["player"]["rankingBonus"], 7);
        assert_eq!(value["career"]["role"], "Wicket-keeper");
        assert!(value["recentMatches"][0]["strikeRate"].is_number());
        assert!(value["homeAwayStats"]["bestVenues"].is_array());
    }
}
