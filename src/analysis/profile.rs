use serde::{Deserialize, Serialize};

use super::identity::Seed;
use super::random::RandomSource;
use crate::models::{round2, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatsmanProfile {
    pub matches: u32,
    pub innings: u32,
    pub not_outs: u32,
    pub total_runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub highest_score: u32,
    pub centuries: u32,
    pub fifties: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerProfile {
    pub matches: u32,
    pub innings: u32,
    pub total_wickets: u32,
    pub bowling_average: f64,
    pub economy_rate: f64,
    /// Balls per wicket.
    pub bowling_strike_rate: f64,
    pub best_figures: String,
    pub four_wicket_hauls: u32,
    pub five_wicket_hauls: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllRounderProfile {
    pub matches: u32,
    pub total_runs: u32,
    pub batting_average: f64,
    pub strike_rate: f64,
    pub highest_score: u32,
    pub fifties: u32,
    pub total_wickets: u32,
    pub bowling_average: f64,
    pub economy_rate: f64,
    pub best_figures: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WicketKeeperProfile {
    pub matches: u32,
    pub innings: u32,
    pub total_runs: u32,
    pub average: f64,
    pub strike_rate: f64,
    pub highest_score: u32,
    pub fifties: u32,
    pub catches: u32,
    pub stumpings: u32,
    pub dismissals: u32,
}

/// Career statistics; the field set depends on the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum CareerStatProfile {
    Batsman(BatsmanProfile),
    Bowler(BowlerProfile),
    #[serde(rename = "All-rounder")]
    AllRounder(AllRounderProfile),
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper(WicketKeeperProfile),
}

impl CareerStatProfile {
    pub fn role(&self) -> Role {
        match self {
            CareerStatProfile::Batsman(_) => Role::Batsman,
            CareerStatProfile::Bowler(_) => Role::Bowler,
            CareerStatProfile::AllRounder(_) => Role::AllRounder,
            CareerStatProfile::WicketKeeper(_) => Role::WicketKeeper,
        }
    }

    pub fn matches(&self) -> u32 {
        match self {
            CareerStatProfile::Batsman(p) => p.matches,
            CareerStatProfile::Bowler(p) => p.matches,
            CareerStatProfile::AllRounder(p) => p.matches,
            CareerStatProfile::WicketKeeper(p) => p.matches,
        }
    }
}

// Plausibility bounds for generated rates.
const BATTING_AVERAGE: (f64, f64) = (20.0, 60.0);
const BATTING_STRIKE_RATE: (f64, f64) = (70.0, 160.0);
const BOWLING_AVERAGE: (f64, f64) = (20.0, 35.0);
const ECONOMY_RATE: (f64, f64) = (3.5, 6.0);

fn bounded(value: f64, bounds: (f64, f64)) -> f64 {
    round2(value.clamp(bounds.0, bounds.1))
}

/// `base + bonus * weight`, pinned at `u32::MAX` for outsized bonuses.
fn boosted(base: u32, bonus: u32, weight: u32) -> u32 {
    base.saturating_add(bonus.saturating_mul(weight))
}

/// Builds career profiles: `base + ranking_bonus * weight + noise`.
///
/// Appearance counts and best figures come from the seed alone; averages,
/// rates and milestone counts take noise from the supplied random source.
pub struct RoleStatProfileGenerator;

impl RoleStatProfileGenerator {
    pub fn generate(
        role: Role,
        seed: Seed,
        ranking_bonus: u32,
        rng: &mut dyn RandomSource,
    ) -> CareerStatProfile {
        log::debug!(
            "Generating {} profile (seed {}, ranking bonus {})",
            role,
            seed,
            ranking_bonus
        );

        match role {
            Role::Bowler => CareerStatProfile::Bowler(Self::bowler(seed, ranking_bonus, rng)),
            Role::AllRounder => {
                CareerStatProfile::AllRounder(Self::all_rounder(seed, ranking_bonus, rng))
            }
            Role::WicketKeeper => {
                CareerStatProfile::WicketKeeper(Self::wicket_keeper(seed, ranking_bonus, rng))
            }
            Role::Batsman => CareerStatProfile::Batsman(Self::batsman(seed, ranking_bonus, rng)),
        }
    }

    fn matches(seed: Seed, bonus: u32) -> u32 {
        boosted(50 + (seed.value() % 150) as u32, bonus, 2)
    }

    fn best_figures(seed: Seed, min_wickets: u64) -> String {
        let s = seed.value();
        format!("{}/{}", min_wickets + s % 4, 12 + (s / 4) % 30)
    }

    fn batsman(seed: Seed, bonus: u32, rng: &mut dyn RandomSource) -> BatsmanProfile {
        let s = seed.value();
        let b = bonus as f64;
        let matches = Self::matches(seed, bonus);
        let innings = matches - (s % 8) as u32;
        let not_outs = innings / 10 + (s % 5) as u32;

        let average = bounded(32.0 + b * 1.5 + rng.range_f64(0.0, 12.0), BATTING_AVERAGE);
        let strike_rate = bounded(85.0 + b * 2.0 + rng.range_f64(0.0, 40.0), BATTING_STRIKE_RATE);
        let total_runs = (average * (innings - not_outs) as f64).round() as u32;

        let centuries = total_runs / 1000 + rng.range_u32(0, 3);
        let fifties = total_runs / 400 + rng.range_u32(0, 6);
        let highest_score = if centuries > 0 {
            boosted(100 + (s % 80) as u32, bonus, 3)
        } else {
            50 + (s % 50) as u32
        };

        BatsmanProfile {
            matches,
            innings,
            not_outs,
            total_runs,
            average,
            strike_rate,
            highest_score,
            centuries,
            fifties,
        }
    }

    fn bowler(seed: Seed, bonus: u32, rng: &mut dyn RandomSource) -> BowlerProfile {
        let s = seed.value();
        let b = bonus as f64;
        let matches = Self::matches(seed, bonus);
        let innings = matches - (s % 6) as u32;

        let economy_rate = bounded(4.2 + rng.range_f64(0.0, 1.8) - b * 0.05, ECONOMY_RATE);
        let bowling_average =
            bounded(22.0 + rng.range_f64(0.0, 13.0) - b * 0.5, BOWLING_AVERAGE);
        let bowling_strike_rate = round2(bowling_average / economy_rate * 6.0);
        let total_wickets = boosted(40 + (s % 200) as u32, bonus, 4).saturating_add(rng.range_u32(0, 25));

        BowlerProfile {
            matches,
            innings,
            total_wickets,
            bowling_average,
            economy_rate,
            bowling_strike_rate,
            best_figures: Self::best_figures(seed, 4),
            four_wicket_hauls: total_wickets / 35 + rng.range_u32(0, 2),
            five_wicket_hauls: total_wickets / 60 + rng.range_u32(0, 2),
        }
    }

    fn all_rounder(seed: Seed, bonus: u32, rng: &mut dyn RandomSource) -> AllRounderProfile {
        let s = seed.value();
        let b = bonus as f64;
        let matches = Self::matches(seed, bonus);

        let batting_average = bounded(24.0 + b + rng.range_f64(0.0, 12.0), BATTING_AVERAGE);
        let strike_rate = bounded(90.0 + b * 2.0 + rng.range_f64(0.0, 35.0), BATTING_STRIKE_RATE);
        let total_runs = (batting_average * (matches as f64 * 0.8)).round() as u32;
        let total_wickets = boosted(30 + (s % 150) as u32, bonus, 3).saturating_add(rng.range_u32(0, 20));
        let economy_rate = bounded(4.6 + rng.range_f64(0.0, 1.6) - b * 0.04, ECONOMY_RATE);
        let bowling_average =
            bounded(26.0 + rng.range_f64(0.0, 10.0) - b * 0.4, BOWLING_AVERAGE);

        AllRounderProfile {
            matches,
            total_runs,
            batting_average,
            strike_rate,
            highest_score: boosted(60 + (s % 70) as u32, bonus, 2),
            fifties: total_runs / 500 + rng.range_u32(0, 4),
            total_wickets,
            bowling_average,
            economy_rate,
            best_figures: Self::best_figures(seed, 3),
        }
    }

    fn wicket_keeper(seed: Seed, bonus: u32, rng: &mut dyn RandomSource) -> WicketKeeperProfile {
        let s = seed.value();
        let b = bonus as f64;
        let matches = Self::matches(seed, bonus);
        let innings = matches - (s % 8) as u32;

        let average = bounded(28.0 + b * 1.2 + rng.range_f64(0.0, 10.0), BATTING_AVERAGE);
        let strike_rate = bounded(80.0 + b * 2.0 + rng.range_f64(0.0, 45.0), BATTING_STRIKE_RATE);
        let total_runs = (average * innings as f64 * 0.9).round() as u32;
        let catches = matches
            .saturating_add((s % 60) as u32)
            .saturating_add(rng.range_u32(0, 30));
        let stumpings = matches / 8 + (s % 12) as u32 + rng.range_u32(0, 5);

        WicketKeeperProfile {
            matches,
            innings,
            total_runs,
            average,
            strike_rate,
            highest_score: boosted(70 + (s % 80) as u32, bonus, 3),
            fifties: total_runs / 450 + rng.range_u32(0, 5),
            catches,
            stumpings,
            dismissals: catches.saturating_add(stumpings),
        }
    }
}
