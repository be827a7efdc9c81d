use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{round1, MatchRecord, Role};

/// How many trailing matches count towards current form.
pub const FORM_WINDOW: usize = 5;

/// Economy assumed for a match with no recorded spell.
const DEFAULT_ECONOMY: f64 = 6.0;

const MOMENTUM_FLOOR: f64 = 20.0;
const MOMENTUM_CEILING: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Streak {
    Hot,
    Cold,
    Steady,
}

impl Streak {
    pub fn label(&self) -> &'static str {
        match self {
            Streak::Hot => "Hot",
            Streak::Cold => "Cold",
            Streak::Steady => "Steady",
        }
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalysis {
    pub streak: Streak,
    pub summary: String,
    pub momentum_score: f64,
}

pub struct FormAnalyzer;

impl FormAnalyzer {
    /// Classify momentum from the last [`FORM_WINDOW`] matches of `matches`
    /// (oldest first). Returns `None` when there is nothing to analyse.
    pub fn analyze(matches: &[MatchRecord], role: Role) -> Option<FormAnalysis> {
        if matches.is_empty() {
            return None;
        }

        let recent = &matches[matches.len().saturating_sub(FORM_WINDOW)..];
        let analysis = if role.bowls() {
            Self::bowling(recent)
        } else {
            Self::batting(recent)
        };

        log::debug!(
            "{} form over {} matches: {} ({:.1})",
            role,
            recent.len(),
            analysis.streak,
            analysis.momentum_score
        );
        Some(analysis)
    }

    fn batting(recent: &[MatchRecord]) -> FormAnalysis {
        let n = recent.len() as f64;
        let avg_runs = recent.iter().map(|m| m.runs as f64).sum::<f64>() / n;
        let avg_sr = recent.iter().map(|m| m.strike_rate).sum::<f64>() / n;
        let scores_30_plus = recent.iter().filter(|m| m.runs >= 30).count();

        let streak = if avg_runs >= 35.0 && scores_30_plus >= 3 {
            Streak::Hot
        } else if avg_runs < 20.0 {
            Streak::Cold
        } else {
            Streak::Steady
        };

        FormAnalysis {
            streak,
            summary: format!(
                "{} batting: Avg {:.0} runs, {}/{} scores 30+",
                streak,
                avg_runs,
                scores_30_plus,
                recent.len()
            ),
            momentum_score: momentum(avg_runs * 1.5 + avg_sr * 0.3),
        }
    }

    fn bowling(recent: &[MatchRecord]) -> FormAnalysis {
        let n = recent.len() as f64;
        let wickets: u32 = recent
            .iter()
            .map(|m| m.bowling.as_ref().map(|s| s.wickets).unwrap_or(0))
            .sum();
        let avg_economy = recent
            .iter()
            .map(|m| m.bowling.as_ref().map(|s| s.economy).unwrap_or(DEFAULT_ECONOMY))
            .sum::<f64>()
            / n;

        let streak = if avg_economy < 6.5 && wickets >= 3 {
            Streak::Hot
        } else if avg_economy > 8.0 {
            Streak::Cold
        } else {
            Streak::Steady
        };

        FormAnalysis {
            streak,
            summary: format!(
                "{} bowling: {} wickets, Economy {:.1}",
                streak, wickets, avg_economy
            ),
            momentum_score: momentum(100.0 - avg_economy * 10.0 + wickets as f64 * 5.0),
        }
    }
}

fn momentum(raw: f64) -> f64 {
    round1(raw.clamp(MOMENTUM_FLOOR, MOMENTUM_CEILING))
}
