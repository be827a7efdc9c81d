use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing role of a cricketer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

impl Role {
    /// Parse a free-form role label. Never fails: anything unrecognised
    /// is treated as a batsman.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "batsman" | "batter" | "batting" => Role::Batsman,
            "bowler" | "bowling" => Role::Bowler,
            "allrounder" => Role::AllRounder,
            "wicketkeeper" | "keeper" | "wk" | "wicketkeeperbatsman" => Role::WicketKeeper,
            _ => {
                log::warn!("Unknown role '{}', falling back to Batsman", label);
                Role::Batsman
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-rounder",
            Role::WicketKeeper => "Wicket-keeper",
        }
    }

    /// Roles whose recent form is judged on bowling figures.
    pub fn bowls(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// International match format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "ODI")]
    Odi,
    #[serde(rename = "T20I")]
    T20i,
    Test,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Odi, Format::T20i, Format::Test];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "ODI" => Some(Format::Odi),
            "T20I" | "T20" => Some(Format::T20i),
            "TEST" => Some(Format::Test),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Format::Odi => "ODI",
            Format::T20i => "T20I",
            Format::Test => "Test",
        }
    }

    /// Overs a frontline bowler typically sends down in one match.
    pub fn bowling_quota(&self) -> f64 {
        match self {
            Format::T20i => 4.0,
            Format::Odi => 10.0,
            Format::Test => 22.0,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Won,
    Lost,
    Tied,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Won => write!(f, "Won"),
            MatchOutcome::Lost => write!(f, "Lost"),
            MatchOutcome::Tied => write!(f, "Tied"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    Century,
    Fifty,
}

impl Milestone {
    /// Milestone reached by an innings of `runs`, if any.
    pub fn for_runs(runs: u32) -> Option<Self> {
        if runs >= 100 {
            Some(Milestone::Century)
        } else if runs >= 50 {
            Some(Milestone::Fifty)
        } else {
            None
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Milestone::Century => write!(f, "Century"),
            Milestone::Fifty => write!(f, "Fifty"),
        }
    }
}

/// Who we are generating statistics for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub name: String,
    pub team: String,
    pub role: Role,
    pub ranking_bonus: u32,
}

impl PlayerIdentity {
    pub fn new(name: impl Into<String>, team: impl Into<String>, role: Role, ranking_bonus: u32) -> Self {
        PlayerIdentity {
            name: name.into(),
            team: team.into(),
            role,
            ranking_bonus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingSpell {
    pub overs: f64,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub economy: f64,
}

/// One synthetic match in a player's recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_number: u32,
    pub opponent: String,
    pub venue: String,
    pub format: Format,
    pub date: NaiveDate,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub result: MatchOutcome,
    pub not_out: bool,
    pub milestone: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling: Option<BowlingSpell>,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Batting strike rate; zero when no balls were faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        round1(runs as f64 / balls as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Batsman", Role::Batsman)]
    #[case("batter", Role::Batsman)]
    #[case("Bowler", Role::Bowler)]
    #[case("All-rounder", Role::AllRounder)]
    #[case("all rounder", Role::AllRounder)]
    #[case("Wicket-keeper", Role::WicketKeeper)]
    #[case("WicketKeeper", Role::WicketKeeper)]
    #[case("Umpire", Role::Batsman)]
    #[case("", Role::Batsman)]
    fn role_labels_parse(#[case] label: &str, #[case] expected: Role) {
        assert_eq!(Role::from_label(label), expected);
    }

    #[test]
    fn milestone_thresholds() {
        assert_eq!(Milestone::for_runs(49), None);
        assert_eq!(Milestone::for_runs(50), Some(Milestone::Fifty));
        assert_eq!(Milestone::for_runs(99), Some(Milestone::Fifty));
        assert_eq!(Milestone::for_runs(100), Some(Milestone::Century));
    }

    #[test]
    fn strike_rate_handles_zero_balls() {
        assert_eq!(strike_rate(10, 0), 0.0);
        assert_eq!(strike_rate(50, 40), 125.0);
        assert_eq!(strike_rate(1, 3), 33.3);
    }

    #[test]
    fn role_serializes_with_display_labels() {
        let json = serde_json::to_string(&Role::AllRounder).unwrap();
        assert_eq!(json, "\"All-rounder\"");
        assert_eq!(Format::from_label("t20"), Some(Format::T20i));
        assert_eq!(Format::from_label("hundred"), None);
    }
}
