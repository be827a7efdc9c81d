// Static reference data shared by every generator. Read-only.

use serde::Serialize;

use crate::models::Role;

/// Ranking given to any team missing from the catalog.
pub const UNRANKED: u32 = 99;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub ranking: u32,
    pub region: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueEntry {
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntry {
    pub name: &'static str,
    pub team: &'static str,
    pub role: Role,
    pub ranking_bonus: u32,
}

pub const TEAMS: &[TeamEntry] = &[
    TeamEntry { name: "India", code: "IND", ranking: 1, region: "Asia" },
    TeamEntry { name: "Australia", code: "AUS", ranking: 2, region: "Oceania" },
    TeamEntry { name: "England", code: "ENG", ranking: 3, region: "Europe" },
    TeamEntry { name: "New Zealand", code: "NZ", ranking: 4, region: "Oceania" },
    TeamEntry { name: "Pakistan", code: "PAK", ranking: 5, region: "Asia" },
    TeamEntry { name: "South Africa", code: "SA", ranking: 6, region: "Africa" },
    TeamEntry { name: "West Indies", code: "WI", ranking: 7, region: "Caribbean" },
    TeamEntry { name: "Sri Lanka", code: "SL", ranking: 8, region: "Asia" },
    TeamEntry { name: "Bangladesh", code: "BAN", ranking: 9, region: "Asia" },
    TeamEntry { name: "Afghanistan", code: "AFG", ranking: 10, region: "Asia" },
    TeamEntry { name: "Ireland", code: "IRE", ranking: 11, region: "Europe" },
    TeamEntry { name: "Zimbabwe", code: "ZIM", ranking: 12, region: "Africa" },
    TeamEntry { name: "Netherlands", code: "NED", ranking: 13, region: "Europe" },
    TeamEntry { name: "Scotland", code: "SCO", ranking: 14, region: "Europe" },
];

pub const VENUES: &[VenueEntry] = &[
    VenueEntry { name: "Lord's", city: "London", country: "England", capacity: 30000 },
    VenueEntry { name: "Eden Gardens", city: "Kolkata", country: "India", capacity: 66000 },
    VenueEntry { name: "MCG", city: "Melbourne", country: "Australia", capacity: 100000 },
    VenueEntry { name: "The Oval", city: "London", country: "England", capacity: 25000 },
    VenueEntry { name: "Wankhede Stadium", city: "Mumbai", country: "India", capacity: 33000 },
    VenueEntry { name: "Sydney Cricket Ground", city: "Sydney", country: "Australia", capacity: 48000 },
    VenueEntry { name: "Newlands", city: "Cape Town", country: "South Africa", capacity: 25000 },
    VenueEntry { name: "Basin Reserve", city: "Wellington", country: "New Zealand", capacity: 11600 },
    VenueEntry { name: "Gaddafi Stadium", city: "Lahore", country: "Pakistan", capacity: 27000 },
    VenueEntry { name: "R. Premadasa Stadium", city: "Colombo", country: "Sri Lanka", capacity: 35000 },
];

/// Opposition pool for synthetic match histories.
pub const OPPONENTS: &[&str] = &[
    "Australia",
    "England",
    "Pakistan",
    "South Africa",
    "New Zealand",
    "West Indies",
    "Sri Lanka",
    "Bangladesh",
    "Afghanistan",
    "India",
];

pub const PLAYERS: &[PlayerEntry] = &[
    PlayerEntry { name: "Virat Kohli", team: "India", role: Role::Batsman, ranking_bonus: 9 },
    PlayerEntry { name: "Rohit Sharma", team: "India", role: Role::Batsman, ranking_bonus: 8 },
    PlayerEntry { name: "Jasprit Bumrah", team: "India", role: Role::Bowler, ranking_bonus: 9 },
    PlayerEntry { name: "Ravindra Jadeja", team: "India", role: Role::AllRounder, ranking_bonus: 7 },
    PlayerEntry { name: "Steve Smith", team: "Australia", role: Role::Batsman, ranking_bonus: 8 },
    PlayerEntry { name: "Pat Cummins", team: "Australia", role: Role::Bowler, ranking_bonus: 8 },
    PlayerEntry { name: "Glenn Maxwell", team: "Australia", role: Role::AllRounder, ranking_bonus: 6 },
    PlayerEntry { name: "Joe Root", team: "England", role: Role::Batsman, ranking_bonus: 8 },
    PlayerEntry { name: "Ben Stokes", team: "England", role: Role::AllRounder, ranking_bonus: 7 },
    PlayerEntry { name: "Jos Buttler", team: "England", role: Role::WicketKeeper, ranking_bonus: 7 },
    PlayerEntry { name: "Kane Williamson", team: "New Zealand", role: Role::Batsman, ranking_bonus: 8 },
    PlayerEntry { name: "Trent Boult", team: "New Zealand", role: Role::Bowler, ranking_bonus: 7 },
    PlayerEntry { name: "Babar Azam", team: "Pakistan", role: Role::Batsman, ranking_bonus: 8 },
    PlayerEntry { name: "Shaheen Afridi", team: "Pakistan", role: Role::Bowler, ranking_bonus: 7 },
    PlayerEntry { name: "Mohammad Rizwan", team: "Pakistan", role: Role::WicketKeeper, ranking_bonus: 6 },
    PlayerEntry { name: "Kagiso Rabada", team: "South Africa", role: Role::Bowler, ranking_bonus: 7 },
    PlayerEntry { name: "Quinton de Kock", team: "South Africa", role: Role::WicketKeeper, ranking_bonus: 6 },
    PlayerEntry { name: "Nicholas Pooran", team: "West Indies", role: Role::WicketKeeper, ranking_bonus: 5 },
    PlayerEntry { name: "Wanindu Hasaranga", team: "Sri Lanka", role: Role::AllRounder, ranking_bonus: 5 },
    PlayerEntry { name: "Shakib Al Hasan", team: "Bangladesh", role: Role::AllRounder, ranking_bonus: 5 },
    PlayerEntry { name: "Rashid Khan", team: "Afghanistan", role: Role::Bowler, ranking_bonus: 7 },
];

pub fn find_team(name: &str) -> Option<&'static TeamEntry> {
    let name = name.trim();
    TEAMS
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name) || t.code.eq_ignore_ascii_case(name))
}

/// Ranking for a team, or [`UNRANKED`] when the catalog doesn't know it.
pub fn ranking_of(name: &str) -> u32 {
    find_team(name).map(|t| t.ranking).unwrap_or(UNRANKED)
}

pub fn find_venue(name: &str) -> Option<&'static VenueEntry> {
    let name = name.trim();
    VENUES.iter().find(|v| v.name.eq_ignore_ascii_case(name))
}

pub fn find_player(name: &str) -> Option<&'static PlayerEntry> {
    let name = name.trim();
    PLAYERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn players_for_team(team: &str) -> Vec<&'static PlayerEntry> {
    let canonical = find_team(team).map(|t| t.name).unwrap_or(team);
    PLAYERS
        .iter()
        .filter(|p| p.team.eq_ignore_ascii_case(canonical))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rankings_are_unique_and_ordered() {
        for (idx, team) in TEAMS.iter().enumerate() {
            assert_eq!(team.ranking as usize, idx + 1);
        }
    }

    #[test]
    fn lookup_by_name_or_code() {
        assert_eq!(ranking_of("india"), 1);
        assert_eq!(ranking_of("AUS"), 2);
        assert_eq!(ranking_of("Nepal"), UNRANKED);
    }

    #[test]
    fn catalog_players_belong_to_catalog_teams() {
        for player in PLAYERS {
            assert!(find_team(player.team).is_some(), "{} has unknown team", player.name);
        }
        assert_eq!(players_for_team("IND").len(), 4);
    }

    #[test]
    fn venues_resolve_case_insensitively() {
        let venue = find_venue("eden gardens").unwrap();
        assert_eq!(venue.country, "India");
        assert!(find_venue("Nowhere Oval").is_none());
    }
}
