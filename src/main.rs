mod analysis;
mod catalog;
mod config;
mod display;
mod error;
mod export;
mod models;

use analysis::identity::IdentityHasher;
use analysis::predictor::{MatchContext, MatchOutcomePredictor, TeamStanding};
use analysis::random::RandomMode;
use analysis::report::PlayerReport;
use analysis::team::TeamProfileGenerator;
use anyhow::Context;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_info, display_player_report, display_players, display_prediction,
    display_success, display_team_profile, display_teams, display_venues,
};
use error::AppError;
use export::ReportExporter;
use models::{Format, PlayerIdentity, Role};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "Cricket Insights")]
#[command(about = "Player deep-dives and match predictions for international cricket", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed every randomized stat from the player or fixture so output repeats exactly
    #[arg(long, global = true)]
    deterministic: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Career stats, recent form and situational splits for a player
    Player {
        /// Player name, e.g. "Virat Kohli"
        name: String,

        /// Team (defaults to the catalog entry, or "Unknown")
        #[arg(short, long)]
        team: Option<String>,

        /// Batsman, Bowler, All-rounder or Wicket-keeper (default: catalog entry or Batsman)
        #[arg(short, long)]
        role: Option<String>,

        /// Ranking bonus applied to career stats (default: catalog entry or 0)
        #[arg(long)]
        ranking_bonus: Option<u32>,

        /// Write the report as JSON to the export directory
        #[arg(long)]
        save: bool,
    },
    /// Headline record for a national team
    Team {
        /// Team name or code, e.g. "India" or "IND"
        name: String,
    },
    /// Predict the winner between two teams
    Predict {
        team_a: String,
        team_b: String,

        /// Team that won the toss
        #[arg(long)]
        toss: Option<String>,

        /// Venue name, e.g. "Eden Gardens, India"
        #[arg(long)]
        venue: Option<String>,

        /// ODI, T20I or Test
        #[arg(short, long, default_value = "T20I")]
        format: String,

        /// Write the prediction as JSON to the export directory
        #[arg(long)]
        save: bool,
    },
    /// List international teams by ranking
    Teams,
    /// List known venues
    Venues,
    /// List catalog players
    Players {
        /// Only players from this team
        #[arg(short, long)]
        team: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if args.deterministic {
        config.random_mode = RandomMode::Seeded;
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Command::Player {
            name,
            team,
            role,
            ranking_bonus,
            save,
        } => {
            let player = resolve_player(&name, team, role, ranking_bonus);
            if !args.json {
                display_info(&format!(
                    "Building report for {} ({}, {})",
                    player.name, player.team, player.role
                ));
            }

            let mut rng = config.random_mode.source(IdentityHasher::hash(&player.name));
            let report = PlayerReport::build(&player, config.history_anchor, rng.as_mut());

            emit(&report, args.json, display_player_report)?;
            if save {
                save_report(&config, &player.name, &report, args.json)?;
            }
        }
        Command::Team { name } => {
            let name = canonical_team_name(&name);
            let mut rng = config.random_mode.source(IdentityHasher::hash(&name));
            let profile = TeamProfileGenerator::generate(&name, rng.as_mut());
            emit(&profile, args.json, display_team_profile)?;
        }
        Command::Predict {
            team_a,
            team_b,
            toss,
            venue,
            format,
            save,
        } => {
            let (team_a, team_b) = resolve_matchup(&team_a, &team_b)?;
            let match_format =
                Format::from_label(&format).ok_or_else(|| AppError::UnknownFormat(format.clone()))?;
            let context = MatchContext {
                toss_winner: toss.map(|t| canonical_team_name(&t)),
                venue_name: venue,
                match_format,
            };

            let mut rng = config.random_mode.source(context.seed(&team_a, &team_b));
            let prediction = MatchOutcomePredictor::predict(&team_a, &team_b, &context, rng.as_mut());

            emit(&prediction, args.json, display_prediction)?;
            if save {
                let subject = format!("{} vs {}", team_a.name, team_b.name);
                save_report(&config, &subject, &prediction, args.json)?;
            }
        }
        Command::Teams => emit(&catalog::TEAMS.to_vec(), args.json, |t| display_teams(t))?,
        Command::Venues => emit(&catalog::VENUES.to_vec(), args.json, |v| display_venues(v))?,
        Command::Players { team } => {
            let players: Vec<&catalog::PlayerEntry> = match team {
                Some(team) => catalog::players_for_team(&team),
                None => catalog::PLAYERS.iter().collect(),
            };
            emit(&players, args.json, |p| display_players(p))?;
        }
    }

    Ok(())
}

/// Print `value` as JSON or hand it to the table renderer.
fn emit<T: Serialize>(value: &T, json: bool, render: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize output")?
        );
    } else {
        render(value);
    }
    Ok(())
}

fn save_report<T: Serialize>(config: &Config, subject: &str, report: &T, json: bool) -> anyhow::Result<()> {
    let exporter = ReportExporter::new(&config.export_dir);
    let path = exporter
        .save(subject, report)
        .with_context(|| format!("Could not save report for {}", subject))?;
    if !json {
        display_success(&format!("Saved report to {}", path.display()));
    }
    Ok(())
}

/// Catalog entry merged with any CLI overrides. Unknown players get a zero bonus.
fn resolve_player(
    name: &str,
    team: Option<String>,
    role: Option<String>,
    ranking_bonus: Option<u32>,
) -> PlayerIdentity {
    let entry = catalog::find_player(name);
    if entry.is_none() {
        log::info!("{} is not in the player catalog, using defaults", name);
    }

    let name = entry.map(|p| p.name.to_string()).unwrap_or_else(|| name.trim().to_string());
    let team = team
        .map(|t| canonical_team_name(&t))
        .or_else(|| entry.map(|p| p.team.to_string()))
        .unwrap_or_else(|| "Unknown".to_string());
    let role = role
        .map(|r| Role::from_label(&r))
        .or_else(|| entry.map(|p| p.role))
        .unwrap_or(Role::Batsman);
    let ranking_bonus = ranking_bonus
        .or_else(|| entry.map(|p| p.ranking_bonus))
        .unwrap_or(0);

    PlayerIdentity::new(name, team, role, ranking_bonus)
}

fn canonical_team_name(name: &str) -> String {
    catalog::find_team(name)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

/// Both teams must be named and distinct before the predictor sees them.
fn resolve_matchup(team_a: &str, team_b: &str) -> Result<(TeamStanding, TeamStanding), AppError> {
    if team_a.trim().is_empty() || team_b.trim().is_empty() {
        return Err(AppError::InvalidMatchup("select both teams".to_string()));
    }

    let a = canonical_team_name(team_a);
    let b = canonical_team_name(team_b);
    if a.eq_ignore_ascii_case(&b) {
        return Err(AppError::InvalidMatchup(format!("{} cannot play itself", a)));
    }

    for name in [&a, &b] {
        if catalog::find_team(name).is_none() {
            log::warn!("{} has no ranking, treating as #{}", name, catalog::UNRANKED);
        }
    }

    let ranking_a = catalog::ranking_of(&a);
    let ranking_b = catalog::ranking_of(&b);
    Ok((TeamStanding::new(a, ranking_a), TeamStanding::new(b, ranking_b)))
}
