use crate::analysis::form::{FormAnalysis, Streak};
use crate::analysis::predictor::PredictionResult;
use crate::analysis::profile::CareerStatProfile;
use crate::analysis::report::PlayerReport;
use crate::analysis::situational::SituationalReport;
use crate::analysis::team::TeamProfile;
use crate::analysis::venue::{HomeAwayAnalysis, VenueSplit};
use crate::catalog::{PlayerEntry, TeamEntry, VenueEntry};
use crate::models::{MatchOutcome, MatchRecord};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    stat: String,
    value: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    date: String,
    opponent: String,
    venue: String,
    format: String,
    runs: String,
    balls: String,
    #[tabled(rename = "4s/6s")]
    boundaries: String,
    #[tabled(rename = "SR")]
    strike_rate: String,
    bowling: String,
    result: String,
}

#[derive(Tabled)]
struct SituationRow {
    situation: String,
    matches: String,
    #[tabled(rename = "avg / wkts")]
    primary: String,
    #[tabled(rename = "SR / econ")]
    rate: String,
    success: String,
}

#[derive(Tabled)]
struct PhaseRow {
    phase: String,
    #[tabled(rename = "matches / overs")]
    volume: String,
    #[tabled(rename = "runs / wkts")]
    output: String,
    #[tabled(rename = "SR / econ")]
    rate: String,
}

#[derive(Tabled)]
struct VenueRow {
    ground: String,
    matches: String,
    runs: String,
    average: String,
    #[tabled(rename = "SR")]
    strike_rate: String,
}

#[derive(Tabled)]
struct FactorRow {
    factor: String,
    impact: String,
}

#[derive(Tabled)]
struct TeamRow {
    rank: String,
    team: String,
    code: String,
    region: String,
}

#[derive(Tabled)]
struct VenueListRow {
    venue: String,
    city: String,
    country: String,
    capacity: String,
}

#[derive(Tabled)]
struct PlayerRow {
    player: String,
    team: String,
    role: String,
    #[tabled(rename = "ranking bonus")]
    ranking_bonus: String,
}

fn heading(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn stat(stat: &str, value: impl ToString) -> StatRow {
    StatRow {
        stat: stat.to_string(),
        value: value.to_string(),
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_player_report(report: &PlayerReport) {
    let player = &report.player;
    heading(
        &format!("🏏 {} ({}, {})", player.name, player.team, player.role),
        70,
    );

    let mut traits = Vec::new();
    if report.archetype.is_aggressive {
        traits.push("aggressive");
    }
    if report.archetype.is_consistent {
        traits.push("consistent");
    }
    let traits = if traits.is_empty() {
        "balanced".to_string()
    } else {
        traits.join(" + ")
    };
    println!(
        "{} seed {} · {} · ranking bonus {}",
        "🔑 Profile:".bold(),
        report.seed,
        traits,
        player.ranking_bonus
    );

    display_career(&report.career);
    display_match_history(&report.recent_matches);
    display_form(report.recent_form_analysis.as_ref());
    display_situational(&report.situational_stats);
    display_home_away(&report.home_away_stats);
}

pub fn display_career(profile: &CareerStatProfile) {
    heading(&format!("📈 CAREER STATISTICS ({})", profile.role()), 40);

    let rows = match profile {
        CareerStatProfile::Batsman(p) => vec![
            stat("Matches", p.matches),
            stat("Innings", p.innings),
            stat("Not outs", p.not_outs),
            stat("Runs", p.total_runs),
            stat("Average", format!("{:.2}", p.average)),
            stat("Strike rate", format!("{:.2}", p.strike_rate)),
            stat("Highest score", p.highest_score),
            stat("100s / 50s", format!("{} / {}", p.centuries, p.fifties)),
        ],
        CareerStatProfile::Bowler(p) => vec![
            stat("Matches", p.matches),
            stat("Innings", p.innings),
            stat("Wickets", p.total_wickets),
            stat("Average", format!("{:.2}", p.bowling_average)),
            stat("Economy", format!("{:.2}", p.economy_rate)),
            stat("Strike rate", format!("{:.2}", p.bowling_strike_rate)),
            stat("Best figures", &p.best_figures),
            stat("4w / 5w", format!("{} / {}", p.four_wicket_hauls, p.five_wicket_hauls)),
        ],
        CareerStatProfile::AllRounder(p) => vec![
            stat("Matches", p.matches),
            stat("Runs", p.total_runs),
            stat("Batting average", format!("{:.2}", p.batting_average)),
            stat("Strike rate", format!("{:.2}", p.strike_rate)),
            stat("Highest score", p.highest_score),
            stat("50s", p.fifties),
            stat("Wickets", p.total_wickets),
            stat("Bowling average", format!("{:.2}", p.bowling_average)),
            stat("Economy", format!("{:.2}", p.economy_rate)),
            stat("Best figures", &p.best_figures),
        ],
        CareerStatProfile::WicketKeeper(p) => vec![
            stat("Matches", p.matches),
            stat("Innings", p.innings),
            stat("Runs", p.total_runs),
            stat("Average", format!("{:.2}", p.average)),
            stat("Strike rate", format!("{:.2}", p.strike_rate)),
            stat("Highest score", p.highest_score),
            stat("50s", p.fifties),
            stat("Catches / stumpings", format!("{} / {}", p.catches, p.stumpings)),
            stat("Dismissals", p.dismissals),
        ],
    };

    print_table(rows);
}

pub fn display_match_history(matches: &[MatchRecord]) {
    if matches.is_empty() {
        return;
    }

    let total = matches.len();
    let wins = matches.iter().filter(|m| m.result == MatchOutcome::Won).count();
    let losses = matches.iter().filter(|m| m.result == MatchOutcome::Lost).count();
    let win_rate = (wins as f64 / total as f64) * 100.0;

    heading(&format!("📊 RECENT MATCHES (Last {})", total), 80);
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        win_rate
    );

    let rows = matches
        .iter()
        .map(|m| {
            let mut runs = if m.not_out {
                format!("{}*", m.runs)
            } else {
                m.runs.to_string()
            };
            if let Some(milestone) = m.milestone {
                runs = format!("{} ({})", runs, milestone);
            }
            let result = match m.result {
                MatchOutcome::Won => "WON".green().to_string(),
                MatchOutcome::Lost => "LOST".red().to_string(),
                MatchOutcome::Tied => "TIED".yellow().to_string(),
            };
            let bowling = m
                .bowling
                .as_ref()
                .map(|s| format!("{}/{} ({} ov)", s.wickets, s.runs_conceded, s.overs))
                .unwrap_or_else(|| "-".to_string());

            MatchRow {
                number: m.match_number.to_string(),
                date: m.date.format("%Y-%m-%d").to_string(),
                opponent: m.opponent.clone(),
                venue: m.venue.clone(),
                format: m.format.to_string(),
                runs,
                balls: m.balls.to_string(),
                boundaries: format!("{}/{}", m.fours, m.sixes),
                strike_rate: format!("{:.1}", m.strike_rate),
                bowling,
                result,
            }
        })
        .collect();

    print_table(rows);
}

pub fn display_form(form: Option<&FormAnalysis>) {
    heading("🔥 RECENT FORM", 40);

    let Some(form) = form else {
        println!("{}", "No recent matches to analyse".yellow());
        return;
    };

    let badge = match form.streak {
        Streak::Hot => "🔥 HOT".red().bold(),
        Streak::Cold => "❄️ COLD".blue().bold(),
        Streak::Steady => "➡️ STEADY".yellow().bold(),
    };
    println!("{} {}", badge, form.summary);
    println!("{} {:.1}/100", "Momentum:".bold(), form.momentum_score);
}

pub fn display_situational(report: &SituationalReport) {
    heading("🎯 SITUATIONAL SPLITS", 60);

    match report {
        SituationalReport::Batting { situational, phases } => {
            let rows = [
                ("Chasing", &situational.chasing),
                ("Defending", &situational.defending),
                ("Pressure", &situational.pressure),
            ]
            .into_iter()
            .map(|(name, s)| SituationRow {
                situation: name.to_string(),
                matches: s.matches.to_string(),
                primary: format!("{:.1}", s.average),
                rate: format!("{:.1}", s.strike_rate),
                success: format!("{:.0}%", s.success_rate),
            })
            .collect();
            print_table(rows);

            println!();
            let rows = phases
                .iter()
                .map(|p| PhaseRow {
                    phase: p.phase.to_string(),
                    volume: p.matches.to_string(),
                    output: format!("{} ({} balls)", p.runs, p.balls),
                    rate: format!("{:.1}", p.strike_rate),
                })
                .collect();
            print_table(rows);
        }
        SituationalReport::Bowling { situational, phases } => {
            let rows = [
                ("Chasing", &situational.chasing),
                ("Defending", &situational.defending),
                ("Pressure", &situational.pressure),
            ]
            .into_iter()
            .map(|(name, s)| SituationRow {
                situation: name.to_string(),
                matches: s.matches.to_string(),
                primary: format!("{} @ {:.1}", s.wickets, s.average),
                rate: format!("{:.1}", s.economy),
                success: format!("{:.0}%", s.success_rate),
            })
            .collect();
            print_table(rows);

            println!();
            let rows = phases
                .iter()
                .map(|p| PhaseRow {
                    phase: p.phase.to_string(),
                    volume: p.overs.to_string(),
                    output: format!("{} ({:.0}% dots)", p.wickets, p.dot_ball_percentage),
                    rate: format!("{:.1}", p.economy),
                })
                .collect();
            print_table(rows);
        }
    }
}

pub fn display_home_away(analysis: &HomeAwayAnalysis) {
    heading("🏟️ HOME / AWAY", 60);

    let row = |ground: &str, split: &VenueSplit| VenueRow {
        ground: ground.to_string(),
        matches: split.matches.to_string(),
        runs: split.runs.to_string(),
        average: format!("{:.1}", split.average),
        strike_rate: format!("{:.1}", split.strike_rate),
    };
    print_table(vec![
        row("Home", &analysis.home),
        row("Away", &analysis.away),
        row("Neutral", &analysis.neutral),
    ]);

    if let Some(best) = analysis.best_venues.first() {
        println!("\n{}", "Favourite Ground".bold().yellow());
        println!(
            "  {} averages {:.1} over {} matches ({} runs)",
            best.venue, best.average, best.matches, best.total_runs
        );
    }
    println!();
}

pub fn display_prediction(prediction: &PredictionResult) {
    heading(
        &format!("🔮 {} Prediction: {} vs {}", prediction.match_format, prediction.winner, prediction.loser),
        60,
    );

    println!(
        "{} {} ({}%) over {} ({}%)",
        "🏆 Predicted winner:".bold(),
        prediction.winner.green().bold(),
        prediction.probability,
        prediction.loser.red(),
        prediction.loser_probability
    );
    println!(
        "{} {}% ({})\n",
        "📐 Confidence:".bold(),
        prediction.confidence,
        prediction.confidence_level
    );

    let rows = prediction
        .factors
        .iter()
        .map(|f| FactorRow {
            factor: f.name.clone(),
            impact: format!("+{}", f.impact),
        })
        .collect();
    print_table(rows);
    println!();
}

pub fn display_team_profile(team: &TeamProfile) {
    let title = match &team.code {
        Some(code) => format!("🌍 {} ({})", team.name, code),
        None => format!("🌍 {}", team.name),
    };
    heading(&title, 50);

    let ranking = if team.overall_ranking == crate::catalog::UNRANKED {
        "unranked".to_string()
    } else {
        format!("#{}", team.overall_ranking)
    };

    print_table(vec![
        stat("Ranking", ranking),
        stat("Region", team.region.as_deref().unwrap_or("Other")),
        stat("Matches", team.matches_played),
        stat("Won / Lost / NR", format!("{} / {} / {}", team.wins, team.losses, team.no_results)),
        stat("Win rate", format!("{:.1}%", team.win_rate * 100.0)),
        stat(
            "T20I / ODI / Test",
            format!(
                "#{} / #{} / #{}",
                team.current_ranking.t20i, team.current_ranking.odi, team.current_ranking.test
            ),
        ),
    ]);

    let form: String = team
        .recent_form
        .iter()
        .map(|r| {
            if *r == 'W' {
                "W".green().to_string()
            } else {
                "L".red().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("\n{} {}\n", "Last 10:".bold(), form);
}

pub fn display_teams(teams: &[TeamEntry]) {
    heading("🌍 INTERNATIONAL TEAMS", 50);
    let rows = teams
        .iter()
        .map(|t| TeamRow {
            rank: format!("#{}", t.ranking),
            team: t.name.to_string(),
            code: t.code.to_string(),
            region: t.region.to_string(),
        })
        .collect();
    print_table(rows);
}

pub fn display_venues(venues: &[VenueEntry]) {
    heading("🏟️ VENUES", 60);
    let rows = venues
        .iter()
        .map(|v| VenueListRow {
            venue: v.name.to_string(),
            city: v.city.to_string(),
            country: v.country.to_string(),
            capacity: v.capacity.to_string(),
        })
        .collect();
    print_table(rows);
}

pub fn display_players(players: &[&PlayerEntry]) {
    heading("👥 PLAYERS", 60);
    if players.is_empty() {
        println!("{}", "No players found for that team".yellow());
        return;
    }
    let rows = players
        .iter()
        .map(|p| PlayerRow {
            player: p.name.to_string(),
            team: p.team.to_string(),
            role: p.role.to_string(),
            ranking_bonus: p.ranking_bonus.to_string(),
        })
        .collect();
    print_table(rows);
}
