use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_table::config::AppConfig;
use league_table::league::League;
use league_table::storage::StateStore;
use league_table::{parse_score, MatchKey, TeamStats};

#[derive(Parser)]
#[command(name = "league-table")]
#[command(about = "Round-robin league standings with head-to-head tie-breaks")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./league.toml")]
    config: PathBuf,

    /// State file path (overrides the config)
    #[arg(long)]
    state: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current standings
    Standings,

    /// List teams in roster order
    Teams,

    /// Add a team to the roster
    AddTeam {
        name: String,
    },

    /// Remove a team and all of its results
    RemoveTeam {
        name: String,
    },

    /// Rename a team, keeping its results
    RenameTeam {
        old: String,
        new: String,
    },

    /// Record a score; leave a side blank or "-" if not yet known
    Score {
        home: String,
        away: String,
        home_score: String,
        away_score: String,
    },

    /// Remove a single recorded score
    ClearScore {
        home: String,
        away: String,
    },

    /// Remove every recorded score; needs a second run to confirm
    ClearScores {
        /// Clear immediately without the confirming run
        #[arg(long)]
        yes: bool,
    },

    /// Reorder the roster by current rank
    Sort,

    /// Restore the default roster order
    ResetOrder,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {:?}", cli.config))?;

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let store = StateStore::new(cli.state.clone().unwrap_or_else(|| config.state_path.clone()));
    let state = store.load(&config.league.default_teams);
    let mut league = League::from_state(config.league.clone(), state);

    tracing::debug!(
        "Loaded league with {} teams from {:?}",
        league.teams().len(),
        store.path()
    );

    match cli.command {
        Commands::Standings => {
            print_standings(&league.standings());
            return Ok(());
        }
        Commands::Teams => {
            for (i, team) in league.teams().iter().enumerate() {
                println!("{:>2}. {}", i + 1, team);
            }
            return Ok(());
        }
        Commands::AddTeam { name } => {
            let name = league.add_team(&name)?;
            println!("Added {}", name);
        }
        Commands::RemoveTeam { name } => {
            league.remove_team(&name)?;
            println!("Removed {}", name);
        }
        Commands::RenameTeam { old, new } => {
            league.rename_team(&old, &new)?;
            println!("Renamed {} -> {}", old, new.trim());
        }
        Commands::Score {
            home,
            away,
            home_score,
            away_score,
        } => {
            let Some(home_goals) = parse_score(&home_score) else {
                bail!("Invalid home score: {}", home_score);
            };
            let Some(away_goals) = parse_score(&away_score) else {
                bail!("Invalid away score: {}", away_score);
            };
            league.update_score(&home, &away, home_goals, away_goals)?;
            println!("Recorded {}", MatchKey::encode(&home, &away));
        }
        Commands::ClearScore { home, away } => match league.clear_score(&home, &away)? {
            Some(_) => println!("Cleared {}", MatchKey::encode(&home, &away)),
            None => {
                println!("No score recorded for {} vs {}", home, away);
                return Ok(());
            }
        },
        Commands::ClearScores { yes } => {
            if yes {
                league.clear_scores();
                println!("Cleared all scores");
            } else if league.request_clear() {
                println!("Cleared all scores");
            } else {
                println!(
                    "This removes all {} recorded scores. Run clear-scores again to confirm.",
                    league.matches().len()
                );
            }
        }
        Commands::Sort => {
            league.sort_by_rank();
            println!("Roster sorted by rank");
        }
        Commands::ResetOrder => {
            league.reset_order();
            println!("Roster order reset");
        }
    }

    store
        .save(league.state())
        .with_context(|| format!("saving state to {:?}", store.path()))?;

    println!();
    print_standings(&league.standings());
    Ok(())
}

fn print_standings(table: &[TeamStats]) {
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for stats in table {
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
            stats.rank.unwrap_or_default(),
            stats.name,
            stats.played,
            stats.won,
            stats.drawn,
            stats.lost,
            stats.gf,
            stats.ga,
            format!("{:+}", stats.gd),
            stats.points
        );
    }
}
