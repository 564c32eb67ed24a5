//! Command line front end: every command loads the store file, runs, and saves if needed.
//! Run with: cargo run --bin americano -- --store club.json next-round
//! Log level via RUST_LOG (default info).

use americano_tournament::{
    import_players_csv, refresh_standings, start_next_round, submit_score, write_standings_csv,
    JsonFileStore, LeftoverPolicy, Persistence, Tournament, WinRule,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "americano", about = "Run an Americano tournament from a JSON store file")]
struct Cli {
    /// Store file holding players, rounds and settings.
    #[arg(long, default_value = "americano.json")]
    store: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a player.
    AddPlayer { name: String },
    /// Register players from a CSV file (columns: name, id, permanentBreak).
    ImportPlayers { file: PathBuf },
    RenamePlayer { id: String, name: String },
    /// Put a player on permanent break, or take them off it with --off.
    SetBreak {
        id: String,
        #[arg(long)]
        off: bool,
    },
    RemovePlayer { id: String },
    /// Show or change settings.
    Settings {
        #[arg(long)]
        courts: Option<u32>,
        #[arg(long)]
        win_points: Option<u32>,
        /// highest-score or reach-win-points
        #[arg(long)]
        win_rule: Option<WinRule>,
        /// drop or bye
        #[arg(long)]
        leftover: Option<LeftoverPolicy>,
    },
    /// Plan the next round and add it to the history.
    NextRound,
    /// Enter a court's score and refresh standings.
    Score {
        round: String,
        court: u32,
        home: u32,
        away: u32,
    },
    RemoveRound { id: String },
    /// Rebuild standings from the round history.
    Recompute,
    Standings {
        /// Print CSV instead of a table.
        #[arg(long)]
        csv: bool,
    },
    /// List rounds, newest first.
    Rounds,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&cli.store);
    let mut t = store
        .load()
        .with_context(|| format!("loading {}", cli.store.display()))?;

    let changed = execute(&mut t, cli.command)?;
    if changed {
        store
            .save(&t)
            .with_context(|| format!("saving {}", cli.store.display()))?;
    }
    Ok(())
}

/// Run one command. Returns whether the tournament changed.
fn execute(t: &mut Tournament, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::AddPlayer { name } => {
            let id = t.add_player(name)?;
            println!("Added player {}", id);
        }
        Command::ImportPlayers { file } => {
            let f = std::fs::File::open(&file)
                .with_context(|| format!("opening {}", file.display()))?;
            let players = import_players_csv(f)?;
            let count = players.len();
            for p in players {
                t.register_player(p)?;
            }
            println!("Imported {} player(s)", count);
        }
        Command::RenamePlayer { id, name } => t.rename_player(&id, &name)?,
        Command::SetBreak { id, off } => t.set_permanent_break(&id, !off)?,
        Command::RemovePlayer { id } => {
            let p = t.remove_player(&id)?;
            println!("Removed {}", p.name);
        }
        Command::Settings {
            courts,
            win_points,
            win_rule,
            leftover,
        } => {
            let mut s = t.settings;
            s.courts = courts.unwrap_or(s.courts);
            s.win_points = win_points.unwrap_or(s.win_points);
            s.win_rule = win_rule.unwrap_or(s.win_rule);
            s.leftover = leftover.unwrap_or(s.leftover);
            let changed = s != t.settings;
            t.update_settings(s)?;
            println!(
                "courts={} win-points={} win-rule={} leftover={}",
                s.courts, s.win_points, s.win_rule, s.leftover
            );
            return Ok(changed);
        }
        Command::NextRound => {
            let id = start_next_round(t)?;
            if let Some(round) = t.round(&id) {
                print_round(t, round);
            }
        }
        Command::Score {
            round,
            court,
            home,
            away,
        } => submit_score(t, &round, court, home, away)?,
        Command::RemoveRound { id } => {
            t.remove_round(&id)?;
            refresh_standings(t)?;
        }
        Command::Recompute => refresh_standings(t)?,
        Command::Standings { csv } => {
            let ranked = t.standings();
            if csv {
                write_standings_csv(std::io::stdout().lock(), &ranked)?;
            } else {
                println!(
                    "{:>3}  {:<20} {:>4} {:>6} {:>5} {:>4}",
                    "#", "Name", "Wins", "Points", "Games", "Byes"
                );
                for (i, p) in ranked.iter().enumerate() {
                    let name = if p.permanent_break {
                        format!("{} (break)", p.name)
                    } else {
                        p.name.clone()
                    };
                    println!(
                        "{:>3}  {:<20} {:>4} {:>6} {:>5} {:>4}",
                        i + 1,
                        name,
                        p.wins,
                        p.total_points,
                        p.games,
                        p.bye_count
                    );
                }
            }
            return Ok(false);
        }
        Command::Rounds => {
            for round in t.rounds_newest_first() {
                print_round(t, round);
            }
            return Ok(false);
        }
    }
    Ok(true)
}

fn print_round(t: &Tournament, round: &americano_tournament::Round) {
    let name = |id: &String| {
        t.player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("<{}>", id))
    };
    println!("Round {} ({})", round.id, round.date.format("%Y-%m-%d %H:%M"));
    for c in &round.courts {
        println!(
            "  Court {}: {} & {}  {} - {}  {} & {}",
            c.court_number,
            name(&c.home[0]),
            name(&c.home[1]),
            c.score_home,
            c.score_away,
            name(&c.away[0]),
            name(&c.away[1])
        );
    }
    if !round.byes.is_empty() {
        let byes: Vec<String> = round.byes.iter().map(name).collect();
        println!("  Bye: {}", byes.join(", "));
    }
}
