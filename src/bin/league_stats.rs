//! League Stats - interactive explorer for match record CSVs
//!
//! Loads a comma-delimited match export from the data directory, lets the
//! user toggle leagues in and out of the current selection, and prints
//! aggregate statistics over the selected games. Result lines accumulate in
//! a report log (`log` to review, `clear` to empty).

use anyhow::Result;
use clap::Parser;
use league_stats_toolkit::report::{render_summary_table, ReportLog};
use league_stats_toolkit::stats::{self, DEFAULT_DURATION_CUTOFFS, DEFAULT_KILLS_CUTOFFS};
use league_stats_toolkit::{fetch, SessionState};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "league-stats")]
#[command(about = "Interactive statistics explorer for match record CSVs")]
struct Cli {
    /// Directory containing dataset CSV files
    #[arg(short, long, default_value = "data", env = "LEAGUE_STATS_DATA_DIR")]
    data_dir: PathBuf,

    /// Dataset to load on startup (.csv appended if absent)
    #[arg(short, long)]
    load: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = SessionState::new();
    let mut report = ReportLog::new();

    if let Some(name) = &cli.load {
        run_load(&mut session, &mut report, &cli.data_dir, name);
    }

    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "load" => {
                if arg.is_empty() {
                    eprintln!("Usage: load <dataset-name>");
                } else {
                    run_load(&mut session, &mut report, &cli.data_dir, arg);
                }
            }
            "leagues" => cmd_leagues(&session),
            "toggle" => cmd_toggle(&mut session, arg),
            "avg-duration" => cmd_avg_duration(&session, &mut report),
            "avg-kills" => cmd_avg_kills(&session, &mut report),
            "winrate" => cmd_winrate(&session, &mut report),
            "duration-chances" => cmd_duration_chances(&session, &mut report),
            "kills-chances" => cmd_kills_chances(&session, &mut report),
            "champion" => cmd_champion(&session, &mut report, arg),
            "table" => cmd_table(&session),
            "log" => {
                for line in report.lines() {
                    println!("{}", line);
                }
            }
            "clear" => report.clear(),
            "reset" => {
                session.reset();
                report.clear();
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}' - type 'help' for a list", command),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  load <name>        Load a dataset from the data directory");
    println!("  leagues            List leagues found in the dataset");
    println!("  toggle <league>    Toggle a league in or out of the selection");
    println!("  avg-duration       Average game duration over selected games");
    println!("  avg-kills          Average combined kills over selected games");
    println!("  winrate            Average win rate over selected games");
    println!("  duration-chances   Shorter/longer odds per duration cutoff");
    println!("  kills-chances      More/less odds per combined-kills cutoff");
    println!("  champion <names>   Stats for comma-separated champion names");
    println!("  table              Summary table of the selected games");
    println!("  log                Print the report log");
    println!("  clear              Clear the report log");
    println!("  reset              Drop the dataset and start over");
    println!("  quit               Exit");
}

/// Print a result line and keep it in the report log.
fn emit(report: &mut ReportLog, line: String) {
    println!("{}", line);
    report.append(line);
}

fn regions(session: &SessionState) -> String {
    session.selected_leagues().join(", ")
}

fn run_load(session: &mut SessionState, report: &mut ReportLog, data_dir: &Path, name: &str) {
    if let Err(e) = session.begin_load() {
        eprintln!("{}", e);
        return;
    }
    match fetch::fetch_dataset(data_dir, name) {
        Ok(text) => {
            let games = session.complete_load(&text);
            emit(report, format!("CSV loaded - {} Games", games));
        }
        Err(e) => {
            session.abort_load();
            eprintln!("Error loading CSV file: {:#}", e);
        }
    }
}

fn cmd_leagues(session: &SessionState) {
    if !session.is_loaded() {
        eprintln!("No dataset loaded - use 'load <name>' first");
        return;
    }
    for league in session.leagues() {
        let marker = if session.selected_leagues().contains(league) {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, league);
    }
}

fn cmd_toggle(session: &mut SessionState, league: &str) {
    if league.is_empty() {
        eprintln!("Usage: toggle <league>");
        return;
    }
    if !session.leagues().iter().any(|l| l == league) {
        eprintln!("Unknown league '{}' - see 'leagues'", league);
        return;
    }
    session.toggle_league(league);
    println!(
        "Selected Leagues: {}, Total Games: {}",
        regions(session),
        session.filtered_primary().len()
    );
}

fn selection_is_empty(session: &SessionState) -> bool {
    if session.filtered_primary().is_empty() {
        eprintln!("No games selected - toggle a league first");
        return true;
    }
    false
}

fn cmd_avg_duration(session: &SessionState, report: &mut ReportLog) {
    if selection_is_empty(session) {
        return;
    }
    match stats::average_game_duration(session.filtered_primary(), session.header()) {
        Ok(seconds) => {
            let formatted = if seconds.is_finite() && seconds >= 0.0 {
                stats::format_duration(seconds as u64)
            } else {
                "--:--".to_string()
            };
            emit(
                report,
                format!(
                    "Average Game Duration: {} - In Regions [{}]",
                    formatted,
                    regions(session)
                ),
            );
        }
        Err(e) => eprintln!("{}", e),
    }
}

fn cmd_avg_kills(session: &SessionState, report: &mut ReportLog) {
    if selection_is_empty(session) {
        return;
    }
    match stats::average_combined_kills_deaths(session.filtered_primary(), session.header()) {
        Ok(kills) => emit(
            report,
            format!("Average Kills: {} - In Regions [{}]", kills, regions(session)),
        ),
        Err(e) => eprintln!("{}", e),
    }
}

fn cmd_winrate(session: &SessionState, report: &mut ReportLog) {
    if selection_is_empty(session) {
        return;
    }
    match stats::average_win_rate(session.filtered_primary(), session.header()) {
        Ok(wr) => emit(
            report,
            format!("Average WR: {} - In Regions [{}]", wr, regions(session)),
        ),
        Err(e) => eprintln!("{}", e),
    }
}

fn cmd_duration_chances(session: &SessionState, report: &mut ReportLog) {
    if selection_is_empty(session) {
        return;
    }
    let splits = match stats::duration_distribution(
        session.filtered_primary(),
        session.header(),
        &DEFAULT_DURATION_CUTOFFS,
    ) {
        Ok(splits) => splits,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    emit(report, "-----".to_string());
    for split in splits {
        emit(
            report,
            format!(
                "The average game in the regions [{}] has a {}% chance to be shorter than {} minutes and a {}% chance to be longer",
                regions(session),
                split.shorter_pct,
                split.minutes,
                split.longer_pct
            ),
        );
    }
}

fn cmd_kills_chances(session: &SessionState, report: &mut ReportLog) {
    if selection_is_empty(session) {
        return;
    }
    let splits = match stats::kills_distribution(
        session.filtered_primary(),
        session.header(),
        &DEFAULT_KILLS_CUTOFFS,
    ) {
        Ok(splits) => splits,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    emit(report, "-----".to_string());
    for split in splits {
        emit(
            report,
            format!(
                "The average game in the regions [{}] has a {}% chance to have less than {} kills and a {}% chance to have more",
                regions(session),
                split.less_pct,
                split.threshold,
                split.more_pct
            ),
        );
    }
}

fn cmd_champion(session: &SessionState, report: &mut ReportLog, arg: &str) {
    if arg.is_empty() {
        eprintln!("Usage: champion <name>[,<name>...]");
        return;
    }
    if session.filtered_all().is_empty() {
        eprintln!("No games selected - toggle a league first");
        return;
    }

    let names: Vec<&str> = arg.split(',').map(str::trim).collect();
    let summary =
        match stats::champion_summary(session.filtered_all(), session.header(), &names) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };

    let mut line = format!("{} has {} Games Played", names.join(","), summary.games);
    if summary.games > 0 {
        let duration = if summary.avg_duration.is_finite() && summary.avg_duration >= 0.0 {
            stats::format_duration(summary.avg_duration as u64)
        } else {
            "--:--".to_string()
        };
        line.push_str(&format!(", Average Game Duration: {}", duration));
        line.push_str(&format!(", Average Game Kills: {}", summary.avg_kills_deaths));
        line.push_str(&format!(", Average WR: {}", summary.win_rate));
    }
    line.push_str(&format!(" - In Regions [{}]", regions(session)));
    emit(report, line);
}

fn cmd_table(session: &SessionState) {
    if selection_is_empty(session) {
        return;
    }
    print!(
        "{}",
        render_summary_table(session.header(), session.filtered_primary())
    );
}
