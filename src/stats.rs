//! Aggregate metrics over match rows.
//!
//! Every function here is stateless: it takes a row collection plus the
//! header for column resolution and returns a numeric result. The average
//! functions return the sentinel `-1.0` for an empty input so callers can
//! tell "no data" apart from a legitimate zero — check the row count before
//! reading the sentinel as a value. A field that fails to parse as a number
//! becomes NaN and poisons the aggregate rather than being skipped; the
//! occurrence is logged so it can be told apart from a true zero.

use crate::error::StatsError;
use crate::table::{Header, Row};

/// Column carrying the game duration in seconds.
pub const GAME_LENGTH_COLUMN: &str = "gamelength";
/// Column carrying the team's total kills for the game.
pub const TEAM_KILLS_COLUMN: &str = "teamkills";
/// Column carrying the team's total deaths for the game.
pub const TEAM_DEATHS_COLUMN: &str = "teamdeaths";
/// Column carrying the game result (0 = loss, 1 = win).
pub const RESULT_COLUMN: &str = "result";
/// Column carrying the champion name on per-player rows.
pub const CHAMPION_COLUMN: &str = "champion";
/// Column carrying per-side kills, used by the kills distribution.
pub const KILLS_COLUMN: &str = "kills";
/// Column carrying per-side deaths, used by the kills distribution.
pub const DEATHS_COLUMN: &str = "deaths";

/// Sentinel returned by the average functions for an empty row set.
pub const EMPTY_SENTINEL: f64 = -1.0;

/// Duration cutoffs probed by the duration-chances report, in minutes.
pub const DEFAULT_DURATION_CUTOFFS: [u32; 12] = [25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36];

/// Combined kills+deaths cutoffs probed by the kills-chances report.
pub const DEFAULT_KILLS_CUTOFFS: [f64; 12] = [
    21.5, 22.5, 23.5, 24.5, 25.5, 26.5, 27.5, 28.5, 29.5, 30.5, 31.5, 32.5,
];

fn require_column(header: &Header, name: &str) -> Result<usize, StatsError> {
    header
        .index_of(name)
        .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))
}

/// Read a numeric field, preserving the source data's arithmetic: a missing
/// or non-numeric field becomes NaN instead of being skipped or repaired.
fn numeric_field(row: &Row, idx: usize, column: &str) -> f64 {
    match row.get(idx) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("non-numeric value {:?} in column '{}'", raw, column);
            f64::NAN
        }),
        None => {
            log::warn!("row too short for column '{}' (index {})", column, idx);
            f64::NAN
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Mean game duration in seconds, rounded to the nearest whole second.
/// Returns [`EMPTY_SENTINEL`] for an empty row set.
pub fn average_game_duration(rows: &[Row], header: &Header) -> Result<f64, StatsError> {
    if rows.is_empty() {
        return Ok(EMPTY_SENTINEL);
    }
    let idx = require_column(header, GAME_LENGTH_COLUMN)?;
    let total: f64 = rows
        .iter()
        .map(|row| numeric_field(row, idx, GAME_LENGTH_COLUMN))
        .sum();
    Ok((total / rows.len() as f64).round())
}

/// Mean of `teamkills + teamdeaths` per game, rounded to two decimals.
/// Returns [`EMPTY_SENTINEL`] for an empty row set.
///
/// The original tool labels this "average kills" while actually summing
/// kills and deaths; the semantics are kept, the name says what it does.
pub fn average_combined_kills_deaths(rows: &[Row], header: &Header) -> Result<f64, StatsError> {
    if rows.is_empty() {
        return Ok(EMPTY_SENTINEL);
    }
    let kills_idx = require_column(header, TEAM_KILLS_COLUMN)?;
    let deaths_idx = require_column(header, TEAM_DEATHS_COLUMN)?;
    let total: f64 = rows
        .iter()
        .map(|row| {
            numeric_field(row, kills_idx, TEAM_KILLS_COLUMN)
                + numeric_field(row, deaths_idx, TEAM_DEATHS_COLUMN)
        })
        .sum();
    Ok(round2(total / rows.len() as f64))
}

/// Mean of the `result` column (expected 0/1), rounded to two decimals.
/// This is a fraction in [0, 1], not a percentage. Returns
/// [`EMPTY_SENTINEL`] for an empty row set.
pub fn average_win_rate(rows: &[Row], header: &Header) -> Result<f64, StatsError> {
    if rows.is_empty() {
        return Ok(EMPTY_SENTINEL);
    }
    let idx = require_column(header, RESULT_COLUMN)?;
    let total: f64 = rows
        .iter()
        .map(|row| numeric_field(row, idx, RESULT_COLUMN))
        .sum();
    Ok(round2(total / rows.len() as f64))
}

/// Format whole seconds as zero-padded `MM:SS`. Durations of 100 minutes or
/// more widen the minutes field rather than truncating.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Shorter/longer split for one duration cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSplit {
    /// Cutoff in whole minutes.
    pub minutes: u32,
    /// Rounded percentage of games strictly shorter than the cutoff.
    pub shorter_pct: u32,
    /// Rounded percentage of games lasting the cutoff or longer.
    pub longer_pct: u32,
}

/// For each cutoff, the rounded percentage of games strictly shorter than
/// `minutes * 60` seconds versus longer-or-equal, in cutoff order.
///
/// A NaN duration fails the `<` comparison and lands on the "longer" side.
/// Requires a non-empty row set.
pub fn duration_distribution(
    rows: &[Row],
    header: &Header,
    cutoffs_minutes: &[u32],
) -> Result<Vec<DurationSplit>, StatsError> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let idx = require_column(header, GAME_LENGTH_COLUMN)?;
    let durations: Vec<f64> = rows
        .iter()
        .map(|row| numeric_field(row, idx, GAME_LENGTH_COLUMN))
        .collect();

    Ok(cutoffs_minutes
        .iter()
        .map(|&minutes| {
            let cutoff = f64::from(minutes) * 60.0;
            let shorter = durations.iter().filter(|&&d| d < cutoff).count();
            let longer = durations.len() - shorter;
            DurationSplit {
                minutes,
                shorter_pct: percent(shorter, durations.len()),
                longer_pct: percent(longer, durations.len()),
            }
        })
        .collect())
}

/// More/less split for one combined kills+deaths cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct KillsSplit {
    /// Combined kills+deaths cutoff.
    pub threshold: f64,
    /// Rounded percentage of games with strictly more combined kills+deaths.
    pub more_pct: u32,
    /// Rounded percentage of games at or below the cutoff.
    pub less_pct: u32,
}

/// For each cutoff, the rounded percentage of games whose `kills + deaths`
/// is strictly greater versus less-or-equal, in cutoff order.
///
/// A NaN total fails the `>` comparison and lands on the "less" side.
/// Requires a non-empty row set.
pub fn kills_distribution(
    rows: &[Row],
    header: &Header,
    cutoffs: &[f64],
) -> Result<Vec<KillsSplit>, StatsError> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let kills_idx = require_column(header, KILLS_COLUMN)?;
    let deaths_idx = require_column(header, DEATHS_COLUMN)?;
    let totals: Vec<f64> = rows
        .iter()
        .map(|row| {
            numeric_field(row, kills_idx, KILLS_COLUMN)
                + numeric_field(row, deaths_idx, DEATHS_COLUMN)
        })
        .collect();

    Ok(cutoffs
        .iter()
        .map(|&threshold| {
            let more = totals.iter().filter(|&&t| t > threshold).count();
            let less = totals.len() - more;
            KillsSplit {
                threshold,
                more_pct: percent(more, totals.len()),
                less_pct: percent(less, totals.len()),
            }
        })
        .collect())
}

/// Aggregate over every row in which one of the requested champions
/// appears.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionSummary {
    /// Number of matching rows across all requested names combined.
    pub games: usize,
    /// Mean game duration in seconds ([`EMPTY_SENTINEL`] when no matches).
    pub avg_duration: f64,
    /// Mean combined team kills and deaths ([`EMPTY_SENTINEL`] when no
    /// matches).
    pub avg_kills_deaths: f64,
    /// Mean win rate in [0, 1] ([`EMPTY_SENTINEL`] when no matches).
    pub win_rate: f64,
}

/// Collect every row whose champion matches one of `names` and compute the
/// three averages over the combined set.
///
/// Matching is exact and case-sensitive; names are trimmed before
/// comparison. A name matching zero rows contributes nothing. Rows are
/// gathered name-major, so the combined set follows the input name order.
pub fn champion_summary(
    rows: &[Row],
    header: &Header,
    names: &[&str],
) -> Result<ChampionSummary, StatsError> {
    let idx = require_column(header, CHAMPION_COLUMN)?;

    let mut matches: Vec<Row> = Vec::new();
    for name in names {
        let name = name.trim();
        for row in rows {
            if row.get(idx).map(String::as_str) == Some(name) {
                matches.push(row.clone());
            }
        }
    }

    Ok(ChampionSummary {
        games: matches.len(),
        avg_duration: average_game_duration(&matches, header)?,
        avg_kills_deaths: average_combined_kills_deaths(&matches, header)?,
        win_rate: average_win_rate(&matches, header)?,
    })
}
