//! Row subset derivation.
//!
//! All filters are pure and order-preserving: the output is a subset of the
//! input in the input's order, and the input is never mutated.

use crate::table::{Header, Row};
use std::collections::BTreeSet;

/// Column carrying the participant identifier.
pub const PARTICIPANT_COLUMN: &str = "participantid";

/// Sentinel participant id marking the team-aggregate row of a game, as
/// opposed to the per-player rows.
pub const PRIMARY_PARTICIPANT_ID: &str = "100";

/// Column carrying the league/region name.
pub const LEAGUE_COLUMN: &str = "league";

/// Keep only team-aggregate rows, one per game.
///
/// If the header has no `participantid` column every comparison fails and
/// the result is empty — callers treat that as "nothing matched", not as an
/// error.
pub fn filter_primary(rows: &[Row], header: &Header) -> Vec<Row> {
    let Some(idx) = header.index_of(PARTICIPANT_COLUMN) else {
        return Vec::new();
    };
    rows.iter()
        .filter(|row| row.get(idx).map(String::as_str) == Some(PRIMARY_PARTICIPANT_ID))
        .cloned()
        .collect()
}

/// Keep only rows whose league is in `selected`.
///
/// An empty selection yields an empty result — there is no implicit
/// "show all" when nothing is toggled on.
pub fn filter_by_leagues(rows: &[Row], header: &Header, selected: &[String]) -> Vec<Row> {
    let Some(idx) = header.index_of(LEAGUE_COLUMN) else {
        return Vec::new();
    };
    rows.iter()
        .filter(|row| {
            row.get(idx)
                .is_some_and(|league| selected.iter().any(|s| s == league))
        })
        .cloned()
        .collect()
}

/// Distinct league names present in `rows`, lexicographically sorted.
///
/// Blank values and a header line echoed into the data (`"league"`) are
/// skipped.
pub fn unique_leagues(rows: &[Row], header: &Header) -> Vec<String> {
    let Some(idx) = header.index_of(LEAGUE_COLUMN) else {
        return Vec::new();
    };
    let mut seen = BTreeSet::new();
    for row in rows {
        if let Some(league) = row.get(idx) {
            if league.is_empty() || league == " " || league == LEAGUE_COLUMN {
                continue;
            }
            seen.insert(league.clone());
        }
    }
    seen.into_iter().collect()
}
