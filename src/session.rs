//! Session state: the load → derive → filter lifecycle.
//!
//! One aggregate owns the dataset and everything derived from it, and all
//! mutation goes through the transition methods below. Derived views are
//! recomputed inside the same call that changes their inputs — there is no
//! intermediate state where a filtered view reflects a stale selection.

use crate::error::SessionError;
use crate::filter;
use crate::table::{Header, Row, Table};

/// The loaded dataset, the user's league selection, and the views derived
/// from both.
///
/// A load runs in two steps so a fetch can happen in between:
/// [`begin_load`](SessionState::begin_load) claims the load slot (a second
/// load while one is pending is rejected, not queued), then either
/// [`complete_load`](SessionState::complete_load) installs the fetched text
/// or [`abort_load`](SessionState::abort_load) releases the slot with the
/// prior state untouched.
#[derive(Debug, Default)]
pub struct SessionState {
    table: Table,
    primary_rows: Vec<Row>,
    leagues: Vec<String>,
    selected: Vec<String>,
    filtered_all: Vec<Row>,
    filtered_primary: Vec<Row>,
    loaded: bool,
    load_in_flight: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the load slot for an in-flight fetch.
    pub fn begin_load(&mut self) -> Result<(), SessionError> {
        if self.load_in_flight {
            return Err(SessionError::Busy);
        }
        self.load_in_flight = true;
        Ok(())
    }

    /// Release the load slot without touching the current dataset. Called
    /// when the fetch failed or was cancelled.
    pub fn abort_load(&mut self) {
        self.load_in_flight = false;
    }

    /// Install a fetched dataset, replacing the previous one and every
    /// derived view in one step. The league selection and both filtered
    /// views reset to empty. Returns the number of games (primary rows).
    pub fn complete_load(&mut self, text: &str) -> usize {
        let table = Table::parse(text);
        self.primary_rows = filter::filter_primary(&table.rows, &table.header);
        self.leagues = filter::unique_leagues(&self.primary_rows, &table.header);
        self.table = table;
        self.selected.clear();
        self.filtered_all.clear();
        self.filtered_primary.clear();
        self.loaded = true;
        self.load_in_flight = false;
        self.primary_rows.len()
    }

    /// Single-step load for callers that already hold the dataset text.
    pub fn load(&mut self, text: &str) -> Result<usize, SessionError> {
        self.begin_load()?;
        Ok(self.complete_load(text))
    }

    /// Toggle a league in or out of the selection, then re-derive both
    /// filtered views before returning. Toggling the same league twice is a
    /// round trip back to the previous state.
    pub fn toggle_league(&mut self, league: &str) {
        match self.selected.iter().position(|l| l == league) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(league.to_string()),
        }
        self.filtered_all = filter::filter_by_leagues(
            &self.table.rows,
            &self.table.header,
            &self.selected,
        );
        self.filtered_primary =
            filter::filter_by_leagues(&self.primary_rows, &self.table.header, &self.selected);
    }

    /// Back to the empty session: no dataset, no selection, no views.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    pub fn header(&self) -> &Header {
        &self.table.header
    }

    /// Every parsed data row, in file order.
    pub fn all_rows(&self) -> &[Row] {
        &self.table.rows
    }

    /// One team-aggregate row per game.
    pub fn primary_rows(&self) -> &[Row] {
        &self.primary_rows
    }

    /// Distinct league names found in the primary rows, sorted.
    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    /// Currently toggled-on leagues, in toggle order.
    pub fn selected_leagues(&self) -> &[String] {
        &self.selected
    }

    /// All rows restricted to the selected leagues.
    pub fn filtered_all(&self) -> &[Row] {
        &self.filtered_all
    }

    /// Primary rows restricted to the selected leagues.
    pub fn filtered_primary(&self) -> &[Row] {
        &self.filtered_primary
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.load_in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "league,participantid,gamelength\nLCS,100,1500\nLCS,1,1500\nLEC,100,1800\n";

    fn loaded_session() -> SessionState {
        let mut session = SessionState::new();
        session.load(SAMPLE).unwrap();
        session
    }

    #[test]
    fn load_derives_primary_rows_and_leagues() {
        let session = loaded_session();
        assert!(session.is_loaded());
        assert_eq!(session.primary_rows().len(), 2);
        assert_eq!(session.leagues(), ["LCS", "LEC"]);
        assert!(session.selected_leagues().is_empty());
        assert!(session.filtered_all().is_empty());
        assert!(session.filtered_primary().is_empty());
    }

    #[test]
    fn load_returns_game_count() {
        let mut session = SessionState::new();
        assert_eq!(session.load(SAMPLE).unwrap(), 2);
    }

    #[test]
    fn second_load_while_in_flight_is_rejected() {
        let mut session = loaded_session();
        session.begin_load().unwrap();
        assert!(matches!(session.begin_load(), Err(SessionError::Busy)));
        assert!(matches!(session.load(SAMPLE), Err(SessionError::Busy)));

        // Aborting keeps the prior dataset and frees the slot.
        session.abort_load();
        assert_eq!(session.primary_rows().len(), 2);
        assert!(session.begin_load().is_ok());
    }

    #[test]
    fn toggle_updates_selection_and_views_in_one_call() {
        let mut session = loaded_session();
        session.toggle_league("LCS");
        assert_eq!(session.selected_leagues(), ["LCS"]);
        assert_eq!(session.filtered_primary().len(), 1);
        assert_eq!(session.filtered_primary()[0], ["LCS", "100", "1500"]);
        // Both LCS rows, player row included.
        assert_eq!(session.filtered_all().len(), 2);
    }

    #[test]
    fn toggling_twice_is_a_round_trip() {
        let mut session = loaded_session();
        session.toggle_league("LCS");
        session.toggle_league("LCS");
        assert!(session.selected_leagues().is_empty());
        assert!(session.filtered_all().is_empty());
        assert!(session.filtered_primary().is_empty());
    }

    #[test]
    fn selection_preserves_toggle_order() {
        let mut session = loaded_session();
        session.toggle_league("LEC");
        session.toggle_league("LCS");
        assert_eq!(session.selected_leagues(), ["LEC", "LCS"]);
    }

    #[test]
    fn reload_resets_the_selection() {
        let mut session = loaded_session();
        session.toggle_league("LCS");
        session.load(SAMPLE).unwrap();
        assert!(session.selected_leagues().is_empty());
        assert!(session.filtered_primary().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = loaded_session();
        session.toggle_league("LCS");
        session.reset();
        assert!(!session.is_loaded());
        assert!(session.all_rows().is_empty());
        assert!(session.leagues().is_empty());
    }
}
