//! End-to-end test over the load/toggle/compute pipeline.
//!
//! Walks the whole path a user takes in the interactive tool: load a
//! dataset, toggle a league, compute statistics over the filtered view, and
//! accumulate report lines. Exercises the same library code paths the
//! binary uses.

use league_stats_toolkit::report::{render_summary_table, ReportLog};
use league_stats_toolkit::{filter, stats, SessionState};

const SAMPLE: &str = "league,participantid,gamelength\nLCS,100,1500\nLCS,1,1500\nLEC,100,1800\n";

#[test]
fn load_toggle_and_compute() {
    let mut session = SessionState::new();
    let games = session.load(SAMPLE).unwrap();

    assert_eq!(games, 2);
    assert_eq!(
        session.header().columns(),
        ["league", "participantid", "gamelength"]
    );
    assert_eq!(session.primary_rows().len(), 2);
    assert_eq!(session.leagues(), ["LCS", "LEC"]);

    session.toggle_league("LCS");
    assert_eq!(session.filtered_primary(), [["LCS", "100", "1500"]]);

    let avg = stats::average_game_duration(session.filtered_primary(), session.header()).unwrap();
    assert_eq!(avg, 1500.0);
    assert_eq!(stats::format_duration(avg as u64), "25:00");
}

#[test]
fn report_lines_accumulate_across_operations() {
    let mut session = SessionState::new();
    let mut report = ReportLog::new();

    let games = session.load(SAMPLE).unwrap();
    report.append(format!("CSV loaded - {} Games", games));

    session.toggle_league("LCS");
    session.toggle_league("LEC");

    let avg =
        stats::average_game_duration(session.filtered_primary(), session.header()).unwrap();
    report.append(format!(
        "Average Game Duration: {} - In Regions [{}]",
        stats::format_duration(avg as u64),
        session.selected_leagues().join(", ")
    ));

    assert_eq!(
        report.lines(),
        [
            "CSV loaded - 2 Games",
            "Average Game Duration: 27:30 - In Regions [LCS, LEC]",
        ]
    );

    report.clear();
    assert!(report.lines().is_empty());
}

#[test]
fn distribution_over_selection_matches_filtered_rows() {
    let mut session = SessionState::new();
    session.load(SAMPLE).unwrap();
    session.toggle_league("LCS");
    session.toggle_league("LEC");

    let splits = stats::duration_distribution(
        session.filtered_primary(),
        session.header(),
        &[25, 26, 31],
    )
    .unwrap();

    // Games last 1500s (25:00) and 1800s (30:00).
    assert_eq!(splits[0].shorter_pct, 0);
    assert_eq!(splits[1].shorter_pct, 50);
    assert_eq!(splits[2].shorter_pct, 100);
    assert_eq!(splits[2].longer_pct, 0);
}

#[test]
fn summary_table_renders_the_filtered_view() {
    let mut session = SessionState::new();
    session
        .load("datacompleteness,league,participantid,gamelength,kills,deaths\ncomplete,LCS,100,1500,,7\n")
        .unwrap();
    session.toggle_league("LCS");

    let rendered = render_summary_table(session.header(), session.filtered_primary());
    let data_line = rendered.lines().nth(1).unwrap();
    assert!(data_line.contains("complete"));
    assert!(data_line.contains("1500"));
    // Empty kills value and missing split/date/patch columns render as '-'.
    assert!(data_line.contains('-'));
}

#[test]
fn primary_filter_composes_with_league_filter() {
    let mut session = SessionState::new();
    session.load(SAMPLE).unwrap();
    session.toggle_league("LCS");

    // filtered_primary is the league restriction of the primary subset.
    let expected = filter::filter_by_leagues(
        session.primary_rows(),
        session.header(),
        &["LCS".to_string()],
    );
    assert_eq!(session.filtered_primary(), expected.as_slice());
}
