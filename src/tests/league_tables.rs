use crate::api::{Fixture, Leaderboard, PlayerEntry, Squad, Standing, TransferEntry};
use crate::league::csv::{export_name, to_csv, write_csv};
use crate::league::{
    fixtures_table, format_number, goal_difference, leaderboard_table, league_label,
    league_param, player_stats_table, squad_table, standings_table, status_long,
    transfers_table, TableData,
};

use tempfile::tempdir;

/// WHAT: League codes map to API-Football ids
/// WHY: The backend only understands numeric ids
#[test]
fn given_league_codes_when_mapped_then_numeric_ids() {
    assert_eq!(league_param("EPL"), "39");
    assert_eq!(league_param("ll"), "140");
    assert_eq!(league_param("UCL"), "2");
    assert_eq!(league_param("CL"), "2");
    assert_eq!(league_param("ILEAGUE"), "325");
    assert_eq!(league_param(" 135 "), "135");
    assert_eq!(league_param("XYZ"), "XYZ");
    assert_eq!(league_label("39"), "Premier League");
    assert_eq!(league_label("BL"), "Bundesliga");
    assert_eq!(league_label("999"), "999");
}

/// WHAT: Status codes expand to their long form, unknown codes pass through
/// WHY: Used for fixture status tooltips
#[test]
fn given_status_codes_when_expanded_then_long_labels() {
    assert_eq!(status_long("FT"), "Finished");
    assert_eq!(status_long("NS"), "Not Started");
    assert_eq!(status_long("HT"), "Halftime");
    assert_eq!(status_long("??"), "??");
}

/// WHAT: Goal difference always carries a sign unless negative
/// WHY: Standings show +0 and +5, not 0 and 5
#[test]
fn given_goal_differences_when_formatted_then_signed() {
    assert_eq!(goal_difference(Some(5)), "+5");
    assert_eq!(goal_difference(Some(0)), "+0");
    assert_eq!(goal_difference(Some(-3)), "-3");
    assert_eq!(goal_difference(None), "-");
}

/// WHAT: Numbers get thousands separators and missing values a dash
/// WHY: Minutes played reach the thousands
#[test]
fn given_numbers_when_formatted_then_grouped() {
    assert_eq!(format_number(None), "-");
    assert_eq!(format_number(Some(0)), "0");
    assert_eq!(format_number(Some(999)), "999");
    assert_eq!(format_number(Some(3060)), "3,060");
    assert_eq!(format_number(Some(1234567)), "1,234,567");
    assert_eq!(format_number(Some(-1234)), "-1,234");
}

/// WHAT: A standings row maps onto the thirteen display columns
/// WHY: Column order is what the user reads and exports
#[test]
fn given_standing_when_tabulated_then_columns_in_order() {
    // Given: One standings entry
    let standing: Standing = serde_json::from_str(
        r#"{
            "rank": 1, "team": {"id": 40, "name": "Liverpool"}, "points": 84,
            "goalsDiff": 45, "form": "WWDLW", "status": "same",
            "description": "Promotion - Champions League",
            "all": {"played": 38, "win": 25, "draw": 9, "lose": 4,
                    "goals": {"for": 86, "against": 41}}
        }"#,
    )
    .unwrap();

    // When: Building the table
    let table = standings_table(&[standing]);

    // Then: Headers and values line up
    assert_eq!(table.headers[0], "#");
    assert_eq!(table.ncols(), 13);
    assert_eq!(
        table.rows[0],
        vec![
            "1", "Liverpool", "38", "25", "9", "4", "86", "41", "+45", "84", "WWDLW", "same",
            "Promotion - Champions League"
        ]
    );
}

/// WHAT: Fixture rows split the kickoff into date and time and dash gaps
/// WHY: Unplayed matches have no score and some have no venue
#[test]
fn given_fixture_when_tabulated_then_date_time_and_dashes() {
    // Given: An unplayed nested fixture without a venue
    let fixture: Fixture = serde_json::from_str(
        r#"{
            "fixture": {"id": 1, "date": "2024-08-16T19:00:00+00:00", "status": {"short": "NS"}},
            "league": {"name": "Premier League", "round": "Regular Season - 1"},
            "teams": {"home": {"name": "Manchester United"}, "away": {"name": "Fulham"}},
            "goals": {"home": null, "away": null}
        }"#,
    )
    .unwrap();

    // When: Building the table
    let table = fixtures_table(&[fixture]);

    // Then: Every column is filled
    assert_eq!(
        table.headers,
        vec!["Date", "Time", "League", "Status", "Home", "Score", "Away", "Venue", "Round"]
    );
    assert_eq!(
        table.rows[0],
        vec![
            "16 Aug 24",
            "19:00",
            "Premier League",
            "NS",
            "Manchester United",
            "- : -",
            "Fulham",
            "-",
            "Regular Season - 1"
        ]
    );
}

fn player_entry() -> PlayerEntry {
    serde_json::from_str(
        r#"{
            "player": {"id": 306, "name": "Mohamed Salah", "age": 32, "nationality": "Egypt",
                       "height": "175 cm", "weight": "71 kg"},
            "statistics": [
                {"team": {"name": "Liverpool"}, "league": {"name": "Premier League", "season": 2024},
                 "games": {"appearences": 38, "minutes": 3371, "rating": "7.9"},
                 "goals": {"total": 29, "assists": 18}, "shots": {"total": 130},
                 "passes": {"total": 1200, "key": 89}, "cards": {"yellow": 1, "red": 0}},
                {"team": {"name": "Egypt"}, "league": {"name": "World Cup - Qualification Africa", "season": 2024},
                 "games": {"appearences": 4}, "goals": {"total": 3}}
            ]
        }"#,
    )
    .unwrap()
}

/// WHAT: Player statistics produce one row per statistics entry
/// WHY: Club and national team numbers are listed separately
#[test]
fn given_player_with_two_stat_entries_when_tabulated_then_two_rows() {
    let table = player_stats_table(&[player_entry()]);

    assert_eq!(table.nrows(), 2);
    assert_eq!(table.rows[0][0], "Mohamed Salah");
    assert_eq!(table.rows[0][1], "Liverpool");
    assert_eq!(table.rows[0][5], "3,371");
    assert_eq!(table.rows[0][13], "7.9");
    assert_eq!(table.rows[1][1], "Egypt");
    assert_eq!(table.rows[1][7], "-");
}

/// WHAT: Leaderboards show the board's own metric column
/// WHY: Top scorers list goals, card boards list cards
#[test]
fn given_leaderboard_kind_when_tabulated_then_metric_column_matches() {
    let scorers = leaderboard_table(Leaderboard::TopScorers, &[player_entry()]);
    assert_eq!(scorers.headers, vec!["Player", "Team", "Goals", "Rating"]);
    assert_eq!(scorers.rows[0], vec!["Mohamed Salah", "Liverpool", "29", "7.9"]);

    let yellow = leaderboard_table(Leaderboard::TopYellowCards, &[player_entry()]);
    assert_eq!(yellow.headers[2], "Yellow");
    assert_eq!(yellow.rows[0][2], "1");
}

/// WHAT: Squad table lists the players of the first squad only
/// WHY: Squad lookups by player can return several teams
#[test]
fn given_two_squads_when_tabulated_then_first_only() {
    let squads: Vec<Squad> = serde_json::from_str(
        r#"[
            {"team": {"name": "Liverpool"},
             "players": [{"name": "Alisson Becker", "number": 1, "position": "Goalkeeper", "age": 31}]},
            {"team": {"name": "Egypt"}, "players": [{"name": "Other"}, {"name": "Another"}]}
        ]"#,
    )
    .unwrap();

    let table = squad_table(&squads);

    assert_eq!(table.nrows(), 1);
    assert_eq!(
        table.rows[0],
        vec!["Alisson Becker", "1", "Goalkeeper", "31", "-"]
    );
    assert!(squad_table(&[]).is_empty());
}

/// WHAT: Transfers flatten to one row per move with from/to teams
/// WHY: A player may have several transfers
#[test]
fn given_transfer_history_when_tabulated_then_one_row_per_transfer() {
    let entries: Vec<TransferEntry> = serde_json::from_str(
        r#"[{"player": {"name": "Mohamed Salah"}, "transfers": [
            {"date": "2017-07-01", "type": "€ 42M",
             "teams": {"in": {"name": "Liverpool"}, "out": {"name": "AS Roma"}}},
            {"date": "2016-06-01", "type": "Loan",
             "teams": {"in": {"name": "AS Roma"}, "out": {"name": "Chelsea"}}}
        ]}]"#,
    )
    .unwrap();

    let table = transfers_table(&entries);

    assert_eq!(table.nrows(), 2);
    assert_eq!(
        table.rows[0],
        vec!["Mohamed Salah", "2017-07-01", "€ 42M", "AS Roma", "Liverpool"]
    );
}

/// WHAT: CSV quotes fields with commas, quotes or newlines
/// WHY: Team names and descriptions contain commas
#[test]
fn given_cells_needing_quotes_when_exported_then_escaped() {
    // Given: A table with awkward cells
    let table = TableData::with(
        &["Team", "Description"],
        vec![
            vec!["Brighton & Hove Albion".to_string(), "Promotion, Europe".to_string()],
            vec!["\"The Reds\"".to_string(), "line one\nline two".to_string()],
        ],
    );

    // When: Rendering to CSV
    let csv = to_csv(&table);

    // Then: Only the awkward fields are quoted
    assert_eq!(
        csv,
        "Team,Description\n\
         Brighton & Hove Albion,\"Promotion, Europe\"\n\
         \"\"\"The Reds\"\"\",\"line one\nline two\"\n"
    );
}

/// WHAT: CSV files land on disk with the same content
/// WHY: Export writes what the preview shows
#[test]
fn given_table_when_written_then_file_matches_string() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(export_name("standings", "39", "2024"));
    let table = TableData::with(&["#", "Team"], vec![vec!["1".into(), "Liverpool".into()]]);

    write_csv(&path, &table).unwrap();

    assert!(path.ends_with("standings_39_2024.csv"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), to_csv(&table));
}
