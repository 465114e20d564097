use crate::api::{Leaderboard, PlayerQuery};
use crate::app::{count_label, StatsForm, StatsView};

fn form() -> StatsForm {
    StatsForm {
        league: "EPL".to_string(),
        season: " 2024 ".to_string(),
        search: "salah".to_string(),
        team: "40".to_string(),
        player: "".to_string(),
    }
}

/// WHAT: Profile lookups send search, season and the numeric league
/// WHY: Blank inputs must not become empty query parameters
#[test]
fn given_profiles_view_when_building_query_then_blank_fields_omitted() {
    let query = form().query_for(StatsView::Profiles);

    assert_eq!(
        query,
        PlayerQuery {
            league: Some("39".to_string()),
            season: Some("2024".to_string()),
            search: Some("salah".to_string()),
            ..Default::default()
        }
    );
}

/// WHAT: Squad lookups only send team and player
/// WHY: The squads endpoint rejects league and season
#[test]
fn given_squad_view_when_building_query_then_team_only() {
    let query = form().query_for(StatsView::Squad);

    assert_eq!(
        query,
        PlayerQuery {
            team: Some("40".to_string()),
            ..Default::default()
        }
    );
}

/// WHAT: Leaderboards send league and season only
/// WHY: They rank a whole competition
#[test]
fn given_leaderboard_view_when_building_query_then_league_and_season() {
    let query = form().query_for(StatsView::Leaderboard(Leaderboard::TopAssists));

    assert_eq!(query.league.as_deref(), Some("39"));
    assert_eq!(query.season.as_deref(), Some("2024"));
    assert!(query.search.is_none());
    assert!(query.team.is_none());
}

/// WHAT: Library badges use singular for one file
/// WHY: "1 files" reads wrong
#[test]
fn given_counts_when_labelled_then_pluralised() {
    assert_eq!(count_label(0), "0 files");
    assert_eq!(count_label(1), "1 file");
    assert_eq!(count_label(12), "12 files");
}
