use crate::api::{ApiError, Fixture, Leaderboard, PlayerQuery, Standing};
use crate::config::LeagueConfig;
use crate::league::{league_param, TableData};

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upload,
    League,
    Statistics,
    Library,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Upload, Tab::League, Tab::Statistics, Tab::Library];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Upload => "📤 Upload & Analyze",
            Tab::League => "🏆 Fixtures & Standings",
            Tab::Statistics => "📊 Statistics",
            Tab::Library => "🎞 Videos",
        }
    }
}

/// Which statistics table the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsView {
    #[default]
    Profiles,
    PlayerStats,
    Squad,
    Coaches,
    Leaderboard(Leaderboard),
    Transfers,
}

impl StatsView {
    pub fn label(self) -> &'static str {
        match self {
            StatsView::Profiles => "Player profiles",
            StatsView::PlayerStats => "Player statistics",
            StatsView::Squad => "Squad",
            StatsView::Coaches => "Coaches",
            StatsView::Leaderboard(kind) => kind.label(),
            StatsView::Transfers => "Transfers",
        }
    }
}

/// Result of a one-shot background fetch, delivered to the UI thread.
#[derive(Debug)]
pub enum FetchResult {
    Fixtures(Result<Vec<Fixture>, ApiError>),
    Standings(Result<Vec<Standing>, ApiError>),
    Stats(StatsView, Result<TableData, ApiError>),
    Videos(Result<Vec<String>, ApiError>),
    Outputs(Result<Vec<String>, ApiError>),
    Deleted(String, Result<(), ApiError>),
    Downloaded(PathBuf, Result<u64, ApiError>),
}

/// One-line message shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct LeagueState {
    pub league: String,
    pub season: String,
    pub timezone: String,
    pub fixtures: Option<TableData>,
    pub standings: Option<TableData>,
    pub loading_fixtures: bool,
    pub loading_standings: bool,
    pub error: Option<String>,
}

impl LeagueState {
    pub fn from_config(config: &LeagueConfig) -> Self {
        Self {
            league: config.league.clone(),
            season: config.season.clone(),
            timezone: config.timezone.clone(),
            ..Default::default()
        }
    }
}

/// Free-text inputs of the statistics tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsForm {
    pub league: String,
    pub season: String,
    pub search: String,
    pub team: String,
    pub player: String,
}

impl StatsForm {
    /// Build the query string each view sends; blank inputs are omitted.
    pub fn query_for(&self, view: StatsView) -> PlayerQuery {
        let field = PlayerQuery::field;
        let league = field(&self.league).map(|l| league_param(&l));

        match view {
            StatsView::Profiles => PlayerQuery {
                search: field(&self.search),
                id: field(&self.player),
                season: field(&self.season),
                league,
                ..Default::default()
            },
            StatsView::PlayerStats => PlayerQuery {
                season: field(&self.season),
                league,
                id: field(&self.player),
                team: field(&self.team),
                ..Default::default()
            },
            StatsView::Squad => PlayerQuery {
                team: field(&self.team),
                player: field(&self.player),
                ..Default::default()
            },
            StatsView::Coaches => PlayerQuery {
                team: field(&self.team),
                search: field(&self.search),
                ..Default::default()
            },
            StatsView::Leaderboard(_) => PlayerQuery {
                season: field(&self.season),
                league,
                ..Default::default()
            },
            StatsView::Transfers => PlayerQuery {
                player: field(&self.player),
                team: field(&self.team),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct StatsState {
    pub form: StatsForm,
    pub view: StatsView,
    pub table: Option<TableData>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct LibraryState {
    pub videos: Vec<String>,
    pub outputs: Vec<String>,
    pub loaded_videos: bool,
    pub loaded_outputs: bool,
    pub loading_videos: bool,
    pub loading_outputs: bool,
    pub error: Option<String>,
}

/// "1 file" / "N files".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}
