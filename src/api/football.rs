//! Response schemas for the league-data proxy endpoints.
//!
//! The backend forwards API-Football payloads mostly untouched, so every
//! field is optional and absent values decode to `None` instead of failing
//! the whole table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/get_fixtures`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesEnvelope {
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/get_standings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsEnvelope {
    #[serde(default)]
    pub standings: Vec<Standing>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `{ response: [...] }` returned by the `/api/players*`, `/api/coachs` and
/// `/api/transfers` proxies.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
    /// API-Football reports request problems here with a 200 status.
    #[serde(default)]
    pub errors: Option<Value>,
}

impl<T> ResponseEnvelope<T> {
    /// Backend or upstream error message, if the envelope carries one.
    pub fn failure(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        match &self.errors {
            Some(Value::Array(items)) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(value_text)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            Some(Value::Object(map)) if !map.is_empty() => Some(
                map.iter()
                    .map(|(key, value)| format!("{}: {}", key, value_text(value)))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeagueRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub season: Option<i64>,
    #[serde(default)]
    pub round: Option<String>,
}

// ---------------------------------------------------------------- fixtures

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FixtureStatus {
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub elapsed: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub home: Option<i64>,
    #[serde(default)]
    pub away: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Teams {
    #[serde(default)]
    pub home: Option<TeamRef>,
    #[serde(default)]
    pub away: Option<TeamRef>,
}

/// Match metadata, found under `fixture` or at the top level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FixtureInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<FixtureStatus>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub goals: Option<Score>,
}

/// One entry of the fixtures list. Some backends nest the match data under
/// `fixture`, others flatten it into the entry itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub fixture: Option<FixtureInfo>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
    #[serde(default)]
    pub teams: Option<Teams>,
    #[serde(default)]
    pub goals: Option<Score>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(flatten)]
    pub flat: FixtureInfo,
}

impl Fixture {
    pub fn info(&self) -> &FixtureInfo {
        self.fixture.as_ref().unwrap_or(&self.flat)
    }

    pub fn score(&self) -> Score {
        self.goals.or(self.info().goals).unwrap_or_default()
    }

    pub fn round(&self) -> Option<&str> {
        self.league
            .as_ref()
            .and_then(|l| l.round.as_deref())
            .or(self.round.as_deref())
    }

    pub fn home(&self) -> Option<&TeamRef> {
        self.teams.as_ref().and_then(|t| t.home.as_ref())
    }

    pub fn away(&self) -> Option<&TeamRef> {
        self.teams.as_ref().and_then(|t| t.away.as_ref())
    }
}

// --------------------------------------------------------------- standings

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct GoalsForAgainst {
    #[serde(default, rename = "for")]
    pub scored: Option<i64>,
    #[serde(default)]
    pub against: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StandingRecord {
    #[serde(default)]
    pub played: Option<i64>,
    #[serde(default)]
    pub win: Option<i64>,
    #[serde(default)]
    pub draw: Option<i64>,
    #[serde(default)]
    pub lose: Option<i64>,
    #[serde(default)]
    pub goals: Option<GoalsForAgainst>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Standing {
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default, rename = "goalsDiff")]
    pub goals_diff: Option<i64>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub all: Option<StandingRecord>,
}

// ----------------------------------------------------------------- players

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Games {
    /// Spelled this way by the upstream API.
    #[serde(default)]
    pub appearences: Option<i64>,
    #[serde(default)]
    pub minutes: Option<i64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct GoalStats {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Shots {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub on: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Passes {
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub key: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Cards {
    #[serde(default)]
    pub yellow: Option<i64>,
    #[serde(default)]
    pub red: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerStatistics {
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub league: Option<LeagueRef>,
    #[serde(default)]
    pub games: Option<Games>,
    #[serde(default)]
    pub goals: Option<GoalStats>,
    #[serde(default)]
    pub shots: Option<Shots>,
    #[serde(default)]
    pub passes: Option<Passes>,
    #[serde(default)]
    pub cards: Option<Cards>,
}

/// One `response` item of `/api/players` and the leaderboard endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerEntry {
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub statistics: Vec<PlayerStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SquadPlayer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// One `response` item of `/api/players/squads`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Squad {
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub players: Vec<SquadPlayer>,
}

/// One `response` item of `/api/coachs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Coach {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransferTeams {
    #[serde(default, rename = "in")]
    pub incoming: Option<TeamRef>,
    #[serde(default)]
    pub out: Option<TeamRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transfer {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub teams: Option<TransferTeams>,
}

/// One `response` item of `/api/transfers`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransferEntry {
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

/// `/api/players/{kind}` leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaderboard {
    TopScorers,
    TopAssists,
    TopYellowCards,
    TopRedCards,
}

impl Leaderboard {
    pub const ALL: [Leaderboard; 4] = [
        Leaderboard::TopScorers,
        Leaderboard::TopAssists,
        Leaderboard::TopYellowCards,
        Leaderboard::TopRedCards,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Leaderboard::TopScorers => "topscorers",
            Leaderboard::TopAssists => "topassists",
            Leaderboard::TopYellowCards => "topyellowcards",
            Leaderboard::TopRedCards => "topredcards",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Leaderboard::TopScorers => "Top scorers",
            Leaderboard::TopAssists => "Top assists",
            Leaderboard::TopYellowCards => "Most yellow cards",
            Leaderboard::TopRedCards => "Most red cards",
        }
    }
}

/// Query string for the player/coach/transfer proxies. Empty fields are
/// left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

impl PlayerQuery {
    /// Trimmed, non-empty value or `None`.
    pub fn field(value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}
