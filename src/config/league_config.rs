use crate::config::{default_league, default_season, default_timezone};

use serde::{Deserialize, Serialize};

/// Initial selections for the league data tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// League id or code (`39`, `EPL`, ...).
    #[serde(default = "default_league")]
    pub league: String,
    #[serde(default = "default_season")]
    pub season: String,
    /// Timezone passed through to the fixtures endpoint.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            league: default_league(),
            season: default_season(),
            timezone: default_timezone(),
        }
    }
}
