mod backend_config;
#[allow(clippy::module_inception)]
mod config;
mod league_config;

pub(crate) use {
    backend_config::BackendConfig, config::Config, league_config::LeagueConfig,
};

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;
pub(crate) const DEFAULT_LEAGUE: &str = "39";
pub(crate) const DEFAULT_SEASON: &str = "2024";
pub(crate) const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Environment variable that overrides `backend.base_url`.
pub(crate) const BACKEND_ENV_VAR: &str = "DEEPVISION_BACKEND";

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub(crate) fn default_league() -> String {
    DEFAULT_LEAGUE.to_string()
}

pub(crate) fn default_season() -> String {
    DEFAULT_SEASON.to_string()
}

pub(crate) fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
