//! Reshapes league-data responses into display tables and CSV.

pub mod csv;
mod leagues;
mod tables;

pub use leagues::{league_label, league_param, status_long, LEAGUES};
pub use tables::{
    coaches_table, fixtures_table, format_number, goal_difference, leaderboard_table,
    player_stats_table, profiles_table, squad_table, standings_table, transfers_table,
    TableData,
};
