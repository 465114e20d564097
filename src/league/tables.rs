use crate::api::{Coach, Fixture, Leaderboard, PlayerEntry, Squad, Standing, TransferEntry};

use std::fmt::Display;

use chrono::DateTime;

/// Headers plus rows of display strings, ready for a grid or CSV.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }
}

const DASH: &str = "-";

fn text<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DASH.to_string())
}

/// Integer with thousands separators, or `-` when absent.
pub fn format_number(value: Option<i64>) -> String {
    let Some(value) = value else {
        return DASH.to_string();
    };

    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Goal difference with an explicit sign for zero and positive values.
pub fn goal_difference(value: Option<i64>) -> String {
    match value {
        Some(gd) if gd >= 0 => format!("+{}", gd),
        Some(gd) => gd.to_string(),
        None => DASH.to_string(),
    }
}

fn match_date(raw: Option<&str>) -> (String, String) {
    let Some(raw) = raw else {
        return (DASH.to_string(), DASH.to_string());
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => (
            dt.format("%-d %b %y").to_string(),
            dt.format("%H:%M").to_string(),
        ),
        Err(_) => (raw.to_string(), DASH.to_string()),
    }
}

pub fn fixtures_table(fixtures: &[Fixture]) -> TableData {
    let rows = fixtures
        .iter()
        .map(|fx| {
            let info = fx.info();
            let (date, time) = match_date(info.date.as_deref());
            let score = fx.score();
            vec![
                date,
                time,
                text(fx.league.as_ref().and_then(|l| l.name.as_deref())),
                text(info.status.as_ref().and_then(|s| s.short.as_deref())),
                text(fx.home().and_then(|t| t.name.as_deref())),
                format!("{} : {}", text(score.home), text(score.away)),
                text(fx.away().and_then(|t| t.name.as_deref())),
                text(info.venue.as_ref().and_then(|v| v.name.as_deref())),
                text(fx.round()),
            ]
        })
        .collect();

    TableData::with(
        &[
            "Date", "Time", "League", "Status", "Home", "Score", "Away", "Venue", "Round",
        ],
        rows,
    )
}

pub fn standings_table(standings: &[Standing]) -> TableData {
    let rows = standings
        .iter()
        .map(|row| {
            let all = row.all.clone().unwrap_or_default();
            let goals = all.goals.unwrap_or_default();
            vec![
                text(row.rank),
                text(row.team.as_ref().and_then(|t| t.name.as_deref())),
                text(all.played),
                text(all.win),
                text(all.draw),
                text(all.lose),
                text(goals.scored),
                text(goals.against),
                goal_difference(row.goals_diff),
                text(row.points),
                text(row.form.as_deref()),
                text(row.status.as_deref()),
                text(row.description.as_deref()),
            ]
        })
        .collect();

    TableData::with(
        &[
            "#",
            "Team",
            "P",
            "W",
            "D",
            "L",
            "GF",
            "GA",
            "GD",
            "Pts",
            "Form",
            "Status",
            "Description",
        ],
        rows,
    )
}

pub fn profiles_table(entries: &[PlayerEntry]) -> TableData {
    let rows = entries
        .iter()
        .filter_map(|entry| entry.player.as_ref())
        .map(|p| {
            vec![
                format!(
                    "{} ({})",
                    text(p.name.as_deref()),
                    text(p.nationality.as_deref())
                ),
                text(p.age),
                text(p.height.as_deref()),
                text(p.weight.as_deref()),
            ]
        })
        .collect();

    TableData::with(&["Player", "Age", "Height", "Weight"], rows)
}

/// One row per (player, statistics entry) pair.
pub fn player_stats_table(entries: &[PlayerEntry]) -> TableData {
    let rows = entries
        .iter()
        .flat_map(|entry| {
            let name = text(entry.player.as_ref().and_then(|p| p.name.as_deref()));
            entry.statistics.iter().map(move |s| {
                let games = s.games.clone().unwrap_or_default();
                let goals = s.goals.unwrap_or_default();
                let shots = s.shots.unwrap_or_default();
                let passes = s.passes.unwrap_or_default();
                let cards = s.cards.unwrap_or_default();
                vec![
                    name.clone(),
                    text(s.team.as_ref().and_then(|t| t.name.as_deref())),
                    text(s.league.as_ref().and_then(|l| l.name.as_deref())),
                    text(s.league.as_ref().and_then(|l| l.season)),
                    format_number(games.appearences),
                    format_number(games.minutes),
                    format_number(goals.total),
                    format_number(goals.assists),
                    format_number(shots.total),
                    format_number(passes.total),
                    format_number(passes.key),
                    format_number(cards.yellow),
                    format_number(cards.red),
                    text(games.rating.as_deref()),
                ]
            })
        })
        .collect();

    TableData::with(
        &[
            "Player", "Team", "League", "Season", "Apps", "Min", "G", "A", "Sh", "Pass", "KeyP",
            "YC", "RC", "Rating",
        ],
        rows,
    )
}

/// Players of the first squad in the response.
pub fn squad_table(squads: &[Squad]) -> TableData {
    let rows = squads
        .first()
        .map(|squad| {
            squad
                .players
                .iter()
                .map(|p| {
                    vec![
                        text(p.name.as_deref()),
                        format_number(p.number),
                        text(p.position.as_deref()),
                        format_number(p.age),
                        text(p.nationality.as_deref()),
                    ]
                })
                .collect()
        })
        .unwrap_or_default();

    TableData::with(&["Name", "No", "Pos", "Age", "Nation"], rows)
}

pub fn coaches_table(coaches: &[Coach]) -> TableData {
    let rows = coaches
        .iter()
        .map(|c| {
            vec![
                text(c.name.as_deref()),
                format_number(c.age),
                text(c.nationality.as_deref()),
                text(c.team.as_ref().and_then(|t| t.name.as_deref())),
            ]
        })
        .collect();

    TableData::with(&["Coach", "Age", "Nation", "Team"], rows)
}

/// Leaderboard rows use the first statistics entry of each player; the
/// third column depends on the board.
pub fn leaderboard_table(kind: Leaderboard, entries: &[PlayerEntry]) -> TableData {
    let metric = match kind {
        Leaderboard::TopScorers => "Goals",
        Leaderboard::TopAssists => "Assists",
        Leaderboard::TopYellowCards => "Yellow",
        Leaderboard::TopRedCards => "Red",
    };

    let rows = entries
        .iter()
        .map(|entry| {
            let stats = entry.statistics.first().cloned().unwrap_or_default();
            let goals = stats.goals.unwrap_or_default();
            let cards = stats.cards.unwrap_or_default();
            let value = match kind {
                Leaderboard::TopScorers => goals.total,
                Leaderboard::TopAssists => goals.assists,
                Leaderboard::TopYellowCards => cards.yellow,
                Leaderboard::TopRedCards => cards.red,
            };
            vec![
                text(entry.player.as_ref().and_then(|p| p.name.as_deref())),
                text(stats.team.as_ref().and_then(|t| t.name.as_deref())),
                format_number(value),
                text(stats.games.as_ref().and_then(|g| g.rating.as_deref())),
            ]
        })
        .collect();

    TableData::with(&["Player", "Team", metric, "Rating"], rows)
}

/// One row per transfer.
pub fn transfers_table(entries: &[TransferEntry]) -> TableData {
    let rows = entries
        .iter()
        .flat_map(|entry| {
            let name = text(entry.player.as_ref().and_then(|p| p.name.as_deref()));
            entry.transfers.iter().map(move |tr| {
                let teams = tr.teams.clone().unwrap_or_default();
                vec![
                    name.clone(),
                    text(tr.date.as_deref()),
                    text(tr.kind.as_deref()),
                    text(teams.out.as_ref().and_then(|t| t.name.as_deref())),
                    text(teams.incoming.as_ref().and_then(|t| t.name.as_deref())),
                ]
            })
        })
        .collect();

    TableData::with(&["Player", "Date", "Type", "From", "To"], rows)
}
