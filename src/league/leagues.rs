/// Leagues offered in the pickers: (API-Football id, short code, label).
pub const LEAGUES: [(u32, &str, &str); 10] = [
    (39, "EPL", "Premier League"),
    (140, "LL", "La Liga"),
    (78, "BL", "Bundesliga"),
    (135, "SA", "Serie A"),
    (61, "L1", "Ligue 1"),
    (94, "PORTUGAL", "Liga Portugal"),
    (325, "ILEAGUE", "I-League"),
    (307, "SPL", "Saudi Pro League"),
    (3, "UEL", "Europa League"),
    (2, "UCL", "Champions League"),
];

/// Numeric league id for a code such as `EPL`; numeric input and unknown
/// codes pass through unchanged.
pub fn league_param(code: &str) -> String {
    let code = code.trim();
    if code.parse::<u32>().is_ok() {
        return code.to_string();
    }
    let upper = code.to_ascii_uppercase();
    if upper == "CL" {
        return "2".to_string();
    }
    LEAGUES
        .iter()
        .find(|(_, short, _)| *short == upper)
        .map(|(id, _, _)| id.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Display name for a league id or code.
pub fn league_label(code: &str) -> String {
    let id = league_param(code);
    LEAGUES
        .iter()
        .find(|(league_id, _, _)| league_id.to_string() == id)
        .map(|(_, _, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Long description of a fixture status short code.
pub fn status_long(short: &str) -> &str {
    match short {
        "TBD" => "Time To Be Defined",
        "NS" => "Not Started",
        "1H" => "First Half",
        "HT" => "Halftime",
        "2H" => "Second Half",
        "ET" => "Extra Time",
        "BT" => "Break Time",
        "P" => "Penalty",
        "SUSP" => "Suspended",
        "INT" => "Interrupted",
        "FT" => "Finished",
        "AET" => "After Extra Time",
        "PEN" => "Pen/Finished",
        "PST" => "Postponed",
        "CANC" => "Cancelled",
        "ABD" => "Abandoned",
        "AWD" => "Awarded",
        "WO" => "WalkOver",
        "LIVE" => "Live",
        other => other,
    }
}
