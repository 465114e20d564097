use std::time::Duration;

pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human-readable size with up to two decimals: `0 Bytes`, `512 Bytes`,
    /// `1.5 KB`, `500 MB`.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
        if size == 0 {
            return "0 Bytes".to_string();
        }

        let mut value = size as f64;
        let mut unit_index = 0;
        while value >= 1024.0 && unit_index < UNITS.len() - 1 {
            value /= 1024.0;
            unit_index += 1;
        }

        let rounded = (value * 100.0).round() / 100.0;
        let text = format!("{:.2}", rounded);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", text, UNITS[unit_index])
    }

    /// `m:ss`, minutes unbounded.
    pub fn format_duration(duration: Duration) -> String {
        let total = duration.as_secs();
        format!("{}:{:02}", total / 60, total % 60)
    }
}
