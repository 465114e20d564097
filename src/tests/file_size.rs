use crate::utils::file_size::FileSizeUtils;

use std::time::Duration;

/// WHAT: Sizes scale through Bytes, KB, MB and GB with two decimals
/// WHY: File details show a readable size
#[test]
fn given_sizes_when_formatted_then_human_readable() {
    assert_eq!(FileSizeUtils::format_size(0), "0 Bytes");
    assert_eq!(FileSizeUtils::format_size(512), "512 Bytes");
    assert_eq!(FileSizeUtils::format_size(1536), "1.5 KB");
    assert_eq!(FileSizeUtils::format_size(500 * 1024 * 1024), "500 MB");
    assert_eq!(FileSizeUtils::format_size(1_288_490_189), "1.2 GB");
}

/// WHAT: Durations render as minutes and zero-padded seconds
/// WHY: Match videos run past an hour
#[test]
fn given_durations_when_formatted_then_minutes_seconds() {
    assert_eq!(FileSizeUtils::format_duration(Duration::from_secs(5)), "0:05");
    assert_eq!(FileSizeUtils::format_duration(Duration::from_secs(90)), "1:30");
    assert_eq!(FileSizeUtils::format_duration(Duration::from_secs(5400)), "90:00");
}
