use crate::utils::mp4::{parse_duration, read_duration};

use std::io::{Cursor, Write};
use std::time::Duration;

use tempfile::NamedTempFile;

fn boxed(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out
}

fn mvhd_v0(timescale: u32, duration: u32) -> Vec<u8> {
    let mut payload = vec![0u8; 4 + 8];
    payload.extend_from_slice(&timescale.to_be_bytes());
    payload.extend_from_slice(&duration.to_be_bytes());
    payload.extend_from_slice(&[0u8; 80]);
    boxed(b"mvhd", &payload)
}

fn mvhd_v1(timescale: u32, duration: u64) -> Vec<u8> {
    let mut payload = vec![1u8, 0, 0, 0];
    payload.extend_from_slice(&[0u8; 16]);
    payload.extend_from_slice(&timescale.to_be_bytes());
    payload.extend_from_slice(&duration.to_be_bytes());
    payload.extend_from_slice(&[0u8; 80]);
    boxed(b"mvhd", &payload)
}

fn movie(mvhd: Vec<u8>) -> Vec<u8> {
    let mut file = boxed(b"ftyp", b"isom\0\0\x02\0");
    file.extend(boxed(b"free", &[0u8; 16]));
    file.extend(boxed(b"moov", &mvhd));
    file
}

/// WHAT: Version 0 headers give duration / timescale
/// WHY: Most cameras write 32-bit headers
#[test]
fn given_v0_header_when_parsed_then_duration() {
    let bytes = movie(mvhd_v0(1000, 90_500));

    let duration = parse_duration(Cursor::new(bytes)).unwrap();

    assert_eq!(duration, Some(Duration::from_millis(90_500)));
}

/// WHAT: Version 1 headers use the 64-bit duration field
/// WHY: Long recordings overflow 32 bits at high timescales
#[test]
fn given_v1_header_when_parsed_then_duration() {
    let bytes = movie(mvhd_v1(90_000, 90_000 * 5400));

    let duration = parse_duration(Cursor::new(bytes)).unwrap();

    assert_eq!(duration, Some(Duration::from_secs(5400)));
}

/// WHAT: Files without moov, or with broken box sizes, have no duration
/// WHY: Duration is optional and must never fail file selection
#[test]
fn given_missing_or_broken_header_when_parsed_then_none() {
    let no_moov = boxed(b"ftyp", b"isom");
    assert_eq!(parse_duration(Cursor::new(no_moov)).unwrap(), None);

    let broken = vec![0, 0, 0, 4, b'f', b'r', b'e', b'e', 1, 2, 3];
    assert_eq!(parse_duration(Cursor::new(broken)).unwrap(), None);

    let zero_timescale = movie(mvhd_v0(0, 1000));
    assert_eq!(parse_duration(Cursor::new(zero_timescale)).unwrap(), None);
}

/// WHAT: Reading from disk goes through the same parser
/// WHY: Selected files are inspected in place
#[test]
fn given_file_on_disk_when_read_then_duration() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&movie(mvhd_v0(600, 600 * 42))).unwrap();

    let duration = read_duration(file.path()).unwrap();

    assert_eq!(duration, Some(Duration::from_secs(42)));
}

/// WHAT: A duration too large for `Duration` yields no duration
/// WHY: Corrupt headers must not bring down file selection
#[test]
fn given_overflowing_v1_duration_when_parsed_then_none() {
    let bytes = movie(mvhd_v1(1, u64::MAX - 1));

    let duration = parse_duration(Cursor::new(bytes)).unwrap();

    assert_eq!(duration, None);
}

/// WHAT: A 64-bit box size that overflows the file offset stops the walk
/// WHY: Box sizes come straight from the file and cannot be trusted
#[test]
fn given_huge_largesize_box_when_parsed_then_none() {
    let mut bytes = boxed(b"ftyp", b"isom\0\0\x02\0");
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(b"free");
    bytes.extend_from_slice(&u64::MAX.to_be_bytes());
    bytes.extend(boxed(b"moov", &mvhd_v0(1000, 5000)));

    let duration = parse_duration(Cursor::new(bytes)).unwrap();

    assert_eq!(duration, None);
}
