use crate::session::{mime_for_path, SelectedVideo, SessionError};

use std::io::Write;
use std::path::Path;

use tempfile::Builder;

/// WHAT: Video extensions map to video/* types regardless of case
/// WHY: The type check is the first upload guard
#[test]
fn given_extensions_when_mapped_then_mime_types() {
    assert_eq!(mime_for_path(Path::new("match.mp4")), "video/mp4");
    assert_eq!(mime_for_path(Path::new("MATCH.MOV")), "video/quicktime");
    assert_eq!(mime_for_path(Path::new("clip.mkv")), "video/x-matroska");
    assert_eq!(mime_for_path(Path::new("clip.webm")), "video/webm");
    assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
    assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
}

/// WHAT: A file on disk is inspected for name, size and type
/// WHY: The upload tab shows these details before uploading
#[test]
fn given_video_on_disk_when_inspected_then_details_filled() {
    // Given: A small .mp4 file without a movie header
    let mut file = Builder::new().suffix(".mp4").tempfile().unwrap();
    file.write_all(&[0u8; 2048]).unwrap();

    // When: Inspecting it
    let video = SelectedVideo::from_path(file.path()).unwrap();

    // Then: Size and type come from the file, duration is unknown
    assert_eq!(video.size, 2048);
    assert_eq!(video.mime, "video/mp4");
    assert!(video.name.ends_with(".mp4"));
    assert_eq!(video.duration, None);
    assert_eq!(video.validate(), Ok(()));
}

/// WHAT: A text file is inspected but fails validation
/// WHY: Reading and validating are separate steps
#[test]
fn given_text_file_when_validated_then_rejected() {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"not a video").unwrap();

    let video = SelectedVideo::from_path(file.path()).unwrap();

    assert_eq!(
        video.validate(),
        Err(SessionError::Validation(
            "Please select a valid video file!".to_string()
        ))
    );
}

/// WHAT: Missing paths cannot be selected
/// WHY: A stale drop or dialog result must not crash the app
#[test]
fn given_missing_path_when_inspected_then_validation_error() {
    let result = SelectedVideo::from_path(Path::new("/definitely/not/here.mp4"));

    assert!(matches!(result, Err(SessionError::Validation(_))));
}
