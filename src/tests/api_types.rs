use crate::api::{
    ApiError, Fixture, FixturesEnvelope, JobState, JobStatusResponse, PlayerEntry,
    ResponseEnvelope, StandingsEnvelope, StartJobResponse, UploadResponse, VideoList,
};
use crate::session::SessionError;

/// WHAT: Unknown job status strings decode as a non-terminal state
/// WHY: A new backend status must not end the poll loop or fail decoding
#[test]
fn given_unknown_status_string_when_decoded_then_non_terminal() {
    // Given: A status body with an unfamiliar status
    let body = r#"{"job_id":"abc","status":"paused","input":"match.mp4"}"#;

    // When: Decoding
    let report: JobStatusResponse = serde_json::from_str(body).unwrap();

    // Then: Unknown and not terminal
    assert_eq!(report.status, JobState::Unknown);
    assert!(!report.status.is_terminal());
    assert_eq!(report.job_id.as_deref(), Some("abc"));
}

/// WHAT: The four known statuses decode and only done/error are terminal
/// WHY: The poll loop keys off these values
#[test]
fn given_known_statuses_when_decoded_then_terminal_only_for_done_and_error() {
    let decode = |s: &str| -> JobState {
        serde_json::from_str::<JobStatusResponse>(&format!(r#"{{"status":"{}"}}"#, s))
            .unwrap()
            .status
    };

    assert_eq!(decode("queued"), JobState::Queued);
    assert_eq!(decode("running"), JobState::Running);
    assert_eq!(decode("done"), JobState::Done);
    assert_eq!(decode("error"), JobState::Error);
    assert!(!JobState::Queued.is_terminal());
    assert!(!JobState::Running.is_terminal());
    assert!(JobState::Done.is_terminal());
    assert!(JobState::Error.is_terminal());
}

/// WHAT: A done status carries the output location fields
/// WHY: The result URL is built from output_url
#[test]
fn given_done_body_when_decoded_then_output_fields_present() {
    // Given: A finished job as the backend reports it
    let body = r#"{
        "job_id": "4f0c",
        "status": "done",
        "input": "match.mp4",
        "output_filename": "analyzed_match.mp4",
        "output_url": "/output_videos/analyzed_match.mp4"
    }"#;

    // When: Decoding
    let report: JobStatusResponse = serde_json::from_str(body).unwrap();

    // Then: Every field is kept
    assert_eq!(report.status, JobState::Done);
    assert_eq!(report.output_filename.as_deref(), Some("analyzed_match.mp4"));
    assert_eq!(
        report.output_url.as_deref(),
        Some("/output_videos/analyzed_match.mp4")
    );
    assert!(report.error.is_none());
}

/// WHAT: Upload and start responses tolerate missing fields
/// WHY: Missing job_id is a session decision, not a decode failure
#[test]
fn given_sparse_bodies_when_decoded_then_fields_are_none() {
    let upload: UploadResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert!(upload.video_url.is_none());
    assert!(upload.error.is_none());

    let started: StartJobResponse = serde_json::from_str(r#"{"status_url":"/status/x"}"#).unwrap();
    assert!(started.job_id.is_none());
}

/// WHAT: Video lists decode with or without the videos key
/// WHY: An empty library must not be an error
#[test]
fn given_video_list_bodies_when_decoded_then_missing_list_is_none() {
    let full: VideoList = serde_json::from_str(r#"{"videos":["a.mp4","b.mp4"]}"#).unwrap();
    assert_eq!(full.videos.unwrap_or_default().len(), 2);

    let empty: VideoList = serde_json::from_str("{}").unwrap();
    assert!(empty.videos.is_none());
}

/// WHAT: Nested fixtures read their metadata from the fixture object
/// WHY: API-Football nests match data under "fixture"
#[test]
fn given_nested_fixture_when_decoded_then_info_from_fixture_object() {
    // Given: A nested fixture
    let body = r#"{
        "fixture": {"id": 1035037, "date": "2024-08-16T19:00:00+00:00",
                    "status": {"long": "Match Finished", "short": "FT", "elapsed": 90},
                    "venue": {"name": "Old Trafford", "city": "Manchester"}},
        "league": {"id": 39, "name": "Premier League", "season": 2024, "round": "Regular Season - 1"},
        "teams": {"home": {"id": 33, "name": "Manchester United"},
                  "away": {"id": 36, "name": "Fulham"}},
        "goals": {"home": 1, "away": 0}
    }"#;

    // When: Decoding
    let fixture: Fixture = serde_json::from_str(body).unwrap();

    // Then: Accessors see the nested values
    assert_eq!(fixture.info().id, Some(1035037));
    assert_eq!(
        fixture.info().venue.as_ref().and_then(|v| v.name.as_deref()),
        Some("Old Trafford")
    );
    assert_eq!(fixture.score().home, Some(1));
    assert_eq!(fixture.round(), Some("Regular Season - 1"));
    assert_eq!(
        fixture.home().and_then(|t| t.name.as_deref()),
        Some("Manchester United")
    );
}

/// WHAT: Flat fixtures read their metadata from the entry itself
/// WHY: Some backends flatten the fixture object
#[test]
fn given_flat_fixture_when_decoded_then_info_from_top_level() {
    // Given: A flattened fixture
    let body = r#"{
        "id": 7, "date": "2024-08-17T14:00:00+00:00",
        "status": {"short": "NS"},
        "teams": {"home": {"name": "Arsenal"}, "away": {"name": "Wolves"}},
        "goals": {"home": null, "away": null},
        "round": "Regular Season - 1"
    }"#;

    // When: Decoding
    let fixture: Fixture = serde_json::from_str(body).unwrap();

    // Then: Flat values are used
    assert!(fixture.fixture.is_none());
    assert_eq!(fixture.info().id, Some(7));
    assert_eq!(
        fixture.info().status.as_ref().and_then(|s| s.short.as_deref()),
        Some("NS")
    );
    assert_eq!(fixture.score().home, None);
    assert_eq!(fixture.round(), Some("Regular Season - 1"));
}

/// WHAT: Envelopes default missing lists and keep backend errors
/// WHY: Missing list means empty; an error string must reach the user
#[test]
fn given_envelopes_when_decoded_then_lists_default_and_errors_kept() {
    let fixtures: FixturesEnvelope = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
    assert!(fixtures.fixtures.is_empty());
    assert_eq!(fixtures.error.as_deref(), Some("quota"));

    let standings: StandingsEnvelope = serde_json::from_str("{}").unwrap();
    assert!(standings.standings.is_empty());
}

/// WHAT: Upstream "errors" objects and arrays become a failure message
/// WHY: API-Football reports problems with a 200 status
#[test]
fn given_upstream_errors_when_checked_then_failure_message() {
    let object: ResponseEnvelope<PlayerEntry> =
        serde_json::from_str(r#"{"response":[],"errors":{"token":"Missing API key"}}"#).unwrap();
    assert_eq!(object.failure().as_deref(), Some("token: Missing API key"));

    let array: ResponseEnvelope<PlayerEntry> =
        serde_json::from_str(r#"{"errors":["rate limit","bad season"]}"#).unwrap();
    assert_eq!(array.failure().as_deref(), Some("rate limit; bad season"));

    let clean: ResponseEnvelope<PlayerEntry> =
        serde_json::from_str(r#"{"response":[{"player":{"name":"Salah"}}],"errors":[]}"#)
            .unwrap();
    assert!(clean.failure().is_none());
    assert_eq!(clean.response.len(), 1);
}

/// WHAT: Client errors map onto the session error taxonomy
/// WHY: Status codes and transport failures are both transport errors
#[test]
fn given_api_errors_when_converted_then_session_categories() {
    assert_eq!(
        SessionError::from(ApiError::Status {
            code: 500,
            message: "Internal Server Error".to_string()
        }),
        SessionError::Transport("HTTP 500: Internal Server Error".to_string())
    );
    assert_eq!(
        SessionError::from(ApiError::Decode("expected value".to_string())),
        SessionError::MalformedResponse("expected value".to_string())
    );
    assert_eq!(
        SessionError::from(ApiError::Backend("No file".to_string())),
        SessionError::Backend("No file".to_string())
    );
}
