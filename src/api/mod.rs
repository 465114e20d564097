//! Typed HTTP client for the analysis backend.

mod client;
mod error;
mod football;
mod types;

pub use client::{resolve_location, BackendClient};
pub use error::ApiError;
pub use football::{
    Coach, Fixture, FixturesEnvelope, Leaderboard, PlayerEntry, PlayerQuery, ResponseEnvelope,
    Squad, Standing, StandingsEnvelope, TransferEntry,
};
pub use types::{
    JobState, JobStatusResponse, ProcessingMode, StartJobResponse, UploadResponse, VideoList,
};
