use serde::{Deserialize, Serialize};

/// Which backend pipeline a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    /// Full player/field analysis (`/start_analysis`).
    Analysis,
    /// Ball tracking only (`/start_ball_tracking`).
    BallTracking,
}

impl ProcessingMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            ProcessingMode::Analysis => "start_analysis",
            ProcessingMode::BallTracking => "start_ball_tracking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProcessingMode::Analysis => "Full analysis",
            ProcessingMode::BallTracking => "Ball tracking",
        }
    }

    /// Prefix the backend puts on the output file name.
    pub fn output_prefix(self) -> &'static str {
        match self {
            ProcessingMode::Analysis => "analyzed_",
            ProcessingMode::BallTracking => "tracked_",
        }
    }
}

/// Body shape shared by every failing backend response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /start_analysis` and `POST /start_ball_tracking`.
#[derive(Debug, Clone, Serialize)]
pub struct StartJobRequest<'a> {
    pub filename: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartJobResponse {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend job status string. Anything unrecognised is non-terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Queued,
    Processing,
    Running,
    Done,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Done | JobState::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            JobState::Queued => "Queued",
            JobState::Processing => "Processing",
            JobState::Running => "Running",
            JobState::Done => "Done",
            JobState::Error => "Error",
            JobState::Unknown => "Waiting",
        }
    }
}

/// `GET /status/{job_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobStatusResponse {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: JobState,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub output_filename: Option<String>,
    #[serde(default)]
    pub output_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /videos` and `GET /output_videos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub videos: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}
