use crate::api::{JobState, ProcessingMode};
use crate::session::{SelectedVideo, SessionError};

use tracing::{debug, info, warn};

/// Where an upload-and-track attempt currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    AnalysisStarted,
    Polling,
    Done,
    Errored,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Done | SessionStatus::Errored)
    }

    /// Whether the window offers file selection. Picking and dropping are
    /// both closed while a job runs; the controller itself still accepts a
    /// new file and abandons the attempt.
    pub fn accepts_new_file(self) -> bool {
        !self.is_busy()
    }

    /// A network step is in flight.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            SessionStatus::Uploading | SessionStatus::AnalysisStarted | SessionStatus::Polling
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Idle => "Waiting for a video",
            SessionStatus::FileSelected => "Ready to upload",
            SessionStatus::Uploading => "Uploading video",
            SessionStatus::AnalysisStarted => "Starting job",
            SessionStatus::Polling => "Processing",
            SessionStatus::Done => "Analysis complete",
            SessionStatus::Errored => "Failed",
        }
    }
}

/// Progress reported by the background flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Upload accepted; the job is being requested next.
    Uploaded { video_url: Option<String> },
    /// The backend created a job; polling has begun.
    JobStarted { job_id: String },
    /// A poll returned a non-terminal status.
    JobProgress(JobState),
    /// The job finished; `result_url` is already resolved to a full URL.
    Done { result_url: Option<String> },
    Failed(SessionError),
}

/// State of one upload-and-track attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    pub status: SessionStatus,
    pub file: Option<SelectedVideo>,
    pub mode: Option<ProcessingMode>,
    pub job_id: Option<String>,
    /// Location of the uploaded original, as reported by `/upload`.
    pub uploaded_url: Option<String>,
    /// Location of the processed output once the job is done.
    pub result_url: Option<String>,
    /// Last non-terminal status seen while polling.
    pub job_state: Option<JobState>,
    pub error: Option<SessionError>,
}

impl UploadSession {
    /// Take a new file. Rejected files leave the session untouched;
    /// accepted files replace whatever was there before.
    pub fn select(&mut self, video: SelectedVideo) -> Result<(), SessionError> {
        if let Err(e) = video.validate() {
            warn!(file = %video.name, mime = %video.mime, size = video.size, error = %e, "File rejected");
            return Err(e);
        }

        info!(file = %video.name, size = video.size, "File selected");
        *self = UploadSession {
            status: SessionStatus::FileSelected,
            file: Some(video),
            ..UploadSession::default()
        };
        Ok(())
    }

    /// Status line for display. A finished job names the mode it ran.
    pub fn status_label(&self) -> &'static str {
        match (self.status, self.mode) {
            (SessionStatus::Done, Some(ProcessingMode::BallTracking)) => "Ball tracking complete",
            (status, _) => status.label(),
        }
    }

    /// Move to `Uploading` for the given mode. Only valid with a file
    /// selected and nothing in flight.
    pub fn begin(&mut self, mode: ProcessingMode) -> Result<&SelectedVideo, SessionError> {
        if self.status != SessionStatus::FileSelected {
            return Err(SessionError::Validation(
                "Please select a video first.".to_string(),
            ));
        }
        let Some(file) = self.file.as_ref() else {
            return Err(SessionError::Validation(
                "Please select a video first.".to_string(),
            ));
        };

        self.status = SessionStatus::Uploading;
        self.mode = Some(mode);
        self.job_id = None;
        self.result_url = None;
        self.uploaded_url = None;
        self.job_state = None;
        self.error = None;
        Ok(file)
    }

    /// Apply an event from the background flow. Events arriving when no
    /// step is in flight are dropped.
    pub fn apply(&mut self, event: SessionEvent) {
        if !self.status.is_busy() {
            debug!(status = ?self.status, event = ?event, "Ignoring event outside an active attempt");
            return;
        }

        match event {
            SessionEvent::Uploaded { video_url } => {
                self.uploaded_url = video_url;
                self.status = SessionStatus::AnalysisStarted;
            }
            SessionEvent::JobStarted { job_id } => {
                info!(job_id = %job_id, "Polling job");
                self.job_id = Some(job_id);
                self.result_url = None;
                self.status = SessionStatus::Polling;
            }
            SessionEvent::JobProgress(state) => {
                self.job_state = Some(state);
            }
            SessionEvent::Done { result_url } => {
                info!(result_url = ?result_url, "Job done");
                self.result_url = result_url;
                self.job_state = Some(JobState::Done);
                self.status = SessionStatus::Done;
            }
            SessionEvent::Failed(error) => {
                warn!(error = %error, status = ?self.status, "Attempt failed");
                self.error = Some(error);
                self.status = SessionStatus::Errored;
            }
        }
    }

    /// Back to `Idle` with nothing selected.
    pub fn reset(&mut self) {
        *self = UploadSession::default();
    }

    /// Default file name for saving the processed output.
    pub fn download_name(&self) -> String {
        let prefix = self
            .mode
            .unwrap_or(ProcessingMode::Analysis)
            .output_prefix();
        match &self.file {
            Some(file) => format!("{}{}", prefix, file.name),
            None => format!("{}video.mp4", prefix),
        }
    }
}
