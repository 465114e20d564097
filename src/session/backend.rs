use crate::api::{JobStatusResponse, ProcessingMode, StartJobResponse, UploadResponse};
use crate::session::{SelectedVideo, SessionError};

use std::future::Future;

/// The slice of the backend the session needs.
///
/// Implementations only deal with transport: a decoded body is returned as
/// is, and the session decides what a missing `job_id` or an `error` field
/// means.
pub trait JobBackend: Send + Sync + 'static {
    /// `POST /upload` with the file as multipart field `video`.
    fn upload(
        &self,
        video: &SelectedVideo,
    ) -> impl Future<Output = Result<UploadResponse, SessionError>> + Send;

    /// `POST /start_analysis` or `POST /start_ball_tracking`.
    fn request_job(
        &self,
        mode: ProcessingMode,
        filename: &str,
    ) -> impl Future<Output = Result<StartJobResponse, SessionError>> + Send;

    /// `GET /status/{job_id}`
    fn fetch_status(
        &self,
        job_id: &str,
    ) -> impl Future<Output = Result<JobStatusResponse, SessionError>> + Send;

    /// Turn a backend location such as `/videos/x.mp4` into a full URL.
    fn resolve_url(&self, location: &str) -> String;
}
