use crate::api::football::{
    Coach, Fixture, FixturesEnvelope, Leaderboard, PlayerEntry, PlayerQuery, ResponseEnvelope,
    Squad, Standing, StandingsEnvelope, TransferEntry,
};
use crate::api::types::{
    ErrorBody, JobStatusResponse, ProcessingMode, StartJobRequest, StartJobResponse,
    UploadResponse, VideoList,
};
use crate::api::ApiError;
use crate::config::BackendConfig;
use crate::session::{JobBackend, SelectedVideo, SessionError};

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, info, instrument, warn};

/// Resolve a backend-supplied location against the base URL. Paths that
/// start with `/` are joined onto the base; anything else is returned as-is.
pub fn resolve_location(base: &Url, location: &str) -> String {
    if location.starts_with('/') {
        match base.join(location) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(location, error = %e, "Could not resolve location against backend URL");
                location.to_string()
            }
        }
    } else {
        location.to_string()
    }
}

/// HTTP client for every endpoint of the analysis backend.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let base = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        info!(base_url = %base, "Backend client ready");

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with the given path segments appended; each segment is
    /// percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ------------------------------------------------------------ job flow

    #[instrument(skip(self, video), fields(file = %video.name, size = video.size))]
    pub async fn upload_video(&self, video: &SelectedVideo) -> Result<UploadResponse, ApiError> {
        let file = tokio::fs::File::open(&video.path).await?;
        let body = Body::wrap_stream(ReaderStream::new(file));
        let part = Part::stream_with_length(body, video.size)
            .file_name(video.name.clone())
            .mime_str(&video.mime)?;
        let form = Form::new().part("video", part);

        let url = self.endpoint(&["upload"])?;
        let response = self.http.post(url).multipart(form).send().await?;
        let upload: UploadResponse = read_json(response).await?;

        info!(video_url = ?upload.video_url, "Video uploaded");
        Ok(upload)
    }

    #[instrument(skip(self))]
    pub async fn start_job(
        &self,
        mode: ProcessingMode,
        filename: &str,
    ) -> Result<StartJobResponse, ApiError> {
        let url = self.endpoint(&[mode.endpoint()])?;
        let response = self
            .http
            .post(url)
            .json(&StartJobRequest { filename })
            .send()
            .await?;
        let started: StartJobResponse = read_json(response).await?;

        info!(job_id = ?started.job_id, "Job requested");
        Ok(started)
    }

    pub async fn job_status(&self, job_id: &str) -> Result<JobStatusResponse, ApiError> {
        let url = self.endpoint(&["status", job_id])?;
        let response = self.http.get(url).send().await?;
        let status: JobStatusResponse = read_json(response).await?;

        debug!(job_id, status = ?status.status, "Job status");
        Ok(status)
    }

    // ------------------------------------------------------------- library

    pub async fn list_videos(&self) -> Result<Vec<String>, ApiError> {
        self.video_list("videos").await
    }

    pub async fn list_output_videos(&self) -> Result<Vec<String>, ApiError> {
        self.video_list("output_videos").await
    }

    async fn video_list(&self, path: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&[path])?;
        let response = self.http.get(url).send().await?;
        let list: VideoList = read_json(response).await?;
        if let Some(error) = list.error {
            return Err(ApiError::Backend(error));
        }
        Ok(list.videos.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn delete_video(&self, name: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["videos", name])?;
        let response = self.http.delete(url).send().await?;
        let _: ErrorBody = read_json(response).await?;
        info!(name, "Video deleted");
        Ok(())
    }

    /// Streamable URL of an uploaded video.
    pub fn video_url(&self, name: &str) -> Result<Url, ApiError> {
        self.endpoint(&["videos", name])
    }

    /// Download URL of a processed output.
    pub fn output_download_url(&self, name: &str) -> Result<Url, ApiError> {
        self.endpoint(&["output_videos_download", name])
    }

    /// Stream `url` into a new file at `dest`. Returns the bytes written.
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64, ApiError> {
        let mut response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(failure_from(status, &response.text().await.unwrap_or_default()));
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        info!(bytes = written, dest = ?dest, "Download complete");
        Ok(written)
    }

    // ---------------------------------------------------------- league data

    pub async fn fixtures(
        &self,
        league: &str,
        season: &str,
        timezone: &str,
    ) -> Result<Vec<Fixture>, ApiError> {
        let url = self.endpoint(&["api", "get_fixtures"])?;
        let query = [("league", league), ("season", season), ("timezone", timezone)];
        let envelope: FixturesEnvelope = self.get_json(url, &query).await?;
        if let Some(error) = envelope.error {
            return Err(ApiError::Backend(error));
        }
        Ok(envelope.fixtures)
    }

    pub async fn standings(&self, league: &str, season: &str) -> Result<Vec<Standing>, ApiError> {
        let url = self.endpoint(&["api", "get_standings"])?;
        let query = [("league", league), ("season", season)];
        let envelope: StandingsEnvelope = self.get_json(url, &query).await?;
        if let Some(error) = envelope.error {
            return Err(ApiError::Backend(error));
        }
        Ok(envelope.standings)
    }

    pub async fn players(&self, query: &PlayerQuery) -> Result<Vec<PlayerEntry>, ApiError> {
        self.response_list(&["api", "players"], query).await
    }

    pub async fn squads(&self, query: &PlayerQuery) -> Result<Vec<Squad>, ApiError> {
        self.response_list(&["api", "players", "squads"], query).await
    }

    pub async fn leaderboard(
        &self,
        kind: Leaderboard,
        query: &PlayerQuery,
    ) -> Result<Vec<PlayerEntry>, ApiError> {
        self.response_list(&["api", "players", kind.path()], query)
            .await
    }

    pub async fn coaches(&self, query: &PlayerQuery) -> Result<Vec<Coach>, ApiError> {
        self.response_list(&["api", "coachs"], query).await
    }

    pub async fn transfers(&self, query: &PlayerQuery) -> Result<Vec<TransferEntry>, ApiError> {
        self.response_list(&["api", "transfers"], query).await
    }

    async fn response_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &PlayerQuery,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(segments)?;
        let envelope: ResponseEnvelope<T> = self.get_json(url, query).await?;
        if let Some(failure) = envelope.failure() {
            return Err(ApiError::Backend(failure));
        }
        Ok(envelope.response)
    }

    async fn get_json<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        url: Url,
        query: &Q,
    ) -> Result<T, ApiError> {
        debug!(url = %url, "GET");
        let response = self.http.get(url).query(query).send().await?;
        read_json(response).await
    }
}

/// Decode a JSON body, turning non-2xx statuses into `ApiError::Status`
/// carrying the backend's `error` field when it sent one.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(failure_from(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn failure_from(status: reqwest::StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    warn!(status = status.as_u16(), %message, "Backend returned an error status");
    ApiError::Status {
        code: status.as_u16(),
        message,
    }
}

impl JobBackend for BackendClient {
    async fn upload(&self, video: &SelectedVideo) -> Result<UploadResponse, SessionError> {
        Ok(self.upload_video(video).await?)
    }

    async fn request_job(
        &self,
        mode: ProcessingMode,
        filename: &str,
    ) -> Result<StartJobResponse, SessionError> {
        Ok(self.start_job(mode, filename).await?)
    }

    async fn fetch_status(&self, job_id: &str) -> Result<JobStatusResponse, SessionError> {
        Ok(self.job_status(job_id).await?)
    }

    fn resolve_url(&self, location: &str) -> String {
        resolve_location(&self.base, location)
    }
}
