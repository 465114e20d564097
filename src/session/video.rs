use crate::session::SessionError;
use crate::utils::mp4;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

/// Largest file the client will upload (500 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Delay between job status queries.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// A local video picked or dropped by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedVideo {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: String,
    /// Read from the container header when possible.
    pub duration: Option<Duration>,
}

impl SelectedVideo {
    /// Inspect a file on disk. Fails only when the file cannot be read;
    /// type and size are checked by [`SelectedVideo::validate`].
    pub fn from_path(path: &Path) -> Result<Self, SessionError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            SessionError::Validation(format!("Could not read {}: {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(SessionError::Validation(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| SessionError::Validation("Invalid file name".to_string()))?;
        let mime = mime_for_path(path).to_string();

        let duration = if mime.starts_with("video/") {
            match mp4::read_duration(path) {
                Ok(duration) => duration,
                Err(e) => {
                    debug!(error = %e, file = %name, "No duration in container header");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime,
            duration,
        })
    }

    /// Accept only `video/*` files no larger than [`MAX_UPLOAD_BYTES`].
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.mime.starts_with("video/") {
            return Err(SessionError::Validation(
                "Please select a valid video file!".to_string(),
            ));
        }
        if self.size > MAX_UPLOAD_BYTES {
            return Err(SessionError::Validation(format!(
                "File size exceeds {}MB limit!",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }
        Ok(())
    }
}

/// MIME type guessed from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mpeg" | "mpg" => "video/mpeg",
        "wmv" => "video/x-ms-wmv",
        "ogv" => "video/ogg",
        "3gp" => "video/3gpp",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "json" => "application/json",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
