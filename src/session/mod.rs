//! The Upload-and-Track Session: one local video, uploaded to the backend,
//! processed as a job, and polled until the job finishes.

mod backend;
mod controller;
mod error;
mod progress;
mod runner;
mod state;
mod video;

pub use backend::JobBackend;
pub use controller::SessionController;
pub use error::SessionError;
pub use progress::{percent_after, ProgressAnimation};
pub use state::{SessionEvent, SessionStatus, UploadSession};
pub use video::{mime_for_path, SelectedVideo, MAX_UPLOAD_BYTES, POLL_INTERVAL};

#[cfg(test)]
pub(crate) use controller::TaggedEvent;
pub(crate) use runner::drive;
