use crate::api::{JobState, ProcessingMode};
use crate::session::controller::EventSink;
use crate::session::{JobBackend, SelectedVideo, SessionError, SessionEvent};

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Run one attempt: upload, request the job, poll until it finishes.
///
/// Every outcome is reported through `sink`; nothing is retried. Cancelling
/// `cancel` stops the attempt at whatever await point it is parked on, so
/// no poll outlives a reset.
pub(crate) async fn drive<B: JobBackend>(
    backend: Arc<B>,
    video: SelectedVideo,
    mode: ProcessingMode,
    poll_interval: Duration,
    cancel: CancellationToken,
    sink: EventSink,
) {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(generation = sink.generation(), "Attempt cancelled");
        }
        outcome = attempt(backend.as_ref(), &video, mode, poll_interval, &sink) => {
            match outcome {
                Ok(result_url) => sink.emit(SessionEvent::Done { result_url }),
                Err(error) => sink.emit(SessionEvent::Failed(error)),
            }
        }
    }
}

async fn attempt<B: JobBackend>(
    backend: &B,
    video: &SelectedVideo,
    mode: ProcessingMode,
    poll_interval: Duration,
    sink: &EventSink,
) -> Result<Option<String>, SessionError> {
    let upload = backend.upload(video).await?;
    if let Some(error) = upload.error {
        return Err(SessionError::Backend(error));
    }
    debug!(
        stored_as = upload.filename.as_deref().unwrap_or(video.name.as_str()),
        message = upload.message.as_deref().unwrap_or(""),
        "Upload accepted"
    );
    sink.emit(SessionEvent::Uploaded {
        video_url: upload.video_url.map(|u| backend.resolve_url(&u)),
    });

    let started = backend.request_job(mode, &video.name).await?;
    if let Some(error) = started.error {
        return Err(SessionError::Backend(error));
    }
    let job_id = started
        .job_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SessionError::MalformedResponse("job_id missing".to_string()))?;

    info!(
        job_id = %job_id,
        mode = mode.label(),
        status_url = started.status_url.as_deref().unwrap_or(""),
        "Job started"
    );
    sink.emit(SessionEvent::JobStarted {
        job_id: job_id.clone(),
    });

    poll_until_finished(backend, &job_id, poll_interval, sink).await
}

/// Query the job status once per `interval` until it is terminal. The first
/// query happens one interval after the job starts; a slow response delays
/// the next tick rather than stacking requests.
async fn poll_until_finished<B: JobBackend>(
    backend: &B,
    job_id: &str,
    interval: Duration,
    sink: &EventSink,
) -> Result<Option<String>, SessionError> {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let report = backend.fetch_status(job_id).await?;
        match report.status {
            JobState::Done => {
                info!(
                    job_id,
                    input = report.input.as_deref().unwrap_or(""),
                    output = report.output_filename.as_deref().unwrap_or(""),
                    "Job finished"
                );
                return Ok(report.output_url.map(|u| backend.resolve_url(&u)));
            }
            JobState::Error => {
                return Err(SessionError::Backend(
                    report
                        .error
                        .unwrap_or_else(|| "Unknown error".to_string()),
                ));
            }
            state => {
                debug!(job_id, state = ?state, "Job still running");
                sink.emit(SessionEvent::JobProgress(state));
            }
        }
    }
}
