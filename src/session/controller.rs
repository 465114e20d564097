use crate::api::ProcessingMode;
use crate::session::{
    drive, JobBackend, SelectedVideo, SessionError, SessionEvent, SessionStatus, UploadSession,
    POLL_INTERVAL,
};

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// An event stamped with the attempt that produced it.
#[derive(Debug, Clone)]
pub(crate) struct TaggedEvent {
    pub generation: u64,
    pub event: SessionEvent,
}

/// Sending half handed to one background attempt.
#[derive(Debug, Clone)]
pub(crate) struct EventSink {
    generation: u64,
    tx: Sender<TaggedEvent>,
}

impl EventSink {
    pub(crate) fn new(generation: u64, tx: Sender<TaggedEvent>) -> Self {
        Self { generation, tx }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // The controller may already be gone; nothing left to notify.
        let _ = self.tx.send(TaggedEvent {
            generation: self.generation,
            event,
        });
    }
}

/// Owns the session and the single background attempt that may be
/// driving it.
///
/// Each attempt gets a fresh generation number and cancellation token.
/// Reset, a new file, or a new start bump the generation and cancel the
/// token, so a late event from an old attempt is discarded in [`pump`]
/// and its poll loop stops at the next await.
///
/// [`pump`]: SessionController::pump
pub struct SessionController<B: JobBackend> {
    backend: Arc<B>,
    runtime: Handle,
    session: UploadSession,
    generation: u64,
    cancel: Option<CancellationToken>,
    tx: Sender<TaggedEvent>,
    rx: Receiver<TaggedEvent>,
}

impl<B: JobBackend> SessionController<B> {
    pub fn new(backend: Arc<B>, runtime: Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            backend,
            runtime,
            session: UploadSession::default(),
            generation: 0,
            cancel: None,
            tx,
            rx,
        }
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    /// True while a background attempt holds a live cancellation token.
    pub fn has_active_attempt(&self) -> bool {
        self.cancel.is_some()
    }

    /// Select a new video. Invalid files are rejected without touching the
    /// current session; a valid file replaces it, abandoning any attempt in
    /// flight.
    pub fn select_file(&mut self, video: SelectedVideo) -> Result<(), SessionError> {
        video.validate()?;
        self.abandon_attempt();
        self.session.select(video)
    }

    /// Start uploading the selected file and processing it in `mode`.
    pub fn start(&mut self, mode: ProcessingMode) -> Result<(), SessionError> {
        let video = self.session.begin(mode)?.clone();

        self.abandon_attempt();
        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());

        info!(
            generation = self.generation,
            file = %video.name,
            mode = mode.label(),
            "Starting attempt"
        );

        let sink = EventSink::new(self.generation, self.tx.clone());
        self.runtime.spawn(drive(
            self.backend.clone(),
            video,
            mode,
            POLL_INTERVAL,
            cancel,
            sink,
        ));
        Ok(())
    }

    /// Return to `Idle`, stopping any attempt in flight.
    pub fn reset(&mut self) {
        self.abandon_attempt();
        self.session.reset();
        info!("Session reset");
    }

    /// Apply every event the current attempt has reported so far. Returns
    /// whether anything changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(tagged) = self.rx.try_recv() {
            if tagged.generation != self.generation {
                debug!(
                    stale = tagged.generation,
                    current = self.generation,
                    "Dropping event from an abandoned attempt"
                );
                continue;
            }
            self.session.apply(tagged.event);
            changed = true;
        }

        if self.session.status.is_terminal() {
            if let Some(cancel) = self.cancel.take() {
                cancel.cancel();
            }
        }
        changed
    }

    #[cfg(test)]
    pub(crate) fn sender(&self) -> Sender<TaggedEvent> {
        self.tx.clone()
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn abandon_attempt(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.generation += 1;
    }
}

impl<B: JobBackend> Drop for SessionController<B> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
