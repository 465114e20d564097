use std::time::{Duration, Instant};

/// Length of each of the four cosmetic processing phases.
pub const PHASE_DURATIONS: [Duration; 4] = [
    Duration::from_millis(1200),
    Duration::from_millis(1800),
    Duration::from_millis(1800),
    Duration::from_millis(1000),
];

/// Percentage the animation holds at until the job is done.
pub const HOLD_PERCENT: f32 = 90.0;

/// Purely visual progress indicator shown while a job runs.
///
/// Runs on its own clock and never feeds back into the session: it creeps
/// towards 90% through four fixed phases, and jumps to 100% only when the
/// caller marks it finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressAnimation {
    started: Option<Instant>,
    finished: bool,
}

impl ProgressAnimation {
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.finished = false;
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn reset(&mut self) {
        *self = ProgressAnimation::default();
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && !self.finished
    }

    /// Percentage in `0.0..=100.0` at `now`.
    pub fn percent_at(&self, now: Instant) -> f32 {
        if self.finished {
            return 100.0;
        }
        match self.started {
            Some(started) => percent_after(now.saturating_duration_since(started)),
            None => 0.0,
        }
    }

    /// Index of the phase shown at `now`, or `None` before start and after
    /// the last phase.
    pub fn phase_at(&self, now: Instant) -> Option<usize> {
        let started = self.started?;
        if self.finished {
            return None;
        }
        let mut remaining = now.saturating_duration_since(started);
        for (index, duration) in PHASE_DURATIONS.iter().enumerate() {
            if remaining < *duration {
                return Some(index);
            }
            remaining -= *duration;
        }
        None
    }
}

/// Each phase eases linearly from the previous phase's target to
/// `(i + 1) / 4 * 90`.
pub fn percent_after(elapsed: Duration) -> f32 {
    let phases = PHASE_DURATIONS.len() as f32;
    let mut remaining = elapsed;
    let mut from = 0.0_f32;

    for (index, duration) in PHASE_DURATIONS.iter().enumerate() {
        let to = (index as f32 + 1.0) / phases * HOLD_PERCENT;
        if remaining < *duration {
            let ratio = remaining.as_secs_f32() / duration.as_secs_f32();
            return from + (to - from) * ratio;
        }
        remaining -= *duration;
        from = to;
    }

    HOLD_PERCENT
}
