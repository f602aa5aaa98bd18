use std::time::{Duration, Instant};
use thiserror::Error;

/// Error type for stopwatch state preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("stopwatch is already running")]
    AlreadyRunning,
    #[error("stopwatch is not running")]
    NotRunning,
    #[error("stopwatch must be stopped before reset")]
    StillRunning,
}

/// A single elapsed-time counter.
///
/// The stopwatch never reads the clock itself; every operation that needs
/// the current time takes it as an [`Instant`] argument. This keeps the
/// state machine deterministic under test and leaves clock ownership to
/// the caller.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Time accrued over all completed run intervals.
    accumulated: Duration,
    /// Start of the currently open run interval, if any.
    run_start: Option<Instant>,
}

impl Stopwatch {
    /// A new stopwatch, stopped and zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    /// Open a run interval at `now`.
    pub fn start(&mut self, now: Instant) -> Result<(), StopwatchError> {
        if self.run_start.is_some() {
            return Err(StopwatchError::AlreadyRunning);
        }
        self.run_start = Some(now);
        Ok(())
    }

    /// Close the open run interval at `now`, folding it into the total.
    pub fn stop(&mut self, now: Instant) -> Result<(), StopwatchError> {
        let start = self.run_start.take().ok_or(StopwatchError::NotRunning)?;
        self.accumulated += now.saturating_duration_since(start);
        Ok(())
    }

    /// Zero the accumulated time. Only valid while stopped.
    pub fn reset(&mut self) -> Result<(), StopwatchError> {
        if self.run_start.is_some() {
            return Err(StopwatchError::StillRunning);
        }
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    /// Stop if running, start otherwise.
    ///
    /// This is the entry point UI callers use; it cannot fail because it
    /// checks the state itself.
    pub fn toggle(&mut self, now: Instant) {
        match self.run_start.take() {
            Some(start) => self.accumulated += now.saturating_duration_since(start),
            None => self.run_start = Some(now),
        }
    }

    /// Elapsed time as of `now`. Pure read, never mutates.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.run_start {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }
}

/// Render whole seconds as `HH:MM:SS`.
///
/// Minutes and seconds are two digits; the hours field is zero-padded to
/// two but grows without wrapping past 99.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}
