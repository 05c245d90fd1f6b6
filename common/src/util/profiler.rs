use log::Level;
use std::time::{Duration, Instant};

/// Logs how long a render phase took when dropped.
pub struct ScopedTimer {
    phase: String,
    level: Level,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(phase: impl Into<String>) -> Self {
        Self::at_level(phase, Level::Info)
    }

    /// For per-die inner steps that would flood the `info` log.
    pub fn debug(phase: impl Into<String>) -> Self {
        Self::at_level(phase, Level::Debug)
    }

    fn at_level(phase: impl Into<String>, level: Level) -> Self {
        Self {
            phase: phase.into(),
            level,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed().as_secs_f64() * 1e3;
        log::log!(self.level, "{}: {:.2} ms", self.phase, ms);
    }
}
