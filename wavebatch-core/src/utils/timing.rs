use std::time::Instant;

/// Measures wall time of solver phases.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }
}
