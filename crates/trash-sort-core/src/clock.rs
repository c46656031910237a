use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic time since some fixed start.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by `instant`, which also works in the browser.
#[derive(Clone, Debug)]
pub struct InstantClock {
    start: instant::Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the session owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
