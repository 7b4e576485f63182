//! Abstractions for providing the current time.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{
    Duration,
    Instant,
};

/// A source of "now" for components that age state, such as the ARP cache.
pub trait Clock: Clone + Debug {
    /// Returns an instant corresponding to "now".
    fn now_instant(&self) -> Instant;
}

/// A clock backed by the host's monotonic time.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {}
    }
}

impl Clock for SystemClock {
    fn now_instant(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when the simulation advances it.
///
/// Clones share the same underlying time, so a handle kept by the driver can
/// advance the clock seen by a cache it was handed to.
#[derive(Clone, Debug)]
pub struct SimClock {
    now: Rc<Cell<Instant>>,
}

impl SimClock {
    pub fn new() -> SimClock {
        SimClock {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves simulated time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for SimClock {
    fn default() -> SimClock {
        SimClock::new()
    }
}

impl Clock for SimClock {
    fn now_instant(&self) -> Instant {
        self.now.get()
    }
}
