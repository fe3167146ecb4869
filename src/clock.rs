//! Wall-clock sources for the "play now" trigger.
//!
//! Sequencing never samples time itself. Hosts read a [`Clock`] once per
//! trigger and hand the reading to the player.

use crate::sequencing::TimeOfDay;

pub trait Clock: Send + Sync {
    fn now(&self) -> TimeOfDay;
}

/// Local time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// A clock stopped at one time (demos and tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(TimeOfDay);

impl FixedClock {
    pub fn new(time: TimeOfDay) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> TimeOfDay {
        (**self).now()
    }
}
