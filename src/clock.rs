use chrono::{Local, NaiveDateTime};

/// Source of the generation time stamped into emitted artifacts
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock which is stuck at one moment, for reproducible output or testing
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Factory function to create a fixed clock
    pub fn create(now: NaiveDateTime) -> Self {
        FixedClock { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
