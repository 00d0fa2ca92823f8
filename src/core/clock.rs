//! Injectable time source
//!
//! Date-range filtering and relative date formatting both depend on "now".
//! The engines never read the system time directly; they ask a [`Clock`].

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveTime};

/// Source of the current instant, expressed in the caller's local offset
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<FixedOffset>;

    /// Midnight at the start of the current local calendar day
    fn start_of_today(&self) -> DateTime<FixedOffset> {
        start_of_day(self.now())
    }
}

/// Midnight at the start of the calendar day containing `instant`, in its own offset
pub fn start_of_day(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let offset = *instant.offset();
    let midnight = instant.date_naive().and_time(NaiveTime::MIN);
    let utc = midnight - Duration::seconds(offset.local_minus_utc().into());
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Clock backed by the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Move the clock forward (or backward with a negative duration)
    pub fn advance(&mut self, by: Duration) {
        self.instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
