use std::time::Duration;

use tracing::trace;

/// Repeating countdown driving automatic advances.
///
/// The timer is a scoped resource: holding a value means a countdown is
/// pending, dropping it cancels the countdown. A carousel keeps at most one
/// in an `Option` and always drops the old one before arming the next.
#[derive(Debug)]
pub struct AutoAdvanceTimer {
    generation: u64,
    period: Duration,
    elapsed: Duration,
}

/// Outcome of feeding elapsed time into the timer.
#[derive(Debug, PartialEq, Eq)]
pub enum Countdown {
    Pending,
    /// The timer fired; `leftover` is the part of the delta past the deadline
    Fired { leftover: Duration },
}

impl AutoAdvanceTimer {
    pub fn arm(generation: u64, period: Duration) -> Self {
        trace!(generation, period_ms = period.as_millis() as u64, "auto-advance timer armed");
        Self {
            generation,
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Advances the countdown. Fires at most once per call; the caller feeds
    /// `leftover` back in to observe further periods.
    pub fn consume(&mut self, dt: Duration) -> Countdown {
        let remaining = self.remaining();
        if dt < remaining {
            self.elapsed += dt;
            return Countdown::Pending;
        }
        // Repeating: the next period starts at the deadline
        self.elapsed = Duration::ZERO;
        Countdown::Fired {
            leftover: dt - remaining,
        }
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        trace!(generation = self.generation, "auto-advance timer released");
    }
}
