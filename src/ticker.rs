use std::time::{Duration, Instant};

/// Event loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown period
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Get the event loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Identifies one arming of a [`Ticker`]. A token from an earlier arming
/// never matches after `cancel` or a re-arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TickToken,
    next_due: Instant,
}

/// Cancellable periodic schedule polled from the event loop.
///
/// Nothing runs in the background: the loop calls [`Ticker::poll`] and gets
/// back how many whole periods elapsed since the last poll. Cancelling is
/// synchronous, so periods owed to a cancelled schedule are never reported.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    generation: u64,
    armed: Option<Armed>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(COUNTDOWN_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            generation: 0,
            armed: None,
        }
    }

    /// Arm the schedule with its first period ending at `now + period`.
    /// Any previous arming is cancelled first.
    pub fn arm(&mut self, now: Instant) -> TickToken {
        self.cancel();
        let token = TickToken(self.generation);
        self.armed = Some(Armed {
            token,
            next_due: now + self.period,
        });
        token
    }

    /// Drop the pending schedule and invalidate its token
    pub fn cancel(&mut self) {
        self.armed = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether `token` belongs to the current arming
    pub fn is_current(&self, token: TickToken) -> bool {
        matches!(self.armed, Some(armed) if armed.token == token)
    }

    /// Count the periods that completed up to `now` and advance past them.
    /// Returns the token of the arming they belong to.
    pub fn poll(&mut self, now: Instant) -> Option<(TickToken, u32)> {
        let armed = self.armed.as_mut()?;
        let mut due = 0u32;
        while armed.next_due <= now {
            armed.next_due += self.period;
            due += 1;
        }
        if due == 0 {
            None
        } else {
            Some((armed.token, due))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_poll_counts_whole_periods() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        let token = ticker.arm(start);

        assert_eq!(ticker.poll(start + Duration::from_millis(999)), None);
        assert_eq!(ticker.poll(start + Duration::from_millis(1000)), Some((token, 1)));
        assert_eq!(ticker.poll(start + Duration::from_millis(3500)), Some((token, 2)));
        assert_eq!(ticker.poll(start + Duration::from_millis(3900)), None);
    }

    #[test]
    fn test_cancel_discards_owed_periods() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        let token = ticker.arm(start);

        ticker.cancel();
        assert!(!ticker.is_armed());
        assert!(!ticker.is_current(token));
        assert_eq!(ticker.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_rearm_invalidates_previous_token() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        let first = ticker.arm(start);
        let second = ticker.arm(start + Duration::from_millis(500));

        assert_ne!(first, second);
        assert!(!ticker.is_current(first));
        assert!(ticker.is_current(second));
        // The new arming starts its own period
        assert_eq!(ticker.poll(start + Duration::from_millis(1200)), None);
        assert_eq!(ticker.poll(start + Duration::from_millis(1500)), Some((second, 1)));
    }
}
