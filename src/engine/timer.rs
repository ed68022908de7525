use crate::domain::Mode;
use crate::ticker::Ticker;
use std::time::Instant;

/// Countdown state for the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub total_secs: u32,
    pub remaining_secs: u32,
    pub running: bool,
}

impl TimerState {
    fn fresh(mode: Mode, duration_secs: u32) -> Self {
        Self {
            mode,
            total_secs: duration_secs,
            remaining_secs: duration_secs,
            running: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }
}

/// Emitted by the engine when a countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Completed(Mode),
}

/// Single-mode countdown driven by a cancellable one-second schedule.
///
/// The schedule is armed by `start` and cancelled by every other state
/// change, so a countdown that was reconfigured, paused or reset can never
/// be decremented by a period owed to its predecessor.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    state: TimerState,
    ticker: Ticker,
}

impl TimerEngine {
    pub fn new(mode: Mode, duration_secs: u32) -> Self {
        Self {
            state: TimerState::fresh(mode, duration_secs),
            ticker: Ticker::default(),
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Whether a one-second schedule is currently armed
    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Replace the countdown with a fresh, stopped one
    pub fn configure(&mut self, mode: Mode, duration_secs: u32) {
        self.ticker.cancel();
        self.state = TimerState::fresh(mode, duration_secs);
        tracing::debug!(?mode, duration_secs, "timer configured");
    }

    /// Start counting down. Returns false when there is nothing left to count.
    /// Calling it while already running keeps the existing schedule.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state.remaining_secs == 0 {
            return false;
        }
        if self.state.running && self.ticker.is_armed() {
            return true;
        }
        self.state.running = true;
        self.ticker.arm(now);
        tracing::debug!(mode = ?self.state.mode, remaining = self.state.remaining_secs, "timer started");
        true
    }

    pub fn pause(&mut self) {
        self.ticker.cancel();
        if self.state.running {
            self.state.running = false;
            tracing::debug!(remaining = self.state.remaining_secs, "timer paused");
        }
    }

    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.state.remaining_secs = self.state.total_secs;
        self.state.running = false;
        tracing::debug!(total = self.state.total_secs, "timer reset");
    }

    /// Decrement one second. The 1 -> 0 step stops the timer, cancels the
    /// schedule and yields the single completion event of this countdown.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.state.running {
            return None;
        }
        if self.state.remaining_secs == 0 {
            self.state.running = false;
            self.ticker.cancel();
            return None;
        }

        self.state.remaining_secs -= 1;
        if self.state.remaining_secs > 0 {
            return None;
        }

        self.state.running = false;
        self.ticker.cancel();
        tracing::info!(mode = ?self.state.mode, "countdown completed");
        Some(TimerEvent::Completed(self.state.mode))
    }

    /// Apply every whole second that elapsed on the schedule up to `now`
    pub fn advance(&mut self, now: Instant) -> Option<TimerEvent> {
        let (token, due) = self.ticker.poll(now)?;
        for _ in 0..due {
            if !self.ticker.is_current(token) {
                break;
            }
            if let Some(event) = self.tick() {
                return Some(event);
            }
        }
        None
    }

    /// Seconds until the countdown would finish if left running
    pub fn seconds_left(&self) -> u32 {
        self.state.remaining_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn running_engine(secs: u32) -> (TimerEngine, Instant) {
        let now = Instant::now();
        let mut engine = TimerEngine::new(Mode::Focus, secs);
        assert!(engine.start(now));
        (engine, now)
    }

    #[test]
    fn test_configure_postcondition() {
        let mut engine = TimerEngine::new(Mode::Focus, 10);
        engine.start(Instant::now());
        engine.tick();

        for d in [1, 60, 1500, 3600] {
            engine.configure(Mode::ShortBreak, d);
            let state = engine.state();
            assert_eq!(state.mode, Mode::ShortBreak);
            assert_eq!(state.total_secs, d);
            assert_eq!(state.remaining_secs, d);
            assert!(!state.running);
            assert!(!engine.is_scheduled());
        }
    }

    #[test]
    fn test_start_at_zero_is_noop() {
        let mut engine = TimerEngine::new(Mode::Focus, 0);
        assert!(!engine.start(Instant::now()));
        assert!(!engine.is_running());
        assert!(!engine.is_scheduled());
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut once, now) = running_engine(5);
        let mut twice = TimerEngine::new(Mode::Focus, 5);
        twice.start(now);
        twice.start(now + Duration::from_millis(600));

        assert_eq!(once.state(), twice.state());

        // The second start did not push the schedule back
        assert_eq!(twice.advance(now + Duration::from_secs(1)), None);
        assert_eq!(twice.state().remaining_secs, 4);
        once.advance(now + Duration::from_secs(1));
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_ticks_decrease_until_single_completion() {
        let (mut engine, _) = running_engine(5);
        let mut previous = engine.state().remaining_secs;
        let mut completions = 0;

        for _ in 0..10 {
            if let Some(TimerEvent::Completed(mode)) = engine.tick() {
                assert_eq!(mode, Mode::Focus);
                completions += 1;
            }
            let remaining = engine.state().remaining_secs;
            if previous > 0 {
                assert_eq!(remaining, previous - 1);
            } else {
                assert_eq!(remaining, 0);
            }
            previous = remaining;
            if remaining == 0 {
                assert!(!engine.is_running());
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(engine.state().remaining_secs, 0);
        assert!(!engine.is_scheduled());
    }

    #[test]
    fn test_tick_ignored_when_paused() {
        let (mut engine, _) = running_engine(5);
        engine.tick();
        engine.pause();

        assert_eq!(engine.tick(), None);
        assert_eq!(engine.state().remaining_secs, 4);
        assert!(!engine.is_scheduled());
    }

    #[test]
    fn test_reset_restores_total() {
        let (mut engine, _) = running_engine(5);
        engine.tick();
        engine.tick();
        engine.reset();

        assert_eq!(engine.state().remaining_secs, 5);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_finished_timer_needs_reset_before_start() {
        let (mut engine, now) = running_engine(1);
        assert_eq!(engine.tick(), Some(TimerEvent::Completed(Mode::Focus)));
        assert!(!engine.start(now));

        engine.reset();
        assert!(engine.start(now));
    }

    #[test]
    fn test_advance_applies_elapsed_seconds() {
        let (mut engine, now) = running_engine(10);
        assert_eq!(engine.advance(now + Duration::from_millis(500)), None);
        assert_eq!(engine.state().remaining_secs, 10);

        engine.advance(now + Duration::from_millis(3200));
        assert_eq!(engine.state().remaining_secs, 7);
    }

    #[test]
    fn test_advance_stops_at_completion() {
        let (mut engine, now) = running_engine(3);
        let event = engine.advance(now + Duration::from_secs(10));

        assert_eq!(event, Some(TimerEvent::Completed(Mode::Focus)));
        assert_eq!(engine.state().remaining_secs, 0);
        assert_eq!(engine.advance(now + Duration::from_secs(20)), None);
    }

    #[test]
    fn test_reconfigure_drops_stale_schedule() {
        let (mut engine, now) = running_engine(3);
        engine.configure(Mode::ShortBreak, 300);

        // Time owed to the superseded countdown must not leak into the new one
        assert_eq!(engine.advance(now + Duration::from_secs(5)), None);
        assert_eq!(engine.state().remaining_secs, 300);
    }

    #[test]
    fn test_pause_then_resume_rearms() {
        let (mut engine, now) = running_engine(10);
        engine.advance(now + Duration::from_secs(2));
        engine.pause();

        engine.advance(now + Duration::from_secs(60));
        assert_eq!(engine.state().remaining_secs, 8);

        let resume_at = now + Duration::from_secs(60);
        engine.start(resume_at);
        engine.advance(resume_at + Duration::from_secs(1));
        assert_eq!(engine.state().remaining_secs, 7);
    }
}
