//! Abstract repeating timer
//!
//! The controller never talks to a host timer API directly. It asks a
//! [`TickTimer`] for a repeating schedule and later polls whether a tick is
//! due. Any host mechanism works behind the trait: a wall-clock interval
//! check inside a render loop, a sleeping thread, or a test fixture that
//! fires ticks by hand.
//!
//! Cancellation is unconditional: once `cancel` returns, `due` never again
//! reports a tick for that handle, even if ticks were already pending.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Opaque identity of one repeating schedule.
///
/// Handles are never reused by the timers in this module, so a stale handle
/// from before a cancel or reschedule is simply never due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// A cancelable repeating-tick source.
pub trait TickTimer {
    /// Begin a repeating schedule with the given period, replacing any
    /// schedule this timer previously held.
    fn schedule(&mut self, interval: Duration) -> TimerHandle;

    /// Cancel a schedule. Unconditional and immediate: no tick for this
    /// handle is ever reported due afterwards. Canceling a stale handle is
    /// a no-op.
    fn cancel(&mut self, handle: TimerHandle);

    /// Consume one pending tick for `handle`, if any.
    fn due(&mut self, handle: TimerHandle) -> bool;
}

/// Wall-clock timer for host loops that poll every frame.
///
/// A tick becomes due each time `interval` has elapsed since the last
/// consumed tick. Consuming a tick resets the period from now, so a host
/// that stalls sees one tick on resume rather than a burst of catch-up
/// ticks.
#[derive(Debug)]
pub struct IntervalTimer {
    next_id: u64,
    active: Option<Schedule>,
}

#[derive(Debug)]
struct Schedule {
    handle: TimerHandle,
    interval: Duration,
    last_tick: Instant,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            active: None,
        }
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer for IntervalTimer {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.active = Some(Schedule {
            handle,
            interval,
            last_tick: Instant::now(),
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active.as_ref().is_some_and(|s| s.handle == handle) {
            self.active = None;
        }
    }

    fn due(&mut self, handle: TimerHandle) -> bool {
        let Some(schedule) = self
            .active
            .as_mut()
            .filter(|s| s.handle == handle)
        else {
            return false;
        };
        if schedule.last_tick.elapsed() >= schedule.interval {
            schedule.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}

/// Test timer driven entirely by explicit [`fire`](ManualTimer::fire) calls.
///
/// Clones share one schedule, so a test can hand a clone to the controller
/// and keep another to fire ticks and inspect state.
#[derive(Debug, Default, Clone)]
pub struct ManualTimer {
    inner: Rc<RefCell<ManualState>>,
}

#[derive(Debug, Default)]
struct ManualState {
    next_id: u64,
    active: Option<TimerHandle>,
    interval: Option<Duration>,
    pending: u32,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `count` ticks pending for the active schedule.
    pub fn fire(&self, count: u32) {
        let mut state = self.inner.borrow_mut();
        if state.active.is_some() {
            state.pending += count;
        }
    }

    /// Whether any schedule is active.
    pub fn has_schedule(&self) -> bool {
        self.inner.borrow().active.is_some()
    }

    /// Period of the active schedule, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.inner.borrow().interval
    }

    /// Ticks fired but not yet consumed.
    pub fn pending(&self) -> u32 {
        self.inner.borrow().pending
    }
}

impl TickTimer for ManualTimer {
    fn schedule(&mut self, interval: Duration) -> TimerHandle {
        let mut state = self.inner.borrow_mut();
        let handle = TimerHandle(state.next_id);
        state.next_id += 1;
        state.active = Some(handle);
        state.interval = Some(interval);
        state.pending = 0;
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let mut state = self.inner.borrow_mut();
        if state.active == Some(handle) {
            state.active = None;
            state.interval = None;
            state.pending = 0;
        }
    }

    fn due(&mut self, handle: TimerHandle) -> bool {
        let mut state = self.inner.borrow_mut();
        if state.active == Some(handle) && state.pending > 0 {
            state.pending -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_consumes_fired_ticks() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule(Duration::from_millis(100));

        assert!(!timer.due(handle));
        timer.fire(2);
        assert!(timer.due(handle));
        assert!(timer.due(handle));
        assert!(!timer.due(handle));
    }

    #[test]
    fn test_cancel_discards_pending_ticks() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule(Duration::from_millis(100));
        timer.fire(3);
        timer.cancel(handle);

        assert!(!timer.has_schedule());
        assert!(!timer.due(handle));
    }

    #[test]
    fn test_stale_handle_is_never_due() {
        let mut timer = ManualTimer::new();
        let old = timer.schedule(Duration::from_millis(100));
        let new = timer.schedule(Duration::from_millis(50));
        timer.fire(1);

        assert!(!timer.due(old));
        assert!(timer.due(new));
    }

    #[test]
    fn test_cancel_with_stale_handle_keeps_schedule() {
        let mut timer = ManualTimer::new();
        let old = timer.schedule(Duration::from_millis(100));
        let new = timer.schedule(Duration::from_millis(50));
        timer.cancel(old);

        assert!(timer.has_schedule());
        timer.fire(1);
        assert!(timer.due(new));
    }

    #[test]
    fn test_interval_timer_not_due_immediately() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule(Duration::from_secs(3600));
        assert!(!timer.due(handle));
    }

    #[test]
    fn test_interval_timer_due_after_elapsed_period() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule(Duration::ZERO);
        // A zero period is always elapsed.
        assert!(timer.due(handle));
        timer.cancel(handle);
        assert!(!timer.due(handle));
    }
}
