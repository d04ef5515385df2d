// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss countdowns.
//!
//! The `TimerController` keeps one pausable countdown per notification. It
//! never schedules anything itself: the manager polls it on every tick and
//! removes whatever it reports as fired. Operations on unknown, fired or
//! cancelled timers are ignored.

use super::notification::MessageId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one clone and hand the
/// other to a manager.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset_ms: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms.fetch_add(ms, Ordering::Relaxed);
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.offset_ms.load(Ordering::Relaxed))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}

/// Observable state of a countdown.
///
/// Cancelled countdowns are discarded, so they have no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    Fired,
}

#[derive(Debug, Clone)]
struct Countdown {
    duration: Duration,
    /// Time consumed by previous runs.
    elapsed: Duration,
    /// Start of the current run, `None` while not running.
    resumed_at: Option<Instant>,
    state: TimerState,
}

impl Countdown {
    fn consumed(&self, now: Instant) -> Duration {
        let current = self
            .resumed_at
            .map_or(Duration::ZERO, |at| now.saturating_duration_since(at));
        self.elapsed + current
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.consumed(now))
    }

    /// Instant the current run reaches zero.
    fn deadline(&self) -> Option<Instant> {
        self.resumed_at
            .map(|at| at + self.duration.saturating_sub(self.elapsed))
    }
}

/// A countdown that reached zero during a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
    pub id: MessageId,
    /// When the countdown actually reached zero, at or before the poll time.
    pub deadline: Instant,
}

/// Pausable per-notification countdowns.
#[derive(Debug, Default)]
pub struct TimerController {
    timers: HashMap<MessageId, Countdown>,
}

impl TimerController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown for `id`, replacing any previous one.
    ///
    /// A zero duration starts nothing.
    pub fn start(&mut self, id: &MessageId, duration: Duration, now: Instant) {
        self.timers.remove(id);
        if duration.is_zero() {
            return;
        }
        self.timers.insert(
            id.clone(),
            Countdown {
                duration,
                elapsed: Duration::ZERO,
                resumed_at: Some(now),
                state: TimerState::Running,
            },
        );
    }

    /// Suspends a running countdown, remembering the time consumed so far.
    ///
    /// Returns whether the countdown was running.
    pub fn pause(&mut self, id: &MessageId, now: Instant) -> bool {
        let Some(countdown) = self.timers.get_mut(id) else {
            return false;
        };
        if countdown.state != TimerState::Running {
            return false;
        }
        countdown.elapsed = countdown.consumed(now);
        countdown.resumed_at = None;
        countdown.state = TimerState::Paused;
        true
    }

    /// Restarts a paused countdown for its remaining time.
    ///
    /// A countdown with nothing left fires on the next poll at `now`.
    /// Returns whether the countdown was paused.
    pub fn resume(&mut self, id: &MessageId, now: Instant) -> bool {
        let Some(countdown) = self.timers.get_mut(id) else {
            return false;
        };
        if countdown.state != TimerState::Paused {
            return false;
        }
        countdown.resumed_at = Some(now);
        countdown.state = TimerState::Running;
        true
    }

    /// Discards the countdown for `id` without firing it.
    pub fn cancel(&mut self, id: &MessageId) {
        self.timers.remove(id);
    }

    /// Marks every running countdown that reached zero as fired.
    ///
    /// Each countdown is reported once, ordered by deadline.
    pub fn poll(&mut self, now: Instant) -> Vec<Fired> {
        let mut fired: Vec<Fired> = self
            .timers
            .iter_mut()
            .filter(|(_, countdown)| {
                countdown.state == TimerState::Running && countdown.remaining(now).is_zero()
            })
            .filter_map(|(id, countdown)| {
                let deadline = countdown.deadline()?;
                countdown.elapsed = countdown.duration;
                countdown.resumed_at = None;
                countdown.state = TimerState::Fired;
                Some(Fired {
                    id: id.clone(),
                    deadline,
                })
            })
            .collect();
        fired.sort_by(|a, b| a.deadline.cmp(&b.deadline).then_with(|| a.id.cmp(&b.id)));
        fired
    }

    /// State of the countdown for `id`; `None` once cancelled or never started.
    #[must_use]
    pub fn state(&self, id: &MessageId) -> Option<TimerState> {
        self.timers.get(id).map(|countdown| countdown.state)
    }

    /// Time left on the countdown for `id`.
    #[must_use]
    pub fn remaining(&self, id: &MessageId, now: Instant) -> Option<Duration> {
        self.timers.get(id).map(|countdown| countdown.remaining(now))
    }

    /// Number of countdowns being tracked, including fired ones not yet cancelled.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn id(value: &str) -> MessageId {
        MessageId::from(value)
    }

    #[test]
    fn zero_duration_starts_nothing() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), Duration::ZERO, t0);

        assert!(timers.state(&id("a")).is_none());
        assert!(timers.poll(t0 + ms(60_000)).is_empty());
    }

    #[test]
    fn fires_at_deadline_not_before() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(1000), t0);

        assert!(timers.poll(t0 + ms(999)).is_empty());
        let fired = timers.poll(t0 + ms(1010));
        assert_eq!(
            fired,
            vec![Fired {
                id: id("a"),
                deadline: t0 + ms(1000)
            }]
        );
        assert_eq!(timers.state(&id("a")), Some(TimerState::Fired));
    }

    #[test]
    fn fires_only_once() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(100), t0);

        assert_eq!(timers.poll(t0 + ms(100)).len(), 1);
        assert!(timers.poll(t0 + ms(200)).is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn pause_freezes_and_resume_uses_remaining_time() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(3000), t0);

        assert!(timers.pause(&id("a"), t0 + ms(1000)));
        assert!(timers.poll(t0 + ms(50_000)).is_empty());
        assert_eq!(timers.remaining(&id("a"), t0 + ms(50_000)), Some(ms(2000)));

        assert!(timers.resume(&id("a"), t0 + ms(50_000)));
        assert!(timers.poll(t0 + ms(51_999)).is_empty());
        let fired = timers.poll(t0 + ms(52_000));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].deadline, t0 + ms(52_000));
    }

    #[test]
    fn pause_is_idempotent() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(1000), t0);

        assert!(timers.pause(&id("a"), t0 + ms(200)));
        assert!(!timers.pause(&id("a"), t0 + ms(700)));
        assert_eq!(timers.remaining(&id("a"), t0 + ms(900)), Some(ms(800)));
    }

    #[test]
    fn resume_with_nothing_left_fires_on_same_instant() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(500), t0);

        // Paused exactly as the countdown ran out, before any poll saw it.
        timers.pause(&id("a"), t0 + ms(500));
        timers.resume(&id("a"), t0 + ms(9000));
        let fired = timers.poll(t0 + ms(9000));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].deadline, t0 + ms(9000));
    }

    #[test]
    fn cancel_discards_without_firing() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(100), t0);
        timers.cancel(&id("a"));

        assert!(timers.poll(t0 + ms(1000)).is_empty());
        assert!(timers.state(&id("a")).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();

        assert!(!timers.pause(&id("ghost"), t0));
        assert!(!timers.resume(&id("ghost"), t0));
        timers.cancel(&id("ghost"));
        assert!(timers.is_empty());
    }

    #[test]
    fn fired_timer_ignores_pause_and_resume() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(100), t0);
        timers.poll(t0 + ms(100));

        assert!(!timers.pause(&id("a"), t0 + ms(150)));
        assert!(!timers.resume(&id("a"), t0 + ms(150)));
        assert_eq!(timers.state(&id("a")), Some(TimerState::Fired));
    }

    #[test]
    fn restart_replaces_previous_countdown() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("a"), ms(100), t0);
        timers.start(&id("a"), ms(1000), t0 + ms(50));

        assert!(timers.poll(t0 + ms(500)).is_empty());
        assert_eq!(timers.poll(t0 + ms(1050)).len(), 1);
    }

    #[test]
    fn poll_orders_by_deadline() {
        let mut timers = TimerController::new();
        let t0 = Instant::now();
        timers.start(&id("late"), ms(300), t0);
        timers.start(&id("early"), ms(100), t0);

        let fired: Vec<_> = timers
            .poll(t0 + ms(400))
            .into_iter()
            .map(|fired| fired.id)
            .collect();
        assert_eq!(fired, vec![id("early"), id("late")]);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let shared = clock.clone();
        let start = shared.now();

        clock.advance(ms(250));
        assert_eq!(shared.now() - start, ms(250));
        assert_eq!(shared.elapsed(), ms(250));
    }
}
