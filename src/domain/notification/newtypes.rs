// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! Type-safe wrappers for notification settings, ensuring they are always
//! within valid ranges whatever the caller or the config file supplied.

use std::time::Duration;

// =============================================================================
// Dismiss Duration Bounds
// =============================================================================

/// Auto-dismiss duration bounds, in milliseconds.
pub mod duration_bounds {
    /// Zero disables auto-dismiss (sticky notification).
    pub const STICKY_MS: u64 = 0;
    /// Default auto-dismiss delay.
    pub const DEFAULT_MS: u64 = 4500;
}

// =============================================================================
// DismissDuration
// =============================================================================

/// Delay before a notification dismisses itself.
///
/// A zero duration means the notification never expires on its own and
/// only leaves through an explicit removal. Negative inputs are treated as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DismissDuration(u64);

impl DismissDuration {
    /// A duration that never expires.
    pub const STICKY: Self = Self(duration_bounds::STICKY_MS);

    /// Creates a duration from milliseconds, clamping negative values to zero.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        Self(u64::try_from(ms).unwrap_or(duration_bounds::STICKY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this duration disables auto-dismiss.
    #[must_use]
    pub fn is_sticky(self) -> bool {
        self.0 == duration_bounds::STICKY_MS
    }
}

impl Default for DismissDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

impl From<Duration> for DismissDuration {
    fn from(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

// =============================================================================
// Max Stack Bounds
// =============================================================================

/// Per-placement stack size bounds.
pub mod max_stack_bounds {
    /// At least one notification is always displayable.
    pub const MIN: usize = 1;
    /// Default number of notifications per placement.
    pub const DEFAULT: usize = 7;
}

// =============================================================================
// MaxStack
// =============================================================================

/// Maximum number of notifications displayed in one placement group.
///
/// Inserting beyond this limit evicts the oldest notification of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxStack(usize);

impl MaxStack {
    /// Creates a new stack size, clamping to at least one.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(max_stack_bounds::MIN))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if a group of `len` notifications is over the limit.
    #[must_use]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        len > self.0
    }
}

impl Default for MaxStack {
    fn default() -> Self {
        Self(max_stack_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_duration_is_sticky() {
        assert!(DismissDuration::from_millis(-250).is_sticky());
        assert_eq!(DismissDuration::from_millis(-1), DismissDuration::STICKY);
    }

    #[test]
    fn duration_keeps_positive_values() {
        let duration = DismissDuration::from_millis(1000);
        assert_eq!(duration.as_millis(), 1000);
        assert_eq!(duration.as_duration(), Duration::from_secs(1));
        assert!(!duration.is_sticky());
    }

    #[test]
    fn duration_default_is_four_and_a_half_seconds() {
        assert_eq!(DismissDuration::default().as_millis(), 4500);
    }

    #[test]
    fn duration_from_std_duration() {
        let duration = DismissDuration::from(Duration::from_millis(3000));
        assert_eq!(duration.as_millis(), 3000);
    }

    #[test]
    fn max_stack_clamps_zero_to_one() {
        assert_eq!(MaxStack::new(0).value(), max_stack_bounds::MIN);
    }

    #[test]
    fn max_stack_exceeded_only_above_limit() {
        let stack = MaxStack::new(2);
        assert!(!stack.is_exceeded_by(2));
        assert!(stack.is_exceeded_by(3));
    }

    #[test]
    fn max_stack_default() {
        assert_eq!(MaxStack::default().value(), max_stack_bounds::DEFAULT);
    }
}
