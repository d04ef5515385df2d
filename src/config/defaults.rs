// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lifecycle**: Auto-dismiss delay, exit animation, hover behavior
//! - **Stacking**: Per-placement stack size
//! - **Scheduling**: Tick interval driving expiry
//! - **Diagnostics**: Lifecycle event buffer bounds

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds). Zero means sticky.
pub const DEFAULT_DURATION_MS: u64 = 4500;

/// Whether dismissal plays the exit animation by default.
pub const DEFAULT_ANIMATE: bool = true;

/// Exit animation length (in milliseconds) between timer expiry and removal.
pub const LEAVE_ANIMATION_MS: u64 = 200;

/// Whether hovering a notification pauses its timer by default.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Default number of notifications displayed per placement.
pub const DEFAULT_MAX_STACK: usize = 7;

/// Minimum stack size; a placement can always show one notification.
pub const MIN_MAX_STACK: usize = 1;

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Interval (in milliseconds) of the tick subscription that drives expiry.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the lifecycle event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum capacity of the lifecycle event buffer.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum capacity of the lifecycle event buffer.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_STACK >= MIN_MAX_STACK);
    assert!(MIN_MAX_STACK > 0);
    assert!(TICK_INTERVAL_MS < LEAVE_ANIMATION_MS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
