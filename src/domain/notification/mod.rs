// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! Value objects shared by the notification core and the configuration
//! layer. Out-of-range inputs are clamped rather than rejected.

pub mod newtypes;

pub use newtypes::{duration_bounds, max_stack_bounds, DismissDuration, MaxStack};
