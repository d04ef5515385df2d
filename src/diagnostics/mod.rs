// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle events.
//!
//! Managers report every transition (created, replaced, paused, resumed,
//! expired, removed) through a [`DiagnosticsHandle`]. The
//! [`DiagnosticsCollector`] keeps the most recent events in a memory-bounded
//! [`CircularBuffer`] and can export them as JSON.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, SerializableEvent};
