// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.

use std::time::Instant;

use serde::Serialize;

use crate::ui::notifications::{Kind, MessageId, Placement, RemovalCause};

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// Lifecycle transitions recorded by the notification manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification entered the store.
    Created {
        id: MessageId,
        kind: Kind,
        placement: Placement,
        /// Zero for sticky notifications.
        duration_ms: u64,
    },

    /// A keyed notification superseded an existing one.
    Replaced { id: MessageId },

    /// Hover paused the auto-dismiss timer.
    Paused { id: MessageId },

    /// Pointer left and the timer restarted.
    Resumed { id: MessageId },

    /// The auto-dismiss timer fired.
    Expired { id: MessageId },

    /// A notification left the store.
    Removed { id: MessageId, cause: RemovalCause },

    /// Manager defaults were changed.
    ConfigChanged,
}

impl DiagnosticEventKind {
    /// Id of the notification the event is about, if any.
    #[must_use]
    pub fn message_id(&self) -> Option<&MessageId> {
        match self {
            Self::Created { id, .. }
            | Self::Replaced { id }
            | Self::Paused { id }
            | Self::Resumed { id }
            | Self::Expired { id }
            | Self::Removed { id, .. } => Some(id),
            Self::ConfigChanged => None,
        }
    }
}

/// Event as written to an export, timestamped relative to collection start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    /// The event data
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let elapsed = event.timestamp.saturating_duration_since(collection_start);
        Self {
            timestamp_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            kind: event.kind.clone(),
        }
    }
}
