// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Kind, Placement};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded from the toast overlay.
    Notification(notifications::Message),
    /// Show a notification of the given kind with the current defaults.
    Show(Kind),
    /// Show a notification that never auto-dismisses.
    ShowSticky,
    /// Show or update the keyed progress notification.
    ShowKeyed,
    /// Show a notification rendered from a template.
    ShowTemplate,
    RemoveAll,
    /// Change the default placement and persist it.
    PlacementSelected(Placement),
    /// Write the lifecycle log to a JSON file.
    ExportDiagnostics,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to override persisted defaults.
#[derive(Debug, Default)]
pub struct Flags {
    /// Default corner for new notifications.
    pub placement: Option<Placement>,
    /// Maximum notifications per corner.
    pub max_stack: Option<usize>,
    /// Default auto-dismiss delay in milliseconds; `0` disables it.
    pub duration_ms: Option<i64>,
}
