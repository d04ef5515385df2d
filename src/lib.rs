// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification system built with the Iced GUI framework.
//!
//! It provides keyed, auto-dismissing notifications stacked per screen corner,
//! with pause on hover, persisted defaults, a lifecycle diagnostics log and a
//! demo application.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;
