// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules that keep them valid.
//! It has no dependencies on external crates (except `std`) so the
//! notification core can be tested without any rendering backend.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notification`]: Notification value objects
//!   ([`DismissDuration`](notification::DismissDuration),
//!   [`MaxStack`](notification::MaxStack))

pub mod diagnostics;
pub mod notification;
