// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Notifications are created through a [`Manager`], kept per screen corner
//! in a [`NoticeStore`], and auto-dismissed by a [`TimerController`] driven
//! from periodic `Tick` messages. Each creation returns a
//! [`NotificationHandle`] whose [`OnClose`] signal resolves once the
//! notification leaves, with `true` only when the user closed it.
//!
//! # Components
//!
//! - `notification` - Record, options and identity types
//! - `timer` - Pausable countdowns and the clock abstraction
//! - `store` - Ordered per-placement storage with stack limits
//! - `manager` - Lifecycle orchestration and message handling
//! - `toast` - Toast widgets for rendering the overlay
//!
//! # Usage
//!
//! ```
//! use iced_toasts::ui::notifications::{Manager, Message, NotificationOptions};
//!
//! let mut manager = Manager::new();
//! let mut handle = manager.success("Saved", "Settings written", NotificationOptions::new());
//!
//! manager.handle_message(&Message::Close(handle.message_id().clone()));
//! assert_eq!(handle.on_close().try_result(), Some(true));
//! ```

mod handle;
mod manager;
mod notification;
mod store;
mod timer;
mod toast;

pub use handle::{NotificationHandle, OnClose};
pub use manager::{Manager, Message};
pub use notification::{
    Content, Kind, MessageId, Notification, NotificationDefaults, NotificationOptions, Placement,
    RemovalCause, TemplateRef,
};
pub use store::{Insertion, NoticeStore};
pub use timer::{Clock, Fired, ManualClock, SystemClock, TimerController, TimerState};
pub use toast::Toast;
