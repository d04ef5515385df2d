// SPDX-License-Identifier: MPL-2.0
//! Caller-side handle returned when a notification is created.

use super::notification::MessageId;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// One-shot close signal of a notification.
///
/// Resolves once with `true` when the user closed the notification and
/// `false` for every other cause. It can be awaited or polled without
/// blocking through [`OnClose::try_result`].
#[derive(Debug)]
pub struct OnClose {
    rx: oneshot::Receiver<bool>,
    resolved: Option<bool>,
}

impl OnClose {
    pub(crate) fn channel() -> (oneshot::Sender<bool>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx, resolved: None })
    }

    /// Returns the close result if the notification is already closed.
    pub fn try_result(&mut self) -> Option<bool> {
        if self.resolved.is_none() {
            match self.rx.try_recv() {
                Ok(closed_by_user) => self.resolved = Some(closed_by_user),
                Err(oneshot::error::TryRecvError::Closed) => self.resolved = Some(false),
                Err(oneshot::error::TryRecvError::Empty) => {}
            }
        }
        self.resolved
    }
}

impl Future for OnClose {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(closed_by_user) = this.resolved {
            return Poll::Ready(closed_by_user);
        }
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(result) => {
                // A dropped sender means the manager went away without a user close.
                let closed_by_user = result.unwrap_or(false);
                this.resolved = Some(closed_by_user);
                Poll::Ready(closed_by_user)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Handle to a created notification.
#[derive(Debug)]
pub struct NotificationHandle {
    message_id: MessageId,
    on_close: OnClose,
}

impl NotificationHandle {
    pub(crate) fn new(message_id: MessageId, on_close: OnClose) -> Self {
        Self {
            message_id,
            on_close,
        }
    }

    /// Identity to pass to `remove`.
    #[must_use]
    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    /// Close signal of this notification.
    pub fn on_close(&mut self) -> &mut OnClose {
        &mut self.on_close
    }

    /// Splits the handle into its id and close signal.
    #[must_use]
    pub fn into_parts(self) -> (MessageId, OnClose) {
        (self.message_id, self.on_close)
    }
}
