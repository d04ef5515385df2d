// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the only entry point that mutates notifications. It
//! resolves options against its defaults, inserts records into the store,
//! drives their countdowns from `Tick` messages, reacts to hover and close
//! events coming back from the toast overlay, and resolves each close
//! signal exactly once.

use super::handle::{NotificationHandle, OnClose};
use super::notification::{
    Content, Kind, MessageId, Notification, NotificationDefaults, NotificationOptions, Placement,
    RemovalCause, TemplateRef,
};
use super::store::NoticeStore;
use super::timer::{Clock, SystemClock, TimerController, TimerState};
use crate::config::LEAVE_ANIMATION_MS;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Messages sent by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Pointer entered a notification card.
    PointerEnter(MessageId),
    /// Pointer left a notification card.
    PointerLeave(MessageId),
    /// User clicked the close button.
    Close(MessageId),
    /// Periodic tick checking auto-dismiss timers.
    Tick,
}

/// Owns every active notification and its timer.
pub struct Manager<C: Clock = SystemClock> {
    defaults: NotificationDefaults,
    store: NoticeStore,
    timers: TimerController,
    /// Close signal senders, taken when a notification is removed.
    closers: HashMap<MessageId, oneshot::Sender<bool>>,
    /// Expired notifications playing their exit animation, with removal time.
    leaving: BTreeMap<MessageId, Instant>,
    next_seq: u64,
    clock: C,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<C: Clock> std::fmt::Debug for Manager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("defaults", &self.defaults)
            .field("notifications", &self.store.len())
            .field("leaving", &self.leaving.len())
            .finish()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with built-in defaults and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(NotificationDefaults::default(), SystemClock)
    }

    /// Creates a manager with the given defaults and the system clock.
    #[must_use]
    pub fn with_defaults(defaults: NotificationDefaults) -> Self {
        Self::with_clock(defaults, SystemClock)
    }
}

impl<C: Clock> Manager<C> {
    /// Creates a manager reading time from `clock`.
    pub fn with_clock(defaults: NotificationDefaults, clock: C) -> Self {
        Self {
            defaults,
            store: NoticeStore::new(),
            timers: TimerController::new(),
            closers: HashMap::new(),
            leaving: BTreeMap::new(),
            next_seq: 0,
            clock,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle receiving lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Creates a notification, or replaces the one holding the same key.
    ///
    /// Unset options fall back to the current defaults. If the placement
    /// overflows its stack size, its oldest notifications are removed.
    pub fn create(
        &mut self,
        kind: Kind,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        let now = self.clock.now();
        let settings = self.defaults.resolve(&options);
        let id = match &options.key {
            Some(key) => MessageId::from(key.as_str()),
            None => self.generate_id(),
        };

        let notification = Notification::new(id.clone(), kind, content, now)
            .with_title(title)
            .with_key(options.key)
            .with_data(options.data.unwrap_or_default())
            .with_settings(&settings);
        let insertion = self.store.insert(notification, settings.max_stack);

        // The old countdown and signal must be gone before new ones are registered.
        if insertion.replaced.is_some() {
            self.timers.cancel(&id);
            self.leaving.remove(&id);
            self.resolve_close(&id, RemovalCause::Replaced);
            self.log(DiagnosticEventKind::Replaced { id: id.clone() });
        }

        self.timers.start(&id, settings.duration.as_duration(), now);
        let (tx, on_close) = OnClose::channel();
        self.closers.insert(id.clone(), tx);
        self.log(DiagnosticEventKind::Created {
            id: id.clone(),
            kind,
            placement: settings.placement,
            duration_ms: settings.duration.as_millis(),
        });

        // A replacement keeps its slot, so it can be the head that gets evicted.
        for evicted in insertion.evicted {
            self.finish_removal(evicted.id(), RemovalCause::Capacity);
        }

        NotificationHandle::new(id, on_close)
    }

    /// Creates a success notification.
    pub fn success(
        &mut self,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Success, title, content, options)
    }

    /// Creates an error notification.
    pub fn error(
        &mut self,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Error, title, content, options)
    }

    /// Creates a warning notification.
    pub fn warning(
        &mut self,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Warning, title, content, options)
    }

    /// Creates an info notification.
    pub fn info(
        &mut self,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Info, title, content, options)
    }

    /// Creates a notification without icon.
    pub fn blank(
        &mut self,
        title: impl Into<Content>,
        content: impl Into<Content>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Blank, title, content, options)
    }

    /// Creates a notification whose body is rendered from `template` with
    /// the `data` option as context.
    pub fn template(
        &mut self,
        template: TemplateRef,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.create(Kind::Template, Content::Empty, template, options)
    }

    /// Removes one notification, or all of them when `id` is `None`.
    ///
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: Option<&MessageId>) {
        match id {
            Some(id) => {
                if let Some(notification) = self.store.remove(id) {
                    self.finish_removal(notification.id(), RemovalCause::Programmatic);
                }
            }
            None => {
                for notification in self.store.clear() {
                    self.finish_removal(notification.id(), RemovalCause::Bulk);
                }
            }
        }
    }

    /// Merges `options` into the defaults used by later notifications.
    ///
    /// Existing notifications keep their settings. `key` and `data` are ignored.
    pub fn config(&mut self, options: &NotificationOptions) {
        self.defaults.merge(options);
        self.log(DiagnosticEventKind::ConfigChanged);
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::PointerEnter(id) => self.pointer_enter(id),
            Message::PointerLeave(id) => self.pointer_leave(id),
            Message::Close(id) => self.close(id),
            Message::Tick => self.tick(),
        }
    }

    /// Pauses the countdown of a hovered notification.
    pub fn pointer_enter(&mut self, id: &MessageId) {
        if !self.pauses_on_hover(id) {
            return;
        }
        let now = self.clock.now();
        if self.timers.pause(id, now) {
            self.log(DiagnosticEventKind::Paused { id: id.clone() });
        }
    }

    /// Resumes the countdown of a notification the pointer left.
    ///
    /// A countdown with no time left expires immediately.
    pub fn pointer_leave(&mut self, id: &MessageId) {
        if !self.pauses_on_hover(id) {
            return;
        }
        let now = self.clock.now();
        if self.timers.resume(id, now) {
            self.log(DiagnosticEventKind::Resumed { id: id.clone() });
            self.expire(now);
        }
    }

    /// Removes a notification closed by the user.
    pub fn close(&mut self, id: &MessageId) {
        if let Some(notification) = self.store.remove(id) {
            self.finish_removal(notification.id(), RemovalCause::User);
        }
    }

    /// Expires notifications whose countdown ran out and removes those
    /// whose exit animation finished.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.expire(now);
    }

    /// Notifications of `placement` in display order (oldest first).
    pub fn visible(&self, placement: Placement) -> impl Iterator<Item = &Notification> {
        self.store.all(placement)
    }

    /// Every notification, in placement then display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.store.iter()
    }

    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Notification> {
        self.store.get(id)
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of notifications in `placement`.
    #[must_use]
    pub fn count_in(&self, placement: Placement) -> usize {
        self.store.len_in(placement)
    }

    /// Returns whether there are any notifications.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Returns whether `id` expired and is playing its exit animation.
    #[must_use]
    pub fn is_leaving(&self, id: &MessageId) -> bool {
        self.leaving.contains_key(id)
    }

    /// Countdown state of `id`; `None` for sticky or unknown notifications.
    #[must_use]
    pub fn timer_state(&self, id: &MessageId) -> Option<TimerState> {
        self.timers.state(id)
    }

    /// Time left before `id` expires.
    #[must_use]
    pub fn remaining(&self, id: &MessageId) -> Option<Duration> {
        self.timers.remaining(id, self.clock.now())
    }

    /// Defaults applied to new notifications.
    #[must_use]
    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }

    fn expire(&mut self, now: Instant) {
        for fired in self.timers.poll(now) {
            let Some(animate) = self.store.get(&fired.id).map(Notification::animate) else {
                self.timers.cancel(&fired.id);
                continue;
            };
            self.log(DiagnosticEventKind::Expired {
                id: fired.id.clone(),
            });
            if animate {
                let until = fired.deadline + Duration::from_millis(LEAVE_ANIMATION_MS);
                self.leaving.insert(fired.id, until);
            } else if let Some(notification) = self.store.remove(&fired.id) {
                self.finish_removal(notification.id(), RemovalCause::Expired);
            }
        }

        let done: Vec<MessageId> = self
            .leaving
            .iter()
            .filter(|(_, until)| **until <= now)
            .map(|(id, _)| id.clone())
            .collect();
        for id in done {
            if let Some(notification) = self.store.remove(&id) {
                self.finish_removal(notification.id(), RemovalCause::Expired);
            }
        }
    }

    /// Completes the removal of a record already taken out of the store.
    fn finish_removal(&mut self, id: &MessageId, cause: RemovalCause) {
        self.timers.cancel(id);
        self.leaving.remove(id);
        self.resolve_close(id, cause);
        self.log(DiagnosticEventKind::Removed {
            id: id.clone(),
            cause,
        });
    }

    fn resolve_close(&mut self, id: &MessageId, cause: RemovalCause) {
        if let Some(tx) = self.closers.remove(id) {
            // The caller may have dropped its handle.
            let _ = tx.send(cause.closed_by_user());
        }
    }

    fn pauses_on_hover(&self, id: &MessageId) -> bool {
        !self.leaving.contains_key(id)
            && self
                .store
                .get(id)
                .is_some_and(Notification::pause_on_hover)
    }

    fn generate_id(&mut self) -> MessageId {
        loop {
            self.next_seq += 1;
            let id = MessageId::from(format!("notification-{}", self.next_seq));
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<C: Clock> Drop for Manager<C> {
    fn drop(&mut self) {
        for (_, tx) in self.closers.drain() {
            let _ = tx.send(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
    use crate::ui::notifications::timer::ManualClock;
    use serde_json::json;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn manager() -> (Manager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let manager = Manager::with_clock(NotificationDefaults::default(), clock.clone());
        (manager, clock)
    }

    fn contents(manager: &Manager<ManualClock>) -> Vec<String> {
        manager.iter().map(Notification::render_content).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert_eq!(manager.count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn convenience_constructors_set_kind() {
        let (mut manager, _) = manager();
        let options = NotificationOptions::new;
        let ids = [
            (manager.success("t", "S", options()), Kind::Success),
            (manager.error("t", "E", options()), Kind::Error),
            (manager.warning("t", "W", options()), Kind::Warning),
            (manager.info("t", "I", options()), Kind::Info),
            (manager.blank("t", "B", options()), Kind::Blank),
        ];

        for (handle, kind) in &ids {
            let notification = manager.get(handle.message_id()).expect("created");
            assert_eq!(notification.kind(), *kind);
            assert_eq!(notification.render_title(), "t");
        }
    }

    #[test]
    fn generated_ids_are_unique() {
        let (mut manager, _) = manager();
        let a = manager.blank(Content::Empty, "a", NotificationOptions::new());
        let b = manager.blank(Content::Empty, "b", NotificationOptions::new());
        assert_ne!(a.message_id(), b.message_id());
    }

    #[test]
    fn key_becomes_message_id() {
        let (mut manager, _) = manager();
        let handle = manager.blank(
            Content::Empty,
            "x",
            NotificationOptions::new().with_key("upload"),
        );
        assert_eq!(handle.message_id().as_str(), "upload");
        assert_eq!(
            manager.get(handle.message_id()).and_then(Notification::key),
            Some("upload")
        );
    }

    #[test]
    fn expires_after_duration_plus_exit_animation() {
        let (mut manager, clock) = manager();
        let mut handle = manager.create(
            Kind::Blank,
            Content::Empty,
            "EXISTS",
            NotificationOptions::new().with_duration_ms(1000),
        );
        let id = handle.message_id().clone();

        clock.advance(ms(999));
        manager.tick();
        assert!(manager.get(&id).is_some());
        assert!(!manager.is_leaving(&id));

        clock.advance(ms(101));
        manager.tick();
        assert!(manager.is_leaving(&id));
        assert!(manager.get(&id).is_some());

        clock.advance(ms(110));
        manager.tick();
        assert!(manager.get(&id).is_none());
        assert_eq!(handle.on_close().try_result(), Some(false));
    }

    #[test]
    fn single_late_tick_removes_animated_notification() {
        let (mut manager, clock) = manager();
        manager.create(
            Kind::Blank,
            Content::Empty,
            "EXISTS",
            NotificationOptions::new().with_duration_ms(1000),
        );

        clock.advance(ms(1210));
        manager.tick();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn without_animation_removal_is_immediate() {
        let (mut manager, clock) = manager();
        manager.error(
            Content::Empty,
            "EXISTS",
            NotificationOptions::new()
                .with_duration_ms(1000)
                .with_animate(false),
        );

        clock.advance(ms(1000));
        manager.tick();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn sticky_notification_stays_until_removed() {
        let (mut manager, clock) = manager();
        let handle = manager.success(
            "title",
            "SUCCESS",
            NotificationOptions::new().with_duration_ms(0),
        );

        clock.advance(ms(50_000));
        manager.tick();
        assert!(manager.get(handle.message_id()).is_some());
        assert!(manager.timer_state(handle.message_id()).is_none());

        manager.remove(Some(handle.message_id()));
        assert!(manager.get(handle.message_id()).is_none());
    }

    #[test]
    fn hover_pauses_and_leave_resumes_remaining_time() {
        let (mut manager, clock) = manager();
        let handle = manager.create(
            Kind::Blank,
            Content::Empty,
            "EXISTS",
            NotificationOptions::new().with_duration_ms(3000),
        );
        let id = handle.message_id().clone();

        clock.advance(ms(1000));
        manager.handle_message(&Message::PointerEnter(id.clone()));
        assert_eq!(manager.timer_state(&id), Some(TimerState::Paused));

        clock.advance(ms(50_000));
        manager.tick();
        assert!(manager.get(&id).is_some());

        manager.handle_message(&Message::PointerLeave(id.clone()));
        assert_eq!(manager.remaining(&id), Some(ms(2000)));

        clock.advance(ms(1999));
        manager.tick();
        assert!(!manager.is_leaving(&id));

        clock.advance(ms(1 + LEAVE_ANIMATION_MS));
        manager.tick();
        assert!(manager.get(&id).is_none());
    }

    #[test]
    fn hover_is_ignored_when_disabled() {
        let (mut manager, _) = manager();
        let handle = manager.info(
            Content::Empty,
            "x",
            NotificationOptions::new().with_pause_on_hover(false),
        );
        manager.pointer_enter(handle.message_id());
        assert_eq!(
            manager.timer_state(handle.message_id()),
            Some(TimerState::Running)
        );
    }

    #[test]
    fn user_close_resolves_true() {
        let (mut manager, _) = manager();
        let mut handle = manager.create(
            Kind::Blank,
            Content::Empty,
            "close",
            NotificationOptions::new(),
        );
        manager.handle_message(&Message::Close(handle.message_id().clone()));

        assert_eq!(handle.on_close().try_result(), Some(true));
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn programmatic_remove_resolves_false() {
        let (mut manager, _) = manager();
        let mut handle = manager.blank(Content::Empty, "x", NotificationOptions::new());
        manager.remove(Some(&handle.message_id().clone()));
        assert_eq!(handle.on_close().try_result(), Some(false));
    }

    #[test]
    fn close_after_expiry_does_not_resolve_twice() {
        let (mut manager, clock) = manager();
        let mut handle = manager.blank(
            Content::Empty,
            "x",
            NotificationOptions::new()
                .with_duration_ms(100)
                .with_animate(false),
        );
        let id = handle.message_id().clone();

        clock.advance(ms(100));
        manager.tick();
        manager.close(&id);
        manager.remove(Some(&id));

        assert_eq!(handle.on_close().try_result(), Some(false));
    }

    #[test]
    fn user_close_during_exit_animation_wins() {
        let (mut manager, clock) = manager();
        let mut handle = manager.blank(
            Content::Empty,
            "x",
            NotificationOptions::new().with_duration_ms(100),
        );
        let id = handle.message_id().clone();

        clock.advance(ms(150));
        manager.tick();
        assert!(manager.is_leaving(&id));

        manager.close(&id);
        assert!(!manager.is_leaving(&id));
        assert_eq!(handle.on_close().try_result(), Some(true));
    }

    #[test]
    fn hover_during_exit_animation_has_no_effect() {
        let (mut manager, clock) = manager();
        let handle = manager.blank(
            Content::Empty,
            "x",
            NotificationOptions::new().with_duration_ms(100),
        );
        let id = handle.message_id().clone();

        clock.advance(ms(100));
        manager.tick();
        manager.pointer_enter(&id);
        clock.advance(ms(LEAVE_ANIMATION_MS));
        manager.tick();

        assert!(manager.get(&id).is_none());
    }

    #[test]
    fn capacity_evicts_oldest_and_resolves_false() {
        let (mut manager, _) = manager();
        manager.config(&NotificationOptions::new().with_max_stack(2));

        let mut first = manager.success(Content::Empty, "SUCCESS-1", NotificationOptions::new());
        manager.success(Content::Empty, "SUCCESS-2", NotificationOptions::new());
        manager.success(Content::Empty, "SUCCESS-3", NotificationOptions::new());

        assert_eq!(contents(&manager), vec!["SUCCESS-2", "SUCCESS-3"]);
        assert_eq!(first.on_close().try_result(), Some(false));
        assert!(manager.timer_state(first.message_id()).is_none());
    }

    #[test]
    fn same_key_replaces_in_place() {
        let (mut manager, _) = manager();
        manager.blank(Content::Empty, "before", NotificationOptions::new());
        let mut old = manager.create(
            Kind::Blank,
            Content::Empty,
            "EXISTS",
            NotificationOptions::new().with_key("exists"),
        );
        manager.blank(Content::Empty, "after", NotificationOptions::new());

        let new = manager.create(
            Kind::Success,
            "Title",
            "SHOULD NOT CHANGE",
            NotificationOptions::new().with_key("exists"),
        );

        assert_eq!(contents(&manager), vec!["before", "SHOULD NOT CHANGE", "after"]);
        let replaced = manager.get(new.message_id()).expect("replacement");
        assert_eq!(replaced.kind(), Kind::Success);
        assert_eq!(replaced.render_title(), "Title");
        assert_eq!(old.on_close().try_result(), Some(false));
    }

    #[test]
    fn replacement_restarts_countdown() {
        let (mut manager, clock) = manager();
        manager.blank(
            Content::Empty,
            "v1",
            NotificationOptions::new()
                .with_key("k")
                .with_duration_ms(1000)
                .with_animate(false),
        );
        clock.advance(ms(900));
        let handle = manager.blank(
            Content::Empty,
            "v2",
            NotificationOptions::new()
                .with_key("k")
                .with_duration_ms(1000)
                .with_animate(false),
        );

        clock.advance(ms(200));
        manager.tick();
        assert!(manager.get(handle.message_id()).is_some());

        clock.advance(ms(800));
        manager.tick();
        assert!(manager.get(handle.message_id()).is_none());
    }

    #[test]
    fn replacement_can_make_notification_sticky() {
        let (mut manager, clock) = manager();
        manager.blank(
            Content::Empty,
            "v1",
            NotificationOptions::new().with_key("k").with_duration_ms(100),
        );
        let handle = manager.blank(
            Content::Empty,
            "v2",
            NotificationOptions::new().with_key("k").with_duration_ms(0),
        );

        clock.advance(ms(10_000));
        manager.tick();
        assert!(manager.get(handle.message_id()).is_some());
    }

    #[test]
    fn remove_all_clears_every_placement() {
        let (mut manager, _) = manager();
        let mut handles = vec![
            manager.blank(Content::Empty, "a", NotificationOptions::new()),
            manager.blank(
                Content::Empty,
                "b",
                NotificationOptions::new().with_placement(Placement::BottomLeft),
            ),
        ];

        manager.remove(None);
        assert_eq!(manager.count(), 0);
        for handle in &mut handles {
            assert_eq!(handle.on_close().try_result(), Some(false));
        }
    }

    #[test]
    fn remove_unknown_id_is_ignored() {
        let (mut manager, _) = manager();
        manager.blank(Content::Empty, "a", NotificationOptions::new());
        manager.remove(Some(&MessageId::from("ghost")));
        manager.close(&MessageId::from("ghost"));
        manager.pointer_enter(&MessageId::from("ghost"));
        manager.pointer_leave(&MessageId::from("ghost"));
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn config_only_affects_later_notifications() {
        let (mut manager, clock) = manager();
        let early = manager.blank(
            Content::Empty,
            "early",
            NotificationOptions::new().with_animate(false),
        );
        manager.config(&NotificationOptions::new().with_duration_ms(0));
        let late = manager.blank(Content::Empty, "late", NotificationOptions::new());

        clock.advance(ms(50_000));
        manager.tick();
        assert!(manager.get(early.message_id()).is_none());
        assert!(manager.get(late.message_id()).is_some());
    }

    #[test]
    fn config_sets_default_placement() {
        let (mut manager, _) = manager();
        manager.config(&NotificationOptions::new().with_placement(Placement::TopLeft));
        manager.blank(Content::Empty, "EXISTS", NotificationOptions::new());

        assert_eq!(manager.count_in(Placement::TopLeft), 1);
        assert_eq!(manager.count_in(Placement::TopRight), 0);
    }

    #[test]
    fn negative_duration_is_sticky() {
        let (mut manager, clock) = manager();
        let handle = manager.blank(
            Content::Empty,
            "x",
            NotificationOptions::new().with_duration_ms(-5),
        );
        clock.advance(ms(100_000));
        manager.tick();
        assert!(manager.get(handle.message_id()).is_some());
    }

    #[test]
    fn template_renders_data() {
        let (mut manager, _) = manager();
        let template = TemplateRef::new(|data| {
            format!("test template content{}", data.as_str().unwrap_or_default())
        });
        let handle = manager.template(template, NotificationOptions::new().with_data(json!("data")));

        let notification = manager.get(handle.message_id()).expect("created");
        assert_eq!(notification.kind(), Kind::Template);
        assert_eq!(notification.render_content(), "test template contentdata");
    }

    #[test]
    fn replacement_evicted_by_lowered_stack_resolves_false() {
        let (mut manager, clock) = manager();
        manager.blank(
            Content::Empty,
            "k-v1",
            NotificationOptions::new().with_key("k"),
        );
        manager.blank(Content::Empty, "b", NotificationOptions::new());
        manager.blank(Content::Empty, "c", NotificationOptions::new());
        manager.config(&NotificationOptions::new().with_max_stack(2));

        let mut handle = manager.create(
            Kind::Success,
            "T",
            "k-v2",
            NotificationOptions::new().with_key("k"),
        );
        let id = handle.message_id().clone();

        assert!(manager.get(&id).is_none());
        assert_eq!(contents(&manager), vec!["b", "c"]);
        assert_eq!(handle.on_close().try_result(), Some(false));
        assert!(manager.timer_state(&id).is_none());
        assert!(!manager.closers.contains_key(&id));
        assert_eq!(manager.timers.len(), 2);

        clock.advance(ms(60_000));
        manager.tick();
        assert!(manager.get(&id).is_none());
        assert_eq!(handle.on_close().try_result(), Some(false));
    }

    #[test]
    fn hover_on_sticky_notification_has_no_effect() {
        let (mut manager, clock) = manager();
        let handle = manager.blank(
            Content::Empty,
            "sticky",
            NotificationOptions::new().with_duration_ms(0),
        );
        let id = handle.message_id().clone();

        manager.handle_message(&Message::PointerEnter(id.clone()));
        assert!(manager.timer_state(&id).is_none());
        manager.handle_message(&Message::PointerLeave(id.clone()));
        assert!(manager.timer_state(&id).is_none());

        clock.advance(ms(100_000));
        manager.tick();
        assert!(manager.get(&id).is_some());
        assert!(!manager.is_leaving(&id));
    }

    #[test]
    fn dropping_manager_resolves_pending_signals() {
        let (mut manager, _) = manager();
        let mut handle = manager.blank(Content::Empty, "x", NotificationOptions::new());
        drop(manager);
        assert_eq!(handle.on_close().try_result(), Some(false));
    }

    #[test]
    fn lifecycle_is_reported_to_diagnostics() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let (mut manager, _) = manager();
        manager.set_diagnostics(collector.handle());

        let handle = manager.blank(Content::Empty, "x", NotificationOptions::new());
        let id = handle.message_id().clone();
        manager.pointer_enter(&id);
        manager.pointer_leave(&id);
        manager.close(&id);

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Created {
                    id: id.clone(),
                    kind: Kind::Blank,
                    placement: Placement::TopRight,
                    duration_ms: 4500,
                },
                DiagnosticEventKind::Paused { id: id.clone() },
                DiagnosticEventKind::Resumed { id: id.clone() },
                DiagnosticEventKind::Removed {
                    id,
                    cause: RemovalCause::User,
                },
            ]
        );
    }
}
