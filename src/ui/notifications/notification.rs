// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record kept by the store, its
//! `Kind` and `Placement`, the text-or-template `Content`, and the per-call
//! `NotificationOptions` merged over `NotificationDefaults`.

use crate::config::{DEFAULT_ANIMATE, DEFAULT_PAUSE_ON_HOVER};
use crate::domain::notification::{DismissDuration, MaxStack};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Identity of a notification.
///
/// Either the caller-supplied key or an identifier generated by the manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MessageId(String);

impl MessageId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Kind determines the icon and accent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Success,
    Error,
    Warning,
    Info,
    /// Plain card without icon.
    #[default]
    Blank,
    /// Content rendered from a caller template.
    Template,
}

impl Kind {
    /// Returns the icon glyph for this kind, `None` for blank and template cards.
    #[must_use]
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Kind::Success => Some("✔"),
            Kind::Error => Some("✖"),
            Kind::Warning => Some("!"),
            Kind::Info => Some("i"),
            Kind::Blank | Kind::Template => None,
        }
    }
}

/// Screen corner a notification is stacked in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Placement {
    /// All placements, in rendering order.
    pub const ALL: [Placement; 4] = [
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Placement::TopLeft | Placement::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Placement::TopLeft | Placement::BottomLeft)
    }
}

impl std::str::FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topLeft" | "top-left" => Ok(Placement::TopLeft),
            "topRight" | "top-right" => Ok(Placement::TopRight),
            "bottomLeft" | "bottom-left" => Ok(Placement::BottomLeft),
            "bottomRight" | "bottom-right" => Ok(Placement::BottomRight),
            other => Err(format!("unknown placement: {other}")),
        }
    }
}

type RenderFn = dyn Fn(&Value) -> String + Send + Sync;

/// Caller-provided template, rendered with the notification's data payload.
#[derive(Clone)]
pub struct TemplateRef(Arc<RenderFn>);

impl TemplateRef {
    pub fn new(render: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Renders the template with `data` as context.
    #[must_use]
    pub fn render(&self, data: &Value) -> String {
        (self.0)(data)
    }
}

impl fmt::Debug for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TemplateRef(..)")
    }
}

/// Title or body of a notification.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Template(TemplateRef),
}

impl Content {
    /// Resolves the content to display text.
    #[must_use]
    pub fn render(&self, data: &Value) -> String {
        match self {
            Content::Empty => String::new(),
            Content::Text(text) => text.clone(),
            Content::Template(template) => template.render(data),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Empty => true,
            Content::Text(text) => text.is_empty(),
            Content::Template(_) => false,
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<TemplateRef> for Content {
    fn from(value: TemplateRef) -> Self {
        Content::Template(value)
    }
}

/// Per-call options. Unset fields fall back to the manager's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationOptions {
    /// Auto-dismiss delay; zero or negative disables it.
    pub duration_ms: Option<i64>,
    pub animate: Option<bool>,
    pub placement: Option<Placement>,
    /// Identity key; a second notification with the same key replaces the first.
    pub key: Option<String>,
    /// Context payload passed to templates.
    pub data: Option<Value>,
    pub max_stack: Option<usize>,
    pub pause_on_hover: Option<bool>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    #[must_use]
    pub fn with_max_stack(mut self, max_stack: usize) -> Self {
        self.max_stack = Some(max_stack);
        self
    }

    #[must_use]
    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }
}

/// Manager-wide defaults applied to every new notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub duration: DismissDuration,
    pub animate: bool,
    pub placement: Placement,
    pub max_stack: MaxStack,
    pub pause_on_hover: bool,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            duration: DismissDuration::default(),
            animate: DEFAULT_ANIMATE,
            placement: Placement::default(),
            max_stack: MaxStack::default(),
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
        }
    }
}

impl NotificationDefaults {
    /// Overwrites the defaults with every option that is set.
    ///
    /// `key` and `data` are per-notification and ignored here.
    pub fn merge(&mut self, options: &NotificationOptions) {
        if let Some(ms) = options.duration_ms {
            self.duration = DismissDuration::from_millis(ms);
        }
        if let Some(animate) = options.animate {
            self.animate = animate;
        }
        if let Some(placement) = options.placement {
            self.placement = placement;
        }
        if let Some(max_stack) = options.max_stack {
            self.max_stack = MaxStack::new(max_stack);
        }
        if let Some(pause_on_hover) = options.pause_on_hover {
            self.pause_on_hover = pause_on_hover;
        }
    }

    /// Returns a copy with `options` applied.
    #[must_use]
    pub fn resolve(&self, options: &NotificationOptions) -> Self {
        let mut resolved = *self;
        resolved.merge(options);
        resolved
    }
}

/// Why a notification left the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalCause {
    /// The user clicked the close button.
    User,
    /// The auto-dismiss timer fired.
    Expired,
    /// Evicted to respect the placement's stack size.
    Capacity,
    /// Removed by a remove-all call.
    Bulk,
    /// Removed by id.
    Programmatic,
    /// Superseded by a notification with the same key.
    Replaced,
}

impl RemovalCause {
    /// Value the close signal resolves with.
    #[must_use]
    pub fn closed_by_user(self) -> bool {
        matches!(self, RemovalCause::User)
    }
}

/// A notification as held by the store.
#[derive(Debug, Clone)]
pub struct Notification {
    id: MessageId,
    key: Option<String>,
    kind: Kind,
    title: Content,
    content: Content,
    data: Value,
    duration: DismissDuration,
    animate: bool,
    placement: Placement,
    pause_on_hover: bool,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with default settings.
    pub fn new(
        id: impl Into<MessageId>,
        kind: Kind,
        content: impl Into<Content>,
        created_at: Instant,
    ) -> Self {
        Self {
            id: id.into(),
            key: None,
            kind,
            title: Content::Empty,
            content: content.into(),
            data: Value::Null,
            duration: DismissDuration::default(),
            animate: DEFAULT_ANIMATE,
            placement: Placement::default(),
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
            created_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<Content>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Applies the resolved duration, animation, placement and hover settings.
    #[must_use]
    pub fn with_settings(mut self, settings: &NotificationDefaults) -> Self {
        self.duration = settings.duration;
        self.animate = settings.animate;
        self.placement = settings.placement;
        self.pause_on_hover = settings.pause_on_hover;
        self
    }

    #[must_use]
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &Content {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn duration(&self) -> DismissDuration {
        self.duration
    }

    #[must_use]
    pub fn animate(&self) -> bool {
        self.animate
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Title text, with templates rendered against the data payload.
    #[must_use]
    pub fn render_title(&self) -> String {
        self.title.render(&self.data)
    }

    /// Body text, with templates rendered against the data payload.
    #[must_use]
    pub fn render_content(&self) -> String {
        self.content.render(&self.data)
    }

    /// Returns whether this notification expires on its own.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        !self.duration.is_sticky()
    }
}
