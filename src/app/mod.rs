// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the notification manager.
//!
//! The `App` struct wires the manager to persisted defaults, a diagnostics
//! collector and an iced window. Buttons create notifications, the toast
//! overlay reports hover and close events back, and a periodic tick drives
//! auto-dismiss.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::notifications::{
    self, Content, Kind, Manager, NotificationOptions, Placement, TemplateRef,
};
use iced::{window, Element, Subscription, Task, Theme};
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

/// Key of the notification updated in place by the "Keyed" button.
const PROGRESS_KEY: &str = "demo-progress";

/// File name of the exported lifecycle log, written to the temp directory.
const DIAGNOSTICS_FILE: &str = "iced_toasts_diagnostics.json";

/// Root iced application state.
pub struct App {
    notifications: Manager,
    diagnostics: DiagnosticsCollector,
    config: Config,
    /// Times the keyed or template buttons were pressed.
    counter: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.count())
            .field("config", &self.config)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads persisted defaults, applies CLI overrides and builds the manager.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, load_error) = match config::load() {
            Ok(config) => (config, None),
            Err(error) => (Config::default(), Some(error)),
        };
        let mut app = Self::with_config(apply_flags(config, &flags));

        if let Some(error) = load_error {
            app.notifications.error(
                "Settings not loaded",
                error.to_string(),
                NotificationOptions::new(),
            );
        }

        (app, Task::none())
    }

    fn with_config(config: Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics_capacity());
        let mut notifications = Manager::with_defaults(config.notification_defaults());
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            notifications,
            diagnostics,
            config,
            counter: 0,
        }
    }

    fn title(&self) -> String {
        match self.notifications.count() {
            0 => "Iced Toasts".to_string(),
            count => format!("({count}) Iced Toasts"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
            }
            Message::Tick(_) => {
                self.notifications.handle_message(&notifications::Message::Tick);
                self.diagnostics.process_pending();
            }
            Message::Show(kind) => {
                self.notifications.create(
                    kind,
                    kind_title(kind),
                    "This notification closes on its own unless hovered.",
                    NotificationOptions::new(),
                );
            }
            Message::ShowSticky => {
                self.notifications.info(
                    "Sticky",
                    "Stays until closed.",
                    NotificationOptions::new().with_duration_ms(0),
                );
            }
            Message::ShowKeyed => {
                self.counter += 1;
                self.notifications.info(
                    "Progress",
                    format!("Step {} completed", self.counter),
                    NotificationOptions::new().with_key(PROGRESS_KEY),
                );
            }
            Message::ShowTemplate => {
                self.counter += 1;
                let template = TemplateRef::new(|data| {
                    let target = data["target"].as_str().unwrap_or("?");
                    format!("Uploaded {} files to {target}", data["files"])
                });
                self.notifications.template(
                    template,
                    NotificationOptions::new().with_data(json!({
                        "files": self.counter,
                        "target": "archive",
                    })),
                );
            }
            Message::RemoveAll => self.notifications.remove(None),
            Message::PlacementSelected(placement) => self.select_placement(placement),
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
            placement: self.notifications.defaults().placement,
        })
    }

    fn select_placement(&mut self, placement: Placement) {
        self.notifications
            .config(&NotificationOptions::new().with_placement(placement));
        self.config.placement = Some(placement);

        if let Err(error) = config::save(&self.config) {
            self.notifications.error(
                "Settings not saved",
                error.to_string(),
                NotificationOptions::new(),
            );
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = diagnostics_path();
        match self.diagnostics.export_to_path(&path) {
            Ok(()) => {
                self.notifications.success(
                    "Log exported",
                    path.display().to_string(),
                    NotificationOptions::new(),
                );
            }
            Err(error) => {
                self.notifications.error(
                    "Export failed",
                    error.to_string(),
                    NotificationOptions::new(),
                );
            }
        }
    }
}

/// Overrides persisted values with the ones given on the command line.
fn apply_flags(mut config: Config, flags: &Flags) -> Config {
    if flags.placement.is_some() {
        config.placement = flags.placement;
    }
    if flags.max_stack.is_some() {
        config.max_stack = flags.max_stack;
    }
    if flags.duration_ms.is_some() {
        config.duration_ms = flags.duration_ms;
    }
    config
}

fn diagnostics_path() -> PathBuf {
    std::env::temp_dir().join(DIAGNOSTICS_FILE)
}

fn kind_title(kind: Kind) -> Content {
    match kind {
        Kind::Success => "Done".into(),
        Kind::Error => "Something failed".into(),
        Kind::Warning => "Careful".into(),
        Kind::Info => "Heads up".into(),
        Kind::Blank | Kind::Template => Content::Empty,
    }
}
