//! Application state and event routing
//!
//! Owns the landing page, the dialog registry, the notification stack and
//! the interactive components embedded in dialogs (slide menu and
//! registration form). All input funnels through `handle_event`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

use anyhow::Result;

use crate::api::ApiClient;
use crate::config::Config;
use crate::registration::Registration;
use crate::route::RoutePath;
use crate::tui::components::dialog::{
    Dialog, DialogHooks, DialogId, DialogOptions, DialogRegistry, Extent,
};
use crate::tui::components::form::RegistrationForm;
use crate::tui::components::menu::SlideMenu;
use crate::tui::components::notification::{NotificationLevel, NotificationStack};
use crate::tui::components::Component;
use crate::tui::events::Event;
use crate::tui::pages::HomePage;
use crate::tui::themes::Theme;
use crate::tui::Frame;

/// Top-level application state
pub struct App {
    config: Config,
    theme: Theme,
    page: HomePage,

    registry: DialogRegistry,
    notifications: NotificationStack,

    form: Option<RegistrationForm>,
    form_dialog: Option<DialogId>,
    menu: Option<SlideMenu>,
    menu_dialog: Option<DialogId>,

    /// Slide-menu trigger hidden while the menu is open (hook-driven)
    menu_open: Arc<AtomicBool>,
    /// Page scroll/interaction locked while a modal is open (hook-driven)
    scroll_locked: Arc<AtomicBool>,

    api: ApiClient,
    event_tx: mpsc::UnboundedSender<Event>,
    viewport: Rect,
}

impl App {
    pub fn new(config: Config, route: RoutePath, event_tx: mpsc::UnboundedSender<Event>) -> Self {
        let mut page = HomePage::new(config.event_name.clone());
        if let Some(section) = route.hash.as_deref().or(route.route.as_deref()) {
            page.set_section(section);
        }

        let api = ApiClient::new(config.endpoint.clone());
        let mut app = Self {
            theme: Theme::default(),
            page,
            registry: DialogRegistry::new(),
            notifications: NotificationStack::new(),
            form: None,
            form_dialog: None,
            menu: None,
            menu_dialog: None,
            menu_open: Arc::new(AtomicBool::new(false)),
            scroll_locked: Arc::new(AtomicBool::new(false)),
            api,
            event_tx,
            config,
            viewport: Rect::new(0, 0, 80, 24),
        };

        // Deep link straight into the registration form
        if route.route.as_deref() == Some("register") {
            app.open_registration();
        }
        app
    }

    /// Handle one event; returns true when the app should exit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => return self.handle_key(key).await,
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    self.registry.handle_click(mouse.column, mouse.row);
                    self.sync_components();
                }
            }
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                self.registry.relayout_all(self.viewport);
            }
            Event::Tick => {
                let now = Instant::now();
                self.registry.tick(now);
                self.notifications.tick(now);
                self.sync_components();
            }
            Event::Navigate(section) => {
                if let Some(id) = self.menu_dialog.clone() {
                    self.registry.close(&id);
                    self.sync_components();
                }
                if section == "register" {
                    self.open_registration();
                } else {
                    self.page.set_section(&section);
                }
            }
            Event::Notify { message, level } => {
                self.notifications
                    .push(message, level, self.config.notification_timeout, true);
            }
            Event::SubmitRegistration(registration) => {
                self.submit_registration(*registration);
            }
            Event::RegistrationAccepted(message) => {
                info!("Registration accepted");
                if let Some(form) = &mut self.form {
                    form.mark_completed();
                }
                self.form = None;
                if let Some(id) = &self.form_dialog {
                    if let Some(dialog) = self.registry.get_mut(id) {
                        dialog.set_body(success_body(&message));
                    }
                }
            }
            Event::RegistrationFailed(message) => {
                self.notifications.push(
                    message,
                    NotificationLevel::Error,
                    self.config.notification_timeout,
                    true,
                );
            }
        }
        Ok(false)
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.registry.has_visible() {
            if key.code == KeyCode::Esc {
                // Single Escape dispatcher; suppressed while typing in a
                // text input
                self.registry.handle_escape(self.is_editing());
                self.sync_components();
                return Ok(false);
            }

            // Route remaining keys to the component in the topmost dialog
            if self.menu_dialog_visible() {
                if let Some(menu) = &mut self.menu {
                    menu.handle_key_event(key).await?;
                }
            } else if self.form_dialog_visible() {
                if let Some(form) = &mut self.form {
                    form.handle_key_event(key).await?;
                }
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('r') => self.open_registration(),
            KeyCode::Char('m') => self.open_menu(),
            _ => {}
        }
        Ok(false)
    }

    /// Open the registration modal, closing any dialogs left open first
    pub fn open_registration(&mut self) {
        self.registry.close_all_open();
        self.sync_components();

        let mut form = RegistrationForm::new(self.config.max_team_members);
        form.set_event_sender(self.event_tx.clone());

        let locked_on_show = Arc::clone(&self.scroll_locked);
        let locked_on_close = Arc::clone(&self.scroll_locked);
        let options = DialogOptions::new()
            .size(Extent::Percent(70), Extent::Percent(80))
            .close_on_outside_click(false)
            .hooks(
                DialogHooks::default()
                    .on_show(move || locked_on_show.store(true, Ordering::SeqCst))
                    .on_close(move || locked_on_close.store(false, Ordering::SeqCst)),
            );

        let id = self
            .registry
            .open(Dialog::new(Text::default(), options, self.viewport));
        debug!("Opened registration dialog {}", id);

        self.form = Some(form);
        self.form_dialog = Some(id);
    }

    /// Open the slide menu pinned to the top-left corner
    pub fn open_menu(&mut self) {
        if self.menu_dialog_visible() {
            return;
        }

        let mut menu = SlideMenu::new();
        menu.set_event_sender(self.event_tx.clone());

        let open_on_show = Arc::clone(&self.menu_open);
        let open_on_close = Arc::clone(&self.menu_open);
        let options = DialogOptions::new()
            .position(0, 0)
            .size(Extent::Cells(28), Extent::Percent(100))
            .hooks(
                DialogHooks::default()
                    .on_show(move || open_on_show.store(true, Ordering::SeqCst))
                    .on_close(move || open_on_close.store(false, Ordering::SeqCst)),
            );

        let id = self
            .registry
            .open(Dialog::new(Text::default(), options, self.viewport));
        debug!("Opened slide menu dialog {}", id);

        self.menu = Some(menu);
        self.menu_dialog = Some(id);
    }

    /// Fire the API call without blocking the UI loop
    fn submit_registration(&self, registration: Registration) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match api.submit_registration(&registration).await {
                Ok(message) => {
                    let _ = tx.send(Event::RegistrationAccepted(message));
                }
                Err(e) => {
                    let _ = tx.send(Event::RegistrationFailed(e.to_string()));
                }
            }
        });
    }

    /// Drop embedded components whose dialog has been closed elsewhere
    fn sync_components(&mut self) {
        if let Some(id) = &self.form_dialog {
            if self.registry.get(id).is_none() {
                self.form = None;
                self.form_dialog = None;
            }
        }
        if let Some(id) = &self.menu_dialog {
            if self.registry.get(id).is_none() {
                self.menu = None;
                self.menu_dialog = None;
            }
        }
    }

    fn form_dialog_visible(&self) -> bool {
        self.form_dialog
            .as_ref()
            .and_then(|id| self.registry.get(id))
            .map_or(false, Dialog::is_visible)
    }

    fn menu_dialog_visible(&self) -> bool {
        self.menu_dialog
            .as_ref()
            .and_then(|id| self.registry.get(id))
            .map_or(false, Dialog::is_visible)
    }

    /// Whether focus currently sits inside a text input
    fn is_editing(&self) -> bool {
        self.form_dialog_visible() && self.form.as_ref().map_or(false, RegistrationForm::is_editing)
    }

    /// Render one frame
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        if area != self.viewport {
            self.viewport = area;
            self.registry.relayout_all(area);
        }

        let dimmed = self.scroll_locked.load(Ordering::SeqCst) || self.registry.has_visible();
        let menu_hint = !self.menu_open.load(Ordering::SeqCst);
        self.page.render(frame, area, &self.theme, dimmed, menu_hint);

        self.registry.render(frame, &self.theme);

        // Interactive dialog bodies are drawn over the dialog chrome
        if self.menu_dialog_visible() {
            let content = self
                .menu_dialog
                .as_ref()
                .and_then(|id| self.registry.get(id))
                .map(Dialog::content_area);
            if let (Some(menu), Some(content)) = (&mut self.menu, content) {
                menu.render(frame, content, &self.theme);
            }
        }
        if self.form_dialog_visible() {
            let content = self
                .form_dialog
                .as_ref()
                .and_then(|id| self.registry.get(id))
                .map(Dialog::content_area);
            if let (Some(form), Some(content)) = (&mut self.form, content) {
                form.render(frame, content, &self.theme);
            }
        }

        // Non-floating toasts land in the slot directly under the header
        let toast_container = Rect {
            x: area.x,
            y: area.y.saturating_add(3),
            width: area.width,
            height: 1,
        };
        self.notifications
            .render(frame, area, toast_container, &self.theme);
    }
}

fn success_body(message: &str) -> Text<'static> {
    Text::from(vec![
        Line::default(),
        Line::from(Span::raw(format!("  ✔  {message}"))),
        Line::default(),
        Line::from(Span::raw("  Press Esc to close this window.")),
    ])
}
