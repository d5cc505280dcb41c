use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::registration::Registration;
use crate::tui::components::notification::NotificationLevel;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// Jump to a landing-page section (menu selection or deep link)
    Navigate(String),

    /// Request to show a toast notification
    Notify {
        message: String,
        level: NotificationLevel,
    },

    /// A validated registration is ready to be sent to the API
    SubmitRegistration(Box<Registration>),

    /// The API accepted the registration; payload is the success message
    RegistrationAccepted(String),

    /// The API rejected the registration or was unreachable
    RegistrationFailed(String),
}

/// Event handler bridging crossterm input and internal app events
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { receiver, sender }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<Event> {
        // Try to get crossterm events with timeout
        if let Ok(Ok(crossterm_event)) = timeout(
            Duration::from_millis(50),
            tokio::task::spawn_blocking(|| {
                if crossterm::event::poll(Duration::from_millis(50))? {
                    crossterm::event::read()
                } else {
                    Ok(CrosstermEvent::FocusGained) // placeholder, filtered below
                }
            }),
        )
        .await
        {
            if let Ok(event) = crossterm_event {
                if let Some(event) = Self::convert_crossterm_event(event) {
                    return Some(event);
                }
            }
        }

        // Check for internal events
        if let Ok(event) = self.receiver.try_recv() {
            return Some(event);
        }

        // Return tick event if no other events
        Some(Event::Tick)
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
            CrosstermEvent::Mouse(mouse_event) => Some(Event::Mouse(mouse_event)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            _ => None,
        }
    }

    /// Send an internal event
    pub fn send(&self, event: Event) -> Result<()> {
        self.sender.send(event)?;
        Ok(())
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
