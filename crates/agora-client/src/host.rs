//! External delegations: page location, new browsing contexts, the system
//! clipboard and the toast surface.
//!
//! Components only talk to the outside world through [`Host`], so the same
//! code drives a real front end or the in-memory [`MemoryHost`].

use agora_shared::FeedError;
use thiserror::Error;

use crate::events::Toast;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Could not open window: {0}")]
    Navigation(String),
}

impl From<HostError> for FeedError {
    fn from(e: HostError) -> Self {
        FeedError::Host(e.to_string())
    }
}

pub trait Host {
    /// Current page location.
    fn location(&self) -> String;

    /// Open `url` in a new browsing context. No response is consumed.
    fn open_window(&mut self, url: &str, features: &str) -> Result<(), HostError>;

    /// Write plain text to the clipboard.
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError>;

    /// Surface a transient notification.
    fn toast(&mut self, toast: Toast);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub features: String,
}

/// Host that keeps every delegation in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    location: String,
    clipboard: Option<String>,
    opened: Vec<OpenedWindow>,
    toasts: Vec<Toast>,
}

impl MemoryHost {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn opened(&self) -> &[OpenedWindow] {
        &self.opened
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    pub fn drain_opened(&mut self) -> Vec<OpenedWindow> {
        std::mem::take(&mut self.opened)
    }
}

impl Host for MemoryHost {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn open_window(&mut self, url: &str, features: &str) -> Result<(), HostError> {
        self.opened.push(OpenedWindow {
            url: url.to_string(),
            features: features.to_string(),
        });
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn toast(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, description = %toast.description, "Toast");
        self.toasts.push(toast);
    }
}
