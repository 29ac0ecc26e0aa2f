//! Top-level application messages.

use iced::widget::image;

use crate::state::Route;
use crate::views::{chat, documents, wizard};

/// Root message wrapping navigation, logo resolution, and the per-page
/// message enums.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the visible page.
    Navigate(Route),
    /// Result of fetching the tenant logo.
    LogoFetched(Result<image::Handle, String>),
    Chat(chat::Message),
    Documents(documents::Message),
    Wizard(wizard::Message),
}

impl Message {
    /// Message name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Message::Navigate(_) => "Navigate",
            Message::LogoFetched(_) => "LogoFetched",
            Message::Chat(_) => "Chat",
            Message::Documents(_) => "Documents",
            Message::Wizard(_) => "Wizard",
        }
    }
}

impl From<chat::Message> for Message {
    fn from(message: chat::Message) -> Self {
        Message::Chat(message)
    }
}

impl From<documents::Message> for Message {
    fn from(message: documents::Message) -> Self {
        Message::Documents(message)
    }
}

impl From<wizard::Message> for Message {
    fn from(message: wizard::Message) -> Self {
        Message::Wizard(message)
    }
}
