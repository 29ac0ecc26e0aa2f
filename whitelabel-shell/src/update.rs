//! Root update dispatch.

use iced::Task;

use crate::message::Message;
use crate::state::{LogoState, Route, State};
use crate::views::{chat, documents, wizard};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());

    match message {
        Message::Navigate(route) => {
            if state.route == route {
                return Task::none();
            }
            log::debug!("navigate: {}", route.path());
            state.route = route;
            on_route_entered(state)
        }
        Message::LogoFetched(Ok(handle)) => {
            state.logo = LogoState::Loaded(handle);
            Task::none()
        }
        Message::LogoFetched(Err(error)) => {
            log::warn!("logo fetch failed: {error}");
            state.logo = LogoState::Failed;
            Task::none()
        }
        Message::Chat(message) => chat::update(&mut state.chat, &state.api, message),
        Message::Documents(message) => {
            documents::update(&mut state.documents, &state.api, message)
        }
        // The wizard is the only path that can reach the root's replace
        // operation, and only with a configuration that passed validation.
        Message::Wizard(message) => {
            match wizard::update(&mut state.wizard, &state.branding, message) {
                Some(next) => state.replace_branding(next),
                None => Task::none(),
            }
        }
    }
}

/// Tasks owed when a route becomes visible.
pub(crate) fn on_route_entered(state: &mut State) -> Task<Message> {
    match state.route {
        Route::Documents if state.documents.needs_load() => {
            documents::refresh(&mut state.documents, &state.api)
        }
        _ => Task::none(),
    }
}
