//! Root-level view composition.
//!
//! The layout shell renders identically for every route: header chrome,
//! the routed page in the content slot, and the footer. The palette is
//! re-derived from the live branding on every render, so no consumer can
//! hold stale tokens across a replacement.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{Route, State};
use crate::theme::{self, BrandPalette};
use crate::views::{chat, documents, header, wizard};

pub fn view(state: &State) -> Element<'_, Message> {
    let palette = BrandPalette::derive(&state.branding);

    let content: Element<'_, Message> = match state.route {
        Route::Chat => chat::view(&state.chat, &state.branding, &palette).map(Message::Chat),
        Route::Documents => {
            documents::view(&state.documents, &state.branding, &palette).map(Message::Documents)
        }
        Route::Wizard => wizard::view(&state.wizard, &palette).map(Message::Wizard),
    };

    column![
        header::view(state, &palette),
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24.0),
        footer(&state.branding.footer_text, &palette),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn footer<'a>(footer_text: &'a str, palette: &BrandPalette) -> Element<'a, Message> {
    container(text(footer_text).size(13.0).style(theme::text_muted))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([12.0, 24.0])
        .style(theme::Container::Footer.style(palette))
        .into()
}
