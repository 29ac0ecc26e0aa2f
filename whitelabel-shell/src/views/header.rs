//! Layout header: logo slot, company title, and primary navigation.

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use whitelabel_model::BrandingConfig;

use crate::message::Message;
use crate::state::{LogoState, Route, State};
use crate::theme::{self, BrandPalette};

/// Fixed glyph shown whenever no tenant logo image is available.
pub const PLACEHOLDER_GLYPH: &str = "💬";

/// What the logo slot should render.
#[derive(Debug)]
pub enum LogoSource<'a> {
    /// The placeholder glyph in a tinted circle.
    Placeholder,
    /// The fetched tenant logo.
    Image(&'a image::Handle),
}

/// Decide the logo slot content.
///
/// Only a configured URL with a completed fetch yields an image; an
/// absent or empty URL, a fetch in flight, and a failed fetch all render
/// the placeholder; the slot is never indeterminate.
pub fn logo_source<'a>(branding: &BrandingConfig, logo: &'a LogoState) -> LogoSource<'a> {
    match (branding.logo_url(), logo) {
        (Some(_), LogoState::Loaded(handle)) => LogoSource::Image(handle),
        _ => LogoSource::Placeholder,
    }
}

pub fn view<'a>(state: &'a State, palette: &BrandPalette) -> Element<'a, Message> {
    let logo: Element<'a, Message> = match logo_source(&state.branding, &state.logo) {
        LogoSource::Image(handle) => container(image(handle.clone()).width(40.0).height(40.0))
            .style(theme::Container::LogoSlot.style(palette))
            .into(),
        LogoSource::Placeholder => container(text(PLACEHOLDER_GLYPH).size(18.0))
            .center_x(40.0)
            .center_y(40.0)
            .style(theme::Container::LogoSlot.style(palette))
            .into(),
    };

    let title = column![
        text(&state.branding.company_name)
            .size(20.0)
            .style(theme::text_on_primary(palette)),
        text("Modern Chat Platform")
            .size(12.0)
            .style(theme::text_on_primary_dim(palette)),
    ]
    .spacing(2.0);

    let mut nav = row![].spacing(8.0);
    for route in Route::ALL {
        if route == Route::Documents && !state.branding.features.documents_enabled {
            continue;
        }
        nav = nav.push(
            button(text(route.label()).size(14.0))
                .on_press(Message::Navigate(route))
                .padding([8.0, 16.0])
                .style(
                    theme::Button::Nav {
                        active: state.route == route,
                    }
                    .style(palette),
                ),
        );
    }

    container(
        row![
            logo,
            Space::with_width(12.0),
            title,
            Space::with_width(Length::Fill),
            nav,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(theme::Container::Header.style(palette))
    .into()
}
