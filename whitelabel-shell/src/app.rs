//! Application builder.

use iced::{Settings, Size, Theme};

use crate::config::AppConfig;
use crate::state::State;
use crate::theme::BrandPalette;
use crate::{update, view};

/// Build and run the shell with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application(title, update::update, view::view)
        .settings(default_settings())
        .theme(theme)
        .window(iced::window::Settings {
            size: Size::new(1280.0, 800.0),
            ..Default::default()
        })
        .run_with(move || State::new(config))
}

/// Window title follows the active branding.
fn title(state: &State) -> String {
    state.branding.company_name.clone()
}

/// Re-derive the theme from the live branding on every render.
fn theme(state: &State) -> Theme {
    BrandPalette::derive(&state.branding).theme(&state.branding.company_name)
}

fn default_settings() -> Settings {
    Settings {
        id: Some("whitelabel-shell".to_string()),
        antialiasing: true,
        ..Settings::default()
    }
}
