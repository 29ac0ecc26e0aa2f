//! State-level end-to-end coverage of branding replacement.
//!
//! Drives the real root update function: the wizard is the only message
//! path that can replace the branding, replacements are wholesale, and
//! every consumer-facing read reflects the latest configuration.

use whitelabel_model::{BrandingError, DeliveryStatus};
use whitelabel_shell::color;
use whitelabel_shell::config::AppConfig;
use whitelabel_shell::message::Message;
use whitelabel_shell::state::{Route, State};
use whitelabel_shell::theme::BrandPalette;
use whitelabel_shell::update::update;
use whitelabel_shell::views::documents::Listing;
use whitelabel_shell::views::header::{LogoSource, logo_source};
use whitelabel_shell::views::{chat, documents, wizard};

fn fresh_state() -> State {
    let (state, _boot) = State::new(AppConfig::default());
    state
}

fn submit_branding(state: &mut State, company: &str, primary: &str) {
    for message in [
        wizard::Message::CompanyNameChanged(company.to_string()),
        wizard::Message::PrimaryColorChanged(primary.to_string()),
        wizard::Message::Submit,
    ] {
        let _ = update(state, message.into());
    }
}

#[test]
fn wizard_submission_rebrands_the_shell() {
    let mut state = fresh_state();
    assert_eq!(state.branding.company_name, "White Label Chat");
    assert_eq!(state.branding.primary_color, "#8A2BE2");

    let before = BrandPalette::derive(&state.branding);
    let _ = update(&mut state, Message::Navigate(Route::Wizard));
    submit_branding(&mut state, "Acme Support", "#00AA55");

    assert_eq!(state.branding.company_name, "Acme Support");
    assert_eq!(state.branding.primary_color, "#00AA55");
    assert!(state.wizard.applied);

    let palette = BrandPalette::derive(&state.branding);
    assert_eq!(palette.primary, color::from_hex("#00AA55").unwrap());
    assert_ne!(palette, before);
}

#[test]
fn rejected_submission_never_reaches_the_root() {
    let mut state = fresh_state();
    let original = state.branding.clone();

    let _ = update(
        &mut state,
        wizard::Message::PrimaryColorChanged("notacolor".to_string()).into(),
    );
    let _ = update(&mut state, wizard::Message::Submit.into());

    assert_eq!(state.branding, original);
    assert!(!state.wizard.applied);
    assert!(matches!(
        state.wizard.error,
        Some(BrandingError::InvalidColor { .. })
    ));
}

#[test]
fn consumers_observe_only_the_latest_configuration() {
    let mut state = fresh_state();

    submit_branding(&mut state, "First Tenant", "#112233");
    submit_branding(&mut state, "Second Tenant", "#445566");

    // No field mixing across replacements
    assert_eq!(state.branding.company_name, "Second Tenant");
    assert_eq!(state.branding.primary_color, "#445566");
    assert_eq!(
        BrandPalette::derive(&state.branding).primary,
        color::from_hex("#445566").unwrap()
    );
}

#[test]
fn chat_and_documents_messages_cannot_touch_branding() {
    let mut state = fresh_state();
    let original = state.branding.clone();

    let _ = update(
        &mut state,
        chat::Message::InputChanged("hello".to_string()).into(),
    );
    let _ = update(&mut state, chat::Message::Submit.into());
    let _ = update(&mut state, documents::Message::Refresh.into());
    let _ = update(
        &mut state,
        documents::Message::UploadPathChanged("/tmp/handbook.pdf".to_string()).into(),
    );

    assert_eq!(state.branding, original);
}

#[test]
fn chat_delivery_lifecycle_is_tracked_per_message() {
    let mut state = fresh_state();

    let _ = update(
        &mut state,
        chat::Message::InputChanged("hello there".to_string()).into(),
    );
    let _ = update(&mut state, chat::Message::Submit.into());

    assert_eq!(state.chat.transcript.len(), 1);
    assert_eq!(state.chat.transcript[0].status, DeliveryStatus::Sending);
    assert!(state.chat.input.is_empty());
    let id = state.chat.transcript[0].id;

    let _ = update(
        &mut state,
        chat::Message::DeliveryFailed(id, "connection refused".to_string()).into(),
    );
    assert_eq!(state.chat.transcript[0].status, DeliveryStatus::Error);

    let _ = update(&mut state, chat::Message::Resend(id).into());
    assert_eq!(state.chat.transcript[0].status, DeliveryStatus::Sending);

    let _ = update(&mut state, chat::Message::Delivered(id).into());
    assert_eq!(state.chat.transcript[0].status, DeliveryStatus::Sent);
}

#[test]
fn empty_logo_url_renders_the_placeholder_glyph() {
    let state = fresh_state();
    assert!(matches!(
        logo_source(&state.branding, &state.logo),
        LogoSource::Placeholder
    ));
}

#[test]
fn pending_logo_fetch_still_shows_the_placeholder() {
    let mut state = fresh_state();

    let _ = update(
        &mut state,
        wizard::Message::LogoUrlChanged("https://example.com/logo.png".to_string()).into(),
    );
    let _ = update(&mut state, wizard::Message::Submit.into());

    // The replacement kicked off a fetch; until it resolves the slot is
    // still the placeholder, never an empty image
    assert_eq!(state.branding.logo_url(), Some("https://example.com/logo.png"));
    assert!(matches!(
        logo_source(&state.branding, &state.logo),
        LogoSource::Placeholder
    ));
}

#[test]
fn wizard_reset_restores_the_active_configuration() {
    let mut state = fresh_state();

    let _ = update(
        &mut state,
        wizard::Message::CompanyNameChanged("Scratch".to_string()).into(),
    );
    assert_eq!(state.wizard.company_name, "Scratch");

    let _ = update(&mut state, wizard::Message::Reset.into());
    assert_eq!(state.wizard.company_name, state.branding.company_name);
}

#[test]
fn documents_route_entry_triggers_a_listing_load() {
    let mut state = fresh_state();
    assert!(matches!(state.documents.listing, Listing::NotLoaded));

    let _ = update(&mut state, Message::Navigate(Route::Documents));
    assert!(matches!(state.documents.listing, Listing::Loading));
}

#[test]
fn start_path_selects_the_initial_route() {
    let config = AppConfig {
        start_path: "/documents".to_string(),
        ..AppConfig::default()
    };
    let (state, _boot) = State::new(config);
    assert_eq!(state.route, Route::Documents);

    let config = AppConfig {
        start_path: "/nowhere".to_string(),
        ..AppConfig::default()
    };
    let (state, _boot) = State::new(config);
    assert_eq!(state.route, Route::Chat);
}
