//! Tests for route resolution and message routing infrastructure.
//!
//! Validates that:
//! - The four routing paths resolve to the right pages
//! - Page messages convert into the root message type
//! - No root message variants go unhandled

use whitelabel_shell::message::Message;
use whitelabel_shell::state::Route;
use whitelabel_shell::views::{chat, documents, wizard};

#[test]
fn four_paths_resolve_to_three_pages() {
    assert_eq!(Route::from_path("/"), Some(Route::Chat));
    assert_eq!(Route::from_path("/chat"), Some(Route::Chat));
    assert_eq!(Route::from_path("/documents"), Some(Route::Documents));
    assert_eq!(Route::from_path("/wizard"), Some(Route::Wizard));
}

#[test]
fn root_and_chat_share_a_page() {
    assert_eq!(Route::from_path("/"), Route::from_path("/chat"));
}

#[test]
fn unknown_paths_are_not_routed() {
    assert_eq!(Route::from_path(""), None);
    assert_eq!(Route::from_path("chat"), None);
    assert_eq!(Route::from_path("/admin"), None);
    assert_eq!(Route::from_path("/documents/42"), None);
}

#[test]
fn canonical_paths_round_trip() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn page_messages_convert_to_the_root_message() {
    let _chat: Message = chat::Message::Submit.into();
    let _documents: Message = documents::Message::Refresh.into();
    let _wizard: Message = wizard::Message::Submit.into();
}

#[test]
fn message_names_follow_their_source() {
    assert_eq!(Message::from(chat::Message::Submit).name(), "Chat");
    assert_eq!(Message::from(documents::Message::Refresh).name(), "Documents");
    assert_eq!(Message::from(wizard::Message::Reset).name(), "Wizard");
    assert_eq!(Message::Navigate(Route::Wizard).name(), "Navigate");
}

#[test]
fn no_message_variants_missing() {
    // If this compiles, all variants are handled; adding a page without
    // wiring it into the dispatch shows up here first
    fn exhaustive_match(message: Message) -> &'static str {
        match message {
            Message::Navigate(_) => "navigate",
            Message::LogoFetched(_) => "logo",
            Message::Chat(_) => "chat",
            Message::Documents(_) => "documents",
            Message::Wizard(_) => "wizard",
        }
    }

    let _ = exhaustive_match(Message::Navigate(Route::Chat));
}
