//! White-label chat shell library
//!
//! This crate contains the desktop shell's surfaces used by the executable
//! in `src/main.rs`: the layout chrome, page views, routing, and the
//! branding-driven theming layer. The single active branding configuration
//! is owned by [`state::State`]; pages read it immutably and only the
//! wizard's update path can request its replacement.
//!
//! Notes
//! - Public items are exposed mainly to enable integration testing.
//! - Backend calls (chat delivery, document processing) live behind
//!   [`api::ApiClient`] and degrade to in-page placeholders on failure.

pub mod api;
pub mod app;
pub mod color;
pub mod config;
pub mod message;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
