//! Shared data models for the white-label chat platform.
//!
//! This crate holds the types that cross crate boundaries: the branding
//! configuration (the tenant customization contract), chat transcript
//! types, document types, and the backend response envelope. Validation
//! rules live next to the types so every consumer enforces the same
//! contract.

pub mod api;
pub mod branding;
pub mod chat;
pub mod color;
pub mod document;
pub mod error;

pub use api::ApiResponse;
pub use branding::{BrandingConfig, FeatureFlags};
pub use chat::{ChatMessage, DeliveryStatus, Role};
pub use color::parse_hex_color;
pub use document::{DocumentProcessingResult, DocumentSummary};
pub use error::BrandingError;
