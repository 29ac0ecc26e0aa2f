use thiserror::Error;

/// Errors produced by branding validation.
///
/// A [`crate::BrandingConfig`] that fails validation must never reach the
/// application's replace operation; the wizard surfaces these locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandingError {
    /// A required display-text field is empty or whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A color field does not parse as a `#RRGGBB` hex value.
    #[error("{field} is not a valid hex color: {value:?}")]
    InvalidColor {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A non-empty `logo_url` does not parse as a URL.
    #[error("logo_url is not a valid URL: {0:?}")]
    InvalidLogoUrl(String),
}
