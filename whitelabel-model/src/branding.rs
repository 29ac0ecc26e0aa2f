//! The tenant branding configuration contract.

use serde::{Deserialize, Serialize};

use crate::color::parse_hex_color;
use crate::error::BrandingError;

/// The tenant-specific customization object that white-labels the UI.
///
/// Exactly one instance is active per session. It is replaced wholesale
/// through the shell's single update operation; partial mutation is not
/// part of the contract, so a constructed instance is either fully valid
/// or rejected by [`BrandingConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Company display name shown in the header and window title.
    pub company_name: String,
    /// Primary brand color as a `#RRGGBB` hex string. Hover and active
    /// tones are derived from it by the theming layer.
    pub primary_color: String,
    /// Optional secondary color; derived from the primary when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Greeting shown at the top of the chat page.
    pub welcome_message: String,
    /// Optional logo URL; the layout falls back to a placeholder glyph
    /// when this is absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Placeholder text for the chat input.
    pub chat_placeholder: String,
    /// Text rendered in the layout footer.
    pub footer_text: String,
    /// Capability flags for this tenant.
    #[serde(default)]
    pub features: FeatureFlags,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            company_name: "White Label Chat".to_string(),
            primary_color: "#8A2BE2".to_string(),
            secondary_color: None,
            welcome_message: "Welcome to our modern chat platform".to_string(),
            logo_url: None,
            chat_placeholder: "Type your message...".to_string(),
            footer_text: "Powered by White Label Chat SaaS".to_string(),
            features: FeatureFlags::default(),
        }
    }
}

impl BrandingConfig {
    /// The logo URL, with empty strings treated as absent.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// The secondary color, with empty strings treated as absent.
    pub fn secondary_color(&self) -> Option<&str> {
        self.secondary_color
            .as_deref()
            .filter(|color| !color.trim().is_empty())
    }

    /// Check the whole configuration against the branding contract.
    ///
    /// Required text fields must be non-empty, color fields must parse as
    /// `#RRGGBB`, and a non-empty `logo_url` must parse as a URL. Optional
    /// fields left absent are not errors.
    pub fn validate(&self) -> Result<(), BrandingError> {
        require_text("company_name", &self.company_name)?;
        require_text("welcome_message", &self.welcome_message)?;
        require_text("chat_placeholder", &self.chat_placeholder)?;
        require_text("footer_text", &self.footer_text)?;

        require_color("primary_color", &self.primary_color)?;
        if let Some(color) = self.secondary_color() {
            require_color("secondary_color", color)?;
        }

        if let Some(url) = self.logo_url() {
            url::Url::parse(url)
                .map_err(|_| BrandingError::InvalidLogoUrl(url.to_string()))?;
        }

        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), BrandingError> {
    if value.trim().is_empty() {
        Err(BrandingError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn require_color(field: &'static str, value: &str) -> Result<(), BrandingError> {
    if parse_hex_color(value).is_some() {
        Ok(())
    } else {
        Err(BrandingError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

/// Capability flags for a tenant.
///
/// Fixed-shape record with every flag defaulting to `true`; defaults are
/// applied once at construction or deserialization, never checked ad hoc
/// at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Whether the documents page is offered at all.
    #[serde(default = "enabled")]
    pub documents_enabled: bool,
    /// Whether the documents page offers uploads.
    #[serde(default = "enabled")]
    pub file_upload_enabled: bool,
    /// Whether chat messages are delivered live.
    #[serde(default = "enabled")]
    pub real_time_chat: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            documents_enabled: true,
            file_upload_enabled: true,
            real_time_chat: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let branding = BrandingConfig::default();
        assert_eq!(branding.company_name, "White Label Chat");
        assert_eq!(branding.primary_color, "#8A2BE2");
        assert!(branding.validate().is_ok());
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let branding = BrandingConfig {
            company_name: "   ".to_string(),
            ..BrandingConfig::default()
        };
        assert_eq!(
            branding.validate(),
            Err(BrandingError::EmptyField("company_name"))
        );

        let branding = BrandingConfig {
            footer_text: String::new(),
            ..BrandingConfig::default()
        };
        assert_eq!(
            branding.validate(),
            Err(BrandingError::EmptyField("footer_text"))
        );
    }

    #[test]
    fn malformed_colors_are_rejected() {
        let branding = BrandingConfig {
            primary_color: "notacolor".to_string(),
            ..BrandingConfig::default()
        };
        assert_eq!(
            branding.validate(),
            Err(BrandingError::InvalidColor {
                field: "primary_color",
                value: "notacolor".to_string(),
            })
        );

        let branding = BrandingConfig {
            secondary_color: Some("#12345".to_string()),
            ..BrandingConfig::default()
        };
        assert!(matches!(
            branding.validate(),
            Err(BrandingError::InvalidColor {
                field: "secondary_color",
                ..
            })
        ));
    }

    #[test]
    fn empty_optional_strings_count_as_absent() {
        let branding = BrandingConfig {
            logo_url: Some(String::new()),
            secondary_color: Some(String::new()),
            ..BrandingConfig::default()
        };
        assert_eq!(branding.logo_url(), None);
        assert_eq!(branding.secondary_color(), None);
        assert!(branding.validate().is_ok());
    }

    #[test]
    fn malformed_logo_url_is_rejected() {
        let branding = BrandingConfig {
            logo_url: Some("not a url".to_string()),
            ..BrandingConfig::default()
        };
        assert_eq!(
            branding.validate(),
            Err(BrandingError::InvalidLogoUrl("not a url".to_string()))
        );
    }

    #[test]
    fn feature_flags_default_to_enabled_when_missing() {
        let json = r##"{
            "company_name": "Acme Support",
            "primary_color": "#00AA55",
            "welcome_message": "Hello",
            "chat_placeholder": "Say something",
            "footer_text": "Acme"
        }"##;
        let branding: BrandingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(branding.features, FeatureFlags::default());
    }

    #[test]
    fn partial_feature_flags_keep_remaining_defaults() {
        let json = r##"{
            "company_name": "Acme Support",
            "primary_color": "#00AA55",
            "welcome_message": "Hello",
            "chat_placeholder": "Say something",
            "footer_text": "Acme",
            "features": { "documents_enabled": false }
        }"##;
        let branding: BrandingConfig = serde_json::from_str(json).unwrap();
        assert!(!branding.features.documents_enabled);
        assert!(branding.features.file_upload_enabled);
        assert!(branding.features.real_time_chat);
    }
}
