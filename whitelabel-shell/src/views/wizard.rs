//! Branding wizard: edit and submit a complete configuration.
//!
//! The form assembles a full [`BrandingConfig`] candidate and validates
//! it locally; only a candidate that passes the model's validation is
//! handed to the root. Rejected drafts never leave this page.

use iced::widget::{Space, button, checkbox, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use whitelabel_model::{BrandingConfig, BrandingError, FeatureFlags};

use crate::color;
use crate::theme::{self, BrandPalette};

/// Wizard form state: a draft of every branding field.
#[derive(Debug, Clone)]
pub struct WizardState {
    pub company_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub welcome_message: String,
    pub logo_url: String,
    pub chat_placeholder: String,
    pub footer_text: String,
    pub features: FeatureFlags,
    /// Validation failure from the last submit, surfaced locally.
    pub error: Option<BrandingError>,
    /// Whether the last submit was applied.
    pub applied: bool,
}

impl WizardState {
    /// Seed the form from the active configuration.
    pub fn from_branding(branding: &BrandingConfig) -> Self {
        Self {
            company_name: branding.company_name.clone(),
            primary_color: branding.primary_color.clone(),
            secondary_color: branding.secondary_color().unwrap_or_default().to_string(),
            welcome_message: branding.welcome_message.clone(),
            logo_url: branding.logo_url().unwrap_or_default().to_string(),
            chat_placeholder: branding.chat_placeholder.clone(),
            footer_text: branding.footer_text.clone(),
            features: branding.features,
            error: None,
            applied: false,
        }
    }

    /// Assemble the draft into a complete configuration candidate.
    fn assemble(&self) -> BrandingConfig {
        BrandingConfig {
            company_name: self.company_name.trim().to_string(),
            primary_color: self.primary_color.trim().to_string(),
            secondary_color: optional(&self.secondary_color),
            welcome_message: self.welcome_message.trim().to_string(),
            logo_url: optional(&self.logo_url),
            chat_placeholder: self.chat_placeholder.trim().to_string(),
            footer_text: self.footer_text.trim().to_string(),
            features: self.features,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone)]
pub enum Message {
    CompanyNameChanged(String),
    PrimaryColorChanged(String),
    SecondaryColorChanged(String),
    WelcomeMessageChanged(String),
    LogoUrlChanged(String),
    ChatPlaceholderChanged(String),
    FooterTextChanged(String),
    DocumentsToggled(bool),
    FileUploadToggled(bool),
    RealTimeChatToggled(bool),
    Submit,
    Reset,
}

/// Apply a wizard message to the draft.
///
/// Returns the validated replacement configuration on a successful
/// submit; every other message, and every rejected submit, returns
/// `None` and leaves the active configuration untouched.
pub fn update(
    wizard: &mut WizardState,
    active: &BrandingConfig,
    message: Message,
) -> Option<BrandingConfig> {
    wizard.applied = false;
    match message {
        Message::CompanyNameChanged(value) => {
            wizard.company_name = value;
            None
        }
        Message::PrimaryColorChanged(value) => {
            wizard.primary_color = value;
            None
        }
        Message::SecondaryColorChanged(value) => {
            wizard.secondary_color = value;
            None
        }
        Message::WelcomeMessageChanged(value) => {
            wizard.welcome_message = value;
            None
        }
        Message::LogoUrlChanged(value) => {
            wizard.logo_url = value;
            None
        }
        Message::ChatPlaceholderChanged(value) => {
            wizard.chat_placeholder = value;
            None
        }
        Message::FooterTextChanged(value) => {
            wizard.footer_text = value;
            None
        }
        Message::DocumentsToggled(value) => {
            wizard.features.documents_enabled = value;
            None
        }
        Message::FileUploadToggled(value) => {
            wizard.features.file_upload_enabled = value;
            None
        }
        Message::RealTimeChatToggled(value) => {
            wizard.features.real_time_chat = value;
            None
        }
        Message::Reset => {
            *wizard = WizardState::from_branding(active);
            None
        }
        Message::Submit => {
            let candidate = wizard.assemble();
            match candidate.validate() {
                Ok(()) => {
                    wizard.error = None;
                    wizard.applied = true;
                    Some(candidate)
                }
                Err(error) => {
                    log::debug!("wizard submission rejected: {error}");
                    wizard.error = Some(error);
                    None
                }
            }
        }
    }
}

pub fn view<'a>(wizard: &'a WizardState, palette: &BrandPalette) -> Element<'a, Message> {
    let primary_tone =
        color::from_hex(wizard.primary_color.trim()).unwrap_or(theme::FALLBACK_PRIMARY);
    let secondary_tone = color::from_hex(wizard.secondary_color.trim())
        .unwrap_or_else(|| theme::derived_secondary(primary_tone));

    let swatch = |tone: iced::Color| {
        container(Space::with_width(0.0))
            .width(24.0)
            .height(24.0)
            .style(theme::Container::Swatch(tone).style(palette))
    };

    let field = |label: &'static str, placeholder: &'static str, value: &'a str, on_input: fn(String) -> Message| {
        column![
            text(label).size(12.0).style(theme::text_secondary),
            text_input(placeholder, value)
                .on_input(on_input)
                .padding(8.0)
                .size(14.0)
                .style(theme::input_style(palette)),
        ]
        .spacing(4.0)
    };

    let colors = row![
        field(
            "Primary color",
            "#RRGGBB",
            &wizard.primary_color,
            Message::PrimaryColorChanged,
        ),
        swatch(primary_tone),
        field(
            "Secondary color (optional)",
            "#RRGGBB",
            &wizard.secondary_color,
            Message::SecondaryColorChanged,
        ),
        swatch(secondary_tone),
    ]
    .spacing(8.0)
    .align_y(Alignment::End);

    let toggles = column![
        checkbox("Documents page", wizard.features.documents_enabled)
            .on_toggle(Message::DocumentsToggled),
        checkbox("File uploads", wizard.features.file_upload_enabled)
            .on_toggle(Message::FileUploadToggled),
        checkbox("Real-time chat", wizard.features.real_time_chat)
            .on_toggle(Message::RealTimeChatToggled),
    ]
    .spacing(6.0);

    let actions = row![
        button(text("Apply branding").size(14.0))
            .on_press(Message::Submit)
            .padding([10.0, 18.0])
            .style(theme::Button::Primary.style(palette)),
        button(text("Reset").size(14.0))
            .on_press(Message::Reset)
            .padding([10.0, 18.0])
            .style(theme::Button::Secondary.style(palette)),
    ]
    .spacing(8.0);

    let mut form = column![
        text("Branding").size(18.0),
        text("Changes apply to this session as soon as they pass validation.")
            .size(13.0)
            .style(theme::text_muted),
        field(
            "Company name",
            "Company name",
            &wizard.company_name,
            Message::CompanyNameChanged,
        ),
        colors,
        field(
            "Welcome message",
            "Shown at the top of the chat page",
            &wizard.welcome_message,
            Message::WelcomeMessageChanged,
        ),
        field(
            "Logo URL (optional)",
            "https://…",
            &wizard.logo_url,
            Message::LogoUrlChanged,
        ),
        field(
            "Chat input placeholder",
            "Type your message...",
            &wizard.chat_placeholder,
            Message::ChatPlaceholderChanged,
        ),
        field(
            "Footer text",
            "Footer text",
            &wizard.footer_text,
            Message::FooterTextChanged,
        ),
        toggles,
    ]
    .spacing(12.0)
    .max_width(640.0);

    if let Some(error) = &wizard.error {
        form = form.push(
            container(text(error.to_string()).size(13.0))
                .width(Length::Fill)
                .padding(10.0)
                .style(theme::Container::ErrorBox.style(palette)),
        );
    }

    if wizard.applied {
        form = form.push(
            text("Branding applied. The shell restyled with your changes.")
                .size(13.0)
                .style(theme::text_success),
        );
    }

    form = form.push(actions);

    scrollable(form).height(Length::Fill).into()
}
