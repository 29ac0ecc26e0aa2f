//! Branding-driven theming.
//!
//! Every visual token that varies per tenant is derived from the active
//! [`BrandingConfig`] by [`BrandPalette::derive`]; the neutral chrome
//! colors are fixed constants. Styling closures take the derived palette
//! so a wizard submission restyles the whole shell on the next render.

use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Gradient, Radians, Shadow, Theme, Vector, gradient, theme};

use whitelabel_model::BrandingConfig;

use crate::color;

// Neutral chrome colors
pub const BACKGROUND: Color = Color::from_rgb(0.976, 0.98, 0.984); // #F9FAFB
pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
pub const BORDER_COLOR: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB

// Text colors
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563
pub const TEXT_MUTED: Color = Color::from_rgb(0.42, 0.447, 0.502); // #6B7280

// Status colors
pub const SUCCESS: Color = Color::from_rgb(0.086, 0.639, 0.29); // #16A34A
pub const DANGER: Color = Color::from_rgb(0.863, 0.149, 0.149); // #DC2626

/// Brand tone used when `primary_color` fails to parse (#8A2BE2, the
/// default brand violet).
pub const FALLBACK_PRIMARY: Color =
    Color::from_rgb(138.0 / 255.0, 43.0 / 255.0, 226.0 / 255.0);

// HSLuv lightness offsets for the derived tones
const HOVER_LIGHTNESS_DELTA: f32 = -8.0;
const ACTIVE_LIGHTNESS_DELTA: f32 = -16.0;
const SECONDARY_LIGHTNESS_DELTA: f32 = -24.0;

/// Visual tokens derived from one branding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandPalette {
    /// The base brand tone.
    pub primary: Color,
    /// Hover tone: base lowered by 8 HSLuv lightness points.
    pub primary_hover: Color,
    /// Active/pressed tone: base lowered by 16 HSLuv lightness points.
    pub primary_active: Color,
    /// Secondary tone; explicit, or the base lowered by 24 points.
    pub secondary: Color,
    /// Readable text color on top of the base tone.
    pub on_primary: Color,
}

impl BrandPalette {
    /// Derive the palette for a branding configuration.
    ///
    /// Pure: the same configuration always yields the same tokens. A
    /// malformed `primary_color` falls back to [`FALLBACK_PRIMARY`]
    /// instead of failing the render.
    pub fn derive(branding: &BrandingConfig) -> Self {
        let primary = color::from_hex(branding.primary_color.trim()).unwrap_or_else(|| {
            log::warn!(
                "invalid primary_color {:?}, falling back to default tone",
                branding.primary_color
            );
            FALLBACK_PRIMARY
        });

        let secondary = branding
            .secondary_color()
            .and_then(color::from_hex)
            .unwrap_or_else(|| derived_secondary(primary));

        let on_primary = if color::lightness(primary) > 65.0 {
            TEXT_PRIMARY
        } else {
            Color::WHITE
        };

        Self {
            primary,
            primary_hover: color::shift_lightness(primary, HOVER_LIGHTNESS_DELTA),
            primary_active: color::shift_lightness(primary, ACTIVE_LIGHTNESS_DELTA),
            secondary,
            on_primary,
        }
    }

    /// Build the application theme for the current branding.
    pub fn theme(&self, name: &str) -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = BACKGROUND;
        palette.text = TEXT_PRIMARY;
        palette.primary = self.primary;
        palette.success = SUCCESS;
        palette.danger = DANGER;

        Theme::custom(name.to_string(), palette)
    }
}

/// Secondary tone derived from a primary tone, used when no explicit
/// secondary color is configured.
pub fn derived_secondary(primary: Color) -> Color {
    color::shift_lightness(primary, SECONDARY_LIGHTNESS_DELTA)
}

// Container styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Header,
    Card,
    /// Welcome banner tinted with the secondary brand tone.
    Banner,
    Footer,
    LogoSlot,
    UserBubble,
    AssistantBubble,
    Notice,
    ErrorBox,
    /// Color preview tile showing an arbitrary tone.
    Swatch(Color),
}

impl Container {
    pub fn style(self, palette: &BrandPalette) -> impl Fn(&Theme) -> container::Style + 'static {
        let palette = *palette;
        move |_| match self {
            Container::Header => container::Style {
                text_color: Some(palette.on_primary),
                background: Some(Background::Gradient(Gradient::Linear(
                    gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                        .add_stop(0.0, palette.primary)
                        .add_stop(1.0, palette.primary_hover),
                ))),
                border: Border::default(),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            },
            Container::Card => container::Style {
                text_color: Some(TEXT_PRIMARY),
                background: Some(Background::Color(SURFACE)),
                border: Border {
                    color: BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Banner => container::Style {
                text_color: Some(TEXT_PRIMARY),
                background: Some(Background::Color(Color {
                    a: 0.08,
                    ..palette.secondary
                })),
                border: Border {
                    color: palette.secondary,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Footer => container::Style {
                text_color: Some(TEXT_MUTED),
                background: Some(Background::Color(SURFACE)),
                border: Border {
                    color: BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::LogoSlot => container::Style {
                text_color: Some(palette.on_primary),
                background: Some(Background::Color(Color {
                    a: 0.2,
                    ..Color::WHITE
                })),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 20.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::UserBubble => container::Style {
                text_color: Some(palette.on_primary),
                background: Some(Background::Color(palette.primary)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::AssistantBubble => container::Style {
                text_color: Some(TEXT_PRIMARY),
                background: Some(Background::Color(SURFACE)),
                border: Border {
                    color: BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Notice => container::Style {
                text_color: Some(Color::from_rgb(0.573, 0.251, 0.055)), // #92400E
                background: Some(Background::Color(Color::from_rgb(1.0, 0.984, 0.922))), // #FFFBEB
                border: Border {
                    color: Color::from_rgb(0.984, 0.749, 0.141), // #FBBF24
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::ErrorBox => container::Style {
                text_color: Some(DANGER),
                background: Some(Background::Color(Color {
                    a: 0.08,
                    ..DANGER
                })),
                border: Border {
                    color: DANGER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Swatch(tone) => container::Style {
                text_color: None,
                background: Some(Background::Color(tone)),
                border: Border {
                    color: BORDER_COLOR,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Nav { active: bool },
    Link,
}

impl Button {
    pub fn style(self, palette: &BrandPalette) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
        let palette = *palette;
        move |_, status| match self {
            Button::Primary => {
                let background = match status {
                    button::Status::Active => palette.primary,
                    button::Status::Hovered => palette.primary_hover,
                    button::Status::Pressed => palette.primary_active,
                    _ => Color {
                        a: 0.5,
                        ..palette.primary
                    },
                };

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: palette.on_primary,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            }
            Button::Secondary => {
                let border_color = match status {
                    button::Status::Hovered | button::Status::Pressed => palette.primary,
                    _ => BORDER_COLOR,
                };

                button::Style {
                    background: Some(Background::Color(SURFACE)),
                    text_color: TEXT_PRIMARY,
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            }
            Button::Nav { active } => {
                let overlay = match (active, status) {
                    (true, _) => 0.25,
                    (false, button::Status::Hovered) => 0.2,
                    (false, _) => 0.1,
                };

                button::Style {
                    background: Some(Background::Color(Color {
                        a: overlay,
                        ..Color::WHITE
                    })),
                    text_color: palette.on_primary,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            }
            Button::Link => {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => palette.primary_hover,
                    _ => palette.primary,
                };

                button::Style {
                    background: None,
                    text_color,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            }
        }
    }
}

/// Text input style driven by the derived palette.
pub fn input_style(palette: &BrandPalette) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = *palette;
    move |_, status| {
        let (border_color, border_width) = match status {
            text_input::Status::Active => (BORDER_COLOR, 1.0),
            text_input::Status::Hovered => (palette.primary_hover, 1.0),
            text_input::Status::Focused => (palette.primary, 2.0),
            text_input::Status::Disabled => (BORDER_COLOR, 1.0),
        };

        let background = match status {
            text_input::Status::Disabled => {
                Background::Color(Color::from_rgb(0.953, 0.957, 0.965)) // #F3F4F6
            }
            _ => Background::Color(SURFACE),
        };

        text_input::Style {
            background,
            border: Border {
                color: border_color,
                width: border_width,
                radius: 8.0.into(),
            },
            icon: TEXT_SECONDARY,
            placeholder: TEXT_MUTED,
            value: TEXT_PRIMARY,
            selection: Color {
                a: 0.25,
                ..palette.primary
            },
        }
    }
}

// Text styles
pub fn text_secondary(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn text_muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_MUTED),
    }
}

pub fn text_danger(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(DANGER),
    }
}

pub fn text_success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(SUCCESS),
    }
}

/// Text on top of the brand tone.
pub fn text_on_primary(palette: &BrandPalette) -> impl Fn(&Theme) -> text::Style + 'static {
    let color = palette.on_primary;
    move |_| text::Style { color: Some(color) }
}

/// Dimmed text on top of the brand tone.
pub fn text_on_primary_dim(palette: &BrandPalette) -> impl Fn(&Theme) -> text::Style + 'static {
    let color = Color {
        a: 0.85,
        ..palette.on_primary
    };
    move |_| text::Style { color: Some(color) }
}
