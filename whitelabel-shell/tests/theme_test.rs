//! Palette derivation properties: determinism, token validity, and the
//! documented fallback for malformed colors.

use whitelabel_model::BrandingConfig;
use whitelabel_shell::color;
use whitelabel_shell::theme::{BrandPalette, FALLBACK_PRIMARY};

fn branded(primary: &str) -> BrandingConfig {
    BrandingConfig {
        primary_color: primary.to_string(),
        ..BrandingConfig::default()
    }
}

#[test]
fn derivation_is_deterministic() {
    let branding = BrandingConfig::default();
    assert_eq!(
        BrandPalette::derive(&branding),
        BrandPalette::derive(&branding)
    );
}

#[test]
fn valid_primary_yields_three_distinct_tokens() {
    let palette = BrandPalette::derive(&branded("#8A2BE2"));

    assert_eq!(palette.primary, color::from_hex("#8A2BE2").unwrap());
    assert_ne!(palette.primary, palette.primary_hover);
    assert_ne!(palette.primary_hover, palette.primary_active);
    assert_ne!(palette.primary, palette.primary_active);

    for token in [palette.primary, palette.primary_hover, palette.primary_active] {
        for channel in [token.r, token.g, token.b] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn hover_and_active_darken_progressively() {
    let palette = BrandPalette::derive(&branded("#8A2BE2"));

    assert!(color::lightness(palette.primary_hover) < color::lightness(palette.primary));
    assert!(color::lightness(palette.primary_active) < color::lightness(palette.primary_hover));
}

#[test]
fn malformed_primary_falls_back_instead_of_failing() {
    let palette = BrandPalette::derive(&branded("notacolor"));

    assert_eq!(palette.primary, FALLBACK_PRIMARY);
    // The fallback tone is the default brand violet, so the whole palette
    // matches a default-branded derivation
    assert_eq!(palette, BrandPalette::derive(&branded("#8A2BE2")));
}

#[test]
fn secondary_is_derived_when_absent_and_respected_when_present() {
    let derived = BrandPalette::derive(&branded("#00AA55"));
    assert_ne!(derived.secondary, derived.primary);

    let explicit = BrandPalette::derive(&BrandingConfig {
        primary_color: "#00AA55".to_string(),
        secondary_color: Some("#112233".to_string()),
        ..BrandingConfig::default()
    });
    assert_eq!(explicit.secondary, color::from_hex("#112233").unwrap());
}

#[test]
fn on_primary_text_stays_readable() {
    // Dark brand tone: white text
    let dark = BrandPalette::derive(&branded("#112233"));
    assert_eq!(dark.on_primary, iced::Color::WHITE);

    // Near-white brand tone: dark text
    let light = BrandPalette::derive(&branded("#F0F0F0"));
    assert_ne!(light.on_primary, iced::Color::WHITE);
}
