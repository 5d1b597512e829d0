//! Default Plinth theme (neutral zinc palette with a blue primary)

use plinth_core::Color;

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

#[derive(Clone, Debug)]
pub struct PlinthTheme {
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    animations: AnimationTokens,
}

impl PlinthTheme {
    /// Create the light variant
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                primary: Color::from_hex(0x2563EB),
                primary_hover: Color::from_hex(0x1D4ED8),
                primary_active: Color::from_hex(0x1E40AF),
                secondary: Color::from_hex(0xF4F4F5),
                secondary_hover: Color::from_hex(0xE4E4E7),
                secondary_active: Color::from_hex(0xD4D4D8),
                // Semantic colors
                success: Color::from_hex(0x16A34A),
                warning: Color::from_hex(0xD97706),
                error: Color::from_hex(0xDC2626),
                info: Color::from_hex(0x0284C7),
                // Surfaces
                background: Color::WHITE,
                surface: Color::WHITE,
                surface_elevated: Color::from_hex(0xFAFAFA),
                // Text
                text_primary: Color::from_hex(0x09090B),
                text_secondary: Color::from_hex(0x52525B),
                text_tertiary: Color::from_hex(0xA1A1AA),
                text_inverse: Color::WHITE,
                // Borders
                border: Color::from_hex(0xE4E4E7),
                border_hover: Color::from_hex(0xD4D4D8),
                border_focus: Color::from_hex(0x2563EB),
                border_error: Color::from_hex(0xDC2626),
                // Inputs
                input_bg: Color::WHITE,
                input_bg_disabled: Color::from_hex(0xF4F4F5),
                // Overlays
                backdrop: Color::BLACK.with_alpha(0.5),
                skeleton: Color::from_hex(0xE4E4E7),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            animations: AnimationTokens::default(),
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary: Color::from_hex(0x3B82F6),
                primary_hover: Color::from_hex(0x60A5FA),
                primary_active: Color::from_hex(0x93C5FD),
                secondary: Color::from_hex(0x27272A),
                secondary_hover: Color::from_hex(0x3F3F46),
                secondary_active: Color::from_hex(0x52525B),
                // Semantic colors
                success: Color::from_hex(0x22C55E),
                warning: Color::from_hex(0xF59E0B),
                error: Color::from_hex(0xEF4444),
                info: Color::from_hex(0x38BDF8),
                // Surfaces
                background: Color::from_hex(0x09090B),
                surface: Color::from_hex(0x18181B),
                surface_elevated: Color::from_hex(0x27272A),
                // Text
                text_primary: Color::from_hex(0xFAFAFA),
                text_secondary: Color::from_hex(0xA1A1AA),
                text_tertiary: Color::from_hex(0x71717A),
                text_inverse: Color::from_hex(0x09090B),
                // Borders
                border: Color::from_hex(0x27272A),
                border_hover: Color::from_hex(0x3F3F46),
                border_focus: Color::from_hex(0x3B82F6),
                border_error: Color::from_hex(0xEF4444),
                // Inputs
                input_bg: Color::from_hex(0x18181B),
                input_bg_disabled: Color::from_hex(0x27272A),
                // Overlays
                backdrop: Color::BLACK.with_alpha(0.7),
                skeleton: Color::from_hex(0x27272A),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            animations: AnimationTokens::default(),
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Plinth", Self::light(), Self::dark())
    }
}

impl Theme for PlinthTheme {
    fn name(&self) -> &str {
        "Plinth"
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    fn animations(&self) -> &AnimationTokens {
        &self.animations
    }
}
