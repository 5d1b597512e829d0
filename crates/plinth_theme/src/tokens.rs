//! Design token tables
//!
//! Tokens are looked up by enum key so presenters never name a raw value.

use plinth_core::Color;
use serde::Deserialize;

/// Semantic color keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,
    SecondaryActive,
    Success,
    Warning,
    Error,
    Info,
    Background,
    Surface,
    SurfaceElevated,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    Border,
    BorderHover,
    BorderFocus,
    BorderError,
    InputBg,
    InputBgDisabled,
    Backdrop,
    Skeleton,
}

/// Resolved colors for one theme variant
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_active: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,
    pub border: Color,
    pub border_hover: Color,
    pub border_focus: Color,
    pub border_error: Color,
    pub input_bg: Color,
    pub input_bg_disabled: Color,
    pub backdrop: Color,
    pub skeleton: Color,
}

impl ColorTokens {
    pub fn get(&self, token: ColorToken) -> Color {
        *self.slot(token)
    }

    pub fn set(&mut self, token: ColorToken, color: Color) {
        *self.slot_mut(token) = color;
    }

    fn slot(&self, token: ColorToken) -> &Color {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::PrimaryHover => &self.primary_hover,
            ColorToken::PrimaryActive => &self.primary_active,
            ColorToken::Secondary => &self.secondary,
            ColorToken::SecondaryHover => &self.secondary_hover,
            ColorToken::SecondaryActive => &self.secondary_active,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::SurfaceElevated => &self.surface_elevated,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextTertiary => &self.text_tertiary,
            ColorToken::TextInverse => &self.text_inverse,
            ColorToken::Border => &self.border,
            ColorToken::BorderHover => &self.border_hover,
            ColorToken::BorderFocus => &self.border_focus,
            ColorToken::BorderError => &self.border_error,
            ColorToken::InputBg => &self.input_bg,
            ColorToken::InputBgDisabled => &self.input_bg_disabled,
            ColorToken::Backdrop => &self.backdrop,
            ColorToken::Skeleton => &self.skeleton,
        }
    }

    fn slot_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryHover => &mut self.primary_hover,
            ColorToken::PrimaryActive => &mut self.primary_active,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::SecondaryHover => &mut self.secondary_hover,
            ColorToken::SecondaryActive => &mut self.secondary_active,
            ColorToken::Success => &mut self.success,
            ColorToken::Warning => &mut self.warning,
            ColorToken::Error => &mut self.error,
            ColorToken::Info => &mut self.info,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceElevated => &mut self.surface_elevated,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextTertiary => &mut self.text_tertiary,
            ColorToken::TextInverse => &mut self.text_inverse,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderHover => &mut self.border_hover,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::BorderError => &mut self.border_error,
            ColorToken::InputBg => &mut self.input_bg,
            ColorToken::InputBgDisabled => &mut self.input_bg_disabled,
            ColorToken::Backdrop => &mut self.backdrop,
            ColorToken::Skeleton => &mut self.skeleton,
        }
    }
}

/// Corner radius keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    None,
    Sm,
    Default,
    Md,
    Lg,
    Xl,
    Full,
}

/// Corner radii in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_none: f32,
    pub radius_sm: f32,
    pub radius_default: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_full: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_sm: 4.0,
            radius_default: 6.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_full: 9999.0,
        }
    }
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Default => self.radius_default,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full,
        }
    }

    /// Multiply every finite radius; `radius_full` stays a pill
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            radius_none: self.radius_none,
            radius_sm: self.radius_sm * factor,
            radius_default: self.radius_default * factor,
            radius_md: self.radius_md * factor,
            radius_lg: self.radius_lg * factor,
            radius_xl: self.radius_xl * factor,
            radius_full: self.radius_full,
        }
    }
}

/// Spacing keys on a 4px scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
    Space8,
}

/// Spacing scale in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub space_1: f32,
    pub space_2: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_6: f32,
    pub space_8: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_1: 4.0,
            space_2: 8.0,
            space_3: 12.0,
            space_4: 16.0,
            space_6: 24.0,
            space_8: 32.0,
        }
    }
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
        }
    }
}

/// Font sizes in pixels plus the body line-height multiplier
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub line_height: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 24.0,
            line_height: 1.5,
        }
    }
}

/// Transition durations in milliseconds
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTokens {
    pub duration_fast: u32,
    pub duration_normal: u32,
    pub duration_slow: u32,
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration_fast: 150,
            duration_normal: 200,
            duration_slow: 1500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_scaling_keeps_pill() {
        let radii = RadiusTokens::default().scaled(0.5);
        assert_eq!(radii.get(RadiusToken::Md), 4.0);
        assert_eq!(radii.get(RadiusToken::Full), 9999.0);
        assert_eq!(radii.get(RadiusToken::None), 0.0);
    }

    #[test]
    fn test_spacing_lookup() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.get(SpacingToken::Space4), 16.0);
        assert_eq!(spacing.get(SpacingToken::Space1), 4.0);
    }
}
