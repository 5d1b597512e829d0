//! Avatar view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{AvatarEntity, AvatarShape, AvatarSize, AvatarStatus};
use crate::style::px;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStyles {
    pub size: String,
    pub border_radius: String,
    pub font_size: String,
    pub background_color: Color,
    pub text_color: Color,
    pub status_size: String,
    pub status_offset: String,
    pub status_color: Option<Color>,
    pub status_border_color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarViewModel {
    /// Only set while the image is usable
    pub src: Option<String>,
    pub alt: String,
    pub initials: String,
    pub has_image: bool,
    pub size: AvatarSize,
    pub shape: AvatarShape,
    pub status: Option<AvatarStatus>,
    pub styles: AvatarStyles,
    pub role: &'static str,
    pub aria_label: String,
}

impl AvatarSize {
    pub fn pixels(&self) -> f32 {
        match self {
            AvatarSize::ExtraSmall => 24.0,
            AvatarSize::Small => 32.0,
            AvatarSize::Medium => 40.0,
            AvatarSize::Large => 48.0,
            AvatarSize::ExtraLarge => 64.0,
        }
    }

    /// Font size for fallback initials
    fn font_size(&self) -> f32 {
        match self {
            AvatarSize::ExtraSmall => 10.0,
            AvatarSize::Small => 12.0,
            AvatarSize::Medium => 14.0,
            AvatarSize::Large => 18.0,
            AvatarSize::ExtraLarge => 24.0,
        }
    }

    fn status_size(&self) -> f32 {
        match self {
            AvatarSize::ExtraSmall => 6.0,
            AvatarSize::Small => 8.0,
            AvatarSize::Medium => 10.0,
            AvatarSize::Large => 12.0,
            AvatarSize::ExtraLarge => 14.0,
        }
    }

    /// Status indicator inset from the bottom-right edge
    fn status_offset(&self) -> f32 {
        match self {
            AvatarSize::ExtraSmall | AvatarSize::Small => 0.0,
            AvatarSize::Medium => 1.0,
            AvatarSize::Large => 2.0,
            AvatarSize::ExtraLarge => 3.0,
        }
    }
}

impl AvatarShape {
    fn border_radius(&self, size: f32, theme: &ThemeState) -> f32 {
        match self {
            AvatarShape::Circle => size / 2.0,
            AvatarShape::Square => theme.radius(RadiusToken::Md),
        }
    }
}

impl AvatarStatus {
    fn color(&self, theme: &ThemeState) -> Color {
        match self {
            AvatarStatus::Online => theme.color(ColorToken::Success),
            AvatarStatus::Offline => theme.color(ColorToken::TextTertiary),
            AvatarStatus::Away => theme.color(ColorToken::Warning),
            AvatarStatus::Busy => theme.color(ColorToken::Error),
        }
    }
}

pub struct AvatarPresenter;

impl AvatarPresenter {
    pub fn present(avatar: &AvatarEntity, theme: &ThemeState) -> AvatarViewModel {
        let size = avatar.size();
        let pixels = size.pixels();
        let aria_label = if avatar.alt().is_empty() {
            "Avatar".to_string()
        } else {
            avatar.alt().to_string()
        };

        AvatarViewModel {
            src: avatar
                .has_image()
                .then(|| avatar.src().map(str::to_string))
                .flatten(),
            alt: avatar.alt().to_string(),
            initials: avatar.initials(),
            has_image: avatar.has_image(),
            size,
            shape: avatar.shape(),
            status: avatar.status(),
            styles: AvatarStyles {
                size: px(pixels),
                border_radius: px(avatar.shape().border_radius(pixels, theme)),
                font_size: px(size.font_size()),
                background_color: theme.color(ColorToken::SurfaceElevated),
                text_color: theme.color(ColorToken::TextSecondary),
                status_size: px(size.status_size()),
                status_offset: px(size.status_offset()),
                status_color: avatar.status().map(|status| status.color(theme)),
                status_border_color: theme.color(ColorToken::Background),
            },
            role: "img",
            aria_label,
        }
    }
}
