//! Button view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{ButtonEntity, ButtonSize, ButtonVariant};
use crate::style::{px, Cursor};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    pub height: String,
    pub width: String,
    pub padding_x: String,
    pub padding_y: String,
    pub font_size: String,
    pub border_radius: String,
    pub border_width: String,
    pub background_color: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub opacity: f32,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonViewModel {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub interactive: bool,
    pub full_width: bool,
    pub icon_only: bool,
    pub styles: ButtonStyles,
    pub role: &'static str,
    pub aria_disabled: bool,
    pub aria_busy: bool,
}

impl ButtonVariant {
    fn background(&self, theme: &ThemeState) -> Color {
        match self {
            ButtonVariant::Primary => theme.color(ColorToken::Primary),
            ButtonVariant::Secondary => theme.color(ColorToken::Secondary),
            ButtonVariant::Destructive => theme.color(ColorToken::Error),
            ButtonVariant::Outline | ButtonVariant::Ghost | ButtonVariant::Link => {
                Color::TRANSPARENT
            }
        }
    }

    fn foreground(&self, theme: &ThemeState) -> Color {
        match self {
            ButtonVariant::Primary | ButtonVariant::Destructive => {
                theme.color(ColorToken::TextInverse)
            }
            ButtonVariant::Secondary | ButtonVariant::Outline | ButtonVariant::Ghost => {
                theme.color(ColorToken::TextPrimary)
            }
            ButtonVariant::Link => theme.color(ColorToken::Primary),
        }
    }

    fn border(&self, theme: &ThemeState) -> Option<Color> {
        match self {
            ButtonVariant::Outline => Some(theme.color(ColorToken::Border)),
            _ => None,
        }
    }
}

impl ButtonSize {
    fn height(&self) -> f32 {
        match self {
            ButtonSize::Small => 32.0,
            ButtonSize::Medium => 40.0,
            ButtonSize::Large => 44.0,
            ButtonSize::Icon => 40.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self {
            ButtonSize::Small => 12.0,
            ButtonSize::Medium => 16.0,
            ButtonSize::Large => 24.0,
            ButtonSize::Icon => 8.0,
        }
    }

    fn padding_y(&self) -> f32 {
        match self {
            ButtonSize::Small => 4.0,
            ButtonSize::Medium => 8.0,
            ButtonSize::Large => 12.0,
            ButtonSize::Icon => 8.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            ButtonSize::Small => 13.0,
            ButtonSize::Medium | ButtonSize::Icon => 14.0,
            ButtonSize::Large => 16.0,
        }
    }
}

pub struct ButtonPresenter;

impl ButtonPresenter {
    pub fn present(button: &ButtonEntity, theme: &ThemeState) -> ButtonViewModel {
        let variant = button.variant();
        let size = button.size();
        let border = variant.border(theme);

        let width = if button.is_full_width() {
            "100%".to_string()
        } else if button.is_icon_only() {
            px(size.height())
        } else {
            "auto".to_string()
        };

        let (opacity, cursor) = if button.is_loading() {
            (0.7, Cursor::Wait)
        } else if button.is_disabled() {
            (0.5, Cursor::NotAllowed)
        } else {
            (1.0, Cursor::Pointer)
        };

        ButtonViewModel {
            variant,
            size,
            disabled: button.is_disabled(),
            loading: button.is_loading(),
            interactive: button.is_interactive(),
            full_width: button.is_full_width(),
            icon_only: button.is_icon_only(),
            styles: ButtonStyles {
                height: px(size.height()),
                width,
                padding_x: px(size.padding_x()),
                padding_y: px(size.padding_y()),
                font_size: px(size.font_size()),
                border_radius: px(theme.radius(RadiusToken::Md)),
                border_width: px(if border.is_some() { 1.0 } else { 0.0 }),
                background_color: variant.background(theme),
                text_color: variant.foreground(theme),
                border_color: border.unwrap_or(Color::TRANSPARENT),
                opacity,
                cursor,
            },
            role: "button",
            aria_disabled: button.is_disabled(),
            aria_busy: button.is_loading(),
        }
    }
}
