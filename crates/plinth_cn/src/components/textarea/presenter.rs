//! Textarea view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{TextareaEntity, TextareaResize, TextareaSize};
use crate::field::{field_border_color, FieldState};
use crate::style::{px, Cursor};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaStyles {
    pub min_height: String,
    pub padding: String,
    pub font_size: String,
    pub line_height: f32,
    pub border_radius: String,
    pub border_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub counter_color: Color,
    pub resize: TextareaResize,
    pub opacity: f32,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaViewModel {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub interactive: bool,
    pub error: Option<String>,
    pub state: FieldState,
    pub size: TextareaSize,
    pub rows: u32,
    pub character_count: usize,
    pub max_length: Option<usize>,
    pub remaining_characters: Option<usize>,
    pub show_counter: bool,
    pub styles: TextareaStyles,
    pub role: &'static str,
    pub aria_multiline: bool,
    pub aria_disabled: bool,
    pub aria_readonly: bool,
    pub aria_required: bool,
    pub aria_invalid: bool,
}

impl TextareaSize {
    fn padding(&self, theme: &ThemeState) -> f32 {
        let spacing = theme.spacing();
        match self {
            TextareaSize::Small => spacing.space_2,
            TextareaSize::Medium => spacing.space_3,
            TextareaSize::Large => spacing.space_4,
        }
    }

    fn font_size(&self, theme: &ThemeState) -> f32 {
        let typography = theme.typography();
        match self {
            TextareaSize::Small => typography.text_xs,
            TextareaSize::Medium => typography.text_sm,
            TextareaSize::Large => typography.text_base,
        }
    }
}

pub struct TextareaPresenter;

impl TextareaPresenter {
    pub fn present(textarea: &TextareaEntity, theme: &ThemeState) -> TextareaViewModel {
        let size = textarea.size();
        let disabled = textarea.is_disabled();
        let padding = size.padding(theme);
        let font_size = size.font_size(theme);
        let line_height = theme.typography().line_height;
        let min_height = textarea.rows() as f32 * font_size * line_height + padding * 2.0;

        let background_color = if disabled || textarea.is_read_only() {
            theme.color(ColorToken::InputBgDisabled)
        } else {
            theme.color(ColorToken::InputBg)
        };
        let text_color = if disabled {
            theme.color(ColorToken::TextTertiary)
        } else {
            theme.color(ColorToken::TextPrimary)
        };
        let counter_color = if textarea.exceeds_max_length() {
            theme.color(ColorToken::Error)
        } else {
            theme.color(ColorToken::TextSecondary)
        };
        let cursor = if disabled {
            Cursor::NotAllowed
        } else {
            Cursor::Text
        };

        TextareaViewModel {
            value: textarea.value().to_string(),
            placeholder: textarea.placeholder().to_string(),
            disabled,
            read_only: textarea.is_read_only(),
            required: textarea.is_required(),
            interactive: textarea.is_interactive(),
            error: textarea.error().map(str::to_string),
            state: textarea.field_state(),
            size,
            rows: textarea.rows(),
            character_count: textarea.character_count(),
            max_length: textarea.max_length(),
            remaining_characters: textarea.remaining_characters(),
            show_counter: textarea.max_length().is_some(),
            styles: TextareaStyles {
                min_height: px(min_height),
                padding: px(padding),
                font_size: px(font_size),
                line_height,
                border_radius: px(theme.radius(RadiusToken::Default)),
                border_color: field_border_color(textarea.field_state(), false, theme),
                background_color,
                text_color,
                placeholder_color: theme.color(ColorToken::TextTertiary),
                counter_color,
                resize: if disabled {
                    TextareaResize::None
                } else {
                    textarea.resize()
                },
                opacity: if disabled { 0.5 } else { 1.0 },
                cursor,
            },
            role: "textbox",
            aria_multiline: true,
            aria_disabled: disabled,
            aria_readonly: textarea.is_read_only(),
            aria_required: textarea.is_required(),
            aria_invalid: textarea.has_error(),
        }
    }
}
