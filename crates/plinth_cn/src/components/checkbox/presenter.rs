//! Checkbox view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::{Serialize, Serializer};

use super::entity::{CheckboxEntity, CheckboxSize, CheckboxValue};
use crate::style::{px, Cursor};

/// `aria-checked`: a boolean, or `"mixed"` for indeterminate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AriaChecked {
    True,
    False,
    Mixed,
}

impl From<CheckboxValue> for AriaChecked {
    fn from(value: CheckboxValue) -> Self {
        match value {
            CheckboxValue::Checked => AriaChecked::True,
            CheckboxValue::Unchecked => AriaChecked::False,
            CheckboxValue::Indeterminate => AriaChecked::Mixed,
        }
    }
}

impl Serialize for AriaChecked {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AriaChecked::True => serializer.serialize_bool(true),
            AriaChecked::False => serializer.serialize_bool(false),
            AriaChecked::Mixed => serializer.serialize_str("mixed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxStyles {
    pub size: String,
    pub border_width: String,
    pub border_radius: String,
    pub checkmark_size: String,
    pub background_color: Color,
    pub border_color: Color,
    pub check_color: Color,
    pub label_color: Color,
    pub opacity: f32,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxViewModel {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub interactive: bool,
    pub size: CheckboxSize,
    pub error: Option<String>,
    pub label: Option<String>,
    pub styles: CheckboxStyles,
    pub role: &'static str,
    pub aria_checked: AriaChecked,
    pub aria_disabled: bool,
    pub aria_readonly: bool,
    pub aria_required: bool,
    pub aria_invalid: bool,
}

impl CheckboxSize {
    fn box_size(&self) -> f32 {
        match self {
            CheckboxSize::Small => 14.0,
            CheckboxSize::Medium => 18.0,
            CheckboxSize::Large => 22.0,
        }
    }

    fn border_width(&self) -> f32 {
        match self {
            CheckboxSize::Small => 1.5,
            CheckboxSize::Medium | CheckboxSize::Large => 2.0,
        }
    }

    fn checkmark_size(&self) -> f32 {
        match self {
            CheckboxSize::Small => 10.0,
            CheckboxSize::Medium => 12.0,
            CheckboxSize::Large => 16.0,
        }
    }

    fn corner_radius(&self, theme: &ThemeState) -> f32 {
        match self {
            CheckboxSize::Small => theme.radius(RadiusToken::Sm) * 0.75,
            CheckboxSize::Medium | CheckboxSize::Large => theme.radius(RadiusToken::Sm),
        }
    }
}

pub struct CheckboxPresenter;

impl CheckboxPresenter {
    pub fn present(checkbox: &CheckboxEntity, theme: &ThemeState) -> CheckboxViewModel {
        let size = checkbox.size();
        let filled = checkbox.is_checked() || checkbox.is_indeterminate();

        let background_color = if filled {
            theme.color(ColorToken::Primary)
        } else {
            theme.color(ColorToken::InputBg)
        };
        let border_color = if checkbox.has_error() {
            theme.color(ColorToken::BorderError)
        } else if filled {
            theme.color(ColorToken::Primary)
        } else {
            theme.color(ColorToken::Border)
        };
        let label_color = if checkbox.is_disabled() {
            theme.color(ColorToken::TextTertiary)
        } else {
            theme.color(ColorToken::TextPrimary)
        };
        let cursor = if checkbox.is_disabled() {
            Cursor::NotAllowed
        } else if checkbox.is_readonly() {
            Cursor::Default
        } else {
            Cursor::Pointer
        };

        CheckboxViewModel {
            checked: checkbox.is_checked(),
            indeterminate: checkbox.is_indeterminate(),
            disabled: checkbox.is_disabled(),
            readonly: checkbox.is_readonly(),
            required: checkbox.is_required(),
            interactive: checkbox.is_interactive(),
            size,
            error: checkbox.error().map(str::to_string),
            label: checkbox.label().map(str::to_string),
            styles: CheckboxStyles {
                size: px(size.box_size()),
                border_width: px(size.border_width()),
                border_radius: px(size.corner_radius(theme)),
                checkmark_size: px(size.checkmark_size()),
                background_color,
                border_color,
                check_color: theme.color(ColorToken::TextInverse),
                label_color,
                opacity: if checkbox.is_disabled() { 0.5 } else { 1.0 },
                cursor,
            },
            role: "checkbox",
            aria_checked: checkbox.value().into(),
            aria_disabled: checkbox.is_disabled(),
            aria_readonly: checkbox.is_readonly(),
            aria_required: checkbox.is_required(),
            aria_invalid: checkbox.has_error(),
        }
    }
}
