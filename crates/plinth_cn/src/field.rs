//! Shared form-field state for Select and Textarea

use plinth_core::Color;
use plinth_theme::{ColorToken, ThemeState};
use serde::Serialize;

/// Visual validation state of a form field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    #[default]
    Default,
    Error,
    Success,
}

/// First-error validation result
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub valid: bool,
    pub error_message: Option<String>,
}

impl FieldValidation {
    pub fn passed() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// Field state after setting `error`: an error forces `Error`, clearing one
/// drops `Error` back to `Default`
pub(crate) fn state_for_error(error: Option<&str>, state: FieldState) -> FieldState {
    match (error, state) {
        (Some(_), _) => FieldState::Error,
        (None, FieldState::Error) => FieldState::Default,
        (None, other) => other,
    }
}

/// Border color for a form field, by priority: error, success, focus, idle
pub(crate) fn field_border_color(state: FieldState, focused: bool, theme: &ThemeState) -> Color {
    match state {
        FieldState::Error => theme.color(ColorToken::BorderError),
        FieldState::Success => theme.color(ColorToken::Success),
        FieldState::Default if focused => theme.color(ColorToken::BorderFocus),
        FieldState::Default => theme.color(ColorToken::Border),
    }
}
