//! Resolved style values shared by presenters

use serde::Serialize;

/// Pointer cursor hint for the rendering layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
    Wait,
    Text,
}

/// Format a pixel length, dropping a zero fraction (`40px`, `1.5px`)
pub fn px(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}
