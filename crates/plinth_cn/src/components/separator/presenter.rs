//! Separator view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, ThemeState};
use serde::Serialize;

use super::entity::{SeparatorEntity, SeparatorOrientation};
use crate::style::px;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorStyles {
    pub width: String,
    pub height: String,
    pub margin_x: String,
    pub margin_y: String,
    pub background_color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorViewModel {
    pub orientation: SeparatorOrientation,
    pub decorative: bool,
    pub styles: SeparatorStyles,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_orientation: Option<SeparatorOrientation>,
}

pub struct SeparatorPresenter;

impl SeparatorPresenter {
    pub fn present(separator: &SeparatorEntity, theme: &ThemeState) -> SeparatorViewModel {
        let thickness = px(separator.thickness());
        let spacing = px(separator.spacing());
        let full = "100%".to_string();

        let styles = match separator.orientation() {
            SeparatorOrientation::Horizontal => SeparatorStyles {
                width: full,
                height: thickness,
                margin_x: px(0.0),
                margin_y: spacing,
                background_color: theme.color(ColorToken::Border),
            },
            SeparatorOrientation::Vertical => SeparatorStyles {
                width: thickness,
                height: full,
                margin_x: spacing,
                margin_y: px(0.0),
                background_color: theme.color(ColorToken::Border),
            },
        };

        let (role, aria_orientation) = if separator.is_decorative() {
            ("none", None)
        } else {
            ("separator", Some(separator.orientation()))
        };

        SeparatorViewModel {
            orientation: separator.orientation(),
            decorative: separator.is_decorative(),
            styles,
            role,
            aria_orientation,
        }
    }
}
