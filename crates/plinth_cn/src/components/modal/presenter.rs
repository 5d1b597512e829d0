//! Modal view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{AnimationState, ModalEntity, ModalSize};
use crate::style::px;

/// Stacking order of the modal layer
const MODAL_Z_INDEX: u32 = 50;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalStyles {
    pub max_width: String,
    pub padding: String,
    pub border_radius: String,
    pub background_color: Color,
    pub backdrop_color: Color,
    pub opacity: f32,
    pub scale: f32,
    pub z_index: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalViewModel {
    pub open: bool,
    pub visible: bool,
    pub animating: bool,
    pub animation_state: AnimationState,
    pub size: ModalSize,
    pub focus_trapped: bool,
    pub close_on_backdrop_click: bool,
    pub close_on_escape: bool,
    pub title: Option<String>,
    pub styles: ModalStyles,
    pub role: &'static str,
    pub aria_modal: bool,
    pub aria_hidden: bool,
    pub aria_label: Option<String>,
}

impl ModalSize {
    fn max_width(&self) -> String {
        match self {
            ModalSize::Small => px(400.0),
            ModalSize::Medium => px(560.0),
            ModalSize::Large => px(800.0),
            ModalSize::Full => "100%".to_string(),
        }
    }
}

impl AnimationState {
    /// Content (opacity, scale) for this phase; the renderer tweens between them
    fn content_transform(&self) -> (f32, f32) {
        match self {
            AnimationState::Open => (1.0, 1.0),
            AnimationState::Opening | AnimationState::Closing | AnimationState::Closed => {
                (0.0, 0.95)
            }
        }
    }
}

pub struct ModalPresenter;

impl ModalPresenter {
    pub fn present(modal: &ModalEntity, theme: &ThemeState) -> ModalViewModel {
        let (opacity, scale) = modal.animation_state().content_transform();
        let border_radius = match modal.size() {
            ModalSize::Full => theme.radius(RadiusToken::None),
            _ => theme.radius(RadiusToken::Lg),
        };

        ModalViewModel {
            open: modal.is_open(),
            visible: modal.is_visible(),
            animating: modal.is_animating(),
            animation_state: modal.animation_state(),
            size: modal.size(),
            focus_trapped: modal.is_focus_trapped(),
            close_on_backdrop_click: modal.closes_on_backdrop_click(),
            close_on_escape: modal.closes_on_escape(),
            title: modal.title().map(str::to_string),
            styles: ModalStyles {
                max_width: modal.size().max_width(),
                padding: px(theme.spacing().space_6),
                border_radius: px(border_radius),
                background_color: theme.color(ColorToken::SurfaceElevated),
                backdrop_color: theme.color(ColorToken::Backdrop),
                opacity,
                scale,
                z_index: MODAL_Z_INDEX,
            },
            role: "dialog",
            aria_modal: true,
            aria_hidden: !modal.is_visible(),
            aria_label: modal.title().map(str::to_string),
        }
    }
}
