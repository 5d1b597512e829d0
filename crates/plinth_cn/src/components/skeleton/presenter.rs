//! Skeleton view-model

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{SkeletonAnimation, SkeletonEntity, SkeletonVariant};
use crate::style::px;

/// Diameter of a circular skeleton with no size set
const DEFAULT_CIRCLE_SIZE: f32 = 40.0;
/// Height of a rectangular skeleton with no height set
const DEFAULT_BLOCK_HEIGHT: f32 = 100.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonStyles {
    pub width: String,
    /// Height of one line (text) or of the whole block
    pub height: String,
    pub border_radius: String,
    pub background_color: Color,
    pub line_gap: String,
    /// Width of the final line, shortened when there are several
    pub last_line_width: String,
    pub animation_duration_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonViewModel {
    pub variant: SkeletonVariant,
    pub animation: SkeletonAnimation,
    pub animated: bool,
    pub lines: u32,
    pub styles: SkeletonStyles,
    pub role: &'static str,
    pub aria_busy: bool,
    pub aria_live: &'static str,
}

pub struct SkeletonPresenter;

impl SkeletonPresenter {
    pub fn present(skeleton: &SkeletonEntity, theme: &ThemeState) -> SkeletonViewModel {
        let typography = theme.typography();
        let text_height = typography.text_base * typography.line_height;

        let (width, height, border_radius) = match skeleton.variant() {
            SkeletonVariant::Text => (
                skeleton.width().map_or_else(|| "100%".to_string(), px),
                px(skeleton.height().unwrap_or(text_height)),
                px(theme.radius(RadiusToken::Sm)),
            ),
            SkeletonVariant::Circular => {
                let size = skeleton
                    .width()
                    .or(skeleton.height())
                    .unwrap_or(DEFAULT_CIRCLE_SIZE);
                (px(size), px(size), px(size / 2.0))
            }
            SkeletonVariant::Rectangular => (
                skeleton.width().map_or_else(|| "100%".to_string(), px),
                px(skeleton.height().unwrap_or(DEFAULT_BLOCK_HEIGHT)),
                px(theme.radius(RadiusToken::Default)),
            ),
        };

        let last_line_width = if skeleton.lines() > 1 {
            "80%".to_string()
        } else {
            width.clone()
        };

        let animation_duration_ms = match skeleton.animation() {
            SkeletonAnimation::Pulse | SkeletonAnimation::Wave => {
                Some(theme.animations().duration_slow)
            }
            SkeletonAnimation::None => None,
        };

        SkeletonViewModel {
            variant: skeleton.variant(),
            animation: skeleton.animation(),
            animated: skeleton.is_animated(),
            lines: skeleton.lines(),
            styles: SkeletonStyles {
                width,
                height,
                border_radius,
                background_color: theme.color(ColorToken::Skeleton),
                line_gap: px(theme.spacing().space_2),
                last_line_width,
                animation_duration_ms,
            },
            role: "status",
            aria_busy: true,
            aria_live: "polite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::skeleton::SkeletonProps;

    fn present(props: SkeletonProps) -> SkeletonViewModel {
        SkeletonPresenter::present(&SkeletonEntity::create(props).unwrap(), &ThemeState::light())
    }

    #[test]
    fn test_text_lines() {
        let vm = present(SkeletonProps::new().lines(3));
        assert_eq!(vm.styles.width, "100%");
        assert_eq!(vm.styles.height, "24px");
        assert_eq!(vm.styles.last_line_width, "80%");
        assert_eq!(vm.styles.animation_duration_ms, Some(1500));
    }

    #[test]
    fn test_circle() {
        let vm = present(SkeletonProps::new().circle(48.0));
        assert_eq!(vm.styles.width, "48px");
        assert_eq!(vm.styles.border_radius, "24px");

        let vm = present(SkeletonProps::new().variant(SkeletonVariant::Circular));
        assert_eq!(vm.styles.height, "40px");
    }

    #[test]
    fn test_static_rectangle() {
        let vm = present(
            SkeletonProps::new()
                .variant(SkeletonVariant::Rectangular)
                .width(320.0)
                .animation(SkeletonAnimation::None),
        );
        assert!(!vm.animated);
        assert_eq!(vm.styles.animation_duration_ms, None);
        assert_eq!(vm.styles.width, "320px");
        assert_eq!(vm.styles.height, "100px");
    }

    #[test]
    fn test_serialized_aria_fields() {
        let json = serde_json::to_value(present(SkeletonProps::new())).unwrap();
        assert_eq!(json["role"], "status");
        assert_eq!(json["ariaBusy"], true);
        assert_eq!(json["ariaLive"], "polite");
    }
}
