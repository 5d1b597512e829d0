//! Skeleton entity - loading placeholder

use serde::Serialize;

use crate::error::{EntityError, Violation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonVariant {
    /// One or more lines of text
    #[default]
    Text,
    Circular,
    Rectangular,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonAnimation {
    #[default]
    Pulse,
    Wave,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonState {
    pub variant: SkeletonVariant,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub animation: SkeletonAnimation,
    pub lines: u32,
}

impl Default for SkeletonState {
    fn default() -> Self {
        Self {
            variant: SkeletonVariant::default(),
            width: None,
            height: None,
            animation: SkeletonAnimation::default(),
            lines: 1,
        }
    }
}

/// Partial skeleton state; unset fields take their defaults
#[derive(Clone, Copy, Debug, Default)]
pub struct SkeletonProps {
    variant: Option<SkeletonVariant>,
    width: Option<f32>,
    height: Option<f32>,
    animation: Option<SkeletonAnimation>,
    lines: Option<u32>,
}

impl SkeletonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: SkeletonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Circular skeleton of the given diameter
    pub fn circle(self, size: f32) -> Self {
        self.variant(SkeletonVariant::Circular).width(size).height(size)
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn animation(mut self, animation: SkeletonAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn lines(mut self, lines: u32) -> Self {
        self.lines = Some(lines);
        self
    }
}

enum SkeletonChange {
    Variant(SkeletonVariant),
    Width(Option<f32>),
    Height(Option<f32>),
    Animation(SkeletonAnimation),
    Lines(u32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonEntity {
    state: SkeletonState,
}

impl SkeletonEntity {
    pub fn create(props: SkeletonProps) -> Result<Self, EntityError> {
        let state = SkeletonState {
            variant: props.variant.unwrap_or_default(),
            width: props.width,
            height: props.height,
            animation: props.animation.unwrap_or_default(),
            lines: props.lines.unwrap_or(1),
        };
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> SkeletonState {
        self.state
    }

    pub fn variant(&self) -> SkeletonVariant {
        self.state.variant
    }

    pub fn width(&self) -> Option<f32> {
        self.state.width
    }

    pub fn height(&self) -> Option<f32> {
        self.state.height
    }

    pub fn animation(&self) -> SkeletonAnimation {
        self.state.animation
    }

    pub fn lines(&self) -> u32 {
        self.state.lines
    }

    pub fn is_animated(&self) -> bool {
        self.state.animation != SkeletonAnimation::None
    }

    pub fn is_circular(&self) -> bool {
        self.state.variant == SkeletonVariant::Circular
    }

    pub fn with_variant(&self, variant: SkeletonVariant) -> Result<Self, EntityError> {
        self.apply(SkeletonChange::Variant(variant))
    }

    pub fn with_width(&self, width: Option<f32>) -> Result<Self, EntityError> {
        self.apply(SkeletonChange::Width(width))
    }

    pub fn with_height(&self, height: Option<f32>) -> Result<Self, EntityError> {
        self.apply(SkeletonChange::Height(height))
    }

    pub fn with_animation(&self, animation: SkeletonAnimation) -> Result<Self, EntityError> {
        self.apply(SkeletonChange::Animation(animation))
    }

    pub fn with_lines(&self, lines: u32) -> Result<Self, EntityError> {
        self.apply(SkeletonChange::Lines(lines))
    }

    fn apply(&self, change: SkeletonChange) -> Result<Self, EntityError> {
        let mut next = self.state;
        match change {
            SkeletonChange::Variant(variant) => next.variant = variant,
            SkeletonChange::Width(width) => next.width = width,
            SkeletonChange::Height(height) => next.height = height,
            SkeletonChange::Animation(animation) => next.animation = animation,
            SkeletonChange::Lines(lines) => next.lines = lines,
        }
        validate(&next)?;
        Ok(Self { state: next })
    }
}

fn is_positive(value: Option<f32>) -> bool {
    value.map_or(true, |v| v > 0.0)
}

fn is_finite(value: Option<f32>) -> bool {
    value.map_or(true, f32::is_finite)
}

fn validate(state: &SkeletonState) -> Result<(), Violation> {
    if !is_finite(state.width) || !is_finite(state.height) {
        return Err(Violation::NonFiniteSkeletonDimension);
    }
    if !is_positive(state.width) {
        return Err(Violation::NonPositiveSkeletonWidth);
    }
    if !is_positive(state.height) {
        return Err(Violation::NonPositiveSkeletonHeight);
    }
    if state.lines == 0 {
        return Err(Violation::ZeroSkeletonLines);
    }
    if state.variant == SkeletonVariant::Circular {
        if let (Some(width), Some(height)) = (state.width, state.height) {
            if width != height {
                return Err(Violation::NonSquareCircularSkeleton);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let skeleton = SkeletonEntity::create(SkeletonProps::new()).unwrap();
        assert_eq!(skeleton.current_state(), SkeletonState::default());
        assert!(skeleton.is_animated());
        assert!(!skeleton.is_circular());
    }

    #[test]
    fn test_invariant_messages() {
        let cases = [
            (SkeletonProps::new().width(0.0), "Skeleton width must be greater than 0"),
            (SkeletonProps::new().height(-2.0), "Skeleton height must be greater than 0"),
            (SkeletonProps::new().lines(0), "Skeleton must render at least one line"),
            (
                SkeletonProps::new()
                    .variant(SkeletonVariant::Circular)
                    .width(40.0)
                    .height(32.0),
                "Circular skeletons must have equal width and height",
            ),
        ];
        for (props, message) in cases {
            assert_eq!(SkeletonEntity::create(props).unwrap_err().to_string(), message);
        }
    }

    #[test]
    fn test_circular_with_one_dimension_is_valid() {
        let skeleton = SkeletonEntity::create(
            SkeletonProps::new()
                .variant(SkeletonVariant::Circular)
                .width(48.0),
        )
        .unwrap();
        assert!(skeleton.is_circular());
        assert!(skeleton.with_height(Some(30.0)).is_err());
        assert!(skeleton.with_height(Some(48.0)).is_ok());
    }

    #[test]
    fn test_transitions() {
        let skeleton = SkeletonEntity::create(SkeletonProps::new()).unwrap();
        let still = skeleton.with_animation(SkeletonAnimation::None).unwrap();
        assert!(!still.is_animated());
        assert_eq!(still.with_lines(3).unwrap().lines(), 3);
        assert!(skeleton.with_width(Some(f32::NAN)).is_err());
    }

    #[test]
    fn test_rejects_non_finite_dimensions() {
        let skeleton = SkeletonEntity::create(SkeletonProps::new()).unwrap();
        for value in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let err = skeleton.with_width(Some(value)).unwrap_err();
            assert_eq!(err.to_string(), "Skeleton width and height must be finite");
            assert!(skeleton.with_height(Some(value)).is_err());
        }
        assert!(SkeletonEntity::create(SkeletonProps::new().circle(f32::INFINITY)).is_err());
        assert_eq!(skeleton.width(), None);
    }
}
