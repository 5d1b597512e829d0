//! Separator entity

use serde::Serialize;

use crate::error::{EntityError, Violation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparatorState {
    pub orientation: SeparatorOrientation,
    /// Purely visual; hidden from assistive technology
    pub decorative: bool,
    pub thickness: f32,
    /// Margin on both sides, along the cross axis
    pub spacing: f32,
}

impl Default for SeparatorState {
    fn default() -> Self {
        Self {
            orientation: SeparatorOrientation::Horizontal,
            decorative: true,
            thickness: 1.0,
            spacing: 0.0,
        }
    }
}

/// Partial separator state; unset fields take their defaults
#[derive(Clone, Copy, Debug, Default)]
pub struct SeparatorProps {
    orientation: Option<SeparatorOrientation>,
    decorative: Option<bool>,
    thickness: Option<f32>,
    spacing: Option<f32>,
}

impl SeparatorProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: SeparatorOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn vertical(self) -> Self {
        self.orientation(SeparatorOrientation::Vertical)
    }

    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = Some(decorative);
        self
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparatorEntity {
    state: SeparatorState,
}

impl SeparatorEntity {
    pub fn create(props: SeparatorProps) -> Result<Self, EntityError> {
        let defaults = SeparatorState::default();
        Self::from_state(SeparatorState {
            orientation: props.orientation.unwrap_or(defaults.orientation),
            decorative: props.decorative.unwrap_or(defaults.decorative),
            thickness: props.thickness.unwrap_or(defaults.thickness),
            spacing: props.spacing.unwrap_or(defaults.spacing),
        })
    }

    fn from_state(state: SeparatorState) -> Result<Self, EntityError> {
        if !state.thickness.is_finite() || !state.spacing.is_finite() {
            return Err(Violation::NonFiniteSeparatorDimension.into());
        }
        if state.thickness <= 0.0 {
            return Err(Violation::NonPositiveSeparatorThickness.into());
        }
        if state.spacing < 0.0 {
            return Err(Violation::NegativeSeparatorSpacing.into());
        }
        Ok(Self { state })
    }

    pub fn current_state(&self) -> SeparatorState {
        self.state
    }

    pub fn orientation(&self) -> SeparatorOrientation {
        self.state.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.state.orientation == SeparatorOrientation::Horizontal
    }

    pub fn is_vertical(&self) -> bool {
        self.state.orientation == SeparatorOrientation::Vertical
    }

    pub fn is_decorative(&self) -> bool {
        self.state.decorative
    }

    pub fn thickness(&self) -> f32 {
        self.state.thickness
    }

    pub fn spacing(&self) -> f32 {
        self.state.spacing
    }

    pub fn with_orientation(&self, orientation: SeparatorOrientation) -> Result<Self, EntityError> {
        Self::from_state(SeparatorState {
            orientation,
            ..self.state
        })
    }

    pub fn with_decorative(&self, decorative: bool) -> Result<Self, EntityError> {
        Self::from_state(SeparatorState {
            decorative,
            ..self.state
        })
    }

    pub fn with_thickness(&self, thickness: f32) -> Result<Self, EntityError> {
        Self::from_state(SeparatorState {
            thickness,
            ..self.state
        })
    }

    pub fn with_spacing(&self, spacing: f32) -> Result<Self, EntityError> {
        Self::from_state(SeparatorState {
            spacing,
            ..self.state
        })
    }
}
