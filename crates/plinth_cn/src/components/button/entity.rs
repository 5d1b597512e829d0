//! Button entity

use serde::Serialize;

use crate::error::{EntityError, Violation};

/// Button visual variants (like shadcn)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Primary action button - filled with primary color
    #[default]
    Primary,
    /// Secondary action - muted background
    Secondary,
    /// Destructive action - red/danger styling
    Destructive,
    /// Outline button - border only, transparent background
    Outline,
    /// Ghost button - no background, minimal styling
    Ghost,
    /// Link button - appears as a link, no button styling
    Link,
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Icon-only button (square)
    Icon,
}

/// Plain button state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

/// Partial button state; unset fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct ButtonProps {
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    disabled: Option<bool>,
    loading: Option<bool>,
    full_width: Option<bool>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = Some(full_width);
        self
    }
}

enum ButtonChange {
    Variant(ButtonVariant),
    Size(ButtonSize),
    Disabled(bool),
    Loading(bool),
    FullWidth(bool),
}

/// Immutable, validated button state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonEntity {
    state: ButtonState,
}

impl ButtonEntity {
    /// Fill defaults from `props` and validate
    pub fn create(props: ButtonProps) -> Result<Self, EntityError> {
        let state = ButtonState {
            variant: props.variant.unwrap_or_default(),
            size: props.size.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            loading: props.loading.unwrap_or(false),
            full_width: props.full_width.unwrap_or(false),
        };
        Self::from_state(state)
    }

    fn from_state(state: ButtonState) -> Result<Self, EntityError> {
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> ButtonState {
        self.state.clone()
    }

    pub fn variant(&self) -> ButtonVariant {
        self.state.variant
    }

    pub fn size(&self) -> ButtonSize {
        self.state.size
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_full_width(&self) -> bool {
        self.state.full_width
    }

    pub fn is_icon_only(&self) -> bool {
        self.state.size == ButtonSize::Icon
    }

    /// Whether a click should reach the handler
    pub fn is_interactive(&self) -> bool {
        !self.state.disabled && !self.state.loading
    }

    pub fn with_variant(&self, variant: ButtonVariant) -> Result<Self, EntityError> {
        self.apply(ButtonChange::Variant(variant))
    }

    pub fn with_size(&self, size: ButtonSize) -> Result<Self, EntityError> {
        self.apply(ButtonChange::Size(size))
    }

    /// Enabling a button also ends any loading state
    pub fn with_disabled(&self, disabled: bool) -> Result<Self, EntityError> {
        self.apply(ButtonChange::Disabled(disabled))
    }

    /// Starting to load also disables the button
    pub fn with_loading(&self, loading: bool) -> Result<Self, EntityError> {
        self.apply(ButtonChange::Loading(loading))
    }

    pub fn with_full_width(&self, full_width: bool) -> Result<Self, EntityError> {
        self.apply(ButtonChange::FullWidth(full_width))
    }

    fn apply(&self, change: ButtonChange) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            ButtonChange::Variant(variant) => next.variant = variant,
            ButtonChange::Size(size) => next.size = size,
            ButtonChange::Disabled(disabled) => {
                next.disabled = disabled;
                if !disabled {
                    next.loading = false;
                }
            }
            ButtonChange::Loading(loading) => {
                next.loading = loading;
                if loading {
                    next.disabled = true;
                }
            }
            ButtonChange::FullWidth(full_width) => next.full_width = full_width,
        }
        Self::from_state(next)
    }
}

fn validate(state: &ButtonState) -> Result<(), Violation> {
    if state.loading && !state.disabled {
        return Err(Violation::LoadingButtonNotDisabled);
    }
    Ok(())
}
