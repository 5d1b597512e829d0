//! Checkbox entity
//!
//! A checkbox is tri-state: checked, unchecked or indeterminate ("mixed",
//! typically a parent of partially selected children). Toggling an
//! indeterminate checkbox checks it.

use serde::Serialize;

use crate::error::{EntityError, Violation};

/// Checkbox value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxValue {
    Checked,
    #[default]
    Unchecked,
    Indeterminate,
}

impl CheckboxValue {
    /// The value after one toggle
    pub fn toggled(self) -> Self {
        match self {
            CheckboxValue::Checked => CheckboxValue::Unchecked,
            CheckboxValue::Unchecked | CheckboxValue::Indeterminate => CheckboxValue::Checked,
        }
    }
}

impl From<bool> for CheckboxValue {
    fn from(checked: bool) -> Self {
        if checked {
            CheckboxValue::Checked
        } else {
            CheckboxValue::Unchecked
        }
    }
}

/// Checkbox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxSize {
    /// Small checkbox (14px)
    Small,
    /// Medium checkbox (18px)
    #[default]
    Medium,
    /// Large checkbox (22px)
    Large,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckboxState {
    pub value: CheckboxValue,
    pub size: CheckboxSize,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub error: Option<String>,
    pub label: Option<String>,
}

/// Partial checkbox state; unset fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct CheckboxProps {
    value: Option<CheckboxValue>,
    size: Option<CheckboxSize>,
    disabled: Option<bool>,
    readonly: Option<bool>,
    required: Option<bool>,
    error: Option<String>,
    label: Option<String>,
}

impl CheckboxProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<CheckboxValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = Some(readonly);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

enum CheckboxChange {
    Value(CheckboxValue),
    Size(CheckboxSize),
    Disabled(bool),
    Readonly(bool),
    Required(bool),
    Error(Option<String>),
    Label(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxEntity {
    state: CheckboxState,
}

impl CheckboxEntity {
    pub fn create(props: CheckboxProps) -> Result<Self, EntityError> {
        let state = CheckboxState {
            value: props.value.unwrap_or_default(),
            size: props.size.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            readonly: props.readonly.unwrap_or(false),
            required: props.required.unwrap_or(false),
            error: props.error,
            label: props.label,
        };
        Self::from_state(state)
    }

    fn from_state(state: CheckboxState) -> Result<Self, EntityError> {
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> CheckboxState {
        self.state.clone()
    }

    pub fn value(&self) -> CheckboxValue {
        self.state.value
    }

    pub fn size(&self) -> CheckboxSize {
        self.state.size
    }

    pub fn is_checked(&self) -> bool {
        self.state.value == CheckboxValue::Checked
    }

    pub fn is_unchecked(&self) -> bool {
        self.state.value == CheckboxValue::Unchecked
    }

    pub fn is_indeterminate(&self) -> bool {
        self.state.value == CheckboxValue::Indeterminate
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_readonly(&self) -> bool {
        self.state.readonly
    }

    pub fn is_required(&self) -> bool {
        self.state.required
    }

    pub fn is_interactive(&self) -> bool {
        !self.state.disabled && !self.state.readonly
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.state.error.is_some()
    }

    pub fn label(&self) -> Option<&str> {
        self.state.label.as_deref()
    }

    pub fn has_label(&self) -> bool {
        self.state.label.is_some()
    }

    pub fn with_value(&self, value: impl Into<CheckboxValue>) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Value(value.into()))
    }

    pub fn toggled(&self) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Value(self.state.value.toggled()))
    }

    pub fn with_size(&self, size: CheckboxSize) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Size(size))
    }

    /// Disabling also clears readonly
    pub fn with_disabled(&self, disabled: bool) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Disabled(disabled))
    }

    /// Making readonly also clears disabled
    pub fn with_readonly(&self, readonly: bool) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Readonly(readonly))
    }

    pub fn with_required(&self, required: bool) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Required(required))
    }

    pub fn with_error(&self, error: Option<String>) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Error(error))
    }

    pub fn with_label(&self, label: Option<String>) -> Result<Self, EntityError> {
        self.apply(CheckboxChange::Label(label))
    }

    fn apply(&self, change: CheckboxChange) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            CheckboxChange::Value(value) => next.value = value,
            CheckboxChange::Size(size) => next.size = size,
            CheckboxChange::Disabled(disabled) => {
                next.disabled = disabled;
                if disabled {
                    next.readonly = false;
                }
            }
            CheckboxChange::Readonly(readonly) => {
                next.readonly = readonly;
                if readonly {
                    next.disabled = false;
                }
            }
            CheckboxChange::Required(required) => next.required = required,
            CheckboxChange::Error(error) => next.error = error,
            CheckboxChange::Label(label) => next.label = label,
        }
        Self::from_state(next)
    }
}

fn validate(state: &CheckboxState) -> Result<(), Violation> {
    if state.disabled && state.readonly {
        return Err(Violation::CheckboxDisabledAndReadonly);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let checkbox = CheckboxEntity::create(CheckboxProps::new()).unwrap();
        assert_eq!(checkbox.current_state(), CheckboxState::default());
        assert!(checkbox.is_unchecked());
        assert!(checkbox.is_interactive());
        assert!(!checkbox.has_error());
    }

    #[test]
    fn test_disabled_and_readonly_rejected() {
        let err = CheckboxEntity::create(CheckboxProps::new().disabled(true).readonly(true))
            .unwrap_err();
        assert_eq!(err.to_string(), "Checkbox cannot be both disabled and readonly");
    }

    #[test]
    fn test_disabled_and_readonly_are_exclusive() {
        let readonly = CheckboxEntity::create(CheckboxProps::new().readonly(true)).unwrap();
        let disabled = readonly.with_disabled(true).unwrap();
        assert!(disabled.is_disabled());
        assert!(!disabled.current_state().readonly);

        let readonly_again = disabled.with_readonly(true).unwrap();
        assert!(readonly_again.is_readonly());
        assert!(!readonly_again.current_state().disabled);
    }

    #[test]
    fn test_toggle_cycle() {
        let unchecked = CheckboxEntity::create(CheckboxProps::new().value(false)).unwrap();
        let checked = unchecked.toggled().unwrap();
        assert!(checked.is_checked());
        assert_eq!(checked.toggled().unwrap(), unchecked);

        let mixed = CheckboxEntity::create(CheckboxProps::new().value(CheckboxValue::Indeterminate))
            .unwrap();
        assert!(mixed.is_indeterminate());
        assert!(mixed.toggled().unwrap().is_checked());
    }

    #[test]
    fn test_with_value_preserves_other_fields() {
        let checkbox = CheckboxEntity::create(
            CheckboxProps::new()
                .label("Accept terms")
                .required(true)
                .size(CheckboxSize::Large),
        )
        .unwrap();
        let before = checkbox.current_state();
        let checked = checkbox.with_value(true).unwrap();

        assert_eq!(checkbox.current_state(), before);
        assert_eq!(
            checked.current_state(),
            CheckboxState {
                value: CheckboxValue::Checked,
                ..before
            }
        );
    }

    #[test]
    fn test_error_round_trip() {
        let checkbox = CheckboxEntity::create(CheckboxProps::new()).unwrap();
        let invalid = checkbox.with_error(Some("Required".into())).unwrap();
        assert_eq!(invalid.error(), Some("Required"));
        assert!(!invalid.with_error(None).unwrap().has_error());
    }
}
