//! Textarea entity

use serde::Serialize;

use crate::error::{EntityError, Violation};
use crate::field::{state_for_error, FieldState, FieldValidation};

const REQUIRED_MESSAGE: &str = "This field is required";

/// Textarea size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextareaSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Which axes the user may resize along
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextareaResize {
    None,
    #[default]
    Vertical,
    Horizontal,
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextareaState {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub error: Option<String>,
    pub state: FieldState,
    pub size: TextareaSize,
    pub rows: u32,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub resize: TextareaResize,
}

impl Default for TextareaState {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            read_only: false,
            required: false,
            error: None,
            state: FieldState::Default,
            size: TextareaSize::default(),
            rows: 3,
            max_length: None,
            min_length: None,
            resize: TextareaResize::default(),
        }
    }
}

/// Partial textarea state; unset fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct TextareaProps {
    value: Option<String>,
    placeholder: Option<String>,
    disabled: Option<bool>,
    read_only: Option<bool>,
    required: Option<bool>,
    error: Option<String>,
    state: Option<FieldState>,
    size: Option<TextareaSize>,
    rows: Option<u32>,
    max_length: Option<usize>,
    min_length: Option<usize>,
    resize: Option<TextareaResize>,
}

impl TextareaProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
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

    pub fn state(mut self, state: FieldState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn size(mut self, size: TextareaSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn resize(mut self, resize: TextareaResize) -> Self {
        self.resize = Some(resize);
        self
    }
}

enum TextareaChange {
    Value(String),
    Placeholder(String),
    Disabled(bool),
    ReadOnly(bool),
    Required(bool),
    Error(Option<String>),
    State(FieldState),
    Size(TextareaSize),
    Rows(u32),
    MaxLength(Option<usize>),
    MinLength(Option<usize>),
    Resize(TextareaResize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextareaEntity {
    state: TextareaState,
}

impl TextareaEntity {
    pub fn create(props: TextareaProps) -> Result<Self, EntityError> {
        let defaults = TextareaState::default();
        let state = TextareaState {
            value: props.value.unwrap_or_default(),
            placeholder: props.placeholder.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(defaults.disabled),
            read_only: props.read_only.unwrap_or(defaults.read_only),
            required: props.required.unwrap_or(defaults.required),
            error: props.error,
            state: props.state.unwrap_or(defaults.state),
            size: props.size.unwrap_or(defaults.size),
            rows: props.rows.unwrap_or(defaults.rows),
            max_length: props.max_length,
            min_length: props.min_length,
            resize: props.resize.unwrap_or(defaults.resize),
        };
        Self::from_state(state)
    }

    fn from_state(state: TextareaState) -> Result<Self, EntityError> {
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> TextareaState {
        self.state.clone()
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn placeholder(&self) -> &str {
        &self.state.placeholder
    }

    pub fn size(&self) -> TextareaSize {
        self.state.size
    }

    pub fn resize(&self) -> TextareaResize {
        self.state.resize
    }

    pub fn rows(&self) -> u32 {
        self.state.rows
    }

    pub fn max_length(&self) -> Option<usize> {
        self.state.max_length
    }

    pub fn min_length(&self) -> Option<usize> {
        self.state.min_length
    }

    pub fn field_state(&self) -> FieldState {
        self.state.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_read_only(&self) -> bool {
        self.state.read_only
    }

    pub fn is_required(&self) -> bool {
        self.state.required
    }

    pub fn is_interactive(&self) -> bool {
        !self.state.disabled && !self.state.read_only
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.state.error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.state.value.is_empty()
    }

    /// Length in Unicode scalar values
    pub fn character_count(&self) -> usize {
        self.state.value.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.state.value.split_whitespace().count()
    }

    /// Number of lines; an empty value is one line
    pub fn line_count(&self) -> usize {
        self.state.value.split('\n').count()
    }

    pub fn remaining_characters(&self) -> Option<usize> {
        self.state
            .max_length
            .map(|max| max.saturating_sub(self.character_count()))
    }

    /// True once the value reaches the limit and no characters remain
    pub fn exceeds_max_length(&self) -> bool {
        self.state
            .max_length
            .is_some_and(|max| self.character_count() >= max)
    }

    pub fn below_min_length(&self) -> bool {
        self.state
            .min_length
            .is_some_and(|min| self.character_count() < min)
    }

    pub fn validate_required(&self) -> FieldValidation {
        if self.state.required && self.state.value.trim().is_empty() {
            FieldValidation::failed(REQUIRED_MESSAGE)
        } else {
            FieldValidation::passed()
        }
    }

    /// Empty values pass; required is checked separately
    pub fn validate_min_length(&self) -> FieldValidation {
        match self.state.min_length {
            Some(min) if !self.is_empty() && self.below_min_length() => {
                FieldValidation::failed(format!("Minimum {min} characters required"))
            }
            _ => FieldValidation::passed(),
        }
    }

    pub fn validate_max_length(&self) -> FieldValidation {
        match self.state.max_length {
            Some(max) if self.exceeds_max_length() => {
                FieldValidation::failed(format!("Maximum {max} characters allowed"))
            }
            _ => FieldValidation::passed(),
        }
    }

    /// Required, then minimum, then maximum length; the first failure wins
    pub fn validate_all(&self) -> FieldValidation {
        [
            self.validate_required(),
            self.validate_min_length(),
            self.validate_max_length(),
        ]
        .into_iter()
        .find(|validation| !validation.valid)
        .unwrap_or_else(FieldValidation::passed)
    }

    pub fn with_value(&self, value: impl Into<String>) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Value(value.into()))
    }

    pub fn with_placeholder(&self, placeholder: impl Into<String>) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Placeholder(placeholder.into()))
    }

    /// Disabling clears the error and resets the field state
    pub fn with_disabled(&self, disabled: bool) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Disabled(disabled))
    }

    /// Making read-only drops `required`
    pub fn with_read_only(&self, read_only: bool) -> Result<Self, EntityError> {
        self.apply(TextareaChange::ReadOnly(read_only))
    }

    /// Making required drops `read_only`
    pub fn with_required(&self, required: bool) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Required(required))
    }

    pub fn with_error(&self, error: Option<String>) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Error(error))
    }

    pub fn with_state(&self, state: FieldState) -> Result<Self, EntityError> {
        self.apply(TextareaChange::State(state))
    }

    pub fn with_size(&self, size: TextareaSize) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Size(size))
    }

    pub fn with_rows(&self, rows: u32) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Rows(rows))
    }

    pub fn with_max_length(&self, max_length: Option<usize>) -> Result<Self, EntityError> {
        self.apply(TextareaChange::MaxLength(max_length))
    }

    pub fn with_min_length(&self, min_length: Option<usize>) -> Result<Self, EntityError> {
        self.apply(TextareaChange::MinLength(min_length))
    }

    pub fn with_resize(&self, resize: TextareaResize) -> Result<Self, EntityError> {
        self.apply(TextareaChange::Resize(resize))
    }

    fn apply(&self, change: TextareaChange) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            TextareaChange::Value(value) => next.value = value,
            TextareaChange::Placeholder(placeholder) => next.placeholder = placeholder,
            TextareaChange::Disabled(disabled) => {
                next.disabled = disabled;
                if disabled {
                    next.error = None;
                    next.state = FieldState::Default;
                }
            }
            TextareaChange::ReadOnly(read_only) => {
                next.read_only = read_only;
                if read_only {
                    next.required = false;
                }
            }
            TextareaChange::Required(required) => {
                next.required = required;
                if required {
                    next.read_only = false;
                }
            }
            TextareaChange::Error(error) => {
                next.state = state_for_error(error.as_deref(), next.state);
                next.error = error;
            }
            TextareaChange::State(state) => next.state = state,
            TextareaChange::Size(size) => next.size = size,
            TextareaChange::Rows(rows) => next.rows = rows,
            TextareaChange::MaxLength(max_length) => next.max_length = max_length,
            TextareaChange::MinLength(min_length) => next.min_length = min_length,
            TextareaChange::Resize(resize) => next.resize = resize,
        }
        Self::from_state(next)
    }
}

fn validate(state: &TextareaState) -> Result<(), Violation> {
    if state.read_only && state.required {
        return Err(Violation::ReadOnlyTextareaRequired);
    }
    if state.disabled && state.error.is_some() {
        return Err(Violation::DisabledTextareaWithError);
    }
    if state.error.is_some() && state.state != FieldState::Error {
        return Err(Violation::TextareaErrorOutsideErrorState);
    }
    if state.max_length == Some(0) {
        return Err(Violation::ZeroMaxLength);
    }
    if let (Some(min), Some(max)) = (state.min_length, state.max_length) {
        if min > max {
            return Err(Violation::MinLengthExceedsMaxLength);
        }
    }
    if state.rows == 0 {
        return Err(Violation::ZeroRows);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textarea(props: TextareaProps) -> TextareaEntity {
        TextareaEntity::create(props).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let textarea = textarea(TextareaProps::new());
        assert_eq!(textarea.current_state(), TextareaState::default());
        assert_eq!(textarea.rows(), 3);
        assert_eq!(textarea.resize(), TextareaResize::Vertical);
        assert!(textarea.is_interactive());
    }

    #[test]
    fn test_invariant_messages() {
        let cases = vec![
            (
                TextareaProps::new().read_only(true).required(true),
                "Read-only textareas cannot be required",
            ),
            (
                TextareaProps::new()
                    .disabled(true)
                    .error("Bad")
                    .state(FieldState::Error),
                "Disabled textareas cannot have errors",
            ),
            (
                TextareaProps::new().error("Bad"),
                "Textareas with errors must be in error state",
            ),
            (
                TextareaProps::new().max_length(0),
                "Max length must be greater than 0",
            ),
            (
                TextareaProps::new().min_length(10).max_length(5),
                "Min length cannot exceed max length",
            ),
            (TextareaProps::new().rows(0), "Rows must be greater than 0"),
        ];

        for (props, message) in cases {
            assert_eq!(TextareaEntity::create(props).unwrap_err().to_string(), message);
        }
    }

    #[test]
    fn test_counts() {
        let textarea = textarea(TextareaProps::new().value("héllo  wörld\nsecond line\n").max_length(10));
        assert_eq!(textarea.character_count(), 25);
        assert_eq!(textarea.word_count(), 4);
        assert_eq!(textarea.line_count(), 3);
        assert_eq!(textarea.remaining_characters(), Some(0));
        assert!(textarea.exceeds_max_length());
    }

    #[test]
    fn test_empty_counts() {
        let textarea = textarea(TextareaProps::new().max_length(20));
        assert_eq!(textarea.character_count(), 0);
        assert_eq!(textarea.word_count(), 0);
        assert_eq!(textarea.line_count(), 1);
        assert_eq!(textarea.remaining_characters(), Some(20));
    }

    #[test]
    fn test_validation_order() {
        let textarea = textarea(TextareaProps::new().required(true).min_length(3).max_length(5));

        let empty = textarea.with_value("   ").unwrap();
        assert_eq!(
            empty.validate_all(),
            FieldValidation::failed("This field is required")
        );

        let short = textarea.with_value("ab").unwrap();
        assert_eq!(
            short.validate_all(),
            FieldValidation::failed("Minimum 3 characters required")
        );

        let long = textarea.with_value("abcdefg").unwrap();
        assert_eq!(
            long.validate_all(),
            FieldValidation::failed("Maximum 5 characters allowed")
        );

        assert!(textarea.with_value("abcd").unwrap().validate_all().valid);
        assert!(!textarea.with_value("abcde").unwrap().validate_all().valid);
    }

    #[test]
    fn test_empty_optional_value_passes_length_checks() {
        let textarea = textarea(TextareaProps::new().min_length(3));
        assert!(textarea.validate_min_length().valid);
        assert!(textarea.validate_all().valid);
        assert!(textarea.below_min_length());
    }

    #[test]
    fn test_read_only_and_required_exclusive() {
        let required = textarea(TextareaProps::new().required(true));
        let read_only = required.with_read_only(true).unwrap();
        assert!(read_only.is_read_only() && !read_only.is_required());

        let required_again = read_only.with_required(true).unwrap();
        assert!(required_again.is_required() && !required_again.is_read_only());
    }

    #[test]
    fn test_disable_clears_error() {
        let errored = textarea(TextareaProps::new())
            .with_error(Some("Too short".into()))
            .unwrap();
        assert_eq!(errored.field_state(), FieldState::Error);

        let disabled = errored.with_disabled(true).unwrap();
        assert!(!disabled.has_error());
        assert_eq!(disabled.field_state(), FieldState::Default);
    }

    #[test]
    fn test_length_setters_validate() {
        let textarea = textarea(TextareaProps::new().max_length(10));
        assert!(textarea.with_min_length(Some(11)).is_err());
        assert!(textarea.with_max_length(Some(0)).is_err());
        assert!(textarea.with_rows(0).is_err());
        assert_eq!(textarea.with_max_length(None).unwrap().remaining_characters(), None);
    }
}
