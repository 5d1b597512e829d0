//! Select entity
//!
//! Generic over the option value type. Option uniqueness and lookups use
//! `PartialEq`, so values must compare by value.

use std::fmt::Debug;

use serde::Serialize;

use crate::error::{EntityError, Violation};
use crate::field::{state_for_error, FieldState};

pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// One selectable option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
    pub disabled: bool,
}

impl<T> SelectOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Select size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectState<T> {
    pub options: Vec<SelectOption<T>>,
    pub selected_value: Option<T>,
    pub placeholder: String,
    pub disabled: bool,
    pub required: bool,
    pub open: bool,
    pub error: Option<String>,
    pub state: FieldState,
    pub size: SelectSize,
}

/// Partial select state; unset fields take their defaults
#[derive(Clone, Debug)]
pub struct SelectProps<T> {
    options: Vec<SelectOption<T>>,
    selected_value: Option<T>,
    placeholder: Option<String>,
    disabled: Option<bool>,
    required: Option<bool>,
    open: Option<bool>,
    error: Option<String>,
    state: Option<FieldState>,
    size: Option<SelectSize>,
}

impl<T> Default for SelectProps<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected_value: None,
            placeholder: None,
            disabled: None,
            required: None,
            open: None,
            error: None,
            state: None,
            size: None,
        }
    }
}

impl<T> SelectProps<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption<T>>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn option(mut self, option: SelectOption<T>) -> Self {
        self.options.push(option);
        self
    }

    pub fn selected(mut self, value: T) -> Self {
        self.selected_value = Some(value);
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

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
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

    pub fn size(mut self, size: SelectSize) -> Self {
        self.size = Some(size);
        self
    }
}

enum SelectChange<T> {
    Selected(Option<T>),
    Options(Vec<SelectOption<T>>),
    Disabled(bool),
    Required(bool),
    Open(bool),
    Error(Option<String>),
    State(FieldState),
    Placeholder(String),
    Size(SelectSize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectEntity<T> {
    state: SelectState<T>,
}

impl<T: Clone + PartialEq + Debug> SelectEntity<T> {
    pub fn create(props: SelectProps<T>) -> Result<Self, EntityError> {
        let state = SelectState {
            options: props.options,
            selected_value: props.selected_value,
            placeholder: props
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            disabled: props.disabled.unwrap_or(false),
            required: props.required.unwrap_or(false),
            open: props.open.unwrap_or(false),
            error: props.error,
            state: props.state.unwrap_or_default(),
            size: props.size.unwrap_or_default(),
        };
        Self::from_state(state)
    }

    fn from_state(state: SelectState<T>) -> Result<Self, EntityError> {
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> SelectState<T> {
        self.state.clone()
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.state.options
    }

    pub fn selected_value(&self) -> Option<&T> {
        self.state.selected_value.as_ref()
    }

    pub fn placeholder(&self) -> &str {
        &self.state.placeholder
    }

    pub fn size(&self) -> SelectSize {
        self.state.size
    }

    pub fn field_state(&self) -> FieldState {
        self.state.state
    }

    pub fn has_selection(&self) -> bool {
        self.state.selected_value.is_some()
    }

    pub fn find_option(&self, value: &T) -> Option<&SelectOption<T>> {
        self.state.options.iter().find(|option| &option.value == value)
    }

    /// Present and not disabled
    pub fn is_selectable(&self, value: &T) -> bool {
        self.find_option(value).is_some_and(|option| !option.disabled)
    }

    pub fn selected_option(&self) -> Option<&SelectOption<T>> {
        self.state
            .selected_value
            .as_ref()
            .and_then(|value| self.find_option(value))
    }

    /// The selected option's label, or the placeholder
    pub fn display_label(&self) -> &str {
        match self.selected_option() {
            Some(option) => &option.label,
            None => &self.state.placeholder,
        }
    }

    pub fn enabled_options(&self) -> impl Iterator<Item = &SelectOption<T>> {
        self.state.options.iter().filter(|option| !option.disabled)
    }

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    pub fn is_required(&self) -> bool {
        self.state.required
    }

    pub fn is_interactive(&self) -> bool {
        !self.state.disabled
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_empty(&self) -> bool {
        self.state.options.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.state.error.is_some()
    }

    pub fn with_selected_value(&self, value: Option<T>) -> Result<Self, EntityError> {
        self.apply(SelectChange::Selected(value))
    }

    /// Replace the options, dropping a selection that is gone or now disabled
    pub fn with_options(&self, options: Vec<SelectOption<T>>) -> Result<Self, EntityError> {
        self.apply(SelectChange::Options(options))
    }

    /// Disabling clears the error and closes the menu
    pub fn with_disabled(&self, disabled: bool) -> Result<Self, EntityError> {
        self.apply(SelectChange::Disabled(disabled))
    }

    pub fn with_required(&self, required: bool) -> Result<Self, EntityError> {
        self.apply(SelectChange::Required(required))
    }

    pub fn with_open(&self, open: bool) -> Result<Self, EntityError> {
        self.apply(SelectChange::Open(open))
    }

    /// Setting an error moves to the error state; clearing one leaves it
    pub fn with_error(&self, error: Option<String>) -> Result<Self, EntityError> {
        self.apply(SelectChange::Error(error))
    }

    pub fn with_state(&self, state: FieldState) -> Result<Self, EntityError> {
        self.apply(SelectChange::State(state))
    }

    pub fn with_placeholder(&self, placeholder: impl Into<String>) -> Result<Self, EntityError> {
        self.apply(SelectChange::Placeholder(placeholder.into()))
    }

    pub fn with_size(&self, size: SelectSize) -> Result<Self, EntityError> {
        self.apply(SelectChange::Size(size))
    }

    fn apply(&self, change: SelectChange<T>) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            SelectChange::Selected(value) => next.selected_value = value,
            SelectChange::Options(options) => {
                let still_selectable = next.selected_value.as_ref().is_some_and(|selected| {
                    options
                        .iter()
                        .any(|option| &option.value == selected && !option.disabled)
                });
                if !still_selectable {
                    next.selected_value = None;
                }
                next.options = options;
            }
            SelectChange::Disabled(disabled) => {
                next.disabled = disabled;
                if disabled {
                    next.error = None;
                    next.state = FieldState::Default;
                    next.open = false;
                }
            }
            SelectChange::Required(required) => next.required = required,
            SelectChange::Open(open) => next.open = open,
            SelectChange::Error(error) => {
                next.state = state_for_error(error.as_deref(), next.state);
                next.error = error;
            }
            SelectChange::State(state) => next.state = state,
            SelectChange::Placeholder(placeholder) => next.placeholder = placeholder,
            SelectChange::Size(size) => next.size = size,
        }
        Self::from_state(next)
    }
}

fn validate<T: PartialEq>(state: &SelectState<T>) -> Result<(), Violation> {
    let options = &state.options;
    let duplicate = options
        .iter()
        .enumerate()
        .any(|(i, option)| options[..i].iter().any(|prev| prev.value == option.value));
    if duplicate {
        return Err(Violation::DuplicateOptionValues);
    }

    if let Some(selected) = &state.selected_value {
        match options.iter().find(|option| &option.value == selected) {
            None => return Err(Violation::UnknownSelectedValue),
            Some(option) if option.disabled => return Err(Violation::DisabledOptionSelected),
            Some(_) => {}
        }
    }

    if state.disabled && state.error.is_some() {
        return Err(Violation::DisabledSelectWithError);
    }
    if state.error.is_some() && state.state != FieldState::Error {
        return Err(Violation::SelectErrorOutsideErrorState);
    }
    if options.is_empty() && state.placeholder.trim().is_empty() {
        return Err(Violation::EmptySelectWithoutPlaceholder);
    }
    if state.disabled && state.open {
        return Err(Violation::DisabledSelectOpen);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana"),
            SelectOption::new("cherry", "Cherry").disabled(true),
        ]
    }

    fn select() -> SelectEntity<&'static str> {
        SelectEntity::create(SelectProps::new().options(fruits())).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let select = select();
        assert_eq!(select.placeholder(), "Select an option");
        assert_eq!(select.display_label(), "Select an option");
        assert!(!select.has_selection());
        assert!(select.is_interactive());
        assert!(!select.is_open());
        assert_eq!(select.field_state(), FieldState::Default);
        assert_eq!(select.enabled_options().count(), 2);
    }

    #[test]
    fn test_invariant_messages() {
        let cases: Vec<(SelectProps<&'static str>, &str)> = vec![
            (
                SelectProps::new().options(vec![
                    SelectOption::new("a", "A"),
                    SelectOption::new("a", "Also A"),
                ]),
                "Options must have unique values",
            ),
            (
                SelectProps::new().options(fruits()).selected("kiwi"),
                "Selected value must exist in options",
            ),
            (
                SelectProps::new().options(fruits()).selected("cherry"),
                "Selected option cannot be disabled",
            ),
            (
                SelectProps::new()
                    .options(fruits())
                    .disabled(true)
                    .error("Bad")
                    .state(FieldState::Error),
                "Disabled selects cannot have errors",
            ),
            (
                SelectProps::new().options(fruits()).error("Bad"),
                "Selects with errors must be in error state",
            ),
            (
                SelectProps::new().placeholder(""),
                "Selects without options must have a placeholder",
            ),
            (
                SelectProps::new().options(fruits()).disabled(true).open(true),
                "Disabled selects cannot be open",
            ),
        ];

        for (props, message) in cases {
            let err = SelectEntity::create(props).unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_empty_select_with_default_placeholder_is_valid() {
        let select = SelectEntity::<u32>::create(SelectProps::new()).unwrap();
        assert!(select.is_empty());
    }

    #[test]
    fn test_selection_and_display_label() {
        let selected = select().with_selected_value(Some("banana")).unwrap();
        assert_eq!(selected.display_label(), "Banana");
        assert_eq!(selected.selected_option().map(|o| o.label.as_str()), Some("Banana"));

        let err = select().with_selected_value(Some("cherry")).unwrap_err();
        assert_eq!(err.to_string(), "Selected option cannot be disabled");
    }

    #[test]
    fn test_with_options_clears_stale_selection() {
        let selected = select().with_selected_value(Some("apple")).unwrap();

        let kept = selected.with_options(fruits()).unwrap();
        assert_eq!(kept.selected_value(), Some(&"apple"));

        let removed = selected
            .with_options(vec![SelectOption::new("banana", "Banana")])
            .unwrap();
        assert!(!removed.has_selection());

        let now_disabled = selected
            .with_options(vec![SelectOption::new("apple", "Apple").disabled(true)])
            .unwrap();
        assert!(!now_disabled.has_selection());
    }

    #[test]
    fn test_error_state_coupling() {
        let select = select().with_state(FieldState::Success).unwrap();
        let errored = select.with_error(Some("Pick one".into())).unwrap();
        assert_eq!(errored.field_state(), FieldState::Error);

        let cleared = errored.with_error(None).unwrap();
        assert_eq!(cleared.field_state(), FieldState::Default);
        assert!(!cleared.has_error());
    }

    #[test]
    fn test_disable_clears_error_and_closes() {
        let select = select()
            .with_open(true)
            .unwrap()
            .with_error(Some("Pick one".into()))
            .unwrap();
        let disabled = select.with_disabled(true).unwrap();

        assert!(!disabled.has_error());
        assert!(!disabled.is_open());
        assert_eq!(disabled.field_state(), FieldState::Default);
    }

    #[test]
    fn test_struct_values() {
        #[derive(Clone, Debug, PartialEq)]
        struct Country {
            code: &'static str,
        }

        let select = SelectEntity::create(
            SelectProps::new()
                .option(SelectOption::new(Country { code: "NL" }, "Netherlands"))
                .option(SelectOption::new(Country { code: "JP" }, "Japan"))
                .selected(Country { code: "JP" }),
        )
        .unwrap();
        assert_eq!(select.display_label(), "Japan");
        assert!(select.is_selectable(&Country { code: "NL" }));
    }
}
