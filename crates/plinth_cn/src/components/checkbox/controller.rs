//! Checkbox controller

use plinth_core::Handler;
use plinth_theme::ThemeState;

use super::entity::{CheckboxEntity, CheckboxProps, CheckboxSize, CheckboxState, CheckboxValue};
use super::presenter::{CheckboxPresenter, CheckboxViewModel};
use super::use_cases::{HandleCheckboxToggle, ToggleChange, ValidateCheckbox, ValidationRule};
use crate::components::{resolve_theme, settle};
use crate::error::Result;

/// Owns the current checkbox entity and its custom validation rules
#[derive(Clone)]
pub struct CheckboxController {
    checkbox: CheckboxEntity,
    rules: Vec<ValidationRule>,
    theme: Option<ThemeState>,
}

impl std::fmt::Debug for CheckboxController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxController")
            .field("checkbox", &self.checkbox)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl CheckboxController {
    pub fn new(props: CheckboxProps) -> Result<Self> {
        Ok(Self {
            checkbox: CheckboxEntity::create(props)?,
            rules: Vec::new(),
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &CheckboxEntity {
        &self.checkbox
    }

    pub fn current_state(&self) -> CheckboxState {
        self.checkbox.current_state()
    }

    /// Toggle and notify `on_change`; a failing handler leaves the value unchanged
    pub async fn on_toggle(
        &mut self,
        on_change: Option<&Handler<CheckboxValue>>,
    ) -> Result<ToggleChange> {
        let outcome = HandleCheckboxToggle.execute(&self.checkbox, on_change).await;
        settle(&mut self.checkbox, outcome, "checkbox")
    }

    /// Register a custom rule, run after the required check
    pub fn add_rule(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Run every rule and store the first failure as the error; returns all failures
    pub fn validate(&mut self) -> Result<Vec<String>> {
        let outcome = ValidateCheckbox.execute(&self.checkbox, &self.rules);
        settle(&mut self.checkbox, outcome, "checkbox").map(|validation| validation.errors)
    }

    pub fn set_value(&mut self, value: impl Into<CheckboxValue>) -> Result<()> {
        self.checkbox = self.checkbox.with_value(value)?;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<()> {
        self.checkbox = self.checkbox.with_disabled(disabled)?;
        Ok(())
    }

    pub fn set_readonly(&mut self, readonly: bool) -> Result<()> {
        self.checkbox = self.checkbox.with_readonly(readonly)?;
        Ok(())
    }

    pub fn set_required(&mut self, required: bool) -> Result<()> {
        self.checkbox = self.checkbox.with_required(required)?;
        Ok(())
    }

    pub fn set_error(&mut self, error: Option<String>) -> Result<()> {
        self.checkbox = self.checkbox.with_error(error)?;
        Ok(())
    }

    pub fn set_label(&mut self, label: Option<String>) -> Result<()> {
        self.checkbox = self.checkbox.with_label(label)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: CheckboxSize) -> Result<()> {
        self.checkbox = self.checkbox.with_size(size)?;
        Ok(())
    }

    pub fn view_model(&self) -> CheckboxViewModel {
        CheckboxPresenter::present(&self.checkbox, &resolve_theme(self.theme.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::checkbox::rule;
    use plinth_core::{handler_fn, CallbackError};

    fn controller(props: CheckboxProps) -> CheckboxController {
        CheckboxController::new(props)
            .unwrap()
            .with_theme(ThemeState::light())
    }

    #[test]
    fn test_toggle_updates_view_model() {
        let mut checkbox = controller(CheckboxProps::new());
        let change = pollster::block_on(checkbox.on_toggle(None)).unwrap();

        assert_eq!(change.new_value, CheckboxValue::Checked);
        assert!(checkbox.view_model().checked);
    }

    #[test]
    fn test_disabled_toggle_raises_and_keeps_value() {
        let mut checkbox = controller(CheckboxProps::new().value(false).disabled(true));
        let err = pollster::block_on(checkbox.on_toggle(None)).unwrap_err();

        assert!(err.to_string().contains("not interactive"));
        assert!(!checkbox.view_model().checked);
    }

    #[test]
    fn test_failed_handler_rolls_back() {
        let mut checkbox = controller(CheckboxProps::new().value(true));
        let failing = handler_fn(|_: CheckboxValue| Err(CallbackError::from("offline")));

        let err = pollster::block_on(checkbox.on_toggle(Some(&failing))).unwrap_err();

        assert_eq!(err.to_string(), "offline");
        assert!(checkbox.view_model().checked);
    }

    #[test]
    fn test_validate_with_rules() {
        let mut checkbox = controller(CheckboxProps::new().required(true));
        checkbox.add_rule(rule(|cb| {
            (!cb.is_checked()).then(|| "Please confirm you are over 18".to_string())
        }));

        let errors = checkbox.validate().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            checkbox.view_model().error.as_deref(),
            Some("This field is required")
        );

        checkbox.set_value(true).unwrap();
        assert!(checkbox.validate().unwrap().is_empty());
        assert!(!checkbox.view_model().aria_invalid);

        checkbox.clear_rules();
        checkbox.set_value(false).unwrap();
        assert_eq!(checkbox.validate().unwrap(), vec!["This field is required".to_string()]);
    }

    #[test]
    fn test_setters() {
        let mut checkbox = controller(CheckboxProps::new());
        checkbox.set_readonly(true).unwrap();
        checkbox.set_disabled(true).unwrap();
        checkbox.set_label(Some("Subscribe".into())).unwrap();
        checkbox.set_size(CheckboxSize::Large).unwrap();
        checkbox.set_required(true).unwrap();
        checkbox.set_error(Some("Nope".into())).unwrap();

        let state = checkbox.current_state();
        assert!(state.disabled);
        assert!(!state.readonly);
        assert_eq!(state.label.as_deref(), Some("Subscribe"));
        assert_eq!(state.size, CheckboxSize::Large);
        assert!(state.required);
        assert_eq!(checkbox.entity().error(), Some("Nope"));
    }
}
