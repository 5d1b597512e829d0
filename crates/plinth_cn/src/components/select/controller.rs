//! Select controller

use std::fmt::Debug;

use plinth_core::Handler;
use plinth_theme::ThemeState;

use super::entity::{SelectEntity, SelectOption, SelectProps, SelectSize, SelectState};
use super::presenter::{SelectPresenter, SelectViewModel};
use super::use_cases::{HandleSelectChange, SelectChange, ToggleSelectMenu, ValidateSelect};
use crate::components::{resolve_theme, settle};
use crate::error::Result;
use crate::field::FieldValidation;

#[derive(Clone, Debug)]
pub struct SelectController<T> {
    select: SelectEntity<T>,
    theme: Option<ThemeState>,
}

impl<T: Clone + PartialEq + Debug> SelectController<T> {
    pub fn new(props: SelectProps<T>) -> Result<Self> {
        Ok(Self {
            select: SelectEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &SelectEntity<T> {
        &self.select
    }

    pub fn current_state(&self) -> SelectState<T> {
        self.select.current_state()
    }

    /// Select `value` and notify `on_change`; the selection is rolled back if it fails
    pub async fn set_value(
        &mut self,
        value: T,
        on_change: Option<&Handler<T>>,
    ) -> Result<SelectChange<T>> {
        let outcome = HandleSelectChange
            .execute(&self.select, value, on_change)
            .await;
        settle(&mut self.select, outcome, "select")
    }

    pub fn validate(&mut self) -> Result<FieldValidation> {
        let outcome = ValidateSelect.execute(&self.select);
        settle(&mut self.select, outcome, "select")
    }

    pub fn toggle_menu(&mut self) -> Result<()> {
        let outcome = ToggleSelectMenu.execute(&self.select);
        settle(&mut self.select, outcome, "select")
    }

    pub fn close_menu(&mut self) -> Result<()> {
        self.select = self.select.with_open(false)?;
        Ok(())
    }

    pub fn set_options(&mut self, options: Vec<SelectOption<T>>) -> Result<()> {
        self.select = self.select.with_options(options)?;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<()> {
        self.select = self.select.with_disabled(disabled)?;
        Ok(())
    }

    pub fn set_required(&mut self, required: bool) -> Result<()> {
        self.select = self.select.with_required(required)?;
        Ok(())
    }

    pub fn set_error(&mut self, error: Option<String>) -> Result<()> {
        self.select = self.select.with_error(error)?;
        Ok(())
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> Result<()> {
        self.select = self.select.with_placeholder(placeholder)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: SelectSize) -> Result<()> {
        self.select = self.select.with_size(size)?;
        Ok(())
    }

    pub fn view_model(&self) -> SelectViewModel<T> {
        SelectPresenter::present(&self.select, &resolve_theme(self.theme.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use crate::field::FieldState;
    use plinth_core::{handler_fn, CallbackError};

    fn controller() -> SelectController<String> {
        SelectController::new(
            SelectProps::new()
                .options(vec![
                    SelectOption::new("us".to_string(), "United States"),
                    SelectOption::new("ca".to_string(), "Canada"),
                ])
                .required(true),
        )
        .unwrap()
        .with_theme(ThemeState::light())
    }

    #[test]
    fn test_set_value_and_validate() {
        let mut select = controller();

        let validation = select.validate().unwrap();
        assert_eq!(validation, FieldValidation::failed("Please select an option"));
        assert_eq!(select.view_model().state, FieldState::Error);

        let change = pollster::block_on(select.set_value("ca".into(), None)).unwrap();
        assert_eq!(change.new_value, "ca");
        assert_eq!(select.view_model().display_label, "Canada");

        assert!(select.validate().unwrap().valid);
        assert_eq!(select.view_model().error, None);
    }

    #[test]
    fn test_set_value_failure_raises_and_rolls_back() {
        let mut select = controller();
        let failing = handler_fn(|_: String| Err(CallbackError::from("quota exceeded")));

        let err = pollster::block_on(select.set_value("us".into(), Some(&failing))).unwrap_err();

        assert_eq!(err, ComponentError::ActionFailed("quota exceeded".into()));
        assert!(!select.view_model().has_selection);
    }

    #[test]
    fn test_menu_toggling() {
        let mut select = controller();
        select.toggle_menu().unwrap();
        assert!(select.view_model().aria_expanded);
        select.close_menu().unwrap();
        assert!(!select.view_model().open);

        select.toggle_menu().unwrap();
        select.set_disabled(true).unwrap();
        assert!(!select.view_model().open);
        select.toggle_menu().unwrap();
        assert!(!select.view_model().open);
    }

    #[test]
    fn test_setters() {
        let mut select = controller();
        pollster::block_on(select.set_value("us".into(), None)).unwrap();

        select
            .set_options(vec![SelectOption::new("mx".to_string(), "Mexico")])
            .unwrap();
        assert!(!select.view_model().has_selection);

        select.set_placeholder("Country").unwrap();
        select.set_size(SelectSize::Large).unwrap();
        select.set_required(false).unwrap();
        select.set_error(Some("Unavailable".into())).unwrap();

        let state = select.current_state();
        assert_eq!(state.placeholder, "Country");
        assert_eq!(state.size, SelectSize::Large);
        assert!(!state.required);
        assert_eq!(state.state, FieldState::Error);
    }

    #[test]
    fn test_setter_rejects_invalid_state() {
        let mut select = SelectController::<u8>::new(SelectProps::new()).unwrap();
        let err = select.set_placeholder("  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Selects without options must have a placeholder"
        );
    }
}
