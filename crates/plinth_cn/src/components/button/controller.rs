//! Button controller

use plinth_core::Handler;
use plinth_theme::ThemeState;

use super::entity::{ButtonEntity, ButtonProps, ButtonSize, ButtonState, ButtonVariant};
use super::presenter::{ButtonPresenter, ButtonViewModel};
use super::use_cases::HandleButtonClick;
use crate::components::{resolve_theme, settle};
use crate::error::Result;

/// Owns the current button entity for one button instance
#[derive(Clone, Debug)]
pub struct ButtonController {
    button: ButtonEntity,
    theme: Option<ThemeState>,
}

impl ButtonController {
    pub fn new(props: ButtonProps) -> Result<Self> {
        Ok(Self {
            button: ButtonEntity::create(props)?,
            theme: None,
        })
    }

    /// Present with a fixed theme instead of the installed one
    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &ButtonEntity {
        &self.button
    }

    pub fn current_state(&self) -> ButtonState {
        self.button.current_state()
    }

    /// Run the click handler; fails if the button is not interactive or the
    /// handler fails
    pub async fn on_click(&mut self, on_click: Option<&Handler<()>>) -> Result<()> {
        let outcome = HandleButtonClick.execute(&self.button, on_click).await;
        settle(&mut self.button, outcome, "button")
    }

    pub fn set_variant(&mut self, variant: ButtonVariant) -> Result<()> {
        self.button = self.button.with_variant(variant)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: ButtonSize) -> Result<()> {
        self.button = self.button.with_size(size)?;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<()> {
        self.button = self.button.with_disabled(disabled)?;
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) -> Result<()> {
        self.button = self.button.with_loading(loading)?;
        Ok(())
    }

    pub fn set_full_width(&mut self, full_width: bool) -> Result<()> {
        self.button = self.button.with_full_width(full_width)?;
        Ok(())
    }

    pub fn view_model(&self) -> ButtonViewModel {
        ButtonPresenter::present(&self.button, &resolve_theme(self.theme.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use plinth_core::{handler_fn, CallbackError};

    fn controller(props: ButtonProps) -> ButtonController {
        ButtonController::new(props)
            .unwrap()
            .with_theme(ThemeState::light())
    }

    #[test]
    fn test_new_rejects_invalid_props() {
        let err = ButtonController::new(ButtonProps::new().loading(true)).unwrap_err();
        assert_eq!(err.to_string(), "Loading buttons must be disabled");
    }

    #[test]
    fn test_on_click_success() {
        let mut button = controller(ButtonProps::new());
        let on_click = handler_fn(|()| Ok(()));
        assert!(pollster::block_on(button.on_click(Some(&on_click))).is_ok());
    }

    #[test]
    fn test_on_click_disabled_raises() {
        let mut button = controller(ButtonProps::new().disabled(true));
        let err = pollster::block_on(button.on_click(None)).unwrap_err();
        assert_eq!(
            err,
            ComponentError::ActionFailed("Button is not interactive".into())
        );
    }

    #[test]
    fn test_on_click_handler_failure_raises() {
        let mut button = controller(ButtonProps::new());
        let failing = handler_fn(|()| Err(CallbackError::from("save failed")));
        let err = pollster::block_on(button.on_click(Some(&failing))).unwrap_err();
        assert_eq!(err.to_string(), "save failed");
        assert!(button.view_model().interactive);
    }

    #[test]
    fn test_setters_apply_coupling() {
        let mut button = controller(ButtonProps::new());

        button.set_loading(true).unwrap();
        let vm = button.view_model();
        assert!(vm.loading && vm.disabled);

        button.set_disabled(false).unwrap();
        let vm = button.view_model();
        assert!(!vm.loading && !vm.disabled);

        button.set_variant(ButtonVariant::Ghost).unwrap();
        button.set_size(ButtonSize::Large).unwrap();
        button.set_full_width(true).unwrap();
        assert_eq!(
            button.current_state(),
            ButtonState {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Large,
                disabled: false,
                loading: false,
                full_width: true,
            }
        );
    }

    #[test]
    fn test_view_model_is_fresh_each_call() {
        let button = controller(ButtonProps::new());
        assert_eq!(button.view_model(), button.view_model());
    }
}
