//! Modal controller

use plinth_core::Handler;
use plinth_theme::ThemeState;

use super::entity::{ModalEntity, ModalProps, ModalSize, ModalState};
use super::presenter::{ModalPresenter, ModalViewModel};
use super::use_cases::{
    AnimationPhase, CompleteModalAnimation, HandleBackdropClick, HandleEscapePress,
    HandleModalClose, HandleModalOpen,
};
use crate::components::{resolve_theme, settle};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct ModalController {
    modal: ModalEntity,
    theme: Option<ThemeState>,
}

impl ModalController {
    pub fn new(props: ModalProps) -> Result<Self> {
        Ok(Self {
            modal: ModalEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &ModalEntity {
        &self.modal
    }

    pub fn current_state(&self) -> ModalState {
        self.modal.current_state()
    }

    /// Open the modal. A failing handler is reported but the modal stays open.
    pub async fn on_open(&mut self, on_open: Option<&Handler<()>>) -> Result<()> {
        let outcome = HandleModalOpen.execute(&self.modal, on_open).await;
        settle(&mut self.modal, outcome, "modal")
    }

    /// Close the modal. A failing handler is reported but the modal stays closed.
    pub async fn on_close(&mut self, on_close: Option<&Handler<()>>) -> Result<()> {
        let outcome = HandleModalClose.execute(&self.modal, on_close).await;
        settle(&mut self.modal, outcome, "modal")
    }

    /// Returns whether the click dismissed the modal
    pub async fn on_backdrop_click(&mut self, on_close: Option<&Handler<()>>) -> Result<bool> {
        let outcome = HandleBackdropClick.execute(&self.modal, on_close).await;
        settle(&mut self.modal, outcome, "modal").map(|dismissal| dismissal.dismissed)
    }

    /// Returns whether the key press dismissed the modal
    pub async fn on_escape(&mut self, on_close: Option<&Handler<()>>) -> Result<bool> {
        let outcome = HandleEscapePress.execute(&self.modal, on_close).await;
        settle(&mut self.modal, outcome, "modal").map(|dismissal| dismissal.dismissed)
    }

    /// Called by the renderer when an open or close animation finishes
    pub fn on_animation_end(&mut self) -> Result<AnimationPhase> {
        let outcome = CompleteModalAnimation.execute(&self.modal);
        settle(&mut self.modal, outcome, "modal")
    }

    pub fn set_size(&mut self, size: ModalSize) -> Result<()> {
        self.modal = self.modal.with_size(size)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: Option<String>) -> Result<()> {
        self.modal = self.modal.with_title(title)?;
        Ok(())
    }

    pub fn set_close_on_backdrop_click(&mut self, close: bool) -> Result<()> {
        self.modal = self.modal.with_close_on_backdrop_click(close)?;
        Ok(())
    }

    pub fn set_close_on_escape(&mut self, close: bool) -> Result<()> {
        self.modal = self.modal.with_close_on_escape(close)?;
        Ok(())
    }

    pub fn view_model(&self) -> ModalViewModel {
        ModalPresenter::present(&self.modal, &resolve_theme(self.theme.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::modal::AnimationState;
    use crate::error::ComponentError;
    use plinth_core::{handler_fn, CallbackError};

    fn controller(props: ModalProps) -> ModalController {
        ModalController::new(props)
            .unwrap()
            .with_theme(ThemeState::light())
    }

    #[test]
    fn test_open_close_with_animations() {
        let mut modal = controller(ModalProps::new());

        pollster::block_on(modal.on_open(None)).unwrap();
        assert_eq!(modal.view_model().animation_state, AnimationState::Opening);

        let phase = modal.on_animation_end().unwrap();
        assert_eq!(phase.to, AnimationState::Open);

        pollster::block_on(modal.on_close(None)).unwrap();
        assert!(modal.view_model().visible);
        modal.on_animation_end().unwrap();
        assert!(!modal.view_model().visible);
    }

    #[test]
    fn test_open_failure_raises_but_stays_open() {
        let mut modal = controller(ModalProps::new());
        let failing = handler_fn(|()| Err(CallbackError::from("analytics offline")));

        let err = pollster::block_on(modal.on_open(Some(&failing))).unwrap_err();

        assert_eq!(err, ComponentError::ActionFailed("analytics offline".into()));
        assert!(modal.view_model().open);
    }

    #[test]
    fn test_backdrop_and_escape() {
        let mut modal = controller(ModalProps::new().open(true).close_on_escape(false));

        assert!(!pollster::block_on(modal.on_escape(None)).unwrap());
        assert!(modal.current_state().open);

        assert!(pollster::block_on(modal.on_backdrop_click(None)).unwrap());
        assert!(!modal.current_state().open);

        assert!(!pollster::block_on(modal.on_backdrop_click(None)).unwrap());
    }

    #[test]
    fn test_setters() {
        let mut modal = controller(ModalProps::new());
        modal.set_size(ModalSize::Large).unwrap();
        modal.set_title(Some("Confirm".into())).unwrap();
        modal.set_close_on_backdrop_click(false).unwrap();
        modal.set_close_on_escape(false).unwrap();

        let vm = modal.view_model();
        assert_eq!(vm.size, ModalSize::Large);
        assert_eq!(vm.title.as_deref(), Some("Confirm"));
        assert!(!vm.close_on_backdrop_click);
        assert!(!vm.close_on_escape);
    }
}
