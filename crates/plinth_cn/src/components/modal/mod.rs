//! Modal dialog component
//!
//! ```rust
//! use plinth_cn::modal::{AnimationState, ModalController, ModalProps};
//!
//! let mut modal = ModalController::new(ModalProps::new().title("Delete project"))?;
//! pollster::block_on(modal.on_open(None))?;
//! assert_eq!(modal.view_model().animation_state, AnimationState::Opening);
//!
//! modal.on_animation_end()?;
//! assert!(pollster::block_on(modal.on_escape(None))?);
//! # Ok::<(), plinth_cn::ComponentError>(())
//! ```

pub mod controller;
pub mod entity;
pub mod presenter;
pub mod use_cases;

pub use controller::ModalController;
pub use entity::{AnimationState, ModalEntity, ModalProps, ModalSize, ModalState};
pub use presenter::{ModalPresenter, ModalStyles, ModalViewModel};
pub use use_cases::{
    AnimationPhase, CompleteModalAnimation, Dismissal, HandleBackdropClick, HandleEscapePress,
    HandleModalClose, HandleModalOpen,
};
