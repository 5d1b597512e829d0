//! Themed components split into layers
//!
//! Every component follows the same layout:
//! - `entity`: immutable validated state with `with_*` transitions
//! - `use_cases`: stateless actions returning an [`Outcome`] (stateful widgets only)
//! - `controller`: holds the current entity, exposes setters and async actions
//! - `presenter`: maps an entity to a render-ready view-model

use plinth_core::Outcome;
use plinth_theme::ThemeState;

use crate::error::{ComponentError, Result};

pub mod avatar;
pub mod button;
pub mod checkbox;
pub mod modal;
pub mod select;
pub mod separator;
pub mod skeleton;
pub mod textarea;

pub use avatar::{AvatarController, AvatarEntity, AvatarProps, AvatarViewModel};
pub use button::{ButtonController, ButtonEntity, ButtonProps, ButtonViewModel};
pub use checkbox::{CheckboxController, CheckboxEntity, CheckboxProps, CheckboxViewModel};
pub use modal::{ModalController, ModalEntity, ModalProps, ModalViewModel};
pub use select::{SelectController, SelectEntity, SelectProps, SelectViewModel};
pub use separator::{SeparatorController, SeparatorEntity, SeparatorProps, SeparatorViewModel};
pub use skeleton::{SkeletonController, SkeletonEntity, SkeletonProps, SkeletonViewModel};
pub use textarea::{TextareaController, TextareaEntity, TextareaProps, TextareaViewModel};

/// Store the outcome's entity, then surface a failure as an error
pub(crate) fn settle<T, M>(slot: &mut T, outcome: Outcome<T, M>, widget: &'static str) -> Result<M> {
    let (updated, result) = outcome.into_result();
    *slot = updated;
    tracing::trace!(widget, success = result.is_ok(), "controller entity replaced");
    result.map_err(ComponentError::ActionFailed)
}

/// The pinned theme, or the installed one
pub(crate) fn resolve_theme(pinned: Option<&ThemeState>) -> ThemeState {
    match pinned {
        Some(theme) => theme.clone(),
        None => ThemeState::get(),
    }
}
