//! # Plinth Component Library (plinth_cn)
//!
//! Framework-agnostic state for design-system widgets. Every component is
//! split into layers so that behavior can be tested without a renderer:
//!
//! - **Entities**: immutable, validated widget state with `with_*` transitions
//! - **Use-cases**: async actions that guard, transition and await a user
//!   handler, returning an [`Outcome`](plinth_core::Outcome)
//! - **Controllers**: hold the current entity for one widget instance
//! - **Presenters**: map an entity and the [`ThemeState`](plinth_theme::ThemeState)
//!   to a serializable view-model
//!
//! ## Example
//!
//! ```rust
//! use plinth_cn::prelude::*;
//!
//! let mut notify = CheckboxController::new(cn::checkbox().label("Email me"))?;
//! pollster::block_on(notify.on_toggle(None))?;
//!
//! let vm = notify.view_model();
//! assert!(vm.checked);
//! assert_eq!(vm.role, "checkbox");
//! # Ok::<(), plinth_cn::ComponentError>(())
//! ```
//!
//! ## Components
//!
//! - **Button** - variants, sizes and a loading state
//! - **Checkbox** - tri-state value with pluggable validation rules
//! - **Modal** - open/close state machine with animation phases
//! - **Select** - generic single-select with option validation
//! - **Textarea** - length limits, counters and validation
//! - **Avatar**, **Separator**, **Skeleton** - stateless display widgets

pub mod components;
pub mod error;
pub mod field;
pub mod style;

pub use components::*;
pub use error::{ComponentError, EntityError, Result, TransitionError, Violation};
pub use field::{FieldState, FieldValidation};

/// Shorthand constructors for component props, used as `cn::button()`
pub mod cn {
    use crate::components::{
        avatar::AvatarProps, button::ButtonProps, checkbox::CheckboxProps, modal::ModalProps,
        select::SelectProps, separator::SeparatorProps, skeleton::SkeletonProps,
        textarea::TextareaProps,
    };

    pub fn button() -> ButtonProps {
        ButtonProps::new()
    }

    pub fn checkbox() -> CheckboxProps {
        CheckboxProps::new()
    }

    pub fn modal() -> ModalProps {
        ModalProps::new()
    }

    pub fn select<T>() -> SelectProps<T> {
        SelectProps::new()
    }

    pub fn textarea() -> TextareaProps {
        TextareaProps::new()
    }

    pub fn avatar() -> AvatarProps {
        AvatarProps::new()
    }

    pub fn separator() -> SeparatorProps {
        SeparatorProps::new()
    }

    pub fn skeleton() -> SkeletonProps {
        SkeletonProps::new()
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::avatar::{AvatarController, AvatarShape, AvatarSize, AvatarStatus};
    pub use crate::components::button::{ButtonController, ButtonSize, ButtonVariant};
    pub use crate::components::checkbox::{rule, CheckboxController, CheckboxSize, CheckboxValue};
    pub use crate::components::modal::{AnimationState, ModalController, ModalSize};
    pub use crate::components::select::{SelectController, SelectOption, SelectSize};
    pub use crate::components::separator::{SeparatorController, SeparatorOrientation};
    pub use crate::components::skeleton::{SkeletonAnimation, SkeletonController, SkeletonVariant};
    pub use crate::components::textarea::{TextareaController, TextareaResize, TextareaSize};
    pub use crate::error::ComponentError;
    pub use crate::field::{FieldState, FieldValidation};
    // Re-export the types needed to drive controllers
    pub use plinth_core::{handler, handler_fn, CallbackError, Handler};
    pub use plinth_theme::{ColorScheme, ColorToken, ThemeState};
}
