//! Button component
//!
//! ```rust
//! use plinth_cn::button::{ButtonController, ButtonProps, ButtonVariant};
//!
//! let mut button = ButtonController::new(ButtonProps::new().variant(ButtonVariant::Destructive))?;
//! button.set_loading(true)?;
//! assert!(button.view_model().aria_busy);
//! # Ok::<(), plinth_cn::ComponentError>(())
//! ```

pub mod controller;
pub mod entity;
pub mod presenter;
pub mod use_cases;

pub use controller::ButtonController;
pub use entity::{ButtonEntity, ButtonProps, ButtonSize, ButtonState, ButtonVariant};
pub use presenter::{ButtonPresenter, ButtonStyles, ButtonViewModel};
pub use use_cases::HandleButtonClick;
