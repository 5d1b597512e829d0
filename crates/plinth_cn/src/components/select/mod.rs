//! Select component, generic over the option value type
//!
//! ```rust
//! use plinth_cn::select::{SelectController, SelectOption, SelectProps};
//!
//! let mut plan = SelectController::new(
//!     SelectProps::new()
//!         .option(SelectOption::new(1u32, "Free"))
//!         .option(SelectOption::new(2u32, "Pro"))
//!         .required(true),
//! )?;
//!
//! assert!(!plan.validate()?.valid);
//! pollster::block_on(plan.set_value(2, None))?;
//! assert_eq!(plan.view_model().display_label, "Pro");
//! assert!(plan.validate()?.valid);
//! # Ok::<(), plinth_cn::ComponentError>(())
//! ```

pub mod controller;
pub mod entity;
pub mod presenter;
pub mod use_cases;

pub use controller::SelectController;
pub use entity::{
    SelectEntity, SelectOption, SelectProps, SelectSize, SelectState, DEFAULT_PLACEHOLDER,
};
pub use presenter::{SelectOptionViewModel, SelectPresenter, SelectStyles, SelectViewModel};
pub use use_cases::{HandleSelectChange, SelectChange, ToggleSelectMenu, ValidateSelect};
