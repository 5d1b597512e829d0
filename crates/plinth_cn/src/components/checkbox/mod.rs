//! Checkbox component with tri-state value and pluggable validation rules
//!
//! ```rust
//! use plinth_cn::checkbox::{rule, CheckboxController, CheckboxProps};
//!
//! let mut terms = CheckboxController::new(CheckboxProps::new().label("Accept terms").required(true))?;
//! terms.add_rule(rule(|cb| (!cb.has_label()).then(|| "Missing label".to_string())));
//!
//! let errors = terms.validate()?;
//! assert_eq!(errors, vec!["This field is required".to_string()]);
//!
//! pollster::block_on(terms.on_toggle(None))?;
//! assert!(terms.validate()?.is_empty());
//! # Ok::<(), plinth_cn::ComponentError>(())
//! ```

pub mod controller;
pub mod entity;
pub mod presenter;
pub mod use_cases;

pub use controller::CheckboxController;
pub use entity::{CheckboxEntity, CheckboxProps, CheckboxSize, CheckboxState, CheckboxValue};
pub use presenter::{AriaChecked, CheckboxPresenter, CheckboxStyles, CheckboxViewModel};
pub use use_cases::{
    rule, CheckboxValidation, HandleCheckboxToggle, ToggleChange, ValidateCheckbox,
    ValidationRule,
};
