//! Multi-line text input with length limits and counters

pub mod controller;
pub mod entity;
pub mod presenter;
pub mod use_cases;

pub use controller::TextareaController;
pub use entity::{TextareaEntity, TextareaProps, TextareaResize, TextareaSize, TextareaState};
pub use presenter::{TextareaPresenter, TextareaStyles, TextareaViewModel};
pub use use_cases::{HandleTextareaChange, TextareaChange, ValidateTextarea};
