//! Separator component - a horizontal or vertical divider line

pub mod controller;
pub mod entity;
pub mod presenter;

pub use controller::SeparatorController;
pub use entity::{SeparatorEntity, SeparatorOrientation, SeparatorProps, SeparatorState};
pub use presenter::{SeparatorPresenter, SeparatorStyles, SeparatorViewModel};
