//! Avatar component - user image with fallback initials and a status indicator

pub mod controller;
pub mod entity;
pub mod presenter;

pub use controller::AvatarController;
pub use entity::{AvatarEntity, AvatarProps, AvatarShape, AvatarSize, AvatarState, AvatarStatus};
pub use presenter::{AvatarPresenter, AvatarStyles, AvatarViewModel};
