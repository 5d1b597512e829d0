//! Skeleton component - animated placeholder shown while content loads

pub mod controller;
pub mod entity;
pub mod presenter;

pub use controller::SkeletonController;
pub use entity::{SkeletonAnimation, SkeletonEntity, SkeletonProps, SkeletonState, SkeletonVariant};
pub use presenter::{SkeletonPresenter, SkeletonStyles, SkeletonViewModel};
