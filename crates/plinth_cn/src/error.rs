//! Error types for plinth_cn
//!
//! Entities raise [`EntityError`] when asked to represent an invalid state.
//! Use-cases never raise; controllers turn a failed use-case outcome into
//! [`ComponentError::ActionFailed`].

use thiserror::Error;

/// A broken widget rule; the display text is the fixed rule message
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    // Button
    #[error("Loading buttons must be disabled")]
    LoadingButtonNotDisabled,

    // Checkbox
    #[error("Checkbox cannot be both disabled and readonly")]
    CheckboxDisabledAndReadonly,

    // Modal
    #[error("Closed modals cannot have opening or open animation state")]
    ClosedModalWithOpenAnimation,
    #[error("Open modals cannot have closed animation state")]
    OpenModalWithClosedAnimation,

    // Select
    #[error("Options must have unique values")]
    DuplicateOptionValues,
    #[error("Selected value must exist in options")]
    UnknownSelectedValue,
    #[error("Selected option cannot be disabled")]
    DisabledOptionSelected,
    #[error("Disabled selects cannot have errors")]
    DisabledSelectWithError,
    #[error("Selects with errors must be in error state")]
    SelectErrorOutsideErrorState,
    #[error("Selects without options must have a placeholder")]
    EmptySelectWithoutPlaceholder,
    #[error("Disabled selects cannot be open")]
    DisabledSelectOpen,

    // Textarea
    #[error("Read-only textareas cannot be required")]
    ReadOnlyTextareaRequired,
    #[error("Disabled textareas cannot have errors")]
    DisabledTextareaWithError,
    #[error("Textareas with errors must be in error state")]
    TextareaErrorOutsideErrorState,
    #[error("Max length must be greater than 0")]
    ZeroMaxLength,
    #[error("Min length cannot exceed max length")]
    MinLengthExceedsMaxLength,
    #[error("Rows must be greater than 0")]
    ZeroRows,

    // Avatar
    #[error("Avatar source cannot be empty")]
    EmptyAvatarSource,
    #[error("Avatar fallback cannot be empty")]
    EmptyAvatarFallback,
    #[error("Avatar fallback must be at most 3 characters")]
    AvatarFallbackTooLong,

    // Separator
    #[error("Separator thickness and spacing must be finite")]
    NonFiniteSeparatorDimension,
    #[error("Separator thickness must be greater than 0")]
    NonPositiveSeparatorThickness,
    #[error("Separator spacing cannot be negative")]
    NegativeSeparatorSpacing,

    // Skeleton
    #[error("Skeleton width and height must be finite")]
    NonFiniteSkeletonDimension,
    #[error("Skeleton width must be greater than 0")]
    NonPositiveSkeletonWidth,
    #[error("Skeleton height must be greater than 0")]
    NonPositiveSkeletonHeight,
    #[error("Skeleton must render at least one line")]
    ZeroSkeletonLines,
    #[error("Circular skeletons must have equal width and height")]
    NonSquareCircularSkeleton,
}

/// A state-machine step requested from the wrong state
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot finish opening a closed modal")]
    FinishOpeningClosedModal,
    #[error("Cannot finish closing an open modal")]
    FinishClosingOpenModal,
}

/// Errors raised by entity construction and transitions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityError {
    #[error(transparent)]
    InvariantViolation(#[from] Violation),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),
}

/// Errors surfaced by controllers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The requested state is invalid
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// A use-case reported failure; the message is passed through verbatim
    #[error("{0}")]
    ActionFailed(String),
}

impl From<Violation> for ComponentError {
    fn from(violation: Violation) -> Self {
        ComponentError::Entity(violation.into())
    }
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ComponentError>;
