//! Modal entity
//!
//! The modal is a small state machine. `open` flips immediately on an open or
//! close request, while `animation_state` passes through `Opening`/`Closing`
//! until the rendering layer reports the animation finished:
//!
//! ```text
//! Closed --open--> Opening --animation end--> Open
//!   ^                                          |
//!   +--animation end-- Closing <--close--------+
//! ```

use serde::Serialize;

use crate::error::{EntityError, TransitionError, Violation};

/// Modal animation phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Modal size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub animation_state: AnimationState,
    pub size: ModalSize,
    /// Follows `open`; an open modal always traps focus
    pub focus_trapped: bool,
    pub close_on_backdrop_click: bool,
    pub close_on_escape: bool,
    pub title: Option<String>,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            animation_state: AnimationState::Closed,
            size: ModalSize::default(),
            focus_trapped: false,
            close_on_backdrop_click: true,
            close_on_escape: true,
            title: None,
        }
    }
}

/// Partial modal state; unset fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct ModalProps {
    open: Option<bool>,
    animation_state: Option<AnimationState>,
    size: Option<ModalSize>,
    close_on_backdrop_click: Option<bool>,
    close_on_escape: Option<bool>,
    title: Option<String>,
}

impl ModalProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn animation_state(mut self, animation_state: AnimationState) -> Self {
        self.animation_state = Some(animation_state);
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn close_on_backdrop_click(mut self, close: bool) -> Self {
        self.close_on_backdrop_click = Some(close);
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = Some(close);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

enum ModalChange {
    Open,
    Close,
    FinishOpening,
    FinishClosing,
    Size(ModalSize),
    CloseOnBackdropClick(bool),
    CloseOnEscape(bool),
    Title(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalEntity {
    state: ModalState,
}

impl ModalEntity {
    pub fn create(props: ModalProps) -> Result<Self, EntityError> {
        let open = props.open.unwrap_or(false);
        let default_animation = if open {
            AnimationState::Open
        } else {
            AnimationState::Closed
        };
        let state = ModalState {
            open,
            animation_state: props.animation_state.unwrap_or(default_animation),
            size: props.size.unwrap_or_default(),
            focus_trapped: open,
            close_on_backdrop_click: props.close_on_backdrop_click.unwrap_or(true),
            close_on_escape: props.close_on_escape.unwrap_or(true),
            title: props.title,
        };
        Self::from_state(state)
    }

    fn from_state(mut state: ModalState) -> Result<Self, EntityError> {
        state.focus_trapped = state.open;
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> ModalState {
        self.state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn animation_state(&self) -> AnimationState {
        self.state.animation_state
    }

    pub fn size(&self) -> ModalSize {
        self.state.size
    }

    pub fn is_focus_trapped(&self) -> bool {
        self.state.focus_trapped
    }

    pub fn closes_on_backdrop_click(&self) -> bool {
        self.state.close_on_backdrop_click
    }

    pub fn closes_on_escape(&self) -> bool {
        self.state.close_on_escape
    }

    pub fn title(&self) -> Option<&str> {
        self.state.title.as_deref()
    }

    /// Mid-way through an open or close animation
    pub fn is_animating(&self) -> bool {
        matches!(
            self.state.animation_state,
            AnimationState::Opening | AnimationState::Closing
        )
    }

    /// Rendered at all, including while closing
    pub fn is_visible(&self) -> bool {
        self.state.animation_state != AnimationState::Closed
    }

    pub fn can_close_on_backdrop_click(&self) -> bool {
        self.state.open && self.state.close_on_backdrop_click
    }

    pub fn can_close_on_escape(&self) -> bool {
        self.state.open && self.state.close_on_escape
    }

    /// Open and start the opening animation, trapping focus
    pub fn with_open(&self) -> Result<Self, EntityError> {
        self.apply(ModalChange::Open)
    }

    /// Finish the opening animation
    pub fn with_animation_open(&self) -> Result<Self, EntityError> {
        self.apply(ModalChange::FinishOpening)
    }

    /// Close and start the closing animation, releasing focus
    pub fn with_closed(&self) -> Result<Self, EntityError> {
        self.apply(ModalChange::Close)
    }

    /// Finish the closing animation
    pub fn with_animation_closed(&self) -> Result<Self, EntityError> {
        self.apply(ModalChange::FinishClosing)
    }

    pub fn with_size(&self, size: ModalSize) -> Result<Self, EntityError> {
        self.apply(ModalChange::Size(size))
    }

    pub fn with_close_on_backdrop_click(&self, close: bool) -> Result<Self, EntityError> {
        self.apply(ModalChange::CloseOnBackdropClick(close))
    }

    pub fn with_close_on_escape(&self, close: bool) -> Result<Self, EntityError> {
        self.apply(ModalChange::CloseOnEscape(close))
    }

    pub fn with_title(&self, title: Option<String>) -> Result<Self, EntityError> {
        self.apply(ModalChange::Title(title))
    }

    fn apply(&self, change: ModalChange) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            ModalChange::Open => {
                next.open = true;
                next.animation_state = AnimationState::Opening;
            }
            ModalChange::Close => {
                next.open = false;
                next.animation_state = AnimationState::Closing;
            }
            ModalChange::FinishOpening => {
                if !next.open {
                    return Err(TransitionError::FinishOpeningClosedModal.into());
                }
                next.animation_state = AnimationState::Open;
            }
            ModalChange::FinishClosing => {
                if next.open {
                    return Err(TransitionError::FinishClosingOpenModal.into());
                }
                next.animation_state = AnimationState::Closed;
            }
            ModalChange::Size(size) => next.size = size,
            ModalChange::CloseOnBackdropClick(close) => next.close_on_backdrop_click = close,
            ModalChange::CloseOnEscape(close) => next.close_on_escape = close,
            ModalChange::Title(title) => next.title = title,
        }
        Self::from_state(next)
    }
}

fn validate(state: &ModalState) -> Result<(), Violation> {
    if !state.open
        && matches!(
            state.animation_state,
            AnimationState::Opening | AnimationState::Open
        )
    {
        return Err(Violation::ClosedModalWithOpenAnimation);
    }
    if state.open && state.animation_state == AnimationState::Closed {
        return Err(Violation::OpenModalWithClosedAnimation);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let modal = ModalEntity::create(ModalProps::new()).unwrap();
        assert_eq!(modal.current_state(), ModalState::default());
        assert!(!modal.is_visible());
        assert!(!modal.can_close_on_escape());
    }

    #[test]
    fn test_create_open_derives_animation_and_focus() {
        let modal = ModalEntity::create(ModalProps::new().open(true)).unwrap();
        assert_eq!(modal.animation_state(), AnimationState::Open);
        assert!(modal.is_focus_trapped());
        assert!(modal.can_close_on_backdrop_click());
    }

    #[test]
    fn test_invariants() {
        let err = ModalEntity::create(ModalProps::new().animation_state(AnimationState::Opening))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Closed modals cannot have opening or open animation state"
        );

        let err = ModalEntity::create(
            ModalProps::new()
                .open(true)
                .animation_state(AnimationState::Closed),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Open modals cannot have closed animation state");
    }

    #[test]
    fn test_full_cycle() {
        let closed = ModalEntity::create(ModalProps::new()).unwrap();

        let opening = closed.with_open().unwrap();
        assert!(opening.is_open() && opening.is_animating() && opening.is_focus_trapped());

        let open = opening.with_animation_open().unwrap();
        assert_eq!(open.animation_state(), AnimationState::Open);
        assert!(!open.is_animating());

        let closing = open.with_closed().unwrap();
        assert!(!closing.is_open());
        assert!(closing.is_visible());
        assert!(!closing.is_focus_trapped());

        let done = closing.with_animation_closed().unwrap();
        assert_eq!(done, closed);
    }

    #[test]
    fn test_invalid_animation_transitions() {
        let closed = ModalEntity::create(ModalProps::new()).unwrap();
        let err = closed.with_animation_open().unwrap_err();
        assert!(matches!(err, EntityError::InvalidTransition(_)));
        assert_eq!(err.to_string(), "Cannot finish opening a closed modal");

        let open = ModalEntity::create(ModalProps::new().open(true)).unwrap();
        let err = open.with_animation_closed().unwrap_err();
        assert_eq!(err.to_string(), "Cannot finish closing an open modal");
    }

    #[test]
    fn test_focus_trap_follows_open() {
        let closed = ModalEntity::create(ModalProps::new().size(ModalSize::Small)).unwrap();
        assert!(!closed.is_focus_trapped());

        let opening = closed.with_open().unwrap();
        assert!(opening.is_focus_trapped());
        // Config changes while open keep focus trapped
        assert!(opening.with_title(Some("Rename".into())).unwrap().is_focus_trapped());

        let cycled = opening
            .with_animation_open()
            .and_then(|m| m.with_closed())
            .and_then(|m| m.with_animation_closed())
            .unwrap();
        assert!(!cycled.is_focus_trapped());
        assert_eq!(cycled, closed);
    }

    #[test]
    fn test_backdrop_and_escape_flags() {
        let modal = ModalEntity::create(
            ModalProps::new()
                .open(true)
                .close_on_backdrop_click(false)
                .title("Delete file"),
        )
        .unwrap();
        assert!(!modal.can_close_on_backdrop_click());
        assert!(modal.can_close_on_escape());
        assert_eq!(modal.title(), Some("Delete file"));

        let modal = modal.with_close_on_escape(false).unwrap();
        assert!(!modal.can_close_on_escape());
    }
}
