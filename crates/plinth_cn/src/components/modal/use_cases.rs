//! Modal actions
//!
//! Unlike checkbox and select, a failing modal handler does not roll back:
//! the open/close transition has already happened and is kept, the failure
//! is only reported.

use plinth_core::{invoke, Handler, Outcome};

use super::entity::{AnimationState, ModalEntity};

const OPEN_FALLBACK: &str = "Unknown error during open callback";
const CLOSE_FALLBACK: &str = "Unknown error during close callback";
const BACKDROP_FALLBACK: &str = "Unknown error during backdrop click callback";
const ESCAPE_FALLBACK: &str = "Unknown error during escape callback";

/// Whether a backdrop click or escape press closed the modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dismissal {
    pub dismissed: bool,
}

/// Animation step reported by [`CompleteModalAnimation`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationPhase {
    pub from: AnimationState,
    pub to: AnimationState,
}

fn entity_failure<M>(modal: &ModalEntity, err: impl ToString) -> Outcome<ModalEntity, M> {
    Outcome::failure(modal.clone(), err.to_string())
}

/// Open the modal and notify the handler; already open is a no-op
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleModalOpen;

impl HandleModalOpen {
    pub async fn execute(
        &self,
        modal: &ModalEntity,
        on_open: Option<&Handler<()>>,
    ) -> Outcome<ModalEntity> {
        if modal.is_open() {
            tracing::debug!(widget = "modal", "open ignored, already open");
            return Outcome::success(modal.clone());
        }

        let opened = match modal.with_open() {
            Ok(opened) => opened,
            Err(err) => return entity_failure(modal, err),
        };

        if let Err(err) = invoke(on_open, ()).await {
            let message = err.message_or(OPEN_FALLBACK);
            tracing::warn!(widget = "modal", error = %message, "open handler failed");
            return Outcome::failure(opened, message);
        }

        tracing::debug!(widget = "modal", "opened");
        Outcome::success(opened)
    }
}

/// Close the modal and notify the handler; already closed is a no-op
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleModalClose;

impl HandleModalClose {
    pub async fn execute(
        &self,
        modal: &ModalEntity,
        on_close: Option<&Handler<()>>,
    ) -> Outcome<ModalEntity> {
        if !modal.is_open() {
            tracing::debug!(widget = "modal", "close ignored, already closed");
            return Outcome::success(modal.clone());
        }

        let closed = match modal.with_closed() {
            Ok(closed) => closed,
            Err(err) => return entity_failure(modal, err),
        };

        if let Err(err) = invoke(on_close, ()).await {
            let message = err.message_or(CLOSE_FALLBACK);
            tracing::warn!(widget = "modal", error = %message, "close handler failed");
            return Outcome::failure(closed, message);
        }

        tracing::debug!(widget = "modal", "closed");
        Outcome::success(closed)
    }
}

async fn dismiss(
    modal: &ModalEntity,
    allowed: bool,
    handler: Option<&Handler<()>>,
    fallback: &str,
    trigger: &'static str,
) -> Outcome<ModalEntity, Dismissal> {
    if !allowed {
        tracing::debug!(widget = "modal", trigger, "dismissal not allowed");
        return Outcome::success_with(modal.clone(), Dismissal { dismissed: false });
    }

    let closed = match modal.with_closed() {
        Ok(closed) => closed,
        Err(err) => return entity_failure(modal, err),
    };

    if let Err(err) = invoke(handler, ()).await {
        let message = err.message_or(fallback);
        tracing::warn!(widget = "modal", trigger, error = %message, "dismiss handler failed");
        return Outcome::failure(closed, message);
    }

    tracing::debug!(widget = "modal", trigger, "dismissed");
    Outcome::success_with(closed, Dismissal { dismissed: true })
}

/// Close on backdrop click when the modal allows it
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleBackdropClick;

impl HandleBackdropClick {
    pub async fn execute(
        &self,
        modal: &ModalEntity,
        on_close: Option<&Handler<()>>,
    ) -> Outcome<ModalEntity, Dismissal> {
        dismiss(
            modal,
            modal.can_close_on_backdrop_click(),
            on_close,
            BACKDROP_FALLBACK,
            "backdrop",
        )
        .await
    }
}

/// Close on escape when the modal allows it
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleEscapePress;

impl HandleEscapePress {
    pub async fn execute(
        &self,
        modal: &ModalEntity,
        on_close: Option<&Handler<()>>,
    ) -> Outcome<ModalEntity, Dismissal> {
        dismiss(
            modal,
            modal.can_close_on_escape(),
            on_close,
            ESCAPE_FALLBACK,
            "escape",
        )
        .await
    }
}

/// Settle a running animation: `Opening -> Open`, `Closing -> Closed`
#[derive(Clone, Copy, Debug, Default)]
pub struct CompleteModalAnimation;

impl CompleteModalAnimation {
    pub fn execute(&self, modal: &ModalEntity) -> Outcome<ModalEntity, AnimationPhase> {
        let from = modal.animation_state();
        let next = match from {
            AnimationState::Opening => modal.with_animation_open(),
            AnimationState::Closing => modal.with_animation_closed(),
            AnimationState::Open | AnimationState::Closed => Ok(modal.clone()),
        };

        match next {
            Ok(updated) => {
                let phase = AnimationPhase {
                    from,
                    to: updated.animation_state(),
                };
                tracing::trace!(widget = "modal", from = ?phase.from, to = ?phase.to, "animation settled");
                Outcome::success_with(updated, phase)
            }
            Err(err) => entity_failure(modal, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::modal::ModalProps;
    use plinth_core::{handler_fn, CallbackError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn closed() -> ModalEntity {
        ModalEntity::create(ModalProps::new()).unwrap()
    }

    fn open() -> ModalEntity {
        ModalEntity::create(ModalProps::new().open(true)).unwrap()
    }

    fn counting_handler() -> (Handler<()>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let handler = handler_fn(move |()| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        (handler, calls)
    }

    #[test]
    fn test_open_transitions_and_calls_handler() {
        let (on_open, calls) = counting_handler();
        let outcome = pollster::block_on(HandleModalOpen.execute(&closed(), Some(&on_open)));

        assert!(outcome.is_success());
        assert_eq!(outcome.updated().animation_state(), AnimationState::Opening);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_open_when_open_is_silent_noop() {
        let (on_open, calls) = counting_handler();
        let modal = open();
        let outcome = pollster::block_on(HandleModalOpen.execute(&modal, Some(&on_open)));

        assert!(outcome.is_success());
        assert_eq!(outcome.updated(), &modal);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_open_failure_keeps_transition() {
        let failing = handler_fn(|()| Err(CallbackError::Opaque));
        let outcome = pollster::block_on(HandleModalOpen.execute(&closed(), Some(&failing)));

        assert_eq!(outcome.error(), Some("Unknown error during open callback"));
        assert!(outcome.updated().is_open());
    }

    #[test]
    fn test_close_failure_keeps_transition() {
        let failing = handler_fn(|()| Err(CallbackError::from("network down")));
        let outcome = pollster::block_on(HandleModalClose.execute(&open(), Some(&failing)));

        assert_eq!(outcome.error(), Some("network down"));
        assert!(!outcome.updated().is_open());
        assert_eq!(outcome.updated().animation_state(), AnimationState::Closing);
    }

    #[test]
    fn test_close_when_closed_is_silent_noop() {
        let modal = closed();
        let outcome = pollster::block_on(HandleModalClose.execute(&modal, None));
        assert!(outcome.is_success());
        assert_eq!(outcome.updated(), &modal);
    }

    #[test]
    fn test_backdrop_click_dismisses() {
        let (on_close, calls) = counting_handler();
        let outcome = pollster::block_on(HandleBackdropClick.execute(&open(), Some(&on_close)));

        assert_eq!(outcome.meta(), Some(&Dismissal { dismissed: true }));
        assert!(!outcome.updated().is_open());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_backdrop_click_disallowed() {
        let (on_close, calls) = counting_handler();
        let modal = ModalEntity::create(ModalProps::new().open(true).close_on_backdrop_click(false))
            .unwrap();
        let outcome = pollster::block_on(HandleBackdropClick.execute(&modal, Some(&on_close)));

        assert_eq!(outcome.meta(), Some(&Dismissal { dismissed: false }));
        assert_eq!(outcome.updated(), &modal);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_backdrop_failure_fallback() {
        let failing = handler_fn(|()| Err(CallbackError::Opaque));
        let outcome = pollster::block_on(HandleBackdropClick.execute(&open(), Some(&failing)));
        assert_eq!(
            outcome.error(),
            Some("Unknown error during backdrop click callback")
        );
        assert!(!outcome.updated().is_open());
    }

    #[test]
    fn test_escape_on_closed_modal_not_dismissed() {
        let outcome = pollster::block_on(HandleEscapePress.execute(&closed(), None));
        assert_eq!(outcome.meta(), Some(&Dismissal { dismissed: false }));
    }

    #[test]
    fn test_escape_failure_fallback() {
        let failing = handler_fn(|()| Err(CallbackError::Opaque));
        let outcome = pollster::block_on(HandleEscapePress.execute(&open(), Some(&failing)));
        assert_eq!(outcome.error(), Some("Unknown error during escape callback"));
    }

    #[test]
    fn test_complete_animation() {
        let opening = closed().with_open().unwrap();
        let outcome = CompleteModalAnimation.execute(&opening);
        assert_eq!(
            outcome.meta(),
            Some(&AnimationPhase {
                from: AnimationState::Opening,
                to: AnimationState::Open,
            })
        );

        let settled = open();
        let outcome = CompleteModalAnimation.execute(&settled);
        assert_eq!(outcome.updated(), &settled);
        assert_eq!(
            outcome.meta(),
            Some(&AnimationPhase {
                from: AnimationState::Open,
                to: AnimationState::Open,
            })
        );
    }
}
