//! Button actions

use plinth_core::{invoke, Handler, Outcome};

use super::entity::ButtonEntity;

const NOT_INTERACTIVE: &str = "Button is not interactive";
const CALLBACK_FALLBACK: &str = "Unknown error";

/// Forward a click to the handler if the button accepts clicks
///
/// A click never changes button state, so the outcome always carries the
/// original entity.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleButtonClick;

impl HandleButtonClick {
    pub async fn execute(
        &self,
        button: &ButtonEntity,
        on_click: Option<&Handler<()>>,
    ) -> Outcome<ButtonEntity> {
        if !button.is_interactive() {
            tracing::debug!(
                widget = "button",
                disabled = button.is_disabled(),
                loading = button.is_loading(),
                "click rejected"
            );
            return Outcome::failure(button.clone(), NOT_INTERACTIVE);
        }

        if let Err(err) = invoke(on_click, ()).await {
            let message = err.message_or(CALLBACK_FALLBACK);
            tracing::warn!(widget = "button", error = %message, "click handler failed");
            return Outcome::failure(button.clone(), message);
        }

        Outcome::success(button.clone())
    }
}
