//! Textarea actions: change and validation

use plinth_core::{invoke, Handler, Outcome};

use super::entity::TextareaEntity;
use crate::field::FieldValidation;

const NOT_INTERACTIVE: &str = "Textarea is not interactive";
const CALLBACK_FALLBACK: &str = "onChange handler failed";

/// Counts and validation for the new value, reported by a successful change
///
/// The validation is informational; the change never writes an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextareaChange {
    pub validation: FieldValidation,
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    pub remaining_characters: Option<usize>,
}

impl TextareaChange {
    fn measure(textarea: &TextareaEntity) -> Self {
        Self {
            validation: textarea.validate_all(),
            character_count: textarea.character_count(),
            word_count: textarea.word_count(),
            line_count: textarea.line_count(),
            remaining_characters: textarea.remaining_characters(),
        }
    }
}

/// Set the value and notify the handler; rolls back if it fails
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleTextareaChange;

impl HandleTextareaChange {
    pub async fn execute(
        &self,
        textarea: &TextareaEntity,
        value: String,
        on_change: Option<&Handler<String>>,
    ) -> Outcome<TextareaEntity, TextareaChange> {
        if !textarea.is_interactive() {
            tracing::debug!(
                widget = "textarea",
                disabled = textarea.is_disabled(),
                read_only = textarea.is_read_only(),
                "change rejected"
            );
            return Outcome::failure(textarea.clone(), NOT_INTERACTIVE);
        }

        let updated = match textarea.with_value(value.clone()) {
            Ok(updated) => updated,
            Err(err) => return Outcome::failure(textarea.clone(), err.to_string()),
        };

        if let Err(err) = invoke(on_change, value).await {
            let message = err.message_or(CALLBACK_FALLBACK);
            tracing::warn!(widget = "textarea", error = %message, "change handler failed, rolling back");
            return Outcome::failure(textarea.clone(), message);
        }

        let change = TextareaChange::measure(&updated);
        tracing::trace!(widget = "textarea", characters = change.character_count, "value changed");
        Outcome::success_with(updated, change)
    }
}

/// Run required, min and max length checks and write the first failure back
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateTextarea;

impl ValidateTextarea {
    pub fn execute(&self, textarea: &TextareaEntity) -> Outcome<TextareaEntity, FieldValidation> {
        if textarea.is_disabled() {
            return Outcome::success_with(textarea.clone(), FieldValidation::passed());
        }

        let validation = textarea.validate_all();
        let updated = match textarea.with_error(validation.error_message.clone()) {
            Ok(updated) => updated,
            Err(err) => return Outcome::failure(textarea.clone(), err.to_string()),
        };
        tracing::debug!(widget = "textarea", valid = validation.valid, "validated");

        Outcome::success_with(updated, validation)
    }
}
