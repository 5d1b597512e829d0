//! Checkbox actions: toggle and validation

use std::sync::Arc;

use plinth_core::{invoke, Handler, Outcome};

use super::entity::{CheckboxEntity, CheckboxValue};

const NOT_INTERACTIVE: &str = "Checkbox is not interactive";
const CALLBACK_FALLBACK: &str = "Unknown error";
const REQUIRED_MESSAGE: &str = "This field is required";

/// A custom check; returns an error message when the checkbox fails it
pub type ValidationRule = Arc<dyn Fn(&CheckboxEntity) -> Option<String> + Send + Sync>;

/// Wrap a closure as a [`ValidationRule`]
pub fn rule<F>(check: F) -> ValidationRule
where
    F: Fn(&CheckboxEntity) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(check)
}

/// Value change reported by a successful toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleChange {
    pub old_value: CheckboxValue,
    pub new_value: CheckboxValue,
}

/// Toggle the checkbox and notify the handler; rolls back if it fails
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleCheckboxToggle;

impl HandleCheckboxToggle {
    pub async fn execute(
        &self,
        checkbox: &CheckboxEntity,
        on_change: Option<&Handler<CheckboxValue>>,
    ) -> Outcome<CheckboxEntity, ToggleChange> {
        if !checkbox.is_interactive() {
            tracing::debug!(
                widget = "checkbox",
                disabled = checkbox.is_disabled(),
                readonly = checkbox.is_readonly(),
                "toggle rejected"
            );
            return Outcome::failure(checkbox.clone(), NOT_INTERACTIVE);
        }

        let toggled = match checkbox.toggled() {
            Ok(toggled) => toggled,
            Err(err) => return Outcome::failure(checkbox.clone(), err.to_string()),
        };
        let change = ToggleChange {
            old_value: checkbox.value(),
            new_value: toggled.value(),
        };

        if let Err(err) = invoke(on_change, change.new_value).await {
            let message = err.message_or(CALLBACK_FALLBACK);
            tracing::warn!(
                widget = "checkbox",
                error = %message,
                value = ?change.old_value,
                "change handler failed, rolling back"
            );
            return Outcome::failure(checkbox.clone(), message);
        }

        tracing::debug!(widget = "checkbox", from = ?change.old_value, to = ?change.new_value, "toggled");
        Outcome::success_with(toggled, change)
    }
}

/// Result of running every checkbox rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Run the required check and every custom rule, collecting all failures
///
/// The first failure is written back as the checkbox error, or the error is
/// cleared when everything passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateCheckbox;

impl ValidateCheckbox {
    pub fn execute(
        &self,
        checkbox: &CheckboxEntity,
        rules: &[ValidationRule],
    ) -> Outcome<CheckboxEntity, CheckboxValidation> {
        let mut errors = Vec::new();

        if checkbox.is_required() && !checkbox.is_checked() {
            errors.push(REQUIRED_MESSAGE.to_string());
        }
        errors.extend(rules.iter().filter_map(|rule| rule(checkbox)));

        let updated = match checkbox.with_error(errors.first().cloned()) {
            Ok(updated) => updated,
            Err(err) => return Outcome::failure(checkbox.clone(), err.to_string()),
        };
        tracing::debug!(widget = "checkbox", failures = errors.len(), "validated");

        Outcome::success_with(
            updated,
            CheckboxValidation {
                is_valid: errors.is_empty(),
                errors,
            },
        )
    }
}
