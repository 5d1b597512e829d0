//! Select actions: change, validation and menu toggling

use std::fmt::Debug;

use plinth_core::{invoke, Handler, Outcome};

use super::entity::SelectEntity;
use crate::field::FieldValidation;

const NOT_INTERACTIVE: &str = "Select is not interactive";
const NOT_AVAILABLE: &str = "Option is not available";
const CALLBACK_FALLBACK: &str = "onChange handler failed";
const REQUIRED_MESSAGE: &str = "Please select an option";

/// Selection change reported by a successful [`HandleSelectChange`]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectChange<T> {
    pub old_value: Option<T>,
    pub new_value: T,
}

/// Select a value, close the menu and notify the handler; rolls back if it fails
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleSelectChange;

impl HandleSelectChange {
    pub async fn execute<T: Clone + PartialEq + Debug>(
        &self,
        select: &SelectEntity<T>,
        value: T,
        on_change: Option<&Handler<T>>,
    ) -> Outcome<SelectEntity<T>, SelectChange<T>> {
        if !select.is_interactive() {
            tracing::debug!(widget = "select", "change rejected, disabled");
            return Outcome::failure(select.clone(), NOT_INTERACTIVE);
        }
        if !select.is_selectable(&value) {
            tracing::debug!(widget = "select", value = ?value, "change rejected, option not available");
            return Outcome::failure(select.clone(), NOT_AVAILABLE);
        }

        let updated = match select
            .with_selected_value(Some(value.clone()))
            .and_then(|selected| selected.with_open(false))
        {
            Ok(updated) => updated,
            Err(err) => return Outcome::failure(select.clone(), err.to_string()),
        };

        if let Err(err) = invoke(on_change, value.clone()).await {
            let message = err.message_or(CALLBACK_FALLBACK);
            tracing::warn!(widget = "select", error = %message, "change handler failed, rolling back");
            return Outcome::failure(select.clone(), message);
        }

        let change = SelectChange {
            old_value: select.selected_value().cloned(),
            new_value: value,
        };
        tracing::debug!(widget = "select", from = ?change.old_value, to = ?change.new_value, "selected");
        Outcome::success_with(updated, change)
    }
}

/// Check the required rule and write the result back as the field error
///
/// A failed check is still a successful outcome; the validation result is the
/// outcome's metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateSelect;

impl ValidateSelect {
    pub fn execute<T: Clone + PartialEq + Debug>(
        &self,
        select: &SelectEntity<T>,
    ) -> Outcome<SelectEntity<T>, FieldValidation> {
        if select.is_disabled() {
            return Outcome::success_with(select.clone(), FieldValidation::passed());
        }

        let error_message = (select.is_required() && !select.has_selection())
            .then(|| REQUIRED_MESSAGE.to_string());
        let updated = match select.with_error(error_message.clone()) {
            Ok(updated) => updated,
            Err(err) => return Outcome::failure(select.clone(), err.to_string()),
        };
        tracing::debug!(widget = "select", valid = error_message.is_none(), "validated");

        Outcome::success_with(
            updated,
            FieldValidation {
                valid: error_message.is_none(),
                error_message,
            },
        )
    }
}

/// Open or close the option menu; a disabled select stays closed
#[derive(Clone, Copy, Debug, Default)]
pub struct ToggleSelectMenu;

impl ToggleSelectMenu {
    pub fn execute<T: Clone + PartialEq + Debug>(
        &self,
        select: &SelectEntity<T>,
    ) -> Outcome<SelectEntity<T>> {
        if !select.is_interactive() {
            return Outcome::success(select.clone());
        }
        match select.with_open(!select.is_open()) {
            Ok(updated) => Outcome::success(updated),
            Err(err) => Outcome::failure(select.clone(), err.to_string()),
        }
    }
}
