//! End-to-end widget scenarios and the serialized view-model contract

use plinth_cn::prelude::*;
use plinth_cn::{ButtonEntity, EntityError, ModalEntity, SelectEntity, Violation};

#[test]
fn test_loading_button_must_be_disabled() {
    let err = ButtonEntity::create(cn::button().loading(true).disabled(false)).unwrap_err();
    assert_eq!(err, EntityError::from(Violation::LoadingButtonNotDisabled));
    assert_eq!(err.to_string(), "Loading buttons must be disabled");
}

#[test]
fn test_open_modal_with_closed_animation_is_invalid() {
    let err = ModalEntity::create(
        cn::modal()
            .open(true)
            .animation_state(AnimationState::Closed),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Open modals cannot have closed animation state");
}

#[test]
fn test_select_options_must_be_unique() {
    let err = SelectEntity::create(
        cn::select()
            .option(SelectOption::new("x", "First"))
            .option(SelectOption::new("x", "Second")),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Options must have unique values");
}

#[test]
fn test_disabled_checkbox_ignores_toggle() {
    let mut checkbox = CheckboxController::new(cn::checkbox().value(false).disabled(true)).unwrap();

    let err = pollster::block_on(checkbox.on_toggle(None)).unwrap_err();
    assert!(err.to_string().contains("not interactive"));
    assert!(!checkbox.view_model().checked);
}

#[test]
fn test_modal_dismissal_respects_configuration() {
    let mut modal = ModalController::new(cn::modal().close_on_backdrop_click(false)).unwrap();
    pollster::block_on(modal.on_open(None)).unwrap();
    modal.on_animation_end().unwrap();

    assert!(!pollster::block_on(modal.on_backdrop_click(None)).unwrap());
    assert!(modal.entity().is_open());

    assert!(pollster::block_on(modal.on_escape(None)).unwrap());
    assert!(!modal.entity().is_open());
    assert_eq!(modal.entity().animation_state(), AnimationState::Closing);

    modal.on_animation_end().unwrap();
    assert!(!modal.view_model().visible);
}

#[test]
fn test_required_select_validation_round_trip() {
    let mut select = SelectController::new(
        cn::select()
            .options([SelectOption::new("eu", "Europe"), SelectOption::new("us", "Americas")])
            .required(true),
    )
    .unwrap();

    let validation = select.validate().unwrap();
    assert_eq!(validation.error_message.as_deref(), Some("Please select an option"));
    assert_eq!(select.entity().field_state(), FieldState::Error);

    pollster::block_on(select.set_value("eu", None)).unwrap();
    assert!(select.validate().unwrap().valid);
    assert_eq!(select.entity().error(), None);
    assert_eq!(select.view_model().display_label, "Europe");
}

#[test]
fn test_checkbox_view_model_json() {
    let checkbox = CheckboxController::new(
        cn::checkbox()
            .value(CheckboxValue::Indeterminate)
            .required(true)
            .label("Select all"),
    )
    .unwrap()
    .with_theme(ThemeState::light());

    let json = serde_json::to_value(checkbox.view_model()).unwrap();
    assert_eq!(json["role"], "checkbox");
    assert_eq!(json["ariaChecked"], "mixed");
    assert_eq!(json["ariaRequired"], true);
    assert_eq!(json["indeterminate"], true);
    assert_eq!(json["label"], "Select all");
}

#[test]
fn test_select_view_model_json() {
    let select = SelectController::new(
        cn::select()
            .option(SelectOption::new(10, "Ten"))
            .option(SelectOption::new(20, "Twenty").disabled(true))
            .open(true),
    )
    .unwrap()
    .with_theme(ThemeState::light());

    let json = serde_json::to_value(select.view_model()).unwrap();
    assert_eq!(json["role"], "combobox");
    assert_eq!(json["ariaExpanded"], true);
    assert_eq!(json["ariaHaspopup"], "listbox");
    assert_eq!(json["displayLabel"], "Select an option");
    assert_eq!(json["options"][1]["disabled"], true);
    assert_eq!(json["options"][0]["value"], 10);
}

#[test]
fn test_modal_view_model_json() {
    let modal = ModalController::new(cn::modal().open(true).title("Settings").size(ModalSize::Full))
        .unwrap()
        .with_theme(ThemeState::light());

    let json = serde_json::to_value(modal.view_model()).unwrap();
    assert_eq!(json["role"], "dialog");
    assert_eq!(json["ariaModal"], true);
    assert_eq!(json["ariaHidden"], false);
    assert_eq!(json["ariaLabel"], "Settings");
    assert_eq!(json["animationState"], "open");
    assert_eq!(json["styles"]["maxWidth"], "100%");
    assert_eq!(json["styles"]["backdropColor"], "#00000080");
}

#[test]
fn test_textarea_view_model_json() {
    let textarea = TextareaController::new(cn::textarea().value("Hi there").max_length(20))
        .unwrap()
        .with_theme(ThemeState::light());

    let json = serde_json::to_value(textarea.view_model()).unwrap();
    assert_eq!(json["role"], "textbox");
    assert_eq!(json["ariaMultiline"], true);
    assert_eq!(json["characterCount"], 8);
    assert_eq!(json["remainingCharacters"], 12);
    assert_eq!(json["showCounter"], true);
    assert_eq!(json["styles"]["minHeight"], "87px");
}

#[test]
fn test_button_view_model_json() {
    let button = ButtonController::new(cn::button().variant(ButtonVariant::Destructive).loading(true))
        .unwrap()
        .with_theme(ThemeState::light());

    let json = serde_json::to_value(button.view_model()).unwrap();
    assert_eq!(json["role"], "button");
    assert_eq!(json["ariaBusy"], true);
    assert_eq!(json["ariaDisabled"], true);
    assert_eq!(json["interactive"], false);
}
