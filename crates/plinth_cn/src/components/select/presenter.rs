//! Select view-model

use std::fmt::Debug;

use plinth_core::Color;
use plinth_theme::{ColorToken, RadiusToken, ThemeState};
use serde::Serialize;

use super::entity::{SelectEntity, SelectSize};
use crate::field::{field_border_color, FieldState};
use crate::style::{px, Cursor};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStyles {
    pub height: String,
    pub padding_x: String,
    pub font_size: String,
    pub border_radius: String,
    pub border_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub opacity: f32,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionViewModel<T> {
    pub value: T,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectViewModel<T> {
    pub selected_value: Option<T>,
    pub display_label: String,
    pub placeholder: String,
    pub has_selection: bool,
    pub options: Vec<SelectOptionViewModel<T>>,
    pub open: bool,
    pub disabled: bool,
    pub required: bool,
    pub interactive: bool,
    pub error: Option<String>,
    pub state: FieldState,
    pub size: SelectSize,
    pub styles: SelectStyles,
    pub role: &'static str,
    pub aria_expanded: bool,
    pub aria_haspopup: &'static str,
    pub aria_disabled: bool,
    pub aria_required: bool,
    pub aria_invalid: bool,
}

impl SelectSize {
    fn height(&self) -> f32 {
        match self {
            SelectSize::Small => 32.0,
            SelectSize::Medium => 40.0,
            SelectSize::Large => 48.0,
        }
    }

    fn padding_x(&self, theme: &ThemeState) -> f32 {
        let spacing = theme.spacing();
        match self {
            SelectSize::Small => spacing.space_2,
            SelectSize::Medium => spacing.space_3,
            SelectSize::Large => spacing.space_4,
        }
    }

    fn font_size(&self, theme: &ThemeState) -> f32 {
        let typography = theme.typography();
        match self {
            SelectSize::Small | SelectSize::Medium => typography.text_sm,
            SelectSize::Large => typography.text_base,
        }
    }
}

pub struct SelectPresenter;

impl SelectPresenter {
    pub fn present<T>(select: &SelectEntity<T>, theme: &ThemeState) -> SelectViewModel<T>
    where
        T: Clone + PartialEq + Debug,
    {
        let size = select.size();
        let disabled = select.is_disabled();

        let options = select
            .options()
            .iter()
            .map(|option| SelectOptionViewModel {
                value: option.value.clone(),
                label: option.label.clone(),
                disabled: option.disabled,
                selected: select.selected_value() == Some(&option.value),
            })
            .collect();

        let (background_color, text_color) = if disabled {
            (
                theme.color(ColorToken::InputBgDisabled),
                theme.color(ColorToken::TextTertiary),
            )
        } else if select.has_selection() {
            (
                theme.color(ColorToken::InputBg),
                theme.color(ColorToken::TextPrimary),
            )
        } else {
            (
                theme.color(ColorToken::InputBg),
                theme.color(ColorToken::TextTertiary),
            )
        };

        SelectViewModel {
            selected_value: select.selected_value().cloned(),
            display_label: select.display_label().to_string(),
            placeholder: select.placeholder().to_string(),
            has_selection: select.has_selection(),
            options,
            open: select.is_open(),
            disabled,
            required: select.is_required(),
            interactive: select.is_interactive(),
            error: select.error().map(str::to_string),
            state: select.field_state(),
            size,
            styles: SelectStyles {
                height: px(size.height()),
                padding_x: px(size.padding_x(theme)),
                font_size: px(size.font_size(theme)),
                border_radius: px(theme.radius(RadiusToken::Default)),
                border_color: field_border_color(select.field_state(), select.is_open(), theme),
                background_color,
                text_color,
                placeholder_color: theme.color(ColorToken::TextTertiary),
                opacity: if disabled { 0.5 } else { 1.0 },
                cursor: if disabled {
                    Cursor::NotAllowed
                } else {
                    Cursor::Pointer
                },
            },
            role: "combobox",
            aria_expanded: select.is_open(),
            aria_haspopup: "listbox",
            aria_disabled: disabled,
            aria_required: select.is_required(),
            aria_invalid: select.has_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::select::{SelectOption, SelectProps};

    fn present(props: SelectProps<&'static str>) -> SelectViewModel<&'static str> {
        SelectPresenter::present(&SelectEntity::create(props).unwrap(), &ThemeState::light())
    }

    fn colors() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("red", "Red"),
            SelectOption::new("green", "Green").disabled(true),
        ]
    }

    #[test]
    fn test_options_marked_selected() {
        let vm = present(SelectProps::new().options(colors()).selected("red"));
        assert!(vm.options[0].selected);
        assert!(!vm.options[1].selected);
        assert!(vm.options[1].disabled);
        assert_eq!(vm.display_label, "Red");
    }

    #[test]
    fn test_placeholder_styles() {
        let theme = ThemeState::light();
        let vm = present(SelectProps::new().options(colors()));
        assert_eq!(vm.display_label, "Select an option");
        assert_eq!(vm.styles.text_color, theme.color(ColorToken::TextTertiary));
        assert_eq!(vm.styles.height, "40px");
        assert_eq!(vm.styles.padding_x, "12px");
        assert_eq!(vm.styles.border_radius, "6px");
    }

    #[test]
    fn test_border_priority() {
        let theme = ThemeState::light();
        let vm = present(
            SelectProps::new()
                .options(colors())
                .open(true)
                .error("Pick a color")
                .state(FieldState::Error),
        );
        assert_eq!(vm.styles.border_color, theme.color(ColorToken::BorderError));
        assert!(vm.aria_invalid);

        let vm = present(SelectProps::new().options(colors()).open(true));
        assert_eq!(vm.styles.border_color, theme.color(ColorToken::BorderFocus));
    }

    #[test]
    fn test_serialized_aria_fields() {
        let json = serde_json::to_value(present(SelectProps::new().options(colors()).open(true)))
            .unwrap();
        assert_eq!(json["role"], "combobox");
        assert_eq!(json["ariaExpanded"], true);
        assert_eq!(json["ariaHaspopup"], "listbox");
        assert_eq!(json["options"][0]["value"], "red");
        assert_eq!(json["selectedValue"], serde_json::Value::Null);
    }
}
