//! Separator controller

use plinth_theme::ThemeState;

use super::entity::{SeparatorEntity, SeparatorOrientation, SeparatorProps, SeparatorState};
use super::presenter::{SeparatorPresenter, SeparatorViewModel};
use crate::components::resolve_theme;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct SeparatorController {
    separator: SeparatorEntity,
    theme: Option<ThemeState>,
}

impl SeparatorController {
    pub fn new(props: SeparatorProps) -> Result<Self> {
        Ok(Self {
            separator: SeparatorEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &SeparatorEntity {
        &self.separator
    }

    pub fn current_state(&self) -> SeparatorState {
        self.separator.current_state()
    }

    pub fn set_orientation(&mut self, orientation: SeparatorOrientation) -> Result<()> {
        self.separator = self.separator.with_orientation(orientation)?;
        Ok(())
    }

    pub fn set_decorative(&mut self, decorative: bool) -> Result<()> {
        self.separator = self.separator.with_decorative(decorative)?;
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f32) -> Result<()> {
        self.separator = self.separator.with_thickness(thickness)?;
        Ok(())
    }

    pub fn set_spacing(&mut self, spacing: f32) -> Result<()> {
        self.separator = self.separator.with_spacing(spacing)?;
        Ok(())
    }

    pub fn view_model(&self) -> SeparatorViewModel {
        SeparatorPresenter::present(&self.separator, &resolve_theme(self.theme.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters() {
        let mut separator = SeparatorController::new(SeparatorProps::new())
            .unwrap()
            .with_theme(ThemeState::light());

        separator.set_orientation(SeparatorOrientation::Vertical).unwrap();
        separator.set_decorative(false).unwrap();
        separator.set_thickness(3.0).unwrap();
        separator.set_spacing(4.0).unwrap();

        let vm = separator.view_model();
        assert_eq!(vm.role, "separator");
        assert_eq!(vm.styles.width, "3px");

        assert!(separator.set_thickness(0.0).is_err());
        assert_eq!(separator.current_state().thickness, 3.0);
    }
}
