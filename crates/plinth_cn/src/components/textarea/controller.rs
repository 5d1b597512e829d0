//! Textarea controller

use plinth_core::Handler;
use plinth_theme::ThemeState;

use super::entity::{TextareaEntity, TextareaProps, TextareaResize, TextareaSize, TextareaState};
use super::presenter::{TextareaPresenter, TextareaViewModel};
use super::use_cases::{HandleTextareaChange, TextareaChange, ValidateTextarea};
use crate::components::{resolve_theme, settle};
use crate::error::Result;
use crate::field::FieldValidation;

#[derive(Clone, Debug)]
pub struct TextareaController {
    textarea: TextareaEntity,
    theme: Option<ThemeState>,
}

impl TextareaController {
    pub fn new(props: TextareaProps) -> Result<Self> {
        Ok(Self {
            textarea: TextareaEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &TextareaEntity {
        &self.textarea
    }

    pub fn current_state(&self) -> TextareaState {
        self.textarea.current_state()
    }

    /// Replace the value and notify `on_change`; the value is rolled back if it fails
    pub async fn set_value(
        &mut self,
        value: impl Into<String>,
        on_change: Option<&Handler<String>>,
    ) -> Result<TextareaChange> {
        let outcome = HandleTextareaChange
            .execute(&self.textarea, value.into(), on_change)
            .await;
        settle(&mut self.textarea, outcome, "textarea")
    }

    pub fn validate(&mut self) -> Result<FieldValidation> {
        let outcome = ValidateTextarea.execute(&self.textarea);
        settle(&mut self.textarea, outcome, "textarea")
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Result<()> {
        self.textarea = self.textarea.with_disabled(disabled)?;
        Ok(())
    }

    pub fn set_read_only(&mut self, read_only: bool) -> Result<()> {
        self.textarea = self.textarea.with_read_only(read_only)?;
        Ok(())
    }

    pub fn set_required(&mut self, required: bool) -> Result<()> {
        self.textarea = self.textarea.with_required(required)?;
        Ok(())
    }

    pub fn set_error(&mut self, error: Option<String>) -> Result<()> {
        self.textarea = self.textarea.with_error(error)?;
        Ok(())
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> Result<()> {
        self.textarea = self.textarea.with_placeholder(placeholder)?;
        Ok(())
    }

    pub fn set_rows(&mut self, rows: u32) -> Result<()> {
        self.textarea = self.textarea.with_rows(rows)?;
        Ok(())
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) -> Result<()> {
        self.textarea = self.textarea.with_max_length(max_length)?;
        Ok(())
    }

    pub fn set_min_length(&mut self, min_length: Option<usize>) -> Result<()> {
        self.textarea = self.textarea.with_min_length(min_length)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: TextareaSize) -> Result<()> {
        self.textarea = self.textarea.with_size(size)?;
        Ok(())
    }

    pub fn set_resize(&mut self, resize: TextareaResize) -> Result<()> {
        self.textarea = self.textarea.with_resize(resize)?;
        Ok(())
    }

    pub fn view_model(&self) -> TextareaViewModel {
        TextareaPresenter::present(&self.textarea, &resolve_theme(self.theme.as_ref()))
    }
}
