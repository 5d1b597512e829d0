//! Avatar controller

use plinth_theme::ThemeState;

use super::entity::{AvatarEntity, AvatarProps, AvatarShape, AvatarSize, AvatarState, AvatarStatus};
use super::presenter::{AvatarPresenter, AvatarViewModel};
use crate::components::resolve_theme;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct AvatarController {
    avatar: AvatarEntity,
    theme: Option<ThemeState>,
}

impl AvatarController {
    pub fn new(props: AvatarProps) -> Result<Self> {
        Ok(Self {
            avatar: AvatarEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &AvatarEntity {
        &self.avatar
    }

    pub fn current_state(&self) -> AvatarState {
        self.avatar.current_state()
    }

    /// The image failed to load; switch to the fallback
    pub fn on_image_error(&mut self) -> Result<()> {
        tracing::debug!(widget = "avatar", src = ?self.avatar.src(), "image failed, showing fallback");
        self.avatar = self.avatar.with_image_failed(true)?;
        Ok(())
    }

    pub fn set_src(&mut self, src: Option<String>) -> Result<()> {
        self.avatar = self.avatar.with_src(src)?;
        Ok(())
    }

    pub fn set_alt(&mut self, alt: impl Into<String>) -> Result<()> {
        self.avatar = self.avatar.with_alt(alt)?;
        Ok(())
    }

    pub fn set_fallback(&mut self, fallback: Option<String>) -> Result<()> {
        self.avatar = self.avatar.with_fallback(fallback)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: AvatarSize) -> Result<()> {
        self.avatar = self.avatar.with_size(size)?;
        Ok(())
    }

    pub fn set_shape(&mut self, shape: AvatarShape) -> Result<()> {
        self.avatar = self.avatar.with_shape(shape)?;
        Ok(())
    }

    pub fn set_status(&mut self, status: Option<AvatarStatus>) -> Result<()> {
        self.avatar = self.avatar.with_status(status)?;
        Ok(())
    }

    pub fn view_model(&self) -> AvatarViewModel {
        AvatarPresenter::present(&self.avatar, &resolve_theme(self.theme.as_ref()))
    }
}
