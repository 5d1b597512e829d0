//! Skeleton controller

use plinth_theme::ThemeState;

use super::entity::{SkeletonAnimation, SkeletonEntity, SkeletonProps, SkeletonState, SkeletonVariant};
use super::presenter::{SkeletonPresenter, SkeletonViewModel};
use crate::components::resolve_theme;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct SkeletonController {
    skeleton: SkeletonEntity,
    theme: Option<ThemeState>,
}

impl SkeletonController {
    pub fn new(props: SkeletonProps) -> Result<Self> {
        Ok(Self {
            skeleton: SkeletonEntity::create(props)?,
            theme: None,
        })
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn entity(&self) -> &SkeletonEntity {
        &self.skeleton
    }

    pub fn current_state(&self) -> SkeletonState {
        self.skeleton.current_state()
    }

    pub fn set_variant(&mut self, variant: SkeletonVariant) -> Result<()> {
        self.skeleton = self.skeleton.with_variant(variant)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: Option<f32>) -> Result<()> {
        self.skeleton = self.skeleton.with_width(width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: Option<f32>) -> Result<()> {
        self.skeleton = self.skeleton.with_height(height)?;
        Ok(())
    }

    pub fn set_animation(&mut self, animation: SkeletonAnimation) -> Result<()> {
        self.skeleton = self.skeleton.with_animation(animation)?;
        Ok(())
    }

    pub fn set_lines(&mut self, lines: u32) -> Result<()> {
        self.skeleton = self.skeleton.with_lines(lines)?;
        Ok(())
    }

    pub fn view_model(&self) -> SkeletonViewModel {
        SkeletonPresenter::present(&self.skeleton, &resolve_theme(self.theme.as_ref()))
    }
}
