//! Process-wide resolved theme
//!
//! Presenters receive a `&ThemeState`. Controllers read the installed one via
//! [`ThemeState::get`] unless a host pins a theme on the controller.

use std::sync::{OnceLock, PoisonError, RwLock};

use plinth_core::Color;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, Theme};
use crate::themes::PlinthTheme;
use crate::tokens::*;

/// A resolved token table, cheap enough to clone per presentation
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    animations: AnimationTokens,
}

static CURRENT: OnceLock<RwLock<ThemeState>> = OnceLock::new();

fn current() -> &'static RwLock<ThemeState> {
    CURRENT.get_or_init(|| RwLock::new(ThemeState::light()))
}

impl ThemeState {
    /// Snapshot the tokens of any theme
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self {
            name: theme.name().to_string(),
            scheme: theme.color_scheme(),
            colors: theme.colors().clone(),
            typography: theme.typography().clone(),
            spacing: theme.spacing().clone(),
            radii: theme.radii().clone(),
            animations: theme.animations().clone(),
        }
    }

    pub fn light() -> Self {
        Self::from_theme(&PlinthTheme::light())
    }

    pub fn dark() -> Self {
        Self::from_theme(&PlinthTheme::dark())
    }

    /// Build the built-in variant for `config.scheme` with its overrides applied
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        if !(config.radius_scale.is_finite() && config.radius_scale > 0.0) {
            return Err(ThemeError::InvalidRadiusScale(config.radius_scale));
        }

        let mut state = match config.scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        };

        for (token, value) in &config.colors {
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                token: format!("{token:?}"),
                value: value.clone(),
            })?;
            state.colors.set(*token, color);
        }
        state.radii = state.radii.scaled(config.radius_scale);

        tracing::debug!(
            scheme = ?config.scheme,
            overrides = config.colors.len(),
            radius_scale = config.radius_scale,
            "resolved theme from config"
        );
        Ok(state)
    }

    /// The currently installed theme
    pub fn get() -> ThemeState {
        current()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the installed theme
    pub fn install(state: ThemeState) {
        tracing::debug!(name = %state.name, scheme = ?state.scheme, "installing theme");
        *current().write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Switch the installed theme to the built-in variant for `scheme`
    pub fn set_scheme(scheme: ColorScheme) {
        Self::install(match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn animations(&self) -> &AnimationTokens {
        &self.animations
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::light()
    }
}
