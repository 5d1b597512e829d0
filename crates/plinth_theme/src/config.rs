//! File-backed theme configuration
//!
//! ```toml
//! scheme = "light"
//! radius_scale = 1.25
//!
//! [colors]
//! primary = "#7C3AED"
//! border_error = "#B91C1C"
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::Result;
use crate::theme::ColorScheme;
use crate::tokens::ColorToken;

/// Overrides applied on top of the built-in theme
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Which built-in variant to start from
    pub scheme: ColorScheme,
    /// Hex color overrides keyed by token name
    pub colors: FxHashMap<ColorToken, String>,
    /// Multiplier applied to every finite corner radius
    pub radius_scale: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: FxHashMap::default(),
            radius_scale: 1.0,
        }
    }
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Override one color token with a hex string
    pub fn color(mut self, token: ColorToken, hex: impl Into<String>) -> Self {
        self.colors.insert(token, hex.into());
        self
    }

    pub fn radius_scale(mut self, scale: f32) -> Self {
        self.radius_scale = scale;
        self
    }
}
