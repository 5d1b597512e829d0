//! Theme trait and light/dark bundles

use serde::Deserialize;

use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A complete set of design tokens for one color scheme
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;
    fn color_scheme(&self) -> ColorScheme;
    fn colors(&self) -> &ColorTokens;
    fn typography(&self) -> &TypographyTokens;
    fn spacing(&self) -> &SpacingTokens;
    fn radii(&self) -> &RadiusTokens;
    fn animations(&self) -> &AnimationTokens;
}

/// A named pair of light and dark themes
pub struct ThemeBundle {
    pub name: String,
    pub light: Box<dyn Theme>,
    pub dark: Box<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: impl Theme + 'static, dark: impl Theme + 'static) -> Self {
        Self {
            name: name.into(),
            light: Box::new(light),
            dark: Box::new(dark),
        }
    }

    /// The variant for a color scheme
    pub fn variant(&self, scheme: ColorScheme) -> &dyn Theme {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}
