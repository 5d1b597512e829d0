//! Plinth Theme System
//!
//! Design tokens consumed by component presenters:
//!
//! - **Colors**: semantic color table keyed by [`ColorToken`]
//! - **Radii / Spacing / Typography**: pixel scales keyed by token enums
//! - **ThemeState**: the process-wide resolved token table
//! - **ThemeConfig**: TOML-backed overrides for the built-in theme
//!
//! # Example
//!
//! ```rust
//! use plinth_theme::{ColorToken, ThemeConfig, ThemeState};
//!
//! let config = ThemeConfig::from_toml_str(r##"
//!     scheme = "dark"
//!     radius_scale = 0.5
//!
//!     [colors]
//!     primary = "#7C3AED"
//! "##).unwrap();
//!
//! let theme = ThemeState::from_config(&config).unwrap();
//! assert_eq!(theme.color(ColorToken::Primary).to_hex(), "#7C3AED");
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::PlinthTheme;
pub use tokens::{
    AnimationTokens, ColorToken, ColorTokens, RadiusToken, RadiusTokens, SpacingToken,
    SpacingTokens, TypographyTokens,
};
