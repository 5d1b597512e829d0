//! Theme configuration errors

use thiserror::Error;

/// Errors that can occur while loading a theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document could not be parsed
    #[error("Theme config parsing failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color override is not a valid hex color
    #[error("Invalid color for {token}: {value}")]
    InvalidColor { token: String, value: String },

    /// Radius scale must be a positive finite number
    #[error("Invalid radius scale: {0}")]
    InvalidRadiusScale(f32),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
