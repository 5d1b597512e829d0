//! Built-in themes

pub mod plinth;

pub use plinth::PlinthTheme;
