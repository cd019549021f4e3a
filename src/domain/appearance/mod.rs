//! Appearance module - Theme selection and cosmetic styling options.
//!
//! Nothing here affects validation, navigation or submission.

mod theme;

pub use theme::{Styling, Theme, ThemePreference};
