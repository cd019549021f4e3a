//! Environment-derived theme preference.
//!
//! An explicit variable (default `INQUIRY_WIZARD_PREFERS_DARK`) wins.
//! Otherwise the terminal's `COLORFGBG` background colour decides.
//! Read on every call so changes are picked up on the next render.

use std::env;

use crate::ports::ThemeResolver;

const DEFAULT_VAR: &str = "INQUIRY_WIZARD_PREFERS_DARK";
const COLORFGBG: &str = "COLORFGBG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvThemeResolver {
    variable: String,
}

impl EnvThemeResolver {
    pub fn new() -> Self {
        Self::with_variable(DEFAULT_VAR)
    }

    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    fn decide(explicit: Option<&str>, colorfgbg: Option<&str>) -> bool {
        if let Some(value) = explicit {
            return matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "dark"
            );
        }
        // "fg;bg" or "fg;default;bg"; ANSI 0-6 and 8 are dark backgrounds.
        colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok())
            .is_some_and(|bg| bg < 7 || bg == 8)
    }
}

impl Default for EnvThemeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeResolver for EnvThemeResolver {
    fn prefers_dark(&self) -> bool {
        let explicit = env::var(&self.variable).ok();
        let colorfgbg = env::var(COLORFGBG).ok();
        Self::decide(explicit.as_deref(), colorfgbg.as_deref())
    }
}
