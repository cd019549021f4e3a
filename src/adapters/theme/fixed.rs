//! Constant theme preference.

use crate::ports::ThemeResolver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedThemeResolver {
    prefers_dark: bool,
}

impl FixedThemeResolver {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn light() -> Self {
        Self::new(false)
    }
}

impl ThemeResolver for FixedThemeResolver {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_configured_preference() {
        assert!(FixedThemeResolver::dark().prefers_dark());
        assert!(!FixedThemeResolver::light().prefers_dark());
        assert!(!FixedThemeResolver::default().prefers_dark());
    }
}
