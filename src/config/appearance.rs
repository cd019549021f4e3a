//! Appearance configuration

use serde::Deserialize;

use crate::domain::appearance::{Styling, ThemePreference};

/// Theme option and cosmetic overrides. No effect on wizard behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppearanceConfig {
    /// `dark`, `light`, or absent to follow the host preference.
    #[serde(default)]
    pub theme: ThemePreference,

    pub primary_color: Option<String>,
    pub font_family: Option<String>,
    pub border_radius: Option<String>,
}

impl AppearanceConfig {
    pub fn styling(&self) -> Styling {
        Styling {
            primary_color: self.primary_color.clone(),
            font_family: self.font_family.clone(),
            border_radius: self.border_radius.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_system() {
        assert_eq!(AppearanceConfig::default().theme, ThemePreference::System);
    }

    #[test]
    fn styling_copies_cosmetics() {
        let config: AppearanceConfig =
            serde_json::from_str(r##"{"theme": "dark", "primary_color": "#0055aa"}"##).unwrap();
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.styling().primary_color.as_deref(), Some("#0055aa"));
        assert!(config.styling().font_family.is_none());
    }
}
