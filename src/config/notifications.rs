//! Toast timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::notification::ToastTiming;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays before fading.
    #[serde(default = "default_display_secs")]
    pub display_secs: u64,

    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,

    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl NotificationConfig {
    pub fn timing(&self) -> ToastTiming {
        ToastTiming {
            enter_delay: Duration::from_millis(self.enter_delay_ms),
            display: Duration::from_secs(self.display_secs),
            fade: Duration::from_millis(self.fade_ms),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_secs == 0 {
            return Err(ValidationError::InvalidDisplayDuration);
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
            enter_delay_ms: default_enter_delay_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

fn default_display_secs() -> u64 {
    5
}

fn default_enter_delay_ms() -> u64 {
    50
}

fn default_fade_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_toast_defaults() {
        assert_eq!(NotificationConfig::default().timing(), ToastTiming::default());
    }

    #[test]
    fn zero_display_is_invalid() {
        let config = NotificationConfig {
            display_secs: 0,
            ..NotificationConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDisplayDuration));
    }
}
