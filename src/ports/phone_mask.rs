//! PhoneMaskLoader port - Optional input mask for phone fields.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Formats raw keystrokes of a phone input.
pub trait PhoneMask: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// The mask could not be loaded. Phone inputs then stay unmasked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskLoadError {
    #[error("phone mask unavailable: {0}")]
    Unavailable(String),

    #[error("phone mask load timed out")]
    Timeout,
}

/// Loads the mask once, asynchronously, before it can be attached.
#[async_trait]
pub trait PhoneMaskLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn PhoneMask>, MaskLoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_mask_object_safe(_: &dyn PhoneMask) {}

    #[allow(dead_code)]
    fn assert_loader_object_safe(_: &dyn PhoneMaskLoader) {}

    #[test]
    fn errors_display() {
        assert_eq!(
            MaskLoadError::Unavailable("script blocked".into()).to_string(),
            "phone mask unavailable: script blocked"
        );
    }
}
