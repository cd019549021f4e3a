//! Form configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Which form variant to show and its heading.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    pub subtitle: Option<String>,

    /// Five steps with the Business Information step, four without.
    #[serde(default = "default_include_business_step")]
    pub include_business_step: bool,
}

impl FormConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: None,
            include_business_step: default_include_business_step(),
        }
    }
}

fn default_title() -> String {
    "Web Inquiry Form".to_string()
}

fn default_include_business_step() -> bool {
    true
}
