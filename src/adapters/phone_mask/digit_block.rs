//! Numeric block mask.

use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::{MaskLoadError, PhoneMask, PhoneMaskLoader};

/// Keeps digits only and groups them into blocks joined by a delimiter.
/// Digits beyond the last block are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBlockMask {
    blocks: Vec<usize>,
    delimiter: char,
}

impl DigitBlockMask {
    pub fn new(blocks: Vec<usize>, delimiter: char) -> Self {
        Self { blocks, delimiter }
    }

    /// 3/3/4 blocks with `-`, matching the phone rule.
    pub fn us_phone() -> Self {
        Self::new(vec![3, 3, 4], '-')
    }
}

impl Default for DigitBlockMask {
    fn default() -> Self {
        Self::us_phone()
    }
}

impl PhoneMask for DigitBlockMask {
    fn format(&self, raw: &str) -> String {
        let mut digits = raw.chars().filter(char::is_ascii_digit);
        let mut out = String::new();
        for (i, &len) in self.blocks.iter().enumerate() {
            let block: String = digits.by_ref().take(len).collect();
            if block.is_empty() {
                break;
            }
            if i > 0 {
                out.push(self.delimiter);
            }
            out.push_str(&block);
            if block.len() < len {
                break;
            }
        }
        out
    }
}

/// Loader for the built-in mask; never fails.
#[derive(Debug, Clone, Default)]
pub struct BuiltinMaskLoader {
    mask: DigitBlockMask,
}

impl BuiltinMaskLoader {
    pub fn new(mask: DigitBlockMask) -> Self {
        Self { mask }
    }
}

#[async_trait]
impl PhoneMaskLoader for BuiltinMaskLoader {
    async fn load(&self) -> Result<Arc<dyn PhoneMask>, MaskLoadError> {
        Ok(Arc::new(self.mask.clone()))
    }
}
