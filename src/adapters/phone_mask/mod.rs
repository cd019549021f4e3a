//! Phone mask adapters.
//!
//! - `DigitBlockMask` - Digits grouped into fixed blocks (`DDD-DDD-DDDD`)
//! - `BuiltinMaskLoader` - Loader that always yields the digit-block mask

mod digit_block;

pub use digit_block::{BuiltinMaskLoader, DigitBlockMask};
