//! Theme resolver adapters.
//!
//! - `FixedThemeResolver` - Host states its preference up front
//! - `EnvThemeResolver` - Reads the terminal/environment preference

mod env;
mod fixed;

pub use env::EnvThemeResolver;
pub use fixed::FixedThemeResolver;
