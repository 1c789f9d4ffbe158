mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::{ConfigError, config_error_hint};
pub use loader::{load_config, parse_config, validate_config};
pub use types::AccessLensConfig;
