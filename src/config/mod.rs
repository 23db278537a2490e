mod loader;
mod types;

pub use loader::{ConfigError, BASE_ENDPOINT_ENV};
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
