mod config_manager;
mod content_provider;
mod engine_config;

pub use config_manager::{ConfigManager, from_yaml, to_yaml};
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use engine_config::{DEFAULT_CONFIG_FILE, EngineConfig};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
