use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::{ConfigContentProvider, FileContentConfigProvider, Validate};

pub fn to_yaml<T: Serialize>(config: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// Loads and stores a validated YAML config. A missing file yields the default.
pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    provider: TProvider,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            provider,
            _config: PhantomData,
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = from_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        self.provider.set_config_content(&to_yaml(config)?)
    }
}
