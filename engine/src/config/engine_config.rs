use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate};
use crate::tictactoe::{Difficulty, DifficultySettings, Mark};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub difficulty: DifficultySettings,
    /// Level used when none is given on the command line; 0 for two humans.
    pub default_level: u8,
    pub bot_mark: Mark,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultySettings::default(),
            default_level: 3,
            bot_mark: Mark::O,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.difficulty.validate()?;
        if self.default_level > self.difficulty.max_level() {
            return Err(format!(
                "default_level {} exceeds the highest level {}",
                self.default_level,
                self.difficulty.max_level()
            ));
        }
        if self.bot_mark == Mark::Empty {
            return Err("bot_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, EngineConfig> {
        ConfigManager::from_yaml_file(file_path)
    }

    pub fn opponent(&self, level: u8) -> Result<Option<Difficulty>, String> {
        self.difficulty.opponent(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, from_yaml, to_yaml};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = EngineConfig::default();
        let yaml = to_yaml(&config).unwrap();
        assert!(yaml.contains("perfect_move_probability"));
        let parsed: EngineConfig = from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager = EngineConfig::config_manager(&get_temp_file_path());
        assert_eq!(manager.load().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_saved_config_is_loaded_back() {
        let path = get_temp_file_path();
        let manager = EngineConfig::config_manager(&path);
        let config = EngineConfig {
            difficulty: DifficultySettings {
                perfect_move_probability: vec![0.0, 0.3, 0.6, 0.9, 0.97, 1.0],
            },
            default_level: 6,
            bot_mark: Mark::X,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(config.opponent(6).unwrap().map(|d| d.perfect_probability()), Some(1.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider
            .set_config_content("difficulty:\n  perfect_move_probability: [0.5, 2.0]\ndefault_level: 1\nbot_mark: O\n")
            .unwrap();
        let result = EngineConfig::config_manager(&path).load();
        assert!(result.unwrap_err().starts_with("Config validation error"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_validation_rules() {
        let mut config = EngineConfig::default();
        assert!(config.validate().is_ok());

        config.default_level = 6;
        assert!(config.validate().is_err());

        config.default_level = 0;
        config.bot_mark = Mark::Empty;
        assert!(config.validate().is_err());
    }
}
