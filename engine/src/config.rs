use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::settings::BotSettings;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub bot: BotSettings,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.bot.validate()
    }
}

// A missing file is not an error: the engine starts with defaults and the
// config is written out on first save.
pub fn load_config(path: &Path) -> Result<EngineConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            return match err.kind() {
                ErrorKind::NotFound => Ok(EngineConfig::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            };
        }
    };

    let config: EngineConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
