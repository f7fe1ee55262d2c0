use common::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use games::chatbot::ChatRules;
use games::recommender::Catalog;
use games::tictactoe::BotKind;

const CONFIG_FILE_NAME: &str = "games_cli_config.yaml";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub kind: BotKind,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            kind: BotKind::Minimax,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub chat: ChatRules,
    pub catalog: Catalog,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        self.chat.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, AppConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or(CONFIG_FILE_NAME))
}
