pub mod config;
pub mod logger;

pub use config::{
    ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};
