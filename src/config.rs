use crate::policies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct DataConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ReplayConfig {
    pub max_matches: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub data: DataConfig,
    pub replay: ReplayConfig,
    pub policies: Vec<PolicyType>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize()
    }
}
