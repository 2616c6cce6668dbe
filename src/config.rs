use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BATTLETAGS: &[&str] = &["factor-11595", "factor-11975", "factor-11726"];
pub const DEFAULT_PLATFORM: &str = "pc";
pub const DEFAULT_REGION: &str = "us";
pub const DEFAULT_API_BASE: &str = "https://ow-api.com/v1/stats";

#[derive(Debug, Clone)]
pub struct Config {
    pub battletags: Vec<String>,
    pub platform: String,
    pub region: String,
    pub data_dir: PathBuf,
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            battletags: DEFAULT_BATTLETAGS.iter().map(|t| t.to_string()).collect(),
            platform: DEFAULT_PLATFORM.to_string(),
            region: DEFAULT_REGION.to_string(),
            data_dir: PathBuf::from("."),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(tags) = env::var("OW_BATTLETAGS") {
            config.battletags = split_tags(&tags);
        }
        if let Ok(platform) = env::var("OW_PLATFORM") {
            config.platform = platform;
        }
        if let Ok(region) = env::var("OW_REGION") {
            config.region = region;
        }
        if let Ok(dir) = env::var("OW_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(base) = env::var("OW_API_BASE") {
            config.api_base = base;
        }

        Ok(config)
    }

    /// Normalizes every tag and rejects an empty account list.
    pub fn validate(mut self) -> Result<Self, AppError> {
        if self.battletags.is_empty() {
            return Err(AppError::ConfigError(
                "no BattleTags configured (set OW_BATTLETAGS or pass --tag)".to_string(),
            ));
        }
        if self.platform.trim().is_empty() || self.region.trim().is_empty() {
            return Err(AppError::ConfigError(
                "platform and region must not be empty".to_string(),
            ));
        }

        self.battletags = self
            .battletags
            .iter()
            .map(|tag| normalize_tag(tag))
            .collect::<Result<_, _>>()?;

        Ok(self)
    }
}

/// `Name#1234` and `Name-1234` address the same account; the API and the
/// account files both use the dashed form.
pub fn normalize_tag(tag: &str) -> Result<String, AppError> {
    let tag = tag.trim();
    if tag.is_empty() || tag.contains(['/', '\\']) {
        return Err(AppError::InvalidTag(tag.to_string()));
    }
    Ok(tag.replace('#', "-"))
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
