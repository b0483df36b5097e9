use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use tricklog_engine::session::DEFAULT_TRACKED_PLAYER;

/// How tabular command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub tracked_player: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub tracked_player: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            tracked_player: ValueSource::Default,
            format: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracked_player: DEFAULT_TRACKED_PLAYER.into(),
            format: OutputFormat::Table,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TRICKLOG_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.tracked_player {
            cfg.tracked_player = v;
            sources.tracked_player = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(player) = std::env::var("TRICKLOG_TRACKED_PLAYER")
        && !player.is_empty()
    {
        cfg.tracked_player = player;
        sources.tracked_player = ValueSource::Env;
    }
    if let Ok(format) = std::env::var("TRICKLOG_FORMAT")
        && !format.is_empty()
    {
        cfg.format = OutputFormat::parse(&format)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {}", format)))?;
        sources.format = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    tracked_player: Option<String>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.tracked_player.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: tracked_player must not be empty".into(),
        ));
    }
    Ok(())
}
