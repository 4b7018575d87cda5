use crate::error::SetupError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Maximum identifier length MySQL accepts for a schema name.
const MAX_DATABASE_NAME_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loglevel: String,
    /// Compare column names of existing tables against their definitions.
    pub verify_columns: bool,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            verify_columns: false,
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "kb_labs".to_string(),
        }
    }
}

impl Config {
    /// Layered sources: defaults, then `config.toml`, then `KB_*` env vars.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("KB_").split("__"))
    }

    pub fn load() -> Result<Self, SetupError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, SetupError> {
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        self.database.validate()
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.host.trim().is_empty() {
            return Err(SetupError::InvalidConfig("database.host is empty".to_string()));
        }
        if self.user.trim().is_empty() {
            return Err(SetupError::InvalidConfig("database.user is empty".to_string()));
        }
        validate_database_name(&self.name)
    }
}

/// The name ends up inside backquotes in DDL, so only plain unquoted
/// identifier characters are allowed.
fn validate_database_name(name: &str) -> Result<(), SetupError> {
    if name.is_empty() || name.len() > MAX_DATABASE_NAME_LEN {
        return Err(SetupError::InvalidConfig(format!(
            "database.name must be 1..={MAX_DATABASE_NAME_LEN} characters, got {}",
            name.len()
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
    {
        return Err(SetupError::InvalidConfig(format!(
            "database.name contains unsupported character {c:?}"
        )));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(SetupError::InvalidConfig(
            "database.name cannot consist only of digits".to_string(),
        ));
    }
    Ok(())
}
