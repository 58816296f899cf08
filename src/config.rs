use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3001";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub static_dir: String,
    /// Only warnings and startup milestones are logged when set.
    pub suppress_logs: bool,
    pub log_format: LogFormat,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        Ok(Self {
            server_address: vars.get_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            database_url: vars.get("DATABASE_URL")?,
            database_max_connections: vars
                .get_parse("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            static_dir: vars.get_or("STATIC_DIR", DEFAULT_STATIC_DIR),
            suppress_logs: vars.get_flag("SUPPRESS_LOGS"),
            log_format: vars.get_parse("LOG_FORMAT")?.unwrap_or(LogFormat::Text),
        })
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn get(&self, name: &str) -> Result<String> {
        self.raw(name)
            .ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or_else(|| default.to_string())
    }

    fn get_parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.raw(name)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
            })
            .transpose()
    }

    fn get_flag(&self, name: &str) -> bool {
        self.raw(name)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
