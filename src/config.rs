use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Controls how much detail error responses expose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt_secret: String,
    pub environment: Environment,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "SERVER_PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = match env::var("APP_ENV") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "APP_ENV", value: raw })?,
            Err(_) => Environment::default(),
        };

        let jwt_secret = Self::get_env("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid { key: "JWT_SECRET", value: String::new() });
        }

        Ok(EnvConfig {
            port,
            db_url: Self::get_env("DATABASE_URI")?,
            jwt_secret,
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

/// Environment of the running process; production until a config is installed.
pub fn environment() -> Environment {
    CONFIG.get().map(|c| c.environment).unwrap_or_default()
}
