use std::env;

use auth::ExpirationPolicy;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum HS256 secret length in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(skip)]
    pub run_mode: RunMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default)]
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_session_lifetime_minutes")]
    pub session_lifetime_minutes: i64,
    #[serde(default = "default_remember_me_lifetime_days")]
    pub remember_me_lifetime_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: auth::PasswordHasher::DEFAULT_COST,
        }
    }
}

/// Deployment mode, selected by `RUN_MODE`.
///
/// Only `Development` exposes internal error details in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    Development,
    #[default]
    Production,
}

impl RunMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => RunMode::Development,
            _ => RunMode::Production,
        }
    }

    /// Mode for an optional `RUN_MODE` value; unset means `Production`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.map(RunMode::parse).unwrap_or_default()
    }

    pub fn exposes_error_details(&self) -> bool {
        matches!(self, RunMode::Development)
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_session_lifetime_minutes() -> i64 {
    60
}

fn default_remember_me_lifetime_days() -> i64 {
    30
}

impl JwtConfig {
    pub fn expiration_policy(&self) -> ExpirationPolicy {
        ExpirationPolicy::new(
            Duration::minutes(self.session_lifetime_minutes),
            Duration::days(self.remember_me_lifetime_days),
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode_value = env::var("RUN_MODE").ok();
        let config_file = run_mode_value.as_deref().unwrap_or("development");

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", config_file)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let mut config: Config = configuration.try_deserialize()?;
        // Error details are exposed only when RUN_MODE explicitly asks for it
        config.run_mode = RunMode::from_env_value(run_mode_value.as_deref());
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the service must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.jwt.session_lifetime_minutes <= 0 || self.jwt.remember_me_lifetime_days <= 0 {
            return Err(ConfigError::Message(
                "jwt lifetimes must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
