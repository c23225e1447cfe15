use std::env;
use std::fmt;

use crate::pricing::service::MalformedRowPolicy;

/// Distinguishes runtime behavior for different stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub batch: BatchConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let on_malformed = match env::var("APP_ON_MALFORMED") {
            Ok(raw) => raw
                .parse::<MalformedRowPolicy>()
                .map_err(|_| ConfigError::InvalidRowPolicy { value: raw })?,
            Err(_) => MalformedRowPolicy::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            batch: BatchConfig { on_malformed },
        })
    }
}

/// Tracing verbosity controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Batch processing knobs.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub on_malformed: MalformedRowPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRowPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRowPolicy { value } => {
                write!(f, "APP_ON_MALFORMED must be abort or skip, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
