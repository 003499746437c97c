use std::env;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Settings {
    api: ApiSettings,
    telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env_or_default("CLASSHUB_API_BASE_URL", "http://localhost:8060/api/v1")
            .trim_end_matches('/')
            .to_string();
        let timeout_seconds = parse_u64(
            "CLASSHUB_HTTP_TIMEOUT_SECONDS",
            env_or_default("CLASSHUB_HTTP_TIMEOUT_SECONDS", "30"),
        )?;
        let connect_timeout_seconds = parse_u64(
            "CLASSHUB_CONNECT_TIMEOUT_SECONDS",
            env_or_default("CLASSHUB_CONNECT_TIMEOUT_SECONDS", "10"),
        )?;

        let log_level = env_or_default("CLASSHUB_LOG_LEVEL", "info");
        let json = env_optional("CLASSHUB_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            api: ApiSettings { base_url, timeout_seconds, connect_timeout_seconds },
            telemetry: TelemetrySettings { log_level, json },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "CLASSHUB_API_BASE_URL",
                value: self.api.base_url.clone(),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "CLASSHUB_HTTP_TIMEOUT_SECONDS",
                value: "0".to_string(),
            });
        }

        if self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "CLASSHUB_CONNECT_TIMEOUT_SECONDS",
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn env_or_default(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

fn parse_u64(field: &'static str, value: String) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidValue { field, value })
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES" | "on" | "ON")
}
