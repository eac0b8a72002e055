mod auth_config;
mod classifier_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod page_config;
mod quota_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::{AuthConfig, AuthMode};
pub use classifier_config::ClassifierConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use page_config::PageConfig;
pub use quota_config::QuotaConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "GATE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gate";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_HEADER_PREFIX: &str = "X-Forwarded-";
const DEFAULT_ID_TOKEN_COOKIE: &str = "id_token";
const DEFAULT_DEV_USER_NAME: &str = "Developer";
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_ENDPOINT_URL: &str =
    "https://askai.aiclub.world/27a37a06-93bd-4ec5-a56c-963adc53c0e7";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const DEFAULT_LABEL_FIELD: &str = "predicted_label";
const DEFAULT_ACCEPTED_TYPES: [&str; 4] = ["jpg", "jpeg", "png", "jfif"];
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const MIN_MAX_UPLOAD_BYTES: usize = 1024;
const MAX_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
