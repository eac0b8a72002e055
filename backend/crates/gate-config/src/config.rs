use crate::{
    AuthConfig, AuthMode, CONFIG_DIR_ENV, CONFIG_FILENAME, ClassifierConfig, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig, PageConfig, QuotaConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub classifier: ClassifierConfig,
    pub quota: QuotaConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
    /// `GATE_*` overrides that failed to parse, as `NAME='value'`.
    /// Reported by `log_summary` once logging is up.
    #[serde(skip)]
    pub ignored_env_overrides: Vec<String>,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GATE_CONFIG_DIR env var, else use ./.gate/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GATE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GATE_CONFIG_DIR env var > ./.gate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.classifier.validate()?;
        self.quota.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        let verifier = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };
        info!("  auth: mode={} (id token: {})", self.auth.mode, verifier);
        info!(
            "  auth actions: login={}, logout={}",
            if self.auth.login_url.is_some() { "platform" } else { "unavailable" },
            if self.auth.logout_url.is_some() { "platform" } else { "unavailable" },
        );
        if self.auth.mode == AuthMode::Disabled {
            warn!("  auth: DISABLED, every request is '{}'", self.auth.dev_user_name);
        }

        info!(
            "  classifier: {} (timeout={}s, field={}, types={})",
            self.classifier.endpoint_url,
            self.classifier.timeout_secs,
            self.classifier.label_field,
            self.classifier.accepted_types.join(",")
        );
        info!(
            "  classifier upload limit: {} bytes",
            self.classifier.max_upload_bytes
        );

        info!("  quota: {}", self.quota.describe());

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        for ignored in &self.ignored_env_overrides {
            warn!("  ignored unparseable override {ignored}");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GATE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_SERVER_PORT",
            &mut self.server.port,
        );

        // Auth
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_AUTH_MODE",
            &mut self.auth.mode,
        );
        Self::apply_env_string("GATE_AUTH_HEADER_PREFIX", &mut self.auth.header_prefix);
        Self::apply_env_option_string("GATE_AUTH_LOGIN_URL", &mut self.auth.login_url);
        Self::apply_env_option_string("GATE_AUTH_LOGOUT_URL", &mut self.auth.logout_url);
        Self::apply_env_string("GATE_AUTH_ID_TOKEN_COOKIE", &mut self.auth.id_token_cookie);
        Self::apply_env_option_string("GATE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "GATE_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("GATE_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_option_string("GATE_AUTH_AUDIENCE", &mut self.auth.audience);
        Self::apply_env_string("GATE_AUTH_DEV_USER_NAME", &mut self.auth.dev_user_name);

        // Classifier
        Self::apply_env_string(
            "GATE_CLASSIFIER_ENDPOINT_URL",
            &mut self.classifier.endpoint_url,
        );
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_CLASSIFIER_TIMEOUT_SECS",
            &mut self.classifier.timeout_secs,
        );
        Self::apply_env_string(
            "GATE_CLASSIFIER_LABEL_FIELD",
            &mut self.classifier.label_field,
        );
        Self::apply_env_list(
            "GATE_CLASSIFIER_ACCEPTED_TYPES",
            &mut self.classifier.accepted_types,
        );
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_CLASSIFIER_MAX_UPLOAD_BYTES",
            &mut self.classifier.max_upload_bytes,
        );

        // Quota
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_QUOTA_CLASSIFICATIONS_PER_VIEWER",
            &mut self.quota.classifications_per_viewer,
        );
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_QUOTA_WINDOW_SECS",
            &mut self.quota.window_secs,
        );

        // Logging
        Self::apply_env_parse(
            &mut self.ignored_env_overrides,
            "GATE_LOG_LEVEL",
            &mut self.logging.level,
        );
        Self::apply_env_bool("GATE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GATE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values keep the previous setting and are recorded in `ignored`.
    fn apply_env_parse<T: std::str::FromStr>(
        ignored: &mut Vec<String>,
        var_name: &str,
        target: &mut T,
    ) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => ignored.push(format!("{var_name}='{val}'")),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(|item| item.trim().to_lowercase())
                .filter(|item| !item.is_empty())
                .collect();
        }
    }
}
