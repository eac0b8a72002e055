use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEV_USER_NAME, DEFAULT_HEADER_PREFIX,
    DEFAULT_ID_TOKEN_COOKIE, MIN_JWT_SECRET_LENGTH,
};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Where the viewer identity comes from on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Trusted reverse proxy injects one header per identity field
    #[default]
    Headers,
    /// Platform hands the browser a signed OIDC ID token
    IdToken,
    /// Development mode: every request is a fixed signed-in user
    Disabled,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "headers" => Ok(AuthMode::Headers),
            "id_token" | "id-token" => Ok(AuthMode::IdToken),
            "disabled" | "off" => Ok(AuthMode::Disabled),
            other => Err(ConfigError::auth(format!("unknown auth.mode '{other}'"))),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthMode::Headers => "headers",
            AuthMode::IdToken => "id_token",
            AuthMode::Disabled => "disabled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// Prefix for proxy identity headers (headers mode)
    pub header_prefix: String,
    /// Platform "begin login" URL. None disables the login action.
    pub login_url: Option<String>,
    /// Platform "begin logout" URL. None disables the logout action.
    pub logout_url: Option<String>,
    /// Cookie carrying the ID token when no Authorization header is sent
    pub id_token_cookie: String,
    /// HS256 secret for ID token verification
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Name given to the fixed identity in disabled mode
    pub dev_user_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            header_prefix: String::from(DEFAULT_HEADER_PREFIX),
            login_url: None,
            logout_url: None,
            id_token_cookie: String::from(DEFAULT_ID_TOKEN_COOKIE),
            jwt_secret: None,
            jwt_public_key_path: None,
            issuer: None,
            audience: None,
            dev_user_name: String::from(DEFAULT_DEV_USER_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match self.mode {
            AuthMode::Headers => {
                if self.header_prefix.trim().is_empty() {
                    return Err(ConfigError::auth(
                        "auth.header_prefix cannot be empty in headers mode",
                    ));
                }
            }
            AuthMode::IdToken => self.validate_id_token(config_dir)?,
            AuthMode::Disabled => {
                if self.dev_user_name.trim().is_empty() {
                    return Err(ConfigError::auth(
                        "auth.dev_user_name cannot be empty in disabled mode",
                    ));
                }
            }
        }

        for (key, url) in [
            ("auth.login_url", &self.login_url),
            ("auth.logout_url", &self.logout_url),
        ] {
            if let Some(url) = url
                && url.trim().is_empty()
            {
                return Err(ConfigError::auth(format!("{key} cannot be empty when set")));
            }
        }

        Ok(())
    }

    fn validate_id_token(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.id_token_cookie.trim().is_empty() {
            return Err(ConfigError::auth("auth.id_token_cookie cannot be empty"));
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(secret), _) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
                    )));
                }
            }
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config directory",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path does not exist: {}",
                        full_path.display()
                    )));
                }
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "id_token mode requires auth.jwt_secret or auth.jwt_public_key_path",
                ));
            }
        }

        Ok(())
    }
}
