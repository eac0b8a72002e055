//! Boundary adapters that turn platform-supplied request data into a
//! [`ViewerIdentity`].

use crate::error::{Result as ServerErrorResult, ServerError};

use gate_auth::{IdTokenValidator, IdentityField, JwtAlgorithm, ViewerIdentity};
use gate_config::{AuthConfig, AuthMode, ConfigError};

use std::path::Path;

use axum_extra::{
    extract::cookie::CookieJar,
    headers::{Authorization, HeaderMapExt, authorization::Bearer},
};
use http::HeaderMap;
use log::{debug, info, warn};

/// Where a request's viewer identity is read from, fixed at startup
pub enum IdentitySource {
    /// Trusted reverse proxy headers, `<prefix><Field>`
    Headers { prefix: String },
    /// Signed OIDC ID token, from a Bearer header or a cookie
    IdToken {
        validator: IdTokenValidator,
        cookie_name: String,
    },
    /// Fixed signed-in identity for local development
    Disabled { identity: ViewerIdentity },
}

impl IdentitySource {
    pub fn from_config(config: &AuthConfig, config_dir: &Path) -> ServerErrorResult<Self> {
        match config.mode {
            AuthMode::Headers => {
                info!(
                    "Identity source: proxy headers ({}Email, {}Name, ...)",
                    config.header_prefix, config.header_prefix
                );
                Ok(Self::Headers {
                    prefix: config.header_prefix.clone(),
                })
            }
            AuthMode::IdToken => {
                let algorithm = load_algorithm(config, config_dir)?;
                let mut validator = IdTokenValidator::from_algorithm(&algorithm)?;
                if let Some(ref issuer) = config.issuer {
                    validator = validator.with_issuer(issuer);
                }
                if let Some(ref audience) = config.audience {
                    validator = validator.with_audience(audience);
                }

                info!(
                    "Identity source: {} ID token (Bearer header or '{}' cookie)",
                    validator.algorithm(),
                    config.id_token_cookie
                );
                Ok(Self::IdToken {
                    validator,
                    cookie_name: config.id_token_cookie.clone(),
                })
            }
            AuthMode::Disabled => {
                warn!(
                    "Authentication DISABLED - every request is signed in as '{}'",
                    config.dev_user_name
                );
                Ok(Self::Disabled {
                    identity: ViewerIdentity::default()
                        .with_logged_in(true)
                        .with(IdentityField::Name, config.dev_user_name.as_str()),
                })
            }
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Headers { .. } => AuthMode::Headers,
            Self::IdToken { .. } => AuthMode::IdToken,
            Self::Disabled { .. } => AuthMode::Disabled,
        }
    }

    /// Identity for one request. `None` when the platform supplied nothing
    /// usable; a rejected token is logged and treated the same way.
    pub fn viewer(&self, headers: &HeaderMap) -> Option<ViewerIdentity> {
        match self {
            Self::Headers { prefix } => {
                let identity = ViewerIdentity::from_lookup(|field| {
                    header_text(headers, &format!("{prefix}{}", field.header_suffix()))
                });
                (identity != ViewerIdentity::default()).then_some(identity)
            }
            Self::IdToken {
                validator,
                cookie_name,
            } => {
                let token = bearer_token(headers).or_else(|| {
                    CookieJar::from_headers(headers)
                        .get(cookie_name)
                        .map(|cookie| cookie.value().to_string())
                })?;

                match validator.validate(&token) {
                    Ok(claims) => Some(ViewerIdentity::from_mapping(&claims)),
                    Err(e) => {
                        warn!("Rejected ID token: {e}");
                        None
                    }
                }
            }
            Self::Disabled { identity } => Some(identity.clone()),
        }
    }
}

fn load_algorithm(config: &AuthConfig, config_dir: &Path) -> ServerErrorResult<JwtAlgorithm> {
    if let Some(ref secret) = config.jwt_secret {
        return Ok(JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        });
    }

    let Some(ref key_path) = config.jwt_public_key_path else {
        return Err(ConfigError::auth(
            "id_token mode requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    let full_path = config_dir.join(key_path);
    debug!("Reading ID token public key from {}", full_path.display());
    let public_key_pem =
        std::fs::read_to_string(&full_path).map_err(|source| ServerError::JwtKeyFile {
            path: full_path.display().to_string(),
            source,
        })?;

    Ok(JwtAlgorithm::RS256 { public_key_pem })
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .filter(|token| !token.is_empty())
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
