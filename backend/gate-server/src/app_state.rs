use crate::error::Result as ServerErrorResult;
use crate::identity_source::IdentitySource;

use gate_auth::{IdentityResolver, RateLimitConfig, ViewerRateLimiter};
use gate_classify::ClassificationGateway;
use gate_config::{AuthConfig, ClassifierConfig, Config, PageConfig};

use std::path::Path;
use std::sync::Arc;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub identity_source: Arc<IdentitySource>,
    pub resolver: Arc<IdentityResolver>,
    pub gateway: Arc<ClassificationGateway>,
    pub rate_limiter: Arc<ViewerRateLimiter>,
    pub auth: Arc<AuthConfig>,
    pub classifier: Arc<ClassifierConfig>,
    pub page: Arc<PageConfig>,
}

impl AppState {
    /// Build state from validated configuration.
    ///
    /// `config_dir` anchors relative paths such as the RS256 public key.
    pub fn from_config(config: &Config, config_dir: &Path) -> ServerErrorResult<Self> {
        let identity_source = IdentitySource::from_config(&config.auth, config_dir)?;
        let gateway = ClassificationGateway::new(&config.classifier)?;

        // Convert config types for gate-auth
        let rate_limiter = ViewerRateLimiter::new(RateLimitConfig {
            max_requests: config.quota.classifications_per_viewer,
            window_secs: config.quota.window_secs,
        });

        Ok(Self {
            identity_source: Arc::new(identity_source),
            resolver: Arc::new(IdentityResolver::default()),
            gateway: Arc::new(gateway),
            rate_limiter: Arc::new(rate_limiter),
            auth: Arc::new(config.auth.clone()),
            classifier: Arc::new(config.classifier.clone()),
            page: Arc::new(config.page.clone()),
        })
    }
}
