pub mod error;
pub mod id_token_validator;
pub mod identity_field;
pub mod identity_resolver;
pub mod jwt_algorithm;
pub mod login_state;
pub mod rate_limit_config;
pub mod viewer_identity;
pub mod viewer_rate_limiter;

pub use error::{AuthError, Result};
pub use id_token_validator::{IdTokenClaims, IdTokenValidator};
pub use identity_field::IdentityField;
pub use identity_resolver::{IdentityResolver, ResolverConfig, SIGNED_IN_FALLBACK};
pub use jwt_algorithm::JwtAlgorithm;
pub use login_state::{LoginEvidence, LoginState};
pub use rate_limit_config::RateLimitConfig;
pub use viewer_identity::ViewerIdentity;
pub use viewer_rate_limiter::ViewerRateLimiter;
