//! Per-request viewer extraction

use crate::AppState;

use gate_auth::{IdentityField, LoginState, ViewerIdentity};

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Fields that identify a viewer for rate limiting, most stable first
const VIEWER_KEY_FIELDS: [IdentityField; 5] = [
    IdentityField::Sub,
    IdentityField::UserId,
    IdentityField::Id,
    IdentityField::Email,
    IdentityField::Name,
];

const ANONYMOUS_VIEWER_KEY: &str = "anonymous";

/// The viewer behind the current request and the gate state derived from it.
///
/// Never rejects: a missing or invalid identity is `Unauthenticated`, and
/// each handler decides what that means for its route.
pub struct Viewer {
    pub identity: Option<ViewerIdentity>,
    pub state: LoginState,
}

impl Viewer {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Key for the per-viewer classification quota
    pub fn rate_limit_key(&self, state: &AppState) -> String {
        state
            .resolver
            .resolve_field(self.identity.as_ref(), &VIEWER_KEY_FIELDS)
            .unwrap_or(ANONYMOUS_VIEWER_KEY)
            .to_string()
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = state.identity_source.viewer(&parts.headers);
            let login_state = state.resolver.evaluate(identity.as_ref());

            Ok(Viewer {
                identity,
                state: login_state,
            })
        }
    }
}
