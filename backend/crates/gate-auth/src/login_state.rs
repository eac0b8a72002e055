use crate::IdentityField;

use std::fmt;

use serde::Serialize;

/// What made the resolver treat a viewer as signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginEvidence {
    /// The platform set an explicit logged-in flag
    PlatformFlag,
    /// Inferred from a non-empty identity field
    InferredFromField(IdentityField),
}

impl LoginEvidence {
    pub fn is_authoritative(&self) -> bool {
        matches!(self, LoginEvidence::PlatformFlag)
    }
}

impl fmt::Display for LoginEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginEvidence::PlatformFlag => f.write_str("platform flag"),
            LoginEvidence::InferredFromField(field) => write!(f, "field '{field}'"),
        }
    }
}

/// Gate state, recomputed on every request.
///
/// Login and logout happen on the identity platform; a request only ever
/// sees the state the platform left behind after its redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Unauthenticated,
    Authenticated {
        display_name: String,
        evidence: LoginEvidence,
    },
}

impl LoginState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, LoginState::Authenticated { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            LoginState::Authenticated { display_name, .. } => Some(display_name),
            LoginState::Unauthenticated => None,
        }
    }

    pub fn evidence(&self) -> Option<LoginEvidence> {
        match self {
            LoginState::Authenticated { evidence, .. } => Some(*evidence),
            LoginState::Unauthenticated => None,
        }
    }
}
