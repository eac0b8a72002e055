use crate::{IdentityField, LoginEvidence, LoginState, ViewerIdentity};

use log::debug;

/// Shown when a signed-in viewer exposes no usable name, email or handle
pub const SIGNED_IN_FALLBACK: &str = "Signed-in user";

/// Field orderings used by the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Fields that, when non-empty, imply a signed-in viewer
    pub login_fields: Vec<IdentityField>,
    /// Display name candidates, most human-friendly group first
    pub display_groups: Vec<Vec<IdentityField>>,
    pub fallback_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        use IdentityField::*;

        Self {
            login_fields: vec![Email, Sub, Name, UserId, Id],
            display_groups: vec![
                vec![Name, FullName, DisplayName],
                vec![Email, PrimaryEmail],
                vec![Username, User, UserId, Id],
            ],
            fallback_name: String::from(SIGNED_IN_FALLBACK),
        }
    }
}

/// Reads login state and display names out of a [`ViewerIdentity`].
///
/// Never fails: every miss degrades to "absent" and finally to the
/// fallback name.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    config: ResolverConfig,
}

impl IdentityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// First non-empty value among `keys`, in order.
    pub fn resolve_field<'a>(
        &self,
        identity: Option<&'a ViewerIdentity>,
        keys: &[IdentityField],
    ) -> Option<&'a str> {
        let identity = identity?;
        keys.iter().find_map(|field| identity.value(*field))
    }

    /// Why the viewer counts as logged in, if they do.
    ///
    /// The field-based path is an inference from whatever the platform
    /// exposed, not an authoritative session check.
    pub fn login_evidence(&self, identity: Option<&ViewerIdentity>) -> Option<LoginEvidence> {
        let viewer = identity?;

        if viewer.is_logged_in == Some(true) {
            return Some(LoginEvidence::PlatformFlag);
        }

        self.config
            .login_fields
            .iter()
            .copied()
            .find(|field| viewer.value(*field).is_some())
            .map(LoginEvidence::InferredFromField)
    }

    pub fn is_logged_in(&self, identity: Option<&ViewerIdentity>) -> bool {
        self.login_evidence(identity).is_some()
    }

    pub fn display_name(&self, identity: Option<&ViewerIdentity>) -> String {
        self.config
            .display_groups
            .iter()
            .find_map(|group| self.resolve_field(identity, group))
            .map(String::from)
            .unwrap_or_else(|| self.config.fallback_name.clone())
    }

    /// Page-level gate state for one render pass.
    pub fn evaluate(&self, identity: Option<&ViewerIdentity>) -> LoginState {
        match self.login_evidence(identity) {
            Some(evidence) => {
                let display_name = self.display_name(identity);
                debug!("Viewer '{display_name}' authenticated via {evidence}");
                LoginState::Authenticated {
                    display_name,
                    evidence,
                }
            }
            None => LoginState::Unauthenticated,
        }
    }
}
