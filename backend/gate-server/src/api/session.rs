use crate::{AppState, Viewer};

use gate_auth::{LoginEvidence, ViewerIdentity};

use axum::{Json, extract::State};
use serde::Serialize;

/// Account-details view of the current viewer
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub display_name: Option<String>,
    pub evidence: Option<LoginEvidence>,
    /// False when login was inferred from an identity field
    pub authoritative: bool,
    pub identity_source: String,
    pub fields: Option<ViewerIdentity>,
}

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>, viewer: Viewer) -> Json<SessionResponse> {
    let evidence = viewer.state.evidence();

    Json(SessionResponse {
        logged_in: viewer.is_authenticated(),
        display_name: viewer.state.display_name().map(String::from),
        evidence,
        authoritative: evidence.is_some_and(|e| e.is_authoritative()),
        identity_source: state.identity_source.mode().to_string(),
        fields: viewer.identity,
    })
}
