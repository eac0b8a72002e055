use serde::Serialize;

/// Label reported when the endpoint answers without a label
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Label reported when the request could not be completed
pub const ERROR_LABEL: &str = "Error";

/// Outcome of one classification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Label(String),
    Unknown,
    Error { diagnostic: String },
}

impl Prediction {
    pub fn label(&self) -> &str {
        match self {
            Prediction::Label(label) => label,
            Prediction::Unknown => UNKNOWN_LABEL,
            Prediction::Error { .. } => ERROR_LABEL,
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Prediction::Error { diagnostic } => Some(diagnostic),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Prediction::Error { .. })
    }

    pub fn to_body(&self) -> PredictionBody {
        PredictionBody {
            label: self.label().to_string(),
            diagnostic: self.diagnostic().map(String::from),
        }
    }
}

/// JSON shape returned by the API and printed by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct PredictionBody {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}
