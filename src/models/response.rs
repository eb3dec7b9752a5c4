use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Envelope returned by single-record create and toggle endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    pub id: Option<JsonValue>,
    pub message: Option<String>,
}

impl MutationResponse {
    /// Identifier as shown in alerts; servers return either a string or a
    /// number here.
    pub fn id_label(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Per-name outcome of the batched project import. A missing id means the
/// server skipped the name (usually a duplicate).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectImportResult {
    pub id: Option<JsonValue>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectBulkResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<ProjectImportResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateImportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub name: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateBulkResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<CandidateImportResult>,
}

/// Reply from the assistant endpoint. `error` takes precedence over
/// `response` when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandResponse {
    pub error: Option<String>,
    pub response: Option<String>,
}
