use serde::{Deserialize, Serialize};

/// Status flags polled from the server; drive which monitoring control is
/// offered and whether the assistant is usable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub email_monitoring: bool,
    #[serde(default)]
    pub ai_configured: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_jobs: i64,
    #[serde(default)]
    pub open_jobs: i64,
    #[serde(default)]
    pub filled_jobs: i64,
    #[serde(default)]
    pub total_cvs: i64,
    #[serde(default)]
    pub interviews_scheduled: i64,
}
