use serde::{Deserialize, Serialize};

/// Server-side job record. Field names mirror the spreadsheet headers the
/// backend uses as JSON keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "JobID", default)]
    pub id: String,
    #[serde(rename = "Job Title", default)]
    pub title: String,
    #[serde(rename = "Project Name", default)]
    pub project: String,
    #[serde(rename = "Job Location (Country)", default)]
    pub location: String,
    #[serde(rename = "Hiring Manager", default)]
    pub hiring_manager: String,
    #[serde(rename = "Job Status", default)]
    pub status: String,
    #[serde(rename = "Position Created Date", default)]
    pub created_date: String,
}

/// Creation payload. Status and creation date are stamped client-side
/// before submission.
#[derive(Debug, Clone, Serialize)]
pub struct NewJob {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Project Name")]
    pub project: String,
    #[serde(rename = "Job Location (Country)")]
    pub location: String,
    #[serde(rename = "Hiring Manager")]
    pub hiring_manager: String,
    #[serde(rename = "Job Status")]
    pub status: String,
    #[serde(rename = "Position Created Date")]
    pub created_date: String,
}
