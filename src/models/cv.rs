use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cv {
    #[serde(rename = "CVID", default)]
    pub id: String,
    #[serde(rename = "Candidate Name", default)]
    pub candidate_name: String,
    #[serde(rename = "Position", default)]
    pub position: String,
    #[serde(rename = "Project", default)]
    pub project: String,
    #[serde(rename = "Application Status", default)]
    pub status: String,
    #[serde(rename = "Interview Date", default)]
    pub interview_date: String,
    #[serde(rename = "Date CV Shared", default)]
    pub shared_date: String,
}

/// Creation payload. Application status and share date are stamped
/// client-side before submission.
#[derive(Debug, Clone, Serialize)]
pub struct NewCv {
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "Candidate Name")]
    pub candidate_name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Interview Date")]
    pub interview_date: String,
    #[serde(rename = "Application Status")]
    pub status: String,
    #[serde(rename = "Date CV Shared")]
    pub shared_date: String,
}
