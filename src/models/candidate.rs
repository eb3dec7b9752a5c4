use serde::{Deserialize, Serialize};

/// Candidate projection, also used as the creation payload. Only the name
/// is mandatory; every other field defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub notice_period: String,
}
