use serde::{Deserialize, Serialize};

/// Activity categories emitted by the email monitor. Unrecognized types
/// deserialize to `Other` so a feed entry never fails the whole payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    System,
    Inbox,
    Sent,
    Recruitment,
    Ai,
    Error,
    Skip,
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::System => "⚙️",
            ActivityType::Inbox => "📥",
            ActivityType::Sent => "📤",
            ActivityType::Recruitment => "💼",
            ActivityType::Ai => "🤖",
            ActivityType::Error => "❌",
            ActivityType::Skip => "⏭️",
            ActivityType::Other => "📧",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    pub message: Option<String>,
    pub subject: Option<String>,
    pub timestamp: Option<String>,
}
