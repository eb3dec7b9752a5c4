use crate::models::activity::Activity;
use chrono::{DateTime, Local};

pub const NO_ACTIVITY_PLACEHOLDER: &str = "No email activity yet";
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Rendered activity feed, newest entry first.
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    pub lines: Vec<String>,
    pub count_label: String,
}

impl ActivityFeed {
    pub fn render(activities: &[Activity]) -> Self {
        if activities.is_empty() {
            return Self {
                lines: vec![NO_ACTIVITY_PLACEHOLDER.to_string()],
                count_label: "0 activities".to_string(),
            };
        }

        Self {
            lines: activities.iter().rev().map(format_activity).collect(),
            count_label: format!("{} activities", activities.len()),
        }
    }
}

pub fn format_activity(activity: &Activity) -> String {
    let time = activity
        .timestamp
        .as_deref()
        .map(local_time_label)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string());
    let icon = activity.activity_type.icon();
    let message = activity.message.as_deref().unwrap_or("No message");

    match activity.subject.as_deref() {
        Some(subject) => format!("{} {}  {} \"{}\"", icon, time, message, subject),
        None => format!("{} {}  {}", icon, time, message),
    }
}

fn local_time_label(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        Err(_) => UNKNOWN_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityType;

    fn activity(message: &str, timestamp: Option<&str>) -> Activity {
        Activity {
            activity_type: ActivityType::Inbox,
            message: Some(message.to_string()),
            subject: None,
            timestamp: timestamp.map(str::to_string),
        }
    }

    #[test]
    fn empty_input_renders_placeholder_and_zero_count() {
        let feed = ActivityFeed::render(&[]);
        assert_eq!(feed.lines, vec![NO_ACTIVITY_PLACEHOLDER.to_string()]);
        assert_eq!(feed.count_label, "0 activities");
    }

    #[test]
    fn entries_render_newest_first() {
        let activities = vec![
            activity("first", Some("2026-08-23T08:00:00Z")),
            activity("second", Some("2026-08-23T09:00:00Z")),
            activity("third", Some("2026-08-23T10:00:00Z")),
        ];
        let feed = ActivityFeed::render(&activities);
        assert_eq!(feed.count_label, "3 activities");
        assert!(feed.lines[0].contains("third"));
        assert!(feed.lines[1].contains("second"));
        assert!(feed.lines[2].contains("first"));
    }

    #[test]
    fn bad_or_missing_timestamp_degrades_to_placeholder() {
        let broken = activity("oops", Some("not-a-date"));
        assert!(format_activity(&broken).contains(UNKNOWN_TIME));

        let missing = activity("none", None);
        assert!(format_activity(&missing).contains(UNKNOWN_TIME));
    }

    #[test]
    fn subject_is_quoted_when_present() {
        let mut entry = activity("mail in", Some("2026-08-23T10:00:00Z"));
        entry.subject = Some("Senior Rust Engineer".to_string());
        assert!(format_activity(&entry).contains("\"Senior Rust Engineer\""));
    }

    #[test]
    fn unknown_activity_type_uses_default_icon() {
        let entry = Activity {
            activity_type: ActivityType::Other,
            message: Some("hm".to_string()),
            subject: None,
            timestamp: None,
        };
        assert!(format_activity(&entry).starts_with("📧"));
    }
}
