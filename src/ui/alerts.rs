use std::collections::VecDeque;

const RECENT_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
    Info,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Error => "error",
            AlertLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Transient user-facing messages. Each alert is echoed to the console
/// immediately; a bounded buffer of recent alerts stands in for an
/// auto-dismiss timer.
#[derive(Debug, Default)]
pub struct AlertSurface {
    recent: VecDeque<Alert>,
}

impl AlertSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: AlertLevel, message: impl Into<String>) {
        let message = message.into();
        println!("[{}] {}", level.label(), message);
        self.recent.push_back(Alert { level, message });
        while self.recent.len() > RECENT_CAPACITY {
            self.recent.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(AlertLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(AlertLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(AlertLevel::Info, message);
    }

    pub fn recent(&self) -> impl Iterator<Item = &Alert> {
        self.recent.iter()
    }

    pub fn last(&self) -> Option<&Alert> {
        self.recent.back()
    }
}
