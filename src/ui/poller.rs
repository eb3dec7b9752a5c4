use crate::api::ApiClient;
use crate::ui::feed::ActivityFeed;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Recurring activity fetch, alive only while the dashboard is visible.
/// At most one task exists at a time; the nullable handle is the guard.
#[derive(Default)]
pub struct ActivityPoller {
    handle: Option<JoinHandle<()>>,
}

impl ActivityPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }

    /// Spawn the poll loop: one immediate fetch, then one per interval.
    /// No-op when already running. Fetch failures keep the previous feed
    /// rendered; they are logged, never surfaced.
    pub fn start(&mut self, api: ApiClient, feed: Arc<Mutex<ActivityFeed>>, interval: Duration) {
        if self.handle.is_some() {
            return;
        }

        self.handle = Some(tokio::spawn(async move {
            loop {
                match api.email_activities().await {
                    Ok(activities) => {
                        let rendered = ActivityFeed::render(&activities);
                        if let Ok(mut slot) = feed.lock() {
                            *slot = rendered;
                        }
                    }
                    Err(e) => warn!(error = ?e, "Failed to refresh email activities"),
                }
                tokio::time::sleep(interval).await;
            }
        }));
    }

    /// Cancel the loop and clear the handle so a later start can spawn a
    /// fresh task. No-op when already stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ActivityPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
