pub const SUCCESS_MARK: &str = "✓";
pub const FAILURE_MARK: &str = "✗";

/// Per-record outcome lines plus the running counts, in submission order.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub lines: Vec<String>,
    pub success_count: usize,
    pub failure_count: usize,
}

impl ImportReport {
    pub fn record_success(&mut self, name: &str) {
        self.lines.push(format!("{} Added: {}", SUCCESS_MARK, name));
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, name: &str, reason: Option<&str>) {
        let line = match reason {
            Some(reason) => format!("{} Failed: {} - {}", FAILURE_MARK, name, reason),
            None => format!("{} Failed: {} (possibly duplicate)", FAILURE_MARK, name),
        };
        self.lines.push(line);
        self.failure_count += 1;
    }

    pub fn record_transport_error(&mut self, name: &str) {
        self.lines.push(format!("{} Error: {}", FAILURE_MARK, name));
        self.failure_count += 1;
    }

    pub fn summary(&self) -> String {
        format!(
            "Import complete: {} added, {} failed",
            self.success_count, self.failure_count
        )
    }

    /// The input buffer is only cleared when something actually landed, so
    /// a fully failed batch can be corrected and resubmitted.
    pub fn should_clear_input(&self) -> bool {
        self.success_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_successes_and_failures() {
        let mut report = ImportReport::default();
        report.record_success("Alice");
        report.record_failure("Bob", None);
        report.record_failure("Carol", Some("duplicate email"));
        assert_eq!(report.summary(), "Import complete: 1 added, 2 failed");
        assert!(report.lines[0].starts_with(SUCCESS_MARK));
        assert!(report.lines[2].contains("duplicate email"));
    }

    #[test]
    fn input_cleared_only_after_a_success() {
        let mut report = ImportReport::default();
        report.record_failure("Bob", None);
        assert!(!report.should_clear_input());
        report.record_success("Alice");
        assert!(report.should_clear_input());
    }
}
