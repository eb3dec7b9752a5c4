use crate::models::candidate::Candidate;
use crate::models::hiring_manager::HiringManager;

/// Parse failure for a single input line. Line numbers are 1-based to
/// match what the user sees in the textarea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ParsedBatch<T> {
    pub records: Vec<T>,
    pub errors: Vec<LineError>,
}

impl<T> Default for ParsedBatch<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// One record per line, `Name, Email`. Both fields required; the email
/// check is presence of `@` only, real validation is the server's job.
pub fn parse_hiring_managers(input: &str) -> ParsedBatch<HiringManager> {
    let mut batch = ParsedBatch::default();

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            if parts[1].contains('@') {
                batch.records.push(HiringManager {
                    name: parts[0].to_string(),
                    email: parts[1].to_string(),
                });
            } else {
                batch.errors.push(LineError {
                    line: index + 1,
                    reason: "Invalid email format".to_string(),
                });
            }
        } else {
            batch.errors.push(LineError {
                line: index + 1,
                reason: "Invalid format (expected: Name, Email)".to_string(),
            });
        }
    }

    batch
}

/// One bare project name per line; blanks dropped, nothing else to get
/// wrong.
pub fn parse_projects(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Name[,email[,mobile[,location[,nationality[,notice]]]]]` with only the
/// name required; missing trailing fields come back empty.
pub fn parse_candidates(input: &str) -> ParsedBatch<Candidate> {
    let mut batch = ParsedBatch::default();

    for (index, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if !parts[0].is_empty() {
            batch.records.push(Candidate {
                name: parts[0].to_string(),
                email: field(&parts, 1),
                mobile: field(&parts, 2),
                current_location: field(&parts, 3),
                nationality: field(&parts, 4),
                notice_period: field(&parts, 5),
            });
        } else {
            batch.errors.push(LineError {
                line: index + 1,
                reason: "Name is required".to_string(),
            });
        }
    }

    batch
}

fn field(parts: &[&str], index: usize) -> String {
    parts.get(index).map(|s| s.to_string()).unwrap_or_default()
}
