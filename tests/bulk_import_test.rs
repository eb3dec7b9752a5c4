use recruitment_tracker_client::bulk::import::{candidate_report, project_report};
use recruitment_tracker_client::bulk::{parse_candidates, parse_hiring_managers, parse_projects};
use recruitment_tracker_client::models::response::{CandidateBulkResponse, ProjectBulkResponse};
use serde_json::json;

#[test]
fn hiring_manager_parse_keeps_valid_lines_and_flags_bad_emails() {
    let batch = parse_hiring_managers("Alice, alice@x.com\nBob,notanemail\n\n");

    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].name, "Alice");
    assert_eq!(batch.records[0].email, "alice@x.com");

    assert_eq!(batch.errors.len(), 1);
    assert_eq!(batch.errors[0].line, 2);
    assert_eq!(batch.errors[0].reason, "Invalid email format");
}

#[test]
fn hiring_manager_parse_requires_both_fields() {
    let batch = parse_hiring_managers("OnlyAName\n,orphan@x.com\n");
    assert!(batch.records.is_empty());
    assert_eq!(batch.errors.len(), 2);
    assert_eq!(batch.errors[0].line, 1);
    assert_eq!(batch.errors[1].line, 2);
}

#[test]
fn project_parse_drops_blank_lines() {
    let projects = parse_projects("Alpha\n \nBeta\n");
    assert_eq!(projects, vec!["Alpha".to_string(), "Beta".to_string()]);
}

#[test]
fn candidate_parse_fills_missing_trailing_fields_with_empty_strings() {
    let batch = parse_candidates("Jane,jane@x.com,555-1,Berlin");

    assert_eq!(batch.records.len(), 1);
    let jane = &batch.records[0];
    assert_eq!(jane.name, "Jane");
    assert_eq!(jane.email, "jane@x.com");
    assert_eq!(jane.mobile, "555-1");
    assert_eq!(jane.current_location, "Berlin");
    assert_eq!(jane.nationality, "");
    assert_eq!(jane.notice_period, "");
    assert!(batch.errors.is_empty());
}

#[test]
fn candidate_parse_rejects_lines_without_a_name() {
    let batch = parse_candidates(",orphan@x.com\nJane\n");
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].name, "Jane");
    assert_eq!(batch.errors.len(), 1);
    assert_eq!(batch.errors[0].reason, "Name is required");
}

#[test]
fn blank_input_yields_no_records_and_no_errors() {
    let batch = parse_hiring_managers("\n  \n\t\n");
    assert!(batch.records.is_empty());
    assert!(batch.errors.is_empty());
    assert!(parse_projects("\n  \n").is_empty());
}

#[test]
fn project_report_counts_ids_as_successes() {
    let resp: ProjectBulkResponse = serde_json::from_value(json!({
        "success": true,
        "results": [
            { "id": 7, "name": "Alpha" },
            { "id": null, "name": "Beta" }
        ]
    }))
    .unwrap();

    let report = project_report(&resp.results);
    assert_eq!(report.success_count, 1);
    assert_eq!(report.failure_count, 1);
    assert!(report.lines[0].contains("Added: Alpha"));
    assert!(report.lines[1].contains("Failed: Beta"));
    assert_eq!(report.summary(), "Import complete: 1 added, 1 failed");
    assert!(report.should_clear_input());
}

#[test]
fn candidate_report_carries_server_failure_reasons() {
    let resp: CandidateBulkResponse = serde_json::from_value(json!({
        "success": true,
        "results": [
            { "success": true, "name": "Jane" },
            { "success": false, "name": "Joe", "error": "duplicate email" }
        ]
    }))
    .unwrap();

    let report = candidate_report(&resp.results);
    assert_eq!(report.success_count, 1);
    assert_eq!(report.failure_count, 1);
    assert!(report.lines[1].contains("Joe - duplicate email"));
}

#[test]
fn all_failed_report_does_not_clear_input() {
    let resp: CandidateBulkResponse = serde_json::from_value(json!({
        "success": true,
        "results": [
            { "success": false, "name": "Joe", "error": "duplicate email" }
        ]
    }))
    .unwrap();

    let report = candidate_report(&resp.results);
    assert!(!report.should_clear_input());
}
