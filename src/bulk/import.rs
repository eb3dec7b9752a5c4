use crate::api::ApiClient;
use crate::bulk::report::ImportReport;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::hiring_manager::HiringManager;
use crate::models::response::{CandidateImportResult, ProjectImportResult};
use tracing::warn;

/// Hiring managers go up one request per record, serially, so the report
/// order matches the input order. No retries on individual failures.
pub async fn import_hiring_managers(api: &ApiClient, records: &[HiringManager]) -> ImportReport {
    let mut report = ImportReport::default();

    for hm in records {
        match api.create_hiring_manager(hm).await {
            Ok(resp) if resp.success => report.record_success(&hm.name),
            Ok(_) => report.record_failure(&hm.name, None),
            Err(e) => {
                warn!(name = %hm.name, error = ?e, "Hiring manager import request failed");
                report.record_transport_error(&hm.name);
            }
        }
    }

    report
}

/// Projects are submitted as one batched array of names; the server
/// reports per-name outcomes.
pub async fn import_projects(api: &ApiClient, names: &[String]) -> Result<ImportReport> {
    let resp = api.create_projects_bulk(names).await?;
    if !resp.success {
        return Err(Error::Api("Import failed".to_string()));
    }
    Ok(project_report(&resp.results))
}

/// Candidates are submitted as one batched request to the dedicated bulk
/// endpoint; failures carry a server-side reason.
pub async fn import_candidates(api: &ApiClient, records: &[Candidate]) -> Result<ImportReport> {
    let resp = api.create_candidates_bulk(records).await?;
    if !resp.success {
        return Err(Error::Api("Import failed".to_string()));
    }
    Ok(candidate_report(&resp.results))
}

/// A project landed iff the server assigned it an id.
pub fn project_report(results: &[ProjectImportResult]) -> ImportReport {
    let mut report = ImportReport::default();
    for result in results {
        if result.id.is_some() {
            report.record_success(&result.name);
        } else {
            report.record_failure(&result.name, None);
        }
    }
    report
}

pub fn candidate_report(results: &[CandidateImportResult]) -> ImportReport {
    let mut report = ImportReport::default();
    for result in results {
        if result.success {
            report.record_success(&result.name);
        } else {
            report.record_failure(&result.name, result.error.as_deref());
        }
    }
    report
}
