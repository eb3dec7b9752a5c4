use crate::models::candidate::Candidate;
use crate::models::cv::Cv;
use crate::models::hiring_manager::HiringManager;
use crate::models::job::Job;
use crate::models::project::Project;
use crate::models::status::AnalyticsSummary;

/// Text renderings of the resource panels. Each loader fully replaces the
/// previous render; there is no incremental diffing.

pub fn render_dashboard(summary: &AnalyticsSummary) -> Vec<String> {
    let other_jobs = summary.total_jobs - summary.open_jobs - summary.filled_jobs;
    vec![
        format!("Total jobs:           {}", summary.total_jobs),
        format!("Open jobs:            {}", summary.open_jobs),
        format!("Total CVs:            {}", summary.total_cvs),
        format!("Interviews scheduled: {}", summary.interviews_scheduled),
        format!(
            "Job status: {} open / {} filled / {} other",
            summary.open_jobs, summary.filled_jobs, other_jobs
        ),
    ]
}

pub fn render_jobs_table(jobs: &[Job]) -> Vec<String> {
    let mut rows = vec![format!(
        "{:<10} {:<28} {:<18} {:<16} {:<18} {:<10}",
        "ID", "Title", "Project", "Location", "Hiring Manager", "Status"
    )];
    for job in jobs {
        let status = if job.status.is_empty() { "Open" } else { &job.status };
        rows.push(format!(
            "{:<10} {:<28} {:<18} {:<16} {:<18} {:<10}",
            job.id, job.title, job.project, job.location, job.hiring_manager, status
        ));
    }
    rows
}

pub fn render_cvs_table(cvs: &[Cv]) -> Vec<String> {
    let mut rows = vec![format!(
        "{:<10} {:<22} {:<22} {:<16} {:<16} {:<12}",
        "ID", "Candidate", "Position", "Project", "Status", "Interview"
    )];
    for cv in cvs {
        rows.push(format!(
            "{:<10} {:<22} {:<22} {:<16} {:<16} {:<12}",
            cv.id, cv.candidate_name, cv.position, cv.project, cv.status, cv.interview_date
        ));
    }
    rows
}

pub fn render_hiring_managers(hms: &[HiringManager]) -> Vec<String> {
    hms.iter()
        .map(|hm| format!("{} ({})", hm.name, hm.email))
        .collect()
}

pub fn render_projects(projects: &[Project]) -> Vec<String> {
    projects.iter().map(|p| p.name.clone()).collect()
}

pub fn render_candidates(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| {
            let details: Vec<&str> = [&c.email, &c.mobile, &c.current_location]
                .into_iter()
                .filter(|v| !v.is_empty())
                .map(String::as_str)
                .collect();
            if details.is_empty() {
                c.name.clone()
            } else {
                format!("{}  {}", c.name, details.join(" • "))
            }
        })
        .collect()
}
