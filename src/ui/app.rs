use crate::api::ApiClient;
use crate::bulk::report::FAILURE_MARK;
use crate::bulk::{self, ImportReport};
use crate::error::Error;
use crate::models::status::SystemStatus;
use crate::relay;
use crate::ui::alerts::AlertSurface;
use crate::ui::dropdown::Dropdown;
use crate::ui::feed::ActivityFeed;
use crate::ui::forms::{CandidateDraft, CvDraft, JobDraft, ModalForm};
use crate::ui::poller::ActivityPoller;
use crate::ui::tabs::{Tab, TabStrip};
use crate::ui::views;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

/// Root application state: the active tab, the cached system status, the
/// poller handle, rendered panels, and the open form drafts. No view
/// state lives outside this struct.
pub struct App {
    api: ApiClient,
    poll_interval: Duration,
    export_dir: PathBuf,

    tabs: TabStrip,
    status: SystemStatus,
    poller: ActivityPoller,
    feed: Arc<Mutex<ActivityFeed>>,

    pub alerts: AlertSurface,
    pub transcript: relay::Transcript,

    dashboard_panel: Vec<String>,
    jobs_panel: Vec<String>,
    cvs_panel: Vec<String>,
    hm_panel: Vec<String>,
    project_panel: Vec<String>,
    candidate_panel: Vec<String>,

    pub hm_dropdown: Dropdown,
    pub project_dropdown: Dropdown,
    pub job_dropdown: Dropdown,

    pub job_form: ModalForm<JobDraft>,
    pub cv_form: ModalForm<CvDraft>,
    pub candidate_form: ModalForm<CandidateDraft>,

    pub bulk_hm_input: String,
    pub bulk_project_input: String,
    pub bulk_candidate_input: String,
    pub import_results: Vec<String>,
}

impl App {
    pub fn new(api: ApiClient, poll_interval: Duration, export_dir: PathBuf) -> Self {
        Self {
            api,
            poll_interval,
            export_dir,
            tabs: TabStrip::new(Tab::Dashboard),
            status: SystemStatus::default(),
            poller: ActivityPoller::new(),
            feed: Arc::new(Mutex::new(ActivityFeed::default())),
            alerts: AlertSurface::new(),
            transcript: relay::Transcript::default(),
            dashboard_panel: Vec::new(),
            jobs_panel: Vec::new(),
            cvs_panel: Vec::new(),
            hm_panel: Vec::new(),
            project_panel: Vec::new(),
            candidate_panel: Vec::new(),
            hm_dropdown: Dropdown::new("Select Hiring Manager"),
            project_dropdown: Dropdown::new("Select Project"),
            job_dropdown: Dropdown::new("Select Job"),
            job_form: ModalForm::default(),
            cv_form: ModalForm::default(),
            candidate_form: ModalForm::default(),
            bulk_hm_input: String::new(),
            bulk_project_input: String::new(),
            bulk_candidate_input: String::new(),
            import_results: Vec::new(),
        }
    }

    /// Startup sequence: status, dashboard data, configuration bundle,
    /// then the poller (the dashboard is the initial tab).
    pub async fn initialize(&mut self) {
        info!("Initializing app");
        self.load_system_status().await;
        self.load_dashboard_data().await;
        self.load_configuration().await;
        self.start_poller();
    }

    pub fn current_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn tab_strip(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    pub fn monitoring_label(&self) -> &'static str {
        if self.status.email_monitoring {
            "Monitoring Active"
        } else {
            "Not Monitoring"
        }
    }

    pub fn poller_running(&self) -> bool {
        self.poller.is_running()
    }

    pub fn feed(&self) -> ActivityFeed {
        self.feed.lock().map(|f| f.clone()).unwrap_or_default()
    }

    pub fn dashboard_panel(&self) -> &[String] {
        &self.dashboard_panel
    }

    pub fn jobs_panel(&self) -> &[String] {
        &self.jobs_panel
    }

    pub fn cvs_panel(&self) -> &[String] {
        &self.cvs_panel
    }

    pub fn hm_panel(&self) -> &[String] {
        &self.hm_panel
    }

    pub fn project_panel(&self) -> &[String] {
        &self.project_panel
    }

    pub fn candidate_panel(&self) -> &[String] {
        &self.candidate_panel
    }

    /// Swap the visible panel, keep the poller bound to the dashboard, and
    /// load the tab's data.
    pub async fn switch_tab(&mut self, tab: Tab) {
        info!(tab = %tab, "Switching tab");
        self.tabs.activate(tab);

        if tab == Tab::Dashboard {
            self.start_poller();
        } else {
            self.poller.stop();
        }

        match tab {
            Tab::Dashboard => self.load_dashboard_data().await,
            Tab::Jobs => self.load_jobs().await,
            Tab::Cvs => self.load_cvs().await,
            Tab::Configuration => self.load_configuration().await,
        }
    }

    fn start_poller(&mut self) {
        if self.tabs.active() == Tab::Dashboard {
            self.poller
                .start(self.api.clone(), self.feed.clone(), self.poll_interval);
        }
    }

    // Loaders. Failures keep the previous render (stale over blank) and
    // are logged, never alerted.

    pub async fn load_system_status(&mut self) {
        match self.api.system_status().await {
            Ok(status) => self.status = status,
            Err(e) => warn!(error = ?e, "Failed to load system status"),
        }
    }

    pub async fn load_dashboard_data(&mut self) {
        match self.api.analytics_summary().await {
            Ok(summary) => self.dashboard_panel = views::render_dashboard(&summary),
            Err(e) => warn!(error = ?e, "Failed to load dashboard data"),
        }
    }

    pub async fn load_jobs(&mut self) {
        match self.api.list_jobs().await {
            Ok(jobs) => self.jobs_panel = views::render_jobs_table(&jobs),
            Err(e) => warn!(error = ?e, "Failed to load jobs"),
        }
    }

    pub async fn load_cvs(&mut self) {
        match self.api.list_cvs().await {
            Ok(cvs) => self.cvs_panel = views::render_cvs_table(&cvs),
            Err(e) => warn!(error = ?e, "Failed to load CVs"),
        }
    }

    pub async fn load_configuration(&mut self) {
        self.load_hiring_managers().await;
        self.load_projects().await;
        self.load_candidates().await;
    }

    pub async fn load_hiring_managers(&mut self) {
        match self.api.list_hiring_managers().await {
            Ok(hms) => {
                self.hm_panel = views::render_hiring_managers(&hms);
                self.hm_dropdown
                    .repopulate(hms.into_iter().map(|hm| hm.name).collect());
            }
            Err(e) => warn!(error = ?e, "Failed to load hiring managers"),
        }
    }

    pub async fn load_projects(&mut self) {
        match self.api.list_projects().await {
            Ok(projects) => {
                self.project_panel = views::render_projects(&projects);
                self.project_dropdown
                    .repopulate(projects.into_iter().map(|p| p.name).collect());
            }
            Err(e) => warn!(error = ?e, "Failed to load projects"),
        }
    }

    pub async fn load_candidates(&mut self) {
        match self.api.list_candidates().await {
            Ok(candidates) => self.candidate_panel = views::render_candidates(&candidates),
            Err(e) => warn!(error = ?e, "Failed to load candidates"),
        }
    }

    /// One-off feed refresh outside the poll cycle.
    pub async fn refresh_activities(&mut self) {
        match self.api.email_activities().await {
            Ok(activities) => {
                let rendered = ActivityFeed::render(&activities);
                if let Ok(mut slot) = self.feed.lock() {
                    *slot = rendered;
                }
            }
            Err(e) => warn!(error = ?e, "Failed to refresh email activities"),
        }
    }

    // Monitoring controls.

    pub async fn start_monitoring(&mut self) {
        match self.api.start_monitoring().await {
            Ok(resp) if resp.success => {
                self.alerts.success("Email monitoring started");
                self.load_system_status().await;
            }
            Ok(_) => self.alerts.error("Failed to start monitoring"),
            Err(e) => {
                warn!(error = ?e, "Start monitoring request failed");
                self.alerts.error("Error starting monitoring");
            }
        }
    }

    pub async fn stop_monitoring(&mut self) {
        match self.api.stop_monitoring().await {
            Ok(resp) if resp.success => {
                self.alerts.success("Email monitoring stopped");
                self.load_system_status().await;
            }
            Ok(_) => self.alerts.error("Failed to stop monitoring"),
            Err(e) => {
                warn!(error = ?e, "Stop monitoring request failed");
                self.alerts.error("Error stopping monitoring");
            }
        }
    }

    // Form submissions. Success closes the modal, resets the draft, and
    // reloads the panel; failure keeps both the modal and the draft.

    pub fn open_job_form(&mut self) {
        self.job_form.open();
    }

    /// Opening the CV form also refreshes its job dropdown.
    pub async fn open_cv_form(&mut self) {
        match self.api.list_jobs().await {
            Ok(jobs) => self.job_dropdown.repopulate(
                jobs.iter()
                    .map(|job| format!("{} - {}", job.id, job.title))
                    .collect(),
            ),
            Err(e) => warn!(error = ?e, "Failed to load jobs for dropdown"),
        }
        self.cv_form.open();
    }

    pub fn open_candidate_form(&mut self) {
        self.candidate_form.open();
    }

    pub async fn submit_job(&mut self) {
        let payload = match self.job_form.draft.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.alerts.error(e.to_string());
                return;
            }
        };

        match self.api.create_job(&payload).await {
            Ok(resp) if resp.success => {
                let message = match resp.id_label() {
                    Some(id) => format!("Job added successfully (ID: {})", id),
                    None => "Job added successfully".to_string(),
                };
                self.alerts.success(message);
                self.job_form.close();
                self.job_form.reset();
                self.load_jobs().await;
            }
            Ok(resp) => {
                let message = resp.message.unwrap_or_else(|| "Failed to add job".to_string());
                self.alerts.error(message);
            }
            Err(e) => {
                warn!(error = ?e, "Create job request failed");
                self.alerts.error("Error adding job");
            }
        }
    }

    pub async fn submit_cv(&mut self) {
        let payload = match self.cv_form.draft.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.alerts.error(e.to_string());
                return;
            }
        };

        match self.api.create_cv(&payload).await {
            Ok(resp) if resp.success => {
                let message = match resp.id_label() {
                    Some(id) => format!("CV added successfully (ID: {})", id),
                    None => "CV added successfully".to_string(),
                };
                self.alerts.success(message);
                self.cv_form.close();
                self.cv_form.reset();
                self.load_cvs().await;
            }
            Ok(resp) => {
                let message = resp.message.unwrap_or_else(|| "Failed to add CV".to_string());
                self.alerts.error(message);
            }
            Err(e) => {
                warn!(error = ?e, "Create CV request failed");
                self.alerts.error("Error adding CV");
            }
        }
    }

    pub async fn submit_candidate(&mut self) {
        let payload = match self.candidate_form.draft.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.alerts.error(e.to_string());
                return;
            }
        };

        match self.api.create_candidate(&payload).await {
            Ok(resp) if resp.success => {
                self.alerts.success("Candidate added successfully");
                self.candidate_form.close();
                self.candidate_form.reset();
                self.load_candidates().await;
            }
            Ok(resp) => {
                let message = resp
                    .message
                    .unwrap_or_else(|| "Failed to add candidate".to_string());
                self.alerts.error(message);
            }
            Err(e) => {
                warn!(error = ?e, "Create candidate request failed");
                self.alerts.error("Error adding candidate");
            }
        }
    }

    // Configuration quick-adds.

    pub async fn add_hiring_manager(&mut self, name: &str, email: &str) {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() {
            self.alerts.error("Please enter both name and email");
            return;
        }

        let hm = crate::models::hiring_manager::HiringManager {
            name: name.to_string(),
            email: email.to_string(),
        };
        match self.api.create_hiring_manager(&hm).await {
            Ok(resp) if resp.success => {
                self.alerts.success("Hiring manager added successfully");
                self.load_hiring_managers().await;
            }
            Ok(_) => self.alerts.error("Failed to add hiring manager"),
            Err(e) => {
                warn!(error = ?e, "Create hiring manager request failed");
                self.alerts.error("Error adding hiring manager");
            }
        }
    }

    pub async fn add_project(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.alerts.error("Please enter a project name");
            return;
        }

        let project = crate::models::project::Project {
            name: name.to_string(),
        };
        match self.api.create_project(&project).await {
            Ok(resp) if resp.success => {
                self.alerts.success("Project added successfully");
                self.load_projects().await;
            }
            Ok(_) => self.alerts.error("Failed to add project"),
            Err(e) => {
                warn!(error = ?e, "Create project request failed");
                self.alerts.error("Error adding project");
            }
        }
    }

    pub async fn save_ai_key(&mut self, api_key: &str) {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            self.alerts.error("Please enter an API key");
            return;
        }

        match self.api.save_ai_key(api_key).await {
            Ok(resp) if resp.success => {
                self.alerts.success("AI API key saved successfully");
                self.load_system_status().await;
            }
            Ok(_) => self.alerts.error("Failed to save API key"),
            Err(e) => {
                warn!(error = ?e, "Save AI key request failed");
                self.alerts.error("Error saving API key");
            }
        }
    }

    // Bulk imports. Parse failures are reported per line and never abort
    // the batch; an entirely invalid input short-circuits before any
    // network call.

    pub async fn run_bulk_hiring_managers(&mut self) {
        if self.bulk_hm_input.trim().is_empty() {
            self.alerts.error("Please enter hiring managers data");
            return;
        }

        let input = self.bulk_hm_input.clone();
        let batch = bulk::parse_hiring_managers(&input);
        if batch.records.is_empty() {
            self.import_results = parse_error_lines(&batch.errors);
            self.alerts.error("No valid hiring managers found");
            return;
        }

        let report = bulk::import_hiring_managers(&self.api, &batch.records).await;
        self.finish_import(parse_error_lines(&batch.errors), &report);
        if report.should_clear_input() {
            self.bulk_hm_input.clear();
            self.load_hiring_managers().await;
        }
    }

    pub async fn run_bulk_projects(&mut self) {
        if self.bulk_project_input.trim().is_empty() {
            self.alerts.error("Please enter project names");
            return;
        }

        let input = self.bulk_project_input.clone();
        let names = bulk::parse_projects(&input);
        if names.is_empty() {
            self.alerts.error("No valid projects found");
            return;
        }

        match bulk::import_projects(&self.api, &names).await {
            Ok(report) => {
                self.finish_import(Vec::new(), &report);
                if report.should_clear_input() {
                    self.bulk_project_input.clear();
                    self.load_projects().await;
                }
            }
            Err(e) => {
                warn!(error = ?e, "Project import failed");
                self.alerts.error(import_failure_message(&e));
            }
        }
    }

    pub async fn run_bulk_candidates(&mut self) {
        if self.bulk_candidate_input.trim().is_empty() {
            self.alerts.error("Please enter candidate data");
            return;
        }

        let input = self.bulk_candidate_input.clone();
        let batch = bulk::parse_candidates(&input);
        if batch.records.is_empty() {
            self.import_results = parse_error_lines(&batch.errors);
            self.alerts.error("No valid candidates found");
            return;
        }

        match bulk::import_candidates(&self.api, &batch.records).await {
            Ok(report) => {
                self.finish_import(parse_error_lines(&batch.errors), &report);
                if report.should_clear_input() {
                    self.bulk_candidate_input.clear();
                    self.load_candidates().await;
                }
            }
            Err(e) => {
                warn!(error = ?e, "Candidate import failed");
                self.alerts.error(import_failure_message(&e));
            }
        }
    }

    fn finish_import(&mut self, mut output: Vec<String>, report: &ImportReport) {
        output.extend(report.lines.iter().cloned());
        output.push(report.summary());
        self.import_results = output;
    }

    // Assistant relay.

    pub async fn send_command(&mut self, text: &str) {
        let command = text.trim();
        if command.is_empty() {
            return;
        }

        self.transcript.push_user(command);

        match self.api.ai_command(command).await {
            Ok(result) => {
                let had_error = result.error.is_some();
                self.transcript.push_assistant(relay::assistant_reply(&result));
                if !had_error && relay::command_mutates(command) {
                    self.refresh_data().await;
                }
            }
            Err(e) => {
                warn!(error = ?e, "AI command request failed");
                self.transcript.push_assistant(relay::TRANSPORT_FAILURE_REPLY);
            }
        }
    }

    /// Reload the status and whatever the current tab shows, after a
    /// command that presumably mutated server state.
    pub async fn refresh_data(&mut self) {
        self.load_system_status().await;
        match self.tabs.active() {
            Tab::Dashboard => self.load_dashboard_data().await,
            Tab::Jobs => self.load_jobs().await,
            Tab::Cvs => self.load_cvs().await,
            Tab::Configuration => {}
        }
    }

    pub async fn export(&mut self, kind: &str) {
        match self.api.export(kind, &self.export_dir).await {
            Ok(path) => self
                .alerts
                .success(format!("Exported {} to {}", kind, path.display())),
            Err(e) => {
                warn!(error = ?e, "Export request failed");
                self.alerts.error(format!("Error exporting {}", kind));
            }
        }
    }

    // Inline edit actions are not implemented yet.
    // TODO: wire these to PATCH endpoints once the server exposes them.

    pub fn edit_job(&mut self, id: &str) {
        info!(id = %id, "Edit job requested");
        self.alerts.info("Edit functionality coming soon");
    }

    pub fn edit_cv(&mut self, id: &str) {
        info!(id = %id, "Edit CV requested");
        self.alerts.info("Edit functionality coming soon");
    }
}

fn parse_error_lines(errors: &[bulk::LineError]) -> Vec<String> {
    errors
        .iter()
        .map(|e| format!("{} Line {}: {}", FAILURE_MARK, e.line, e.reason))
        .collect()
}

fn import_failure_message(error: &Error) -> String {
    format!("Import failed: {}", error)
}
