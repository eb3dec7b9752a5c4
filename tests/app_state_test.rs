use recruitment_tracker_client::api::ApiClient;
use recruitment_tracker_client::relay::TRANSPORT_FAILURE_REPLY;
use recruitment_tracker_client::ui::app::App;
use recruitment_tracker_client::ui::dropdown::Dropdown;
use recruitment_tracker_client::ui::feed::ActivityFeed;
use recruitment_tracker_client::ui::poller::ActivityPoller;
use recruitment_tracker_client::ui::tabs::Tab;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use url::Url;

// Nothing listens on this port; every request fails fast with a transport
// error, which exercises the stale-over-blank and keep-input policies.
fn unroutable_api() -> ApiClient {
    let base = Url::parse("http://127.0.0.1:9/").unwrap();
    ApiClient::new(base, Duration::from_millis(250))
}

fn app() -> App {
    App::new(
        unroutable_api(),
        Duration::from_millis(50),
        std::env::temp_dir(),
    )
}

#[test]
fn tab_names_parse_only_from_the_fixed_set() {
    for tab in Tab::ALL {
        assert_ok!(tab.as_str().parse::<Tab>());
    }
    assert_err!("payroll".parse::<Tab>());
    assert_err!("Dashboard".parse::<Tab>());
}

#[tokio::test]
async fn exactly_one_nav_and_panel_active_after_each_switch() {
    let mut app = app();
    for tab in Tab::ALL {
        app.switch_tab(tab).await;

        let entries = app.tab_strip().entries();
        assert_eq!(entries.iter().filter(|e| e.nav_active).count(), 1);
        assert_eq!(entries.iter().filter(|e| e.panel_active).count(), 1);
        assert_eq!(app.current_tab(), tab);
        assert_eq!(app.poller_running(), tab == Tab::Dashboard);
    }
}

#[tokio::test]
async fn poller_start_and_stop_are_idempotent() {
    let mut poller = ActivityPoller::new();
    let feed = Arc::new(Mutex::new(ActivityFeed::default()));

    assert!(!poller.is_running());
    poller.stop();
    assert!(!poller.is_running());

    poller.start(unroutable_api(), feed.clone(), Duration::from_millis(50));
    assert!(poller.is_running());
    poller.start(unroutable_api(), feed.clone(), Duration::from_millis(50));
    assert!(poller.is_running());

    poller.stop();
    assert!(!poller.is_running());
    poller.stop();
    assert!(!poller.is_running());

    // A fresh start after a stop spawns a new task.
    poller.start(unroutable_api(), feed, Duration::from_millis(50));
    assert!(poller.is_running());
}

#[tokio::test]
async fn re_entering_the_dashboard_restarts_the_poller() {
    let mut app = app();
    app.switch_tab(Tab::Dashboard).await;
    assert!(app.poller_running());
    app.switch_tab(Tab::Jobs).await;
    assert!(!app.poller_running());
    app.switch_tab(Tab::Dashboard).await;
    assert!(app.poller_running());
}

#[tokio::test]
async fn failed_loads_keep_the_previous_render() {
    let mut app = app();
    app.load_jobs().await;
    app.load_dashboard_data().await;
    app.refresh_activities().await;

    assert!(app.jobs_panel().is_empty());
    assert!(app.dashboard_panel().is_empty());
    assert!(app.feed().lines.is_empty());
}

#[tokio::test]
async fn bulk_import_with_zero_successes_preserves_the_input() {
    let mut app = app();
    app.bulk_hm_input = "Alice, alice@x.com\nBob, bob@x.com\n".to_string();
    app.run_bulk_hiring_managers().await;

    assert_eq!(app.bulk_hm_input, "Alice, alice@x.com\nBob, bob@x.com\n");
    // Two transport-error lines plus the summary.
    assert_eq!(app.import_results.len(), 3);
    assert!(app.import_results[0].contains("Error: Alice"));
    assert!(app.import_results[1].contains("Error: Bob"));
    assert_eq!(
        app.import_results[2],
        "Import complete: 0 added, 2 failed"
    );
}

#[tokio::test]
async fn blank_bulk_input_short_circuits_before_any_submission() {
    let mut app = app();
    app.bulk_candidate_input = "\n   \n".to_string();
    app.run_bulk_candidates().await;

    assert!(app.import_results.is_empty());
    assert_eq!(app.bulk_candidate_input, "\n   \n");
    assert_eq!(
        app.alerts.last().map(|a| a.message.as_str()),
        Some("Please enter candidate data")
    );
}

#[tokio::test]
async fn only_malformed_bulk_lines_report_errors_without_submitting() {
    let mut app = app();
    app.bulk_candidate_input = ",orphan@x.com\n".to_string();
    app.run_bulk_candidates().await;

    assert_eq!(app.import_results.len(), 1);
    assert!(app.import_results[0].contains("Line 1: Name is required"));
    assert_eq!(
        app.alerts.last().map(|a| a.message.as_str()),
        Some("No valid candidates found")
    );
}

#[tokio::test]
async fn transport_failure_on_command_appends_the_fixed_reply() {
    let mut app = app();
    app.send_command("  add a job for Berlin  ").await;

    let turns = app.transcript.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].text, "add a job for Berlin");
    assert_eq!(turns[1].text, TRANSPORT_FAILURE_REPLY);
}

#[tokio::test]
async fn empty_command_is_a_no_op() {
    let mut app = app();
    app.send_command("   ").await;
    assert!(app.transcript.turns().is_empty());
}

#[tokio::test]
async fn failed_submit_keeps_the_modal_open_and_the_draft_intact() {
    let mut app = app();
    app.open_job_form();
    app.job_form.draft.title = "Senior Rust Engineer".to_string();
    app.submit_job().await;

    assert!(app.job_form.is_open());
    assert_eq!(app.job_form.draft.title, "Senior Rust Engineer");
    assert_eq!(
        app.alerts.last().map(|a| a.message.as_str()),
        Some("Error adding job")
    );
}

#[tokio::test]
async fn invalid_draft_is_rejected_client_side() {
    let mut app = app();
    app.open_candidate_form();
    app.submit_candidate().await;

    assert!(app.candidate_form.is_open());
    assert_eq!(
        app.alerts.last().map(|a| a.message.as_str()),
        Some("Invalid input: Candidate name is required")
    );
}

#[test]
fn dropdown_repopulation_preserves_a_still_valid_selection() {
    let mut dropdown = Dropdown::new("Select Project");
    dropdown.repopulate(vec!["Alpha".to_string(), "Beta".to_string()]);
    assert!(dropdown.select("Beta"));

    dropdown.repopulate(vec!["Beta".to_string(), "Gamma".to_string()]);
    assert_eq!(dropdown.selected(), Some("Beta"));

    dropdown.repopulate(vec!["Delta".to_string()]);
    assert_eq!(dropdown.selected(), None);
}

#[test]
fn dropdown_rejects_values_outside_the_option_set() {
    let mut dropdown = Dropdown::new("Select Hiring Manager");
    dropdown.repopulate(vec!["Dana".to_string()]);
    assert!(!dropdown.select("Nobody"));
    assert_eq!(dropdown.selected(), None);
}
