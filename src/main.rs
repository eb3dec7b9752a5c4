use recruitment_tracker_client::api::ApiClient;
use recruitment_tracker_client::config::{get_config, init_config};
use recruitment_tracker_client::relay::Role;
use recruitment_tracker_client::ui::app::App;
use recruitment_tracker_client::ui::tabs::Tab;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let api = ApiClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    );
    let mut app = App::new(
        api,
        Duration::from_millis(config.poll_interval_ms),
        config.export_dir.clone().into(),
    );

    info!("Connecting to {}", config.api_base_url);
    app.initialize().await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line.as_str(), ""),
        };

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "tab" => match rest.parse::<Tab>() {
                Ok(tab) => {
                    app.switch_tab(tab).await;
                    print_panel(&app);
                }
                Err(e) => println!("{}", e),
            },
            "show" => print_panel(&app),
            "status" => print_status(&app),
            "refresh" => {
                app.refresh_activities().await;
                print_panel(&app);
            }
            "start-monitoring" => app.start_monitoring().await,
            "stop-monitoring" => app.stop_monitoring().await,
            "add-job" => {
                let parts = split_fields(rest);
                app.open_job_form();
                app.job_form.draft.title = field(&parts, 0);
                app.job_form.draft.project = field(&parts, 1);
                app.job_form.draft.location = field(&parts, 2);
                app.job_form.draft.hiring_manager = field(&parts, 3);
                app.submit_job().await;
            }
            "add-cv" => {
                let parts = split_fields(rest);
                app.open_cv_form().await;
                app.cv_form.draft.job_id = field(&parts, 0);
                app.cv_form.draft.candidate_name = field(&parts, 1);
                app.cv_form.draft.position = field(&parts, 2);
                app.cv_form.draft.project = field(&parts, 3);
                app.cv_form.draft.interview_date = field(&parts, 4);
                app.submit_cv().await;
            }
            "add-candidate" => {
                let parts = split_fields(rest);
                app.open_candidate_form();
                app.candidate_form.draft.name = field(&parts, 0);
                app.candidate_form.draft.email = field(&parts, 1);
                app.candidate_form.draft.mobile = field(&parts, 2);
                app.candidate_form.draft.current_location = field(&parts, 3);
                app.candidate_form.draft.nationality = field(&parts, 4);
                app.candidate_form.draft.notice_period = field(&parts, 5);
                app.submit_candidate().await;
            }
            "add-hm" => {
                let parts = split_fields(rest);
                app.add_hiring_manager(&field(&parts, 0), &field(&parts, 1))
                    .await;
            }
            "add-project" => app.add_project(rest).await,
            "bulk-hm" => {
                app.bulk_hm_input = read_block(&mut lines).await?;
                app.run_bulk_hiring_managers().await;
                print_import_results(&app);
            }
            "bulk-projects" => {
                app.bulk_project_input = read_block(&mut lines).await?;
                app.run_bulk_projects().await;
                print_import_results(&app);
            }
            "bulk-candidates" => {
                app.bulk_candidate_input = read_block(&mut lines).await?;
                app.run_bulk_candidates().await;
                print_import_results(&app);
            }
            "ai" => {
                app.send_command(rest).await;
                print_transcript_tail(&app);
            }
            "set-key" => app.save_ai_key(rest).await,
            "export" => app.export(rest).await,
            "edit-job" => app.edit_job(rest),
            "edit-cv" => app.edit_cv(rest),
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

fn split_fields(rest: &str) -> Vec<&str> {
    rest.split(',').map(str::trim).collect()
}

fn field(parts: &[&str], index: usize) -> String {
    parts.get(index).map(|s| s.to_string()).unwrap_or_default()
}

/// Read textarea-style input: one record per line, terminated by a single
/// dot.
async fn read_block(lines: &mut Lines<BufReader<Stdin>>) -> std::io::Result<String> {
    println!("Enter one record per line, finish with a single '.'");
    let mut block = String::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "." {
            break;
        }
        block.push_str(&line);
        block.push('\n');
    }
    Ok(block)
}

fn print_help() {
    println!("Commands:");
    println!("  tab <dashboard|jobs|cvs|configuration>");
    println!("  show | status | refresh");
    println!("  start-monitoring | stop-monitoring");
    println!("  add-job Title,Project,Location,HiringManager");
    println!("  add-cv JobID,Candidate,Position,Project,InterviewDate");
    println!("  add-candidate Name,Email,Mobile,Location,Nationality,Notice");
    println!("  add-hm Name,Email | add-project Name");
    println!("  bulk-hm | bulk-projects | bulk-candidates");
    println!("  ai <free-text command> | set-key <api key>");
    println!("  export <jobs|cvs|candidates>");
    println!("  edit-job <id> | edit-cv <id>");
    println!("  help | quit");
}

fn print_status(app: &App) {
    let status = app.status();
    println!("{}", app.monitoring_label());
    println!(
        "AI assistant: {}",
        if status.ai_configured {
            "configured"
        } else {
            "not configured"
        }
    );
    println!(
        "Activity poller: {}",
        if app.poller_running() { "running" } else { "stopped" }
    );
}

fn print_panel(app: &App) {
    println!("== {} ==", app.current_tab());
    match app.current_tab() {
        Tab::Dashboard => {
            print_status(app);
            for line in app.dashboard_panel() {
                println!("{}", line);
            }
            let feed = app.feed();
            println!("-- {} --", feed.count_label);
            for line in &feed.lines {
                println!("{}", line);
            }
        }
        Tab::Jobs => {
            for line in app.jobs_panel() {
                println!("{}", line);
            }
        }
        Tab::Cvs => {
            for line in app.cvs_panel() {
                println!("{}", line);
            }
        }
        Tab::Configuration => {
            println!("Hiring managers:");
            for line in app.hm_panel() {
                println!("  {}", line);
            }
            println!("Projects:");
            for line in app.project_panel() {
                println!("  {}", line);
            }
            println!("Candidates:");
            for line in app.candidate_panel() {
                println!("  {}", line);
            }
        }
    }
}

fn print_import_results(app: &App) {
    for line in &app.import_results {
        println!("{}", line);
    }
}

fn print_transcript_tail(app: &App) {
    let turns = app.transcript.turns();
    let tail = turns.len().saturating_sub(2);
    for turn in &turns[tail..] {
        let who = match turn.role {
            Role::User => "You",
            Role::Assistant => "AI Assistant",
        };
        println!("{}: {}", who, turn.text);
    }
}
