use crate::infra::{load_catalog, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use job_board::board::{
    filter_jobs, AccessDecision, ApplicationForm, InMemoryNotifier, Job, JobBoardService,
    JobDraft, JobFilter, MemorySessionPersistence, Notice, NoticeLevel, ProtectedView,
};
use job_board::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_DEMO_EMAIL: &str = "seeker@example.com";

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Case-insensitive text matched against title, company and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact category, e.g. Technology
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Exact location, e.g. Remote
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact employment type, e.g. Full-time
    #[arg(long = "type")]
    pub(crate) job_type: Option<String>,
    /// CSV export to list instead of the bundled demo listings
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
}

impl JobsArgs {
    pub(crate) fn criteria(&self) -> JobFilter {
        JobFilter {
            search: self.search.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            job_type: self.job_type.clone(),
        }
        .normalized()
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Demo account to sign in with
    #[arg(long, default_value = DEFAULT_DEMO_EMAIL)]
    pub(crate) email: String,
    /// Date used for postings and applications (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// CSV export to load instead of the bundled demo listings
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
}

pub(crate) fn run_jobs_listing(args: JobsArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.jobs_csv.as_deref())?;
    let criteria = args.criteria();
    let matches = filter_jobs(catalog.jobs(), &criteria);

    let facets = criteria.active_facets();
    if facets.is_empty() {
        println!("All listings ({} of {})", matches.len(), catalog.jobs().len());
    } else {
        println!(
            "Listings matching {} ({} of {})",
            facets.join(", "),
            matches.len(),
            catalog.jobs().len()
        );
    }

    if matches.is_empty() {
        println!("No jobs found. Try adjusting your search criteria.");
    }
    for job in matches {
        println!("{}", job_line(job));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        email,
        today,
        jobs_csv,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let catalog = Arc::new(load_catalog(jobs_csv.as_deref())?);
    let service = JobBoardService::new(
        catalog,
        Arc::new(MemorySessionPersistence::default()),
        Arc::new(InMemoryNotifier::default()),
    );

    println!("Job board demo");
    println!("\nFeatured jobs");
    for job in service.featured_jobs() {
        println!("{}", job_line(&job));
    }

    println!("\nGuarded views while signed out");
    print_view_decisions(&service);

    println!("\nSigning in as {email}");
    let user = match service.login(&email, "demo") {
        Ok(user) => user,
        Err(err) => {
            println!("- sign-in refused: {err}");
            print_notices(service.drain_notices());
            return Ok(());
        }
    };
    print_notices(service.drain_notices());
    println!("- {} ({})", user.name, user.role.label());

    let view = service.session_view();
    let menu: Vec<&str> = view.navigation.iter().map(|item| item.label).collect();
    println!("- navigation: {}", menu.join(" | "));

    println!("\nGuarded views while signed in");
    print_view_decisions(&service);

    if let Ok(profile) = service.profile() {
        println!("\nProfile");
        println!(
            "- {}: {} | {}",
            profile.primary_stat.label, profile.primary_stat.value, profile.secondary_stat_label
        );
        for activity in &profile.applications {
            println!("  - {} [{}]", activity.headline, activity.status);
        }
    }

    println!("\nBoard actions");
    if let Some(job) = service.featured_jobs().into_iter().next() {
        let form = ApplicationForm {
            cover_letter: "I would love to join the team.".to_string(),
            resume: None,
        };
        match service.apply_on(&job.id, form, today) {
            Ok(receipt) => println!("- applied to {} on {}", receipt.job_title, receipt.submitted_on),
            Err(err) => println!("- apply to {} refused: {err}", job.title),
        }
    }
    match service.post_job_on(sample_draft(), today) {
        Ok(job) => println!("- posted {} (open until {})", job.title, job.deadline),
        Err(err) => println!("- posting refused: {err}"),
    }
    match service.admin_users("") {
        Ok(users) => println!("- admin sees {} accounts", users.len()),
        Err(err) => println!("- user administration refused: {err}"),
    }
    print_notices(service.drain_notices());

    println!("\nSigning out");
    service.logout();
    print_notices(service.drain_notices());
    Ok(())
}

fn print_view_decisions(service: &JobBoardService<MemorySessionPersistence, InMemoryNotifier>) {
    for view in [ProtectedView::Profile, ProtectedView::AddJob, ProtectedView::Admin] {
        let outcome = match service.authorize_view(view) {
            AccessDecision::Allow => "allowed".to_string(),
            AccessDecision::Deny(target) => format!("redirect to {}", target.path()),
        };
        println!("- {}: {outcome}", view.path());
    }
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        let marker = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        match notice.detail {
            Some(detail) => println!("  [{marker}] {} {detail}", notice.message),
            None => println!("  [{marker}] {}", notice.message),
        }
    }
}

fn sample_draft() -> JobDraft {
    JobDraft {
        title: "Platform Engineer".to_string(),
        company: "TechCorp Inc.".to_string(),
        location: "Remote".to_string(),
        description: "Own the deployment pipeline and internal tooling.".to_string(),
        salary: "$125,000 - $145,000".to_string(),
        category: "Technology".to_string(),
        job_type: "Full-time".to_string(),
        deadline: None,
        skills: "Rust, Kubernetes, CI/CD".to_string(),
    }
}

pub(crate) fn job_line(job: &Job) -> String {
    format!(
        "- [{}] {} | {} | {} | {} | {}",
        job.id, job.title, job.company, job.location, job.job_type, job.salary
    )
}
