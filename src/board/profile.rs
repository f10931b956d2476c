use serde::Serialize;

use super::catalog::JobCatalog;
use super::domain::{JobId, Role, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub role_label: &'static str,
    pub tabs: Vec<&'static str>,
    pub primary_stat: ProfileStat,
    pub secondary_stat_label: &'static str,
    pub applications: Vec<ApplicationActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStat {
    pub label: &'static str,
    pub value: usize,
}

/// One of the user's past applications joined with the listing it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationActivity {
    pub job_id: JobId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub status: &'static str,
    pub headline: String,
}

pub fn profile_summary(catalog: &JobCatalog, user: &User) -> ProfileSummary {
    let applications: Vec<ApplicationActivity> = match user.role {
        Role::JobSeeker => catalog
            .applications_for(&user.id)
            .into_iter()
            .map(|application| {
                let job_title = catalog
                    .job(&application.job_id)
                    .map(|job| job.title.clone());
                let headline = format!(
                    "{} {}",
                    application.status.activity_phrase(),
                    job_title.as_deref().unwrap_or("a removed listing")
                );
                ApplicationActivity {
                    job_id: application.job_id.clone(),
                    job_title,
                    status: application.status.label(),
                    headline,
                }
            })
            .collect(),
        Role::Employer | Role::Admin => Vec::new(),
    };

    let (middle_tab, primary_label, secondary_stat_label) = match user.role {
        Role::JobSeeker => (Some("applications"), "Applications", "Resume Views"),
        Role::Employer => (Some("posted_jobs"), "Posted Jobs", "Total Applicants"),
        Role::Admin => (None, "Managed Jobs", "Active Users"),
    };

    let tabs = std::iter::once("overview")
        .chain(middle_tab)
        .chain(std::iter::once("settings"))
        .collect();

    ProfileSummary {
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
        role_label: user.role.label(),
        tabs,
        primary_stat: ProfileStat {
            label: primary_label,
            value: applications.len(),
        },
        secondary_stat_label,
        applications,
    }
}
