//! Read-only data provider for listings, demo accounts and historical applications.

mod demo;
mod parser;

use crate::board::domain::{
    Job, JobApplication, JobId, User, UserId, ALL_CATEGORIES, ALL_LOCATIONS, ALL_TYPES,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

pub(crate) use parser::split_skills;

pub const FEATURED_JOBS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: `{field}` value '{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Selectable values for the three exact-match criteria, each led by its "All ..." placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterFacets {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
    users: Vec<User>,
    applications: Vec<JobApplication>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>, users: Vec<User>, applications: Vec<JobApplication>) -> Self {
        Self {
            jobs,
            users,
            applications,
        }
    }

    /// Built-in listings and the three demo accounts.
    pub fn demo() -> Self {
        Self::new(demo::jobs(), demo::users(), demo::applications())
    }

    /// Listings from a CSV export; accounts and applications stay the demo ones.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let jobs = parser::parse_jobs(reader)?;
        tracing::info!(jobs = jobs.len(), "loaded listings from CSV export");
        Ok(Self::new(jobs, demo::users(), demo::applications()))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    pub fn job(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| &job.id == id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email.to_lowercase() == email.to_lowercase())
    }

    pub fn applications_for(&self, user_id: &UserId) -> Vec<&JobApplication> {
        self.applications
            .iter()
            .filter(|application| &application.user_id == user_id)
            .collect()
    }

    /// The first `count` listings, as shown on the landing page.
    pub fn featured(&self, count: usize) -> &[Job] {
        &self.jobs[..count.min(self.jobs.len())]
    }

    pub fn facets(&self) -> FilterFacets {
        FilterFacets {
            categories: facet_options(ALL_CATEGORIES, self.jobs.iter().map(|job| &job.category)),
            locations: facet_options(ALL_LOCATIONS, self.jobs.iter().map(|job| &job.location)),
            types: facet_options(ALL_TYPES, self.jobs.iter().map(|job| &job.job_type)),
        }
    }
}

fn facet_options<'a, I>(placeholder: &str, values: I) -> Vec<String>
where
    I: Iterator<Item = &'a String>,
{
    let mut options = vec![placeholder.to_string()];
    for value in values {
        if !value.is_empty() && !options.contains(value) {
            options.push(value.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::domain::Role;

    #[test]
    fn demo_catalog_has_one_account_per_role() {
        let catalog = JobCatalog::demo();
        for role in Role::ordered() {
            assert!(
                catalog.users().iter().any(|user| user.role == role),
                "missing {role:?} account"
            );
        }
    }

    #[test]
    fn email_lookup_ignores_case() {
        let catalog = JobCatalog::demo();
        let user = catalog
            .user_by_email("Employer@Example.com")
            .expect("employer exists");
        assert_eq!(user.role, Role::Employer);
        assert!(catalog.user_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn facets_keep_first_seen_order_without_duplicates() {
        let catalog = JobCatalog::demo();
        let facets = catalog.facets();
        assert_eq!(facets.categories[0], ALL_CATEGORIES);
        assert_eq!(facets.locations[0], ALL_LOCATIONS);
        assert_eq!(facets.types[0], ALL_TYPES);
        assert_eq!(facets.categories[1], catalog.jobs()[0].category);

        let unique: std::collections::HashSet<_> = facets.locations.iter().collect();
        assert_eq!(unique.len(), facets.locations.len());
    }

    #[test]
    fn featured_is_capped_by_catalog_size() {
        let catalog = JobCatalog::demo();
        assert_eq!(catalog.featured(FEATURED_JOBS).len(), FEATURED_JOBS);
        assert_eq!(catalog.featured(FEATURED_JOBS)[0], catalog.jobs()[0]);

        let empty = JobCatalog::new(Vec::new(), Vec::new(), Vec::new());
        assert!(empty.featured(FEATURED_JOBS).is_empty());
    }

    #[test]
    fn demo_dates_are_real_calendar_dates() {
        let catalog = JobCatalog::demo();
        let unset = chrono::NaiveDate::default();
        for job in catalog.jobs() {
            assert_ne!(job.posted_date, unset, "listing {} has no posted date", job.id);
            assert!(job.posted_date < job.deadline, "listing {} closes before it opens", job.id);
        }
        for application in catalog.applications() {
            assert_ne!(application.date, unset, "application {} has no date", application.id);
        }
    }

    #[test]
    fn user_lookup_by_id() {
        let catalog = JobCatalog::demo();
        let admin = catalog
            .user(&UserId("3".to_string()))
            .expect("admin exists");
        assert_eq!(admin.email, "admin@example.com");
        assert!(catalog.user(&UserId("99".to_string())).is_none());
    }

    #[test]
    fn job_lookup_by_id() {
        let catalog = JobCatalog::demo();
        let first = &catalog.jobs()[0];
        assert_eq!(catalog.job(&first.id), Some(first));
        assert!(catalog.job(&JobId("missing".to_string())).is_none());
    }
}
