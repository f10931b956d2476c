//! Listing search used by the public jobs page and the admin panel.
//!
//! Every function here borrows its input and returns references into it, so the catalog is
//! never touched while a result set is computed.

use super::domain::{Job, JobFilter, User};

impl JobFilter {
    /// True when `job` satisfies every active criterion.
    ///
    /// Free text matches title, company or description case-insensitively; category, location
    /// and type must match exactly.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(search) = self.search_text() {
            let needle = search.to_lowercase();
            let hit = contains_folded(&job.title, &needle)
                || contains_folded(&job.company, &needle)
                || contains_folded(&job.description, &needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category_value() {
            if job.category != category {
                return false;
            }
        }

        if let Some(location) = self.location_value() {
            if job.location != location {
                return false;
            }
        }

        if let Some(job_type) = self.type_value() {
            if job.job_type != job_type {
                return false;
            }
        }

        true
    }
}

/// Narrow `jobs` to those matching `criteria`, keeping their original order.
///
/// Accepts anything yielding `&Job` so results can be filtered again.
pub fn filter_jobs<'a, I>(jobs: I, criteria: &JobFilter) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    let matched: Vec<&'a Job> = jobs
        .into_iter()
        .filter(|job| criteria.matches(job))
        .collect();
    tracing::debug!(matched = matched.len(), ?criteria, "filtered job listings");
    matched
}

/// Admin quick search: title or company, case-insensitive. An empty query keeps everything.
pub fn search_jobs_admin<'a>(jobs: &'a [Job], query: &str) -> Vec<&'a Job> {
    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| contains_folded(&job.title, &needle) || contains_folded(&job.company, &needle))
        .collect()
}

/// Admin quick search over accounts: name or email, case-insensitive.
pub fn search_users_admin<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| contains_folded(&user.name, &needle) || contains_folded(&user.email, &needle))
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
