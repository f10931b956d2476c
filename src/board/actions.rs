//! Posting, applying and deleting.
//!
//! These are simulated: inputs are validated and authorized, the caller gets back what would
//! have been stored, and the catalog itself never changes.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::access::{ApplyDenial, RedirectTarget};
use super::catalog::split_skills;
use super::domain::{Job, JobId, UserId};

/// Listings without a deadline stay open this long.
pub const DEFAULT_POSTING_WINDOW_DAYS: i64 = 30;

/// Id given to the `sequence`-th listing published in a run, e.g. `draft-0001`.
pub fn draft_id(sequence: u64) -> JobId {
    JobId(format!("draft-{sequence:04}"))
}

/// Form input for a new listing. Skills arrive as one comma separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub skills: String,
}

impl JobDraft {
    /// Title, company and description must be non-blank.
    pub fn ensure_complete(&self) -> Result<(), ActionError> {
        let required = [&self.title, &self.company, &self.description];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ActionError::MissingRequiredFields);
        }
        Ok(())
    }

    /// The listing as it would be published on `today` under `id`.
    pub fn publish(self, id: JobId, today: NaiveDate) -> Result<Job, ActionError> {
        self.ensure_complete()?;

        let deadline = self
            .deadline
            .unwrap_or(today + Duration::days(DEFAULT_POSTING_WINDOW_DAYS));

        Ok(Job {
            id,
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location,
            description: self.description.trim().to_string(),
            salary: self.salary,
            category: self.category,
            job_type: self.job_type,
            posted_date: today,
            deadline,
            skills: split_skills(&self.skills),
            logo: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub resume: Option<String>,
}

/// Acknowledgement returned after a (simulated) application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReceipt {
    pub job_id: JobId,
    pub job_title: String,
    pub applicant: UserId,
    pub submitted_on: NaiveDate,
    pub has_cover_letter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReceipt {
    pub job_id: JobId,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDeletionReceipt {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Please sign in to continue")]
    SignInRequired,
    #[error("Your account cannot perform this action")]
    WrongRole,
    #[error("Please sign in to apply for this job")]
    SignInToApply,
    #[error("Only job seekers can apply for jobs")]
    JobSeekersOnly,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Job {0} not found")]
    JobNotFound(JobId),
    #[error("User {0} not found")]
    UserNotFound(UserId),
}

impl ActionError {
    /// Where the presentation layer should send the user, if anywhere.
    pub fn redirect(&self) -> Option<RedirectTarget> {
        match self {
            Self::SignInRequired | Self::SignInToApply => Some(RedirectTarget::SignIn),
            Self::WrongRole => Some(RedirectTarget::Home),
            Self::JobSeekersOnly
            | Self::MissingRequiredFields
            | Self::JobNotFound(_)
            | Self::UserNotFound(_) => None,
        }
    }
}

impl From<RedirectTarget> for ActionError {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::SignIn => Self::SignInRequired,
            RedirectTarget::Home => Self::WrongRole,
        }
    }
}

impl From<ApplyDenial> for ActionError {
    fn from(denial: ApplyDenial) -> Self {
        match denial {
            ApplyDenial::SignInRequired => Self::SignInToApply,
            ApplyDenial::JobSeekersOnly => Self::JobSeekersOnly,
        }
    }
}
