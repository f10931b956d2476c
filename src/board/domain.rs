use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for job listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for demo accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A published listing. Listings are read-only once they are in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub posted_date: NaiveDate,
    pub deadline: NaiveDate,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    pub const fn ordered() -> [Self; 3] {
        [Self::JobSeeker, Self::Employer, Self::Admin]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Employer => "Employer",
            Self::Admin => "Admin",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Lead-in used in the profile activity feed, e.g. "Applied for Backend Engineer".
    pub const fn activity_phrase(self) -> &'static str {
        match self {
            Self::Pending => "Applied for",
            Self::Reviewed => "Application reviewed for",
            Self::Accepted => "Accepted for",
            Self::Rejected => "Rejected from",
        }
    }
}

/// Historical application record from the demo dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: JobId,
    pub user_id: UserId,
    pub status: ApplicationStatus,
    pub date: NaiveDate,
    pub resume: String,
    pub cover_letter: String,
}

/// Listing criteria. `None` and the empty string both mean "do not constrain this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
}

pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_LOCATIONS: &str = "All Locations";
pub const ALL_TYPES: &str = "All Types";

impl JobFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_text().is_none()
            && self.category_value().is_none()
            && self.location_value().is_none()
            && self.type_value().is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops empty values and the "All ..." facet placeholders.
    pub fn normalized(self) -> Self {
        Self {
            search: self.search.filter(|value| !value.is_empty()),
            category: facet_value(self.category, ALL_CATEGORIES),
            location: facet_value(self.location, ALL_LOCATIONS),
            job_type: facet_value(self.job_type, ALL_TYPES),
        }
    }

    /// Active exact-match facets in display order (category, location, type).
    pub fn active_facets(&self) -> Vec<&str> {
        [
            self.category_value(),
            self.location_value(),
            self.type_value(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn search_text(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn category_value(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn location_value(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn type_value(&self) -> Option<&str> {
        non_empty(&self.job_type)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn facet_value(value: Option<String>, placeholder: &str) -> Option<String> {
    value.filter(|value| !value.is_empty() && value != placeholder)
}
