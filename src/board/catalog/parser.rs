use crate::board::domain::{Job, JobId};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CatalogError;

/// Parse a listings export. Rows are numbered from 1, excluding the header.
pub(crate) fn parse_jobs<R: Read>(reader: R) -> Result<Vec<Job>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut jobs = Vec::new();

    for (index, record) in csv_reader.deserialize::<JobRow>().enumerate() {
        let row_number = index + 1;
        let row = record?;
        jobs.push(row.into_job(row_number)?);
    }

    Ok(jobs)
}

#[derive(Debug, Deserialize)]
struct JobRow {
    id: String,
    title: String,
    company: String,
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    salary: String,
    category: String,
    #[serde(rename = "type")]
    job_type: String,
    posted_date: String,
    deadline: String,
    #[serde(default)]
    skills: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    logo: Option<String>,
}

impl JobRow {
    fn into_job(self, row: usize) -> Result<Job, CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::MissingField { row, field: "id" });
        }
        if self.title.is_empty() {
            return Err(CatalogError::MissingField { row, field: "title" });
        }

        let posted_date = parse_date(row, "posted_date", &self.posted_date)?;
        let deadline = parse_date(row, "deadline", &self.deadline)?;

        Ok(Job {
            id: JobId(self.id),
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            salary: self.salary,
            category: self.category,
            job_type: self.job_type,
            posted_date,
            deadline,
            skills: split_skills(&self.skills),
            logo: self.logo,
        })
    }
}

/// Skill cells may use `;` or `,` as separators.
pub(crate) fn split_skills(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(row: usize, field: &'static str, value: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CatalogError::InvalidDate {
        row,
        field,
        value: value.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
