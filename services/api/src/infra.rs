use chrono::NaiveDate;
use job_board::board::{
    FileSessionPersistence, JobCatalog, MemorySessionPersistence, PersistenceError,
    SessionPersistence, User,
};
use job_board::config::CatalogConfig;
use job_board::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session storage picked at startup: a JSON file when one is configured, memory otherwise.
#[derive(Debug, Clone)]
pub(crate) enum SessionBackend {
    Memory(MemorySessionPersistence),
    File(FileSessionPersistence),
}

impl SessionBackend {
    pub(crate) fn from_config(config: &CatalogConfig) -> Self {
        match &config.session_file {
            Some(path) => {
                info!(path = %path.display(), "persisting session to file");
                Self::File(FileSessionPersistence::new(path.clone()))
            }
            None => Self::Memory(MemorySessionPersistence::default()),
        }
    }
}

impl SessionPersistence for SessionBackend {
    fn load(&self) -> Result<Option<User>, PersistenceError> {
        match self {
            Self::Memory(store) => store.load(),
            Self::File(store) => store.load(),
        }
    }

    fn save(&self, user: &User) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.save(user),
            Self::File(store) => store.save(user),
        }
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.clear(),
            Self::File(store) => store.clear(),
        }
    }
}

/// The CSV export when one is given, otherwise the bundled demo listings.
pub(crate) fn load_catalog(jobs_csv: Option<&Path>) -> Result<JobCatalog, AppError> {
    match jobs_csv {
        Some(path) => {
            info!(path = %path.display(), "loading listings from CSV");
            Ok(JobCatalog::from_csv_path(path)?)
        }
        None => Ok(JobCatalog::demo()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
