use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use super::access::{self, AccessDecision, NavItem, ProtectedView};
use super::actions::{
    draft_id, ActionError, ApplicationForm, ApplicationReceipt, DeletionReceipt, JobDraft,
    UserDeletionReceipt,
};
use super::catalog::{FilterFacets, JobCatalog, FEATURED_JOBS};
use super::domain::{Job, JobFilter, JobId, Role, User, UserId};
use super::filter::{filter_jobs, search_jobs_admin, search_users_admin};
use super::notify::{Notice, Notifier};
use super::profile::{profile_summary, ProfileSummary};
use super::session::{LoginError, SessionPersistence, SessionState, SessionStore};

/// What the header needs to render for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub navigation: Vec<NavItem>,
}

/// Facade over the catalog, the single session and the notifier.
pub struct JobBoardService<P, N> {
    catalog: Arc<JobCatalog>,
    session: Mutex<SessionStore<P, N>>,
    notifier: Arc<N>,
    published_drafts: AtomicU64,
}

impl<P, N> JobBoardService<P, N>
where
    P: SessionPersistence + 'static,
    N: Notifier + 'static,
{
    pub fn new(catalog: Arc<JobCatalog>, persistence: Arc<P>, notifier: Arc<N>) -> Self {
        let session = SessionStore::restore(persistence, notifier.clone());
        Self {
            catalog,
            session: Mutex::new(session),
            notifier,
            published_drafts: AtomicU64::new(0),
        }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    fn session(&self) -> MutexGuard<'_, SessionStore<P, N>> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the session; the lock is released before the caller decides anything.
    pub fn session_state(&self) -> SessionState {
        self.session().state().clone()
    }

    pub fn session_view(&self) -> SessionView {
        let state = self.session_state();
        SessionView {
            authenticated: state.is_authenticated(),
            navigation: access::navigation(&state),
            user: state.user().cloned(),
        }
    }

    pub fn list_jobs(&self, criteria: &JobFilter) -> Vec<Job> {
        filter_jobs(self.catalog.jobs(), criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn featured_jobs(&self) -> Vec<Job> {
        self.catalog.featured(FEATURED_JOBS).to_vec()
    }

    pub fn facets(&self) -> FilterFacets {
        self.catalog.facets()
    }

    pub fn job(&self, id: &JobId) -> Result<Job, ActionError> {
        self.catalog
            .job(id)
            .cloned()
            .ok_or_else(|| ActionError::JobNotFound(id.clone()))
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User, LoginError> {
        self.session().login(&self.catalog, email, password)
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    pub fn authorize_view(&self, view: ProtectedView) -> AccessDecision {
        access::authorize_view(&self.session_state(), view)
    }

    pub fn profile(&self) -> Result<ProfileSummary, ActionError> {
        let user = self.require(None)?;
        Ok(profile_summary(&self.catalog, &user))
    }

    pub fn post_job(&self, draft: JobDraft) -> Result<Job, ActionError> {
        self.post_job_on(draft, Local::now().date_naive())
    }

    pub fn post_job_on(&self, draft: JobDraft, today: NaiveDate) -> Result<Job, ActionError> {
        let outcome = self
            .require(Some(Role::Employer))
            .and_then(|user| {
                draft.ensure_complete()?;
                let sequence = self.published_drafts.fetch_add(1, Ordering::Relaxed) + 1;
                draft.publish(draft_id(sequence), today).map(|job| (user, job))
            });

        match outcome {
            Ok((user, job)) => {
                info!(job_id = %job.id, poster = %user.email, "job posted");
                self.notifier.notify(
                    Notice::success("Job posted successfully!")
                        .with_detail("Your job listing has been created and is now live."),
                );
                Ok(job)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    pub fn apply(
        &self,
        job_id: &JobId,
        form: ApplicationForm,
    ) -> Result<ApplicationReceipt, ActionError> {
        self.apply_on(job_id, form, Local::now().date_naive())
    }

    pub fn apply_on(
        &self,
        job_id: &JobId,
        form: ApplicationForm,
        today: NaiveDate,
    ) -> Result<ApplicationReceipt, ActionError> {
        let state = self.session_state();
        let outcome = self.job(job_id).and_then(|job| {
            let applicant = access::can_apply(&state)?;
            Ok(ApplicationReceipt {
                job_id: job.id,
                job_title: job.title,
                applicant: applicant.id.clone(),
                submitted_on: today,
                has_cover_letter: !form.cover_letter.trim().is_empty(),
            })
        });

        match outcome {
            Ok(receipt) => {
                info!(job_id = %receipt.job_id, applicant = %receipt.applicant.0, "application submitted");
                self.notifier.notify(
                    Notice::success("Application submitted successfully!")
                        .with_detail("The employer will review your application soon."),
                );
                Ok(receipt)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    pub fn delete_job(&self, job_id: &JobId) -> Result<DeletionReceipt, ActionError> {
        let outcome = self
            .require(Some(Role::Admin))
            .and_then(|_| self.job(job_id));

        match outcome {
            Ok(job) => {
                info!(job_id = %job.id, "job deleted");
                self.notifier.notify(Notice::success("Job deleted successfully"));
                Ok(DeletionReceipt {
                    job_id: job.id,
                    job_title: job.title,
                })
            }
            Err(err) => Err(self.report(err)),
        }
    }

    pub fn delete_user(&self, user_id: &UserId) -> Result<UserDeletionReceipt, ActionError> {
        let outcome = self.require(Some(Role::Admin)).and_then(|_| {
            self.catalog
                .user(user_id)
                .cloned()
                .ok_or_else(|| ActionError::UserNotFound(user_id.clone()))
        });

        match outcome {
            Ok(user) => {
                info!(user_id = %user.id, email = %user.email, "user deleted");
                self.notifier.notify(Notice::success("User deleted successfully"));
                Ok(UserDeletionReceipt {
                    user_id: user.id,
                    name: user.name,
                    email: user.email,
                })
            }
            Err(err) => Err(self.report(err)),
        }
    }

    pub fn admin_jobs(&self, query: &str) -> Result<Vec<Job>, ActionError> {
        self.require(Some(Role::Admin))?;
        Ok(search_jobs_admin(self.catalog.jobs(), query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn admin_users(&self, query: &str) -> Result<Vec<User>, ActionError> {
        self.require(Some(Role::Admin))?;
        Ok(search_users_admin(self.catalog.users(), query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.notifier.drain()
    }

    fn require(&self, role: Option<Role>) -> Result<User, ActionError> {
        let state = self.session_state();
        match access::authorize(&state, role) {
            AccessDecision::Allow => state.user().cloned().ok_or(ActionError::SignInRequired),
            AccessDecision::Deny(target) => Err(target.into()),
        }
    }

    fn report(&self, err: ActionError) -> ActionError {
        tracing::warn!(error = %err, "board action refused");
        self.notifier.notify(Notice::error(err.to_string()));
        err
    }
}
