//! Job listings, demo sign-in and role-gated board actions.

pub mod access;
pub mod actions;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod notify;
pub mod profile;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use access::{
    authorize, authorize_view, can_apply, navigation, AccessDecision, ApplyDenial, NavItem,
    ProtectedView, RedirectTarget,
};
pub use actions::{
    draft_id, ActionError, ApplicationForm, ApplicationReceipt, DeletionReceipt, JobDraft,
    UserDeletionReceipt,
};
pub use catalog::{CatalogError, FilterFacets, JobCatalog};
pub use domain::{ApplicationStatus, Job, JobApplication, JobFilter, JobId, Role, User, UserId};
pub use filter::{filter_jobs, search_jobs_admin, search_users_admin};
pub use notify::{InMemoryNotifier, Notice, NoticeLevel, Notifier, NOTICE_CAPACITY};
pub use profile::{profile_summary, ProfileSummary};
pub use router::board_router;
pub use service::{JobBoardService, SessionView};
pub use session::{
    FileSessionPersistence, LoginError, MemorySessionPersistence, PersistenceError,
    SessionPersistence, SessionState, SessionStore,
};
