//! Role-based access decisions.
//!
//! Every role-gated choice in the board goes through this module: protected views, who may
//! post, apply or administer, and which navigation entries a session sees. Administrators pass
//! every role requirement.

use serde::Serialize;

use super::domain::{Role, User};
use super::session::SessionState;

/// Where a denied request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    SignIn,
    Home,
}

impl RedirectTarget {
    pub const fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/login",
            Self::Home => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "redirect", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    Deny(RedirectTarget),
}

/// Decide whether the current session may see content that optionally requires `required`.
pub fn authorize(session: &SessionState, required: Option<Role>) -> AccessDecision {
    let Some(user) = session.user() else {
        return AccessDecision::Deny(RedirectTarget::SignIn);
    };

    match required {
        Some(role) if user.role != role && user.role != Role::Admin => {
            AccessDecision::Deny(RedirectTarget::Home)
        }
        _ => AccessDecision::Allow,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedView {
    Profile,
    AddJob,
    Admin,
}

impl ProtectedView {
    pub const fn ordered() -> [Self; 3] {
        [Self::Profile, Self::AddJob, Self::Admin]
    }

    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Profile => None,
            Self::AddJob => Some(Role::Employer),
            Self::Admin => Some(Role::Admin),
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Profile => "/profile",
            Self::AddJob => "/add-job",
            Self::Admin => "/admin",
        }
    }

    /// Accepts the path segment with or without the leading slash.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim_start_matches('/');
        Self::ordered()
            .into_iter()
            .find(|view| view.path().trim_start_matches('/') == slug)
    }
}

pub fn authorize_view(session: &SessionState, view: ProtectedView) -> AccessDecision {
    authorize(session, view.required_role())
}

/// Why an apply attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyDenial {
    SignInRequired,
    JobSeekersOnly,
}

/// Only signed-in job seekers apply; administrators do not bypass this one.
pub fn can_apply(session: &SessionState) -> Result<&User, ApplyDenial> {
    match session.user() {
        None => Err(ApplyDenial::SignInRequired),
        Some(user) if user.role == Role::JobSeeker => Ok(user),
        Some(_) => Err(ApplyDenial::JobSeekersOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const HOME: NavItem = NavItem {
    label: "Home",
    path: "/",
};
const JOBS: NavItem = NavItem {
    label: "Jobs",
    path: "/jobs",
};
const POST_JOB: NavItem = NavItem {
    label: "Post a Job",
    path: "/add-job",
};
const ADMIN: NavItem = NavItem {
    label: "Admin",
    path: "/admin",
};
const PROFILE: NavItem = NavItem {
    label: "Profile",
    path: "/profile",
};
const SIGN_IN: NavItem = NavItem {
    label: "Sign In",
    path: "/login",
};

/// Header entries for the session. Shortcuts follow the exact role, not the admin bypass.
pub fn navigation(session: &SessionState) -> Vec<NavItem> {
    let mut items = vec![HOME, JOBS];
    match session.user().map(|user| user.role) {
        None => items.push(SIGN_IN),
        Some(role) => {
            match role {
                Role::Employer => items.push(POST_JOB),
                Role::Admin => items.push(ADMIN),
                Role::JobSeeker => {}
            }
            items.push(PROFILE);
        }
    }
    items
}
