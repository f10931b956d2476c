use super::common::*;
use crate::board::access::{AccessDecision, ProtectedView, RedirectTarget};
use crate::board::actions::{ActionError, ApplicationForm};
use crate::board::domain::{JobFilter, JobId, Role, UserId};
use crate::board::notify::{NoticeLevel, Notifier, NOTICE_CAPACITY};
use crate::board::session::SessionState;

#[test]
fn list_jobs_applies_criteria_without_touching_catalog() {
    let (service, _, _) = build_service();
    let before = service.catalog().jobs().to_vec();

    let remote_tech = service.list_jobs(
        &JobFilter::default()
            .with_category("Technology")
            .with_location("Remote"),
    );
    assert_eq!(remote_tech.len(), 1);
    assert_eq!(remote_tech[0].title, "Backend Engineer");

    assert_eq!(service.list_jobs(&JobFilter::default()), before);
    assert_eq!(service.catalog().jobs(), before.as_slice());
}

#[test]
fn view_decisions_follow_the_session() {
    let (service, _, _) = build_service();
    assert_eq!(
        service.authorize_view(ProtectedView::AddJob),
        AccessDecision::Deny(RedirectTarget::SignIn)
    );

    service.login("employer@example.com", "").expect("employer exists");
    assert_eq!(service.authorize_view(ProtectedView::AddJob), AccessDecision::Allow);
    assert_eq!(
        service.authorize_view(ProtectedView::Admin),
        AccessDecision::Deny(RedirectTarget::Home)
    );
    assert_eq!(service.authorize_view(ProtectedView::Profile), AccessDecision::Allow);
}

#[test]
fn employer_posts_job_as_preview_only() {
    let (service, notifier) = signed_in_service("employer@example.com");
    let count = service.catalog().jobs().len();

    let job = service.post_job_on(draft(), today()).expect("employer may post");

    assert_eq!(job.posted_date, today());
    assert_eq!(job.skills, vec!["Rust", "Terraform"]);
    assert_eq!(service.catalog().jobs().len(), count);
    let notices = notifier.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Job posted successfully!");
}

#[test]
fn draft_ids_count_only_published_listings() {
    let (service, _) = signed_in_service("employer@example.com");
    let first = service.post_job_on(draft(), today()).expect("employer may post");

    let mut incomplete = draft();
    incomplete.title.clear();
    assert!(service.post_job_on(incomplete, today()).is_err());

    let second = service.post_job_on(draft(), today()).expect("employer may post");
    assert_eq!(first.id, JobId("draft-0001".to_string()));
    assert_eq!(second.id, JobId("draft-0002".to_string()));

    let (other, _) = signed_in_service("employer@example.com");
    let fresh = other.post_job_on(draft(), today()).expect("employer may post");
    assert_eq!(fresh.id, JobId("draft-0001".to_string()));
}

#[test]
fn admin_may_post_through_role_bypass() {
    let (service, _) = signed_in_service("admin@example.com");
    assert!(service.post_job_on(draft(), today()).is_ok());
}

#[test]
fn job_seeker_cannot_post() {
    let (service, notifier) = signed_in_service("seeker@example.com");
    let err = service
        .post_job_on(draft(), today())
        .expect_err("job seekers are sent home");
    assert_eq!(err, ActionError::WrongRole);
    assert_eq!(notifier.drain()[0].level, NoticeLevel::Error);
}

#[test]
fn incomplete_draft_is_rejected_after_authorization() {
    let (service, notifier) = signed_in_service("employer@example.com");
    let mut incomplete = draft();
    incomplete.description = " ".to_string();

    let err = service
        .post_job_on(incomplete, today())
        .expect_err("description required");
    assert_eq!(err, ActionError::MissingRequiredFields);
    assert_eq!(notifier.drain()[0].message, "Please fill in all required fields");
}

#[test]
fn anonymous_apply_asks_for_sign_in() {
    let (service, _, notifier) = build_service();
    let err = service
        .apply_on(&JobId("1".to_string()), ApplicationForm::default(), today())
        .expect_err("anonymous cannot apply");
    assert_eq!(err, ActionError::SignInToApply);
    assert_eq!(err.redirect(), Some(RedirectTarget::SignIn));
    assert_eq!(
        notifier.drain()[0].message,
        "Please sign in to apply for this job"
    );
}

#[test]
fn only_job_seekers_apply_even_admins_are_refused() {
    for email in ["employer@example.com", "admin@example.com"] {
        let (service, _) = signed_in_service(email);
        let err = service
            .apply_on(&JobId("1".to_string()), ApplicationForm::default(), today())
            .expect_err("only job seekers apply");
        assert_eq!(err, ActionError::JobSeekersOnly);
    }
}

#[test]
fn job_seeker_application_is_acknowledged() {
    let (service, notifier) = signed_in_service("seeker@example.com");
    let form = ApplicationForm {
        cover_letter: "I ship reliable services.".to_string(),
        resume: None,
    };

    let receipt = service
        .apply_on(&JobId("2".to_string()), form, today())
        .expect("job seeker may apply");

    assert_eq!(receipt.job_title, "Backend Engineer");
    assert!(receipt.has_cover_letter);
    assert_eq!(receipt.submitted_on, today());
    assert_eq!(notifier.drain()[0].message, "Application submitted successfully!");
}

#[test]
fn applying_to_missing_job_is_not_found() {
    let (service, _) = signed_in_service("seeker@example.com");
    let missing = JobId("404".to_string());
    assert_eq!(
        service.apply_on(&missing, ApplicationForm::default(), today()),
        Err(ActionError::JobNotFound(missing))
    );
}

#[test]
fn delete_requires_admin_and_leaves_catalog_intact() {
    let (service, _) = signed_in_service("employer@example.com");
    assert_eq!(
        service.delete_job(&JobId("1".to_string())),
        Err(ActionError::WrongRole)
    );

    let (admin, notifier) = signed_in_service("admin@example.com");
    let receipt = admin
        .delete_job(&JobId("1".to_string()))
        .expect("admin deletes");
    assert_eq!(receipt.job_id, JobId("1".to_string()));
    assert!(admin.catalog().job(&JobId("1".to_string())).is_some());
    assert_eq!(notifier.drain()[0].message, "Job deleted successfully");
}

#[test]
fn delete_user_requires_admin_and_known_account() {
    let (employer, notifier) = signed_in_service("employer@example.com");
    assert_eq!(
        employer.delete_user(&UserId("4".to_string())),
        Err(ActionError::WrongRole)
    );
    assert_eq!(notifier.drain()[0].level, NoticeLevel::Error);

    let (admin, notifier) = signed_in_service("admin@example.com");
    let receipt = admin
        .delete_user(&UserId("4".to_string()))
        .expect("admin deletes");
    assert_eq!(receipt.email, "maria.garcia@example.com");
    assert!(admin.catalog().user(&UserId("4".to_string())).is_some());
    assert_eq!(notifier.drain()[0].message, "User deleted successfully");

    assert_eq!(
        admin.delete_user(&UserId("99".to_string())),
        Err(ActionError::UserNotFound(UserId("99".to_string())))
    );
    assert_eq!(notifier.drain()[0].message, "User 99 not found");
}

#[test]
fn repeated_failed_logins_keep_notice_queue_bounded() {
    let (service, _, notifier) = build_service();
    for _ in 0..10_000 {
        assert!(service.login("ghost@example.com", "").is_err());
    }
    assert_eq!(notifier.notices().len(), NOTICE_CAPACITY);
    assert_eq!(service.drain_notices().len(), NOTICE_CAPACITY);
    assert!(service.drain_notices().is_empty());
}

#[test]
fn admin_listings_search_jobs_and_users() {
    let (service, _) = signed_in_service("admin@example.com");
    let jobs = service.admin_jobs("techcorp").expect("admin lists jobs");
    assert_eq!(jobs.len(), 2);

    let users = service.admin_users("EMPLOYER").expect("admin lists users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, Role::Employer);

    let (anonymous, _, _) = build_service();
    assert_eq!(anonymous.admin_users(""), Err(ActionError::SignInRequired));
}

#[test]
fn logout_returns_to_anonymous_and_clears_storage() {
    let (service, persistence, notifier) = build_service();
    service.login("seeker@example.com", "pw").expect("seeker exists");
    assert!(persistence.payload().is_some());

    service.logout();

    assert_eq!(service.session_state(), SessionState::Anonymous);
    assert!(persistence.payload().is_none());
    let messages: Vec<String> = notifier
        .drain()
        .into_iter()
        .map(|notice| notice.message)
        .collect();
    assert_eq!(messages, vec!["Login successful", "Logged out successfully"]);
}

#[test]
fn restart_restores_persisted_session() {
    let (service, persistence, _) = build_service();
    service.login("admin@example.com", "").expect("admin exists");

    let restarted = crate::board::service::JobBoardService::new(
        std::sync::Arc::new(crate::board::catalog::JobCatalog::demo()),
        std::sync::Arc::new(persistence),
        std::sync::Arc::new(crate::board::notify::InMemoryNotifier::default()),
    );
    assert_eq!(
        restarted.session_state().user().map(|user| user.role),
        Some(Role::Admin)
    );
}
