use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Undrained notices kept by [`InMemoryNotifier`] before the oldest are dropped.
pub const NOTICE_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing outcome of a session transition or board action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            detail: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Outbound hook for notices so the presentation layer decides how to surface them.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
    /// Hand over the notices not yet shown, oldest first.
    fn drain(&self) -> Vec<Notice>;
}

/// Keeps the most recent notices until a client drains them.
#[derive(Debug, Clone)]
pub struct InMemoryNotifier {
    notices: Arc<Mutex<VecDeque<Notice>>>,
    capacity: usize,
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::with_capacity(NOTICE_CAPACITY)
    }
}

impl InMemoryNotifier {
    /// A zero capacity is raised to one so the latest notice is always kept.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            notices: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(text = %notice.message, "notice raised"),
            NoticeLevel::Error => tracing::warn!(text = %notice.message, "notice raised"),
        }
        let mut queue = self
            .notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(notice);
    }

    fn drain(&self) -> Vec<Notice> {
        let mut guard = self
            .notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.drain(..).collect()
    }
}
