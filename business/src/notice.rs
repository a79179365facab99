//! Transient user-facing notices (snackbar semantics).
//!
//! A notice carries an expiry derived from the virtual clock; the toast
//! widget simply stops rendering it once the clock passes the deadline, so
//! auto-dismissal needs no timers. The slot holds at most one notice, newest
//! wins.

use std::any::Any;

use bookstall_states::{State, state_assign_impl};
use chrono::{DateTime, Duration, Utc};

/// How long a notice stays visible.
pub const NOTICE_TTL_SECONDS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Single-slot notice state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    active: Option<Notice>,
}

impl Notices {
    /// A state value holding one warning; handy for `Updater::set`.
    pub fn warning(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        let mut notices = Self::default();
        notices.push(NoticeKind::Warning, message, now);
        notices
    }

    /// A state value holding one error; handy for `Updater::set`.
    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        let mut notices = Self::default();
        notices.push(NoticeKind::Error, message, now);
        notices
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.active = Some(Notice {
            kind,
            message: message.into(),
            expires_at: now + Duration::seconds(NOTICE_TTL_SECONDS),
        });
    }

    /// The notice to show at `now`, if any is still alive.
    pub fn active(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.active
            .as_ref()
            .filter(|notice| now < notice.expires_at)
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

impl State for Notices {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_visible_until_ttl() {
        let now = Utc::now();
        let notices = Notices::warning("too short", now);

        assert!(notices.active(now).is_some());
        assert!(
            notices
                .active(now + Duration::seconds(NOTICE_TTL_SECONDS - 1))
                .is_some()
        );
        assert!(
            notices
                .active(now + Duration::seconds(NOTICE_TTL_SECONDS))
                .is_none(),
            "notice must expire after its TTL"
        );
    }

    #[test]
    fn test_newest_notice_wins() {
        let now = Utc::now();
        let mut notices = Notices::warning("first", now);
        notices.push(NoticeKind::Error, "second", now);

        let active = notices.active(now).expect("notice should be active");
        assert_eq!(active.message, "second");
        assert_eq!(active.kind, NoticeKind::Error);
    }

    #[test]
    fn test_clear_removes_notice() {
        let now = Utc::now();
        let mut notices = Notices::error("boom", now);
        notices.clear();
        assert!(notices.active(now).is_none());
    }
}
