//! Transient success/error notices.
//!
//! The ledger core reports every outcome through a single-slot notice
//! channel: at most one message is active, success and error displace each
//! other, and each message carries an absolute expiry timestamp. Actually
//! clearing an expired notice is the presentation layer's job; the core
//! only produces values and exposes [`Notifier::clear_expired`] for an
//! external scheduler to call.

use serde::{Deserialize, Serialize};
use skillchain_types::Timestamp;

/// How long a notice stays active before the presentation layer should
/// dismiss it.
pub const NOTICE_TTL_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient message with its expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Timestamp,
}

impl Notice {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Single-slot notice channel: success xor error, latest wins.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a success notice, displacing any active message.
    pub fn success(&mut self, text: impl Into<String>, now: Timestamp) {
        self.publish(NoticeKind::Success, text.into(), now);
    }

    /// Publish an error notice, displacing any active message.
    pub fn error(&mut self, text: impl Into<String>, now: Timestamp) {
        self.publish(NoticeKind::Error, text.into(), now);
    }

    fn publish(&mut self, kind: NoticeKind, text: String, now: Timestamp) {
        self.current = Some(Notice {
            kind,
            text,
            expires_at: now.plus_secs(NOTICE_TTL_SECS),
        });
    }

    /// The active notice, if any. Does not check expiry.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Drop the active notice if it has expired. Returns whether a notice
    /// was cleared.
    pub fn clear_expired(&mut self, now: Timestamp) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }
}
