//! Notification sink — receives human-readable notices after mutations.
//!
//! The store emits, the sink presents. The default sink writes structured
//! log lines; a UI shell would substitute its toast system here.

use std::sync::Mutex;

use foodshare_protocol::{Notice, NoticeKind};

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sink that forwards notices to the `tracing` log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!(kind = notice.kind.as_str(), "{}", notice.message),
            NoticeKind::Info => tracing::info!(kind = notice.kind.as_str(), "{}", notice.message),
            NoticeKind::Error => tracing::warn!(kind = notice.kind.as_str(), "{}", notice.message),
        }
    }
}

/// Sink that records every notice, for assertions in tests.
#[derive(Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut self.notices.lock().unwrap())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
