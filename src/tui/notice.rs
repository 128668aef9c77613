//! Transient notices shown as toasts.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::table::Notice;

/// Default lifetime of a toast.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Notices visible at once; older ones are dropped first.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
struct Entry {
    notice: Notice,
    expires_at: Instant,
}

/// Fire-and-forget notice queue with per-entry expiry.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    entries: VecDeque<Entry>,
    duration: Duration,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NoticeQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.entries.push_back(Entry {
            notice,
            expires_at: now + self.duration,
        });
        while self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    /// Drops expired notices.
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|e| e.expires_at > now);
    }

    /// Live notices, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|e| &e.notice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(text: &str) -> Notice {
        Notice {
            message: text.to_string(),
        }
    }

    #[test]
    fn notices_expire() {
        let start = Instant::now();
        let mut queue = NoticeQueue::new(Duration::from_secs(4));
        queue.push(notice("a"), start);
        queue.push(notice("b"), start + Duration::from_secs(2));

        queue.expire(start + Duration::from_secs(3));
        assert_eq!(queue.visible().count(), 2);

        queue.expire(start + Duration::from_secs(4));
        let left: Vec<_> = queue.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(left, vec!["b"]);

        queue.expire(start + Duration::from_secs(10));
        assert!(queue.is_empty());
    }

    #[test]
    fn oldest_dropped_when_full() {
        let now = Instant::now();
        let mut queue = NoticeQueue::default();
        for text in ["1", "2", "3", "4"] {
            queue.push(notice(text), now);
        }
        let left: Vec<_> = queue.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(left, vec!["2", "3", "4"]);
    }
}
