//! # Notifications View State
//!
//! Commands push toasts here; the frontend drains and presents them.
//! Presentation (styling, timing, dismissal) is out of scope.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Neutral confirmation.
    Info,
    /// Happy-path announcement.
    Success,
    /// Rejected action.
    Error,
}

/// A queued user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Severity for presentation routing.
    pub level: ToastLevel,
    /// Short headline.
    pub title: String,
    /// Longer description.
    pub body: String,
}

impl Toast {
    /// An `Info` toast.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    /// A `Success` toast.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    /// An `Error` toast.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// FIFO queue of pending toasts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsState {
    queue: VecDeque<Toast>,
}

impl NotificationsState {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast.
    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast);
    }

    /// Take all pending toasts, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    /// Number of pending toasts.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_in_fifo_order() {
        let mut notifications = NotificationsState::new();
        notifications.push(Toast::info("first", "a"));
        notifications.push(Toast::error("second", "b"));

        let drained = notifications.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].level, ToastLevel::Error);
        assert!(notifications.is_empty());
    }
}
