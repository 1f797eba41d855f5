//! Fan-out notices for user-visible feedback.
//!
//! The mutation runner publishes here; the UI's toast provider subscribes.
//! Subscribers that drop their receiver are pruned on the next publish.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct Notifier {
    senders: Arc<Mutex<Vec<UnboundedSender<Notice>>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> UnboundedReceiver<Notice> {
        let (tx, rx) = unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }

    pub fn publish(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
        };
        self.senders
            .lock()
            .unwrap()
            .retain(|sender| sender.send(notice.clone()).is_ok());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_notices() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.success("Goal created successfully!");
        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Goal created successfully!");
    }

    #[tokio::test]
    async fn test_dropped_subscriber_is_pruned() {
        let notifier = Notifier::new();
        let rx = notifier.subscribe();
        drop(rx);

        // Must not error or grow the sender list
        notifier.error("boom");
        assert!(notifier.senders.lock().unwrap().is_empty());
    }
}
