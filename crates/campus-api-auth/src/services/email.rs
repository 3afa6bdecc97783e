//! Verification email dispatch.
//!
//! Registration schedules a verification notification as a best-effort
//! side channel: the session service publishes a message onto a queue and
//! returns immediately. A worker task owns the actual sender; delivery
//! failures are logged and never reach the registration response.

use async_trait::async_trait;
use campus_core::UserId;
use thiserror::Error;
use tokio::sync::mpsc;

/// Email delivery errors.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

/// Sends verification emails.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a verification email to a newly registered user.
    async fn send_verification(&self, email: &str, user_id: UserId) -> Result<(), EmailError>;
}

/// Email sender that only logs.
///
/// Stands in for an SMTP sender in development and tests.
#[derive(Debug, Default, Clone)]
pub struct LogEmailSender;

impl LogEmailSender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_verification(&self, email: &str, user_id: UserId) -> Result<(), EmailError> {
        tracing::info!(
            user_id = %user_id,
            email = %email,
            "Verification email dispatched"
        );
        Ok(())
    }
}

/// A queued verification email.
#[derive(Debug, Clone)]
pub struct VerificationEmail {
    pub email: String,
    pub user_id: UserId,
}

/// Publisher handle for queueing verification emails.
///
/// Publishing never blocks and never fails the caller: if the queue is
/// full or the worker is gone, the message is dropped with a warning.
#[derive(Clone)]
pub struct EmailPublisher {
    tx: mpsc::Sender<VerificationEmail>,
}

impl EmailPublisher {
    /// Create a publisher and the receiving end for its worker.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<VerificationEmail>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Queue a verification email. Fire-and-forget.
    pub fn publish(&self, message: VerificationEmail) {
        if let Err(e) = self.tx.try_send(message) {
            tracing::warn!(error = %e, "Dropping verification email, queue unavailable");
        }
    }
}

/// Worker that drains the email queue.
///
/// Spawned once at startup; runs until the publisher side is dropped.
pub struct EmailWorker {
    rx: mpsc::Receiver<VerificationEmail>,
    sender: std::sync::Arc<dyn EmailSender>,
}

impl EmailWorker {
    #[must_use]
    pub fn new(
        rx: mpsc::Receiver<VerificationEmail>,
        sender: std::sync::Arc<dyn EmailSender>,
    ) -> Self {
        Self { rx, sender }
    }

    /// Process queued emails until the channel closes.
    pub async fn run(mut self) {
        while let Some(message) = self.rx.recv().await {
            if let Err(e) = self
                .sender
                .send_verification(&message.email, message.user_id)
                .await
            {
                tracing::warn!(
                    user_id = %message.user_id,
                    error = %e,
                    "Verification email delivery failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Sender that records recipients, optionally failing every send.
    struct RecordingSender {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_verification(&self, email: &str, _user_id: UserId) -> Result<(), EmailError> {
            if self.fail {
                return Err(EmailError::SendFailed("smtp down".to_string()));
            }
            self.sent.lock().unwrap().push(email.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn worker_delivers_published_messages() {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(Vec::new()),
            fail: false,
        });
        let (publisher, rx) = EmailPublisher::new(16);
        let worker = EmailWorker::new(rx, sender.clone());

        publisher.publish(VerificationEmail {
            email: "a@x.com".to_string(),
            user_id: UserId::new(),
        });
        publisher.publish(VerificationEmail {
            email: "b@x.com".to_string(),
            user_id: UserId::new(),
        });
        drop(publisher);

        worker.run().await;

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), ["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_stop_the_worker() {
        let sender = Arc::new(RecordingSender {
            sent: Mutex::new(Vec::new()),
            fail: true,
        });
        let (publisher, rx) = EmailPublisher::new(16);
        let worker = EmailWorker::new(rx, sender);

        publisher.publish(VerificationEmail {
            email: "a@x.com".to_string(),
            user_id: UserId::new(),
        });
        drop(publisher);

        // Runs to completion despite every send failing.
        worker.run().await;
    }

    #[tokio::test]
    async fn publish_to_full_queue_does_not_block_or_panic() {
        let (publisher, _rx) = EmailPublisher::new(1);

        for _ in 0..10 {
            publisher.publish(VerificationEmail {
                email: "a@x.com".to_string(),
                user_id: UserId::new(),
            });
        }
    }
}
