//! The processor is welded to email.

use tracing::info;

use crate::{Channel, Notification, PURCHASE_SUBJECT, purchase_message};

#[derive(Debug, Clone)]
pub struct EmailNotifier {
    sender: String,
    outbox: Vec<Notification>,
}

impl EmailNotifier {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            outbox: Vec::new(),
        }
    }

    pub fn send_email(&mut self, to: &str, subject: &str, body: &str) {
        info!(channel = %Channel::Email, to, subject, "sending email");
        self.outbox.push(Notification {
            channel: Channel::Email,
            from: self.sender.clone(),
            to: to.to_string(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
        });
    }

    pub fn sent(&self) -> &[Notification] {
        &self.outbox
    }
}

/// Depends on [`EmailNotifier`] directly; there is no seam to plug another
/// channel into.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    notifier: EmailNotifier,
}

impl OrderProcessor {
    pub fn new(notifier: EmailNotifier) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &EmailNotifier {
        &self.notifier
    }

    pub fn complete_purchase(&mut self, user_email: &str, product: &str) {
        self.notifier
            .send_email(user_email, PURCHASE_SUBJECT, &purchase_message(product));
    }
}
