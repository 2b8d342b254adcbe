//! The processor depends on an abstraction; channels plug in from outside.

use tracing::info;

use crate::{Channel, Notification, PURCHASE_SUBJECT, purchase_message};

/// A delivery channel.
pub trait Notifier {
    fn notify(&mut self, to: &str, subject: &str, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, to: &str, subject: &str, message: &str) {
        (**self).notify(to, subject, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, to: &str, subject: &str, message: &str) {
        (**self).notify(to, subject, message);
    }
}

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

    pub fn sent(&self) -> &[Notification] {
        &self.outbox
    }
}

impl Notifier for EmailNotifier {
    fn notify(&mut self, to: &str, subject: &str, message: &str) {
        info!(channel = %Channel::Email, to, subject, "notification sent");
        self.outbox.push(Notification {
            channel: Channel::Email,
            from: self.sender.clone(),
            to: to.to_string(),
            subject: Some(subject.to_string()),
            body: message.to_string(),
        });
    }
}

/// SMS has no subject line; it is folded into the body.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    sender_id: String,
    outbox: Vec<Notification>,
}

impl SmsNotifier {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            outbox: Vec::new(),
        }
    }

    pub fn sent(&self) -> &[Notification] {
        &self.outbox
    }
}

impl Notifier for SmsNotifier {
    fn notify(&mut self, to: &str, subject: &str, message: &str) {
        info!(channel = %Channel::Sms, to, "notification sent");
        self.outbox.push(Notification {
            channel: Channel::Sms,
            from: self.sender_id.clone(),
            to: to.to_string(),
            subject: None,
            body: format!("{subject}: {message}"),
        });
    }
}

#[derive(Debug, Clone)]
pub struct OrderProcessor<N> {
    notifier: N,
}

impl<N: Notifier> OrderProcessor<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    pub fn complete_purchase(&mut self, user_contact: &str, product: &str) {
        self.notifier
            .notify(user_contact, PURCHASE_SUBJECT, &purchase_message(product));
    }
}
