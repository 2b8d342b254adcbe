//! Dependency Inversion: purchase confirmations.
//!
//! [`before::OrderProcessor`] owns a concrete [`before::EmailNotifier`], so
//! switching to SMS means rewriting the processor. [`after::OrderProcessor`]
//! is generic over [`after::Notifier`] and never names a channel.

pub mod after;
pub mod before;
mod notification;

pub use notification::{Channel, Notification};

/// Subject of the message sent when a purchase completes.
pub const PURCHASE_SUBJECT: &str = "Purchase Completed";

/// Body of the message sent when `product` has been purchased.
pub fn purchase_message(product: &str) -> String {
    format!("Thank you for purchasing {product}")
}
