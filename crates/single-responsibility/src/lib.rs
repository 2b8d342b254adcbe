//! Single Responsibility: order bookkeeping vs. invoice rendering.
//!
//! [`before::OrderService`] both stores orders and renders invoices, so a
//! change to the invoice layout touches the order book. [`after`] splits the
//! two into [`after::OrderService`] and [`after::InvoiceGenerator`].

pub mod after;
pub mod before;
mod invoice;

pub use invoice::invoice_line;
