//! Open/Closed: discount policies.
//!
//! [`before::apply_discount`] hard-codes every policy behind a flag, so a new
//! policy means editing it. [`after::calculate_price`] takes any
//! [`after::DiscountRule`], and new policies are new types.

pub mod after;
pub mod before;

/// Discount rate for regular customers.
pub const STANDARD_RATE: f64 = 0.10;

/// Discount rate for VIP customers.
pub const VIP_RATE: f64 = 0.20;
