//! Liskov Substitution: who is allowed to be discounted.
//!
//! In [`before`] every product implements `apply_discount`, and regular
//! products silently ignore it, so a caller holding a `dyn Product` cannot
//! rely on the call doing anything. In [`after`] only products that really
//! get discounts implement [`after::Discountable`]; the rest never reach
//! [`after::apply_discounts`].

pub mod after;
pub mod before;

/// Multiplier applied by every discounted product (10% off).
pub const DISCOUNT_FACTOR: f64 = 0.90;
