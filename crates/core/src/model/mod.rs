//! Entities shared by the principle crates.
//!
//! These are data holders; nothing here enforces business rules.

mod order;
mod product;
mod user;

pub use order::Order;
pub use product::Product;
pub use user::{Profile, User};
