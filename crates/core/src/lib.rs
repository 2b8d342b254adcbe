//! `solid-core`: shared entities for the SOLID walkthrough crates.
//!
//! This crate contains **plain data** only (no IO, no validation beyond
//! identifier parsing). Principle crates build their examples on top of it.

pub mod entity;
pub mod error;
pub mod id;
pub mod model;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, UserId};
pub use model::{Order, Product, Profile, User};
pub use value_object::ValueObject;
