//! `solid-demo`: runs the before/after walkthrough of every principle.

pub mod config;
pub mod walkthrough;

pub use config::{ConfigError, DemoConfig, Principle};
pub use walkthrough::{Report, run};
