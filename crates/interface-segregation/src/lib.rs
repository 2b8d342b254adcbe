//! Interface Segregation: user management split by client need.
//!
//! [`before::UserManager`] bundles every user operation, so a component that
//! only registers users still depends on login, profiles, deletion and order
//! history. [`after`] offers one role trait per concern. The
//! [`InMemoryUserDirectory`] implements both shapes.

pub mod after;
pub mod before;
mod directory;

pub use directory::InMemoryUserDirectory;
