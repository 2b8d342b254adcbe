//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing with the format taken from the environment.
///
/// An unrecognized `SOLID_LOG_FORMAT` is reported as a `warn` event once the
/// subscriber is running. Safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init() {
    tracing::init_from_env();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
