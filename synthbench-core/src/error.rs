//! Error types for suite setup.
//!
//! The workloads themselves cannot fail; only building the suite can.

use thiserror::Error;

/// Rejected [`SuiteConfig`](crate::SuiteConfig) values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A parameter that must be positive was zero
    #[error("`{field}` must be greater than zero")]
    Zero {
        /// Offending field name
        field: &'static str,
    },
}

/// Errors raised while preparing the suite
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Configuration failed validation
    #[error("invalid suite configuration: {0}")]
    Config(#[from] ConfigError),
    /// The worker thread pool could not be created
    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
