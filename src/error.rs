//! Error types for ddns-reconciler.

use thiserror::Error;

/// Result type alias for ddns-reconciler.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// Reconciliation error types.
///
/// Each variant carries a human-readable detail string; the step prefixes are
/// part of the observable log output and stay stable.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// A required configuration value is missing or empty.
    #[error("Configuration error: {0} environment variable is not set")]
    Config(String),

    /// The public IP lookup failed.
    #[error("Failed to fetch public IP: {0}")]
    PublicIp(String),

    /// The record listing against the provider failed.
    #[error("Failed to fetch DNS record: {0}")]
    FetchRecord(String),

    /// The record update against the provider failed.
    #[error("Failed to update DNS record: {0}")]
    UpdateRecord(String),
}
