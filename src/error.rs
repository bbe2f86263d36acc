//! # Error Types
//!
//! Custom error types for VPad Bridge using `thiserror`.

use thiserror::Error;

/// Main error type for VPad Bridge
#[derive(Debug, Error)]
pub enum VpadError {
    /// Pad configured with an unusable partition count
    #[error("invalid partition count {count}: a pad needs at least one sector")]
    InvalidPartition { count: usize },

    /// Profile name not present in the built-in registry
    #[error("unknown controller profile: {0}")]
    UnknownProfile(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Touch replay script errors
    #[error("Replay error: {0}")]
    Replay(String),

    /// Control channel transport errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for VPad Bridge
pub type Result<T> = std::result::Result<T, VpadError>;
