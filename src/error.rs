//! Error types for the simulation and its configuration loader.

use thiserror::Error;

/// Rejected requests from the external layers; state is left untouched.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("step of {seconds} s is outside (0, 172800] or not finite")]
    InvalidStep { seconds: f64 },

    #[error("body index {index} out of range for {count} bodies")]
    UnknownBody { index: usize, count: usize },
}

/// Problems loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body `{name}`: {reason}")]
    InvalidBody { name: String, reason: String },

    #[error("parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("selected body {selected} out of range for {count} bodies")]
    SelectionOutOfRange { selected: usize, count: usize },
}
