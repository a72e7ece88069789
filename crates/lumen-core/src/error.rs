//! Error types for Lumen

use thiserror::Error;

/// Main error type for Lumen domain operations
#[derive(Error, Debug)]
pub enum LumenError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unknown scheme manager: {0}")]
    UnknownSchemeManager(String),
}
