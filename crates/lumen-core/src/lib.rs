//! Lumen Core
//!
//! Core domain types for the Lumen credential client bridge.
//! These are the structures owned by the credential client (scheme
//! configuration, held credentials, preferences) that the bridge
//! reads and projects for the host.

pub mod configuration;
pub mod credential;
pub mod error;
pub mod identifier;
pub mod preferences;

pub use configuration::{
    AttributeType, Configuration, CredentialType, Issuer, SchemeManager, TranslatedString,
};
pub use credential::{CredentialInfo, CredentialInfoList};
pub use error::LumenError;
pub use identifier::{
    AttributeTypeIdentifier, CredentialTypeIdentifier, IssuerIdentifier, SchemeManagerIdentifier,
};
pub use preferences::Preferences;
