//! Scheme configuration types
//!
//! The configuration is the client's parsed view of the scheme managers it
//! trusts: their issuers, the credential types those issuers hand out, and
//! the attributes inside each credential type.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LumenError;
use crate::identifier::{
    AttributeTypeIdentifier, CredentialTypeIdentifier, IssuerIdentifier, SchemeManagerIdentifier,
};

/// A string with one rendering per language code (`en`, `nl`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslatedString(pub BTreeMap<String, String>);

impl TranslatedString {
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self::default().with(lang, text)
    }

    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(lang.into(), text.into());
        self
    }
}

/// A scheme manager: the authority grouping a set of issuers and credential types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemeManager {
    #[serde(rename = "ID")]
    pub id: String,

    pub name: TranslatedString,

    #[serde(rename = "URL")]
    pub url: String,

    #[serde(default)]
    pub description: TranslatedString,

    /// Keyshare server URL; present when the scheme manager is distributed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyshare_server: Option<String>,

    #[serde(default)]
    pub demo: bool,
}

impl SchemeManager {
    /// Distributed scheme managers require the client to enroll with their
    /// keyshare server before credentials can be used.
    pub fn is_distributed(&self) -> bool {
        self.keyshare_server.is_some()
    }
}

/// An issuer within a scheme manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Issuer {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "SchemeManagerID")]
    pub scheme_manager_id: String,

    pub name: TranslatedString,

    #[serde(default)]
    pub short_name: TranslatedString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// An attribute declared by a credential type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    #[serde(rename = "ID")]
    pub id: String,

    pub name: TranslatedString,

    #[serde(default)]
    pub description: TranslatedString,

    #[serde(default)]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_index: Option<u32>,
}

/// Declared schema of a credential type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialType {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "IssuerID")]
    pub issuer_id: String,

    #[serde(rename = "SchemeManagerID")]
    pub scheme_manager_id: String,

    pub name: TranslatedString,

    #[serde(default)]
    pub short_name: TranslatedString,

    #[serde(default)]
    pub description: TranslatedString,

    /// At most one instance of a singleton credential can be held
    #[serde(default)]
    pub is_singleton: bool,

    #[serde(default)]
    pub disallow_delete: bool,

    #[serde(default)]
    pub attribute_types: Vec<AttributeType>,

    #[serde(rename = "IssueURL", default, skip_serializing_if = "Option::is_none")]
    pub issue_url: Option<TranslatedString>,
}

impl CredentialType {
    pub fn identifier(&self) -> CredentialTypeIdentifier {
        CredentialTypeIdentifier::new(
            self.scheme_manager_id.clone(),
            self.issuer_id.clone(),
            self.id.clone(),
        )
    }
}

/// The client's scheme configuration
///
/// `credential_types` may hold `None` for a type that is known by identifier
/// (e.g. referenced by a held credential) but whose descriptor is not loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Configuration {
    #[serde(default)]
    pub scheme_managers: BTreeMap<SchemeManagerIdentifier, SchemeManager>,

    #[serde(default)]
    pub issuers: BTreeMap<IssuerIdentifier, Issuer>,

    #[serde(default)]
    pub credential_types: BTreeMap<CredentialTypeIdentifier, Option<CredentialType>>,

    #[serde(default)]
    pub attribute_types: BTreeMap<AttributeTypeIdentifier, AttributeType>,

    /// Root directory of the scheme assets on disk
    #[serde(default)]
    pub path: PathBuf,
}

impl Configuration {
    /// Loaded descriptor for a credential type, if any
    pub fn credential_type(&self, id: &CredentialTypeIdentifier) -> Option<&CredentialType> {
        self.credential_types.get(id).and_then(Option::as_ref)
    }

    pub fn require_scheme_manager(
        &self,
        id: &SchemeManagerIdentifier,
    ) -> Result<&SchemeManager, LumenError> {
        self.scheme_managers
            .get(id)
            .ok_or_else(|| LumenError::UnknownSchemeManager(id.to_string()))
    }

    pub fn distributed_scheme_managers(&self) -> impl Iterator<Item = &SchemeManagerIdentifier> {
        self.scheme_managers
            .iter()
            .filter(|(_, sm)| sm.is_distributed())
            .map(|(id, _)| id)
    }

    /// Register a loaded credential type under its own identifier
    pub fn add_credential_type(&mut self, credential_type: CredentialType) {
        self.credential_types
            .insert(credential_type.identifier(), Some(credential_type));
    }
}
