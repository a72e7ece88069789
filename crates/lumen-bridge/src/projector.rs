//! Configuration projection
//!
//! The host wants every credential type together with its logo, but the logo
//! is not stored on the descriptor. The projection borrows the live
//! configuration, pairs every loaded descriptor with a freshly resolved logo
//! and encodes the result in one step. The source configuration is never
//! mutated, and a failed encoding yields no snapshot at all.

use std::collections::BTreeMap;
use std::path::Path;

use lumen_core::{
    AttributeType, AttributeTypeIdentifier, Configuration, CredentialType,
    CredentialTypeIdentifier, Issuer, IssuerIdentifier, SchemeManager, SchemeManagerIdentifier,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NotifyError;
use crate::logo::LogoResolver;

/// A credential type descriptor with its resolved logo
///
/// Serializes as the descriptor's own fields plus `Logo`, which is left out
/// entirely when no logo was resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DecoratedCredentialType<'a> {
    #[serde(rename = "Logo", skip_serializing_if = "String::is_empty")]
    pub logo: String,

    #[serde(flatten)]
    pub credential_type: &'a CredentialType,
}

impl<'a> DecoratedCredentialType<'a> {
    pub fn decorate(
        credential_type: &'a CredentialType,
        configuration: &Configuration,
        resolver: &dyn LogoResolver,
    ) -> Self {
        Self {
            logo: resolver.resolve(credential_type, configuration),
            credential_type,
        }
    }
}

/// Borrowed view of a configuration with decorated credential types
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ConfigurationProjection<'a> {
    scheme_managers: &'a BTreeMap<SchemeManagerIdentifier, SchemeManager>,
    issuers: &'a BTreeMap<IssuerIdentifier, Issuer>,
    credential_types: BTreeMap<&'a CredentialTypeIdentifier, Option<DecoratedCredentialType<'a>>>,
    attribute_types: &'a BTreeMap<AttributeTypeIdentifier, AttributeType>,
    path: &'a Path,
}

impl<'a> ConfigurationProjection<'a> {
    fn new(configuration: &'a Configuration, resolver: &dyn LogoResolver) -> Self {
        // Unloaded (None) entries stay in the map as None
        let credential_types = configuration
            .credential_types
            .iter()
            .map(|(id, credential_type)| {
                let decorated = credential_type
                    .as_ref()
                    .map(|ct| DecoratedCredentialType::decorate(ct, configuration, resolver));
                (id, decorated)
            })
            .collect();

        Self {
            scheme_managers: &configuration.scheme_managers,
            issuers: &configuration.issuers,
            credential_types,
            attribute_types: &configuration.attribute_types,
            path: &configuration.path,
        }
    }
}

/// Encoded configuration snapshot, ready to hand to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationSnapshot(Value);

impl ConfigurationSnapshot {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The decorated credential type map
    pub fn credential_types(&self) -> Option<&serde_json::Map<String, Value>> {
        self.0.get("CredentialTypes").and_then(Value::as_object)
    }

    /// Entry for one credential type; `Some(Value::Null)` for an unloaded type
    pub fn credential_type(&self, id: &CredentialTypeIdentifier) -> Option<&Value> {
        self.credential_types()?.get(&id.to_string())
    }

    pub fn logo(&self, id: &CredentialTypeIdentifier) -> Option<&str> {
        self.credential_type(id)?.get("Logo")?.as_str()
    }
}

/// Project `configuration` into a snapshot, resolving every logo with `resolver`
pub fn project_configuration(
    configuration: &Configuration,
    resolver: &dyn LogoResolver,
) -> Result<ConfigurationSnapshot, NotifyError> {
    let projection = ConfigurationProjection::new(configuration, resolver);
    let value = serde_json::to_value(&projection)?;
    Ok(ConfigurationSnapshot(value))
}
