//! Held credential types
//!
//! `CredentialInfo` is the display-level summary of a credential instance the
//! client holds. It carries attribute values but none of the signature
//! material.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::configuration::TranslatedString;
use crate::identifier::CredentialTypeIdentifier;

/// Summary of one held credential instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CredentialInfo {
    /// Credential type name within its issuer
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "IssuerID")]
    pub issuer_id: String,

    #[serde(rename = "SchemeManagerID")]
    pub scheme_manager_id: String,

    pub signed_on: DateTime<Utc>,

    pub expires: DateTime<Utc>,

    /// Attribute name -> value; absent optional attributes are omitted
    #[serde(default)]
    pub attributes: BTreeMap<String, TranslatedString>,

    /// Hash identifying this instance among instances of the same type
    pub hash: String,

    #[serde(default)]
    pub revoked: bool,
}

impl CredentialInfo {
    pub fn identifier(&self) -> CredentialTypeIdentifier {
        CredentialTypeIdentifier::new(
            self.scheme_manager_id.clone(),
            self.issuer_id.clone(),
            self.id.clone(),
        )
    }

    /// Check if the credential has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires
    }
}

/// Held credentials, in the order the client reports them
pub type CredentialInfoList = Vec<CredentialInfo>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(expires: DateTime<Utc>) -> CredentialInfo {
        CredentialInfo {
            id: "email".to_string(),
            issuer_id: "sidn-pbdf".to_string(),
            scheme_manager_id: "pbdf".to_string(),
            signed_on: Utc::now() - Duration::days(1),
            expires,
            attributes: BTreeMap::from([(
                "email".to_string(),
                TranslatedString::new("", "user@example.org"),
            )]),
            hash: "session-1".to_string(),
            revoked: false,
        }
    }

    #[test]
    fn test_expiry() {
        assert!(!sample(Utc::now() + Duration::days(30)).is_expired());
        assert!(sample(Utc::now() - Duration::seconds(1)).is_expired());
    }

    #[test]
    fn test_identifier_and_field_names() {
        let cred = sample(Utc::now() + Duration::days(30));
        assert_eq!(cred.identifier().to_string(), "pbdf.sidn-pbdf.email");

        let value = serde_json::to_value(&cred).unwrap();
        assert_eq!(value["IssuerID"], "sidn-pbdf");
        assert_eq!(value["Attributes"]["email"][""], "user@example.org");
    }
}
