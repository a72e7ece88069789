//! Identifiers for scheme managers, issuers, credential types and attributes
//!
//! All identifiers are dotted composite names (`pbdf.gemeente.address`).
//! They serialize as plain strings so they can key JSON objects.
//! A component that is empty or contains a `.` has no dotted representation;
//! serializing such an identifier fails instead of emitting an ambiguous key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LumenError;

/// Identifier of a scheme manager (e.g. `pbdf`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemeManagerIdentifier(pub String);

impl SchemeManagerIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_dotted(&self) -> Result<String, LumenError> {
        join_components(&[&self.0])
    }
}

/// Identifier of an issuer within a scheme manager (e.g. `pbdf.gemeente`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssuerIdentifier {
    pub scheme_manager: String,
    pub issuer: String,
}

impl IssuerIdentifier {
    pub fn new(scheme_manager: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            scheme_manager: scheme_manager.into(),
            issuer: issuer.into(),
        }
    }

    pub fn scheme_manager_identifier(&self) -> SchemeManagerIdentifier {
        SchemeManagerIdentifier::new(self.scheme_manager.clone())
    }

    pub fn to_dotted(&self) -> Result<String, LumenError> {
        join_components(&[&self.scheme_manager, &self.issuer])
    }
}

/// Identifier of a credential type (e.g. `pbdf.gemeente.address`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CredentialTypeIdentifier {
    pub scheme_manager: String,
    pub issuer: String,
    pub name: String,
}

impl CredentialTypeIdentifier {
    pub fn new(
        scheme_manager: impl Into<String>,
        issuer: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            scheme_manager: scheme_manager.into(),
            issuer: issuer.into(),
            name: name.into(),
        }
    }

    pub fn scheme_manager_identifier(&self) -> SchemeManagerIdentifier {
        SchemeManagerIdentifier::new(self.scheme_manager.clone())
    }

    pub fn issuer_identifier(&self) -> IssuerIdentifier {
        IssuerIdentifier::new(self.scheme_manager.clone(), self.issuer.clone())
    }

    pub fn to_dotted(&self) -> Result<String, LumenError> {
        join_components(&[&self.scheme_manager, &self.issuer, &self.name])
    }
}

/// Identifier of an attribute within a credential type
/// (e.g. `pbdf.gemeente.address.street`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeTypeIdentifier {
    pub credential_type: CredentialTypeIdentifier,
    pub name: String,
}

impl AttributeTypeIdentifier {
    pub fn to_dotted(&self) -> Result<String, LumenError> {
        let ct = &self.credential_type;
        join_components(&[&ct.scheme_manager, &ct.issuer, &ct.name, &self.name])
    }
}

fn join_components(parts: &[&str]) -> Result<String, LumenError> {
    for part in parts {
        if part.is_empty() || part.contains('.') {
            return Err(LumenError::InvalidIdentifier(format!(
                "component {:?} of {:?} cannot be encoded",
                part,
                parts.join(".")
            )));
        }
    }
    Ok(parts.join("."))
}

fn split_components<const N: usize>(s: &str) -> Result<[String; N], LumenError> {
    let parts: Vec<String> = s.split('.').map(str::to_string).collect();
    if parts.iter().any(String::is_empty) {
        return Err(LumenError::InvalidIdentifier(s.to_string()));
    }
    parts.try_into().map_err(|parts: Vec<String>| {
        LumenError::InvalidIdentifier(format!(
            "{}: expected {} components, got {}",
            s,
            N,
            parts.len()
        ))
    })
}

impl FromStr for SchemeManagerIdentifier {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [id] = split_components::<1>(s)?;
        Ok(Self(id))
    }
}

impl FromStr for IssuerIdentifier {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [scheme_manager, issuer] = split_components::<2>(s)?;
        Ok(Self {
            scheme_manager,
            issuer,
        })
    }
}

impl FromStr for CredentialTypeIdentifier {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [scheme_manager, issuer, name] = split_components::<3>(s)?;
        Ok(Self {
            scheme_manager,
            issuer,
            name,
        })
    }
}

impl FromStr for AttributeTypeIdentifier {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [scheme_manager, issuer, credential, name] = split_components::<4>(s)?;
        Ok(Self {
            credential_type: CredentialTypeIdentifier {
                scheme_manager,
                issuer,
                name: credential,
            },
            name,
        })
    }
}

impl fmt::Display for SchemeManagerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for IssuerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.scheme_manager, self.issuer)
    }
}

impl fmt::Display for CredentialTypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.scheme_manager, self.issuer, self.name)
    }
}

impl fmt::Display for AttributeTypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.credential_type, self.name)
    }
}

/// Dotted-string serde for the identifier types
macro_rules! dotted_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    let dotted = self.to_dotted().map_err(serde::ser::Error::custom)?;
                    serializer.serialize_str(&dotted)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

dotted_serde!(
    SchemeManagerIdentifier,
    IssuerIdentifier,
    CredentialTypeIdentifier,
    AttributeTypeIdentifier,
);
