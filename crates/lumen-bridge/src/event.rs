//! Events delivered to the host
//!
//! The set of events is closed: a host matching on [`Event`] handles every
//! kind the bridge can emit.

use lumen_core::{CredentialInfoList, Preferences, SchemeManagerIdentifier};
use serde::{Deserialize, Serialize};

use crate::projector::ConfigurationSnapshot;

/// Scheme managers the client is and is not enrolled with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentStatus {
    pub enrolled_scheme_manager_ids: Vec<SchemeManagerIdentifier>,
    pub unenrolled_scheme_manager_ids: Vec<SchemeManagerIdentifier>,
}

impl EnrollmentStatus {
    pub fn is_enrolled(&self, id: &SchemeManagerIdentifier) -> bool {
        self.enrolled_scheme_manager_ids.contains(id)
    }
}

/// A one-shot notification carrying a snapshot of client state
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Configuration(ConfigurationSnapshot),
    Credentials(CredentialInfoList),
    EnrollmentStatus(EnrollmentStatus),
    Preferences(Preferences),
}

/// Wire form of an event for string-based host bridges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub name: String,
    /// JSON-encoded payload
    pub payload: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ConfigurationPayload<'a> {
    configuration: &'a ConfigurationSnapshot,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CredentialsPayload<'a> {
    credentials: &'a CredentialInfoList,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PreferencesPayload<'a> {
    preferences: &'a Preferences,
}

impl Event {
    /// Host-facing event name
    pub fn name(&self) -> &'static str {
        match self {
            Event::Configuration(_) => "ConfigurationEvent",
            Event::Credentials(_) => "CredentialsEvent",
            Event::EnrollmentStatus(_) => "EnrollmentStatusEvent",
            Event::Preferences(_) => "PreferencesEvent",
        }
    }

    /// Encode the payload as a JSON value
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Event::Configuration(configuration) => {
                serde_json::to_value(ConfigurationPayload { configuration })
            }
            Event::Credentials(credentials) => {
                serde_json::to_value(CredentialsPayload { credentials })
            }
            Event::EnrollmentStatus(status) => serde_json::to_value(status),
            Event::Preferences(preferences) => {
                serde_json::to_value(PreferencesPayload { preferences })
            }
        }
    }

    pub fn to_envelope(&self) -> Result<EventEnvelope, serde_json::Error> {
        Ok(EventEnvelope {
            name: self.name().to_string(),
            payload: self.payload()?.to_string(),
        })
    }
}
