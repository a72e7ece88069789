//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use lumen_bridge::{EventDispatcher, InMemoryClient, Notifier, RecordingChannel};
use lumen_core::{
    Configuration, CredentialInfo, CredentialType, CredentialTypeIdentifier, SchemeManager,
    SchemeManagerIdentifier, TranslatedString,
};

/// Notifier wired to an in-memory client and a recording channel
pub struct TestBridge {
    pub client: Arc<InMemoryClient>,
    pub channel: Arc<RecordingChannel>,
    pub notifier: Notifier,
}

impl TestBridge {
    pub fn new(configuration: Configuration) -> Self {
        let client = Arc::new(InMemoryClient::new(configuration));
        let channel = Arc::new(RecordingChannel::new());
        let notifier = Notifier::new(
            client.clone(),
            Arc::new(test_logo),
            EventDispatcher::new(channel.clone()),
        );

        Self {
            client,
            channel,
            notifier,
        }
    }
}

/// `logo<ID>.png` for credential types whose id is upper case, nothing otherwise
pub fn test_logo(credential_type: &CredentialType, _: &Configuration) -> String {
    if credential_type.id.chars().all(|c| c.is_ascii_uppercase()) {
        format!("logo{}.png", credential_type.id)
    } else {
        String::new()
    }
}

pub fn credential_type(scheme: &str, issuer: &str, id: &str) -> CredentialType {
    CredentialType {
        id: id.to_string(),
        issuer_id: issuer.to_string(),
        scheme_manager_id: scheme.to_string(),
        name: TranslatedString::new("en", id).with("nl", id),
        short_name: TranslatedString::new("en", id),
        ..Default::default()
    }
}

pub fn scheme_manager(id: &str, keyshare_server: Option<&str>) -> SchemeManager {
    SchemeManager {
        id: id.to_string(),
        name: TranslatedString::new("en", id),
        url: format!("https://schemes.example.org/{}", id),
        keyshare_server: keyshare_server.map(str::to_string),
        ..Default::default()
    }
}

/// Credential type `A` (loaded, has a logo), `B` (unloaded) and `c` (loaded, no logo),
/// all under the distributed scheme manager `demo`
pub fn sample_configuration() -> Configuration {
    let mut configuration = Configuration {
        path: "/var/lib/lumen/schemes".into(),
        ..Default::default()
    };
    configuration.scheme_managers.insert(
        SchemeManagerIdentifier::new("demo"),
        scheme_manager("demo", Some("https://keyshare.example.org")),
    );
    configuration.scheme_managers.insert(
        SchemeManagerIdentifier::new("local"),
        scheme_manager("local", None),
    );
    configuration.add_credential_type(credential_type("demo", "issuer", "A"));
    configuration
        .credential_types
        .insert(CredentialTypeIdentifier::new("demo", "issuer", "B"), None);
    configuration.add_credential_type(credential_type("demo", "issuer", "c"));
    configuration
}

pub fn held_credential(id: &str, hash: &str) -> CredentialInfo {
    let signed_on = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    CredentialInfo {
        id: id.to_string(),
        issuer_id: "issuer".to_string(),
        scheme_manager_id: "demo".to_string(),
        signed_on,
        expires: signed_on + Duration::days(365),
        attributes: [("name".to_string(), TranslatedString::new("", "Alice"))]
            .into_iter()
            .collect(),
        hash: hash.to_string(),
        revoked: false,
    }
}
