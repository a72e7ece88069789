//! Client state source
//!
//! The bridge only reads client state. Every read is synchronous and returns
//! an owned copy, so a producer never holds a borrow into live state while it
//! dispatches.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lumen_core::{
    Configuration, CredentialInfo, CredentialInfoList, CredentialTypeIdentifier, LumenError,
    Preferences, SchemeManagerIdentifier,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::EnrollmentStatus;

#[derive(Error, Debug)]
pub enum ClientStateError {
    #[error("Client state unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to load client state: {0}")]
    Load(String),

    #[error("Scheme manager {0} is not distributed")]
    NotDistributed(String),

    #[error(transparent)]
    Domain(#[from] LumenError),
}

/// Read access to the credential client's state
pub trait ClientState: Send + Sync {
    fn configuration(&self) -> Result<Arc<Configuration>, ClientStateError>;

    fn credential_info_list(&self) -> Result<CredentialInfoList, ClientStateError>;

    fn enrolled_scheme_managers(&self) -> Result<Vec<SchemeManagerIdentifier>, ClientStateError>;

    fn unenrolled_scheme_managers(&self)
        -> Result<Vec<SchemeManagerIdentifier>, ClientStateError>;

    fn preferences(&self) -> Result<Preferences, ClientStateError>;

    /// Both enrollment sets.
    ///
    /// The default performs two independent reads; a concurrent enrollment
    /// between them can produce a torn status. Implementations that can read
    /// both sets under one guard should override this.
    fn enrollment_status(&self) -> Result<EnrollmentStatus, ClientStateError> {
        Ok(EnrollmentStatus {
            enrolled_scheme_manager_ids: self.enrolled_scheme_managers()?,
            unenrolled_scheme_manager_ids: self.unenrolled_scheme_managers()?,
        })
    }
}

/// Serialized client state, as stored in a state file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientSnapshot {
    #[serde(default)]
    pub configuration: Configuration,

    #[serde(default)]
    pub credentials: CredentialInfoList,

    /// Scheme managers whose keyshare server the client is enrolled with
    #[serde(default)]
    pub keyshare_enrollments: BTreeSet<SchemeManagerIdentifier>,

    #[serde(default)]
    pub preferences: Preferences,
}

struct ClientInner {
    configuration: Arc<Configuration>,
    credentials: CredentialInfoList,
    keyshare_enrollments: BTreeSet<SchemeManagerIdentifier>,
    preferences: Preferences,
}

impl ClientInner {
    fn enrolled(&self) -> Vec<SchemeManagerIdentifier> {
        self.keyshare_enrollments.iter().cloned().collect()
    }

    fn unenrolled(&self) -> Vec<SchemeManagerIdentifier> {
        self.configuration
            .distributed_scheme_managers()
            .filter(|id| !self.keyshare_enrollments.contains(*id))
            .cloned()
            .collect()
    }
}

/// In-memory client state behind a read-write lock
pub struct InMemoryClient {
    inner: RwLock<ClientInner>,
}

impl InMemoryClient {
    pub fn new(configuration: Configuration) -> Self {
        Self::from_snapshot(ClientSnapshot {
            configuration,
            ..Default::default()
        })
    }

    pub fn from_snapshot(snapshot: ClientSnapshot) -> Self {
        Self {
            inner: RwLock::new(ClientInner {
                configuration: Arc::new(snapshot.configuration),
                credentials: snapshot.credentials,
                keyshare_enrollments: snapshot.keyshare_enrollments,
                preferences: snapshot.preferences,
            }),
        }
    }

    /// Load client state from a JSON state file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientStateError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| ClientStateError::Load(format!("{}: {}", path.display(), e)))?;
        let snapshot: ClientSnapshot = serde_json::from_str(&data)
            .map_err(|e| ClientStateError::Load(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            path = %path.display(),
            credentials = snapshot.credentials.len(),
            "loaded client state"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn set_configuration(&self, configuration: Configuration) -> Result<(), ClientStateError> {
        self.write()?.configuration = Arc::new(configuration);
        Ok(())
    }

    pub fn add_credential(&self, credential: CredentialInfo) -> Result<(), ClientStateError> {
        self.write()?.credentials.push(credential);
        Ok(())
    }

    /// Remove every held instance of a credential type; returns how many were removed
    pub fn remove_credential(
        &self,
        id: &CredentialTypeIdentifier,
    ) -> Result<usize, ClientStateError> {
        let mut inner = self.write()?;
        let before = inner.credentials.len();
        inner.credentials.retain(|c| &c.identifier() != id);
        Ok(before - inner.credentials.len())
    }

    /// Record a keyshare enrollment with a distributed scheme manager
    pub fn enroll(&self, id: &SchemeManagerIdentifier) -> Result<(), ClientStateError> {
        let mut inner = self.write()?;
        let scheme_manager = inner.configuration.require_scheme_manager(id)?;
        if !scheme_manager.is_distributed() {
            return Err(ClientStateError::NotDistributed(id.to_string()));
        }
        inner.keyshare_enrollments.insert(id.clone());
        Ok(())
    }

    pub fn unenroll(&self, id: &SchemeManagerIdentifier) -> Result<bool, ClientStateError> {
        Ok(self.write()?.keyshare_enrollments.remove(id))
    }

    pub fn set_preferences(&self, preferences: Preferences) -> Result<(), ClientStateError> {
        self.write()?.preferences = preferences;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ClientInner>, ClientStateError> {
        self.inner
            .read()
            .map_err(|e| ClientStateError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ClientInner>, ClientStateError> {
        self.inner
            .write()
            .map_err(|e| ClientStateError::Unavailable(e.to_string()))
    }
}

impl Default for InMemoryClient {
    fn default() -> Self {
        Self::from_snapshot(ClientSnapshot::default())
    }
}

impl ClientState for InMemoryClient {
    fn configuration(&self) -> Result<Arc<Configuration>, ClientStateError> {
        Ok(Arc::clone(&self.read()?.configuration))
    }

    fn credential_info_list(&self) -> Result<CredentialInfoList, ClientStateError> {
        Ok(self.read()?.credentials.clone())
    }

    fn enrolled_scheme_managers(&self) -> Result<Vec<SchemeManagerIdentifier>, ClientStateError> {
        Ok(self.read()?.enrolled())
    }

    fn unenrolled_scheme_managers(
        &self,
    ) -> Result<Vec<SchemeManagerIdentifier>, ClientStateError> {
        Ok(self.read()?.unenrolled())
    }

    fn preferences(&self) -> Result<Preferences, ClientStateError> {
        Ok(self.read()?.preferences.clone())
    }

    /// Both sets come from the same read guard, so they are always disjoint
    fn enrollment_status(&self) -> Result<EnrollmentStatus, ClientStateError> {
        let inner = self.read()?;
        Ok(EnrollmentStatus {
            enrolled_scheme_manager_ids: inner.enrolled(),
            unenrolled_scheme_manager_ids: inner.unenrolled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use lumen_core::SchemeManager;

    fn configuration() -> Configuration {
        let mut configuration = Configuration::default();
        for (id, keyshare) in [
            ("pbdf", Some("https://keyshare.example.org")),
            ("irma-demo", None),
            ("other", Some("https://keyshare.other.example")),
        ] {
            configuration.scheme_managers.insert(
                SchemeManagerIdentifier::new(id),
                SchemeManager {
                    id: id.to_string(),
                    keyshare_server: keyshare.map(str::to_string),
                    ..Default::default()
                },
            );
        }
        configuration
    }

    #[test]
    fn test_enrollment_sets() {
        let client = InMemoryClient::new(configuration());
        client.enroll(&SchemeManagerIdentifier::new("pbdf")).unwrap();

        let status = client.enrollment_status().unwrap();
        assert_eq!(
            status.enrolled_scheme_manager_ids,
            vec![SchemeManagerIdentifier::new("pbdf")]
        );
        assert_eq!(
            status.unenrolled_scheme_manager_ids,
            vec![SchemeManagerIdentifier::new("other")]
        );
    }

    #[test]
    fn test_enroll_rejects_unknown_and_non_distributed() {
        let client = InMemoryClient::new(configuration());

        assert!(matches!(
            client.enroll(&SchemeManagerIdentifier::new("missing")),
            Err(ClientStateError::Domain(LumenError::UnknownSchemeManager(_)))
        ));
        assert!(matches!(
            client.enroll(&SchemeManagerIdentifier::new("irma-demo")),
            Err(ClientStateError::NotDistributed(_))
        ));
    }

    #[test]
    fn test_unenroll() {
        let client = InMemoryClient::new(configuration());
        let pbdf = SchemeManagerIdentifier::new("pbdf");
        client.enroll(&pbdf).unwrap();

        assert!(client.unenroll(&pbdf).unwrap());
        assert!(client.enrolled_scheme_managers().unwrap().is_empty());
        assert_eq!(client.unenrolled_scheme_managers().unwrap().len(), 2);
    }

    #[test]
    fn test_configuration_read_is_stable_copy() {
        let client = InMemoryClient::new(configuration());
        let before = client.configuration().unwrap();

        client.set_configuration(Configuration::default()).unwrap();

        assert_eq!(before.scheme_managers.len(), 3);
        assert!(client.configuration().unwrap().scheme_managers.is_empty());
    }

    #[test]
    fn test_load_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"Preferences": {"DeveloperMode": true}, "KeyshareEnrollments": ["pbdf"]}"#,
        )
        .unwrap();

        let client = InMemoryClient::load(&path).unwrap();
        assert!(client.preferences().unwrap().developer_mode);
        assert_eq!(client.enrolled_scheme_managers().unwrap().len(), 1);
        assert!(client.credential_info_list().unwrap().is_empty());
    }

    fn held(id: &str, hash: &str) -> CredentialInfo {
        CredentialInfo {
            id: id.to_string(),
            issuer_id: "gemeente".to_string(),
            scheme_manager_id: "pbdf".to_string(),
            signed_on: Utc::now(),
            expires: Utc::now() + Duration::days(30),
            attributes: Default::default(),
            hash: hash.to_string(),
            revoked: false,
        }
    }

    #[test]
    fn test_remove_credential() {
        let client = InMemoryClient::new(configuration());
        client.add_credential(held("address", "first")).unwrap();
        client.add_credential(held("email", "second")).unwrap();
        client.add_credential(held("address", "third")).unwrap();

        let address = CredentialTypeIdentifier::new("pbdf", "gemeente", "address");
        assert_eq!(client.remove_credential(&address).unwrap(), 2);
        assert_eq!(client.remove_credential(&address).unwrap(), 0);

        let remaining = client.credential_info_list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].hash, "second");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            InMemoryClient::load(dir.path().join("missing.json")),
            Err(ClientStateError::Load(_))
        ));
    }
}
