//! Credential type logo resolution
//!
//! A logo is not part of the stored credential type descriptor: it is looked
//! up against the configuration (which knows where scheme assets live) every
//! time a snapshot is projected. An empty string means "no logo".

use std::path::PathBuf;

use lumen_core::{Configuration, CredentialType};

use crate::config::BridgeConfig;

/// Resolves the display logo of a credential type
pub trait LogoResolver: Send + Sync {
    /// Logo reference for `credential_type`, or an empty string if there is none
    fn resolve(&self, credential_type: &CredentialType, configuration: &Configuration) -> String;
}

impl<F> LogoResolver for F
where
    F: Fn(&CredentialType, &Configuration) -> String + Send + Sync,
{
    fn resolve(&self, credential_type: &CredentialType, configuration: &Configuration) -> String {
        self(credential_type, configuration)
    }
}

/// Looks logos up in the scheme asset tree:
/// `<path>/<scheme manager>/<issuer>/<issues dir>/<credential type>/<logo file>`
#[derive(Debug, Clone)]
pub struct FilesystemLogoResolver {
    issues_directory: String,
    logo_file_name: String,
}

impl FilesystemLogoResolver {
    pub fn new(issues_directory: impl Into<String>, logo_file_name: impl Into<String>) -> Self {
        Self {
            issues_directory: issues_directory.into(),
            logo_file_name: logo_file_name.into(),
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.issues_directory.clone(), config.logo_file_name.clone())
    }

    /// Where the logo would live, whether or not it exists
    pub fn logo_path(
        &self,
        credential_type: &CredentialType,
        configuration: &Configuration,
    ) -> PathBuf {
        configuration
            .path
            .join(&credential_type.scheme_manager_id)
            .join(&credential_type.issuer_id)
            .join(&self.issues_directory)
            .join(&credential_type.id)
            .join(&self.logo_file_name)
    }
}

impl Default for FilesystemLogoResolver {
    fn default() -> Self {
        Self::from_config(&BridgeConfig::default())
    }
}

impl LogoResolver for FilesystemLogoResolver {
    fn resolve(&self, credential_type: &CredentialType, configuration: &Configuration) -> String {
        let path = self.logo_path(credential_type, configuration);
        match path.try_exists() {
            Ok(true) => path.to_string_lossy().into_owned(),
            // I/O errors are treated as a missing logo
            _ => String::new(),
        }
    }
}
