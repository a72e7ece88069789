//! Notify command - run one producer against the client state

use std::sync::Arc;

use anyhow::Result;
use lumen_bridge::{
    BridgeConfig, EventDispatcher, FilesystemLogoResolver, JsonLinesChannel, Notifier,
};

use crate::NotificationKind;

pub fn run(config: &BridgeConfig, kind: NotificationKind) -> Result<()> {
    let client = super::load_client(config)?;
    let notifier = Notifier::new(
        Arc::new(client),
        Arc::new(FilesystemLogoResolver::from_config(config)),
        EventDispatcher::new(Arc::new(JsonLinesChannel::stdout())),
    );

    match kind {
        NotificationKind::Configuration => notifier.notify_configuration()?,
        NotificationKind::ConfigurationOnly => notifier.notify_configuration_snapshot()?,
        NotificationKind::Credentials => notifier.notify_credentials()?,
        NotificationKind::Enrollment => notifier.notify_enrollment_status()?,
        NotificationKind::Preferences => notifier.notify_preferences()?,
    }

    Ok(())
}
