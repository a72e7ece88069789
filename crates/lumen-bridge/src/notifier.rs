//! Notification producers
//!
//! Each producer reads client state at call time, builds one event and
//! dispatches it. Producers keep no state between calls.
//!
//! [`Notifier::notify_configuration`] is a chain: it emits the configuration
//! snapshot and then the credential list, because credential display depends
//! on the configuration the host just received. If the snapshot cannot be
//! built or delivered, the credential list is not sent.

use std::sync::Arc;

use crate::client::ClientState;
use crate::dispatcher::EventDispatcher;
use crate::error::NotifyError;
use crate::event::Event;
use crate::logo::LogoResolver;
use crate::projector::project_configuration;

/// Build a configuration event from the current configuration
pub fn configuration_event(
    client: &dyn ClientState,
    logos: &dyn LogoResolver,
) -> Result<Event, NotifyError> {
    let configuration = client.configuration()?;
    let snapshot = project_configuration(&configuration, logos).map_err(|err| {
        tracing::warn!(error = %err, "configuration projection failed");
        err
    })?;
    Ok(Event::Configuration(snapshot))
}

/// Build a credentials event from the held credential list
pub fn credentials_event(client: &dyn ClientState) -> Result<Event, NotifyError> {
    Ok(Event::Credentials(client.credential_info_list()?))
}

/// Build an enrollment status event
pub fn enrollment_status_event(client: &dyn ClientState) -> Result<Event, NotifyError> {
    Ok(Event::EnrollmentStatus(client.enrollment_status()?))
}

/// Build a preferences event; the preferences are passed through unchanged
pub fn preferences_event(client: &dyn ClientState) -> Result<Event, NotifyError> {
    Ok(Event::Preferences(client.preferences()?))
}

/// Reads client state and publishes it through a dispatcher
#[derive(Clone)]
pub struct Notifier {
    client: Arc<dyn ClientState>,
    logos: Arc<dyn LogoResolver>,
    dispatcher: EventDispatcher,
}

impl Notifier {
    pub fn new(
        client: Arc<dyn ClientState>,
        logos: Arc<dyn LogoResolver>,
        dispatcher: EventDispatcher,
    ) -> Self {
        Self {
            client,
            logos,
            dispatcher,
        }
    }

    /// Emit the configuration snapshot, then the credential list
    pub fn notify_configuration(&self) -> Result<(), NotifyError> {
        self.notify_configuration_snapshot()?;
        self.notify_credentials()
    }

    /// Emit only the configuration snapshot
    pub fn notify_configuration_snapshot(&self) -> Result<(), NotifyError> {
        tracing::info!("notifying configuration");
        let event = configuration_event(self.client.as_ref(), self.logos.as_ref())?;
        self.dispatcher.dispatch(event)
    }

    pub fn notify_credentials(&self) -> Result<(), NotifyError> {
        let event = credentials_event(self.client.as_ref())?;
        if let Event::Credentials(credentials) = &event {
            tracing::info!(count = credentials.len(), "notifying credentials");
        }
        self.dispatcher.dispatch(event)
    }

    pub fn notify_enrollment_status(&self) -> Result<(), NotifyError> {
        tracing::info!("notifying enrollment status");
        let event = enrollment_status_event(self.client.as_ref())?;
        self.dispatcher.dispatch(event)
    }

    pub fn notify_preferences(&self) -> Result<(), NotifyError> {
        tracing::info!("notifying preferences");
        let event = preferences_event(self.client.as_ref())?;
        self.dispatcher.dispatch(event)
    }
}
