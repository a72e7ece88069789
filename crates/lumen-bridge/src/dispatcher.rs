//! Event dispatch

use std::sync::Arc;

use crate::channel::DeliveryChannel;
use crate::error::NotifyError;
use crate::event::Event;

/// Hands events to the delivery channel, one call per event, in call order
///
/// There is no buffering and no retry: a failed hand-off is returned to the
/// caller as-is.
#[derive(Clone)]
pub struct EventDispatcher {
    channel: Arc<dyn DeliveryChannel>,
}

impl EventDispatcher {
    pub fn new(channel: Arc<dyn DeliveryChannel>) -> Self {
        Self { channel }
    }

    pub fn dispatch(&self, event: Event) -> Result<(), NotifyError> {
        tracing::debug!(event = event.name(), "dispatching event");
        self.channel.deliver(&event).map_err(|err| {
            tracing::warn!(event = event.name(), error = %err, "event delivery failed");
            NotifyError::Delivery(err)
        })
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{DeliveryError, RecordingChannel};
    use lumen_core::Preferences;

    #[test]
    fn test_dispatch_forwards_in_order() {
        let channel = Arc::new(RecordingChannel::new());
        let dispatcher = EventDispatcher::new(channel.clone());

        dispatcher
            .dispatch(Event::Preferences(Preferences::default()))
            .unwrap();
        dispatcher.dispatch(Event::Credentials(Vec::new())).unwrap();

        assert_eq!(channel.names(), vec!["PreferencesEvent", "CredentialsEvent"]);
    }

    #[test]
    fn test_delivery_error_is_surfaced() {
        let channel = |_: &Event| -> Result<(), DeliveryError> {
            Err(DeliveryError::Rejected("host not ready".to_string()))
        };
        let dispatcher = EventDispatcher::new(Arc::new(channel));

        let result = dispatcher.dispatch(Event::Credentials(Vec::new()));
        assert!(matches!(
            result,
            Err(NotifyError::Delivery(DeliveryError::Rejected(_)))
        ));
    }
}
