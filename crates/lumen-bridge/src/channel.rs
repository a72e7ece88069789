//! Host delivery channels
//!
//! A channel performs the host-side hand-off of one event. `deliver` returns
//! once the hand-off is complete; what the host does afterwards is its own
//! business.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::event::Event;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Event rejected by host: {0}")]
    Rejected(String),

    #[error("Channel closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Host-side delivery of events
pub trait DeliveryChannel: Send + Sync {
    fn deliver(&self, event: &Event) -> Result<(), DeliveryError>;
}

impl<F> DeliveryChannel for F
where
    F: Fn(&Event) -> Result<(), DeliveryError> + Send + Sync,
{
    fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        self(event)
    }
}

/// Keeps delivered events in memory, in delivery order
///
/// A panic while the lock is held does not lose what was recorded: every
/// access recovers the poisoned list and keeps recording.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    events: Mutex<Vec<Event>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events delivered so far
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(Event::name).collect()
    }

    /// Drain and return the delivered events
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeliveryChannel for RecordingChannel {
    fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        self.lock().push(event.clone());
        Ok(())
    }
}

/// Writes one JSON envelope per line and flushes before returning
pub struct JsonLinesChannel<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesChannel<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl JsonLinesChannel<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> DeliveryChannel for JsonLinesChannel<W> {
    fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        let line = serde_json::to_string(&event.to_envelope()?)?;
        let mut writer = self.writer.lock().map_err(|_| DeliveryError::Closed)?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}
