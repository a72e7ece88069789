//! Lumen Bridge
//!
//! Publishes point-in-time snapshots of the credential client's state to a
//! host (typically a UI layer) as typed events.
//!
//! The pieces, leaves first:
//! - [`logo`]: resolves the display logo of a credential type.
//! - [`projector`]: builds the configuration snapshot, decorating every
//!   credential type with its logo without touching the source configuration.
//! - [`channel`] and [`dispatcher`]: the host delivery boundary.
//! - [`notifier`]: the producers that read client state and dispatch events.

pub mod channel;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod logo;
pub mod notifier;
pub mod projector;

pub use channel::{DeliveryChannel, DeliveryError, JsonLinesChannel, RecordingChannel};
pub use client::{ClientSnapshot, ClientState, ClientStateError, InMemoryClient};
pub use config::BridgeConfig;
pub use dispatcher::EventDispatcher;
pub use error::NotifyError;
pub use event::{EnrollmentStatus, Event, EventEnvelope};
pub use logo::{FilesystemLogoResolver, LogoResolver};
pub use notifier::Notifier;
pub use projector::{project_configuration, ConfigurationSnapshot};
