pub mod notify;
pub mod project;
pub mod status;

use anyhow::{Context, Result};
use lumen_bridge::{BridgeConfig, InMemoryClient};

/// Client state from the configured state file, or an empty client
pub fn load_client(config: &BridgeConfig) -> Result<InMemoryClient> {
    match &config.state_path {
        Some(path) => InMemoryClient::load(path)
            .with_context(|| format!("loading client state from {}", path.display())),
        None => {
            tracing::warn!("no state file given, using an empty client");
            Ok(InMemoryClient::default())
        }
    }
}
