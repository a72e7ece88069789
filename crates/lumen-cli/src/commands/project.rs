//! Project command - print the configuration snapshot

use anyhow::Result;
use lumen_bridge::{project_configuration, BridgeConfig, ClientState, FilesystemLogoResolver};

pub fn run(config: &BridgeConfig) -> Result<()> {
    let client = super::load_client(config)?;
    let configuration = client.configuration()?;
    let snapshot =
        project_configuration(&configuration, &FilesystemLogoResolver::from_config(config))?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
