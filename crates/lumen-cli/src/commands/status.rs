//! Status command - summarize the client state

use anyhow::Result;
use console::style;
use lumen_bridge::{BridgeConfig, ClientState};

pub fn show(config: &BridgeConfig) -> Result<()> {
    let client = super::load_client(config)?;
    let configuration = client.configuration()?;
    let credentials = client.credential_info_list()?;
    let enrollment = client.enrollment_status()?;
    let preferences = client.preferences()?;

    println!("\n{}", style("Lumen Status").cyan().bold());
    println!();

    println!("{}", style("Version").bold().underlined());
    println!("  lumen-cli:       {}", env!("CARGO_PKG_VERSION"));
    println!(
        "  State file:      {}",
        config
            .state_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not set (empty client)".to_string())
    );
    println!();

    let loaded = configuration
        .credential_types
        .values()
        .filter(|ct| ct.is_some())
        .count();

    println!("{}", style("Configuration").bold().underlined());
    println!("  Scheme managers: {}", configuration.scheme_managers.len());
    println!("  Issuers:         {}", configuration.issuers.len());
    println!(
        "  Credential types: {} ({} not loaded)",
        configuration.credential_types.len(),
        configuration.credential_types.len() - loaded
    );
    println!("  Assets path:     {}", configuration.path.display());
    println!();

    println!("{}", style("Credentials").bold().underlined());
    for credential in &credentials {
        let marker = if credential.revoked {
            style("revoked").red()
        } else if credential.is_expired() {
            style("expired").yellow()
        } else {
            style("valid").green()
        };
        println!("  • {:<40} {}", credential.identifier().to_string(), marker);
    }
    if credentials.is_empty() {
        println!("  {}", style("none").dim());
    }
    println!();

    println!("{}", style("Enrollment").bold().underlined());
    for id in &enrollment.enrolled_scheme_manager_ids {
        println!("  • {:<20} {}", id.to_string(), style("enrolled").green());
    }
    for id in &enrollment.unenrolled_scheme_manager_ids {
        println!("  • {:<20} {}", id.to_string(), style("not enrolled").yellow());
    }
    println!();

    println!("{}", style("Preferences").bold().underlined());
    println!("  Developer mode:  {}", preferences.developer_mode);

    Ok(())
}
