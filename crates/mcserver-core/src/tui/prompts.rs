//! Interactive entry point using cliclack

use super::clack::ClackInteraction;
use crate::catalog::{HttpManifestClient, VersionCatalog};
use crate::context::{ProvisionContext, ProvisionEnv};
use crate::create::{create_server, CreateArgs};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::interaction::Interaction;
use crate::product::ProductConfig;
use crate::runtime::{check, SystemRunner};
use colored::Colorize;

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cli_version: &str,
) -> ScaffoldResult<ProvisionContext> {
    println!(
        "{}",
        format!("\nusing {} version {}\n", config.name(), cli_version).dimmed()
    );
    cliclack::intro(config.display_name()).map_err(ScaffoldError::Terminal)?;

    let interaction = ClackInteraction::new();
    report_tools(config, &interaction)?;

    let catalog = VersionCatalog::new(
        Box::new(HttpManifestClient::from_config(config)?),
        config.version_option_limit(),
    );
    let base_dir = std::env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;

    let env = ProvisionEnv {
        config,
        interaction: &interaction,
        runner: &SystemRunner,
        catalog: &catalog,
        base_dir,
    };

    create_server(&env, args).await
}

/// Advisory check for java and curl
fn report_tools<C: ProductConfig>(config: &C, interaction: &dyn Interaction) -> ScaffoldResult<()> {
    for tool in check::check_tools(config.java_program(), config.download_program()) {
        if tool.available {
            interaction.info(&format!(
                "{} installed ({})",
                tool.name,
                tool.version.as_deref().unwrap_or("unknown")
            ))?;
        } else {
            interaction.warn(&format!(
                "{} is not installed. Setup will fail at the step that needs it.",
                tool.name
            ))?;
        }
    }
    Ok(())
}
