//! Vanilla server workflow
//!
//! Stages run strictly in order: scaffold, pick a version, resolve its
//! download, download, first run, license gate, summary. Any failure ends the
//! run and leaves earlier side effects on disk.

use super::files::{self, Launcher, SERVER_JAR};
use super::ProvisionWorkflow;
use crate::catalog::VersionOption;
use crate::context::{ProvisionContext, ProvisionEnv, ResolvedVersion, ServerRequest};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::interaction::{Interaction, SelectOption};
use crate::runtime::process::CommandSpec;
use crate::scaffold;
use async_trait::async_trait;
use colored::Colorize;
use std::future::Future;
use tracing::{debug, info};

/// The plain Mojang server jar
#[derive(Debug, Default, Clone, Copy)]
pub struct VanillaWorkflow;

#[async_trait]
impl ProvisionWorkflow for VanillaWorkflow {
    async fn run(
        &self,
        env: &ProvisionEnv<'_>,
        request: ServerRequest,
    ) -> ScaffoldResult<ProvisionContext> {
        let server =
            scaffold::create_project_directory(env.base_dir(), &request.server_name).await?;
        info!(path = %server.path.display(), "project directory ready");

        let version = select_version(env, &request).await?;

        let url = with_progress(
            env.interaction,
            &format!("Resolving server download for {}...", version),
            "Server download resolved",
            env.catalog.resolve_download_url(&version),
        )
        .await?;

        let mut ctx = ProvisionContext {
            server,
            version: ResolvedVersion { name: version, url },
            args: request,
            eula_accepted: false,
        };

        env.interaction
            .step(&format!("Continue with {}", ctx.version.name))?;
        download(env, &ctx).await?;
        configure(env, &ctx).await?;

        ctx.eula_accepted = offer_eula(env, &ctx)?;
        let launcher = if ctx.eula_accepted {
            files::write_license_marker(&ctx.server.path).await?;
            env.interaction
                .section("Creating launch script", Some("Step 4 of 4"))?;
            let launcher = files::write_launchers(&ctx.server.path).await?;
            env.interaction
                .success(&format!("Created {}", launcher.file_name()))?;
            Some(launcher)
        } else {
            None
        };

        print_summary(env, &ctx, launcher)?;
        Ok(ctx)
    }
}

/// Run `fut` behind a spinner, closing it on both outcomes
async fn with_progress<T, F>(
    interaction: &dyn Interaction,
    start: &str,
    done: &str,
    fut: F,
) -> ScaffoldResult<T>
where
    F: Future<Output = ScaffoldResult<T>> + Send,
{
    interaction.start_progress(start);
    match fut.await {
        Ok(value) => {
            interaction.stop_progress(done);
            Ok(value)
        }
        Err(e) => {
            interaction.stop_progress("Failed");
            Err(e)
        }
    }
}

/// Pick a version from the offered releases, or validate a pre-supplied one
async fn select_version(env: &ProvisionEnv<'_>, request: &ServerRequest) -> ScaffoldResult<String> {
    let options: Vec<VersionOption> = with_progress(
        env.interaction,
        "Loading versions...",
        "Versions loaded",
        env.catalog.list_version_options(),
    )
    .await?;

    let version = match &request.version {
        Some(version) => {
            env.interaction.info(&format!("Using version {}", version))?;
            version.clone()
        }
        None => {
            if options.is_empty() {
                return Err(ScaffoldError::NoVersions);
            }
            let items: Vec<SelectOption> = options
                .iter()
                .map(|o| SelectOption::new(o.id.clone(), o.id.clone()))
                .collect();
            env.interaction
                .select("Which version do you want to use?", &items, None)?
        }
    };

    if !options.iter().any(|o| o.id == version) {
        return Err(ScaffoldError::InvalidVersion(version));
    }

    debug!(%version, "version selected");
    Ok(version)
}

async fn download(env: &ProvisionEnv<'_>, ctx: &ProvisionContext) -> ScaffoldResult<()> {
    let spec = CommandSpec::new(env.config.download_program(), &ctx.server.path)
        .arg("--silent")
        .arg("-o")
        .arg(SERVER_JAR)
        .arg(ctx.version.url.clone());

    with_progress(
        env.interaction,
        &format!("Downloading {}...", SERVER_JAR),
        &format!("Downloaded {}", SERVER_JAR),
        env.runner.run(&spec),
    )
    .await?;
    Ok(())
}

/// First headless run; the server writes its default configuration and exits
async fn configure(env: &ProvisionEnv<'_>, ctx: &ProvisionContext) -> ScaffoldResult<()> {
    env.interaction
        .section("Configuring your server", Some("Step 2 of 4"))?;

    let spec = CommandSpec::new(env.config.java_program(), &ctx.server.path)
        .arg("-jar")
        .arg(SERVER_JAR)
        .arg("--nogui")
        .captured();

    let output = with_progress(
        env.interaction,
        "Running the server once...",
        "Server configured",
        env.runner.run(&spec),
    )
    .await?;
    debug!(lines = output.lines().count(), "first run finished");
    Ok(())
}

fn offer_eula(env: &ProvisionEnv<'_>, ctx: &ProvisionContext) -> ScaffoldResult<bool> {
    env.interaction
        .section("Accepting the EULA", Some("Step 3 of 4"))?;

    match ctx.args.eula {
        Some(accepted) => {
            env.interaction.info(if accepted {
                "EULA accepted via --eula"
            } else {
                "EULA not accepted"
            })?;
            Ok(accepted)
        }
        None => env.interaction.confirm(
            &format!(
                "Do you accept the Minecraft EULA at {}?",
                env.config.eula_url().blue()
            ),
            false,
        ),
    }
}

fn print_summary(
    env: &ProvisionEnv<'_>,
    ctx: &ProvisionContext,
    launcher: Option<Launcher>,
) -> ScaffoldResult<()> {
    let dir = ctx.server.relative_path.display();

    match launcher {
        Some(launcher) => {
            env.interaction.success(&format!(
                "{} {} {}",
                " SERVER CREATED ".black().on_green(),
                "Run your server with".dimmed(),
                format!("cd {} && {}", dir, launcher.invocation()).blue()
            ))?;
        }
        None => {
            env.interaction.success(&format!(
                "{} {}",
                " SERVER CREATED ".black().on_green(),
                format!("in {}", dir).dimmed()
            ))?;
            env.interaction.warn(&format!(
                "The server will not start until the EULA is accepted. Set {} in {}/{}, then run {}",
                files::EULA_CONTENTS,
                dir,
                files::EULA_FILE,
                files::LAUNCH_COMMAND
            ))?;
        }
    }

    env.interaction.outro("See you again soon!")
}
