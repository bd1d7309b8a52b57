//! create-minecraft - Scaffold a local Minecraft server

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use mcserver_core::{CreateArgs, ProductConfig};
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// create-minecraft product configuration
#[derive(Clone)]
pub struct MinecraftConfig;

impl ProductConfig for MinecraftConfig {
    fn name(&self) -> &'static str {
        "create-minecraft"
    }

    fn display_name(&self) -> &'static str {
        "Create a Minecraft server"
    }

    fn default_manifest_url(&self) -> &'static str {
        "https://launchermeta.mojang.com/mc/game/version_manifest.json"
    }

    fn manifest_url_env(&self) -> &'static str {
        "CREATE_MINECRAFT_MANIFEST_URL"
    }

    fn eula_url(&self) -> &'static str {
        "https://www.minecraft.net/en-us/eula"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-minecraft")]
#[command(about = "CLI for scaffolding local Minecraft servers")]
pub struct Args {
    /// Directory to create the server in
    #[arg(value_name = "SERVER_NAME")]
    pub server_name: Option<String>,

    /// Server type to create (e.g. vanilla)
    #[arg(short = 't', long = "type")]
    pub server_type: Option<String>,

    /// Game version to install (e.g. 1.20.1)
    #[arg(long)]
    pub version: Option<String>,

    /// Accept the Minecraft EULA without asking
    #[arg(long)]
    pub eula: bool,

    /// Print diagnostic logs to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            server_name: args.server_name,
            template: args.server_type,
            version: args.version,
            eula: args.eula.then_some(true),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt ends the run like any other cancellation
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let config = MinecraftConfig;
    let result = mcserver_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(_) => Ok(()),
        // Cancellation ends the run without a message
        Err(e) if e.is_cancelled() => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
}
