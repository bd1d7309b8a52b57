//! Minecraft server scaffolding library
//!
//! This library provides the core functionality behind `create-minecraft`:
//! pick a server type and a game version, download the server jar, run it
//! once to generate its configuration, accept the EULA and write a launcher.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Version catalog, project directory creation, process runner
//! - **Layer 2: Workflow Orchestration** - `TemplateRegistry` and per-template `ProvisionWorkflow`s
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! Workflows only talk to the outside world through three ports:
//! [`catalog::ManifestClient`], [`runtime::CommandRunner`] and
//! [`interaction::Interaction`]. No step changes the process working
//! directory; the project root is passed explicitly.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and the `run` entry point
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use mcserver_core::{create_server, CreateArgs, ProvisionEnv, VersionCatalog};
//!
//! let catalog = VersionCatalog::new(Box::new(HttpManifestClient::from_config(&config)?), 5);
//! let env = ProvisionEnv { config: &config, interaction: &my_ui, runner: &SystemRunner, catalog: &catalog, base_dir };
//! let ctx = create_server(&env, CreateArgs::default()).await?;
//! ```

pub mod catalog;
pub mod context;
pub mod create;
pub mod error;
pub mod interaction;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{HttpManifestClient, ManifestClient, VersionCatalog, VersionOption};
pub use context::{ProvisionContext, ProvisionEnv, ServerRequest};
pub use create::{create_server, CreateArgs};
pub use error::{ScaffoldError, ScaffoldResult};
pub use interaction::Interaction;
pub use product::ProductConfig;
pub use runtime::{CommandRunner, SystemRunner};
pub use templates::{ProvisionWorkflow, TemplateKind, TemplateRegistry};

#[cfg(feature = "tui")]
pub use tui::run;
