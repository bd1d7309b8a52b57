//! Run inputs, the accumulated provision context, and the collaborators a
//! workflow runs against

use crate::catalog::VersionCatalog;
use crate::interaction::Interaction;
use crate::product::ProductConfig;
use crate::runtime::process::CommandRunner;
use std::path::{Path, PathBuf};

/// Validated user input. Not modified once a workflow starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRequest {
    pub server_name: String,
    pub template: String,
    pub version: Option<String>,
    /// Pre-answered license prompt
    pub eula: Option<bool>,
}

/// Where the server lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLocation {
    pub name: String,
    /// Absolute project root
    pub path: PathBuf,
    /// Project root relative to the directory the tool was started in
    pub relative_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub name: String,
    /// Server artifact download URL
    pub url: String,
}

/// Everything a workflow resolved, handed to the summary at the end
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    pub server: ServerLocation,
    pub version: ResolvedVersion,
    pub args: ServerRequest,
    pub eula_accepted: bool,
}

/// Collaborators shared by every stage of a run
pub struct ProvisionEnv<'a> {
    pub config: &'a dyn ProductConfig,
    pub interaction: &'a dyn Interaction,
    pub runner: &'a dyn CommandRunner,
    pub catalog: &'a VersionCatalog,
    /// Directory relative server names resolve against
    pub base_dir: PathBuf,
}

impl ProvisionEnv<'_> {
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
