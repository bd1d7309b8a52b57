//! License marker and launcher scripts

use crate::error::{ScaffoldError, ScaffoldResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the downloaded server artifact
pub const SERVER_JAR: &str = "server.jar";

pub const EULA_FILE: &str = "eula.txt";
pub const EULA_CONTENTS: &str = "eula=true";

pub const BATCH_LAUNCHER: &str = "start.bat";
pub const LAUNCH_COMMAND: &str = "java -jar server.jar --nogui";

pub const SHELL_LAUNCHER: &str = "start.sh";

/// The launcher a user should run on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    Batch,
    Shell,
}

impl Launcher {
    pub fn for_host() -> Self {
        if cfg!(windows) {
            Launcher::Batch
        } else {
            Launcher::Shell
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Launcher::Batch => BATCH_LAUNCHER,
            Launcher::Shell => SHELL_LAUNCHER,
        }
    }

    /// Command that starts the server from inside the project directory
    pub fn invocation(&self) -> String {
        match self {
            Launcher::Batch => BATCH_LAUNCHER.to_string(),
            Launcher::Shell => format!("./{}", SHELL_LAUNCHER),
        }
    }
}

async fn write_file(path: PathBuf, contents: &str) -> ScaffoldResult<()> {
    fs::write(&path, contents)
        .await
        .map_err(|e| ScaffoldError::io(&path, e))
}

/// Record acceptance of the license in the project root
pub async fn write_license_marker(root: &Path) -> ScaffoldResult<()> {
    write_file(root.join(EULA_FILE), EULA_CONTENTS).await
}

/// Write `start.bat`, plus an executable `start.sh` on Unix.
/// Returns the launcher meant for this host.
pub async fn write_launchers(root: &Path) -> ScaffoldResult<Launcher> {
    write_file(root.join(BATCH_LAUNCHER), LAUNCH_COMMAND).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let path = root.join(SHELL_LAUNCHER);
        write_file(path.clone(), &format!("#!/bin/sh\n{}\n", LAUNCH_COMMAND)).await?;
        fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
    }

    Ok(Launcher::for_host())
}
