//! Project directory creation
//!
//! The process working directory is never changed. Callers get the project
//! root back and thread it through every later step.

use crate::context::ServerLocation;
use crate::error::{ScaffoldError, ScaffoldResult};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolve a user-supplied server name against `base`.
///
/// Absolute names are kept; `.` and `..` are removed lexically.
pub fn resolve_server_path(base: &Path, server_name: &str) -> PathBuf {
    let joined = base.join(server_name);
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Fail with `DirectoryExists` if the name already points at something on disk
pub fn ensure_available(base: &Path, server_name: &str) -> ScaffoldResult<PathBuf> {
    let path = resolve_server_path(base, server_name);
    if path.exists() {
        return Err(ScaffoldError::DirectoryExists {
            path: PathBuf::from(server_name),
        });
    }
    Ok(path)
}

/// Create the project directory (and any missing parents).
///
/// The existence check here is authoritative: the prompt-time check may be
/// stale by the time the workflow starts.
pub async fn create_project_directory(
    base: &Path,
    server_name: &str,
) -> ScaffoldResult<ServerLocation> {
    let path = ensure_available(base, server_name)?;
    create_fresh_dir(&path, server_name).await?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| server_name.to_string());
    let relative_path = relative_to(&path, base);

    debug!(path = %path.display(), "created project directory");

    Ok(ServerLocation {
        name,
        path,
        relative_path,
    })
}

/// Parents may already exist; the final segment must not
async fn create_fresh_dir(path: &Path, server_name: &str) -> ScaffoldResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io(parent, e))?;
    }

    fs::create_dir(path).await.map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            ScaffoldError::DirectoryExists {
                path: PathBuf::from(server_name),
            }
        } else {
            ScaffoldError::io(path, e)
        }
    })
}

/// Lexical path from `base` to `path`, walking up with `..` where needed.
///
/// Paths on different roots come back unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = path.components().collect();
    let from: Vec<Component> = base.components().collect();

    if target.first() != from.first() {
        return path.to_path_buf();
    }

    let common = target
        .iter()
        .zip(from.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_relative_and_dotted_names() {
        let base = Path::new("/home/steve");
        assert_eq!(
            resolve_server_path(base, "srv"),
            PathBuf::from("/home/steve/srv")
        );
        assert_eq!(
            resolve_server_path(base, "./a/../srv"),
            PathBuf::from("/home/steve/srv")
        );
        assert_eq!(
            resolve_server_path(base, "../srv"),
            PathBuf::from("/home/srv")
        );
    }

    #[test]
    fn test_resolve_absolute_name() {
        let base = Path::new("/home/steve");
        assert_eq!(
            resolve_server_path(base, "/opt/servers/srv"),
            PathBuf::from("/opt/servers/srv")
        );
    }

    #[tokio::test]
    async fn test_create_project_directory() {
        let base = tempdir().unwrap();
        let location = create_project_directory(base.path(), "srv").await.unwrap();

        assert_eq!(location.name, "srv");
        assert_eq!(location.path, base.path().join("srv"));
        assert_eq!(location.relative_path, PathBuf::from("srv"));
        assert!(location.path.is_dir());
    }

    #[tokio::test]
    async fn test_create_nested_directory() {
        let base = tempdir().unwrap();
        let location = create_project_directory(base.path(), "servers/survival")
            .await
            .unwrap();

        assert_eq!(location.name, "survival");
        assert_eq!(location.relative_path, PathBuf::from("servers/survival"));
        assert!(base.path().join("servers/survival").is_dir());
    }

    #[tokio::test]
    async fn test_second_create_fails() {
        let base = tempdir().unwrap();
        create_project_directory(base.path(), "srv").await.unwrap();

        let err = create_project_directory(base.path(), "srv")
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::DirectoryExists { .. }));
    }

    #[test]
    fn test_existing_file_is_not_available() {
        let base = tempdir().unwrap();
        std::fs::write(base.path().join("taken"), "x").unwrap();

        assert!(ensure_available(base.path(), "taken").is_err());
        assert!(ensure_available(base.path(), "free").is_ok());
    }

    #[test]
    fn test_relative_to() {
        let base = Path::new("/home/steve");
        assert_eq!(
            relative_to(Path::new("/home/steve/srv"), base),
            PathBuf::from("srv")
        );
        assert_eq!(
            relative_to(Path::new("/home/srv"), base),
            PathBuf::from("../srv")
        );
        assert_eq!(
            relative_to(Path::new("/opt/servers/srv"), base),
            PathBuf::from("../../opt/servers/srv")
        );
        assert_eq!(relative_to(base, base), PathBuf::from("."));
    }

    #[tokio::test]
    async fn test_create_outside_base_keeps_relative_path() {
        let root = tempdir().unwrap();
        let base = root.path().join("work");
        std::fs::create_dir(&base).unwrap();

        let location = create_project_directory(&base, "../srv").await.unwrap();

        assert_eq!(location.path, root.path().join("srv"));
        assert_eq!(location.relative_path, PathBuf::from("../srv"));
        assert!(location.path.is_dir());
    }

    #[tokio::test]
    async fn test_directory_appearing_late_is_not_reused() {
        let base = tempdir().unwrap();
        let path = base.path().join("srv");
        std::fs::create_dir(&path).unwrap();

        let err = create_fresh_dir(&path, "srv").await.unwrap_err();
        match err {
            ScaffoldError::DirectoryExists { path } => assert_eq!(path, PathBuf::from("srv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
