//! Version manifest types and release filtering

use serde::{Deserialize, Serialize};

/// Top-level version manifest listing every published game version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Most recent release and snapshot ids
    #[serde(default)]
    pub latest: LatestVersions,

    /// Every version, newest first
    pub versions: Vec<ManifestVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestVersions {
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub snapshot: String,
}

/// A single entry in the manifest. Unknown fields (type, releaseTime, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestVersion {
    pub id: String,

    /// URL of the per-version detail document
    pub url: String,
}

impl VersionManifest {
    /// Find the entry whose id matches exactly
    pub fn find_version(&self, id: &str) -> Option<&ManifestVersion> {
        self.versions.iter().find(|v| v.id == id)
    }
}

/// Per-version detail document. Only the server download is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionDetail {
    #[serde(default)]
    pub downloads: VersionDownloads,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionDownloads {
    /// Missing for versions that predate the standalone server jar
    pub server: Option<DownloadArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadArtifact {
    pub url: String,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// A release version offered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOption {
    pub id: String,
    pub url: String,
}

/// Numbered releases only: a dot, no hyphen, no ASCII letters.
///
/// Snapshots (`23w13a`) and pre-releases (`1.20-pre1`) fail this check.
pub fn is_release_id(id: &str) -> bool {
    id.contains('.') && !id.contains('-') && !id.chars().any(|c| c.is_ascii_alphabetic())
}

/// Release entries in manifest order, truncated to `limit`
pub fn release_options(manifest: &VersionManifest, limit: usize) -> Vec<VersionOption> {
    manifest
        .versions
        .iter()
        .filter(|v| is_release_id(&v.id))
        .take(limit)
        .map(|v| VersionOption {
            id: v.id.clone(),
            url: v.url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(ids: &[&str]) -> VersionManifest {
        VersionManifest {
            latest: LatestVersions::default(),
            versions: ids
                .iter()
                .enumerate()
                .map(|(i, id)| ManifestVersion {
                    id: id.to_string(),
                    url: format!("U{}", i + 1),
                })
                .collect(),
        }
    }

    #[test]
    fn test_release_ids() {
        assert!(is_release_id("1.20.1"));
        assert!(is_release_id("1.8"));
        assert!(!is_release_id("23w13a"));
        assert!(!is_release_id("1.20-pre1"));
        assert!(!is_release_id("1.14.4 Pre-Release 1"));
        assert!(!is_release_id("b1.7.3"));
        assert!(!is_release_id("20"));
    }

    #[test]
    fn test_snapshots_and_prereleases_excluded() {
        let options = release_options(&manifest(&["1.20.1", "23w13a", "1.20-pre1"]), 5);
        assert_eq!(
            options,
            vec![VersionOption {
                id: "1.20.1".to_string(),
                url: "U1".to_string(),
            }]
        );
    }

    #[test]
    fn test_truncates_and_preserves_order() {
        let m = manifest(&[
            "1.21", "24w10a", "1.20.6", "1.20.5", "1.20.5-rc1", "1.20.4", "1.20.3", "1.20.2",
        ]);
        let ids: Vec<String> = release_options(&m, 5).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["1.21", "1.20.6", "1.20.5", "1.20.4", "1.20.3"]);
    }

    #[test]
    fn test_no_releases() {
        assert!(release_options(&manifest(&["23w13a", "1.20-rc1"]), 5).is_empty());
    }

    #[test]
    fn test_parse_manifest_ignores_extra_fields() {
        let json = r#"{
            "latest": {"release": "1.20.1", "snapshot": "23w31a"},
            "versions": [
                {"id": "23w31a", "type": "snapshot", "url": "https://example.com/23w31a.json", "time": "x"},
                {"id": "1.20.1", "type": "release", "url": "https://example.com/1.20.1.json"}
            ]
        }"#;
        let m: VersionManifest = serde_json::from_str(json).unwrap();
        assert_eq!(m.latest.release, "1.20.1");
        assert_eq!(m.versions.len(), 2);
        assert_eq!(
            m.find_version("1.20.1").map(|v| v.url.as_str()),
            Some("https://example.com/1.20.1.json")
        );
        assert!(m.find_version("1.20").is_none());
    }

    #[test]
    fn test_parse_manifest_without_latest() {
        let json = r#"{"versions": [{"id": "1.20.1", "url": "U1"}]}"#;
        let m: VersionManifest = serde_json::from_str(json).unwrap();
        assert!(m.latest.release.is_empty());
    }

    #[test]
    fn test_parse_version_detail() {
        let json = r#"{
            "id": "1.20.1",
            "downloads": {
                "client": {"url": "https://example.com/client.jar", "sha1": "a", "size": 1},
                "server": {"url": "https://example.com/server.jar", "sha1": "b", "size": 2}
            }
        }"#;
        let detail: VersionDetail = serde_json::from_str(json).unwrap();
        let server = detail.downloads.server.unwrap();
        assert_eq!(server.url, "https://example.com/server.jar");
        assert_eq!(server.size, Some(2));
    }

    #[test]
    fn test_parse_version_detail_without_server() {
        let json = r#"{"downloads": {"client": {"url": "https://example.com/client.jar"}}}"#;
        let detail: VersionDetail = serde_json::from_str(json).unwrap();
        assert!(detail.downloads.server.is_none());
    }
}
