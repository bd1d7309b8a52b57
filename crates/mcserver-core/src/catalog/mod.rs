//! Version catalog: the remote manifest of game versions
//!
//! This module provides:
//! - Manifest and detail document types
//! - The release filter used for the version prompt
//! - Download URL resolution for a chosen version

pub mod client;
pub mod manifest;

pub use client::{HttpManifestClient, ManifestClient};
pub use manifest::{
    is_release_id, release_options, ManifestVersion, VersionDetail, VersionManifest,
    VersionOption,
};

use crate::error::{ScaffoldError, ScaffoldResult};
use tracing::debug;

/// Lists release versions and resolves their server download URLs
pub struct VersionCatalog {
    client: Box<dyn ManifestClient>,
    option_limit: usize,
}

impl VersionCatalog {
    pub fn new(client: Box<dyn ManifestClient>, option_limit: usize) -> Self {
        Self {
            client,
            option_limit,
        }
    }

    /// Release versions offered to the user, newest first
    pub async fn list_version_options(&self) -> ScaffoldResult<Vec<VersionOption>> {
        let manifest = self.client.fetch_manifest().await?;
        let options = release_options(&manifest, self.option_limit);
        debug!(
            total = manifest.versions.len(),
            offered = options.len(),
            "filtered release versions"
        );
        Ok(options)
    }

    /// Resolve a version id to its server artifact URL.
    ///
    /// Fetches the manifest again and then the version's detail document.
    pub async fn resolve_download_url(&self, version_id: &str) -> ScaffoldResult<String> {
        let manifest = self.client.fetch_manifest().await?;
        let entry = manifest
            .find_version(version_id)
            .ok_or_else(|| ScaffoldError::VersionNotFound(version_id.to_string()))?;

        let detail = self.client.fetch_version_detail(&entry.url).await?;
        let server = detail
            .downloads
            .server
            .ok_or_else(|| ScaffoldError::MissingServerDownload(version_id.to_string()))?;

        debug!(version = version_id, url = %server.url, "resolved server download");
        Ok(server.url)
    }
}
