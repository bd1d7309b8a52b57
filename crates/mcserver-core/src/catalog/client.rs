//! Manifest fetching over HTTP
//!
//! Nothing is cached: every call goes back to the network.

use super::manifest::{VersionDetail, VersionManifest};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::product::ProductConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Source of the top-level manifest and the per-version detail documents
#[async_trait]
pub trait ManifestClient: Send + Sync {
    /// Fetch the top-level version manifest
    async fn fetch_manifest(&self) -> ScaffoldResult<VersionManifest>;

    /// Fetch the detail document a manifest entry points at
    async fn fetch_version_detail(&self, url: &str) -> ScaffoldResult<VersionDetail>;
}

/// Manifest client backed by reqwest
pub struct HttpManifestClient {
    manifest_url: Url,
    client: reqwest::Client,
}

impl HttpManifestClient {
    /// Create a new client with a custom user agent
    pub fn new(manifest_url: Url, user_agent: &str) -> Self {
        Self {
            manifest_url,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from a product config
    pub fn from_config<C: ProductConfig + ?Sized>(config: &C) -> ScaffoldResult<Self> {
        Ok(Self::new(config.manifest_url()?, config.user_agent()))
    }

    /// Manifest URL this client reads from
    pub fn manifest_url(&self) -> &Url {
        &self.manifest_url
    }

    /// GET a JSON document, separating transport failures from parse failures
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ScaffoldResult<T> {
        debug!(url, "fetching JSON document");

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| ScaffoldError::Network {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScaffoldError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ScaffoldError::Network {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ScaffoldError::ManifestParse {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ManifestClient for HttpManifestClient {
    async fn fetch_manifest(&self) -> ScaffoldResult<VersionManifest> {
        let manifest: VersionManifest = self.get_json(self.manifest_url.as_str()).await?;
        debug!(
            versions = manifest.versions.len(),
            "loaded version manifest"
        );
        Ok(manifest)
    }

    async fn fetch_version_detail(&self, url: &str) -> ScaffoldResult<VersionDetail> {
        self.get_json(url).await
    }
}
