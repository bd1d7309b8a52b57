//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to decide where versions come from, which
//! external programs do the downloading and the first run, and what the user
//! is told at the end.

use crate::error::{ScaffoldError, ScaffoldResult};
use url::Url;

/// Number of release versions offered in the version prompt.
///
/// The prompt layer has no pagination yet, so the list is cut short.
pub const DEFAULT_VERSION_OPTION_LIMIT: usize = 5;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Send + Sync {
    /// Internal product name (used for env vars and the user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL of the version manifest
    fn default_manifest_url(&self) -> &'static str;

    /// Environment variable name for overriding the manifest URL
    fn manifest_url_env(&self) -> &'static str;

    /// License text the user is asked to accept
    fn eula_url(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }

    /// Program used to download the server artifact
    fn download_program(&self) -> &'static str {
        "curl"
    }

    /// Program used to run the server artifact
    fn java_program(&self) -> &'static str {
        "java"
    }

    /// How many release versions the version prompt offers
    fn version_option_limit(&self) -> usize {
        DEFAULT_VERSION_OPTION_LIMIT
    }

    /// Manifest URL, honouring the environment override
    fn manifest_url(&self) -> ScaffoldResult<Url> {
        let url_str = std::env::var(self.manifest_url_env())
            .unwrap_or_else(|_| self.default_manifest_url().to_string());
        Url::parse(&url_str).map_err(|e| {
            ScaffoldError::InvalidConfig(format!("invalid manifest URL '{}': {}", url_str, e))
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Product used across the crate's tests
    pub struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "create-minecraft-test"
        }

        fn display_name(&self) -> &'static str {
            "Create a Minecraft server"
        }

        fn default_manifest_url(&self) -> &'static str {
            "https://launchermeta.example.com/mc/game/version_manifest.json"
        }

        fn manifest_url_env(&self) -> &'static str {
            "MCSERVER_CORE_TEST_MANIFEST_URL"
        }

        fn eula_url(&self) -> &'static str {
            "https://www.minecraft.net/en-us/eula"
        }
    }

    struct BrokenProduct;

    impl ProductConfig for BrokenProduct {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn display_name(&self) -> &'static str {
            "Broken"
        }

        fn default_manifest_url(&self) -> &'static str {
            "not a url"
        }

        fn manifest_url_env(&self) -> &'static str {
            "MCSERVER_CORE_BROKEN_MANIFEST_URL"
        }

        fn eula_url(&self) -> &'static str {
            "https://example.com/eula"
        }
    }

    #[test]
    fn test_default_manifest_url() {
        let url = TestProduct.manifest_url().unwrap();
        assert_eq!(url.host_str(), Some("launchermeta.example.com"));
    }

    #[test]
    fn test_invalid_manifest_url_is_config_error() {
        let err = BrokenProduct.manifest_url().unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfig(_)));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TestProduct.user_agent(), "create-minecraft-test");
        assert_eq!(TestProduct.version_option_limit(), 5);
        assert_eq!(TestProduct.java_program(), "java");
        assert_eq!(TestProduct.download_program(), "curl");
    }
}
