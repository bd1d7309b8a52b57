//! Server templates
//!
//! This module provides:
//! - The registry mapping a template name to its provisioning workflow
//! - The vanilla workflow
//! - License marker and launcher script writers
//!
//! Adding a template means adding a `TemplateKind` variant, a registry entry,
//! and a `ProvisionWorkflow` implementation.

pub mod files;
pub mod vanilla;

pub use files::{write_launchers, write_license_marker, Launcher};
pub use vanilla::VanillaWorkflow;

use crate::context::{ProvisionContext, ProvisionEnv, ServerRequest};
use crate::error::{ScaffoldError, ScaffoldResult};
use async_trait::async_trait;

/// A provisioning workflow for one kind of server
#[async_trait]
pub trait ProvisionWorkflow: Send + Sync {
    /// Provision a server, returning what was resolved along the way
    async fn run(
        &self,
        env: &ProvisionEnv<'_>,
        request: ServerRequest,
    ) -> ScaffoldResult<ProvisionContext>;
}

/// Every template this build knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Vanilla,
}

static VANILLA: VanillaWorkflow = VanillaWorkflow;

impl TemplateKind {
    pub fn workflow(&self) -> &'static dyn ProvisionWorkflow {
        match self {
            TemplateKind::Vanilla => &VANILLA,
        }
    }
}

/// A registry entry
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    /// Key used by `--type`
    pub name: &'static str,
    /// Label shown in the type prompt
    pub label: &'static str,
    /// Hidden entries are never offered, only reachable by name
    pub hidden: bool,
    pub kind: TemplateKind,
}

const TEMPLATES: &[TemplateEntry] = &[TemplateEntry {
    name: "vanilla",
    label: "Vanilla",
    hidden: false,
    kind: TemplateKind::Vanilla,
}];

/// Lookup of templates by exact name
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn entries() -> &'static [TemplateEntry] {
        TEMPLATES
    }

    /// Entries that may be offered to the user
    pub fn visible() -> impl Iterator<Item = &'static TemplateEntry> {
        TEMPLATES.iter().filter(|t| !t.hidden)
    }

    /// Resolve a template name, failing with `UnknownTemplate`
    pub fn resolve(name: &str) -> ScaffoldResult<&'static TemplateEntry> {
        TEMPLATES
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ScaffoldError::UnknownTemplate {
                name: name.to_string(),
                available: Self::visible()
                    .map(|t| t.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_vanilla() {
        let entry = TemplateRegistry::resolve("vanilla").unwrap();
        assert_eq!(entry.kind, TemplateKind::Vanilla);
        assert_eq!(entry.label, "Vanilla");
    }

    #[test]
    fn test_resolve_is_exact_match() {
        assert!(TemplateRegistry::resolve("Vanilla").is_err());
        assert!(TemplateRegistry::resolve("vanilla ").is_err());
    }

    #[test]
    fn test_unknown_template_lists_available() {
        let err = TemplateRegistry::resolve("paper").unwrap_err();
        match err {
            ScaffoldError::UnknownTemplate { name, available } => {
                assert_eq!(name, "paper");
                assert_eq!(available, "vanilla");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_visible_entries() {
        let names: Vec<&str> = TemplateRegistry::visible().map(|t| t.name).collect();
        assert_eq!(names, vec!["vanilla"]);
        assert_eq!(TemplateRegistry::entries().len(), 1);
    }
}
