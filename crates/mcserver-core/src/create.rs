//! Front half of a run: turn raw arguments into a validated request and hand
//! it to the selected template

use crate::context::{ProvisionContext, ProvisionEnv, ServerRequest};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::interaction::{SelectOption, TextPrompt};
use crate::scaffold;
use crate::templates::{TemplateEntry, TemplateRegistry};
use std::path::PathBuf;

/// Directory suggested when the user gives no name
pub const DEFAULT_SERVER_NAME: &str = "minecraft-server";

/// Raw arguments; anything missing is asked for
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory to create the server in
    pub server_name: Option<String>,

    /// Template name
    pub template: Option<String>,

    /// Game version
    pub version: Option<String>,

    /// Pre-answer the license prompt
    pub eula: Option<bool>,
}

/// Validate the arguments, then run the chosen template's workflow
pub async fn create_server(
    env: &ProvisionEnv<'_>,
    args: CreateArgs,
) -> ScaffoldResult<ProvisionContext> {
    env.interaction
        .section(env.config.display_name(), Some("Step 1 of 4"))?;

    let server_name = validate_name(env, args.server_name)?;
    let template = validate_type(env, args.template)?;

    let request = ServerRequest {
        server_name,
        template: template.name.to_string(),
        version: args.version,
        eula: args.eula,
    };

    template.kind.workflow().run(env, request).await
}

fn validate_name(env: &ProvisionEnv<'_>, name: Option<String>) -> ScaffoldResult<String> {
    if let Some(name) = name {
        scaffold::ensure_available(env.base_dir(), &name)?;
        env.interaction.info(&format!("dir {}", name))?;
        return Ok(name);
    }

    let base: PathBuf = env.base_dir().to_path_buf();
    env.interaction.text(
        TextPrompt::new("Where do you want to create your server?")
            .default_value(DEFAULT_SERVER_NAME)
            .validate(move |value| {
                if value.trim().is_empty() {
                    return Err("Please enter a directory name.".to_string());
                }
                match scaffold::ensure_available(&base, value) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(format!(
                        "`{}` already exists. Please choose a new folder.",
                        value
                    )),
                }
            }),
    )
}

fn validate_type(
    env: &ProvisionEnv<'_>,
    template: Option<String>,
) -> ScaffoldResult<&'static TemplateEntry> {
    if let Some(name) = template {
        let entry = TemplateRegistry::resolve(&name)?;
        env.interaction.info(&format!("type {}", entry.label))?;
        return Ok(entry);
    }

    let visible: Vec<&'static TemplateEntry> = TemplateRegistry::visible().collect();
    match visible.as_slice() {
        [] => Err(ScaffoldError::UnknownTemplate {
            name: String::new(),
            available: String::new(),
        }),
        [only] => {
            env.interaction
                .info(&format!("Using server type: {}", only.label))?;
            Ok(*only)
        }
        entries => {
            let options: Vec<SelectOption> = entries
                .iter()
                .map(|t| SelectOption::new(t.name, t.label))
                .collect();
            let name = env.interaction.select(
                "What type of server do you want to create?",
                &options,
                None,
            )?;
            TemplateRegistry::resolve(&name)
        }
    }
}
