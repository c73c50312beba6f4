//! The `check` command: validate a configuration string end to end.

use std::collections::HashMap;
use std::sync::Arc;

use jaas_config::{
    ConfigurationHandle, ConfigurationProvider, LoginType, Password, StaticConfiguration,
    SASL_JAAS_CONFIG,
};
use jaas_parse::{JaasError, ParsedConfig};

use super::read_input;

/// Options for `jaasc check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Explicit context name; overrides the login type's name.
    pub context: Option<String>,
    pub login_type: LoginType,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            context: None,
            login_type: LoginType::Client,
        }
    }
}

/// Parse `check` flags. Non-flag arguments are ignored here.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, String> {
    let mut options = CheckOptions::default();
    for arg in args {
        if let Some(name) = arg.strip_prefix("--context=") {
            if name.is_empty() {
                return Err("--context requires a name".to_owned());
            }
            options.context = Some(name.to_owned());
        } else if let Some(kind) = arg.strip_prefix("--login-type=") {
            options.login_type = match kind {
                "client" => LoginType::Client,
                "server" => LoginType::Server,
                other => return Err(format!("unknown login type '{other}'")),
            };
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        }
    }
    Ok(options)
}

/// Parse a file through the configuration provider and summarize it.
pub fn check_file(path: &str, options: &CheckOptions) -> Result<Vec<String>, JaasError> {
    let source = read_input(path)?;
    let configs = HashMap::from([(SASL_JAAS_CONFIG.to_owned(), Password::from(source))]);
    let provider = ConfigurationProvider::new(Arc::new(StaticConfiguration::new()));

    let handle = match &options.context {
        Some(name) => provider.resolve_configuration(&configs, SASL_JAAS_CONFIG, &|| name.clone())?,
        None => provider.jaas_config(options.login_type, &configs)?,
    };

    Ok(match &handle {
        ConfigurationHandle::Parsed(config) => render_config(config),
        ConfigurationHandle::Ambient(_) => vec!["No inline configuration".to_owned()],
    })
}

/// Summarize a parsed configuration: modules, flags and option keys.
pub fn render_config(config: &ParsedConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(config.entries().len() + 1);
    lines.push(format!(
        "Login context '{}' ({} entries):",
        config.context_name(),
        config.entries().len()
    ));
    for entry in config.entries() {
        let keys: Vec<&str> = entry.options().keys().map(String::as_str).collect();
        if keys.is_empty() {
            lines.push(format!("  {} {}", entry.login_module(), entry.control_flag()));
        } else {
            lines.push(format!(
                "  {} {} [{}]",
                entry.login_module(),
                entry.control_flag(),
                keys.join(", ")
            ));
        }
    }
    lines
}
