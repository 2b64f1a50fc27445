mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./comicname.toml",
        "~/.config/comicname/config.toml",
        "/etc/comicname/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.scan.extensions.is_empty() {
        anyhow::bail!("scan.extensions cannot be empty");
    }

    for ext in &config.scan.extensions {
        if ext.is_empty() {
            anyhow::bail!("scan.extensions contains an empty entry");
        }
        if ext.contains(['.', '/', '\\']) {
            anyhow::bail!(
                "Invalid extension {:?}: give the bare extension, e.g. \"cbz\"",
                ext
            );
        }
    }

    if config.parser.allow_issue_start_with_letter {
        tracing::warn!("parser.allow_issue_start_with_letter is not supported and has no effect");
    }
    if config.parser.protofolius_issue_number_scheme {
        tracing::warn!("parser.protofolius_issue_number_scheme is not supported and has no effect");
    }

    Ok(())
}
