//! Configuration file support for mac-compat.
//!
//! Provides YAML-based configuration through `mac-compat.config.yml` files,
//! file loading and validation, and the merge of file values with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use mac_compat::application::dto::{ReportRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use mac_compat::application::factories::PresenterType;
use mac_compat::shared::security::ensure_config_file;
use mac_compat::shared::Result;

pub const CONFIG_FILENAME: &str = "mac-compat.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub policies: Option<Vec<String>>,
    pub os_versions: Option<Vec<u32>>,
    pub per_page: Option<u32>,
    pub api_base_url: Option<String>,
    pub feed_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    ensure_config_file(path)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(per_page) = config.per_page {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            bail!(
                "Invalid config: per_page must be between 1 and {}, got {}.",
                MAX_PER_PAGE,
                per_page
            );
        }
    }

    for (key, url) in [
        ("api_base_url", &config.api_base_url),
        ("feed_url", &config.feed_url),
    ] {
        if let Some(url) = url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                bail!(
                    "Invalid config: {} must be an http(s) URL, got '{}'.",
                    key,
                    url
                );
            }
        }
    }

    if let Some(ref policies) = config.policies {
        for (i, name) in policies.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: policies[{}] must not be empty.\n\n\
                     💡 Hint: Policy names are matched exactly; remove the empty entry.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective options for one run after merging the config file and the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub request: ReportRequest,
    pub presenter: PresenterType,
    pub api_base_url: Option<String>,
    pub feed_url: Option<String>,
}

impl RunOptions {
    /// Merges command-line options over the config file
    ///
    /// Scalars from the command line win; a list given on the command line
    /// replaces the file's list rather than extending it.
    pub fn resolve(args: &Args, config: ConfigFile, home: Option<&Path>) -> Result<Self> {
        let policy_names = if args.policy.is_empty() {
            config.policies.unwrap_or_default()
        } else {
            args.policy.clone()
        };
        let os_versions = if args.filter_os_versions.is_empty() {
            config.os_versions.unwrap_or_default()
        } else {
            args.filter_os_versions.clone()
        };
        let per_page = args
            .per_page
            .or(config.per_page)
            .unwrap_or(DEFAULT_PER_PAGE);

        let presenter = if args.stdout {
            PresenterType::Stdout
        } else if let Some(path) = args.filepath.as_ref().or(config.output.as_ref()) {
            PresenterType::File(PathBuf::from(path))
        } else {
            match home {
                Some(home) => PresenterType::default_file(home),
                None => bail!(
                    "Cannot determine the default output path because HOME is not set.\n\n\
                     💡 Hint: Pass --filepath or --stdout."
                ),
            }
        };

        Ok(Self {
            request: ReportRequest::new(policy_names, os_versions, per_page),
            presenter,
            api_base_url: config.api_base_url,
            feed_url: config.feed_url,
        })
    }
}
