//! Generator configuration.
//!
//! Handles loading, validating, and merging `mkdoc.toml`. Stock defaults are
//! overridden by an optional `mkdoc.toml` in the project root; a project with
//! no config file gets the standard `feature`/`flavour` layout.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! categories = ["feature", "flavour"]  # Scan order; also the descriptor file stem
//! descriptor_extension = "yaml"        # <category>/<item>/<category>.<ext>
//! template = "README.md.handlebars"    # Handlebars template, relative to the root
//! output = "README.md"                 # Rendered output, relative to the root
//! context_key = "docObjects"           # Name the document model is bound to
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! categories = ["feature", "flavour", "recipe"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// File name of the optional project config, looked up in the project root.
pub const CONFIG_FILE: &str = "mkdoc.toml";

/// Category order used when no config overrides it.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["feature", "flavour"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `mkdoc.toml`.
///
/// All fields have defaults matching the conventional project layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Categories to scan, in order. Each names both its root directory and
    /// the stem of every descriptor file beneath it.
    pub categories: Vec<String>,
    /// Extension of descriptor files, without the leading dot.
    pub descriptor_extension: String,
    /// Template path, relative to the project root.
    pub template: PathBuf,
    /// Output path, relative to the project root.
    pub output: PathBuf,
    /// Top-level binding the document model is exposed under in the template.
    pub context_key: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            descriptor_extension: "yaml".to_string(),
            template: PathBuf::from("README.md.handlebars"),
            output: PathBuf::from("README.md"),
            context_key: "docObjects".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "categories must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !is_single_component(category) {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' must be a single directory name"
                )));
            }
            if !seen.insert(category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' is listed more than once"
                )));
            }
        }
        if self.descriptor_extension.is_empty() || self.descriptor_extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "descriptor_extension must be non-empty and have no leading dot".into(),
            ));
        }
        if self.template.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "template and output paths must not be empty".into(),
            ));
        }
        if self.template == self.output {
            return Err(ConfigError::Validation(
                "output must not overwrite the template".into(),
            ));
        }
        if self.context_key.is_empty() {
            return Err(ConfigError::Validation(
                "context_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == OsStr::new(name)
    )
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `mkdoc.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no config file exists in the directory.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
        path: config_path.clone(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `mkdoc.toml` in the given project root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `mkdoc.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# mkdoc Configuration
# ===================
# Place this file as mkdoc.toml in the project root. Every key is optional;
# omitted keys keep the defaults shown here.

# Categories to scan, in order. Each category is a directory in the project
# root holding one subdirectory per item, and each item directory holds a
# descriptor named after the category:
#
#   feature/01_intro/feature.yaml
#   flavour/01_minimal/flavour.yaml
#
# A sort prefix up to the first underscore ("01_") is stripped from item
# names before they reach the template.
categories = ["feature", "flavour"]

# Extension of descriptor files (YAML content), without the leading dot.
descriptor_extension = "yaml"

# Handlebars template, relative to the project root.
template = "README.md.handlebars"

# Rendered output, relative to the project root. Replaced on every build.
output = "README.md"

# Name the document model is bound to in the template, e.g.
#   {{#each docObjects.feature}}- {{@key}}: {{this.title}}{{/each}}
context_key = "docObjects"
"##
}
