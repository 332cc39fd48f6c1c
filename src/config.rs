use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional configuration file name, looked up in the invocation directory.
pub const CONFIG_FILE: &str = "cenv.toml";

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct EnvConfig {
    #[serde(default)]
    pub package: PackageConfig,
    pub generate: Option<GenerateConfig>,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            scope: default_scope(),
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct GenerateConfig {
    pub output: Option<String>,
    pub format: Option<String>,
}

fn default_scheme() -> String {
    "cenv".to_string()
}

fn default_scope() -> String {
    crate::packages::DEFAULT_SCOPE.to_string()
}

/// Load `cenv.toml` from the current directory. A missing file is not an
/// error; everything has a default.
pub fn load_config() -> Result<EnvConfig> {
    if !Path::new(CONFIG_FILE).exists() {
        return Ok(EnvConfig::default());
    }
    let content =
        fs::read_to_string(CONFIG_FILE).with_context(|| format!("Failed to read {CONFIG_FILE}"))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
}
