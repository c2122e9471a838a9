use std::collections::HashSet;
use std::fs;
use std::path::Path;

use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

/// Knobs for one obfuscation run. Immutable once the run starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObfuscationConfig {
    pub remove_whitespace: bool,
    pub obfuscate_variables: bool,
    pub obfuscate_declared_names: bool,
    /// Bare names, no `$` sigil.
    pub excluded_variables: HashSet<String>,
    pub excluded_functions: HashSet<String>,
}

impl Default for ObfuscationConfig {
    fn default() -> Self {
        Self {
            remove_whitespace: true,
            obfuscate_variables: true,
            obfuscate_declared_names: false,
            excluded_variables: HashSet::new(),
            excluded_functions: HashSet::new(),
        }
    }
}

impl ObfuscationConfig {
    pub fn exclude_variable(&mut self, name: &str) {
        self.excluded_variables
            .insert(name.trim_start_matches('$').to_string());
    }

    pub fn exclude_function(&mut self, name: &str) {
        self.excluded_functions.insert(name.to_string());
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Loads configuration in layers: defaults, then the optional JSON file,
/// then `OBFUSCATOR_*` environment variables. CLI flags are applied on
/// the returned value by the caller and take final precedence.
pub fn load_config(path: Option<&Path>) -> Result<ObfuscationConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            serde_json::from_str::<ObfuscationConfig>(&content)?
        }
        None => ObfuscationConfig::default(),
    };

    let mut builder = config_rs::Config::builder()
        .set_default("remove_whitespace", cfg.remove_whitespace)?
        .set_default("obfuscate_variables", cfg.obfuscate_variables)?
        .set_default("obfuscate_declared_names", cfg.obfuscate_declared_names)?;

    for (key, env) in [
        ("remove_whitespace", "OBFUSCATOR_REMOVE_WHITESPACE"),
        ("obfuscate_variables", "OBFUSCATOR_OBFUSCATE_VARIABLES"),
        ("obfuscate_declared_names", "OBFUSCATOR_OBFUSCATE_DECLARED_NAMES"),
    ] {
        if let Ok(value) = std::env::var(env) {
            builder = builder.set_override(key, value)?;
        }
    }

    let layered = builder.build()?;
    cfg.remove_whitespace = layered.get::<bool>("remove_whitespace")?;
    cfg.obfuscate_variables = layered.get::<bool>("obfuscate_variables")?;
    cfg.obfuscate_declared_names = layered.get::<bool>("obfuscate_declared_names")?;

    // file-provided variable exclusions may carry a sigil
    cfg.excluded_variables = cfg
        .excluded_variables
        .iter()
        .map(|n| n.trim_start_matches('$').to_string())
        .collect();

    Ok(cfg)
}
