//! Config loading, resolution, and validation.

use super::model::Config;
use super::types::GeneratorSettings;
use crate::error::{HelpgenError, Result};
use std::path::Path;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HELPGEN_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "helpgen.yaml";

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HelpgenError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                HelpgenError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for this process.
    ///
    /// `lookup` reads environment variables; it is a parameter so callers
    /// and tests decide where the environment comes from.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve_from(Path::new("."), lookup)
    }

    /// Resolve the config, looking for the default config file in `base_dir`.
    ///
    /// Precedence:
    /// 1. The file named by `HELPGEN_CONFIG` (must exist)
    /// 2. `helpgen.yaml` in `base_dir`, if present
    /// 3. Built-in defaults
    pub fn resolve_from<F>(base_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(explicit) = lookup(CONFIG_ENV_VAR)
            && !explicit.trim().is_empty()
        {
            return Self::load(explicit.trim());
        }

        let default_file = base_dir.join(DEFAULT_CONFIG_FILE);
        if default_file.is_file() {
            Self::load(default_file)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - file and directory paths must be non-empty
    /// - `generator.model` and `generator.api_key_env` must be non-empty
    /// - `generator.base_url` must be an http(s) URL
    /// - `generator.temperature` must be within `0.0..=2.0`
    /// - `generator.timeout_secs`, when set, must be greater than 0
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("keyword_file", &self.keyword_file),
            ("template_file", &self.template_file),
            ("output_dir", &self.output_dir),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must be non-empty", name)));
            }
        }

        self.generator.validate()
    }
}

impl GeneratorSettings {
    fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(invalid("generator.model must be non-empty".to_string()));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(invalid(
                "generator.api_key_env must be non-empty".to_string(),
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "generator.base_url must start with http:// or https:// (found '{}')",
                self.base_url
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(format!(
                "generator.temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(invalid(
                "generator.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Read the API key from the variable named by `api_key_env`.
    ///
    /// A missing or blank key is `None`; it only becomes an error once an
    /// article actually has to be generated.
    pub fn api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// The error reported when a request needs the key and it is missing.
    pub fn missing_api_key(&self) -> HelpgenError {
        HelpgenError::ConfigError(format!(
            "{} is not set; export the API key for the text-generation service",
            self.api_key_env
        ))
    }

    /// Base URL with any trailing slash removed.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn invalid(message: String) -> HelpgenError {
    HelpgenError::ConfigError(format!("config validation failed: {}", message))
}
