//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a helpgen run.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV queue of keywords with `keyword` and `status` columns.
    pub keyword_file: String,

    /// HTML template containing `{{title}}`, `{{description}}`, `{{content}}`.
    pub template_file: String,

    /// Directory receiving generated articles.
    pub output_dir: String,

    /// Text-generation service settings.
    pub generator: GeneratorSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword_file: default_keyword_file(),
            template_file: default_template_file(),
            output_dir: default_output_dir(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Config {
    pub fn keyword_path(&self) -> PathBuf {
        PathBuf::from(&self.keyword_file)
    }

    pub fn template_path(&self) -> PathBuf {
        PathBuf::from(&self.template_file)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}
