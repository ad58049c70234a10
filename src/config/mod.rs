//! Configuration model for helpgen.
//!
//! Configuration is an optional YAML file. Every field has a default that
//! matches the conventional layout (`data/keywords.csv`, `template/article.html`,
//! `docs/`), so a run with no config file at all works out of the box.
//! Unknown fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use operations::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use types::GeneratorSettings;
