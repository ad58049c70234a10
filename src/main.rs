//! helpgen: generate HTML help articles from a keyword queue.
//!
//! Each invocation processes at most one pending keyword and exits. Run it
//! repeatedly (for example from a scheduler) to drain the queue. Exit status
//! is zero whether or not there was work to do.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod pipeline;
pub mod queue;
pub mod render;
#[cfg(test)]
mod test_support;

use cli::Cli;
use config::Config;
use error::Result;
use generator::OpenAiGenerator;
use pipeline::{Pipeline, PipelinePaths, RunOutcome};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> Result<RunOutcome> {
    let lookup = |key: &str| std::env::var(key).ok();

    let config = Config::resolve(lookup)?;
    let api_key = config.generator.api_key(lookup);
    let generator = OpenAiGenerator::new(&config.generator, api_key)?;
    tracing::debug!(
        endpoint = generator.endpoint(),
        queue = %config.keyword_file,
        "configuration resolved"
    );

    let pipeline = Pipeline::new(PipelinePaths::from_config(&config), generator);
    pipeline.run_once(chrono::Local::now().date_naive())
}
