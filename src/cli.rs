//! CLI argument parsing for helpgen.
//!
//! The tool takes no arguments: each invocation performs one queue-drain
//! step. clap still provides `--help` and `--version`.

use clap::Parser;

/// Generate one HTML help article from the keyword queue.
///
/// Picks the first pending keyword in the queue file, asks the
/// text-generation service for an article body, renders it into the
/// template, writes the article, and marks the keyword done.
///
/// Configuration is read from the file named by HELPGEN_CONFIG, or from
/// helpgen.yaml in the working directory if present. The API key is read
/// from OPENAI_API_KEY unless the config names another variable.
#[derive(Parser, Debug)]
#[command(name = "helpgen")]
#[command(author, version, about, long_about)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["helpgen"]).is_ok());
    }

    #[test]
    fn rejects_unexpected_arguments() {
        assert!(Cli::try_parse_from(["helpgen", "printer offline"]).is_err());
        assert!(Cli::try_parse_from(["helpgen", "--all"]).is_err());
    }
}
