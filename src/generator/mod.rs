//! Article body generation.
//!
//! [`ArticleGenerator`] is the seam between the pipeline and the external
//! text-generation service. [`OpenAiGenerator`] talks to any
//! OpenAI-compatible chat completions endpoint; tests drive the pipeline with
//! a scripted implementation instead.
//!
//! Generators make exactly one attempt per call. Retrying is left to whoever
//! re-invokes the pipeline.

mod openai;
pub mod prompt;

pub use openai::OpenAiGenerator;

use crate::error::Result;

/// Produces article body markup for a keyword.
pub trait ArticleGenerator {
    /// Generate the HTML body for `keyword`.
    ///
    /// Fails with `GenerationFailed` on transport or service errors and
    /// `GenerationEmpty` when the service returns nothing usable.
    fn generate(&self, keyword: &str) -> Result<String>;
}

impl<G: ArticleGenerator + ?Sized> ArticleGenerator for &G {
    fn generate(&self, keyword: &str) -> Result<String> {
        (**self).generate(keyword)
    }
}
