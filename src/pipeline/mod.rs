//! One queue-drain step: pick a keyword, generate, render, write, commit.
//!
//! # Run sequence
//!
//! 1. Load the queue snapshot
//! 2. No pending keyword: stop with [`RunOutcome::Idle`], touching nothing
//! 3. Load the template, then ask the generator for the article body
//! 4. Render and atomically write the article
//! 5. Mark the keyword done and atomically replace the queue file
//!
//! The queue file is only rewritten after the article exists, so a keyword
//! is never done without its article. If step 5 fails the article is left
//! in place and the keyword stays pending; the next run regenerates and
//! overwrites the same file.
//!
//! At most one keyword moves per run. The queue is assumed to be owned by a
//! single run at a time; callers that may overlap need an external lock.


use crate::config::Config;
use crate::error::{HelpgenError, Result};
use crate::generator::ArticleGenerator;
use crate::queue::QueueSnapshot;
use crate::render::{output_path, RenderContext, Template};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a single run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No pending keyword; nothing was written.
    Idle,
    /// An article was written and its keyword marked done.
    Published { keyword: String, path: PathBuf },
}

/// Resolved file locations for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub keyword_file: PathBuf,
    pub template_file: PathBuf,
    pub output_dir: PathBuf,
}

impl PipelinePaths {
    pub fn from_config(config: &Config) -> Self {
        Self {
            keyword_file: config.keyword_path(),
            template_file: config.template_path(),
            output_dir: config.output_path(),
        }
    }
}

/// The article pipeline, generic over how bodies are generated.
pub struct Pipeline<G> {
    paths: PipelinePaths,
    generator: G,
}

impl<G: ArticleGenerator> Pipeline<G> {
    pub fn new(paths: PipelinePaths, generator: G) -> Self {
        Self { paths, generator }
    }

    /// Process at most one pending keyword, naming the article for `today`.
    pub fn run_once(&self, today: NaiveDate) -> Result<RunOutcome> {
        let snapshot = QueueSnapshot::load(&self.paths.keyword_file)?;

        let keyword = match snapshot.find_next_pending() {
            Some(record) => record.keyword.clone(),
            None => {
                info!("No keywords left to process.");
                return Ok(RunOutcome::Idle);
            }
        };

        info!(
            remaining = snapshot.pending_count(),
            "Generating article for keyword: {}", keyword
        );

        let template = Template::load(&self.paths.template_file)?;
        let content = self.generator.generate(&keyword)?;

        let ctx = RenderContext::for_keyword(&keyword, content);
        let html = template.render(&ctx);

        let path = output_path(&self.paths.output_dir, today, &keyword);
        write_article(&path, &html)?;
        info!("Article created: {}", path.display());

        snapshot
            .mark_done(&keyword)
            .save(&self.paths.keyword_file)?;
        info!("Queue updated: '{}' marked done.", keyword);

        Ok(RunOutcome::Published { keyword, path })
    }
}

fn write_article(path: &Path, html: &str) -> Result<()> {
    crate::fs::atomic_write_file(path, html).map_err(|e| {
        HelpgenError::WriteFailed(format!("'{}': {}", path.display(), e))
    })
}
