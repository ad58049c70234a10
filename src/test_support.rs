//! Shared fixtures for pipeline tests.

use crate::error::{HelpgenError, Result};
use crate::generator::ArticleGenerator;
use crate::pipeline::{Pipeline, PipelinePaths};
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;

pub(crate) const ARTICLE_TEMPLATE: &str = "<!DOCTYPE html>
<html lang=\"ja\">
<head>
<title>{{title}}</title>
<meta name=\"description\" content=\"{{description}}\">
</head>
<body>
<h1>{{title}}</h1>
{{content}}
</body>
</html>
";

/// Generator that replays canned results and records each keyword it saw.
pub(crate) struct ScriptedGenerator {
    responses: RefCell<Vec<Result<String>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedGenerator {
    /// Always answers with `body`.
    pub(crate) fn answering(body: &str) -> Self {
        Self::with_responses((0..8).map(|_| Ok(body.to_string())).collect())
    }

    /// Answers with each entry in turn; panics when exhausted.
    pub(crate) fn with_responses(responses: Vec<Result<String>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ArticleGenerator for ScriptedGenerator {
    fn generate(&self, keyword: &str) -> Result<String> {
        self.calls.borrow_mut().push(keyword.to_string());
        self.responses
            .borrow_mut()
            .pop()
            .expect("scripted generator ran out of responses")
    }
}

/// A working directory laid out the conventional way:
/// `data/keywords.csv`, `template/article.html`, `docs/`.
pub(crate) struct Workspace {
    pub(crate) dir: TempDir,
}

impl Workspace {
    pub(crate) fn new(queue: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::create_dir_all(dir.path().join("template")).unwrap();
        std::fs::write(dir.path().join("data/keywords.csv"), queue).unwrap();
        std::fs::write(dir.path().join("template/article.html"), ARTICLE_TEMPLATE).unwrap();
        Self { dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn paths(&self) -> PipelinePaths {
        PipelinePaths {
            keyword_file: self.root().join("data/keywords.csv"),
            template_file: self.root().join("template/article.html"),
            output_dir: self.root().join("docs"),
        }
    }

    pub(crate) fn pipeline<'g>(
        &self,
        generator: &'g ScriptedGenerator,
    ) -> Pipeline<&'g ScriptedGenerator> {
        Pipeline::new(self.paths(), generator)
    }

    pub(crate) fn queue_text(&self) -> String {
        std::fs::read_to_string(self.root().join("data/keywords.csv")).unwrap()
    }

    /// File names under `docs/`, sorted. Empty if the directory is missing.
    pub(crate) fn articles(&self) -> Vec<String> {
        let docs = self.root().join("docs");
        if !docs.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = std::fs::read_dir(docs)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

pub(crate) fn generation_failed(message: &str) -> Result<String> {
    Err(HelpgenError::GenerationFailed(message.to_string()))
}
