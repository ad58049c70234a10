//! Article rendering for helpgen.
//!
//! - [`template`]: literal `{{name}}` substitution into the article template
//! - [`naming`]: deterministic output file names from date and keyword

pub mod naming;
pub mod template;

pub use naming::{output_file_name, output_path, sanitize_keyword};
pub use template::{render, Template};

/// Placeholder replaced by the article title.
pub const TITLE_TOKEN: &str = "title";

/// Placeholder replaced by the meta description.
pub const DESCRIPTION_TOKEN: &str = "description";

/// Placeholder replaced by the generated article body.
pub const CONTENT_TOKEN: &str = "content";

/// Values bound into the template for one article. Built, rendered once, and
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub title: String,
    pub description: String,
    pub content: String,
}

impl RenderContext {
    /// Context for a troubleshooting article about `keyword`.
    pub fn for_keyword(keyword: &str, content: String) -> Self {
        Self {
            title: article_title(keyword),
            description: article_description(keyword),
            content,
        }
    }

    /// The bound value for a placeholder name, if it is one we know.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        match token {
            TITLE_TOKEN => Some(&self.title),
            DESCRIPTION_TOKEN => Some(&self.description),
            CONTENT_TOKEN => Some(&self.content),
            _ => None,
        }
    }
}

/// `<keyword> のトラブル解決ガイド`
pub fn article_title(keyword: &str) -> String {
    format!("{} のトラブル解決ガイド", keyword)
}

/// `<keyword>で困っている人向けの解決手順を丁寧に解説。`
pub fn article_description(keyword: &str) -> String {
    format!("{}で困っている人向けの解決手順を丁寧に解説。", keyword)
}
