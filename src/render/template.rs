//! Template substitution for article pages.
//!
//! # Syntax
//!
//! - `{{title}}`, `{{description}}`, `{{content}}` are replaced by their
//!   bound values, every occurrence
//! - Any other `{{...}}` sequence, lone braces, and an unterminated `{{`
//!   are copied through verbatim
//!
//! Substitution is a single left-to-right pass over the template. Inserted
//! values are never rescanned, so a generated body that happens to contain
//! `{{title}}` is emitted literally.
//!
//! Unlike stricter engines this one never fails on an unknown placeholder;
//! the only error is an unreadable template file.

use super::RenderContext;
use crate::error::{HelpgenError, Result};
use std::path::Path;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A loaded article template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Read a template file. Fails with `UnknownTemplate` if it cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            HelpgenError::UnknownTemplate(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { text })
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        render(&self.text, ctx)
    }
}

/// Substitute the known placeholders of `template` with values from `ctx`.
///
/// # Examples
///
/// ```ignore
/// let ctx = RenderContext::for_keyword("dns error", "<p>...</p>".to_string());
/// let html = render("<title>{{title}}</title>", &ctx);
/// assert_eq!(html, "<title>dns error のトラブル解決ガイド</title>");
/// ```
pub fn render(template: &str, ctx: &RenderContext) -> String {
    let mut result = String::with_capacity(template.len() + ctx.content.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match after_open.find(CLOSE) {
            Some(end) => match ctx.lookup(&after_open[..end]) {
                Some(value) => {
                    result.push_str(value);
                    rest = &after_open[end + CLOSE.len()..];
                }
                None => {
                    // Not ours: emit one brace and retry from the next byte,
                    // so `{{{title}}}` still substitutes the inner token.
                    result.push('{');
                    rest = &rest[start + 1..];
                }
            },
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}
