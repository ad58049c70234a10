//! Output file naming for generated articles.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Characters replaced with `_` besides spaces: path separators and the
/// characters Windows refuses in file names.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Generate the article file name for a keyword processed on `date`.
///
/// Format: `{YYYYMMDD}_{sanitized keyword}.html`
/// Example: `20261018_wifi_not_connecting.html`
///
/// The same (date, keyword) pair always yields the same name, so processing
/// a keyword twice on one day overwrites the earlier article.
pub fn output_file_name(date: NaiveDate, keyword: &str) -> String {
    format!("{}_{}.html", date.format("%Y%m%d"), sanitize_keyword(keyword))
}

/// Generate the full article path inside `output_dir`.
pub fn output_path(output_dir: &Path, date: NaiveDate, keyword: &str) -> PathBuf {
    output_dir.join(output_file_name(date, keyword))
}

/// Make a keyword safe to embed in a file name.
///
/// Each space, path separator, Windows-reserved character, and control
/// character becomes a single `_`. Everything else, including non-ASCII
/// text, is kept as is. Runs are not collapsed and case is preserved.
pub fn sanitize_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| {
            if c == ' ' || c.is_control() || UNSAFE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(date(2026, 10, 18), "wifi not connecting"),
            "20261018_wifi_not_connecting.html"
        );
        assert_eq!(
            output_file_name(date(2026, 1, 5), "printer offline"),
            "20260105_printer_offline.html"
        );
    }

    #[test]
    fn test_output_file_name_is_deterministic() {
        let a = output_file_name(date(2026, 10, 18), "dns error");
        let b = output_file_name(date(2026, 10, 18), "dns error");
        assert_eq!(a, b);
        assert_ne!(a, output_file_name(date(2026, 10, 19), "dns error"));
    }

    #[test]
    fn test_output_path_joins_directory() {
        let path = output_path(Path::new("docs"), date(2026, 10, 18), "printer offline");
        assert_eq!(path, Path::new("docs").join("20261018_printer_offline.html"));
    }

    #[test]
    fn test_sanitize_replaces_each_space() {
        assert_eq!(sanitize_keyword("a  b"), "a__b");
        assert_eq!(sanitize_keyword(" lead"), "_lead");
    }

    #[test]
    fn test_sanitize_keeps_case_and_punctuation() {
        assert_eq!(sanitize_keyword("Windows Update 0x80070005"), "Windows_Update_0x80070005");
        assert_eq!(sanitize_keyword("dns-error.v2"), "dns-error.v2");
    }

    #[test]
    fn test_sanitize_replaces_path_separators() {
        assert_eq!(sanitize_keyword("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_keyword("C:\\Windows"), "C__Windows");
    }

    #[test]
    fn test_sanitize_replaces_reserved_and_control_chars() {
        assert_eq!(sanitize_keyword("why?*<>|\""), "why______");
        assert_eq!(sanitize_keyword("tab\there\n"), "tab_here_");
    }

    #[test]
    fn test_sanitize_keeps_non_ascii() {
        assert_eq!(sanitize_keyword("プリンター オフライン"), "プリンター_オフライン");
        // Full-width space is not an ASCII space and is kept.
        assert_eq!(sanitize_keyword("音が出ない　対処"), "音が出ない　対処");
    }
}
