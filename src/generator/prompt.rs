//! The fixed instruction sent to the text-generation service.

/// Instruction template; `{keyword}` is replaced with the keyword.
const PROMPT_TEMPLATE: &str = "\
あなたはWindowsトラブル解決に詳しいサポート担当者です。
初心者向けに「{keyword}」のトラブル解決記事を作ってください。
文章はHTML形式で、見出し<h2>、本文<p>、箇条書き<ul><li>を使ってください。
・操作手順は番号付き
・専門用語は簡単な説明をつける
・1文は60文字以内
・不安を煽らない
";

/// Build the instruction for one keyword.
pub fn build_prompt(keyword: &str) -> String {
    PROMPT_TEMPLATE.replace("{keyword}", keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_keyword_once() {
        let prompt = build_prompt("printer offline");
        assert!(prompt.contains("「printer offline」"));
        assert_eq!(prompt.matches("printer offline").count(), 1);
        assert!(!prompt.contains("{keyword}"));
    }

    #[test]
    fn test_prompt_carries_style_constraints() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("<h2>"));
        assert!(prompt.contains("<ul><li>"));
        assert!(prompt.contains("1文は60文字以内"));
    }

    #[test]
    fn test_prompt_is_fixed_apart_from_keyword() {
        assert_eq!(
            build_prompt("a").replace("「a」", "「b」"),
            build_prompt("b")
        );
    }
}
