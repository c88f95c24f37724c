//! `SKILL.md` header parsing.
//!
//! The header is a block of `key: value` lines fenced by `---` lines at the
//! very top of the document:
//! ```text
//! ---
//! name: pdf-tools
//! description: Split and merge PDF files
//! keywords: pdf, documents
//! ---
//!
//! # PDF Tools
//! ```
//! Values are kept as plain strings; callers decide how to interpret them.

use std::collections::BTreeMap;

/// Header fence marker.
const MARKER: &str = "---";

/// Key/value pairs extracted from a document header.
pub type Frontmatter = BTreeMap<String, String>;

/// Parse the header at the top of `content`.
///
/// A document without a complete header yields an empty map.
pub fn parse_frontmatter(content: &str) -> Frontmatter {
    match header_block(content) {
        Some(block) => parse_fields(block),
        None => Frontmatter::new(),
    }
}

/// Locate the text between the opening and closing marker lines.
fn header_block(content: &str) -> Option<&str> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !is_marker(first) {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_marker(line) {
            return Some(&content[start..offset]);
        }
        offset += line.len();
    }
    None
}

fn is_marker(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == MARKER
}

/// Split each line on its first `:`. Lines without one are ignored and later
/// keys replace earlier ones.
fn parse_fields(block: &str) -> Frontmatter {
    let mut fields = Frontmatter::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }
    fields
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_header() {
        let content =
            "---\nname: pdf-tools\ndescription: Split and merge PDFs\n---\n\n# PDF Tools\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm.len(), 2);
        assert_eq!(fm["name"], "pdf-tools");
        assert_eq!(fm["description"], "Split and merge PDFs");
    }

    #[test]
    fn missing_header_is_empty() {
        assert!(parse_frontmatter("# Just markdown\nname: nope\n").is_empty());
        assert!(parse_frontmatter("").is_empty());
    }

    #[test]
    fn header_must_start_the_document() {
        let content = "\n---\nname: late\n---\n";
        assert!(parse_frontmatter(content).is_empty());
    }

    #[test]
    fn unclosed_header_is_empty() {
        let content = "---\nname: test\nno closing fence\n";
        assert!(parse_frontmatter(content).is_empty());
    }

    #[test]
    fn closing_marker_must_be_whole_line() {
        let content = "---\nname: a\n----\nversion: 1\n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["name"], "a");
        assert_eq!(fm["version"], "1");
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let content = "---\nname: demo\njust some text\n\n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm["name"], "demo");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let content = "---\ndescription: Usage: run `x:y`\n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["description"], "Usage: run `x:y`");
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let content = "---\n  author :   Jane Doe  \n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["author"], "Jane Doe");
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let content = "---\nname: first\nversion: 1.0.0\nname: second\n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["name"], "second");
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn values_are_not_coerced() {
        let content = "---\nversion: 1.0\nenabled: true\n---\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["version"], "1.0");
        assert_eq!(fm["enabled"], "true");
    }

    #[test]
    fn crlf_documents_are_accepted() {
        let content = "---\r\nname: windows\r\ncategory: tools\r\n---\r\nbody\r\n";
        let fm = parse_frontmatter(content);
        assert_eq!(fm["name"], "windows");
        assert_eq!(fm["category"], "tools");
    }

    #[test]
    fn empty_header_is_empty() {
        assert!(parse_frontmatter("---\n---\nbody\n").is_empty());
    }

    #[test]
    fn only_first_block_is_read() {
        let content = "---\nname: one\n---\n---\nname: two\n---\n";
        assert_eq!(parse_frontmatter(content)["name"], "one");
    }
}
