//! Splitting documents into frontmatter and body, and joining them back

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::frontmatter::Frontmatter;

/// Marker line opening and closing a frontmatter block.
pub const DELIMITER: &str = "---";

/// Opening delimiter at the very start, content, the first closing delimiter
/// line, then the body. Spaces and tabs may trail each delimiter; blank lines
/// after the closing one belong to the body.
static FRONTMATTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*\r?\n(.*)\z").unwrap()
});

/// A document split into its frontmatter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument<'a> {
    /// Parsed block, empty when `present` is false
    pub frontmatter: Frontmatter,
    /// Everything after the closing delimiter, or the whole input when no
    /// block was recognized
    pub body: &'a str,
    /// Whether a well-formed mapping block was found at the start
    pub present: bool,
}

impl<'a> ParsedDocument<'a> {
    fn absent(source: &'a str) -> Self {
        Self {
            frontmatter: Frontmatter::new(),
            body: source,
            present: false,
        }
    }
}

/// Locate the raw block content and the body, without parsing the block.
pub fn split_document(source: &str) -> Option<(&str, &str)> {
    let captures = FRONTMATTER_BLOCK.captures(source)?;
    let block = captures.get(1)?.as_str();
    let body = captures.get(2)?.as_str();
    Some((block, body))
}

/// Split `source` into frontmatter and body.
///
/// A block that is missing, not at the first line, not valid YAML, or not a
/// mapping is reported as absent. This never fails.
pub fn parse_document(source: &str) -> ParsedDocument<'_> {
    let Some((block, body)) = split_document(source) else {
        return ParsedDocument::absent(source);
    };
    match Frontmatter::from_yaml(block) {
        Ok(frontmatter) => ParsedDocument {
            frontmatter,
            body,
            present: true,
        },
        Err(_) => ParsedDocument::absent(source),
    }
}

/// Emit delimiters around the frontmatter in its stored key order, followed
/// by the body unchanged.
pub fn render_document(frontmatter: &Frontmatter, body: &str) -> Result<String> {
    let yaml = frontmatter.to_yaml()?;
    let mut out = String::with_capacity(yaml.len() + body.len() + 8);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(body);
    Ok(out)
}
