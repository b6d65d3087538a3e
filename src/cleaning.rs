//! Text cleanup shared by the chunker and the extractors.
//!
//! Preprocessed headers still carry compiler line markers (`# 12 "file.h" 3`)
//! and comments. Line markers and single-line comments are blanked out per
//! framework while keeping line numbers stable. Block comments are stripped
//! later, per interface body and enum body, by `strip_comments`.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Every character the interface grammar knows how to deal with
pub(crate) const ACCEPTED_SYMBOLS: &str = r#"!$&'%\\?|~\]\[+\-*/()#a-zA-Z0-9\n\r\t^ @;,_:<>=."{}"#;

static INVALID_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[^{}]", ACCEPTED_SYMBOLS)).unwrap());

/// Block comments, `//` comments and leftover `#` lines, whichever starts first
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?\*/|//[^\n]*|(?m:^[ \t]*#[^\n]*)").unwrap()
});

/// Blank out preprocessor line markers and `//` comment lines
///
/// A line marker is a line starting with `#` followed by a space or tab. Those
/// are inserted by the compiler, unlike `#pragma` and friends, which are kept.
/// The output has exactly as many lines as the input.
pub fn remove_preprocessor_junk(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut cleaned = String::with_capacity(text.len());

    for line in text.split('\n') {
        let bytes = line.as_bytes();
        let is_line_marker = bytes.first() == Some(&b'#')
            && matches!(bytes.get(1), Some(b' ') | Some(b'\t'));
        let is_comment = line.starts_with("//");

        if !(is_line_marker || is_comment) {
            cleaned.push_str(line);
        }
        cleaned.push('\n');
    }

    // split() yields one more piece than there are newlines
    cleaned.pop();
    cleaned
}

/// Remove `/* */` comments, `//` comments and `#` lines from a declaration body
pub fn strip_comments(text: &str) -> String {
    COMMENT_RE
        .replace_all(text, |caps: &regex::Captures| {
            if caps[0].starts_with("/*") {
                " "
            } else {
                ""
            }
        })
        .into_owned()
}

/// Collapse every run of whitespace into a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a type name: single spaces, `*` and `<` attached to the type
///
/// `"NSString *"` becomes `"NSString*"`, `"id <NSCopying>"` becomes
/// `"id<NSCopying>"` and `"char * *"` becomes `"char**"`.
pub fn normalize_type(text: &str) -> String {
    let mut normalized = collapse_whitespace(text);
    while normalized.contains(" *") {
        normalized = normalized.replace(" *", "*");
    }
    while normalized.contains(" <") {
        normalized = normalized.replace(" <", "<");
    }
    normalized
}

/// Characters outside the accepted grammar, with the line of the first one
///
/// Returns the distinct offending characters in order of first appearance.
pub fn find_invalid_characters(text: &str) -> Option<(String, usize)> {
    let first = INVALID_CHAR_RE.find(text)?;
    let line = text[..first.start()].matches('\n').count() + 1;

    let mut seen = BTreeSet::new();
    let chars: String = INVALID_CHAR_RE
        .find_iter(text)
        .flat_map(|m| m.as_str().chars())
        .filter(|c| seen.insert(*c))
        .collect();

    Some((chars, line))
}
