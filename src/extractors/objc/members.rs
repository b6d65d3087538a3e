//! Classification of the `;`-separated entries of an interface body

use crate::extractors::base::Dispatch;

/// Keywords that open a section and may prefix the next declaration
const SECTION_KEYWORDS: &[&str] = &[
    "@optional",
    "@required",
    "@public",
    "@private",
    "@protected",
    "@package",
];

/// Stray C declarations that are skipped silently
const IGNORED_WORDS: &[&str] = &["typedef", "extern", "enum"];

/// What a member entry is, decided before any parsing
#[derive(Debug, PartialEq, Eq)]
pub(super) enum MemberDecl<'a> {
    Method(Dispatch, &'a str),
    Property(&'a str),
    Ignored,
    Unrecognized(&'a str),
}

/// Classify one trimmed, non-empty member entry by its leading character
pub(super) fn classify_member(entry: &str) -> MemberDecl<'_> {
    let entry = strip_section_keywords(entry.trim());

    match entry.chars().next() {
        None => MemberDecl::Ignored,
        Some('-') => MemberDecl::Method(Dispatch::Instance, entry),
        Some('+') => MemberDecl::Method(Dispatch::Class, entry),
        Some('@') => MemberDecl::Property(entry),
        Some('#') => MemberDecl::Ignored,
        Some(_) => {
            let first_word = entry.split_whitespace().next().unwrap_or("");
            if IGNORED_WORDS.contains(&first_word) {
                MemberDecl::Ignored
            } else {
                MemberDecl::Unrecognized(entry)
            }
        }
    }
}

fn strip_section_keywords(mut entry: &str) -> &str {
    'outer: loop {
        for keyword in SECTION_KEYWORDS {
            if let Some(rest) = entry.strip_prefix(keyword) {
                let at_word_end = rest
                    .chars()
                    .next()
                    .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'));
                if at_word_end {
                    entry = rest.trim_start();
                    continue 'outer;
                }
            }
        }
        return entry;
    }
}
