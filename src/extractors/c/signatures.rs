//! Parameter list parsing for C functions and proc-pointer types
//!
//! Turns `const char *fmt, int count, ...` into the parameter types
//! `["const char*", "int"]` plus a variadic flag. Parameter names are dropped.

use crate::cleaning::{collapse_whitespace, normalize_type};
use crate::extractors::base::{Signature, VARIADIC_TOKEN};

/// Words that only make sense in front of another type word
const QUALIFIERS: &[&str] = &[
    "const",
    "volatile",
    "struct",
    "union",
    "enum",
    "register",
    "restrict",
    "__restrict",
    "in",
    "out",
    "inout",
    "oneway",
    "bycopy",
    "byref",
];

/// Builtin type words; a trailing one is part of the type, never a name
const TYPE_KEYWORDS: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned", "_Bool",
    "bool",
];

/// Parse a parenthesized parameter list (without the parentheses)
///
/// Returns `None` when a parameter can't be reduced to a type, e.g. an empty
/// slot between commas or a nested function pointer.
pub(crate) fn parse_param_list(list: &str) -> Option<(Vec<String>, bool)> {
    let normalized = space_pointer_stars(list);
    if normalized.is_empty() || normalized == "void" {
        return Some((Vec::new(), false));
    }

    let pieces: Vec<&str> = normalized.split(',').map(str::trim).collect();
    let mut params = Vec::with_capacity(pieces.len());
    let mut variadic = false;

    for (index, piece) in pieces.iter().enumerate() {
        if *piece == VARIADIC_TOKEN {
            // `...` is only valid as the last parameter
            if index + 1 != pieces.len() {
                return None;
            }
            variadic = true;
            continue;
        }
        params.push(param_type(piece)?);
    }

    Some((params, variadic))
}

/// Build a signature from a raw return type and raw parameter list
pub(crate) fn build_signature(return_type: &str, param_list: &str) -> Option<Signature> {
    let (params, variadic) = parse_param_list(param_list)?;
    Some(Signature::new(normalize_type(return_type), params).variadic(variadic))
}

/// Collapse whitespace and make every `*` abut the type before it, with one
/// space after: `char *name` becomes `char* name`
fn space_pointer_stars(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + 8);
    for ch in collapse_whitespace(text).chars() {
        if ch == '*' {
            while spaced.ends_with(' ') {
                spaced.pop();
            }
            spaced.push_str("* ");
        } else {
            spaced.push(ch);
        }
    }
    collapse_whitespace(&spaced)
}

/// Reduce a single parameter declaration to its type
fn param_type(piece: &str) -> Option<String> {
    if piece.is_empty() || piece.contains(['(', ')']) {
        return None;
    }

    let mut tokens: Vec<String> = piece.split_whitespace().map(str::to_string).collect();

    // `char buf[16]` and `int values[]` are pointers as parameters
    let mut is_array = false;
    if let Some(last) = tokens.last_mut() {
        if let Some(bracket) = last.find('[') {
            last.truncate(bracket);
            is_array = true;
            if last.is_empty() {
                tokens.pop();
            }
        }
    }

    if tokens.len() >= 2 {
        let (last, rest) = tokens.split_last()?;
        let rest_has_base_type = rest
            .iter()
            .any(|t| !QUALIFIERS.contains(&t.trim_end_matches('*')));
        if is_identifier(last) && !TYPE_KEYWORDS.contains(&last.as_str()) && rest_has_base_type {
            tokens.pop();
        }
    }

    if tokens.is_empty() {
        return None;
    }

    let mut ty = tokens.join(" ");
    if is_array {
        ty.push('*');
    }
    Some(normalize_type(&ty))
}

pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &str) -> (Vec<String>, bool) {
        parse_param_list(list).expect("parameter list should parse")
    }

    #[test]
    fn test_names_are_stripped_and_stars_kept() {
        let (params, variadic) = types("const char *fmt, int  count, NSString * const name");
        assert_eq!(params, vec!["const char*", "int", "NSString* const"]);
        assert!(!variadic);
    }

    #[test]
    fn test_void_and_empty_lists_have_no_params() {
        assert_eq!(types("void"), (vec![], false));
        assert_eq!(types("  "), (vec![], false));
    }

    #[test]
    fn test_variadic_is_a_flag() {
        let (params, variadic) = types("const char* fmt, ...");
        assert_eq!(params, vec!["const char*"]);
        assert!(variadic);
    }

    #[test]
    fn test_unnamed_params_keep_their_type() {
        let (params, _) = types("unsigned int, struct Foo, CFStringRef, long long");
        assert_eq!(params, vec!["unsigned int", "struct Foo", "CFStringRef", "long long"]);
    }

    #[test]
    fn test_arrays_become_pointers() {
        let (params, _) = types("char buf[16], int values[], char **argv");
        assert_eq!(params, vec!["char*", "int*", "char**"]);
    }

    #[test]
    fn test_unparsable_params() {
        assert!(parse_param_list("int, , int").is_none());
        assert!(parse_param_list("void (*callback").is_none());
        assert!(parse_param_list("..., int").is_none());
    }

    #[test]
    fn test_build_signature_normalizes_return_type() {
        let sig = build_signature("NSString *", "id obj").unwrap();
        assert_eq!(sig.return_type, "NSString*");
        assert_eq!(sig.params, vec!["id"]);
    }
}
