//! `typedef enum [tag] { ... } Name;` declarations and their constants
//!
//! Constant values are never evaluated. An explicit value is kept as written
//! and becomes the base for the constants that follow it; an implicit value is
//! the previous value plus one. When the base is numeric the result is a plain
//! number, otherwise it is the base expression with an offset, e.g. `kBase+2`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::signatures::is_identifier;
use crate::cleaning::{collapse_whitespace, strip_comments};
use crate::extractors::base::{BaseExtractor, Declaration, EnumConstant, ENUM_UNDERLYING_TYPE};

static ENUM_TYPEDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\btypedef\s+enum(?:\s+[A-Za-z_][A-Za-z_0-9]*)?\s*\{([^}]*)\}\s*([A-Za-z_][A-Za-z_0-9]*)\s*;",
    )
    .unwrap()
});

/// Running value for implicit enumerators
struct EnumCounter {
    /// Non-numeric expression the offset is relative to
    base: Option<String>,
    offset: i128,
}

impl EnumCounter {
    fn new() -> Self {
        Self {
            base: None,
            offset: -1,
        }
    }

    /// Restart counting from an explicit value
    fn reset(&mut self, literal: &str) {
        match parse_c_integer(literal) {
            Some(value) => {
                self.base = None;
                self.offset = value;
            }
            None => {
                self.base = Some(literal.to_string());
                self.offset = 0;
            }
        }
    }

    fn next_value(&mut self) -> String {
        self.offset = match self.offset.checked_add(1) {
            Some(next) => next,
            None => {
                // Past the largest representable value, count on from it as text
                let last = self.offset.to_string();
                self.base.get_or_insert(last);
                1
            }
        };
        match &self.base {
            None => self.offset.to_string(),
            Some(base) if self.offset == 0 => base.clone(),
            Some(base) if is_identifier(base) || base.bytes().all(|b| b.is_ascii_digit()) => {
                format!("{}+{}", base, self.offset)
            }
            Some(base) => format!("({})+{}", base, self.offset),
        }
    }
}

pub(super) fn extract_enum_typedefs(base: &mut BaseExtractor) -> Vec<Declaration> {
    let declarations: Vec<Declaration> = ENUM_TYPEDEF_RE
        .captures_iter(&base.content)
        .map(|caps| Declaration::Enum {
            new_name: caps[2].to_string(),
            underlying_type: ENUM_UNDERLYING_TYPE.to_string(),
            constants: parse_constants(&caps[1]),
        })
        .collect();

    if !declarations.is_empty() {
        debug!(
            "{}: {} enum typedefs found",
            base.framework,
            declarations.len()
        );
    }
    declarations
}

/// Split an enum body on commas and assign each constant its value
fn parse_constants(body: &str) -> Vec<EnumConstant> {
    let body = strip_comments(body);
    let mut counter = EnumCounter::new();
    let mut constants = Vec::new();

    for entry in body.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let name_end = entry
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(entry.len());
        let name = &entry[..name_end];
        if !is_identifier(name) {
            debug!("Skipping enum entry without a name: {}", entry);
            continue;
        }

        let explicit = entry[name_end..]
            .split_once('=')
            .map(|(_, value)| collapse_whitespace(value))
            .filter(|value| !value.is_empty());

        let value = match explicit {
            Some(literal) => {
                counter.reset(&literal);
                literal
            }
            None => counter.next_value(),
        };

        constants.push(EnumConstant {
            name: name.to_string(),
            value,
        });
    }

    constants
}

/// Parse a C integer literal: decimal, hex or octal, optional sign, optional
/// `U`/`L` suffixes and one level of parentheses
fn parse_c_integer(literal: &str) -> Option<i128> {
    let mut text = literal.trim();
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner.trim();
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text.strip_prefix('+').unwrap_or(text).trim_start()),
    };
    let digits = digits.trim_end_matches(['u', 'U', 'l', 'L']);

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i128::from_str_radix(&digits[1..], 8).ok()?
    } else if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<i128>().ok()?
    } else {
        return None;
    };

    Some(if negative { -magnitude } else { magnitude })
}
