//! Method declaration parsing: `- (ret)label:(type)name label2:(type)name2, ...`

use crate::cleaning::normalize_type;
use crate::extractors::base::{Dispatch, Method, Signature};

/// Type assumed when a return or parameter type is left out
const DEFAULT_OBJECT_TYPE: &str = "id";

#[derive(Debug, PartialEq, Eq)]
pub(super) enum MethodError {
    /// The parenthesized return type is never closed
    MissingReturnType,
    /// No selector label or an unreadable parameter type
    UnparsableSelector,
}

/// Byte cursor over a method declaration. Every delimiter it stops at is
/// ASCII, so all slice positions are char boundaries.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// Read a parenthesized group, cursor on the `(`; returns the inner text
    fn balanced_parens(&mut self) -> Option<&'a str> {
        let start = self.pos + 1;
        let mut depth = 0usize;
        while let Some(byte) = self.peek() {
            self.pos += 1;
            match byte {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&self.text[start..self.pos - 1]);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Parse one method entry (without the terminating `;`)
pub(super) fn parse_method(dispatch: Dispatch, entry: &str) -> Result<Method, MethodError> {
    let body = entry
        .trim()
        .trim_start_matches(['-', '+'])
        .trim_start();
    let mut cursor = Cursor::new(body);

    let return_type = if cursor.peek() == Some(b'(') {
        let inner = cursor
            .balanced_parens()
            .ok_or(MethodError::MissingReturnType)?;
        parameter_type(inner)
    } else {
        DEFAULT_OBJECT_TYPE.to_string()
    };

    let mut selector = String::new();
    let mut params = Vec::new();
    let mut variadic = false;

    loop {
        cursor.skip_whitespace();
        if cursor.eat(b',') {
            cursor.skip_whitespace();
            variadic = cursor.rest().starts_with("...");
            break;
        }

        let label = cursor.identifier();
        cursor.skip_whitespace();
        if !cursor.eat(b':') {
            // A leading identifier without a colon is a zero-argument
            // selector; colons later on belong to trailing attributes
            if params.is_empty() && !label.is_empty() {
                return Ok(Method {
                    dispatch,
                    selector: label.to_string(),
                    signature: Signature::new(return_type, Vec::new()),
                });
            }
            break;
        }
        cursor.skip_whitespace();

        let param = if cursor.peek() == Some(b'(') {
            let inner = cursor
                .balanced_parens()
                .ok_or(MethodError::UnparsableSelector)?;
            // A comma would break the output record
            if inner.contains(',') {
                return Err(MethodError::UnparsableSelector);
            }
            parameter_type(inner)
        } else {
            DEFAULT_OBJECT_TYPE.to_string()
        };
        cursor.skip_whitespace();
        cursor.identifier();

        selector.push_str(label);
        selector.push(':');
        params.push(param);
    }

    if params.is_empty() {
        return Err(MethodError::UnparsableSelector);
    }

    Ok(Method {
        dispatch,
        selector,
        signature: Signature::new(return_type, params).variadic(variadic),
    })
}

/// Normalize a parenthesized type; `[]` counts as a pointer
fn parameter_type(raw: &str) -> String {
    let ty = normalize_type(&raw.replace("[]", "*"));
    if ty.is_empty() {
        DEFAULT_OBJECT_TYPE.to_string()
    } else {
        ty
    }
}
