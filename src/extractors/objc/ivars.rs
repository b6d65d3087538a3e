//! Instance variable block splitting
//!
//! Ivar lists may contain anonymous structs, unions and enums nested to any
//! depth, so the block is found with a brace counter rather than a pattern.

/// An interface body split into its ivar block and member declarations
#[derive(Debug, PartialEq, Eq)]
pub(super) struct IvarSplit<'a> {
    /// Text between the outer braces
    pub ivars: &'a str,
    /// Everything after the balancing `}`
    pub members: &'a str,
    /// False when the body ended before the outer `{` was closed
    pub balanced: bool,
}

/// Split a trimmed interface body at the end of its leading `{ ... }` block
///
/// A body that doesn't start with `{` has no ivars.
pub(super) fn split_ivar_block(body: &str) -> IvarSplit<'_> {
    if !body.starts_with('{') {
        return IvarSplit {
            ivars: "",
            members: body,
            balanced: true,
        };
    }

    let mut depth = 0usize;
    for (index, byte) in body.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return IvarSplit {
                        ivars: body[1..index].trim(),
                        members: body[index + 1..].trim(),
                        balanced: true,
                    };
                }
            }
            _ => {}
        }
    }

    IvarSplit {
        ivars: body[1..].trim(),
        members: "",
        balanced: false,
    }
}
