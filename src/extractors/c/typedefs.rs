//! Plain `typedef <existing> <new>;` declarations

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::extractors::base::{BaseExtractor, Declaration};
use crate::extractors::registry::TypeRegistry;

/// `typedef [unsigned|signed|long|short ...] <old> <new>;`
static TYPEDEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\btypedef\s+((?:(?:un)?signed\s+|(?:long|short|const|volatile)\s+)*[A-Za-z_][A-Za-z_0-9]*)\s+([A-Za-z_][A-Za-z_0-9]*)\s*;",
    )
    .unwrap()
});

/// Extract plain typedefs; aliases of registered proc-pointer types become
/// proc-pointer records with the same signature
pub(super) fn extract_typedefs(
    base: &mut BaseExtractor,
    registry: &TypeRegistry,
) -> Vec<Declaration> {
    let declarations: Vec<Declaration> = TYPEDEF_RE
        .captures_iter(&base.content)
        .map(|caps| {
            let old_name = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
            let new_name = caps[2].to_string();

            match registry.lookup(&old_name) {
                Some(signature) => Declaration::ProcPointer {
                    name: new_name,
                    signature: signature.clone(),
                },
                None => Declaration::TypedefAlias {
                    new_name,
                    underlying_type: old_name,
                },
            }
        })
        .collect();

    if !declarations.is_empty() {
        debug!(
            "{}: {} typedefs found",
            base.framework,
            declarations.len()
        );
    }
    declarations
}
