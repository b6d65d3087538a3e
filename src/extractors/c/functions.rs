//! `extern ["C"] <ret> <name>(<params>)` function declarations

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::signatures::build_signature;
use crate::extractors::base::{BaseExtractor, Declaration};

static EXTERN_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bextern\s+(?:"C"\s*)?((?:(?:const|volatile|unsigned|signed|long|short|struct|union|enum)\s+)*[A-Za-z_][A-Za-z_0-9]*(?:\s*\*)*)\s*\b([A-Za-z_][A-Za-z_0-9]*)\s*\(([^)]*)\)"#,
    )
    .unwrap()
});

pub(super) fn extract_functions(base: &mut BaseExtractor) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    let matches: Vec<(String, String, String)> = EXTERN_FUNCTION_RE
        .captures_iter(&base.content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
        .collect();

    for (return_type, name, param_list) in matches {
        match build_signature(&return_type, &param_list) {
            Some(signature) => declarations.push(Declaration::Function { name, signature }),
            None => base.warn_unparsable_parameters(&name, &param_list),
        }
    }

    if !declarations.is_empty() {
        debug!(
            "{}: {} functions found",
            base.framework,
            declarations.len()
        );
    }
    declarations
}
