//! Function-pointer typedefs: `typedef <ret> (*<Name>)(<params>);`

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::signatures::build_signature;
use crate::extractors::base::{BaseExtractor, Declaration};
use crate::extractors::registry::TypeRegistry;

static PROC_PTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\btypedef\s+((?:(?:const|volatile|unsigned|signed|long|short|struct|union|enum)\s+)*[A-Za-z_][A-Za-z_0-9]*(?:\s*\*)*)\s*\(\s*\*\s*([A-Za-z_][A-Za-z_0-9]*)\s*\)\s*\(([^)]*)\)",
    )
    .unwrap()
});

/// Extract proc-pointer typedefs and register each one in `registry`
pub(super) fn extract_proc_pointers(
    base: &mut BaseExtractor,
    registry: &mut TypeRegistry,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    let matches: Vec<(String, String, String)> = PROC_PTR_RE
        .captures_iter(&base.content)
        .map(|caps| (caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
        .collect();

    for (return_type, name, param_list) in matches {
        let Some(signature) = build_signature(&return_type, &param_list) else {
            base.warn_unparsable_parameters(&name, &param_list);
            continue;
        };

        registry.register(&name, &signature);
        declarations.push(Declaration::ProcPointer { name, signature });
    }

    if !declarations.is_empty() {
        debug!(
            "{}: {} procPointer types found",
            base.framework,
            declarations.len()
        );
    }
    declarations
}
