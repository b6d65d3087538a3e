// PyO3 Bindings Module
//
// Python access to the header importer. Built only with the `python` feature.

mod api;
mod import_results;

// Re-export for lib.rs
pub use api::{
    build_import_source, default_frameworks, extract_frameworks_json, import_header_file,
    import_headers,
};
pub use import_results::PyImportResults;
