// Headerimport Core - Objective-C framework header importer
//
// Reads preprocessed framework headers and produces a line-oriented inventory
// of classes, categories, methods, functions, typedefs and enum constants.
// Architecture: chunker -> junk filter -> extractors (with a shared type
// registry) -> emitter. Optional Python bindings sit on top.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod chunker;
pub mod cleaning;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractors;
pub mod frameworks;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use config::ImportConfig;
pub use emitter::{render_framework, render_preamble, HeaderDocument};
pub use error::{ExtractionWarning, ImportError};
pub use extractors::{
    Declaration, Dispatch, EnumConstant, Framework, HeaderImporter, ImportResults, InterfaceKind,
    Method, ObjcInterface, Signature, TypeRegistry,
};
pub use frameworks::{build_import_source, FrameworkRequest, DEFAULT_FRAMEWORKS};

/// Import preprocessed headers and render the record document in one call
pub fn import_headers(
    text: &str,
    header_paths: &[String],
    config: &ImportConfig,
) -> Result<String, ImportError> {
    let mut importer = HeaderImporter::with_config(config.clone());
    Ok(importer.import_document(text, header_paths)?.into_string())
}

/// Headerimport Core Python module
#[cfg(feature = "python")]
#[pymodule]
fn headerimport_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::import_headers, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::import_header_file, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_frameworks_json, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::build_import_source, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::default_frameworks, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyImportResults>()?;

    Ok(())
}
