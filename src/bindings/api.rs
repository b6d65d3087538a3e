// API Functions - PyO3-exposed functions for Python
//
// The preprocessor itself runs on the Python side: build the import source,
// preprocess it, then hand the output and header paths back to `import_headers`.

use super::PyImportResults;
use crate::config::ImportConfig;
use crate::emitter::HeaderDocument;
use crate::extractors::HeaderImporter;
use crate::frameworks::{build_import_source as build_source, FrameworkRequest, DEFAULT_FRAMEWORKS};
use anyhow::Context;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::Path;

fn config_for(emit_preamble: bool, generated_on: Option<String>) -> ImportConfig {
    ImportConfig {
        emit_preamble,
        generated_on,
        ..ImportConfig::default()
    }
}

/// Import preprocessed framework headers and render the record document
///
/// Args:
///     text (str): Preprocessor output of the import source
///     header_paths (list[str]): Header path for each framework marker, in order
///     emit_preamble (bool): Start the document with the commented preamble
///     generated_on (str | None): Timestamp for the preamble's "Created on" line
///
/// Returns:
///     ImportResults: The rendered document plus warnings and framework names
///
/// Raises:
///     ValueError: If the text carries no framework boundary markers
#[pyfunction]
#[pyo3(signature = (text, header_paths, emit_preamble = true, generated_on = None))]
pub fn import_headers(
    text: &str,
    header_paths: Vec<String>,
    emit_preamble: bool,
    generated_on: Option<String>,
) -> PyResult<PyImportResults> {
    let mut importer = HeaderImporter::with_config(config_for(emit_preamble, generated_on));

    let results = importer
        .import(text, &header_paths)
        .map_err(|e| PyValueError::new_err(format!("Header import failed: {}", e)))?;
    let document = HeaderDocument::render(&results.frameworks, importer.config());

    Ok(PyImportResults::new(document, results))
}

/// Import preprocessed headers from a file and write the document to another
///
/// Returns:
///     ImportResults: Same as `import_headers`
#[pyfunction]
#[pyo3(signature = (input_path, header_paths, output_path, generated_on = None))]
pub fn import_header_file(
    input_path: &str,
    header_paths: Vec<String>,
    output_path: &str,
    generated_on: Option<String>,
) -> anyhow::Result<PyImportResults> {
    let mut importer = HeaderImporter::with_config(config_for(true, generated_on));

    let results = importer
        .import_file(Path::new(input_path), &header_paths, Path::new(output_path))
        .with_context(|| format!("Failed to import {}", input_path))?;
    let document = HeaderDocument::render(&results.frameworks, importer.config());

    Ok(PyImportResults::new(document, results))
}

/// Extract the declaration records as JSON instead of the line format
///
/// Returns:
///     str: JSON array with one object per framework
#[pyfunction]
#[pyo3(signature = (text, header_paths))]
pub fn extract_frameworks_json(text: &str, header_paths: Vec<String>) -> anyhow::Result<String> {
    let mut importer = HeaderImporter::new();
    let results = importer.import(text, &header_paths)?;

    serde_json::to_string(&results.frameworks).context("Failed to serialize frameworks")
}

/// Build the source to run through the preprocessor
///
/// Args:
///     frameworks (list[str] | None): Names like "AppKit" or headers like
///         "Carbon/Carbon.h"; the default framework list when omitted
///
/// Returns:
///     tuple[str, list[str]]: Source text and the header path for every marker
#[pyfunction]
#[pyo3(signature = (frameworks = None))]
pub fn build_import_source(frameworks: Option<Vec<String>>) -> (String, Vec<String>) {
    let requests = match frameworks {
        Some(names) => names.iter().map(|n| FrameworkRequest::parse(n)).collect(),
        None => FrameworkRequest::defaults(),
    };
    build_source(&requests)
}

/// Frameworks imported when none are named
#[pyfunction]
pub fn default_frameworks() -> Vec<String> {
    DEFAULT_FRAMEWORKS.iter().map(|s| s.to_string()).collect()
}
