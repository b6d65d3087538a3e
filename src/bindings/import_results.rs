// PyImportResults - PyO3 wrapper for an import run's output

use crate::emitter::HeaderDocument;
use crate::extractors::ImportResults;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible import results
///
/// Holds the rendered document together with the extracted frameworks and
/// the warnings raised while extracting them
#[pyclass(name = "ImportResults")]
pub struct PyImportResults {
    document: HeaderDocument,
    inner: ImportResults,
}

impl PyImportResults {
    pub fn new(document: HeaderDocument, results: ImportResults) -> Self {
        PyImportResults {
            document,
            inner: results,
        }
    }
}

#[pymethods]
impl PyImportResults {
    #[getter]
    fn document(&self) -> String {
        self.document.as_str().to_string()
    }

    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.inner.warnings.iter().map(|w| w.to_string()).collect()
    }

    #[getter]
    fn framework_names(&self) -> Vec<String> {
        self.inner
            .frameworks
            .iter()
            .map(|f| f.display_name.clone())
            .collect()
    }

    /// Frameworks and warnings as a JSON object
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Failed to serialize results: {}", e)))
    }

    /// Write the document to `path`
    fn write(&self, path: &str) -> PyResult<()> {
        self.document
            .write_to(std::path::Path::new(path))
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "ImportResults(frameworks={}, warnings={}, bytes={})",
            self.inner.frameworks.len(),
            self.inner.warnings.len(),
            self.document.as_str().len()
        )
    }
}
