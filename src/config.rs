//! Run configuration for header import

/// Configuration for an import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Whether the rendered document starts with the commented preamble
    pub emit_preamble: bool,
    /// Timestamp text for the preamble's "Created on" line (omitted when `None`)
    pub generated_on: Option<String>,
    /// Whether to warn about characters the interface grammar does not accept
    pub check_invalid_characters: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            emit_preamble: true,
            generated_on: None,
            check_invalid_characters: true,
        }
    }
}

impl ImportConfig {
    /// Configuration that renders only the records, no preamble
    pub fn records_only() -> Self {
        Self {
            emit_preamble: false,
            ..Self::default()
        }
    }
}
