// BaseExtractor shared by the C and Objective-C extractors
//
// Holds the cleaned framework text and the warnings collected while scanning
// it. Warnings are logged as they are recorded.

use tracing::warn;

use crate::error::ExtractionWarning;

/// Base state for one framework's extraction pass
pub struct BaseExtractor {
    pub framework: String,
    pub content: String,
    pub warnings: Vec<ExtractionWarning>,
}

impl BaseExtractor {
    pub fn new(framework: String, content: String) -> Self {
        Self {
            framework,
            content,
            warnings: Vec::new(),
        }
    }

    /// Log and record a non-fatal problem
    pub fn warn(&mut self, warning: ExtractionWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn take_warnings(&mut self) -> Vec<ExtractionWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Report parameters that could not be parsed for `owner`
    pub fn warn_unparsable_parameters(&mut self, owner: &str, text: &str) {
        self.warn(ExtractionWarning::UnparsableParameters {
            framework: self.framework.clone(),
            owner: owner.to_string(),
            text: text.to_string(),
        });
    }
}
