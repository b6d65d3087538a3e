//! Objective-C interface extractor
//!
//! Extracts classes and categories together with their protocols, ivar
//! blocks, methods and properties:
//!
//! - `interfaces` - `@interface ... @end` matching and body handling
//! - `ivars` - Brace-counting split of the ivar block
//! - `members` - Classification of body entries (method, property, ignored)
//! - `methods` - Selector and parameter type parsing
//! - `properties` - `@property` to getter/setter methods

use crate::cleaning::find_invalid_characters;
use crate::error::ExtractionWarning;
use crate::extractors::base::{BaseExtractor, Declaration};

mod interfaces;
mod ivars;
mod members;
mod methods;
mod properties;

/// Extractor for `@interface` declarations
pub struct ObjcExtractor {
    base: BaseExtractor,
}

impl ObjcExtractor {
    pub fn new(framework: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(framework, content),
        }
    }

    /// Warn once if the text holds characters the interface grammar doesn't
    /// accept. Interfaces containing them will not be matched.
    pub fn check_invalid_characters(&mut self) {
        if let Some((chars, line)) = find_invalid_characters(&self.base.content) {
            self.base.warn(ExtractionWarning::InvalidCharacters {
                framework: self.base.framework.clone(),
                chars,
                line,
            });
        }
    }

    /// All classes and categories, in source order
    pub fn extract_interfaces(&mut self) -> Vec<Declaration> {
        interfaces::extract_interfaces(&mut self.base)
    }

    pub fn take_warnings(&mut self) -> Vec<ExtractionWarning> {
        self.base.take_warnings()
    }
}
