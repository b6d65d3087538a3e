//! C declaration extractor
//!
//! Finds the plain C declarations in a framework's cleaned header text. This
//! module is organized into focused submodules:
//!
//! - `signatures` - Parameter list parsing shared by functions and proc-pointers
//! - `typedefs` - Plain `typedef old new;` aliases
//! - `enums` - `typedef enum { ... } Name;` with constant values
//! - `proc_pointers` - `typedef ret (*Name)(params);`
//! - `functions` - `extern ret name(params)`

use crate::error::ExtractionWarning;
use crate::extractors::base::{BaseExtractor, Declaration};
use crate::extractors::registry::TypeRegistry;

// Internal modules
mod enums;
mod functions;
mod proc_pointers;
pub(crate) mod signatures;
mod typedefs;

/// Extractor for typedefs, enums, proc-pointer types and functions
pub struct CDeclExtractor {
    base: BaseExtractor,
}

impl CDeclExtractor {
    /// Create a new extractor over one framework's cleaned text
    pub fn new(framework: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(framework, content),
        }
    }

    /// Plain typedefs, resolving aliases of known proc-pointer types
    pub fn extract_typedefs(&mut self, registry: &TypeRegistry) -> Vec<Declaration> {
        typedefs::extract_typedefs(&mut self.base, registry)
    }

    pub fn extract_enum_typedefs(&mut self) -> Vec<Declaration> {
        enums::extract_enum_typedefs(&mut self.base)
    }

    /// Proc-pointer typedefs; every one found is added to `registry`
    pub fn extract_proc_pointers(&mut self, registry: &mut TypeRegistry) -> Vec<Declaration> {
        proc_pointers::extract_proc_pointers(&mut self.base, registry)
    }

    pub fn extract_functions(&mut self) -> Vec<Declaration> {
        functions::extract_functions(&mut self.base)
    }

    pub fn take_warnings(&mut self) -> Vec<ExtractionWarning> {
        self.base.take_warnings()
    }
}
