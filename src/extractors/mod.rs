//! Declaration extractors
//!
//! Each extractor works on one framework's cleaned text and produces
//! declaration records for the emitter.
//!
//! # Architecture
//!
//! - `base` - Shared extractor state and the declaration record types
//! - `registry` - Proc-pointer type registry, shared across frameworks
//! - `manager` - HeaderImporter public API, runs the whole pipeline
//! - `c` - Typedefs, enum typedefs, proc-pointer typedefs, extern functions
//! - `objc` - `@interface` classes and categories

pub mod base;
pub mod c;
pub mod manager;
pub mod objc;
pub mod registry;

// Re-export the public API
pub use base::{
    Declaration, Dispatch, EnumConstant, Framework, InterfaceKind, Method, ObjcInterface,
    Signature,
};
pub use manager::{HeaderImporter, ImportResults};
pub use registry::TypeRegistry;
