// Base extractor state and declaration record types
//
// - types.rs: Framework, Declaration, Signature, ObjcInterface, Method
// - extractor.rs: BaseExtractor (framework text + collected warnings)

pub mod extractor;
pub mod types;

pub use extractor::BaseExtractor;
pub use types::{
    Declaration, Dispatch, EnumConstant, Framework, InterfaceKind, Method, ObjcInterface,
    Signature, ENUM_UNDERLYING_TYPE, VARIADIC_TOKEN,
};
