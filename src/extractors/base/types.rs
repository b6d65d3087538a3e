// Declaration record types
//
// Everything the extractors produce for one framework, in a form the emitter
// can serialize without looking back at the source text.

use serde::{Deserialize, Serialize};

/// Token used for a variadic parameter in signatures
pub const VARIADIC_TOKEN: &str = "...";

/// Underlying type recorded for every enum typedef
pub const ENUM_UNDERLYING_TYPE: &str = "int";

/// One framework's extracted declarations
///
/// `declarations` is kept in emission order: typedef section, enums,
/// proc-pointer types, functions, interfaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Framework {
    /// Name from the boundary marker (empty for the runtime prelude)
    pub display_name: String,
    /// Header that was imported to produce this framework's text
    pub header_subpath: String,
    pub declarations: Vec<Declaration>,
}

impl Framework {
    pub fn interfaces(&self) -> impl Iterator<Item = &ObjcInterface> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Interface(interface) => Some(interface),
            _ => None,
        })
    }

    /// Look up an interface by name (classes before categories of the same name)
    pub fn interface(&self, name: &str) -> Option<&ObjcInterface> {
        self.interfaces()
            .find(|i| i.name == name && !i.is_category())
            .or_else(|| self.interfaces().find(|i| i.name == name))
    }
}

/// Return type plus parameter types of a function, method or proc-pointer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Signature {
    pub return_type: String,
    pub params: Vec<String>,
    /// Trailing `...`; never part of `params`
    pub variadic: bool,
}

impl Signature {
    pub fn new(return_type: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            return_type: return_type.into(),
            params,
            variadic: false,
        }
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }
}

/// A single extracted declaration
///
/// Tagged by `type`; interfaces already carry a `kind` field of their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Declaration {
    /// `typedef <underlying_type> <new_name>;`
    TypedefAlias {
        new_name: String,
        underlying_type: String,
    },
    /// `typedef <ret> (*<name>)(<params>);`, or a plain typedef of one
    ProcPointer { name: String, signature: Signature },
    /// `typedef enum { ... } <new_name>;`
    Enum {
        new_name: String,
        underlying_type: String,
        constants: Vec<EnumConstant>,
    },
    /// `extern <ret> <name>(<params>)`
    Function { name: String, signature: Signature },
    /// `@interface ... @end`
    Interface(ObjcInterface),
}

/// One enumerator; `value` is literal text and need not be numeric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub value: String,
}

/// Whether an `@interface` declares a class or a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceKind {
    /// Root classes have no superclass
    Class { superclass: Option<String> },
    /// The interface name is the host class
    Category { category: String },
}

/// A class or category with its protocols, ivars and methods
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjcInterface {
    /// Class name (the host class for categories)
    pub name: String,
    pub kind: InterfaceKind,
    /// Adopted protocols in declaration order, without duplicates
    pub protocols: Vec<String>,
    /// Raw text between the outer ivar braces
    pub ivars: String,
    pub methods: Vec<Method>,
}

impl ObjcInterface {
    pub fn is_category(&self) -> bool {
        matches!(self.kind, InterfaceKind::Category { .. })
    }

    pub fn method(&self, selector: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.selector == selector)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// `-` methods
    Instance,
    /// `+` methods
    Class,
}

impl Dispatch {
    pub fn marker(&self) -> char {
        match self {
            Dispatch::Instance => '-',
            Dispatch::Class => '+',
        }
    }
}

/// An Objective-C method, or one half of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Method {
    pub dispatch: Dispatch,
    /// Colon-joined labels, e.g. `initWithFrame:options:`
    pub selector: String,
    pub signature: Signature,
}
