//! Line-oriented record output
//!
//! Every record is one line whose first character selects its kind:
//! `F` framework, `H` header, `*` class, `:` superclass, `(` category,
//! `<` protocol, `-`/`+` methods, `=` functions, `&` proc-pointer types,
//! `~` typedefs and `e` enum constants. Lines starting with `#` are comments.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::base::{
    Declaration, Framework, InterfaceKind, ObjcInterface, Signature, VARIADIC_TOKEN,
};

const FORMAT_LEGEND: &[&str] = &[
    "The first character of every line says what the line holds. 'F' names the",
    "framework the following items come from, 'H' the header that was imported",
    "to find them. '*' starts a class; the lines up to the next blank line belong",
    "to it. ':' gives the superclass of that class (empty for root classes),",
    "'(' the name of a category on it. '<' names an adopted protocol, one per line.",
    "",
    "'-' lines are instance methods and '+' lines class methods: the selector,",
    "the return type and the parameter types, separated by commas.",
    "",
    "'=' lines are functions, in the same layout as method lines.",
    "",
    "'~' lines are typedefs: the new type name, a comma, and the type it stands",
    "for. '&' lines are typedefs of procedure pointers, followed by the return",
    "and parameter types. 'e' lines are enum constants and their values, which",
    "are not always numbers.",
    "",
    "A trailing '...' parameter marks a variadic function or method.",
    "",
    "Skip empty lines and lines starting with any other character; new record",
    "kinds may be added later.",
];

/// The commented header block that starts a document
pub fn render_preamble(framework_names: &[&str], generated_on: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("# Generated by headerimport from the following framework headers:\n");
    for name in framework_names.iter().filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "#\t{}", name);
    }
    out.push_str("# \n");
    for line in FORMAT_LEGEND {
        let _ = writeln!(out, "# {}", line);
    }
    if let Some(timestamp) = generated_on {
        out.push_str("# \n");
        let _ = writeln!(out, "# Created on {}", timestamp);
    }
    out.push('\n');
    out
}

/// Append one framework's records
pub fn render_framework(framework: &Framework, out: &mut String) {
    let _ = writeln!(out, "F{}", framework.display_name);
    let _ = writeln!(out, "H{}", framework.header_subpath);

    for decl in &framework.declarations {
        match decl {
            Declaration::TypedefAlias {
                new_name,
                underlying_type,
            } => {
                let _ = writeln!(out, "~{},{}", new_name, underlying_type);
            }
            Declaration::Enum {
                new_name,
                underlying_type,
                constants,
            } => {
                let _ = writeln!(out, "~{},{}", new_name, underlying_type);
                for constant in constants {
                    let _ = writeln!(out, "e{},{}", constant.name, constant.value);
                }
            }
            Declaration::ProcPointer { name, signature } => {
                signature_line(out, '&', name, signature);
            }
            Declaration::Function { name, signature } => {
                signature_line(out, '=', name, signature);
            }
            Declaration::Interface(interface) => render_interface(interface, out),
        }
    }
}

fn render_interface(interface: &ObjcInterface, out: &mut String) {
    let _ = writeln!(out, "*{}", interface.name);
    match &interface.kind {
        InterfaceKind::Class { superclass } => {
            let _ = writeln!(out, ":{}", superclass.as_deref().unwrap_or(""));
        }
        InterfaceKind::Category { category } => {
            let _ = writeln!(out, "({}", category);
        }
    }
    for protocol in &interface.protocols {
        let _ = writeln!(out, "<{}", protocol);
    }
    for method in &interface.methods {
        signature_line(out, method.dispatch.marker(), &method.selector, &method.signature);
    }
    out.push('\n');
}

/// `<marker><name>,<ret>[,<param>]*[,...]`
fn signature_line(out: &mut String, marker: char, name: &str, signature: &Signature) {
    out.push(marker);
    out.push_str(name);
    out.push(',');
    out.push_str(&signature.return_type);
    for param in &signature.params {
        out.push(',');
        out.push_str(param);
    }
    if signature.variadic {
        out.push(',');
        out.push_str(VARIADIC_TOKEN);
    }
    out.push('\n');
}

/// A fully rendered output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    text: String,
}

impl HeaderDocument {
    pub fn render(frameworks: &[Framework], config: &ImportConfig) -> Self {
        let mut text = String::new();
        if config.emit_preamble {
            let names: Vec<&str> = frameworks
                .iter()
                .map(|f| f.display_name.as_str())
                .collect();
            text.push_str(&render_preamble(&names, config.generated_on.as_deref()));
        }
        for framework in frameworks {
            render_framework(framework, &mut text);
        }
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Write the document, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<(), ImportError> {
        fs::write(path, &self.text).map_err(|source| ImportError::WriteDocument {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {} bytes to {}", self.text.len(), path.display());
        Ok(())
    }
}
