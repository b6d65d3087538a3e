//! `@property` parsing. Each property becomes a getter method and, unless it
//! is `readonly`, a setter method emitted before the getter.

use regex::Regex;
use std::sync::LazyLock;

use crate::cleaning::normalize_type;
use crate::extractors::base::{Dispatch, Method, Signature};

static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@property\s*(?:\((?P<attrs>[^)]*)\))?\s*(?P<type>(?:(?:const|volatile|unsigned|signed|long|short|struct|union|enum)\s+)*[A-Za-z_][A-Za-z_0-9]*\s*(?:<\s*[A-Za-z_][A-Za-z_0-9]*\s*>)?[\s*]*)\b(?P<name>[A-Za-z_][A-Za-z_0-9]*)",
    )
    .unwrap()
});

/// `nonatomic`, `getter=isFoo`, `setter=setFoo:` and the like
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:getter|setter)\s*=\s*)?[A-Za-z_][A-Za-z_0-9]*:?$").unwrap()
});

/// Parse a property entry into its accessor methods, setter first
///
/// Returns `None` when the entry doesn't match the property grammar.
pub(super) fn parse_property(entry: &str) -> Option<Vec<Method>> {
    let caps = PROPERTY_RE.captures(entry.trim())?;

    let attributes: Vec<&str> = match caps.name("attrs") {
        Some(attrs) if !attrs.as_str().trim().is_empty() => {
            attrs.as_str().split(',').map(str::trim).collect()
        }
        _ => Vec::new(),
    };
    if !attributes.iter().all(|attr| ATTRIBUTE_RE.is_match(attr)) {
        return None;
    }

    let ty = normalize_type(&caps["type"]);
    let name = &caps["name"];

    let mut getter = name.to_string();
    let mut setter = format!("set{}:", capitalize(name));
    let mut readonly = false;
    let mut dispatch = Dispatch::Instance;

    for attr in &attributes {
        match attr.split_once('=') {
            Some((key, value)) if key.trim() == "getter" => getter = value.trim().to_string(),
            Some((key, value)) if key.trim() == "setter" => {
                setter = value.trim().to_string();
                if !setter.ends_with(':') {
                    setter.push(':');
                }
            }
            _ if *attr == "readonly" => readonly = true,
            _ if *attr == "class" => dispatch = Dispatch::Class,
            _ => {}
        }
    }

    let mut methods = Vec::with_capacity(2);
    if !readonly {
        methods.push(Method {
            dispatch,
            selector: setter,
            signature: Signature::new("void", vec![ty.clone()]),
        });
    }
    methods.push(Method {
        dispatch,
        selector: getter,
        signature: Signature::new(ty, Vec::new()),
    });

    Some(methods)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accessors(entry: &str) -> Vec<(Dispatch, String, String, Vec<String>)> {
        parse_property(entry)
            .expect("property should parse")
            .into_iter()
            .map(|m| {
                (
                    m.dispatch,
                    m.selector,
                    m.signature.return_type,
                    m.signature.params,
                )
            })
            .collect()
    }

    #[test]
    fn test_plain_property_has_setter_then_getter() {
        assert_eq!(
            accessors("@property NSString* title"),
            vec![
                (
                    Dispatch::Instance,
                    "setTitle:".to_string(),
                    "void".to_string(),
                    vec!["NSString*".to_string()]
                ),
                (Dispatch::Instance, "title".to_string(), "NSString*".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_readonly_with_custom_getter() {
        assert_eq!(
            accessors("@property (readonly, getter=isEnabled) BOOL enabled"),
            vec![(Dispatch::Instance, "isEnabled".to_string(), "BOOL".to_string(), vec![])]
        );
    }

    #[test]
    fn test_custom_setter_gets_colon() {
        let methods = accessors("@property (nonatomic, setter=assignValue) NSInteger value");
        assert_eq!(methods[0].1, "assignValue:");

        let methods = accessors("@property (setter=setTheValue:) NSInteger value");
        assert_eq!(methods[0].1, "setTheValue:");
    }

    #[test]
    fn test_qualified_and_protocol_types() {
        let methods = accessors("@property (assign) unsigned int count");
        assert_eq!(methods[1].1, "count");
        assert_eq!(methods[1].2, "unsigned int");

        let methods = accessors("@property (weak) id <NSTableViewDelegate> delegate");
        assert_eq!(methods[0].3, vec!["id<NSTableViewDelegate>".to_string()]);
    }

    #[test]
    fn test_class_property_uses_class_dispatch() {
        let methods = accessors("@property (class, readonly) NSApplication *sharedApplication");
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].0, Dispatch::Class);
        assert_eq!(methods[0].2, "NSApplication*");
    }

    #[test]
    fn test_unmatched_properties() {
        assert!(parse_property("@property void (^handler)(int)").is_none());
        assert!(parse_property("@property (copy, nullable(x)) id y").is_none());
        assert!(parse_property("@dynamic foo").is_none());
    }
}
