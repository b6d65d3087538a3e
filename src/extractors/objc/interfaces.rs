//! `@interface ... @end` blocks: classes and categories
//!
//! The header clause is matched by one pattern; the body is cleaned, split
//! into ivars and members, and every member is classified before it is parsed.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

use super::ivars::split_ivar_block;
use super::members::{classify_member, MemberDecl};
use super::methods::{parse_method, MethodError};
use super::properties::parse_property;
use crate::cleaning::{collapse_whitespace, strip_comments, ACCEPTED_SYMBOLS};
use crate::error::ExtractionWarning;
use crate::extractors::base::{BaseExtractor, Declaration, InterfaceKind, ObjcInterface};

/// Optional `<Proto, Proto>` list, captured under `group`
fn protocols_pattern(group: &str) -> String {
    format!(r"(?:<(?P<{}>[A-Za-z0-9_,\s]*)>\s*)?", group)
}

static INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"@interface\s*(?P<name>[A-Za-z0-9_]+)\s*(?::\s*(?P<superclass>[A-Za-z0-9_]+)\s*{super_protos}|\(\s*(?P<category>[A-Za-z0-9_]*)\s*\)\s*{cat_protos}|{root_protos})\s*(?P<body>[{symbols}]*?)\s*@end",
        super_protos = protocols_pattern("super_protos"),
        cat_protos = protocols_pattern("cat_protos"),
        root_protos = protocols_pattern("root_protos"),
        symbols = ACCEPTED_SYMBOLS,
    );
    Regex::new(&pattern).unwrap()
});

pub(super) fn extract_interfaces(base: &mut BaseExtractor) -> Vec<Declaration> {
    let content = std::mem::take(&mut base.content);

    let interfaces: Vec<Declaration> = INTERFACE_RE
        .captures_iter(&content)
        .map(|caps| Declaration::Interface(build_interface(base, &caps)))
        .collect();

    base.content = content;

    if !interfaces.is_empty() {
        debug!(
            "{}: {} classes found",
            base.framework,
            interfaces.len()
        );
    }
    interfaces
}

fn build_interface(base: &mut BaseExtractor, caps: &Captures) -> ObjcInterface {
    let name = caps["name"].to_string();

    // An empty `()` is not a category
    let category = caps
        .name("category")
        .map(|m| m.as_str())
        .filter(|c| !c.is_empty());
    let kind = match category {
        Some(category) => InterfaceKind::Category {
            category: category.to_string(),
        },
        None => InterfaceKind::Class {
            superclass: caps.name("superclass").map(|m| m.as_str().to_string()),
        },
    };

    let protocols = ["super_protos", "cat_protos", "root_protos"]
        .iter()
        .find_map(|group| caps.name(group))
        .map(|m| split_protocols(m.as_str()))
        .unwrap_or_default();

    let body = collapse_whitespace(&strip_comments(&caps["body"]));
    let split = split_ivar_block(&body);
    if !split.balanced {
        base.warn(ExtractionWarning::UnbalancedIvars {
            framework: base.framework.clone(),
            interface: name.clone(),
        });
    }

    let mut interface = ObjcInterface {
        name,
        kind,
        protocols,
        ivars: split.ivars.to_string(),
        methods: Vec::new(),
    };
    parse_members(base, &mut interface, split.members);
    interface
}

fn split_protocols(list: &str) -> Vec<String> {
    let mut protocols: Vec<String> = Vec::new();
    for proto in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !protocols.iter().any(|p| p == proto) {
            protocols.push(proto.to_string());
        }
    }
    protocols
}

fn parse_members(base: &mut BaseExtractor, interface: &mut ObjcInterface, members: &str) {
    for entry in members.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        match classify_member(entry) {
            MemberDecl::Method(dispatch, text) => match parse_method(dispatch, text) {
                Ok(method) => interface.methods.push(method),
                Err(MethodError::MissingReturnType) => {
                    base.warn(ExtractionWarning::MissingReturnType {
                        framework: base.framework.clone(),
                        interface: interface.name.clone(),
                        text: text.to_string(),
                    });
                }
                Err(MethodError::UnparsableSelector) => {
                    base.warn_unparsable_parameters(&interface.name, text);
                }
            },
            MemberDecl::Property(text) => match parse_property(text) {
                Some(accessors) => interface.methods.extend(accessors),
                None => base.warn(ExtractionWarning::UnmatchedProperty {
                    framework: base.framework.clone(),
                    interface: interface.name.clone(),
                    text: text.to_string(),
                }),
            },
            MemberDecl::Ignored => {}
            MemberDecl::Unrecognized(text) => {
                base.warn(ExtractionWarning::UnrecognizedMember {
                    framework: base.framework.clone(),
                    interface: interface.name.clone(),
                    text: text.to_string(),
                });
            }
        }
    }
}
