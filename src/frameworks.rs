//! Framework requests and the import source handed to the preprocessor
//!
//! The importer does not run the preprocessor itself. `build_import_source`
//! writes the stub source whose preprocessed output `HeaderImporter::import`
//! expects, together with the header path for every boundary marker in it.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::chunker::FRAMEWORK_MARKER;

/// Frameworks imported when the caller doesn't name any
pub const DEFAULT_FRAMEWORKS: &[&str] = &[
    "CoreFoundation",
    "ApplicationServices",
    "Carbon",
    "Foundation",
    "AppKit",
    "WebKit",
    "AddressBook",
    "QTKit",
    "ScreenSaver",
    "AVFoundation",
    "QuartzCore",
    "AVKit",
    "EventKit",
];

/// Header paired with the unnamed runtime prelude marker
pub const PRELUDE_HEADER: &str = "objc/NSObjCRuntime.h";

/// System headers every import pulls in ahead of the frameworks
const PRELUDE_IMPORTS: &[&str] = &[
    PRELUDE_HEADER,
    "stdio.h",
    "stddef.h",
    "string.h",
    "stdint.h",
];

/// A framework to import and the header that pulls it in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkRequest {
    pub display_name: String,
    pub header_subpath: String,
}

impl FrameworkRequest {
    /// `"AppKit"` imports `AppKit/AppKit.h`; `"Carbon/Carbon.h"` names the
    /// header directly and takes the display name from its directory part
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match name.split_once('/') {
            Some((framework, _)) => Self {
                display_name: framework.to_string(),
                header_subpath: name.to_string(),
            },
            None => Self {
                display_name: name.to_string(),
                header_subpath: format!("{}/{}.h", name, name),
            },
        }
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_FRAMEWORKS.iter().map(|name| Self::parse(name)).collect()
    }
}

/// Build the preprocessor input for `requests`
///
/// Returns the source text and the header path for every boundary marker it
/// contains, in marker order. The runtime prelude comes first, under an empty
/// framework name.
pub fn build_import_source(requests: &[FrameworkRequest]) -> (String, Vec<String>) {
    let mut source = String::new();
    let mut header_paths = Vec::with_capacity(requests.len() + 1);

    let _ = writeln!(source, "{}\"", FRAMEWORK_MARKER);
    for header in PRELUDE_IMPORTS {
        let _ = writeln!(source, "#import <{}>", header);
    }
    header_paths.push(PRELUDE_HEADER.to_string());

    for request in requests {
        let _ = writeln!(source, "{}{}\"", FRAMEWORK_MARKER, request.display_name);
        let _ = writeln!(source, "#import <{}>", request.header_subpath);
        header_paths.push(request.header_subpath.clone());
    }

    (source, header_paths)
}
