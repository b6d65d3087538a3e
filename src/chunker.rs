//! Splits combined preprocessed text into per-framework blocks.
//!
//! The import source puts a `#pragma HEADERIMPORT FRAMEWORK: "<name>"` line in
//! front of every framework's `#import`. The preprocessor passes pragmas
//! through untouched, so they survive as boundary markers in its output.

use tracing::{debug, warn};

use crate::error::{ExtractionWarning, ImportError};

/// Boundary marker prefix; the framework name follows in double quotes
pub const FRAMEWORK_MARKER: &str = "#pragma HEADERIMPORT FRAMEWORK: \"";

/// One framework's slice of the combined preprocessed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkChunk {
    pub display_name: String,
    pub header_subpath: String,
    pub raw_text: String,
}

/// Split `text` at every boundary marker, pairing the Nth marker with the Nth
/// header path
///
/// Anything before the first marker is dropped. Markers without a matching
/// header path get an empty one and a warning in `warnings`.
pub fn split_frameworks(
    text: &str,
    header_paths: &[String],
    warnings: &mut Vec<ExtractionWarning>,
) -> Result<Vec<FrameworkChunk>, ImportError> {
    let first = text
        .find(FRAMEWORK_MARKER)
        .ok_or_else(ImportError::no_boundaries)?;

    let mut chunks = Vec::new();
    let mut rest = &text[first + FRAMEWORK_MARKER.len()..];

    loop {
        let next_marker = rest.find(FRAMEWORK_MARKER);
        let block = match next_marker {
            Some(pos) => &rest[..pos],
            None => rest,
        };

        let (display_name, raw_text) = match block.find('"') {
            Some(quote) => (&block[..quote], &block[quote + 1..]),
            // Unterminated marker: the whole block is the name, no text
            None => (block.trim_end(), ""),
        };

        let index = chunks.len();
        let header_subpath = match header_paths.get(index) {
            Some(path) => path.clone(),
            None => {
                let warning = ExtractionWarning::MissingHeaderPath {
                    framework: display_name.to_string(),
                    index,
                };
                warn!("{}", warning);
                warnings.push(warning);
                String::new()
            }
        };

        debug!(
            "Framework chunk {} '{}' ({} bytes)",
            index,
            display_name,
            raw_text.len()
        );
        chunks.push(FrameworkChunk {
            display_name: display_name.to_string(),
            header_subpath,
            raw_text: raw_text.to_string(),
        });

        match next_marker {
            Some(pos) => rest = &rest[pos + FRAMEWORK_MARKER.len()..],
            None => break,
        }
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_pairs_markers_with_header_paths() {
        let text = "junk before\n#pragma HEADERIMPORT FRAMEWORK: \"Foundation\"\nint a;\n#pragma HEADERIMPORT FRAMEWORK: \"AppKit\"\nint b;\n";
        let mut warnings = Vec::new();
        let chunks = split_frameworks(
            text,
            &paths(&["Foundation/Foundation.h", "AppKit/AppKit.h"]),
            &mut warnings,
        )
        .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].display_name, "Foundation");
        assert_eq!(chunks[0].header_subpath, "Foundation/Foundation.h");
        assert_eq!(chunks[0].raw_text, "\nint a;\n");
        assert_eq!(chunks[1].display_name, "AppKit");
        assert_eq!(chunks[1].header_subpath, "AppKit/AppKit.h");
        assert_eq!(chunks[1].raw_text, "\nint b;\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_split_without_marker_is_fatal() {
        let mut warnings = Vec::new();
        let result = split_frameworks("int a;\n", &[], &mut warnings);

        assert!(matches!(
            result,
            Err(ImportError::NoFrameworkBoundaries { .. })
        ));
    }

    #[test]
    fn test_missing_header_path_warns() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"\"\nint a;\n#pragma HEADERIMPORT FRAMEWORK: \"Extra\"\n";
        let mut warnings = Vec::new();
        let chunks = split_frameworks(text, &paths(&["objc/NSObjCRuntime.h"]), &mut warnings)
            .unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].display_name, "");
        assert_eq!(chunks[1].header_subpath, "");
        assert_eq!(
            warnings,
            vec![ExtractionWarning::MissingHeaderPath {
                framework: "Extra".to_string(),
                index: 1,
            }]
        );
    }
}
