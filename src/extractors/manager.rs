//! HeaderImporter - Public API for extracting declarations from preprocessed
//! framework headers
//!
//! Splits the combined preprocessor output into frameworks, cleans each one
//! and runs every extractor over it. The proc-pointer registry lives as long
//! as the importer, so aliases in later frameworks resolve against types
//! declared in earlier ones.

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::base::{Declaration, Framework};
use super::c::CDeclExtractor;
use super::objc::ObjcExtractor;
use super::registry::TypeRegistry;
use crate::chunker::split_frameworks;
use crate::cleaning::remove_preprocessor_junk;
use crate::config::ImportConfig;
use crate::emitter::HeaderDocument;
use crate::error::{ExtractionWarning, ImportError};

/// Everything one import run produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportResults {
    /// Frameworks in marker order
    pub frameworks: Vec<Framework>,
    /// Non-fatal problems, in the order they were found
    pub warnings: Vec<ExtractionWarning>,
}

impl ImportResults {
    pub fn framework(&self, display_name: &str) -> Option<&Framework> {
        self.frameworks
            .iter()
            .find(|f| f.display_name == display_name)
    }

    /// Frameworks and warnings as one JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Drives extraction for a whole run
#[derive(Debug, Default)]
pub struct HeaderImporter {
    config: ImportConfig,
    registry: TypeRegistry,
}

impl HeaderImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        Self {
            config,
            registry: TypeRegistry::new(),
        }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Proc-pointer types seen so far in this run
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Extract every framework in the combined preprocessor output
    ///
    /// `header_paths` pairs positionally with the boundary markers. Fails only
    /// when the text carries no boundary marker at all.
    pub fn import(
        &mut self,
        text: &str,
        header_paths: &[String],
    ) -> Result<ImportResults, ImportError> {
        let mut warnings = Vec::new();
        let chunks = split_frameworks(text, header_paths, &mut warnings)?;

        let mut frameworks = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let (framework, framework_warnings) =
                self.extract_framework(chunk.display_name, chunk.header_subpath, &chunk.raw_text);
            frameworks.push(framework);
            warnings.extend(framework_warnings);
        }

        info!(
            "Imported {} frameworks ({} proc-pointer types, {} warnings)",
            frameworks.len(),
            self.registry.len(),
            warnings.len()
        );
        Ok(ImportResults {
            frameworks,
            warnings,
        })
    }

    /// Import and render the output document in one step
    pub fn import_document(
        &mut self,
        text: &str,
        header_paths: &[String],
    ) -> Result<HeaderDocument, ImportError> {
        let results = self.import(text, header_paths)?;
        Ok(HeaderDocument::render(&results.frameworks, &self.config))
    }

    /// Read preprocessor output from `input`, import it and write the
    /// rendered document to `output`
    pub fn import_file(
        &mut self,
        input: &Path,
        header_paths: &[String],
        output: &Path,
    ) -> anyhow::Result<ImportResults> {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read preprocessed headers from {}", input.display()))?;
        let results = self.import(&text, header_paths)?;
        HeaderDocument::render(&results.frameworks, &self.config).write_to(output)?;
        Ok(results)
    }

    /// Extract one framework's raw (uncleaned) text
    pub fn extract_framework(
        &mut self,
        display_name: String,
        header_subpath: String,
        raw_text: &str,
    ) -> (Framework, Vec<ExtractionWarning>) {
        let cleaned = remove_preprocessor_junk(raw_text);

        let mut objc = ObjcExtractor::new(display_name.clone(), cleaned.clone());
        if self.config.check_invalid_characters {
            objc.check_invalid_characters();
        }

        let mut c_decls = CDeclExtractor::new(display_name.clone(), cleaned);

        // Proc-pointers first, so plain typedefs of them resolve in the same framework
        let proc_pointers = c_decls.extract_proc_pointers(&mut self.registry);
        let typedefs = c_decls.extract_typedefs(&self.registry);
        let enums = c_decls.extract_enum_typedefs();
        let functions = c_decls.extract_functions();
        let interfaces = objc.extract_interfaces();

        let mut declarations: Vec<Declaration> = Vec::with_capacity(
            typedefs.len() + enums.len() + proc_pointers.len() + functions.len() + interfaces.len(),
        );
        declarations.extend(typedefs);
        declarations.extend(enums);
        declarations.extend(proc_pointers);
        declarations.extend(functions);
        declarations.extend(interfaces);

        debug!(
            "{}: {} declarations extracted",
            display_name,
            declarations.len()
        );

        let mut warnings = objc.take_warnings();
        warnings.extend(c_decls.take_warnings());

        (
            Framework {
                display_name,
                header_subpath,
                declarations,
            },
            warnings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{InterfaceKind, Signature};

    const SAMPLE: &str = include_str!("../../test_samples/preprocessed_headers.h");

    fn sample_paths() -> Vec<String> {
        vec![
            "objc/NSObjCRuntime.h".to_string(),
            "Foundation/Foundation.h".to_string(),
            "AppKit/AppKit.h".to_string(),
        ]
    }

    #[test]
    fn test_import_sample_frameworks() {
        let mut importer = HeaderImporter::new();
        let results = importer.import(SAMPLE, &sample_paths()).unwrap();

        let names: Vec<&str> = results
            .frameworks
            .iter()
            .map(|f| f.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["", "Foundation", "AppKit"]);
        assert_eq!(results.frameworks[2].header_subpath, "AppKit/AppKit.h");

        let foundation = results.framework("Foundation").unwrap();
        let object = foundation.interface("NSObject").unwrap();
        assert_eq!(object.kind, InterfaceKind::Class { superclass: None });
        assert_eq!(object.protocols, vec!["NSObject".to_string()]);

        let appkit = results.framework("AppKit").unwrap();
        let category = appkit.interface("NSString").unwrap();
        assert!(category.is_category());
    }

    #[test]
    fn test_sample_renders_appkit_records() {
        let mut importer = HeaderImporter::with_config(ImportConfig::records_only());
        let document = importer.import_document(SAMPLE, &sample_paths()).unwrap();

        let appkit_start = document.as_str().find("FAppKit\n").unwrap();
        assert_eq!(
            &document.as_str()[appkit_start..],
            concat!(
                "FAppKit\n",
                "HAppKit/AppKit.h\n",
                "&NSAppExceptionHandler,void,NSException*\n",
                "~NSCellType,int\n",
                "eNSNullCellType,0\n",
                "eNSTextCellType,1\n",
                "eNSImageCellType,2\n",
                "=NSStringFromRect,NSString*,NSRect\n",
                "*NSResponder\n",
                ":NSObject\n",
                "<NSCoding\n",
                "-nextResponder,NSResponder*\n",
                "-setNextResponder:,void,NSResponder*\n",
                "\n",
                "*NSString\n",
                "(NSStringDrawing\n",
                "-drawAtPoint:withAttributes:,void,NSPoint,NSDictionary*\n",
                "-size,NSSize\n",
                "\n",
                "*NSApplication\n",
                ":NSResponder\n",
                "+sharedApplication,NSApplication*\n",
                "-isActive,BOOL\n",
                "-setDelegate:,void,id<NSApplicationDelegate>\n",
                "-delegate,id<NSApplicationDelegate>\n",
                "-run,void\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_sample_prelude_and_foundation_c_records() {
        let mut importer = HeaderImporter::with_config(ImportConfig::records_only());
        let document = importer.import_document(SAMPLE, &sample_paths()).unwrap();
        let text = document.as_str();

        assert!(text.starts_with("F\nHobjc/NSObjCRuntime.h\n~NSInteger,long\n"));
        assert!(text.contains("&comparator_fn,int,const void*,const void*\n"));
        assert!(text.contains("=printf,int,const char*,...\n"));
        assert!(text.contains("=objc_getClassList,int,Class*,int\n"));
        assert!(text.contains(
            "~NSComparisonResult,int\neNSOrderedAscending,-1\neNSOrderedSame,0\neNSOrderedDescending,1\n"
        ));
        assert!(text.contains("=NSSetUncaughtExceptionHandler,void,NSUncaughtExceptionHandler*\n"));
        assert!(text.contains("*NSObject\n:\n<NSObject\n+alloc,id\n-init,id\n-description,NSString*\n\n"));
        assert!(text.contains("+stringWithFormat:,id,NSString*,...\n"));
        // Protocol declarations are not interfaces
        assert!(!text.contains("isEqual:"));
    }

    #[test]
    fn test_alias_in_later_framework_resolves_through_registry() {
        let mut importer = HeaderImporter::new();
        let results = importer.import(SAMPLE, &sample_paths()).unwrap();

        // NSUncaughtExceptionHandler is declared in Foundation, aliased in AppKit
        let appkit = results.framework("AppKit").unwrap();
        let alias = appkit
            .declarations
            .iter()
            .find(|d| matches!(d, Declaration::ProcPointer { name, .. } if name == "NSAppExceptionHandler"))
            .expect("alias should be a proc-pointer record");
        match alias {
            Declaration::ProcPointer { signature, .. } => {
                assert_eq!(
                    signature,
                    &Signature::new("void", vec!["NSException*".to_string()])
                );
            }
            _ => unreachable!(),
        }
        assert!(importer.registry().lookup("NSUncaughtExceptionHandler").is_some());
    }

    #[test]
    fn test_alias_in_same_framework_resolves() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"Kit\"\ntypedef Callback CallbackAlias;\ntypedef int (*Callback)(void *info);\n";
        let mut importer = HeaderImporter::new();
        let results = importer.import(text, &["Kit/Kit.h".to_string()]).unwrap();

        let decls = &results.frameworks[0].declarations;
        assert_eq!(
            decls[0],
            Declaration::ProcPointer {
                name: "CallbackAlias".to_string(),
                signature: Signature::new("int", vec!["void*".to_string()]),
            }
        );
    }

    #[test]
    fn test_declarations_are_in_section_order() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"Kit\"\n@interface K : NSObject\n@end\nextern int kFn(void);\ntypedef void (*KProc)(int);\ntypedef enum { kA } KEnum;\ntypedef int KInt;\n";
        let mut importer = HeaderImporter::new();
        let results = importer.import(text, &["Kit/Kit.h".to_string()]).unwrap();

        let kinds: Vec<&str> = results.frameworks[0]
            .declarations
            .iter()
            .map(|d| match d {
                Declaration::TypedefAlias { .. } => "typedef",
                Declaration::Enum { .. } => "enum",
                Declaration::ProcPointer { .. } => "proc",
                Declaration::Function { .. } => "function",
                Declaration::Interface(_) => "interface",
            })
            .collect();
        assert_eq!(kinds, vec!["typedef", "enum", "proc", "function", "interface"]);
    }

    #[test]
    fn test_missing_boundaries_is_fatal() {
        let mut importer = HeaderImporter::new();
        let result = importer.import("@interface A : NSObject\n@end\n", &[]);
        assert!(matches!(
            result,
            Err(ImportError::NoFrameworkBoundaries { .. })
        ));
    }

    #[test]
    fn test_invalid_characters_warn_but_do_not_stop_extraction() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"Kit\"\nconst char *s = \"\u{00e9}\";\n@interface A : NSObject\n- (void)a;\n@end\n";
        let mut importer = HeaderImporter::new();
        let results = importer.import(text, &["Kit/Kit.h".to_string()]).unwrap();

        assert_eq!(
            results.warnings,
            vec![ExtractionWarning::InvalidCharacters {
                framework: "Kit".to_string(),
                chars: "\u{00e9}".to_string(),
                line: 2,
            }]
        );
        assert_eq!(results.frameworks[0].interfaces().count(), 1);
    }

    #[test]
    fn test_import_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("headers.i");
        let output = dir.path().join("frameworkheaders.hhc");
        fs::write(&input, SAMPLE).unwrap();

        let mut importer = HeaderImporter::with_config(ImportConfig::records_only());
        let results = importer.import_file(&input, &sample_paths(), &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(results.frameworks.len(), 3);
        assert!(written.starts_with("F\nHobjc/NSObjCRuntime.h\n"));
        assert!(written.contains("FFoundation\nHFoundation/Foundation.h\n"));
    }

    #[test]
    fn test_import_file_reports_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut importer = HeaderImporter::new();
        let err = importer
            .import_file(&dir.path().join("absent.i"), &[], &dir.path().join("out.hhc"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read preprocessed headers"));
    }

    #[test]
    fn test_results_serialize_to_json() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"Kit\"\ntypedef enum { kA, kB = 4 } KEnum;\n@interface KView : NSObject <NSCoding>\n- (void)draw;\n@end\n";
        let mut importer = HeaderImporter::new();
        let results = importer.import(text, &[]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&results.to_json().unwrap()).unwrap();
        assert_eq!(value["frameworks"][0]["display_name"], "Kit");
        assert_eq!(value["frameworks"][0]["declarations"][0]["type"], "enum");
        assert_eq!(value["frameworks"][0]["declarations"][0]["constants"][1]["value"], "4");
        let view = &value["frameworks"][0]["declarations"][1];
        assert_eq!(view["type"], "interface");
        assert_eq!(view["kind"]["class"]["superclass"], "NSObject");
        assert_eq!(value["warnings"][0]["kind"], "missing_header_path");

        let frameworks: Vec<Framework> =
            serde_json::from_value(value["frameworks"].clone()).unwrap();
        assert_eq!(frameworks, results.frameworks);
    }

    #[test]
    fn test_invalid_character_check_can_be_disabled() {
        let text = "#pragma HEADERIMPORT FRAMEWORK: \"Kit\"\nconst char *s = \"\u{00e9}\";\n";
        let config = ImportConfig {
            check_invalid_characters: false,
            ..ImportConfig::default()
        };
        let mut importer = HeaderImporter::with_config(config);
        let results = importer.import(text, &["Kit/Kit.h".to_string()]).unwrap();

        assert!(results.warnings.is_empty());
    }
}
