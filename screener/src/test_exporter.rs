//! Test exporter for exercising the export pipeline without real output.
//!
//! `TestExporter` records every document it is given and either returns
//! one line per question or fails on demand.
//!
//! # Example
//!
//! ```rust
//! use screener::{Build, ExportOptions, ScreenerDocument, StudySetup, TestExporter, export_with_fallback};
//!
//! let document = ScreenerDocument::compose(&StudySetup::default(), &Build::new(), &ExportOptions::default());
//! let primary = TestExporter::failing("doc");
//! let fallback = TestExporter::new("txt");
//!
//! let exported = export_with_fallback(&document, &primary, &fallback).unwrap();
//! assert_eq!(exported.extension, "txt");
//! assert_eq!(fallback.export_count(), 1);
//! ```

use std::cell::RefCell;

use crate::{DocumentExporter, ScreenerDocument};

/// An exporter that records its input and can be told to fail.
#[derive(Debug, Default)]
pub struct TestExporter {
    extension: &'static str,
    fail: bool,
    exported: RefCell<Vec<ScreenerDocument>>,
}

/// Error type for TestExporter.
#[derive(Debug, thiserror::Error)]
pub enum TestExporterError {
    #[error("Test exporter configured to fail")]
    Forced,
}

impl TestExporter {
    /// Create an exporter that succeeds.
    pub fn new(extension: &'static str) -> Self {
        Self {
            extension,
            fail: false,
            exported: RefCell::new(Vec::new()),
        }
    }

    /// Create an exporter that always fails.
    pub fn failing(extension: &'static str) -> Self {
        Self {
            fail: true,
            ..Self::new(extension)
        }
    }

    /// Number of export calls so far, failed ones included.
    pub fn export_count(&self) -> usize {
        self.exported.borrow().len()
    }

    /// The documents received so far.
    pub fn exported(&self) -> Vec<ScreenerDocument> {
        self.exported.borrow().clone()
    }
}

impl DocumentExporter for TestExporter {
    type Error = TestExporterError;

    fn name(&self) -> &'static str {
        "test"
    }

    fn extension(&self) -> &'static str {
        self.extension
    }

    fn export(&self, document: &ScreenerDocument) -> Result<Vec<u8>, Self::Error> {
        self.exported.borrow_mut().push(document.clone());
        if self.fail {
            return Err(TestExporterError::Forced);
        }

        let lines: Vec<String> = document
            .questions
            .iter()
            .map(|q| format!("{}. {}{}", q.number, q.code_prefix(), q.text))
            .collect();
        Ok(lines.join("\n").into_bytes())
    }
}
