//! # screener
//!
//! Assemble, edit and export market-research screener questionnaires.
//! Exporter-agnostic.
//!
//! A `Session` holds the study setup and the working build. The standard
//! order for the chosen mode is loaded from the library, edited in place,
//! and handed to a `DocumentExporter`:
//!
//! ```rust
//! use screener::{
//!     ExportOptions, InsertAt, Mode, PlainTextExporter, ScreenerDocument, Session, StudySetup,
//!     export_with_fallback,
//! };
//!
//! let mut session = Session::new(StudySetup::new(Mode::Online).with_category("frozen novelties"));
//! session.load_standard();
//! session.add_custom(InsertAt::End).unwrap();
//!
//! let document = ScreenerDocument::compose(session.setup(), session.build(), &ExportOptions::default());
//! let exported = export_with_fallback(&document, &PlainTextExporter, &PlainTextExporter).unwrap();
//! assert!(String::from_utf8(exported.bytes).unwrap().contains("frozen novelties"));
//! ```
//!
//! ## Exporters
//!
//! Exporters are separate crates that implement `DocumentExporter`:
//! - `screener-doc-html` - Word-compatible HTML document
//! - `PlainTextExporter` (this crate) - lower-fidelity plain text
//!
//! ## Editors
//! - `screener-wizard-dialoguer` - CLI prompts via dialoguer

// Re-export all types from screener-types
pub use screener_types::*;

pub use screener_library::{
    BLOCK_INSERT_INDEX, CsvError, SearchHit, StandardLibrary, assemble, assemble_named, block,
    sections, universal,
};

mod session;
pub use session::{Session, View};

mod document;
pub use document::{
    DEFAULT_FILE_STEM, DOCUMENT_TITLE, DocumentHeader, ExportOptions, QUESTIONS_HEADING,
    ScreenerDocument,
};

mod export;
pub use export::{DocumentExporter, ExportError, ExportedDocument, Fidelity, export_with_fallback};

mod plain_text;
pub use plain_text::PlainTextExporter;

// Test exporter for exercising the export pipeline without real output
mod test_exporter;
pub use test_exporter::{TestExporter, TestExporterError};
