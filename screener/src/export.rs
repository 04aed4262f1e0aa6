use crate::ScreenerDocument;

/// Trait for exporters that turn a composed document into file bytes.
///
/// Exporters receive the document by shared reference and never see the
/// build, so a failed export cannot lose edits.
pub trait DocumentExporter {
    /// The error type for this exporter.
    type Error: Into<anyhow::Error>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// File extension of the output, without the dot.
    fn extension(&self) -> &'static str;

    /// Serialize the document.
    fn export(&self, document: &ScreenerDocument) -> Result<Vec<u8>, Self::Error>;
}

/// Which exporter produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    /// The primary exporter succeeded.
    Full,

    /// The primary exporter failed and the fallback was used.
    Degraded,
}

/// Output of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
    pub fidelity: Fidelity,
}

impl ExportedDocument {
    /// `<stem>.<extension>`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }
}

/// Error type for the export pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Both the primary and the fallback exporter failed.
    #[error("Export failed ({primary}: {primary_error}; {fallback}: {fallback_error})")]
    Exhausted {
        primary: &'static str,
        primary_error: anyhow::Error,
        fallback: &'static str,
        fallback_error: anyhow::Error,
    },
}

/// Export with the primary exporter, degrading to the fallback on failure.
///
/// Each call is independent. If both exporters fail the error is logged
/// and returned; the caller's build is untouched either way.
pub fn export_with_fallback<P, F>(
    document: &ScreenerDocument,
    primary: &P,
    fallback: &F,
) -> Result<ExportedDocument, ExportError>
where
    P: DocumentExporter,
    F: DocumentExporter,
{
    let primary_error: anyhow::Error = match primary.export(document) {
        Ok(bytes) => {
            tracing::debug!(exporter = primary.name(), bytes = bytes.len(), "document exported");
            return Ok(ExportedDocument {
                bytes,
                extension: primary.extension(),
                fidelity: Fidelity::Full,
            });
        }
        Err(err) => err.into(),
    };

    tracing::warn!(
        exporter = primary.name(),
        fallback = fallback.name(),
        "export failed, falling back: {primary_error:#}"
    );

    match fallback.export(document) {
        Ok(bytes) => Ok(ExportedDocument {
            bytes,
            extension: fallback.extension(),
            fidelity: Fidelity::Degraded,
        }),
        Err(err) => {
            let fallback_error: anyhow::Error = err.into();
            tracing::error!(
                exporter = fallback.name(),
                "fallback export failed too: {fallback_error:#}"
            );
            Err(ExportError::Exhausted {
                primary: primary.name(),
                primary_error,
                fallback: fallback.name(),
                fallback_error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExportOptions, TestExporter};
    use screener_types::{Build, StudySetup};

    fn document() -> ScreenerDocument {
        ScreenerDocument::compose(&StudySetup::default(), &Build::new(), &ExportOptions::default())
    }

    #[test]
    fn primary_success_is_full_fidelity() {
        let primary = TestExporter::new("doc");
        let fallback = TestExporter::new("txt");
        let exported = export_with_fallback(&document(), &primary, &fallback).unwrap();

        assert_eq!(exported.fidelity, Fidelity::Full);
        assert_eq!(exported.file_name("out"), "out.doc");
        assert_eq!(primary.export_count(), 1);
        assert_eq!(fallback.export_count(), 0);
    }

    #[test]
    fn primary_failure_engages_fallback() {
        let primary = TestExporter::failing("doc");
        let fallback = TestExporter::new("txt");
        let exported = export_with_fallback(&document(), &primary, &fallback).unwrap();

        assert_eq!(exported.fidelity, Fidelity::Degraded);
        assert_eq!(exported.extension, "txt");
        assert_eq!(fallback.export_count(), 1);
    }

    #[test]
    fn both_failing_is_exhausted() {
        let err = export_with_fallback(
            &document(),
            &TestExporter::failing("doc"),
            &TestExporter::failing("txt"),
        )
        .unwrap_err();

        let ExportError::Exhausted { primary, fallback, .. } = &err;
        assert_eq!(*primary, "test");
        assert_eq!(*fallback, "test");
        assert!(err.to_string().starts_with("Export failed"));
    }
}
