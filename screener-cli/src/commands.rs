//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use screener::{
    Build, DEFAULT_FILE_STEM, DocumentExporter, ExportOptions, ExportedDocument, Fidelity,
    PlainTextExporter, Question, ScreenerDocument, Session, StandardLibrary, StudySetup, assemble,
    export_with_fallback,
};
use screener_doc_html::{HtmlExporter, HtmlOptions};
use screener_wizard_dialoguer::{DialoguerEditor, DialoguerError};

use crate::cli::Format;

pub fn export_options(no_mode_filter: bool) -> ExportOptions {
    if no_mode_filter {
        ExportOptions::unfiltered()
    } else {
        ExportOptions::default()
    }
}

/// Run the interactive editor. Exports are written next to `out`.
pub fn edit(setup: StudySetup, out: Option<PathBuf>, csv: Option<&Path>) -> anyhow::Result<()> {
    let editor = DialoguerEditor::new().with_library(load_library(csv)?);
    let mut session = Session::new(setup);

    let result = editor.run(&mut session, |session| {
        let document = ScreenerDocument::compose(
            session.setup(),
            session.build(),
            &ExportOptions::default(),
        );
        let exported = export_with_fallback(&document, &HtmlExporter::new(), &PlainTextExporter)?;
        let path = write(&exported, out.as_deref())?;
        Ok(match exported.fidelity {
            Fidelity::Full => format!("Wrote {}", path.display()),
            Fidelity::Degraded => format!("Wrote {} (plain text fallback)", path.display()),
        })
    });

    match result {
        Err(DialoguerError::Cancelled) => {
            tracing::info!("editing cancelled");
            Ok(())
        }
        other => Ok(other?),
    }
}

/// Export the standard order for `setup`. Returns the written path.
pub fn export(
    setup: &StudySetup,
    options: &ExportOptions,
    format: Format,
    brand_color: Option<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    let document = standard_document(setup, options);

    let exported = match format {
        Format::Html => {
            let mut html = HtmlOptions::new();
            if let Some(color) = brand_color {
                html = html.with_brand_color(color);
            }
            export_with_fallback(&document, &HtmlExporter::with_options(html), &PlainTextExporter)?
        }
        Format::Text => {
            let Ok(bytes) = PlainTextExporter.export(&document);
            ExportedDocument {
                bytes,
                extension: PlainTextExporter.extension(),
                fidelity: Fidelity::Full,
            }
        }
    };

    write(&exported, out.as_deref())
}

/// Plain-text rendering of the standard order for `setup`.
pub fn preview(setup: &StudySetup, options: &ExportOptions) -> String {
    PlainTextExporter::render(&standard_document(setup, options))
}

/// List the library, or the best matches for `search`.
pub fn library(csv: Option<&Path>, search: Option<&str>, limit: usize) -> anyhow::Result<()> {
    let library = load_library(csv)?;

    match search {
        Some(query) => {
            let hits = library.search(query, limit);
            if hits.is_empty() {
                println!("No matches for '{query}'");
            }
            for hit in hits {
                println!("{:>3}  {}", hit.score, library_line(hit.question));
            }
        }
        None => {
            for question in library.questions() {
                println!("{}", library_line(question));
            }
        }
    }
    Ok(())
}

fn standard_document(setup: &StudySetup, options: &ExportOptions) -> ScreenerDocument {
    let build = Build::from_questions(assemble(setup.mode));
    ScreenerDocument::compose(setup, &build, options)
}

fn load_library(csv: Option<&Path>) -> anyhow::Result<StandardLibrary> {
    let mut library = StandardLibrary::new();
    if let Some(path) = csv {
        library
            .extend_from_csv_file(path)
            .context("Failed to load library CSV")?;
    }
    Ok(library)
}

fn library_line(question: &Question) -> String {
    format!(
        "{:<24} {:<18} {}",
        question.id_label().unwrap_or(question.id().as_str()),
        question.section(),
        question.text()
    )
}

/// Write the export, replacing the extension of `out` with the exporter's.
fn write(exported: &ExportedDocument, out: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match out {
        Some(out) => out.with_extension(exported.extension),
        None => PathBuf::from(exported.file_name(DEFAULT_FILE_STEM)),
    };
    std::fs::write(&path, &exported.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), fidelity = ?exported.fidelity, "export written");
    Ok(path)
}
