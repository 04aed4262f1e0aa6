//! Library augmentation from comma-separated lines.
//!
//! Columns: `section, question, type, options, instructions, tags`, where
//! options and tags are `;`-joined. Fields are split on every comma; there
//! is no quoting.

use std::path::Path;

use screener_types::{Question, QuestionKind, QuestionOrigin};

/// Error reading a CSV file. Malformed rows are skipped, never reported.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn read(path: &Path) -> Result<String, CsvError> {
    std::fs::read_to_string(path).map_err(|source| CsvError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Parse CSV text into imported questions, numbered from `first`.
pub(crate) fn parse(text: &str, first: usize) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut first_row = true;
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();

        let header = first_row && field(0).eq_ignore_ascii_case("section");
        first_row = false;
        if header {
            continue;
        }
        let text = field(1);
        if text.is_empty() {
            tracing::warn!(line = line_no + 1, "csv row has no question text, skipping");
            continue;
        }

        let n = first + questions.len();
        let mut question = Question::new(
            format!("import_{n}"),
            field(0),
            text,
            QuestionKind::parse_lenient(field(2)),
        )
        .with_label(format!("I_{n}"))
        .with_options(split_list(field(3)))
        .with_tags(split_list(field(5)))
        .with_origin(QuestionOrigin::Imported);
        question.set_instructions(field(4));
        questions.push(question);
    }
    questions
}

fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(';').map(str::trim).filter(|s| !s.is_empty())
}
