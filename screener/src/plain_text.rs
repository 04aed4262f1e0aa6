use std::convert::Infallible;

use crate::{DocumentExporter, QUESTIONS_HEADING, ScreenerDocument};

/// Lower-fidelity exporter writing plain UTF-8 text.
///
/// Keeps the structure of the document (numbering, codes, lettered
/// options, upper-cased instructions) without any styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExporter;

impl PlainTextExporter {
    /// Render the document as text.
    pub fn render(document: &ScreenerDocument) -> String {
        let mut text = String::new();
        let header = &document.header;

        text.push_str(&heading(&header.title, '='));
        text.push_str(&format!("{}\n", header.mode_line()));
        text.push_str(&format!("{}\n", header.dates_line()));
        text.push_str(&format!("{}\n", header.category_line()));
        if let Some(notes) = header.notes_line() {
            text.push_str(&format!("{notes}\n"));
        }
        text.push('\n');

        text.push_str(&heading(QUESTIONS_HEADING, '-'));
        for question in &document.questions {
            text.push_str(&format!(
                "{}. {}{}\n",
                question.number,
                question.code_prefix(),
                question.text
            ));
            for option in &question.options {
                text.push_str(&format!("   {} {}\n", option.letter, option.text));
            }
            if let Some(instructions) = question.export_instructions() {
                text.push_str(&format!("   >> {instructions}\n"));
            }
            text.push('\n');
        }
        text
    }
}

/// A title underlined with `underline`, followed by a blank line.
fn heading(title: &str, underline: char) -> String {
    let rule: String = std::iter::repeat_n(underline, title.chars().count()).collect();
    format!("{title}\n{rule}\n\n")
}

impl DocumentExporter for PlainTextExporter {
    type Error = Infallible;

    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, document: &ScreenerDocument) -> Result<Vec<u8>, Self::Error> {
        Ok(Self::render(document).into_bytes())
    }
}
