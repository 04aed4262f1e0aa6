use crate::{Question, TokenMap, substitute};

/// One lettered option with its text resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    /// `"a."`, `"b."`, ...
    pub letter: String,
    pub text: String,
}

/// A question with every placeholder resolved, ready for preview or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuestion {
    /// 1-based display number.
    pub number: usize,
    pub code: Option<String>,
    pub text: String,
    pub options: Vec<RenderedOption>,
    /// Instructions as entered, placeholders resolved.
    pub instructions: Option<String>,
}

impl RenderedQuestion {
    /// Resolve a question against the tokens. The question is not modified.
    pub fn render(number: usize, question: &Question, tokens: &TokenMap) -> Self {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut text = substitute(option.label(), tokens);
                if let Some(outcome) = option.outcome() {
                    text.push_str(&format!(" [{outcome}]"));
                }
                RenderedOption {
                    letter: option_letter(i),
                    text,
                }
            })
            .collect();

        Self {
            number,
            code: question
                .id_label()
                .filter(|label| !label.is_empty())
                .map(str::to_string),
            text: substitute(question.text(), tokens),
            options,
            instructions: question.instructions().map(|i| substitute(i, tokens)),
        }
    }

    /// Render a sequence, numbering from 1.
    pub fn render_all<'a>(
        questions: impl IntoIterator<Item = &'a Question>,
        tokens: &TokenMap,
    ) -> Vec<Self> {
        questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| Self::render(i + 1, q, tokens))
            .collect()
    }

    /// Instructions as they appear in exported documents (upper-cased).
    pub fn export_instructions(&self) -> Option<String> {
        self.instructions.as_ref().map(|i| i.to_uppercase())
    }

    /// `"[S_Gender] "` or nothing.
    pub fn code_prefix(&self) -> String {
        self.code
            .as_ref()
            .map(|code| format!("[{code}] "))
            .unwrap_or_default()
    }
}

/// Letter for the option at `index`: `a.` to `z.`, then `aa.`, `ab.`, ...
pub fn option_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.reverse();
    let mut letter: String = letters.into_iter().collect();
    letter.push('.');
    letter
}
