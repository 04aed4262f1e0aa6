//! Dialoguer editor implementation over a `Session`.

use dialoguer::{Confirm, FuzzySelect, Input, Select, theme::ColorfulTheme};
use screener::{
    Direction, InsertAt, Mode, Question, QuestionId, RenderedQuestion, Session, StandardLibrary,
};
use thiserror::Error;

const LEAVE_PROMPT: &str = "Are you sure you want to leave this page and abandon this screener?";
const LINE_WIDTH: usize = 72;
const SEARCH_LIMIT: usize = 15;

/// Error type for the Dialoguer editor.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled a prompt (e.g., pressed Ctrl+C or Escape).
    #[error("Editing cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_result<T>(result: dialoguer::Result<T>) -> Result<T, DialoguerError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
        Err(e) => Err(DialoguerError::Dialoguer(e)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Preview,
    AddCustom,
    AddFromLibrary,
    Edit,
    MoveUp,
    MoveDown,
    MoveTo,
    Remove,
    EditSetup,
    Export,
    Leave,
}

impl Action {
    const ALL: [Action; 11] = [
        Self::Preview,
        Self::AddCustom,
        Self::AddFromLibrary,
        Self::Edit,
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveTo,
        Self::Remove,
        Self::EditSetup,
        Self::Export,
        Self::Leave,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Preview => "Preview screener",
            Self::AddCustom => "Add custom question",
            Self::AddFromLibrary => "Add question from library",
            Self::Edit => "Edit question",
            Self::MoveUp => "Move question up",
            Self::MoveDown => "Move question down",
            Self::MoveTo => "Move question to position",
            Self::Remove => "Remove question",
            Self::EditSetup => "Edit study setup",
            Self::Export => "Export",
            Self::Leave => "Leave",
        }
    }

    /// Actions that pick a question first.
    fn needs_question(&self) -> bool {
        matches!(
            self,
            Self::Edit | Self::MoveUp | Self::MoveDown | Self::MoveTo | Self::Remove
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Section,
    Code,
    Wording,
    Option(usize),
    Instructions,
    Done,
}

/// Dialoguer editor for interactive screener authoring.
///
/// Prompts are shown with dialoguer's colorful theme unless created with
/// [`DialoguerEditor::plain`].
#[derive(Debug, Clone)]
pub struct DialoguerEditor {
    /// Use colorful theme for prompts.
    colorful: bool,
    library: StandardLibrary,
}

impl Default for DialoguerEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerEditor {
    /// Create a new editor with default (colorful) theme and the built-in library.
    pub fn new() -> Self {
        Self {
            colorful: true,
            library: StandardLibrary::new(),
        }
    }

    /// Create an editor with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            ..Self::new()
        }
    }

    /// Use this library for "add from library".
    pub fn with_library(mut self, library: StandardLibrary) -> Self {
        self.library = library;
        self
    }

    /// Run the editor until the user leaves.
    ///
    /// `on_export` is called for the export action; its message or error
    /// is printed and editing continues either way. Leaving abandons the
    /// session.
    pub fn run<F>(&self, session: &mut Session, mut on_export: F) -> Result<(), DialoguerError>
    where
        F: FnMut(&Session) -> anyhow::Result<String>,
    {
        if session.build().is_empty() {
            self.ask_setup(session)?;
            session.load_standard();
            println!(
                "Loaded {} questions for {}.",
                session.build().len(),
                Mode::label_or_dash(session.setup().mode)
            );
        }

        loop {
            println!();
            let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
            let action = Action::ALL[self.select("What next?", &labels, 0)?];

            if action.needs_question() && session.build().is_empty() {
                println!("The screener has no questions.");
                continue;
            }

            match action {
                Action::Preview => print_preview(session),
                Action::AddCustom => self.add_custom(session)?,
                Action::AddFromLibrary => self.add_from_library(session)?,
                Action::Edit => {
                    let id = self.pick_question(session, "Edit which question?")?;
                    self.edit_question(session, &id)?;
                }
                Action::MoveUp | Action::MoveDown => {
                    let id = self.pick_question(session, "Move which question?")?;
                    let direction = if action == Action::MoveUp {
                        Direction::Up
                    } else {
                        Direction::Down
                    };
                    match session.build_mut().step(&id, direction) {
                        Ok(true) => {}
                        Ok(false) => println!("Already at that end."),
                        Err(err) => println!("Error: {err}"),
                    }
                }
                Action::MoveTo => {
                    let id = self.pick_question(session, "Move which question?")?;
                    let position = self.ask_position(session.build().len())?;
                    if let Err(err) = session.build_mut().move_to(&id, position - 1) {
                        println!("Error: {err}");
                    }
                }
                Action::Remove => {
                    let id = self.pick_question(session, "Remove which question?")?;
                    if self.confirm(&format!("Remove '{id}'?"), false)? {
                        if let Err(err) = session.build_mut().remove(&id) {
                            println!("Error: {err}");
                        }
                    }
                }
                Action::EditSetup => {
                    let mode = session.setup().mode;
                    self.ask_setup(session)?;
                    if session.setup().mode != mode
                        && self.confirm("Mode changed. Reload the standard order?", false)?
                    {
                        session.load_standard();
                    }
                }
                Action::Export => match on_export(&*session) {
                    Ok(message) => println!("{message}"),
                    Err(err) => println!("Export failed: {err:#}"),
                },
                Action::Leave => {
                    if self.confirm(LEAVE_PROMPT, false)? {
                        session.abandon();
                        return Ok(());
                    }
                }
            }
        }
    }

    fn ask_setup(&self, session: &mut Session) -> Result<(), DialoguerError> {
        let setup = session.setup_mut();

        let labels: Vec<&str> = Mode::ALL.iter().map(Mode::label).collect();
        let current = setup
            .mode
            .and_then(|mode| Mode::ALL.iter().position(|m| *m == mode))
            .unwrap_or_default();
        setup.mode = Some(Mode::ALL[self.select("Mode", &labels, current)?]);

        setup.moderator = self.input("Moderator", &setup.moderator, true)?;
        setup.dates = self.input("Dates", &setup.dates, true)?;
        setup.location_or_platform =
            self.input("Location / Platform", &setup.location_or_platform, true)?;
        setup.category_name = self.input(
            "Category name (used for {{categoryName}})",
            &setup.category_name,
            true,
        )?;
        let notes = self.input("Notes", setup.notes().unwrap_or_default(), true)?;
        setup.notes = Some(notes).filter(|n| !n.trim().is_empty());

        tracing::debug!(mode = ?setup.mode, "study setup updated");
        Ok(())
    }

    fn add_custom(&self, session: &mut Session) -> Result<(), DialoguerError> {
        let len = session.build().len();
        let at = match self.select("Position", &["At end", "After question N"], 0)? {
            0 => InsertAt::End,
            _ => InsertAt::after(self.ask_number("After question", 0, len)?),
        };

        match session.add_custom(at) {
            Ok(id) => {
                println!("Added '{id}'.");
                if self.confirm("Edit it now?", true)? {
                    self.edit_question(session, &id)?;
                }
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    fn add_from_library(&self, session: &mut Session) -> Result<(), DialoguerError> {
        let query = self.input("Search library (empty to browse)", "", true)?;

        let question: &Question = if query.trim().is_empty() {
            let items: Vec<String> = self.library.questions().iter().map(library_line).collect();
            let index = self.fuzzy_select("Pick a question", &items)?;
            &self.library.questions()[index]
        } else {
            let hits = self.library.search(&query, SEARCH_LIMIT);
            if hits.is_empty() {
                println!("No matches for '{query}'.");
                return Ok(());
            }
            let items: Vec<String> = hits.iter().map(|hit| library_line(hit.question)).collect();
            hits[self.select("Pick a question", &items, 0)?].question
        };

        match session.add_from_library(question, InsertAt::End) {
            Ok(index) => println!("Added '{}' as question {}.", question.id(), index + 1),
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    fn edit_question(&self, session: &mut Session, id: &QuestionId) -> Result<(), DialoguerError> {
        loop {
            let Some(question) = session.build().find(id) else {
                return Ok(());
            };
            let question = question.clone();

            let mut fields = vec![Field::Section];
            if question.label_editable() {
                fields.push(Field::Code);
            }
            fields.push(Field::Wording);
            fields.extend((0..question.options().len()).map(Field::Option));
            fields.extend([Field::Instructions, Field::Done]);

            let labels: Vec<String> = fields
                .iter()
                .map(|field| field_line(&question, *field))
                .collect();
            let field = fields[self.select(&format!("Edit '{id}'"), &labels, 0)?];

            let result = match field {
                Field::Section => {
                    let section = self.input("Section", question.section(), false)?;
                    session.build_mut().edit(id, |q| q.set_section(section))
                }
                Field::Code => {
                    let code = self.input("Code", question.id_label().unwrap_or_default(), true)?;
                    session
                        .build_mut()
                        .edit(id, |q| q.set_id_label(code))
                        .and_then(|inner| inner)
                }
                Field::Wording => {
                    let text = self.input("Wording", question.text(), false)?;
                    session.build_mut().edit(id, |q| q.set_text(text))
                }
                Field::Option(index) => {
                    let current = question.options()[index].label();
                    let label = self.input(&format!("Option {}", index + 1), current, false)?;
                    session
                        .build_mut()
                        .edit(id, |q| q.set_option(index, label))
                        .and_then(|inner| inner)
                }
                Field::Instructions => {
                    let current = question.instructions().unwrap_or_default();
                    let instructions = self.input("Instructions", current, true)?;
                    session
                        .build_mut()
                        .edit(id, |q| q.set_instructions(instructions))
                }
                Field::Done => return Ok(()),
            };

            if let Err(err) = result {
                println!("Error: {err}");
            }
        }
    }

    fn pick_question(&self, session: &Session, prompt: &str) -> Result<QuestionId, DialoguerError> {
        let items: Vec<String> = session.render().iter().map(question_line).collect();
        let index = self.select(prompt, &items, 0)?;
        Ok(session.build().questions()[index].id().clone())
    }

    fn ask_position(&self, len: usize) -> Result<usize, DialoguerError> {
        self.ask_number(&format!("New position (1-{len})"), 1, len)
    }

    fn ask_number(&self, prompt: &str, min: usize, max: usize) -> Result<usize, DialoguerError> {
        loop {
            let mut _theme;
            let mut builder: Input<usize>;
            if self.colorful {
                _theme = ColorfulTheme::default();
                builder = Input::with_theme(&_theme);
            } else {
                builder = Input::new();
            }

            builder = builder.with_prompt(prompt);

            let value = prompt_result(builder.interact_text())?;
            if value < min {
                println!("Error: Value must be at least {min}");
                continue;
            }
            if value > max {
                println!("Error: Value must be at most {max}");
                continue;
            }
            return Ok(value);
        }
    }

    fn input(&self, prompt: &str, current: &str, allow_empty: bool) -> Result<String, DialoguerError> {
        let mut _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(prompt).allow_empty(allow_empty);
        if !current.is_empty() {
            builder = builder.with_initial_text(current);
        }

        prompt_result(builder.interact_text())
    }

    fn select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: usize,
    ) -> Result<usize, DialoguerError> {
        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(items).default(default);

        prompt_result(builder.interact())
    }

    fn fuzzy_select(&self, prompt: &str, items: &[String]) -> Result<usize, DialoguerError> {
        let mut builder: FuzzySelect;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = FuzzySelect::with_theme(&_theme);
        } else {
            builder = FuzzySelect::new();
        }

        builder = builder.with_prompt(prompt).items(items).default(0);

        prompt_result(builder.interact())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, DialoguerError> {
        let mut builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        builder = builder.with_prompt(prompt).default(default);

        prompt_result(builder.interact())
    }
}

fn print_preview(session: &Session) {
    for question in session.render() {
        println!("{}. {}{}", question.number, question.code_prefix(), question.text);
        for option in &question.options {
            println!("     {} {}", option.letter, option.text);
        }
        if let Some(instructions) = &question.instructions {
            println!("     >> {instructions}");
        }
    }
}

/// One menu line per rendered question, cut to the terminal width.
fn question_line(question: &RenderedQuestion) -> String {
    truncate(&format!(
        "{}. {}{}",
        question.number,
        question.code_prefix(),
        question.text
    ))
}

fn library_line(question: &Question) -> String {
    let code = question.id_label().unwrap_or(question.id().as_str());
    truncate(&format!("[{code}] {} ({})", question.text(), question.section()))
}

fn field_line(question: &Question, field: Field) -> String {
    let line = match field {
        Field::Section => format!("Section: {}", question.section()),
        Field::Code => format!("Code: {}", question.id_label().unwrap_or_default()),
        Field::Wording => format!("Wording: {}", question.text()),
        Field::Option(index) => format!(
            "Option {}: {}",
            index + 1,
            question.options()[index].label()
        ),
        Field::Instructions => format!(
            "Instructions: {}",
            question.instructions().unwrap_or_default()
        ),
        Field::Done => "Done".to_string(),
    };
    truncate(&line)
}

fn truncate(line: &str) -> String {
    if line.chars().count() <= LINE_WIDTH {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(LINE_WIDTH - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener::{QuestionKind, QuestionOrigin, TokenMap};

    #[test]
    fn editor_creation() {
        let _editor = DialoguerEditor::new();
        let _plain = DialoguerEditor::plain();
        let _custom = DialoguerEditor::default().with_library(StandardLibrary::new());
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Editing cancelled by user");
    }

    #[test]
    fn menu_has_every_action_once() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
        assert_eq!(Action::ALL.last(), Some(&Action::Leave));
    }

    #[test]
    fn long_lines_are_truncated() {
        let short = "1. Age?";
        assert_eq!(truncate(short), short);

        let long = "x".repeat(100);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), LINE_WIDTH);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn question_lines_show_code() {
        let q = Question::new("age", "Demographics", "Age in {{categoryName}} years?", QuestionKind::Open)
            .with_label("S_Age");
        let rendered = RenderedQuestion::render(2, &q, &TokenMap::new());
        assert_eq!(question_line(&rendered), "2. [S_Age] Age in  years?");
        assert_eq!(library_line(&q), "[S_Age] Age in {{categoryName}} years? (Demographics)");
    }

    #[test]
    fn code_field_only_for_custom_questions() {
        let custom = Question::new("custom_1", "Custom", "New", QuestionKind::Open)
            .with_label("C_Custom1")
            .with_origin(QuestionOrigin::Custom);
        assert_eq!(field_line(&custom, Field::Code), "Code: C_Custom1");
        assert!(custom.label_editable());

        let library = Question::new("gender", "Demographics", "Record gender.", QuestionKind::Single)
            .with_options(["Male", "Female"]);
        assert!(!library.label_editable());
        assert_eq!(field_line(&library, Field::Option(1)), "Option 2: Female");
    }
}
