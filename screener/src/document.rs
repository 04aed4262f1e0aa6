//! Export-ready view of a build: header values plus rendered questions.

use screener_library::sections;
use screener_types::{Build, Mode, Question, RenderedQuestion, StudySetup};

/// Title at the top of every exported document.
pub const DOCUMENT_TITLE: &str = "Behaviorally Screener";

/// Heading above the question list.
pub const QUESTIONS_HEADING: &str = "Screener";

/// File name (without extension) used when none is given.
pub const DEFAULT_FILE_STEM: &str = "Behaviorally_Screener";

const BLANK: &str = "—";

/// Controls how a build is turned into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Omit online device checks unless the study is online.
    pub filter_by_mode: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filter_by_mode: true,
        }
    }
}

impl ExportOptions {
    /// Keep every question regardless of mode.
    pub fn unfiltered() -> Self {
        Self {
            filter_by_mode: false,
        }
    }

    /// Whether `question` belongs in a document for `mode`.
    pub fn includes(&self, question: &Question, mode: Option<Mode>) -> bool {
        !self.filter_by_mode
            || mode == Some(Mode::Online)
            || question.section() != sections::ONLINE_TECH
    }
}

/// Study details printed above the questions. Blank values read "—".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub title: String,
    pub mode: String,
    pub moderator: String,
    pub dates: String,
    pub location_or_platform: String,
    pub category: String,
    pub notes: Option<String>,
}

impl DocumentHeader {
    pub fn from_setup(setup: &StudySetup) -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            mode: Mode::label_or_dash(setup.mode).to_string(),
            moderator: or_blank(&setup.moderator),
            dates: or_blank(&setup.dates),
            location_or_platform: or_blank(&setup.location_or_platform),
            category: or_blank(&setup.category_name),
            notes: setup.notes().map(str::to_string),
        }
    }

    /// `Mode: ...  |  Moderator: ...`
    pub fn mode_line(&self) -> String {
        format!("Mode: {}  |  Moderator: {}", self.mode, self.moderator)
    }

    /// `Dates: ...  |  Location/Platform: ...`
    pub fn dates_line(&self) -> String {
        format!(
            "Dates: {}  |  Location/Platform: {}",
            self.dates, self.location_or_platform
        )
    }

    pub fn category_line(&self) -> String {
        format!("Category: {}", self.category)
    }

    pub fn notes_line(&self) -> Option<String> {
        self.notes.as_ref().map(|notes| format!("Notes: {notes}"))
    }
}

fn or_blank(value: &str) -> String {
    if value.trim().is_empty() {
        BLANK.to_string()
    } else {
        value.to_string()
    }
}

/// Everything an exporter needs, already resolved and numbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenerDocument {
    pub header: DocumentHeader,
    pub questions: Vec<RenderedQuestion>,
}

impl ScreenerDocument {
    /// Compose a document from the current setup and build.
    ///
    /// Tokens are rebuilt from the setup on every call. Numbering follows
    /// the questions that survive the mode filter.
    pub fn compose(setup: &StudySetup, build: &Build, options: &ExportOptions) -> Self {
        let tokens = setup.tokens();
        let kept = build
            .iter()
            .filter(|question| options.includes(question, setup.mode));
        let questions = RenderedQuestion::render_all(kept, &tokens);

        let omitted = build.len() - questions.len();
        if omitted > 0 {
            tracing::debug!(omitted, "questions filtered out by mode");
        }

        Self {
            header: DocumentHeader::from_setup(setup),
            questions,
        }
    }
}
