use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BuildError;

/// Stable identifier of a question, e.g. `"gender"` or `"custom_3"`.
///
/// Ids are unique within a library and within a build and never change
/// after the question is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// How a question is answered. Purely descriptive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick exactly one option.
    #[default]
    Single,

    /// Pick any number of options.
    Multi,

    /// Free-text answer.
    Open,
}

impl QuestionKind {
    /// Parse a kind name, falling back to `Single` for anything unknown.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "multi" => Self::Multi,
            "open" => Self::Open,
            _ => Self::Single,
        }
    }

    /// Whether options are meaningful for this kind.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Single | Self::Multi)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Open => "open",
        }
    }
}

/// Where a question came from. Decides whether its code may be edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionOrigin {
    /// Part of the standard library, code is fixed.
    #[default]
    Library,

    /// Added by the user while editing, code is editable.
    Custom,

    /// Loaded from a CSV file into the library.
    Imported,
}

/// What choosing an option means for the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOutcome {
    Qualify,
    Terminate,
    /// Continue at the question with this code.
    SkipTo(String),
}

impl fmt::Display for OptionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualify => f.write_str("QUALIFY"),
            Self::Terminate => f.write_str("TERMINATE"),
            Self::SkipTo(target) => write!(f, "SKIP TO {target}"),
        }
    }
}

/// An option carrying recruiter metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedOption {
    /// The option wording.
    pub label: String,

    /// Qualify/terminate/skip marker, if any.
    pub outcome: Option<OptionOutcome>,
}

/// A single answer option of a single- or multi-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerOption {
    /// Just the wording.
    Plain(String),

    /// Wording plus recruiter metadata.
    Detailed(DetailedOption),
}

impl AnswerOption {
    /// Create a plain option.
    pub fn plain(label: impl Into<String>) -> Self {
        Self::Plain(label.into())
    }

    /// Create an option that terminates the respondent.
    pub fn terminate(label: impl Into<String>) -> Self {
        Self::with_outcome(label, OptionOutcome::Terminate)
    }

    /// Create an option with the given outcome.
    pub fn with_outcome(label: impl Into<String>, outcome: OptionOutcome) -> Self {
        Self::Detailed(DetailedOption {
            label: label.into(),
            outcome: Some(outcome),
        })
    }

    /// Get the option wording.
    pub fn label(&self) -> &str {
        match self {
            Self::Plain(label) => label,
            Self::Detailed(detailed) => &detailed.label,
        }
    }

    /// Get the outcome marker, if any.
    pub fn outcome(&self) -> Option<&OptionOutcome> {
        match self {
            Self::Plain(_) => None,
            Self::Detailed(detailed) => detailed.outcome.as_ref(),
        }
    }

    /// Replace the wording, keeping any metadata.
    pub fn set_label(&mut self, label: impl Into<String>) {
        match self {
            Self::Plain(current) => *current = label.into(),
            Self::Detailed(detailed) => detailed.label = label.into(),
        }
    }
}

impl From<&str> for AnswerOption {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for AnswerOption {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

/// A single screener item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Internal unique key.
    id: QuestionId,

    /// Human-facing code shown in exported documents, e.g. `S_Gender`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_label: Option<String>,

    /// Grouping label. Informational only, not an export heading.
    section: String,

    /// Question wording, may contain `{{placeholders}}`.
    text: String,

    #[serde(rename = "type")]
    kind: QuestionKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<AnswerOption>,

    /// Recruiter-facing guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,

    /// Free-form labels used for search scoring.
    #[serde(default)]
    tags: BTreeSet<String>,

    /// Advisory flag, never enforced.
    #[serde(default)]
    required: bool,

    #[serde(default)]
    origin: QuestionOrigin,
}

impl Question {
    /// Create a new library question.
    pub fn new(
        id: impl Into<QuestionId>,
        section: impl Into<String>,
        text: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            id_label: None,
            section: section.into(),
            text: text.into(),
            kind,
            options: Vec::new(),
            instructions: None,
            tags: BTreeSet::new(),
            required: false,
            origin: QuestionOrigin::Library,
        }
    }

    /// Set the human-facing code.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.id_label = Some(label.into());
        self
    }

    /// Set the answer options.
    pub fn with_options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<AnswerOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the recruiter instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Add tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the origin.
    pub fn with_origin(mut self, origin: QuestionOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn id_label(&self) -> Option<&str> {
        self.id_label.as_deref()
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Get the instructions, treating blank text as absent.
    pub fn instructions(&self) -> Option<&str> {
        self.instructions
            .as_deref()
            .filter(|instructions| !instructions.trim().is_empty())
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn origin(&self) -> QuestionOrigin {
        self.origin
    }

    /// Whether the code may be changed by the user.
    pub fn label_editable(&self) -> bool {
        self.origin == QuestionOrigin::Custom
    }

    pub fn set_section(&mut self, section: impl Into<String>) {
        self.section = section.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
    }

    pub fn set_options(&mut self, options: Vec<AnswerOption>) {
        self.options = options;
    }

    /// Replace the wording of a single option.
    pub fn set_option(&mut self, index: usize, label: impl Into<String>) -> Result<(), BuildError> {
        let len = self.options.len();
        match self.options.get_mut(index) {
            Some(option) => {
                option.set_label(label);
                Ok(())
            }
            None => Err(BuildError::OptionOutOfRange {
                id: self.id.clone(),
                index,
                len,
            }),
        }
    }

    /// Set the instructions. Blank text clears them.
    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        let instructions = instructions.into();
        self.instructions = if instructions.trim().is_empty() {
            None
        } else {
            Some(instructions)
        };
    }

    /// Change the code. Only custom questions may be relabelled.
    pub fn set_id_label(&mut self, label: impl Into<String>) -> Result<(), BuildError> {
        if !self.label_editable() {
            return Err(BuildError::LabelLocked(self.id.clone()));
        }
        let label = label.into();
        self.id_label = if label.is_empty() { None } else { Some(label) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender() -> Question {
        Question::new("gender", "Demographics", "Record gender.", QuestionKind::Single)
            .with_label("S_Gender")
            .with_options(["Male", "Female"])
            .with_tags(["demographics", "quota"])
            .required()
    }

    #[test]
    fn builder_sets_fields() {
        let q = gender();
        assert_eq!(q.id().as_str(), "gender");
        assert_eq!(q.id_label(), Some("S_Gender"));
        assert_eq!(q.options().len(), 2);
        assert!(q.tags().contains("quota"));
        assert!(q.is_required());
        assert_eq!(q.origin(), QuestionOrigin::Library);
    }

    #[test]
    fn library_label_is_locked() {
        let mut q = gender();
        let err = q.set_id_label("X").unwrap_err();
        assert_eq!(err, BuildError::LabelLocked(QuestionId::new("gender")));
        assert_eq!(q.id_label(), Some("S_Gender"));
    }

    #[test]
    fn custom_label_is_editable() {
        let mut q = Question::new("custom_1", "Custom", "Hi", QuestionKind::Open)
            .with_origin(QuestionOrigin::Custom)
            .with_label("C_Custom1");
        q.set_id_label("C_Snacks").unwrap();
        assert_eq!(q.id_label(), Some("C_Snacks"));
    }

    #[test]
    fn set_option_keeps_outcome() {
        let mut q = gender().with_options([
            AnswerOption::plain("Yes"),
            AnswerOption::terminate("No"),
        ]);
        q.set_option(1, "Nope").unwrap();
        assert_eq!(q.options()[1].label(), "Nope");
        assert_eq!(q.options()[1].outcome(), Some(&OptionOutcome::Terminate));

        let err = q.set_option(5, "x").unwrap_err();
        assert!(matches!(err, BuildError::OptionOutOfRange { index: 5, len: 2, .. }));
    }

    #[test]
    fn blank_instructions_are_absent() {
        let mut q = gender().with_instructions("IF NO: TERMINATE.");
        assert_eq!(q.instructions(), Some("IF NO: TERMINATE."));
        q.set_instructions("   ");
        assert_eq!(q.instructions(), None);
    }

    #[test]
    fn kind_parse_defaults_to_single() {
        assert_eq!(QuestionKind::parse_lenient("multi"), QuestionKind::Multi);
        assert_eq!(QuestionKind::parse_lenient(" Open "), QuestionKind::Open);
        assert_eq!(QuestionKind::parse_lenient("ranking"), QuestionKind::Single);
        assert_eq!(QuestionKind::parse_lenient(""), QuestionKind::Single);
    }
}
