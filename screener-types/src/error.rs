use crate::QuestionId;

/// Error type for edits applied to a `Build`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No question with this id is part of the build.
    #[error("No question with id '{0}' in the build")]
    UnknownQuestion(QuestionId),

    /// A question with this id is already part of the build.
    #[error("Question '{0}' is already in the build")]
    DuplicateId(QuestionId),

    /// Library codes are fixed; only custom questions may be relabelled.
    #[error("The code of question '{0}' is fixed")]
    LabelLocked(QuestionId),

    /// Option index past the end of the option list.
    #[error("Question '{id}' has {len} options, index {index} is out of range")]
    OptionOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

impl BuildError {
    /// Check if this error refers to a question that is not in the build.
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, Self::UnknownQuestion(_))
    }
}
