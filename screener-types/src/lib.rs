//! Core types for screener questionnaires.
//!
//! This crate provides the presentation-agnostic building blocks:
//! - `Question`, `QuestionKind` and `AnswerOption` - Individual screener items
//! - `Mode` and `StudySetup` - The variables of one authoring session
//! - `Build` - The ordered, user-editable working document
//! - `TokenMap` and `substitute` - `{{placeholder}}` resolution
//! - `RenderedQuestion` - A question resolved against the current tokens

mod error;
pub use error::BuildError;

mod question;
pub use question::{
    AnswerOption, DetailedOption, OptionOutcome, Question, QuestionId, QuestionKind,
    QuestionOrigin,
};

mod mode;
pub use mode::{Mode, UnknownMode};

mod setup;
pub use setup::StudySetup;

mod build;
pub use build::{Build, Direction, InsertAt};

mod tokens;
pub use tokens::{CATEGORY_NAME, TokenMap, placeholders, substitute, with_category};

mod render;
pub use render::{RenderedOption, RenderedQuestion, option_letter};
