//! # screener-wizard-dialoguer
//!
//! Dialoguer editor for screener sessions.
//!
//! This crate drives a `Session` from the command line: a setup form,
//! then a menu for adding, editing, reordering, removing and exporting
//! questions until the user leaves.
//!
//! ## Example
//!
//! ```rust,no_run
//! use screener::{Session, StudySetup};
//! use screener_wizard_dialoguer::DialoguerEditor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(StudySetup::default());
//!     DialoguerEditor::new().run(&mut session, |session| {
//!         Ok(format!("{} questions ready", session.build().len()))
//!     })?;
//!     Ok(())
//! }
//! ```

mod editor;

pub use editor::{DialoguerEditor, DialoguerError};
