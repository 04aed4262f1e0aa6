use screener_library::{assemble, sections};
use screener_types::{
    Build, BuildError, InsertAt, Mode, Question, QuestionId, QuestionKind, QuestionOrigin,
    RenderedQuestion, StudySetup,
};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Filling in the study setup.
    #[default]
    Setup,

    /// Editing the build.
    Builder,
}

/// One authoring session: the setup, the working build and the current view.
///
/// The session is owned by whoever drives it; exporters only ever see
/// shared borrows of the setup and build.
#[derive(Debug, Clone)]
pub struct Session {
    setup: StudySetup,
    build: Build,
    view: View,
    next_custom: usize,
}

impl Session {
    /// Start a session on the setup view with an empty build.
    pub fn new(setup: StudySetup) -> Self {
        Self {
            setup,
            build: Build::new(),
            view: View::Setup,
            next_custom: 1,
        }
    }

    pub fn setup(&self) -> &StudySetup {
        &self.setup
    }

    pub fn setup_mut(&mut self) -> &mut StudySetup {
        &mut self.setup
    }

    pub fn build(&self) -> &Build {
        &self.build
    }

    pub fn build_mut(&mut self) -> &mut Build {
        &mut self.build
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Replace the build with the standard order for the current mode and
    /// switch to the builder.
    pub fn load_standard(&mut self) {
        self.build = Build::from_questions(assemble(self.setup.mode));
        self.view = View::Builder;
        tracing::debug!(
            mode = %Mode::label_or_dash(self.setup.mode),
            questions = self.build.len(),
            "standard order loaded"
        );
    }

    /// Insert a new open-ended custom question. Returns its id.
    pub fn add_custom(&mut self, at: InsertAt) -> Result<QuestionId, BuildError> {
        let question = self.next_custom_question();
        let id = question.id().clone();
        let index = self.build.insert(at, question)?;
        tracing::debug!(%id, index, "custom question added");
        Ok(id)
    }

    /// Insert a fresh copy of a library question.
    pub fn add_from_library(
        &mut self,
        question: &Question,
        at: InsertAt,
    ) -> Result<usize, BuildError> {
        self.build.insert(at, question.clone())
    }

    /// Render the build against tokens built from the current setup.
    pub fn render(&self) -> Vec<RenderedQuestion> {
        RenderedQuestion::render_all(&self.build, &self.setup.tokens())
    }

    /// Discard the build and the setup and go back to the setup view.
    pub fn abandon(&mut self) {
        tracing::info!(questions = self.build.len(), "screener abandoned");
        *self = Self::new(StudySetup::default());
    }

    fn next_custom_question(&mut self) -> Question {
        loop {
            let n = self.next_custom;
            self.next_custom += 1;
            let id = QuestionId::new(format!("custom_{n}"));
            if self.build.contains(&id) {
                continue;
            }
            return Question::new(
                id,
                sections::CUSTOM,
                "New question about {{categoryName}}…",
                QuestionKind::Open,
            )
            .with_label(format!("C_Custom{n}"))
            .with_tags(["custom"])
            .with_origin(QuestionOrigin::Custom);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StudySetup::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use screener_library::universal;

    fn online() -> Session {
        let mut session = Session::new(StudySetup::new(Mode::Online).with_category("coffee"));
        session.load_standard();
        session
    }

    #[test]
    fn starts_on_setup_view() {
        let session = Session::new(StudySetup::default());
        assert_eq!(session.view(), View::Setup);
        assert!(session.build().is_empty());
    }

    #[test]
    fn load_standard_switches_view() {
        let session = online();
        assert_eq!(session.view(), View::Builder);
        assert_eq!(session.build().len(), universal().len() + 3);
    }

    #[test]
    fn load_standard_follows_mode_changes() {
        let mut session = online();
        session.setup_mut().mode = Some(Mode::InPersonShopperLab);
        session.load_standard();
        assert_eq!(session.build().get(1).unwrap().id().as_str(), "met_ok");

        session.setup_mut().set_mode_named("hybrid");
        session.load_standard();
        assert_eq!(session.build().len(), universal().len());
    }

    #[test]
    fn custom_questions_are_numbered() {
        let mut session = online();
        let len = session.build().len();

        let first = session.add_custom(InsertAt::End).unwrap();
        let second = session.add_custom(InsertAt::Index(0)).unwrap();

        assert_eq!(first.as_str(), "custom_1");
        assert_eq!(second.as_str(), "custom_2");
        assert_eq!(session.build().len(), len + 2);
        assert_eq!(session.build().get(0).unwrap().id(), &second);
        assert_eq!(session.build().get(len + 1).unwrap().id(), &first);

        let custom = session.build().find(&first).unwrap();
        assert_eq!(custom.id_label(), Some("C_Custom1"));
        assert_eq!(custom.section(), "Custom");
        assert_eq!(custom.kind(), QuestionKind::Open);
        assert!(custom.label_editable());
        assert!(custom.tags().contains("custom"));
    }

    #[test]
    fn custom_insert_clamps_to_length() {
        let mut session = online();
        let len = session.build().len();
        let id = session.add_custom(InsertAt::Index(500)).unwrap();
        assert_eq!(session.build().position(&id), Some(len));
    }

    #[test]
    fn custom_numbering_skips_taken_ids() {
        let mut session = online();
        let taken = Question::new("custom_1", "Custom", "Mine", QuestionKind::Open);
        session.add_from_library(&taken, InsertAt::End).unwrap();
        assert_eq!(session.add_custom(InsertAt::End).unwrap().as_str(), "custom_2");
    }

    #[test]
    fn library_copies_are_rejected_twice() {
        let mut session = online();
        let library = screener_library::StandardLibrary::new();
        let met = library.get(&"met_ok".into()).unwrap();

        session.add_from_library(met, InsertAt::after(1)).unwrap();
        assert_eq!(session.build().get(1).unwrap().id().as_str(), "met_ok");
        assert_eq!(
            session.add_from_library(met, InsertAt::End),
            Err(BuildError::DuplicateId("met_ok".into()))
        );
    }

    #[test]
    fn render_uses_current_category() {
        let mut session = online();
        let id = session.add_custom(InsertAt::End).unwrap();
        let index = session.build().position(&id).unwrap();

        assert_eq!(session.render()[index].text, "New question about coffee…");

        session.setup_mut().category_name = "tea".to_string();
        assert_eq!(session.render()[index].text, "New question about tea…");
        assert_eq!(
            session.build().find(&id).unwrap().text(),
            "New question about {{categoryName}}…"
        );
    }

    #[test]
    fn abandon_discards_everything() {
        let mut session = online();
        session.add_custom(InsertAt::End).unwrap();
        session.abandon();

        assert_eq!(session.view(), View::Setup);
        assert!(session.build().is_empty());
        assert_eq!(session.setup(), &StudySetup::default());
        session.load_standard();
        assert_eq!(session.add_custom(InsertAt::End).unwrap().as_str(), "custom_1");
    }
}
