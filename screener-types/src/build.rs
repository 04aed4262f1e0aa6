use crate::{BuildError, Question, QuestionId};

/// Where to insert a question into a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertAt {
    /// Append after the last question.
    #[default]
    End,

    /// Insert at this index; indices past the end append.
    Index(usize),
}

impl InsertAt {
    /// Position right after the 1-based question `number`.
    pub fn after(number: usize) -> Self {
        Self::Index(number)
    }

    fn resolve(self, len: usize) -> usize {
        match self {
            Self::End => len,
            Self::Index(index) => index.min(len),
        }
    }
}

/// One step up or down in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The ordered working document.
///
/// Order is the only structure: questions are rendered and exported in
/// stored order, numbered from 1. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Build {
    questions: Vec<Question>,
}

impl Build {
    /// Create an empty build.
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Create a build from questions. Later duplicates of an id are dropped.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let mut build = Self::new();
        for question in questions {
            if let Err(err) = build.insert(InsertAt::End, question) {
                tracing::warn!("{err}, dropping the duplicate");
            }
        }
        build
    }

    /// Get the questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Ids in order.
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the question with this id.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.position(id).is_some()
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Insert a question, returning the index it landed at.
    pub fn insert(&mut self, at: InsertAt, question: Question) -> Result<usize, BuildError> {
        if self.contains(question.id()) {
            return Err(BuildError::DuplicateId(question.id().clone()));
        }
        let index = at.resolve(self.questions.len());
        self.questions.insert(index, question);
        Ok(index)
    }

    /// Remove a question by id.
    pub fn remove(&mut self, id: &QuestionId) -> Result<Question, BuildError> {
        let index = self.index_of(id)?;
        Ok(self.questions.remove(index))
    }

    /// Move a question one step. Returns `false` when already at that edge.
    pub fn step(&mut self, id: &QuestionId, direction: Direction) -> Result<bool, BuildError> {
        let index = self.index_of(id)?;
        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.questions.len() => index + 1,
            _ => return Ok(false),
        };
        self.questions.swap(index, target);
        Ok(true)
    }

    /// Move a question to an absolute index, clamped to the last position.
    ///
    /// The question is taken out first, so afterwards it sits exactly at
    /// the returned index.
    pub fn move_to(&mut self, id: &QuestionId, index: usize) -> Result<usize, BuildError> {
        let current = self.index_of(id)?;
        let target = index.min(self.questions.len() - 1);
        if target != current {
            let question = self.questions.remove(current);
            self.questions.insert(target, question);
        }
        Ok(target)
    }

    /// Edit a question in place.
    pub fn edit<R>(
        &mut self,
        id: &QuestionId,
        f: impl FnOnce(&mut Question) -> R,
    ) -> Result<R, BuildError> {
        let index = self.index_of(id)?;
        Ok(f(&mut self.questions[index]))
    }

    /// Drop every question.
    pub fn clear(&mut self) {
        self.questions.clear();
    }

    fn index_of(&self, id: &QuestionId) -> Result<usize, BuildError> {
        self.position(id)
            .ok_or_else(|| BuildError::UnknownQuestion(id.clone()))
    }
}

impl<'a> IntoIterator for &'a Build {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;
    use pretty_assertions::assert_eq;

    fn q(id: &str) -> Question {
        Question::new(id, "Test", format!("Question {id}"), QuestionKind::Open)
    }

    fn abcde() -> Build {
        Build::from_questions(["a", "b", "c", "d", "e"].into_iter().map(q).collect())
    }

    fn ids(build: &Build) -> Vec<&str> {
        build.iter().map(|q| q.id().as_str()).collect()
    }

    #[test]
    fn insert_positions() {
        let mut build = abcde();
        assert_eq!(build.insert(InsertAt::End, q("end")).unwrap(), 5);
        assert_eq!(build.insert(InsertAt::Index(0), q("first")).unwrap(), 0);
        assert_eq!(build.insert(InsertAt::after(2), q("third")).unwrap(), 2);
        assert_eq!(build.insert(InsertAt::Index(99), q("clamped")).unwrap(), 8);
        assert_eq!(
            ids(&build),
            vec!["first", "a", "third", "b", "c", "d", "e", "end", "clamped"]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut build = abcde();
        assert_eq!(
            build.insert(InsertAt::End, q("c")),
            Err(BuildError::DuplicateId(QuestionId::new("c")))
        );
        assert_eq!(build.len(), 5);

        let deduped = Build::from_questions(vec![q("x"), q("y"), q("x")]);
        assert_eq!(ids(&deduped), vec!["x", "y"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut build = abcde();
        let removed = build.remove(&"c".into()).unwrap();
        assert_eq!(removed.id().as_str(), "c");
        assert_eq!(ids(&build), vec!["a", "b", "d", "e"]);
        assert!(build.remove(&"c".into()).unwrap_err().is_unknown_question());
    }

    #[test]
    fn step_stops_at_edges() {
        let mut build = abcde();
        assert!(!build.step(&"a".into(), Direction::Up).unwrap());
        assert!(!build.step(&"e".into(), Direction::Down).unwrap());
        assert!(build.step(&"c".into(), Direction::Up).unwrap());
        assert_eq!(ids(&build), vec!["a", "c", "b", "d", "e"]);
        assert!(build.step(&"a".into(), Direction::Down).unwrap());
        assert_eq!(ids(&build), vec!["c", "a", "b", "d", "e"]);
    }

    #[test]
    fn move_to_lands_on_target() {
        for from in 0..5 {
            for to in 0..5 {
                let mut build = abcde();
                let id = build.get(from).unwrap().id().clone();
                let before: std::collections::BTreeSet<_> = build.ids().into_iter().collect();

                assert_eq!(build.move_to(&id, to).unwrap(), to);

                let after: std::collections::BTreeSet<_> = build.ids().into_iter().collect();
                assert_eq!(build.len(), 5);
                assert_eq!(before, after);
                assert_eq!(build.position(&id), Some(to));
            }
        }
    }

    #[test]
    fn move_to_clamps_past_end() {
        let mut build = abcde();
        assert_eq!(build.move_to(&"a".into(), 42).unwrap(), 4);
        assert_eq!(ids(&build), vec!["b", "c", "d", "e", "a"]);
    }

    #[test]
    fn edit_in_place() {
        let mut build = abcde();
        build
            .edit(&"b".into(), |q| q.set_text("Edited"))
            .unwrap();
        assert_eq!(build.get(1).unwrap().text(), "Edited");
        assert!(build.edit(&"zzz".into(), |_| ()).is_err());
    }
}
