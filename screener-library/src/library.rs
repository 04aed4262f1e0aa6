use std::path::Path;

use screener_types::{Mode, Question, QuestionId, QuestionOrigin};

use crate::assembler;
use crate::csv::{self, CsvError};

/// A question matched by `StandardLibrary::search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub question: &'a Question,
    pub score: u32,
}

/// Every question a user can pick from: the universal list, all mode
/// blocks and anything imported from CSV.
#[derive(Debug, Clone)]
pub struct StandardLibrary {
    questions: Vec<Question>,
}

impl StandardLibrary {
    /// The built-in library, universal questions first, then each block.
    pub fn new() -> Self {
        let mut questions = assembler::universal();
        for mode in Mode::ALL {
            questions.extend(assembler::block(mode));
        }
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Add a question. Returns `false` if its id is already taken.
    pub fn add(&mut self, question: Question) -> bool {
        if self.get(question.id()).is_some() {
            tracing::warn!(id = %question.id(), "library already has this id, skipping");
            return false;
        }
        self.questions.push(question);
        true
    }

    /// Augment the library from CSV text. Returns the number of questions added.
    pub fn extend_from_csv(&mut self, text: &str) -> usize {
        let already = self
            .questions
            .iter()
            .filter(|q| q.origin() == QuestionOrigin::Imported)
            .count();
        let imported = csv::parse(text, already + 1);
        let mut added = 0;
        for question in imported {
            if self.add(question) {
                added += 1;
            }
        }
        tracing::debug!(added, total = self.len(), "library extended from csv");
        added
    }

    /// Augment the library from a CSV file.
    pub fn extend_from_csv_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CsvError> {
        let path = path.as_ref();
        let text = csv::read(path)?;
        let added = self.extend_from_csv(&text);
        tracing::info!(added, path = %path.display(), "library extended");
        Ok(added)
    }

    /// Rank questions against a free-text query.
    ///
    /// A tag equal to a query term scores 3, a term found in the text or
    /// section scores 1. Ties keep library order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .questions
            .iter()
            .filter_map(|question| {
                let score = score(question, &terms);
                (score > 0).then_some(SearchHit { question, score })
            })
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}

impl Default for StandardLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn score(question: &Question, terms: &[String]) -> u32 {
    let text = question.text().to_lowercase();
    let section = question.section().to_lowercase();
    terms
        .iter()
        .map(|term| {
            let tag = if question.tags().iter().any(|t| t.eq_ignore_ascii_case(term)) {
                3
            } else {
                0
            };
            let body = u32::from(text.contains(term.as_str()) || section.contains(term.as_str()));
            tag + body
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_types::QuestionKind;

    #[test]
    fn contains_every_standard_question_once() {
        let library = StandardLibrary::new();
        assert_eq!(library.len(), 20 + 3 + 1 + 7);
        assert!(library.get(&"met_rubber_allergy".into()).is_some());
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut library = StandardLibrary::new();
        let before = library.len();
        assert!(!library.add(Question::new("gender", "x", "y", QuestionKind::Open)));
        assert!(library.add(Question::new("pets", "x", "Do you own pets?", QuestionKind::Open)));
        assert_eq!(library.len(), before + 1);
    }

    #[test]
    fn tag_matches_rank_first() {
        let library = StandardLibrary::new();
        let hits = library.search("income", 3);
        assert_eq!(hits[0].question.id().as_str(), "income");
        assert_eq!(hits[0].score, 4);
    }

    #[test]
    fn search_limits_and_ignores_empty_query() {
        let library = StandardLibrary::new();
        assert_eq!(library.search("met", 2).len(), 2);
        assert!(library.search("   ", 10).is_empty());
        assert!(library.search("xylophone", 10).is_empty());
    }

    #[test]
    fn extend_from_csv_counts_new_rows() {
        let mut library = StandardLibrary::new();
        let added = library.extend_from_csv(
            "Pets,Do you own a dog?,single,Yes;No,,pets\nPets,,single,,,\n",
        );
        assert_eq!(added, 1);
        assert!(library.get(&"import_1".into()).is_some());

        let again = library.extend_from_csv("Pets,Do you own a cat?,single\n");
        assert_eq!(again, 1);
        assert!(library.get(&"import_2".into()).is_some());
    }

    #[test]
    fn extend_from_file_continues_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.csv");
        std::fs::write(&path, "\nsection,question\nSnacks,Favourite {{categoryName}}?,open\n")
            .unwrap();

        let mut library = StandardLibrary::new();
        library.extend_from_csv("Pets,Do you own a dog?,single\n");
        assert_eq!(library.extend_from_csv_file(&path).unwrap(), 1);

        let imported = library.get(&"import_2".into()).unwrap();
        assert_eq!(imported.text(), "Favourite {{categoryName}}?");
        assert_eq!(imported.id_label(), Some("I_2"));
    }

    #[test]
    fn extend_from_missing_file_is_an_error() {
        let mut library = StandardLibrary::new();
        let before = library.len();
        let err = library.extend_from_csv_file("/no/such/library.csv").unwrap_err();
        assert!(err.to_string().contains("/no/such/library.csv"));
        assert_eq!(library.len(), before);
    }

    #[test]
    fn equal_scores_keep_library_order() {
        let mut library = StandardLibrary::new();
        library.add(Question::new("zebra_b", "Zoo", "Seen a zebra lately?", QuestionKind::Open));
        library.add(Question::new("zebra_a", "Zoo", "Ever fed a zebra?", QuestionKind::Open));
        library.add(
            Question::new("zebra_tagged", "Zoo", "Pick an animal.", QuestionKind::Single)
                .with_tags(["zebra"]),
        );

        let ids: Vec<&str> = library
            .search("zebra", 10)
            .iter()
            .map(|hit| hit.question.id().as_str())
            .collect();
        assert_eq!(ids, ["zebra_tagged", "zebra_b", "zebra_a"]);
    }
}
