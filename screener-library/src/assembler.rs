//! Mode → ordered standard question set.

use std::collections::HashMap;
use std::sync::LazyLock;

use screener_types::{Mode, Question};

use crate::{baseline, blocks};

/// Index at which a mode block is inserted: right after the introduction.
pub const BLOCK_INSERT_INDEX: usize = 1;

struct Standard {
    universal: Vec<Question>,
    blocks: HashMap<Mode, Vec<Question>>,
}

static STANDARD: LazyLock<Standard> = LazyLock::new(|| Standard {
    universal: baseline::questions(),
    blocks: blocks::table().into_iter().collect(),
});

/// A copy of the universal baseline.
pub fn universal() -> Vec<Question> {
    STANDARD.universal.clone()
}

/// A copy of the conditional block for `mode`.
pub fn block(mode: Mode) -> Vec<Question> {
    STANDARD.blocks.get(&mode).cloned().unwrap_or_default()
}

/// Assemble the standard order for a mode.
///
/// `None` (an unrecognized mode) yields the universal baseline alone.
pub fn assemble(mode: Option<Mode>) -> Vec<Question> {
    let mut questions = universal();
    let block = mode.map(block).unwrap_or_default();
    let at = BLOCK_INSERT_INDEX.min(questions.len());
    let inserted = block.len();
    questions.splice(at..at, block);
    tracing::debug!(
        mode = ?mode,
        inserted,
        total = questions.len(),
        "assembled standard order"
    );
    questions
}

/// Assemble by mode name, falling back to the baseline for unknown names.
pub fn assemble_named(name: &str) -> Vec<Question> {
    match name.parse::<Mode>() {
        Ok(mode) => assemble(Some(mode)),
        Err(err) => {
            tracing::warn!("{err}, assembling the universal baseline only");
            assemble(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.id().as_str()).collect()
    }

    #[test]
    fn universal_starts_with_intro() {
        let universal = universal();
        assert_eq!(universal.len(), 20);
        assert_eq!(universal[0].id().as_str(), "intro_read");
        assert_eq!(universal[0].section(), sections::INTRODUCTION);
    }

    #[test]
    fn universal_is_a_copy_of_the_baseline() {
        assert_eq!(universal(), baseline::questions());
        assert_eq!(ids(&universal()), ids(&assemble(None)));
    }

    #[test]
    fn block_sizes() {
        assert_eq!(block(Mode::Online).len(), 3);
        assert_eq!(block(Mode::InPersonExternal).len(), 1);
        assert_eq!(block(Mode::InPersonShopperLab).len(), 7);
    }

    #[test]
    fn lengths_and_unique_ids() {
        let base = universal().len();
        for mode in Mode::ALL {
            let assembled = assemble(Some(mode));
            assert_eq!(assembled.len(), base + block(mode).len());
            let unique: HashSet<_> = assembled.iter().map(|q| q.id()).collect();
            assert_eq!(unique.len(), assembled.len(), "duplicate id for {mode}");
        }
        assert_eq!(assemble(None).len(), base);
    }

    #[test]
    fn block_sits_after_intro() {
        for mode in Mode::ALL {
            let assembled = assemble(Some(mode));
            let block = block(mode);
            assert_eq!(assembled[0].id().as_str(), "intro_read");
            assert_eq!(
                ids(&assembled[BLOCK_INSERT_INDEX..BLOCK_INSERT_INDEX + block.len()]),
                ids(&block)
            );
        }
    }

    #[test]
    fn rest_keeps_universal_order() {
        let universal = universal();
        for mode in Mode::ALL {
            let assembled = assemble(Some(mode));
            let rest: Vec<_> = assembled
                .iter()
                .enumerate()
                .filter(|(i, _)| *i == 0 || *i > block(mode).len())
                .map(|(_, q)| q.id().as_str())
                .collect();
            assert_eq!(rest, ids(&universal));
        }
    }

    #[test]
    fn results_are_independent_copies() {
        let mut first = assemble(Some(Mode::Online));
        let second = assemble(Some(Mode::Online));
        assert_eq!(first, second);

        first[0].set_text("changed");
        assert_ne!(first[0].text(), second[0].text());
        assert_eq!(assemble(Some(Mode::Online))[0].text(), second[0].text());
    }

    #[test]
    fn online_block_order() {
        let assembled = assemble(Some(Mode::Online));
        assert_eq!(
            ids(&assembled[..5]),
            vec!["intro_read", "tech_devices", "tech_comfort", "tech_rules", "gender"]
        );
    }

    #[test]
    fn unknown_name_is_baseline() {
        assert_eq!(assemble_named("hybrid"), universal());
        assert_eq!(assemble_named("in-person-external").len(), 21);
    }
}
