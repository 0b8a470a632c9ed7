#![cfg(test)]
//! This module exposes helpers that aid testing of the propagators and heuristics. The
//! [`TestSolver`] allows setting up specific scenarios (domains, partial assignments) under which
//! to test the various operations of a propagator or selector.
use super::propagation::PropagationContextMut;
use super::propagation::PropagationCounters;
use super::propagation::Propagator;
use super::Assignment;
use super::DomainStore;
use crate::basic_types::PropagationStatus;
use crate::branching::SelectionContext;
use crate::model::Direction;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;
use crate::propagators::arc_consistency;
use crate::propagators::NodeConsistency;

/// Build a puzzle from rows of `_` (open) and `#` (blocked) cells. All rows must have the same
/// length.
pub(crate) fn puzzle(rows: &[&str]) -> Puzzle {
    let structure: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|cell| cell == '_').collect())
        .collect();
    let width = structure.first().map_or(0, Vec::len);

    Puzzle::new(structure.len(), width, structure).expect("rows should have equal length")
}

/// A puzzle, vocabulary and domains together with a partial assignment, which can be used to test
/// propagators and selectors.
#[derive(Debug)]
pub(crate) struct TestSolver {
    pub(crate) puzzle: Puzzle,
    pub(crate) vocabulary: Vocabulary,
    pub(crate) domains: DomainStore,
    pub(crate) assignment: Assignment,
    pub(crate) counters: PropagationCounters,
}

#[allow(unused, reason = "not every test uses every helper")]
impl TestSolver {
    pub(crate) fn new(rows: &[&str], words: &[&str]) -> Self {
        let puzzle = puzzle(rows);
        let vocabulary = Vocabulary::new(words.iter().copied());
        let domains = DomainStore::new(&puzzle, &vocabulary);
        let assignment = Assignment::new(puzzle.num_variables());

        TestSolver {
            puzzle,
            vocabulary,
            domains,
            assignment,
            counters: PropagationCounters::default(),
        }
    }

    /// The variable starting at the given cell in the given direction.
    pub(crate) fn variable(&self, row: usize, column: usize, direction: Direction) -> VariableId {
        self.puzzle
            .variables()
            .find(|&id| {
                let variable = self.puzzle.variable(id);
                variable.row == row && variable.column == column && variable.direction == direction
            })
            .expect("no variable starts at the given cell")
    }

    pub(crate) fn word(&self, word: &str) -> WordId {
        self.vocabulary
            .id_of(word)
            .expect("the word should be in the vocabulary")
    }

    pub(crate) fn words(&self, ids: &[WordId]) -> Vec<&str> {
        ids.iter().map(|&id| self.vocabulary.word(id)).collect()
    }

    pub(crate) fn domain_words(&self, variable: VariableId) -> Vec<&str> {
        self.words(self.domains.domain(variable))
    }

    /// Restrict the domain of `variable` to the given words.
    pub(crate) fn set_domain(&mut self, variable: VariableId, words: &[&str]) {
        let keep: Vec<WordId> = words.iter().map(|word| self.word(word)).collect();
        let _ = self
            .domains
            .retain(variable, |word| keep.contains(word));
    }

    pub(crate) fn assign(&mut self, variable: VariableId, word: &str) {
        let word = self.word(word);
        self.assignment.assign(variable, word);
    }

    pub(crate) fn context(&self) -> SelectionContext<'_> {
        SelectionContext::new(
            &self.puzzle,
            &self.vocabulary,
            &self.domains,
            &self.assignment,
        )
    }

    pub(crate) fn propagate(&mut self, propagator: &impl Propagator) -> PropagationStatus {
        let context = PropagationContextMut::new(
            &self.puzzle,
            &self.vocabulary,
            &mut self.domains,
            &mut self.counters,
        );
        propagator.propagate(context)
    }

    pub(crate) fn enforce_node_consistency(&mut self) {
        self.propagate(&NodeConsistency)
            .expect("node consistency should not empty a domain");
    }

    pub(crate) fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        let mut context = PropagationContextMut::new(
            &self.puzzle,
            &self.vocabulary,
            &mut self.domains,
            &mut self.counters,
        );
        arc_consistency::revise(&mut context, x, y)
    }
}
