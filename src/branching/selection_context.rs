use crate::engine::Assignment;
use crate::engine::DomainStore;
use crate::model::Overlap;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;

/// The context provided to the [`crate::branching::Brancher`]. It gives read-only access to the
/// puzzle, the (frozen) domains and the current partial assignment.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    puzzle: &'a Puzzle,
    vocabulary: &'a Vocabulary,
    domains: &'a DomainStore,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        puzzle: &'a Puzzle,
        vocabulary: &'a Vocabulary,
        domains: &'a DomainStore,
        assignment: &'a Assignment,
    ) -> Self {
        SelectionContext {
            puzzle,
            vocabulary,
            domains,
            assignment,
        }
    }

    pub fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    /// The variables without a word, in variable order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + 'a {
        let assignment = self.assignment;
        self.puzzle
            .variables()
            .filter(move |&variable| !assignment.is_assigned(variable))
    }

    pub fn domain(&self, variable: VariableId) -> &'a [WordId] {
        self.domains.domain(variable)
    }

    pub fn get_size_of_domain(&self, variable: VariableId) -> usize {
        self.domains.size(variable)
    }

    pub fn neighbors(&self, variable: VariableId) -> &'a [VariableId] {
        self.puzzle.neighbors(variable)
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.puzzle.overlap(x, y)
    }
}
