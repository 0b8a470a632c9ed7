use crate::engine::DomainStore;
use crate::model::Overlap;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;

/// Counts the work done by propagators.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PropagationCounters {
    pub(crate) num_revisions: u64,
    pub(crate) num_pruned_values: u64,
}

/// [`PropagationContextMut`] is passed to a [`super::Propagator`] when it propagates. It gives
/// read access to the puzzle and vocabulary, and is the only way a propagator can shrink a
/// domain.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    puzzle: &'a Puzzle,
    vocabulary: &'a Vocabulary,
    domains: &'a mut DomainStore,
    counters: &'a mut PropagationCounters,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(
        puzzle: &'a Puzzle,
        vocabulary: &'a Vocabulary,
        domains: &'a mut DomainStore,
        counters: &'a mut PropagationCounters,
    ) -> Self {
        PropagationContextMut {
            puzzle,
            vocabulary,
            domains,
            counters,
        }
    }

    pub(crate) fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    pub(crate) fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    pub(crate) fn domain(&self, variable: VariableId) -> &[WordId] {
        self.domains.domain(variable)
    }

    pub(crate) fn is_empty(&self, variable: VariableId) -> bool {
        self.domains.is_empty(variable)
    }

    pub(crate) fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.puzzle.overlap(x, y)
    }

    pub(crate) fn neighbors(&self, variable: VariableId) -> &'a [VariableId] {
        self.puzzle.neighbors(variable)
    }

    pub(crate) fn record_revision(&mut self) {
        self.counters.num_revisions += 1;
    }

    /// Remove every word from the domain of `variable` for which `keep` does not hold. Returns
    /// whether the domain changed.
    pub(crate) fn retain(
        &mut self,
        variable: VariableId,
        keep: impl FnMut(&WordId) -> bool,
    ) -> bool {
        let removed = self.domains.retain(variable, keep);
        self.counters.num_pruned_values += removed as u64;

        removed > 0
    }
}
