#[cfg(doc)]
use crate::branching::branchers::IndependentVariableValueBrancher;
use crate::branching::SelectionContext;
use crate::model::VariableId;
use crate::model::WordId;

/// A trait for defining a branching strategy.
///
/// In general, implementations of this trait define how the search of the solver proceeds: which
/// variable is assigned next, and in which order its candidate words are tried. See
/// [`IndependentVariableValueBrancher`] for the usual way of building one.
pub trait Brancher {
    /// Returns the next unassigned variable to branch on, or [`None`] if every variable is
    /// assigned.
    fn next_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;

    /// Returns the words of the domain of `variable` in the order in which they should be tried.
    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId>;
}
