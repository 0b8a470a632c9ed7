use crate::branching::SelectionContext;
use crate::model::VariableId;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// into the solver and the methods required for selecting variables.
pub trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on. Should only
    /// return [`None`] when all variables are assigned.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;
}

impl<T: VariableSelector + ?Sized> VariableSelector for Box<T> {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        (**self).select_variable(context)
    }
}
