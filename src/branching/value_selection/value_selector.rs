use crate::branching::SelectionContext;
use crate::model::VariableId;
use crate::model::WordId;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks into
/// the solver and the methods required for ordering candidate words.
pub trait ValueSelector {
    /// Returns every word of the domain of `variable`, in the order in which the search should
    /// try them.
    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId>;
}

impl<T: ValueSelector + ?Sized> ValueSelector for Box<T> {
    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId> {
        (**self).order_values(variable, context)
    }
}
