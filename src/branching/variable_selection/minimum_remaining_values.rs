use std::cmp::Reverse;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest candidate words.
///
/// Ties are broken in favour of the variable with the most neighbours (the degree heuristic), and
/// then in favour of the smallest [`VariableId`], which is the row-major first slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumRemainingValues;

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        context.unassigned_variables().min_by_key(|&variable| {
            (
                context.get_size_of_domain(variable),
                Reverse(context.neighbors(variable).len()),
                variable,
            )
        })
    }
}
