//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single [`ValueSelector`].

use crate::branching::Brancher;
use crate::branching::LeastConstrainingValue;
use crate::branching::MinimumRemainingValues;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::model::VariableId;
use crate::model::WordId;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
#[derive(Debug, Default)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// The [`VariableSelector`] of the [`Brancher`], determines which (unassigned) variable to
    /// branch next on.
    pub(crate) variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`] determines in which order the words of the
    /// selected variable are tried.
    pub(crate) value_selector: ValueSelect,
}

/// Minimum remaining values with the degree tie-break, least constraining value ordering.
pub type DefaultBrancher =
    IndependentVariableValueBrancher<MinimumRemainingValues, LeastConstrainingValue>;

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        Self {
            variable_selector,
            value_selector,
        }
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        self.variable_selector.select_variable(context)
    }

    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId> {
        self.value_selector.order_values(variable, context)
    }
}
