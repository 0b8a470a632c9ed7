use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::model::VariableId;
use crate::model::WordId;

/// [`ValueSelector`] which tries the words in domain order, which is the alphabetical order of
/// the vocabulary.
#[derive(Clone, Copy, Debug, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, variable: VariableId, context: &SelectionContext) -> Vec<WordId> {
        context.domain(variable).to_vec()
    }
}
