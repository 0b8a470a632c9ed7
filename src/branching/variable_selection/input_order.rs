use log::warn;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::model::VariableId;

/// A [`VariableSelector`] which selects the first unassigned variable in the order in which the
/// variables were provided.
#[derive(Clone, Debug)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: Vec<VariableId>) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder { variables }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_assigned(variable))
            .copied()
    }
}
