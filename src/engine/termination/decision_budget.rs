use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a fixed number of decisions has been made.
#[derive(Clone, Copy, Debug)]
pub struct DecisionBudget {
    remaining: u64,
}

impl DecisionBudget {
    pub fn new(max_decisions: u64) -> Self {
        DecisionBudget {
            remaining: max_decisions,
        }
    }
}

impl TerminationCondition for DecisionBudget {
    fn should_stop(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }

        self.remaining -= 1;
        false
    }
}
