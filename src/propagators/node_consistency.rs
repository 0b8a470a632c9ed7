use log::debug;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;

/// Enforces the unary constraint of every variable: a word can only fill a slot of the same
/// length.
///
/// Running the propagator a second time removes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NodeConsistency;

impl Propagator for NodeConsistency {
    fn name(&self) -> &str {
        "NodeConsistency"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatus {
        let puzzle = context.puzzle();
        let vocabulary = context.vocabulary();
        let mut status = Ok(());

        for variable in puzzle.variables() {
            let length = puzzle.variable(variable).length;
            let _ = context.retain(variable, |&word| vocabulary.word_length(word) == length);

            if context.is_empty(variable) && status.is_ok() {
                debug!("No word of length {length} fits {}", puzzle.variable(variable));
                status = Err(EmptyDomain(variable));
            }
        }

        status
    }
}
