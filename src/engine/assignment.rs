use crate::crossfill_assert_eq_simple;
use crate::model::Puzzle;
use crate::model::VariableId;
use crate::model::Vocabulary;
use crate::model::WordId;

/// A partial mapping from variables to words, used as the working state of the search.
///
/// The assignment behaves as a stack: [`Assignment::unassign`] may only remove the most recently
/// assigned variable.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignment {
    values: Vec<Option<WordId>>,
    trail: Vec<VariableId>,
}

impl Assignment {
    pub(crate) fn new(num_variables: usize) -> Self {
        Assignment {
            values: vec![None; num_variables],
            trail: vec![],
        }
    }

    pub(crate) fn get(&self, variable: VariableId) -> Option<WordId> {
        self.values[variable.index()]
    }

    pub(crate) fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable.index()].is_some()
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    /// Whether every variable has a word.
    pub(crate) fn is_complete(&self) -> bool {
        self.trail.len() == self.values.len()
    }

    /// The assigned variables in the order they were assigned.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.trail.iter().filter_map(|&variable| {
            self.values[variable.index()].map(|word| (variable, word))
        })
    }

    pub(crate) fn assign(&mut self, variable: VariableId, word: WordId) {
        crossfill_assert_eq_simple!(self.values[variable.index()], None);

        self.values[variable.index()] = Some(word);
        self.trail.push(variable);
    }

    /// Remove the word of `variable`, which must be the most recently assigned variable.
    pub(crate) fn unassign(&mut self, variable: VariableId) {
        crossfill_assert_eq_simple!(
            self.trail.last(),
            Some(&variable),
            "only the most recent assignment can be undone"
        );

        let _ = self.trail.pop();
        self.values[variable.index()] = None;
    }

    /// Whether the word assigned to `variable` is consistent with every other assigned word:
    /// it has the right length, no other variable holds the same word, and it agrees with every
    /// assigned neighbour on the shared cell.
    ///
    /// If the rest of the assignment was consistent, this is equivalent to
    /// [`Assignment::is_consistent`].
    pub(crate) fn is_consistent_at(
        &self,
        variable: VariableId,
        puzzle: &Puzzle,
        vocabulary: &Vocabulary,
    ) -> bool {
        let Some(word) = self.get(variable) else {
            return true;
        };

        if vocabulary.word_length(word) != puzzle.variable(variable).length {
            return false;
        }

        let is_reused = self
            .iter()
            .any(|(other, other_word)| other != variable && other_word == word);
        if is_reused {
            return false;
        }

        puzzle.neighbors(variable).iter().all(|&neighbor| {
            match (self.get(neighbor), puzzle.overlap(variable, neighbor)) {
                (Some(neighbor_word), Some(overlap)) => {
                    overlap.other_offset < vocabulary.word_length(neighbor_word)
                        && vocabulary.letter(word, overlap.offset)
                            == vocabulary.letter(neighbor_word, overlap.other_offset)
                }
                _ => true,
            }
        })
    }

    /// Whether the whole assignment is consistent: all words are distinct, have the length of
    /// their variable, and crossing variables agree on their shared cell.
    pub(crate) fn is_consistent(&self, puzzle: &Puzzle, vocabulary: &Vocabulary) -> bool {
        self.trail
            .iter()
            .all(|&variable| self.is_consistent_at(variable, puzzle, vocabulary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::puzzle;

    fn word(vocabulary: &Vocabulary, word: &str) -> WordId {
        vocabulary.id_of(word).expect("word is in the vocabulary")
    }

    #[test]
    fn assignment_is_a_stack() {
        let puzzle = puzzle(&["___", "_##", "_##"]);
        let vocabulary = Vocabulary::new(["CAT", "COW"]);
        let mut assignment = Assignment::new(puzzle.num_variables());
        let mut variables = puzzle.variables();
        let across = variables.next().expect("across slot");
        let down = variables.next().expect("down slot");

        assignment.assign(across, word(&vocabulary, "CAT"));
        assignment.assign(down, word(&vocabulary, "COW"));
        assert!(assignment.is_complete());
        assert_eq!(assignment.num_assigned(), 2);

        assignment.unassign(down);
        assert!(!assignment.is_complete());
        assert!(assignment.is_assigned(across));
        assert!(!assignment.is_assigned(down));
    }

    #[test]
    #[should_panic]
    fn undoing_out_of_order_panics() {
        let puzzle = puzzle(&["___", "_##", "_##"]);
        let vocabulary = Vocabulary::new(["CAT", "COW"]);
        let mut assignment = Assignment::new(puzzle.num_variables());
        let mut variables = puzzle.variables();
        let across = variables.next().expect("across slot");
        let down = variables.next().expect("down slot");

        assignment.assign(across, word(&vocabulary, "CAT"));
        assignment.assign(down, word(&vocabulary, "COW"));
        assignment.unassign(across);
    }

    #[test]
    fn conflicting_letters_are_inconsistent() {
        let puzzle = puzzle(&["___", "_##", "_##"]);
        let vocabulary = Vocabulary::new(["CAT", "DOG"]);
        let mut assignment = Assignment::new(puzzle.num_variables());
        let mut variables = puzzle.variables();
        let across = variables.next().expect("across slot");
        let down = variables.next().expect("down slot");

        assignment.assign(across, word(&vocabulary, "CAT"));
        assert!(assignment.is_consistent(&puzzle, &vocabulary));

        assignment.assign(down, word(&vocabulary, "DOG"));
        assert!(!assignment.is_consistent_at(down, &puzzle, &vocabulary));
        assert!(!assignment.is_consistent(&puzzle, &vocabulary));
    }

    #[test]
    fn reused_words_are_inconsistent() {
        let puzzle = puzzle(&["___", "_##", "_##"]);
        let vocabulary = Vocabulary::new(["CAT"]);
        let mut assignment = Assignment::new(puzzle.num_variables());
        let mut variables = puzzle.variables();
        let across = variables.next().expect("across slot");
        let down = variables.next().expect("down slot");

        assignment.assign(across, word(&vocabulary, "CAT"));
        assignment.assign(down, word(&vocabulary, "CAT"));

        assert!(!assignment.is_consistent(&puzzle, &vocabulary));
    }

    #[test]
    fn words_of_the_wrong_length_are_inconsistent() {
        let puzzle = puzzle(&["___"]);
        let vocabulary = Vocabulary::new(["CATS"]);
        let mut assignment = Assignment::new(puzzle.num_variables());
        let variable = puzzle.variables().next().expect("one slot");

        assignment.assign(variable, word(&vocabulary, "CATS"));

        assert!(!assignment.is_consistent(&puzzle, &vocabulary));
    }
}
